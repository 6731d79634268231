//! In-memory repository fakes shared by the service tests.

use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    common::services::Service,
    crypto::ports::HasherRepository,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
    meal_plan::{
        entities::{MealPlanEntry, PlannedMeal},
        ports::MealPlanRepository,
    },
    recipe::{
        entities::{Nutrition, Recipe},
        ports::RecipeRepository,
        value_objects::{
            DietaryFlags, DietaryTag, IngredientFlags, IngredientTag, MealSlot, MealSlotFlags,
            RecipeSearchFilter, SeasonFlags,
        },
    },
    user::{
        entities::{User, UserConfig},
        ports::UserRepository,
    },
};

pub struct FakeUserRepository {
    pub user: Option<User>,
}

impl UserRepository for FakeUserRepository {
    async fn create_user(&self, user: User) -> Result<User, CoreError> {
        Ok(user)
    }

    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<User>, CoreError> {
        Ok(self.user.clone().filter(|u| u.id == user_id))
    }

    async fn get_by_email(&self, email: String) -> Result<Option<User>, CoreError> {
        Ok(self.user.clone().filter(|u| u.email == email))
    }

    async fn update_user(&self, user: User) -> Result<User, CoreError> {
        Ok(user)
    }
}

pub struct FakeRecipeRepository {
    pub recipes: Vec<Recipe>,
}

impl RecipeRepository for FakeRecipeRepository {
    async fn search(&self, filter: RecipeSearchFilter) -> Result<Vec<Recipe>, CoreError> {
        let query = filter.query.map(|q| q.to_lowercase());
        Ok(self
            .recipes
            .iter()
            .filter(|r| {
                query
                    .as_deref()
                    .is_none_or(|q| r.title.to_lowercase().contains(q))
            })
            .filter(|r| filter.dietary.iter().all(|t| r.dietary.has(*t)))
            .skip(filter.offset as usize)
            .take(filter.limit as usize)
            .cloned()
            .collect())
    }

    async fn get_by_title(&self, title: String) -> Result<Option<Recipe>, CoreError> {
        Ok(self
            .recipes
            .iter()
            .find(|r| r.title.eq_ignore_ascii_case(&title))
            .cloned())
    }

    async fn find_candidates_for_slot(
        &self,
        slot: MealSlot,
        dietary: Vec<DietaryTag>,
        exclude_titles: Vec<String>,
    ) -> Result<Vec<Recipe>, CoreError> {
        Ok(self
            .recipes
            .iter()
            .filter(|r| r.meal_slots.contains(slot))
            .filter(|r| dietary.iter().all(|t| r.dietary.has(*t)))
            .filter(|r| !exclude_titles.contains(&r.title))
            .cloned()
            .collect())
    }

    async fn find_for_slot_excluding(
        &self,
        slot: MealSlot,
        excluded: Vec<IngredientTag>,
    ) -> Result<Vec<Recipe>, CoreError> {
        Ok(self
            .recipes
            .iter()
            .filter(|r| r.meal_slots.contains(slot))
            .filter(|r| excluded.iter().all(|t| !r.contains.has(*t)))
            .cloned()
            .collect())
    }
}

#[derive(Clone)]
pub struct FakeMealPlanRepository {
    pub entries: Arc<Mutex<Vec<MealPlanEntry>>>,
}

impl MealPlanRepository for FakeMealPlanRepository {
    async fn titles_used_since(
        &self,
        user_id: Uuid,
        slot: MealSlot,
        since: NaiveDate,
    ) -> Result<Vec<String>, CoreError> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.user_id == user_id && e.meal_slot == slot && e.used_on > since)
            .map(|e| e.recipe_title.clone())
            .collect())
    }

    async fn create_entry(&self, entry: MealPlanEntry) -> Result<MealPlanEntry, CoreError> {
        self.entries.lock().unwrap().push(entry.clone());
        Ok(entry)
    }

    async fn get_planned_meals(&self, _user_id: Uuid) -> Result<Vec<PlannedMeal>, CoreError> {
        Ok(Vec::new())
    }
}

pub struct FakeHasherRepository;

impl HasherRepository for FakeHasherRepository {
    async fn hash_password(&self, password: String) -> Result<String, CoreError> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify_password(&self, password: String, hash: String) -> Result<bool, CoreError> {
        Ok(hash == format!("hashed:{password}"))
    }
}

pub struct FakeHealthCheckRepository;

impl HealthCheckRepository for FakeHealthCheckRepository {
    async fn health(&self) -> Result<u64, CoreError> {
        Ok(1)
    }

    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        Ok(DatabaseHealthStatus {
            ready: true,
            latency_ms: 1,
        })
    }
}

pub type FakeService = Service<
    FakeUserRepository,
    FakeRecipeRepository,
    FakeMealPlanRepository,
    FakeHasherRepository,
    FakeHealthCheckRepository,
>;

pub fn fake_service(
    user: Option<User>,
    recipes: Vec<Recipe>,
    entries: Arc<Mutex<Vec<MealPlanEntry>>>,
) -> FakeService {
    Service::new(
        FakeUserRepository { user },
        FakeRecipeRepository { recipes },
        FakeMealPlanRepository { entries },
        FakeHasherRepository,
        FakeHealthCheckRepository,
    )
}

pub fn test_user() -> User {
    User::new(UserConfig {
        username: "dina".to_string(),
        email: "dina@example.com".to_string(),
        password_hash: "hashed:pw".to_string(),
        date_birth: None,
        location: None,
        eats_pork: true,
        drinks_alcohol: true,
    })
}

pub fn test_recipe(title: &str, slots: MealSlotFlags, dietary: DietaryFlags) -> Recipe {
    let now = Utc::now();
    Recipe {
        id: crate::domain::common::generate_uuid_v7(),
        title: title.to_string(),
        image: None,
        description: None,
        nutrition: Nutrition::default(),
        rating: 0.0,
        ingredients: Vec::new(),
        directions: Vec::new(),
        categories: Vec::new(),
        published_at: None,
        meal_slots: slots,
        dietary,
        seasons: SeasonFlags::default(),
        contains: IngredientFlags::default(),
        created_at: now,
        updated_at: now,
    }
}

pub fn slot_flags(slot: MealSlot) -> MealSlotFlags {
    let mut flags = MealSlotFlags::default();
    match slot {
        MealSlot::Breakfast => flags.breakfast = true,
        MealSlot::Lunch => flags.lunch = true,
        MealSlot::Dinner => flags.dinner = true,
        MealSlot::Snack => flags.snack = true,
        MealSlot::Dessert => flags.dessert = true,
    }
    flags
}
