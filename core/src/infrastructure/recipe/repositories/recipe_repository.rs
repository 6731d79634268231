use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    sea_query::{Expr, Func, extension::postgres::PgExpr},
};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        recipe::{
            entities::Recipe,
            ports::RecipeRepository,
            value_objects::{DietaryTag, IngredientTag, MealSlot, RecipeSearchFilter},
        },
    },
    entity::recipes::{Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresRecipeRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn slot_column(slot: MealSlot) -> Column {
    match slot {
        MealSlot::Breakfast => Column::IsBreakfast,
        MealSlot::Lunch => Column::IsLunch,
        MealSlot::Dinner => Column::IsDinner,
        MealSlot::Snack => Column::IsSnack,
        MealSlot::Dessert => Column::IsDessert,
    }
}

fn dietary_column(tag: DietaryTag) -> Column {
    match tag {
        DietaryTag::Vegetarian => Column::IsVegetarian,
        DietaryTag::Vegan => Column::IsVegan,
        DietaryTag::Pescatarian => Column::IsPescatarian,
        DietaryTag::Paleo => Column::IsPaleo,
        DietaryTag::DairyFree => Column::IsDairyFree,
        DietaryTag::FatFree => Column::IsFatFree,
        DietaryTag::PeanutFree => Column::IsPeanutFree,
        DietaryTag::SoyFree => Column::IsSoyFree,
        DietaryTag::WheatFree => Column::IsWheatFree,
        DietaryTag::LowCarb => Column::IsLowCarb,
        DietaryTag::LowCal => Column::IsLowCal,
        DietaryTag::LowFat => Column::IsLowFat,
        DietaryTag::LowSodium => Column::IsLowSodium,
        DietaryTag::LowSugar => Column::IsLowSugar,
        DietaryTag::LowCholesterol => Column::IsLowCholesterol,
    }
}

fn ingredient_column(tag: IngredientTag) -> Column {
    match tag {
        IngredientTag::Pork => Column::HasPork,
        IngredientTag::Alcohol => Column::HasAlcohol,
        IngredientTag::Beef => Column::HasBeef,
        IngredientTag::Bread => Column::HasBread,
        IngredientTag::Butter => Column::HasButter,
        IngredientTag::Cabbage => Column::HasCabbage,
        IngredientTag::Carrot => Column::HasCarrot,
        IngredientTag::Cheese => Column::HasCheese,
        IngredientTag::Chicken => Column::HasChicken,
        IngredientTag::Egg => Column::HasEgg,
        IngredientTag::Eggplant => Column::HasEggplant,
        IngredientTag::Fish => Column::HasFish,
        IngredientTag::Onion => Column::HasOnion,
        IngredientTag::Pasta => Column::HasPasta,
        IngredientTag::Peanut => Column::HasPeanut,
        IngredientTag::Potato => Column::HasPotato,
        IngredientTag::Rice => Column::HasRice,
        IngredientTag::Shrimp => Column::HasShrimp,
        IngredientTag::Tofu => Column::HasTofu,
        IngredientTag::Tomato => Column::HasTomato,
        IngredientTag::Zucchini => Column::HasZucchini,
    }
}

impl RecipeRepository for PostgresRecipeRepository {
    async fn search(&self, filter: RecipeSearchFilter) -> Result<Vec<Recipe>, CoreError> {
        let mut condition = Condition::all();

        if let Some(ref query) = filter.query
            && !query.is_empty()
        {
            let pattern = format!("%{query}%");
            condition = condition.add(
                Condition::any()
                    .add(Expr::col(Column::Title).ilike(pattern.clone()))
                    .add(Expr::cust_with_values(
                        "CAST(ingredients AS TEXT) ILIKE ?",
                        [pattern],
                    )),
            );
        }

        for tag in &filter.dietary {
            condition = condition.add(dietary_column(*tag).eq(true));
        }

        let models = Entity::find()
            .filter(condition)
            .order_by_asc(Column::Title)
            .offset(filter.offset)
            .limit(filter.limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to search recipes: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(models.iter().map(Recipe::from).collect())
    }

    async fn get_by_title(&self, title: String) -> Result<Option<Recipe>, CoreError> {
        let model = Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(Column::Title)))
                    .eq(title.trim().to_lowercase()),
            )
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipe by title: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(model.map(Recipe::from))
    }

    async fn find_candidates_for_slot(
        &self,
        slot: MealSlot,
        dietary: Vec<DietaryTag>,
        exclude_titles: Vec<String>,
    ) -> Result<Vec<Recipe>, CoreError> {
        let mut condition = Condition::all().add(slot_column(slot).eq(true));

        for tag in dietary {
            condition = condition.add(dietary_column(tag).eq(true));
        }

        if !exclude_titles.is_empty() {
            condition = condition.add(Column::Title.is_not_in(exclude_titles));
        }

        let models = Entity::find()
            .filter(condition)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to find slot candidates: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(models.iter().map(Recipe::from).collect())
    }

    async fn find_for_slot_excluding(
        &self,
        slot: MealSlot,
        excluded_ingredients: Vec<IngredientTag>,
    ) -> Result<Vec<Recipe>, CoreError> {
        let mut condition = Condition::all().add(slot_column(slot).eq(true));

        for tag in excluded_ingredients {
            condition = condition.add(ingredient_column(tag).eq(false));
        }

        let models = Entity::find()
            .filter(condition)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to find recipes for slot: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(models.iter().map(Recipe::from).collect())
    }
}
