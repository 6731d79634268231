use chrono::{Duration, Utc};
use rand::seq::SliceRandom;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    meal_plan::{
        entities::{MealPlanEntry, MealPlanEntryConfig, PlannedMeal},
        ports::{MealPlanRepository, MealPlanService},
        value_objects::{
            COOLDOWN_DAYS, DayPlan, GenerateMealPlanInput, PLAN_DAYS, PlannedMealSummary,
            WeeklyMealPlan,
        },
    },
    recipe::{ports::RecipeRepository, value_objects::MealSlot},
    user::ports::UserRepository,
};

impl<U, R, M, H, HC> MealPlanService for Service<U, R, M, H, HC>
where
    U: UserRepository,
    R: RecipeRepository,
    M: MealPlanRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
{
    async fn generate_weekly_plan(
        &self,
        input: GenerateMealPlanInput,
    ) -> Result<WeeklyMealPlan, CoreError> {
        self.user_repository
            .get_by_id(input.user_id)
            .await?
            .ok_or(CoreError::UserNotFound)?;

        let today = Utc::now().date_naive();
        let cooldown_start = today - Duration::days(COOLDOWN_DAYS);

        let mut days = Vec::with_capacity(PLAN_DAYS as usize);

        for day_index in 1..=PLAN_DAYS {
            let mut meals = Vec::new();

            for slot in MealSlot::ALL {
                // Re-read the cooldown set every iteration: picks made earlier
                // in this same generation must not repeat for the same slot.
                let recent = self
                    .meal_plan_repository
                    .titles_used_since(input.user_id, slot, cooldown_start)
                    .await?;

                let candidates = self
                    .recipe_repository
                    .find_candidates_for_slot(slot, input.tags.clone(), recent)
                    .await?;

                let Some(recipe) = candidates.choose(&mut rand::thread_rng()) else {
                    // Nothing eligible for this slot today; leave the cell empty.
                    continue;
                };

                let entry = MealPlanEntry::new(MealPlanEntryConfig {
                    user_id: input.user_id,
                    recipe_id: recipe.id,
                    recipe_title: recipe.title.clone(),
                    meal_slot: slot,
                    day_index: day_index as i16,
                    used_on: today,
                });

                self.meal_plan_repository.create_entry(entry).await?;

                meals.push(PlannedMealSummary::from_recipe(recipe, slot));
            }

            days.push(DayPlan {
                day_index: day_index as i16,
                meals,
            });
        }

        Ok(WeeklyMealPlan { days })
    }

    async fn get_user_plan(&self, user_id: Uuid) -> Result<Vec<PlannedMeal>, CoreError> {
        self.user_repository
            .get_by_id(user_id)
            .await?
            .ok_or(CoreError::UserNotFound)?;

        self.meal_plan_repository.get_planned_meals(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::domain::{
        common::test_support::{fake_service, slot_flags, test_recipe, test_user},
        recipe::value_objects::{DietaryFlags, DietaryTag, MealSlotFlags},
    };

    fn all_slot_recipes(per_slot: usize) -> Vec<crate::domain::recipe::entities::Recipe> {
        let mut recipes = Vec::new();
        for slot in MealSlot::ALL {
            for i in 0..per_slot {
                recipes.push(test_recipe(
                    &format!("{}-{}", slot.as_str(), i),
                    slot_flags(slot),
                    DietaryFlags::default(),
                ));
            }
        }
        recipes
    }

    #[tokio::test]
    async fn unknown_user_cannot_generate_a_plan() {
        let entries = Arc::new(Mutex::new(Vec::new()));
        let svc = fake_service(None, all_slot_recipes(7), entries);

        let result = svc
            .generate_weekly_plan(GenerateMealPlanInput {
                user_id: Uuid::new_v4(),
                tags: Vec::new(),
            })
            .await;

        assert_eq!(result.unwrap_err(), CoreError::UserNotFound);
    }

    #[tokio::test]
    async fn full_week_never_repeats_a_slot_recipe() {
        let user = test_user();
        let entries = Arc::new(Mutex::new(Vec::new()));
        let svc = fake_service(Some(user.clone()), all_slot_recipes(7), entries.clone());

        let plan = svc
            .generate_weekly_plan(GenerateMealPlanInput {
                user_id: user.id,
                tags: Vec::new(),
            })
            .await
            .unwrap();

        assert_eq!(plan.days.len(), 7);
        assert!(plan.days.iter().all(|d| d.meals.len() == 5));

        let stored = entries.lock().unwrap();
        assert_eq!(stored.len(), 35);

        // Cooldown guarantees a (slot, title) pair is used at most once.
        let mut seen = HashSet::new();
        for entry in stored.iter() {
            assert!(seen.insert((entry.meal_slot, entry.recipe_title.clone())));
        }
    }

    #[tokio::test]
    async fn exhausted_candidates_leave_later_days_empty() {
        let user = test_user();
        let entries = Arc::new(Mutex::new(Vec::new()));
        // One recipe per slot: day 1 consumes all of them.
        let svc = fake_service(Some(user.clone()), all_slot_recipes(1), entries.clone());

        let plan = svc
            .generate_weekly_plan(GenerateMealPlanInput {
                user_id: user.id,
                tags: Vec::new(),
            })
            .await
            .unwrap();

        assert_eq!(plan.days[0].meals.len(), 5);
        for day in &plan.days[1..] {
            assert!(day.meals.is_empty());
        }
        assert_eq!(entries.lock().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn tags_restrict_the_candidate_pool() {
        let user = test_user();
        let entries = Arc::new(Mutex::new(Vec::new()));

        let breakfast = MealSlotFlags {
            breakfast: true,
            ..Default::default()
        };
        let vegan = DietaryFlags {
            vegan: true,
            ..Default::default()
        };
        let recipes = vec![
            test_recipe("tofu scramble", breakfast, vegan),
            test_recipe("bacon omelette", breakfast, DietaryFlags::default()),
        ];
        let svc = fake_service(Some(user.clone()), recipes, entries.clone());

        svc.generate_weekly_plan(GenerateMealPlanInput {
            user_id: user.id,
            tags: vec![DietaryTag::Vegan],
        })
        .await
        .unwrap();

        let stored = entries.lock().unwrap();
        assert!(!stored.is_empty());
        assert!(stored.iter().all(|e| e.recipe_title == "tofu scramble"));
    }

    #[tokio::test]
    async fn summary_truncates_dietary_and_ingredient_labels() {
        let slots = MealSlotFlags {
            dinner: true,
            ..Default::default()
        };
        let mut r = test_recipe("laksa", slots, DietaryFlags::default());
        r.dietary.vegetarian = true;
        r.dietary.dairy_free = true;
        r.dietary.low_carb = true;
        r.contains.onion = true;
        r.contains.rice = true;
        r.contains.shrimp = true;
        r.contains.tofu = true;

        let summary = PlannedMealSummary::from_recipe(&r, MealSlot::Dinner);

        assert_eq!(summary.dietary.len(), 2);
        assert_eq!(summary.ingredients.len(), 3);
        assert_eq!(summary.dietary, vec!["vegetarian", "dairy free"]);
    }
}
