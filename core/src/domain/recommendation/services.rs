use rand::seq::SliceRandom;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    meal_plan::ports::MealPlanRepository,
    recipe::{ports::RecipeRepository, value_objects::IngredientTag},
    recommendation::{
        ports::RecommendationService,
        value_objects::{
            DailyRecommendations, DailyRecommendationsInput, NUM_RECOMMENDATIONS, slot_for_hour,
        },
    },
    user::ports::UserRepository,
};

impl<U, R, M, H, HC> RecommendationService for Service<U, R, M, H, HC>
where
    U: UserRepository,
    R: RecipeRepository,
    M: MealPlanRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
{
    async fn daily_recommendations(
        &self,
        input: DailyRecommendationsInput,
    ) -> Result<DailyRecommendations, CoreError> {
        let user = self
            .user_repository
            .get_by_id(input.user_id)
            .await?
            .ok_or(CoreError::UserNotFound)?;

        let mut excluded = Vec::new();
        if !user.eats_pork {
            excluded.push(IngredientTag::Pork);
        }
        if !user.drinks_alcohol {
            excluded.push(IngredientTag::Alcohol);
        }

        let meal_slot = slot_for_hour(input.current_time.hour, &mut rand::thread_rng());

        let candidates = self
            .recipe_repository
            .find_for_slot_excluding(meal_slot, excluded)
            .await?;

        let recipes = candidates
            .choose_multiple(&mut rand::thread_rng(), NUM_RECOMMENDATIONS)
            .cloned()
            .collect();

        Ok(DailyRecommendations { meal_slot, recipes })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        common::test_support::{fake_service, slot_flags, test_recipe, test_user},
        recipe::value_objects::{DietaryFlags, MealSlot},
        recommendation::value_objects::ClockTime,
    };

    #[tokio::test]
    async fn unknown_user_gets_no_recommendations() {
        let svc = fake_service(None, Vec::new(), Arc::new(Mutex::new(Vec::new())));

        let result = svc
            .daily_recommendations(DailyRecommendationsInput {
                user_id: Uuid::new_v4(),
                current_time: ClockTime { hour: 8, minute: 0 },
            })
            .await;

        assert_eq!(result.unwrap_err(), CoreError::UserNotFound);
    }

    #[tokio::test]
    async fn morning_request_samples_breakfast_recipes() {
        let user = test_user();
        let recipes = (0..20)
            .map(|i| {
                test_recipe(
                    &format!("breakfast-{i}"),
                    slot_flags(MealSlot::Breakfast),
                    DietaryFlags::default(),
                )
            })
            .chain(std::iter::once(test_recipe(
                "steak dinner",
                slot_flags(MealSlot::Dinner),
                DietaryFlags::default(),
            )))
            .collect();
        let svc = fake_service(Some(user.clone()), recipes, Arc::new(Mutex::new(Vec::new())));

        let recs = svc
            .daily_recommendations(DailyRecommendationsInput {
                user_id: user.id,
                current_time: ClockTime { hour: 8, minute: 30 },
            })
            .await
            .unwrap();

        assert_eq!(recs.meal_slot, MealSlot::Breakfast);
        assert_eq!(recs.recipes.len(), NUM_RECOMMENDATIONS);
        assert!(recs.recipes.iter().all(|r| r.meal_slots.breakfast));
    }

    #[tokio::test]
    async fn preferences_exclude_flagged_ingredients() {
        let mut user = test_user();
        user.eats_pork = false;
        user.drinks_alcohol = false;

        let mut pork = test_recipe(
            "pork belly rice",
            slot_flags(MealSlot::Lunch),
            DietaryFlags::default(),
        );
        pork.contains.pork = true;
        let mut boozy = test_recipe(
            "beer braised stew",
            slot_flags(MealSlot::Lunch),
            DietaryFlags::default(),
        );
        boozy.contains.alcohol = true;
        let plain = test_recipe(
            "nasi goreng",
            slot_flags(MealSlot::Lunch),
            DietaryFlags::default(),
        );

        let svc = fake_service(
            Some(user.clone()),
            vec![pork, boozy, plain],
            Arc::new(Mutex::new(Vec::new())),
        );

        let recs = svc
            .daily_recommendations(DailyRecommendationsInput {
                user_id: user.id,
                current_time: ClockTime {
                    hour: 12,
                    minute: 0,
                },
            })
            .await
            .unwrap();

        assert_eq!(recs.meal_slot, MealSlot::Lunch);
        assert_eq!(recs.recipes.len(), 1);
        assert_eq!(recs.recipes[0].title, "nasi goreng");
    }

    #[tokio::test]
    async fn fewer_candidates_than_requested_returns_them_all() {
        let user = test_user();
        let recipes = vec![
            test_recipe(
                "es campur",
                slot_flags(MealSlot::Dessert),
                DietaryFlags::default(),
            ),
            test_recipe(
                "klepon",
                slot_flags(MealSlot::Snack),
                DietaryFlags::default(),
            ),
        ];
        let svc = fake_service(Some(user.clone()), recipes, Arc::new(Mutex::new(Vec::new())));

        let recs = svc
            .daily_recommendations(DailyRecommendationsInput {
                user_id: user.id,
                current_time: ClockTime {
                    hour: 23,
                    minute: 15,
                },
            })
            .await
            .unwrap();

        assert!(recs.meal_slot == MealSlot::Snack || recs.meal_slot == MealSlot::Dessert);
        assert_eq!(recs.recipes.len(), 1);
    }
}
