use std::future::Future;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal_plan::{
        entities::{MealPlanEntry, PlannedMeal},
        value_objects::{GenerateMealPlanInput, WeeklyMealPlan},
    },
    recipe::value_objects::MealSlot,
};

#[cfg_attr(test, mockall::automock)]
pub trait MealPlanRepository: Send + Sync {
    /// Titles this user has used for `slot` strictly after `since`.
    fn titles_used_since(
        &self,
        user_id: Uuid,
        slot: MealSlot,
        since: NaiveDate,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn create_entry(
        &self,
        entry: MealPlanEntry,
    ) -> impl Future<Output = Result<MealPlanEntry, CoreError>> + Send;

    /// All of a user's entries joined to their recipes.
    fn get_planned_meals(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<PlannedMeal>, CoreError>> + Send;
}

pub trait MealPlanService: Send + Sync {
    fn generate_weekly_plan(
        &self,
        input: GenerateMealPlanInput,
    ) -> impl Future<Output = Result<WeeklyMealPlan, CoreError>> + Send;

    fn get_user_plan(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<PlannedMeal>, CoreError>> + Send;
}
