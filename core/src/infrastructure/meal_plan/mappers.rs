use sea_orm::ActiveValue::Set;

use crate::{
    domain::{common::entities::app_errors::CoreError, meal_plan::entities::MealPlanEntry},
    entity::meal_plan_entries,
};

/// Fallible because `meal_slot` is stored as text.
pub fn entry_from_model(model: &meal_plan_entries::Model) -> Result<MealPlanEntry, CoreError> {
    let meal_slot = model
        .meal_slot
        .parse()
        .map_err(|_| CoreError::InternalServerError)?;

    Ok(MealPlanEntry {
        id: model.id,
        user_id: model.user_id,
        recipe_id: model.recipe_id,
        recipe_title: model.recipe_title.clone(),
        meal_slot,
        day_index: model.day_index,
        used_on: model.used_on,
        created_at: model.created_at.to_utc(),
    })
}

pub fn to_active_model(entry: &MealPlanEntry) -> meal_plan_entries::ActiveModel {
    meal_plan_entries::ActiveModel {
        id: Set(entry.id),
        user_id: Set(entry.user_id),
        recipe_id: Set(entry.recipe_id),
        recipe_title: Set(entry.recipe_title.clone()),
        meal_slot: Set(entry.meal_slot.as_str().to_string()),
        day_index: Set(entry.day_index),
        used_on: Set(entry.used_on),
        created_at: Set(entry.created_at.fixed_offset()),
    }
}
