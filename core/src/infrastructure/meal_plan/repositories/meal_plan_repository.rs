use std::collections::HashMap;

use chrono::NaiveDate;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        meal_plan::{
            entities::{MealPlanEntry, PlannedMeal},
            ports::MealPlanRepository,
        },
        recipe::{entities::Recipe, value_objects::MealSlot},
    },
    entity::{
        meal_plan_entries::{Column, Entity},
        recipes::{Column as RecipeColumn, Entity as RecipeEntity},
    },
    infrastructure::meal_plan::mappers::{entry_from_model, to_active_model},
};

#[derive(Debug, Clone)]
pub struct PostgresMealPlanRepository {
    pub db: DatabaseConnection,
}

impl PostgresMealPlanRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl MealPlanRepository for PostgresMealPlanRepository {
    async fn titles_used_since(
        &self,
        user_id: Uuid,
        slot: MealSlot,
        since: NaiveDate,
    ) -> Result<Vec<String>, CoreError> {
        let titles: Vec<String> = Entity::find()
            .select_only()
            .column(Column::RecipeTitle)
            .filter(Column::UserId.eq(user_id))
            .filter(Column::MealSlot.eq(slot.as_str()))
            .filter(Column::UsedOn.gt(since))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load cooldown titles: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(titles)
    }

    async fn create_entry(&self, entry: MealPlanEntry) -> Result<MealPlanEntry, CoreError> {
        let created = Entity::insert(to_active_model(&entry))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create meal plan entry: {}", e);
                CoreError::InternalServerError
            })?;

        entry_from_model(&created)
    }

    async fn get_planned_meals(&self, user_id: Uuid) -> Result<Vec<PlannedMeal>, CoreError> {
        let entries = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::DayIndex)
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load meal plan entries: {}", e);
                CoreError::InternalServerError
            })?;

        let recipe_ids: Vec<Uuid> = entries.iter().map(|e| e.recipe_id).collect();
        let recipes = if recipe_ids.is_empty() {
            Vec::new()
        } else {
            RecipeEntity::find()
                .filter(RecipeColumn::Id.is_in(recipe_ids))
                .all(&self.db)
                .await
                .map_err(|e| {
                    error!("Failed to load planned recipes: {}", e);
                    CoreError::InternalServerError
                })?
        };

        let recipe_map: HashMap<Uuid, Recipe> =
            recipes.iter().map(|m| (m.id, Recipe::from(m))).collect();

        let mut result = Vec::new();
        for model in &entries {
            let entry = entry_from_model(model)?;
            if let Some(recipe) = recipe_map.get(&model.recipe_id) {
                result.push(PlannedMeal {
                    entry,
                    recipe: recipe.clone(),
                });
            }
        }

        Ok(result)
    }
}
