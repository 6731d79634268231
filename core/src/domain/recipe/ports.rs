use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::Recipe,
        value_objects::{DietaryTag, IngredientTag, MealSlot, RecipeSearchFilter},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    /// Text + dietary-flag search with pagination.
    fn search(
        &self,
        filter: RecipeSearchFilter,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    /// Case-insensitive exact title lookup.
    fn get_by_title(
        &self,
        title: String,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;

    /// Recipes that can fill `slot`, carry every tag in `dietary`, and whose
    /// title is not in `exclude_titles`.
    fn find_candidates_for_slot(
        &self,
        slot: MealSlot,
        dietary: Vec<DietaryTag>,
        exclude_titles: Vec<String>,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    /// Recipes that can fill `slot` and contain none of `excluded_ingredients`.
    fn find_for_slot_excluding(
        &self,
        slot: MealSlot,
        excluded_ingredients: Vec<IngredientTag>,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;
}

pub trait RecipeService: Send + Sync {
    fn search_recipes(
        &self,
        filter: RecipeSearchFilter,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn get_recipe_details(
        &self,
        title: String,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;
}
