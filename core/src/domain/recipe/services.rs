use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    meal_plan::ports::MealPlanRepository,
    recipe::{
        entities::Recipe,
        ports::{RecipeRepository, RecipeService},
        value_objects::RecipeSearchFilter,
    },
    user::ports::UserRepository,
};

impl<U, R, M, H, HC> RecipeService for Service<U, R, M, H, HC>
where
    U: UserRepository,
    R: RecipeRepository,
    M: MealPlanRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
{
    async fn search_recipes(&self, filter: RecipeSearchFilter) -> Result<Vec<Recipe>, CoreError> {
        self.recipe_repository.search(filter).await
    }

    async fn get_recipe_details(&self, title: String) -> Result<Option<Recipe>, CoreError> {
        if title.trim().is_empty() {
            return Err(CoreError::InvalidInput("title must not be empty".into()));
        }

        self.recipe_repository.get_by_title(title).await
    }
}
