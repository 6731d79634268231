use crate::domain::{
    crypto::ports::HasherRepository, health::ports::HealthCheckRepository,
    meal_plan::ports::MealPlanRepository, recipe::ports::RecipeRepository,
    user::ports::UserRepository,
};

/// Concrete service carrier. Every domain service trait is implemented on
/// this struct, generic over the repository ports it touches.
#[derive(Debug, Clone)]
pub struct Service<U, R, M, H, HC>
where
    U: UserRepository,
    R: RecipeRepository,
    M: MealPlanRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
{
    pub user_repository: U,
    pub recipe_repository: R,
    pub meal_plan_repository: M,
    pub hasher_repository: H,
    pub health_check_repository: HC,
}

impl<U, R, M, H, HC> Service<U, R, M, H, HC>
where
    U: UserRepository,
    R: RecipeRepository,
    M: MealPlanRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
{
    pub fn new(
        user_repository: U,
        recipe_repository: R,
        meal_plan_repository: M,
        hasher_repository: H,
        health_check_repository: HC,
    ) -> Self {
        Self {
            user_repository,
            recipe_repository,
            meal_plan_repository,
            hasher_repository,
            health_check_repository,
        }
    }
}
