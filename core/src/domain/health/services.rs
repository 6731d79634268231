use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    meal_plan::ports::MealPlanRepository,
    recipe::ports::RecipeRepository,
    user::ports::UserRepository,
};

impl<U, R, M, H, HC> HealthCheckService for Service<U, R, M, H, HC>
where
    U: UserRepository,
    R: RecipeRepository,
    M: MealPlanRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
{
    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }

    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readiness().await
    }
}
