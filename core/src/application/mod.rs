use crate::{
    domain::common::{NutriDishConfig, services::Service},
    infrastructure::{
        crypto::Argon2HasherRepository,
        db::postgres::{Postgres, PostgresConfig},
        health::PostgresHealthCheckRepository,
        meal_plan::PostgresMealPlanRepository,
        recipe::PostgresRecipeRepository,
        user::PostgresUserRepository,
    },
};

pub type NutriDishService = Service<
    PostgresUserRepository,
    PostgresRecipeRepository,
    PostgresMealPlanRepository,
    Argon2HasherRepository,
    PostgresHealthCheckRepository,
>;

/// Connect to Postgres, run migrations and wire every repository into the
/// concrete service.
pub async fn create_service(config: NutriDishConfig) -> Result<NutriDishService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;
    let db = postgres.get_db();

    Ok(Service::new(
        PostgresUserRepository::new(db.clone()),
        PostgresRecipeRepository::new(db.clone()),
        PostgresMealPlanRepository::new(db.clone()),
        Argon2HasherRepository::new(),
        PostgresHealthCheckRepository::new(db),
    ))
}
