use crate::application::http::{
    authentication::router::AuthenticationApiDoc, meal_plan::router::MealPlanApiDoc,
    recipe::router::RecipeApiDoc, recommendation::router::RecommendationApiDoc,
    user::router::UserApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NutriDish API"
    ),
    paths(
        crate::application::http::health::health,
        crate::application::http::health::readiness,
    ),
    nest(
        (path = "/auth", api = AuthenticationApiDoc),
        (path = "/users", api = UserApiDoc),
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/meal-plans", api = MealPlanApiDoc),
        (path = "/daily-recommendations", api = RecommendationApiDoc),
    )
)]
pub struct ApiDoc;
