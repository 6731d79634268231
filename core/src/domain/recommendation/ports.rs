use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recommendation::value_objects::{DailyRecommendations, DailyRecommendationsInput},
};

pub trait RecommendationService: Send + Sync {
    /// Pick a meal slot for the provided time and sample matching recipes,
    /// honoring the user's consumption preferences.
    fn daily_recommendations(
        &self,
        input: DailyRecommendationsInput,
    ) -> impl Future<Output = Result<DailyRecommendations, CoreError>> + Send;
}
