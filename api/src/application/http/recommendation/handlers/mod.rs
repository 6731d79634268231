pub mod daily_recommendations;
