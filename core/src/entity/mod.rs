pub mod meal_plan_entries;
pub mod recipes;
pub mod users;
