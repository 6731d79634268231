pub mod get_recipe_details;
pub mod search_recipes;
pub mod search_recipes_by_query;
