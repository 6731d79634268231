use crate::{
    domain::recipe::{
        entities::{Nutrition, Recipe},
        value_objects::{DietaryFlags, IngredientFlags, MealSlotFlags, SeasonFlags},
    },
    entity::recipes,
};

/// JSONB columns hold plain string arrays; anything else maps to empty.
fn string_array(value: &serde_json::Value) -> Vec<String> {
    serde_json::from_value(value.clone()).unwrap_or_default()
}

impl From<&recipes::Model> for Recipe {
    fn from(model: &recipes::Model) -> Self {
        Self {
            id: model.id,
            title: model.title.clone(),
            image: model.image.clone(),
            description: model.description.clone(),
            nutrition: Nutrition {
                calories: model.calories,
                protein: model.protein,
                fat: model.fat,
                sodium: model.sodium,
            },
            rating: model.rating,
            ingredients: string_array(&model.ingredients),
            directions: string_array(&model.directions),
            categories: string_array(&model.categories),
            published_at: model.published_at,
            meal_slots: MealSlotFlags {
                breakfast: model.is_breakfast,
                lunch: model.is_lunch,
                dinner: model.is_dinner,
                snack: model.is_snack,
                dessert: model.is_dessert,
            },
            dietary: DietaryFlags {
                vegetarian: model.is_vegetarian,
                vegan: model.is_vegan,
                pescatarian: model.is_pescatarian,
                paleo: model.is_paleo,
                dairy_free: model.is_dairy_free,
                fat_free: model.is_fat_free,
                peanut_free: model.is_peanut_free,
                soy_free: model.is_soy_free,
                wheat_free: model.is_wheat_free,
                low_carb: model.is_low_carb,
                low_cal: model.is_low_cal,
                low_fat: model.is_low_fat,
                low_sodium: model.is_low_sodium,
                low_sugar: model.is_low_sugar,
                low_cholesterol: model.is_low_cholesterol,
            },
            seasons: SeasonFlags {
                winter: model.is_winter,
                spring: model.is_spring,
                summer: model.is_summer,
                fall: model.is_fall,
            },
            contains: IngredientFlags {
                pork: model.has_pork,
                alcohol: model.has_alcohol,
                beef: model.has_beef,
                bread: model.has_bread,
                butter: model.has_butter,
                cabbage: model.has_cabbage,
                carrot: model.has_carrot,
                cheese: model.has_cheese,
                chicken: model.has_chicken,
                egg: model.has_egg,
                eggplant: model.has_eggplant,
                fish: model.has_fish,
                onion: model.has_onion,
                pasta: model.has_pasta,
                peanut: model.has_peanut,
                potato: model.has_potato,
                rice: model.has_rice,
                shrimp: model.has_shrimp,
                tofu: model.has_tofu,
                tomato: model.has_tomato,
                zucchini: model.has_zucchini,
            },
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<recipes::Model> for Recipe {
    fn from(model: recipes::Model) -> Self {
        Self::from(&model)
    }
}
