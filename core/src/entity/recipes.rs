use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "recipes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub title: String,
    pub image: Option<String>,
    pub description: Option<String>,
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub sodium: f64,
    pub rating: f64,
    pub ingredients: Json,
    pub directions: Json,
    pub categories: Json,
    pub published_at: Option<Date>,

    pub is_breakfast: bool,
    pub is_lunch: bool,
    pub is_dinner: bool,
    pub is_snack: bool,
    pub is_dessert: bool,

    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub is_pescatarian: bool,
    pub is_paleo: bool,
    pub is_dairy_free: bool,
    pub is_fat_free: bool,
    pub is_peanut_free: bool,
    pub is_soy_free: bool,
    pub is_wheat_free: bool,
    pub is_low_carb: bool,
    pub is_low_cal: bool,
    pub is_low_fat: bool,
    pub is_low_sodium: bool,
    pub is_low_sugar: bool,
    pub is_low_cholesterol: bool,

    pub is_winter: bool,
    pub is_spring: bool,
    pub is_summer: bool,
    pub is_fall: bool,

    pub has_pork: bool,
    pub has_alcohol: bool,
    pub has_beef: bool,
    pub has_bread: bool,
    pub has_butter: bool,
    pub has_cabbage: bool,
    pub has_carrot: bool,
    pub has_cheese: bool,
    pub has_chicken: bool,
    pub has_egg: bool,
    pub has_eggplant: bool,
    pub has_fish: bool,
    pub has_onion: bool,
    pub has_pasta: bool,
    pub has_peanut: bool,
    pub has_potato: bool,
    pub has_rice: bool,
    pub has_shrimp: bool,
    pub has_tofu: bool,
    pub has_tomato: bool,
    pub has_zucchini: bool,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::meal_plan_entries::Entity")]
    MealPlanEntries,
}

impl Related<super::meal_plan_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MealPlanEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
