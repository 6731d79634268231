use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub date_birth: Option<Date>,
    pub location: Option<String>,
    pub eats_pork: bool,
    pub drinks_alcohol: bool,
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
