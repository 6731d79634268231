use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterUserInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub date_birth: Option<NaiveDate>,
    pub location: Option<String>,
    pub eats_pork: Option<bool>,
    pub drinks_alcohol: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginUserInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserInput {
    pub user_id: Uuid,
    pub username: Option<String>,
    pub date_birth: Option<NaiveDate>,
    pub location: Option<String>,
    pub eats_pork: Option<bool>,
    pub drinks_alcohol: Option<bool>,
}
