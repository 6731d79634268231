use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: Option<String>,

    #[serde(default)]
    pub date_birth: Option<NaiveDate>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub eats_pork: Option<bool>,

    #[serde(default)]
    pub drinks_alcohol: Option<bool>,
}
