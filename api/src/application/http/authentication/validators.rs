use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterValidator {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,

    #[validate(email(message = "a valid email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,

    #[serde(default)]
    pub date_birth: Option<NaiveDate>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub eats_pork: Option<bool>,

    #[serde(default)]
    pub drinks_alcohol: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginValidator {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_requires_a_valid_email() {
        let validator = RegisterValidator {
            username: "budi".to_string(),
            email: "not-an-email".to_string(),
            password: "hunter2!".to_string(),
            date_birth: None,
            location: None,
            eats_pork: None,
            drinks_alcohol: None,
        };

        assert!(validator.validate().is_err());
    }

    #[test]
    fn login_requires_both_fields() {
        let validator = LoginValidator {
            email: String::new(),
            password: "pw".to_string(),
        };
        assert!(validator.validate().is_err());

        let validator = LoginValidator {
            email: "budi@example.com".to_string(),
            password: "pw".to_string(),
        };
        assert!(validator.validate().is_ok());
    }
}
