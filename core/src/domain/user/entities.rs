use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub date_birth: Option<NaiveDate>,
    pub location: Option<String>,
    pub eats_pork: bool,
    pub drinks_alcohol: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct UserConfig {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub date_birth: Option<NaiveDate>,
    pub location: Option<String>,
    pub eats_pork: bool,
    pub drinks_alcohol: bool,
}

impl User {
    pub fn new(config: UserConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            username: config.username,
            email: config.email,
            password_hash: config.password_hash,
            date_birth: config.date_birth,
            location: config.location,
            eats_pork: config.eats_pork,
            drinks_alcohol: config.drinks_alcohol,
            created_at: now,
            updated_at: now,
        }
    }

    /// Age in full years as of today. Never persisted.
    pub fn age(&self) -> Option<i32> {
        self.date_birth.map(|dob| age_on(dob, Utc::now().date_naive()))
    }

    pub fn update(
        &mut self,
        username: Option<String>,
        date_birth: Option<NaiveDate>,
        location: Option<String>,
        eats_pork: Option<bool>,
        drinks_alcohol: Option<bool>,
    ) {
        let (now, _) = generate_timestamp();

        if let Some(u) = username {
            self.username = u;
        }
        if let Some(d) = date_birth {
            self.date_birth = Some(d);
        }
        if let Some(l) = location {
            self.location = Some(l);
        }
        if let Some(p) = eats_pork {
            self.eats_pork = p;
        }
        if let Some(a) = drinks_alcohol {
            self.drinks_alcohol = a;
        }
        self.updated_at = now;
    }
}

pub fn age_on(date_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_birth.year();
    if (today.month(), today.day()) < (date_birth.month(), date_birth.day()) {
        age -= 1;
    }
    age
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn age_counts_completed_years_only() {
        let dob = date(1990, 6, 15);
        assert_eq!(age_on(dob, date(2020, 6, 14)), 29);
        assert_eq!(age_on(dob, date(2020, 6, 15)), 30);
        assert_eq!(age_on(dob, date(2020, 6, 16)), 30);
    }

    #[test]
    fn age_of_newborn_is_zero() {
        let dob = date(2020, 1, 1);
        assert_eq!(age_on(dob, date(2020, 12, 31)), 0);
    }

    #[test]
    fn update_leaves_unset_fields_alone() {
        let mut user = User::new(UserConfig {
            username: "ayu".to_string(),
            email: "ayu@example.com".to_string(),
            password_hash: "hash".to_string(),
            date_birth: None,
            location: Some("Jakarta".to_string()),
            eats_pork: true,
            drinks_alcohol: true,
        });

        user.update(None, None, None, Some(false), None);

        assert_eq!(user.username, "ayu");
        assert_eq!(user.location.as_deref(), Some("Jakarta"));
        assert!(!user.eats_pork);
        assert!(user.drinks_alcohol);
    }
}
