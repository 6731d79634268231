use sea_orm::ActiveValue::Set;

use crate::{domain::user::entities::User, entity::users};

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            email: model.email,
            password_hash: model.password_hash,
            date_birth: model.date_birth,
            location: model.location,
            eats_pork: model.eats_pork,
            drinks_alcohol: model.drinks_alcohol,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

pub fn to_active_model(user: &User) -> users::ActiveModel {
    users::ActiveModel {
        id: Set(user.id),
        username: Set(user.username.clone()),
        email: Set(user.email.clone()),
        password_hash: Set(user.password_hash.clone()),
        date_birth: Set(user.date_birth),
        location: Set(user.location.clone()),
        eats_pork: Set(user.eats_pork),
        drinks_alcohol: Set(user.drinks_alcohol),
        created_at: Set(user.created_at.fixed_offset()),
        updated_at: Set(user.updated_at.fixed_offset()),
    }
}
