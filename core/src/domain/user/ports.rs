use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{
        entities::User,
        value_objects::{LoginUserInput, RegisterUserInput, UpdateUserInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn create_user(&self, user: User) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn get_by_id(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_by_email(
        &self,
        email: String,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn update_user(&self, user: User) -> impl Future<Output = Result<User, CoreError>> + Send;
}

pub trait UserService: Send + Sync {
    /// Register a new account; the password is hashed before storage.
    fn register(
        &self,
        input: RegisterUserInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    /// Verify credentials and return the account on success.
    fn login(&self, input: LoginUserInput) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn get_user(&self, user_id: Uuid) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn update_user(
        &self,
        input: UpdateUserInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;
}
