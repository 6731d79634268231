use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    meal_plan::ports::MealPlanRepository,
    recipe::ports::RecipeRepository,
    user::{
        entities::{User, UserConfig},
        ports::{UserRepository, UserService},
        value_objects::{LoginUserInput, RegisterUserInput, UpdateUserInput},
    },
};

impl<U, R, M, H, HC> UserService for Service<U, R, M, H, HC>
where
    U: UserRepository,
    R: RecipeRepository,
    M: MealPlanRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
{
    async fn register(&self, input: RegisterUserInput) -> Result<User, CoreError> {
        if input.email.is_empty() || input.password.is_empty() {
            return Err(CoreError::InvalidInput(
                "email and password are required".into(),
            ));
        }

        let existing = self.user_repository.get_by_email(input.email.clone()).await?;
        if existing.is_some() {
            return Err(CoreError::EmailAlreadyRegistered);
        }

        let password_hash = self.hasher_repository.hash_password(input.password).await?;

        let user = User::new(UserConfig {
            username: input.username,
            email: input.email,
            password_hash,
            date_birth: input.date_birth,
            location: input.location,
            eats_pork: input.eats_pork.unwrap_or(true),
            drinks_alcohol: input.drinks_alcohol.unwrap_or(true),
        });

        self.user_repository.create_user(user).await
    }

    async fn login(&self, input: LoginUserInput) -> Result<User, CoreError> {
        if input.email.is_empty() || input.password.is_empty() {
            return Err(CoreError::InvalidInput(
                "email and password are required".into(),
            ));
        }

        // Wrong email and wrong password are indistinguishable to the caller.
        let user = self
            .user_repository
            .get_by_email(input.email)
            .await?
            .ok_or(CoreError::InvalidCredentials)?;

        let verified = self
            .hasher_repository
            .verify_password(input.password, user.password_hash.clone())
            .await?;

        if !verified {
            return Err(CoreError::InvalidCredentials);
        }

        Ok(user)
    }

    async fn get_user(&self, user_id: Uuid) -> Result<User, CoreError> {
        self.user_repository
            .get_by_id(user_id)
            .await?
            .ok_or(CoreError::UserNotFound)
    }

    async fn update_user(&self, input: UpdateUserInput) -> Result<User, CoreError> {
        let mut user = self
            .user_repository
            .get_by_id(input.user_id)
            .await?
            .ok_or(CoreError::UserNotFound)?;

        user.update(
            input.username,
            input.date_birth,
            input.location,
            input.eats_pork,
            input.drinks_alcohol,
        );

        self.user_repository.update_user(user).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::domain::common::test_support::{fake_service, test_user};

    fn register_input(email: &str) -> RegisterUserInput {
        RegisterUserInput {
            username: "budi".to_string(),
            email: email.to_string(),
            password: "hunter2!".to_string(),
            date_birth: None,
            location: None,
            eats_pork: None,
            drinks_alcohol: None,
        }
    }

    #[tokio::test]
    async fn register_hashes_the_password() {
        let svc = fake_service(None, Vec::new(), Arc::new(Mutex::new(Vec::new())));

        let user = svc.register(register_input("budi@example.com")).await.unwrap();

        assert_eq!(user.email, "budi@example.com");
        assert_eq!(user.password_hash, "hashed:hunter2!");
        assert!(user.eats_pork);
        assert!(user.drinks_alcohol);
    }

    #[tokio::test]
    async fn register_rejects_duplicate_email() {
        let existing = test_user();
        let svc = fake_service(
            Some(existing.clone()),
            Vec::new(),
            Arc::new(Mutex::new(Vec::new())),
        );

        let result = svc.register(register_input(&existing.email)).await;

        assert_eq!(result.unwrap_err(), CoreError::EmailAlreadyRegistered);
    }

    #[tokio::test]
    async fn register_requires_email_and_password() {
        let svc = fake_service(None, Vec::new(), Arc::new(Mutex::new(Vec::new())));

        let mut input = register_input("");
        assert!(matches!(
            svc.register(input.clone()).await.unwrap_err(),
            CoreError::InvalidInput(_)
        ));

        input.email = "budi@example.com".to_string();
        input.password = String::new();
        assert!(matches!(
            svc.register(input).await.unwrap_err(),
            CoreError::InvalidInput(_)
        ));
    }

    #[tokio::test]
    async fn login_accepts_the_right_password_only() {
        let user = test_user();
        let svc = fake_service(
            Some(user.clone()),
            Vec::new(),
            Arc::new(Mutex::new(Vec::new())),
        );

        let logged_in = svc
            .login(LoginUserInput {
                email: user.email.clone(),
                password: "pw".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(logged_in.id, user.id);

        let wrong = svc
            .login(LoginUserInput {
                email: user.email.clone(),
                password: "not-pw".to_string(),
            })
            .await;
        assert_eq!(wrong.unwrap_err(), CoreError::InvalidCredentials);
    }

    #[tokio::test]
    async fn login_with_unknown_email_is_indistinguishable() {
        let svc = fake_service(None, Vec::new(), Arc::new(Mutex::new(Vec::new())));

        let result = svc
            .login(LoginUserInput {
                email: "ghost@example.com".to_string(),
                password: "pw".to_string(),
            })
            .await;

        assert_eq!(result.unwrap_err(), CoreError::InvalidCredentials);
    }
}
