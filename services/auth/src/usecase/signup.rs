use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::UserRepository;
use crate::domain::types::{MIN_PASSWORD_LEN, User, is_allowed_email, normalize_email};
use crate::error::AuthServiceError;
use crate::usecase::password::hash_password;

pub struct SignUpInput {
    pub email: String,
    pub password: String,
}

pub struct SignUpUseCase<U: UserRepository> {
    pub users: U,
    pub allowed_email: String,
}

impl<U: UserRepository> SignUpUseCase<U> {
    pub async fn execute(&self, input: SignUpInput) -> Result<User, AuthServiceError> {
        if !is_allowed_email(&input.email, &self.allowed_email) {
            return Err(AuthServiceError::EmailNotAllowed);
        }
        if input.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthServiceError::InvalidPassword);
        }

        let email = normalize_email(&input.email);
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AuthServiceError::UserAlreadyExists);
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            email,
            password_hash: hash_password(&input.password)?,
            created_at: now,
            updated_at: now,
        };
        self.users.create(&user).await?;

        tracing::info!(user_id = %user.id, "user signed up");
        Ok(user)
    }
}
