#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{SessionEvent, User};
use crate::error::AuthServiceError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    /// Look up by normalized email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthServiceError>;

    /// Insert a new user. Returns `UserAlreadyExists` on an email collision.
    async fn create(&self, user: &User) -> Result<(), AuthServiceError>;
}

/// Fan-out of session changes to live subscribers.
pub trait SessionEventPublisher: Send + Sync {
    /// Publish to whoever is listening. Having no subscribers is not an error.
    fn publish(&self, event: SessionEvent);
}
