use async_trait::async_trait;

use super::domain::{NewUser, User, UserChanges};
use crate::errors::ServiceError;

/// Repository abstraction for user persistence.
///
/// Absence is reported as `None`/`false`; the store turns it into `NotFound`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, input: &NewUser) -> Result<User, ServiceError>;
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<User>, ServiceError>;
    /// Apply `changes` to the row keyed by `user_id` in one transaction.
    async fn update(&self, user_id: &str, changes: &UserChanges) -> Result<Option<User>, ServiceError>;
    async fn delete(&self, user_id: &str) -> Result<bool, ServiceError>;
}
