use async_trait::async_trait;

use super::domain::{Food, FoodChanges, NewFood};
use crate::errors::ServiceError;

/// Repository abstraction for food persistence.
#[async_trait]
pub trait FoodRepository: Send + Sync {
    async fn insert(&self, input: &NewFood) -> Result<Food, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Food>, ServiceError>;
    /// Foods of `user_id` ordered by id, or `None` when the user does not exist.
    async fn list_by_user(&self, user_id: &str) -> Result<Option<Vec<Food>>, ServiceError>;
    async fn update(&self, id: i32, changes: &FoodChanges) -> Result<Option<Food>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}
