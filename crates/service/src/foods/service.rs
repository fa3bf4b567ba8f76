use std::{sync::Arc, time::Duration};

use tracing::{info, instrument};

use super::domain::{Food, FoodChanges, NewFood};
use super::repository::FoodRepository;
use crate::{errors::ServiceError, runtime::bounded};
use models::{food::{validate_food_id, validate_food_name}, user::validate_user_id};

/// Food tracker independent of web framework
pub struct FoodStore<R: FoodRepository> {
    repo: Arc<R>,
    timeout: Option<Duration>,
}

impl<R: FoodRepository> Clone for FoodStore<R> {
    fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo), timeout: self.timeout } }
}

impl<R: FoodRepository> FoodStore<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo, timeout: None } }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Insert a food for an existing user; an unknown owner fails with
    /// `ReferentialViolation`. Repeated `food_id`s are accepted.
    #[instrument(skip(self, input), fields(food_id = %input.food_id, user_id = %input.user_id))]
    pub async fn create(&self, input: NewFood) -> Result<Food, ServiceError> {
        validate_food_id(&input.food_id)?;
        validate_food_name(&input.food_name)?;
        validate_user_id(&input.user_id)?;
        let food = bounded(self.timeout, "food.create", self.repo.insert(&input)).await?;
        info!(id = food.id, food_id = %food.food_id, user_id = %food.user_id, "food_created");
        Ok(food)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<Food, ServiceError> {
        bounded(self.timeout, "food.get", self.repo.find_by_id(id))
            .await?
            .ok_or_else(|| ServiceError::not_found("food"))
    }

    /// Foods owned by `user_id` in id order; `NotFound` if the user is absent.
    #[instrument(skip(self))]
    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<Food>, ServiceError> {
        bounded(self.timeout, "food.list_by_user", self.repo.list_by_user(user_id))
            .await?
            .ok_or_else(|| ServiceError::not_found("user"))
    }

    #[instrument(skip(self, changes))]
    pub async fn update(&self, id: i32, changes: FoodChanges) -> Result<Food, ServiceError> {
        if let Some(v) = &changes.food_id { validate_food_id(v)?; }
        if let Some(v) = &changes.food_name { validate_food_name(v)?; }
        let food = bounded(self.timeout, "food.update", self.repo.update(id, &changes))
            .await?
            .ok_or_else(|| ServiceError::not_found("food"))?;
        info!(id = food.id, food_id = %food.food_id, "food_updated");
        Ok(food)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !bounded(self.timeout, "food.delete", self.repo.delete(id)).await? {
            return Err(ServiceError::not_found("food"));
        }
        info!(id, "food_deleted");
        Ok(())
    }
}
