use std::{sync::Arc, time::Duration};

use tracing::{info, instrument};

use super::domain::{NewUser, User, UserChanges};
use super::repository::UserRepository;
use crate::{errors::ServiceError, runtime::bounded};
use models::user::{validate_mail, validate_password, validate_user_id, validate_user_name};

/// User registry independent of web framework
pub struct UserStore<R: UserRepository> {
    repo: Arc<R>,
    timeout: Option<Duration>,
}

impl<R: UserRepository> Clone for UserStore<R> {
    fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo), timeout: self.timeout } }
}

impl<R: UserRepository> UserStore<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo, timeout: None } }

    /// Bound every operation by `timeout`; `None` waits on the database.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Insert a user. A taken `user_id` fails with `DuplicateKey`.
    #[instrument(skip(self, input), fields(user_id = %input.user_id))]
    pub async fn create(&self, input: NewUser) -> Result<User, ServiceError> {
        validate_user_id(&input.user_id)?;
        validate_user_name(&input.user_name)?;
        validate_mail(&input.mail)?;
        validate_password(&input.password)?;
        let user = bounded(self.timeout, "user.create", self.repo.insert(&input)).await?;
        info!(id = user.id, user_id = %user.user_id, "user_created");
        Ok(user)
    }

    #[instrument(skip(self))]
    pub async fn get_by_user_id(&self, user_id: &str) -> Result<User, ServiceError> {
        bounded(self.timeout, "user.get", self.repo.find_by_user_id(user_id))
            .await?
            .ok_or_else(|| ServiceError::not_found("user"))
    }

    /// Apply partial changes. Renaming `user_id` moves the user's foods with it.
    #[instrument(skip(self, changes), fields(rename = ?changes.user_id))]
    pub async fn update(&self, user_id: &str, changes: UserChanges) -> Result<User, ServiceError> {
        if let Some(v) = &changes.user_id { validate_user_id(v)?; }
        if let Some(v) = &changes.user_name { validate_user_name(v)?; }
        if let Some(v) = &changes.mail { validate_mail(v)?; }
        if let Some(v) = &changes.password { validate_password(v)?; }
        let user = bounded(self.timeout, "user.update", self.repo.update(user_id, &changes))
            .await?
            .ok_or_else(|| ServiceError::not_found("user"))?;
        info!(id = user.id, user_id = %user.user_id, "user_updated");
        Ok(user)
    }

    /// Remove the user together with all of its foods.
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: &str) -> Result<(), ServiceError> {
        if !bounded(self.timeout, "user.delete", self.repo.delete(user_id)).await? {
            return Err(ServiceError::not_found("user"));
        }
        info!(user_id, "user_deleted");
        Ok(())
    }
}
