use models::errors::ModelError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("duplicate key: {0}")]
    DuplicateKey(String),
    #[error("referential violation: {0}")]
    ReferentialViolation(String),
    #[error("timed out: {0}")]
    Timeout(String),
    #[error("hashing error: {0}")]
    Hash(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 1001,
            ServiceError::DuplicateKey(_) => 1002,
            ServiceError::NotFound(_) => 1003,
            ServiceError::ReferentialViolation(_) => 1004,
            ServiceError::Hash(_) => 1101,
            ServiceError::Db(_) => 1200,
            ServiceError::Timeout(_) => 1201,
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(m) => Self::Validation(m),
            ModelError::DuplicateKey(m) => Self::DuplicateKey(m),
            ModelError::ReferentialViolation(m) => Self::ReferentialViolation(m),
            ModelError::Db(m) => Self::Db(m),
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self { ModelError::from(e).into() }
}
