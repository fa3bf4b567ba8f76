use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("duplicate key: {0}")]
    DuplicateKey(String),
    #[error("referential violation: {0}")]
    ReferentialViolation(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<DbErr> for ModelError {
    /// Classifies constraint failures reported by the engine; everything else is `Db`.
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => Self::DuplicateKey(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => Self::ReferentialViolation(msg),
            _ => Self::Db(e.to_string()),
        }
    }
}
