//! Argon2id hashing for the `password` column. Stores never call this;
//! callers hash before handing a credential over.

use argon2::{password_hash::{PasswordHasher, PasswordVerifier, SaltString}, Argon2, PasswordHash};
use rand::rngs::OsRng;

use crate::errors::ServiceError;

/// Hash `plain` with a fresh salt, returning a PHC string.
pub fn hash_password(plain: &str) -> Result<String, ServiceError> {
    if plain.is_empty() {
        return Err(ServiceError::Validation("password required".into()));
    }
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| ServiceError::Hash(e.to_string()))?
        .to_string();
    Ok(hash)
}

/// [`hash_password`] on the blocking pool, keeping Argon2 off the async workers.
pub async fn hash_password_blocking(plain: String) -> Result<String, ServiceError> {
    tokio::task::spawn_blocking(move || hash_password(&plain))
        .await
        .map_err(|e| ServiceError::Hash(e.to_string()))?
}

/// Check `plain` against a PHC string produced by [`hash_password`].
pub fn verify_password(plain: &str, phc: &str) -> Result<bool, ServiceError> {
    let parsed = PasswordHash::new(phc).map_err(|e| ServiceError::Hash(e.to_string()))?;
    Ok(Argon2::default().verify_password(plain.as_bytes(), &parsed).is_ok())
}
