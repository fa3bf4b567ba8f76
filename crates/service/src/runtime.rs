//! Deadline helper shared by the stores.

use std::{future::Future, time::Duration};

use tracing::warn;

use crate::errors::ServiceError;

/// Run `fut` under an optional deadline; expiry yields `ServiceError::Timeout`.
pub async fn bounded<T, F>(limit: Option<Duration>, op: &'static str, fut: F) -> Result<T, ServiceError>
where
    F: Future<Output = Result<T, ServiceError>>,
{
    let Some(limit) = limit else { return fut.await };
    match tokio::time::timeout(limit, fut).await {
        Ok(res) => res,
        Err(_) => {
            let timeout_ms = millis(limit);
            warn!(op, timeout_ms, "store operation timed out");
            Err(ServiceError::Timeout(format!("{op} exceeded {timeout_ms}ms")))
        }
    }
}

fn millis(limit: Duration) -> u64 {
    u64::try_from(limit.as_millis()).unwrap_or(u64::MAX)
}
