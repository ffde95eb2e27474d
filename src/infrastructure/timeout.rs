//! Deadline enforcement for store calls.

use std::time::Duration;

use serde_json::json;
use tracing::warn;

use crate::error::AppError;

/// Runs a store call under a deadline.
///
/// A call that outlives `limit` is reported as [`AppError::Unavailable`];
/// a hung store must never hang the calling request.
pub(crate) async fn bounded<T>(
    limit: Duration,
    operation: &'static str,
    call: impl Future<Output = Result<T, AppError>>,
) -> Result<T, AppError> {
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => {
            warn!("Store call '{}' timed out after {:?}", operation, limit);
            Err(AppError::unavailable(
                "Store call timed out",
                json!({ "operation": operation }),
            ))
        }
    }
}
