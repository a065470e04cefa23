//! Error handlers
//!
//! Converts errors into logged diagnostics and operation outcomes.

use crate::error::types::{HelperError, StorageError};
use crate::outcome::OperationResult;
use log::{error, warn};

/// Handle a helper error
pub fn handle_error(err: &HelperError) {
    error!("Helper error: {}", err);
}

/// Turns a storage error into a failed outcome, logging it on the way.
///
/// I/O errors are logged at `error` level, precondition failures at `warn`.
pub fn storage_failure<T>(operation: &str, err: StorageError) -> OperationResult<T> {
    match &err {
        StorageError::IoError(_) => error!("{} failed: {}", operation, err),
        _ => warn!("{} refused: {}", operation, err),
    }
    OperationResult::failure(err.to_string())
}

/// Wraps the result of a storage step into an outcome.
///
/// # Arguments
///
/// * `operation` - Name of the operation, used in log lines.
/// * `result` - Payload and success message, or the error that stopped the step.
pub fn complete<T>(
    operation: &str,
    result: Result<(T, &'static str), StorageError>,
) -> OperationResult<T> {
    match result {
        Ok((payload, message)) => OperationResult::with_payload(payload, message),
        Err(err) => storage_failure(operation, err),
    }
}
