//! Operation outcome
//!
//! Defines the uniform value returned by every directory and file operation.

use std::fmt;

/// Outcome of a helper operation.
///
/// A `Failure` never carries a payload. Operations without a payload use the
/// default `OperationResult<()>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationResult<T = ()> {
    Success { message: String, payload: T },
    Failure { message: String },
}

impl OperationResult<()> {
    /// Successful outcome without a payload.
    pub fn success(message: impl Into<String>) -> Self {
        OperationResult::Success {
            message: message.into(),
            payload: (),
        }
    }
}

impl<T> OperationResult<T> {
    /// Successful outcome carrying `payload`.
    pub fn with_payload(payload: T, message: impl Into<String>) -> Self {
        OperationResult::Success {
            message: message.into(),
            payload,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        OperationResult::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, OperationResult::Success { .. })
    }

    /// Human readable description of what happened.
    pub fn message(&self) -> &str {
        match self {
            OperationResult::Success { message, .. } => message,
            OperationResult::Failure { message } => message,
        }
    }

    pub fn payload(&self) -> Option<&T> {
        match self {
            OperationResult::Success { payload, .. } => Some(payload),
            OperationResult::Failure { .. } => None,
        }
    }

    pub fn into_payload(self) -> Option<T> {
        match self {
            OperationResult::Success { payload, .. } => Some(payload),
            OperationResult::Failure { .. } => None,
        }
    }

    /// Converts into a standard `Result`, keeping the failure message as the error.
    pub fn into_result(self) -> Result<T, String> {
        match self {
            OperationResult::Success { payload, .. } => Ok(payload),
            OperationResult::Failure { message } => Err(message),
        }
    }

    /// Maps the payload of a successful outcome, leaving the message intact.
    pub fn map<U, F>(self, f: F) -> OperationResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            OperationResult::Success { message, payload } => OperationResult::Success {
                message,
                payload: f(payload),
            },
            OperationResult::Failure { message } => OperationResult::Failure { message },
        }
    }
}

impl<T> fmt::Display for OperationResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationResult::Success { message, .. } => write!(f, "success: {}", message),
            OperationResult::Failure { message } => write!(f, "failure: {}", message),
        }
    }
}

impl<T> From<std::io::Error> for OperationResult<T> {
    fn from(error: std::io::Error) -> Self {
        OperationResult::failure(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_has_no_payload() {
        let result: OperationResult<Vec<String>> = OperationResult::failure("nope");
        assert!(!result.is_success());
        assert_eq!(result.message(), "nope");
        assert!(result.payload().is_none());
        assert_eq!(result.into_result(), Err("nope".to_string()));
    }

    #[test]
    fn success_exposes_payload_and_message() {
        let result = OperationResult::with_payload(vec![1, 2], "listed");
        assert!(result.is_success());
        assert_eq!(result.message(), "listed");
        assert_eq!(result.payload(), Some(&vec![1, 2]));

        let mapped = result.map(|items| items.len());
        assert_eq!(mapped.into_payload(), Some(2));
    }

    #[test]
    fn io_error_becomes_failure_with_error_text() {
        let error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let result: OperationResult = error.into();
        assert_eq!(result, OperationResult::failure("access denied"));
        assert_eq!(result.to_string(), "failure: access denied");
    }
}
