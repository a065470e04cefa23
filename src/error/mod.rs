//! Error handling
//!
//! Defines error types and handling for the helper operations.

pub mod handlers;
pub mod types;

pub use handlers::{complete, handle_error, storage_failure};
pub use types::*;
