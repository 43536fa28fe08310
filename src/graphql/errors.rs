use async_graphql::*;

use crate::data_source::DataSourceError;

pub const DATA_SOURCE_NAME: &str = "givefood";

/// Structured error builder for consistent error handling
pub struct StructuredError;

impl StructuredError {
    /// Create a "service error"; the message is the cause, unchanged
    pub fn service(service: &str, cause: impl std::fmt::Display) -> Error {
        Error::new(cause.to_string()).extend_with(|_, e| {
            e.set("code", "SERVICE_ERROR");
            e.set("service", service);
        })
    }

    /// Create an "internal error"
    pub fn internal(message: impl Into<String>) -> Error {
        Error::new(message.into()).extend_with(|_, e| {
            e.set("code", "INTERNAL_ERROR");
        })
    }
}

impl ErrorExtensions for DataSourceError {
    fn extend(&self) -> Error {
        StructuredError::service(DATA_SOURCE_NAME, self)
    }
}
