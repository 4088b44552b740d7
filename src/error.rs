//! Error handling for the telemetry inspector
//!
//! The sampling and selection core never returns errors (anomalies degrade
//! to a quiescent state). These types cover the ambient layers: configuration
//! I/O and the desktop front end.

use thiserror::Error;

/// Main error type for inspector operations
#[derive(Error, Debug)]
pub enum InspectorError {
    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<InspectorError>,
    },
}

impl InspectorError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        InspectorError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

impl From<serde_json::Error> for InspectorError {
    fn from(err: serde_json::Error) -> Self {
        InspectorError::Serialization(err.to_string())
    }
}

/// Result type alias for inspector operations
pub type Result<T> = std::result::Result<T, InspectorError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<InspectorError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.into().with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.into().with_context(f()))
    }
}
