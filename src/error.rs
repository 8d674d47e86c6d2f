//! Error types for dump sessions.
//!
//! All fallible operations return [`Result<T>`]. Failures are fatal to the
//! session: the engine performs no retries and no local recovery, and the
//! memo is left partially marked. Callers that need resilience restart a
//! full session with a fresh [`crate::Dumper`].

use thiserror::Error;

/// Result type alias for dump operations.
pub type Result<T> = std::result::Result<T, DumpError>;

/// Error type for all dump operations.
///
/// Errors unwind the traversal immediately; no partial tuple is ever
/// written for the record that failed.
#[derive(Error, Debug)]
pub enum DumpError {
    /// The write sink rejected a tuple
    #[error("Sink write failed: {message}")]
    SinkWrite {
        /// Detailed error message
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A record lacks a resolvable kind or a usable attribute snapshot
    #[error("Malformed record: {detail}")]
    MalformedRecord {
        /// Description of what the record is missing
        detail: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl DumpError {
    /// Create a sink-write error from a message and optional source.
    pub fn sink_write<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::SinkWrite {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    /// Create a malformed-record error.
    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedRecord {
            detail: detail.into(),
        }
    }

    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }
}
