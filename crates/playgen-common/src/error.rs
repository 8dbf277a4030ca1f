//! Common error types used throughout playgen.
//!
//! Configuration problems are detected before any URL is generated, sink
//! failures abort the run, and allocation failures only ever affect a single
//! entry. Network failures during verification are not errors at all: the
//! checker folds them into an unreachable verdict.

use std::io;

/// Common error type for playgen.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The link template, range or worker settings are invalid.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The playlist destination could not be opened or written.
    #[error("Cannot write playlist to {target}: {source}")]
    SinkWrite {
        target: String,
        #[source]
        source: io::Error,
    },

    /// Memory for a generated URL could not be reserved.
    #[error("Memory allocation failed for entry {index}")]
    Allocation { index: u64 },
}

impl Error {
    /// Create a new Configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a new SinkWrite error for the given destination.
    pub fn sink_write<S: Into<String>>(target: S, source: io::Error) -> Self {
        Self::SinkWrite {
            target: target.into(),
            source,
        }
    }

    /// Whether the error is confined to a single entry and the run may go on.
    pub fn is_per_entry(&self) -> bool {
        matches!(self, Self::Allocation { .. })
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
