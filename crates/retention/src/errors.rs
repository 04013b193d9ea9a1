//! Error types for the artifact retention domain.
//!
//! Every variant is terminal: no error is retried or recovered, and each one
//! maps to the same non-zero process exit code. The variants exist so log
//! lines and tests can tell the failure classes apart.

use thiserror::Error;

/// The remote call that was in flight when a transport error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteOperation {
    /// `GET .../actions/artifacts`
    ListArtifacts,
    /// `DELETE .../actions/artifacts/{id}`
    DeleteArtifact,
}

impl std::fmt::Display for RemoteOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoteOperation::ListArtifacts => f.write_str("list artifacts"),
            RemoteOperation::DeleteArtifact => f.write_str("delete artifact"),
        }
    }
}

/// Errors that abort a sweep.
#[derive(Debug, Error)]
pub enum SweeperError {
    /// A required setting is missing or blank, or an optional one is invalid.
    ///
    /// Produced at load time; no network call is made.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration problem.
        message: String,
    },

    /// A setting is present but not in the expected format.
    ///
    /// Produced at load time; no network call is made.
    #[error("Invalid value '{value}' for {key}: {reason}")]
    InputFormat {
        /// The configuration key that held the bad value.
        key: String,
        /// The raw value as read.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The request could not be sent or its response could not be read.
    #[error("Transport error during {operation}: {message}")]
    Transport {
        /// Which remote call failed.
        operation: RemoteOperation,
        /// Underlying client error, rendered.
        message: String,
    },

    /// The list response body was not JSON of the expected shape.
    #[error("Failed to parse artifact list: {message}")]
    Parse {
        /// Decoder error, including the HTTP status for context.
        message: String,
    },
}

impl SweeperError {
    /// Process exit code for this error. Every failure class exits with `1`.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
