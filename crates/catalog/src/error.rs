//! Failure taxonomy for the remote catalog client.

use thiserror::Error;

/// Failures surfaced by catalog operations.
///
/// `Display` output is user-facing: stores copy it verbatim into a
/// screen's failed snapshot, so messages stay short and free of internals.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Connectivity failure before a response arrived.
    #[error("catalog unreachable: {message}")]
    Network { message: String },

    /// The catalog answered with a non-success status.
    #[error("catalog request failed with status {status}")]
    Status { status: u16 },

    /// The response body could not be parsed.
    #[error("catalog response could not be read: {message}")]
    Malformed { message: String },

    /// Valid request, but no entry with this identifier exists.
    #[error("no catalog entry for '{id}'")]
    NotFound { id: String },
}

impl CatalogError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
