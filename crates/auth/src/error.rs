use thiserror::Error;

/// Failures surfaced by sign-in, registration, and profile writes.
///
/// As with the catalog taxonomy, `Display` output lands verbatim in a
/// screen's failed snapshot.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Detected locally (e.g. a mismatched password confirmation); never
    /// sent to the network.
    #[error("{message}")]
    Validation { message: String },

    /// The identity service refused the credential.
    #[error("sign-in rejected: {message}")]
    Rejected { message: String },

    /// Connectivity failure before a response arrived.
    #[error("identity service unreachable: {message}")]
    Network { message: String },

    /// The response body could not be parsed.
    #[error("identity service response could not be read: {message}")]
    Malformed { message: String },
}

impl AuthError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

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

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_pass_through_unprefixed() {
        let error = AuthError::validation("passwords do not match");
        assert!(error.is_validation());
        assert_eq!(error.to_string(), "passwords do not match");
    }

    #[test]
    fn rejections_are_prefixed_for_display() {
        let error = AuthError::rejected("INVALID_PASSWORD");
        assert_eq!(error.to_string(), "sign-in rejected: INVALID_PASSWORD");
    }
}
