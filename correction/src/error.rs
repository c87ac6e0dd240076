//! Transport failure taxonomy.
//!
//! Every variant is terminal for the submission that produced it and is shown
//! to the user as [`crate::Notice::Unreachable`]. The detail only reaches logs.

/// Error produced while talking to the correction service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CorrectionError {
    /// The request could not be sent or the connection dropped.
    #[error("correction request failed: {0}")]
    Network(String),

    /// No response arrived within the client-side timeout.
    #[error("correction request timed out after {after_ms}ms")]
    Timeout { after_ms: u64 },

    /// The service answered with a non-success HTTP status.
    #[error("correction service returned status {0}")]
    Status(u16),

    /// The response body was not a JSON object.
    #[error("correction response could not be decoded: {0}")]
    Decode(String),

    /// No transport exists in this build (e.g. server-side rendering).
    #[error("correction service not available in this environment")]
    Unavailable,
}

impl CorrectionError {
    /// Stable code for structured logs.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Network(_) => "E_NETWORK",
            Self::Timeout { .. } => "E_TIMEOUT",
            Self::Status(_) => "E_STATUS",
            Self::Decode(_) => "E_DECODE",
            Self::Unavailable => "E_UNAVAILABLE",
        }
    }
}
