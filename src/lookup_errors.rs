//! # Lookup Error Types Module
//!
//! This module defines the error types used by BIN validation and the remote
//! lookup client. None of these are ever shown verbatim to a Telegram user;
//! they exist for logging and for picking the right canned reply.

/// Input that is not a 6-digit BIN
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidBin {
    /// The rejected input, as received
    pub input: String,
}

impl std::fmt::Display for InvalidBin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid BIN format: {:?}", self.input)
    }
}

impl std::error::Error for InvalidBin {}

/// Reasons a BIN lookup produced no usable record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupFailure {
    /// The service answered with a status other than 200 or 404
    Status {
        status: u16,
        /// Response body, truncated for logging
        body: String,
    },
    /// The request did not complete within the configured timeout
    Timeout,
    /// Connection, TLS or other transport-level errors
    Transport(String),
    /// A 200 response whose body was not a valid lookup record
    Decode(String),
}

impl std::fmt::Display for LookupFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupFailure::Status { status, body } => {
                write!(f, "Unexpected status {status}: {body}")
            }
            LookupFailure::Timeout => write!(f, "Request timed out"),
            LookupFailure::Transport(msg) => write!(f, "Transport error: {msg}"),
            LookupFailure::Decode(msg) => write!(f, "Decode error: {msg}"),
        }
    }
}

impl std::error::Error for LookupFailure {}

impl From<reqwest::Error> for LookupFailure {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LookupFailure::Timeout
        } else if err.is_decode() {
            LookupFailure::Decode(err.to_string())
        } else {
            LookupFailure::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_display() {
        let failure = LookupFailure::Status {
            status: 503,
            body: "Service Unavailable".to_string(),
        };
        assert_eq!(failure.to_string(), "Unexpected status 503: Service Unavailable");
        assert_eq!(LookupFailure::Timeout.to_string(), "Request timed out");
        assert_eq!(
            LookupFailure::Decode("expected value".to_string()).to_string(),
            "Decode error: expected value"
        );
    }

    #[test]
    fn test_invalid_bin_display() {
        let err = InvalidBin {
            input: "12a456".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid BIN format: \"12a456\"");
    }
}
