//! Shared error type across tally crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed configuration.
    BadRequest,
    /// Decrement would take the counter below zero.
    NegativeCounter,
    /// Backing store unreachable or misbehaving.
    Store,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::NegativeCounter => "NEGATIVE_COUNTER",
            ClientCode::Store => "STORE",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, TallyError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum TallyError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("counter cannot be negative")]
    NegativeCounter,
    #[error("store: {0}")]
    Store(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl TallyError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            TallyError::BadRequest(_) => ClientCode::BadRequest,
            TallyError::NegativeCounter => ClientCode::NegativeCounter,
            TallyError::Store(_) => ClientCode::Store,
            TallyError::Internal(_) => ClientCode::Internal,
        }
    }

    /// Message safe to hand to HTTP clients. Store and internal details stay
    /// in the logs; clients get a generic message.
    pub fn client_message(&self) -> String {
        match self {
            TallyError::BadRequest(msg) => msg.clone(),
            TallyError::NegativeCounter => "Counter cannot be negative".to_string(),
            TallyError::Store(_) => "store error".to_string(),
            TallyError::Internal(_) => "internal error".to_string(),
        }
    }
}
