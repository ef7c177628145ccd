//! JSON wire types for the counter API.
//!
//! Kept in core so the server and any client tooling agree on the exact
//! response shapes.

use serde::{Deserialize, Serialize};

/// Success body for all counter routes: `{"value": <int>}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterValue {
    pub value: i64,
}

/// Error body for failed requests: `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Body for `/api/author/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorInfo {
    pub author: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn counter_value_wire_shape() {
        let json = serde_json::to_string(&CounterValue { value: 3 }).unwrap();
        assert_eq!(json, r#"{"value":3}"#);
    }

    #[test]
    fn error_body_wire_shape() {
        let body = ErrorBody { error: "Counter cannot be negative".into() };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"error":"Counter cannot be negative"}"#);
    }
}
