//! # Response Bodies
//!
//! The two small body shapes shared by every route.

use serde::Serialize;

/// Failure body: `{"error": ...}`
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Confirmation body: `{"msg": ...}`
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
