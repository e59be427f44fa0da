//! Shared response bodies.
//!
//! Resource endpoints return the resource itself; action endpoints (delete,
//! admin verify, contact) answer with a [`SuccessResponse`].

use serde::Serialize;

/// `{ "success": bool, "error"?: string }`
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}
