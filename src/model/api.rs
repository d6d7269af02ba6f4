use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Failure envelope: `{"ok": false, "error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub ok: bool,
    pub error: String,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
        }
    }
}

/// Success envelope without payload: `{"ok": true}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SuccessDto {
    pub ok: bool,
}

impl SuccessDto {
    pub fn new() -> Self {
        Self { ok: true }
    }
}

impl Default for SuccessDto {
    fn default() -> Self {
        Self::new()
    }
}
