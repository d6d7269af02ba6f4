use serde_json::Value;

use super::{Guard, GuardContext};
use crate::server::error::guard::GuardError;

/// Requires the request's `secret` and `token` fields to match a configured pair.
///
/// Missing or non-string fields are a mismatch.
pub struct SharedSecretGuard {
    secret: String,
    token: String,
}

impl SharedSecretGuard {
    pub fn new(secret: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            token: token.into(),
        }
    }

    fn matches(value: Option<&Value>, expected: &str) -> bool {
        matches!(value, Some(Value::String(actual)) if actual == expected)
    }
}

impl Guard for SharedSecretGuard {
    fn check(&self, ctx: &mut GuardContext) -> Result<(), GuardError> {
        if Self::matches(ctx.data.get("secret"), &self.secret)
            && Self::matches(ctx.data.get("token"), &self.token)
        {
            Ok(())
        } else {
            Err(GuardError::InvalidToken)
        }
    }
}
