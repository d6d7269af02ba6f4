use serde_json::Value;

use super::{Guard, GuardContext};
use crate::server::error::guard::GuardError;

/// Reads an optional non-negative integer `limit` from the query string into `ctx.limit`.
pub struct LimitGuard;

impl Guard for LimitGuard {
    fn check(&self, ctx: &mut GuardContext) -> Result<(), GuardError> {
        ctx.limit = match ctx.query.get("limit") {
            None => None,
            Some(Value::String(raw)) if raw.is_empty() => None,
            Some(Value::String(raw)) => Some(raw.trim().parse::<u64>().map_err(|_| {
                GuardError::FieldType {
                    field: "limit".to_string(),
                    expected: "Integer",
                }
            })?),
            Some(_) => None,
        };

        Ok(())
    }
}
