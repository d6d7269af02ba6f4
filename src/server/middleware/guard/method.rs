use axum::http::Method;

use super::{body::decode_form, Guard, GuardContext, RequestData};
use crate::server::error::guard::GuardError;

/// Rejects requests using any method other than the expected one.
///
/// On success fills `ctx.data` with the request input: the query string for GET,
/// a form-encoded body for POST, and the body decoded as form data for other methods.
pub struct MethodGuard {
    expected: Method,
}

impl MethodGuard {
    pub fn new(expected: Method) -> Self {
        Self { expected }
    }
}

impl Guard for MethodGuard {
    fn check(&self, ctx: &mut GuardContext) -> Result<(), GuardError> {
        if ctx.method != self.expected {
            return Err(GuardError::InvalidMethod {
                expected: self.expected.clone(),
                actual: ctx.method.clone(),
            });
        }

        ctx.data = if self.expected == Method::GET {
            ctx.query.clone()
        } else if self.expected == Method::POST {
            if ctx.is_form() {
                decode_form(&ctx.body)
            } else {
                RequestData::new()
            }
        } else {
            decode_form(&ctx.body)
        };

        Ok(())
    }
}
