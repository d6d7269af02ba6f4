use serde_json::Value;

use super::{Guard, GuardContext, RequestData};
use crate::server::error::guard::GuardError;

/// Parses a non-empty body as a JSON object, falling back to URL-encoded form data.
///
/// Replaces `ctx.data` with the parsed body. An empty body leaves the context untouched.
pub struct BodyGuard;

impl Guard for BodyGuard {
    fn check(&self, ctx: &mut GuardContext) -> Result<(), GuardError> {
        if ctx.body.is_empty() {
            return Ok(());
        }

        if let Ok(Value::Object(map)) = serde_json::from_slice::<Value>(&ctx.body) {
            ctx.data = map;
            return Ok(());
        }

        ctx.data = parse_form_strict(&ctx.body).ok_or(GuardError::UnrecognisableFormat)?;

        Ok(())
    }
}

/// Decodes URL-encoded pairs, accepting anything. Later duplicates win.
pub(crate) fn decode_form(input: &[u8]) -> RequestData {
    url::form_urlencoded::parse(input)
        .into_owned()
        .map(|(key, value)| (key, Value::String(value)))
        .collect()
}

/// Decodes URL-encoded pairs only if the input is well formed.
///
/// Well formed means valid UTF-8 where every non-empty `&`-separated segment is
/// `key=value` with a non-empty key and every `%` is followed by two hex digits.
fn parse_form_strict(input: &[u8]) -> Option<RequestData> {
    let text = std::str::from_utf8(input).ok()?;

    for segment in text.split('&').filter(|segment| !segment.is_empty()) {
        let (key, _) = segment.split_once('=')?;
        if key.is_empty() || !has_valid_escapes(segment) {
            return None;
        }
    }

    Some(decode_form(input))
}

fn has_valid_escapes(segment: &str) -> bool {
    let mut bytes = segment.bytes();
    while let Some(byte) = bytes.next() {
        if byte == b'%' {
            match (bytes.next(), bytes.next()) {
                (Some(high), Some(low)) if high.is_ascii_hexdigit() && low.is_ascii_hexdigit() => {}
                _ => return false,
            }
        }
    }
    true
}
