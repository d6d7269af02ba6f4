use serde_json::Value;

use super::{Guard, GuardContext};
use crate::server::{error::guard::GuardError, util::parse::parse_truth_value};

/// Coerces listed fields to booleans and appends them to `ctx.flags` in listed order.
///
/// The lenient form skips fields that are absent, `null` or empty. The strict form,
/// built with [`BooleanGuard::required`], demands every field.
pub struct BooleanGuard {
    fields: Vec<String>,
    required: bool,
}

impl BooleanGuard {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            required: false,
        }
    }

    pub fn required<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required: true,
            ..Self::new(fields)
        }
    }
}

impl Guard for BooleanGuard {
    fn check(&self, ctx: &mut GuardContext) -> Result<(), GuardError> {
        let mut flags = Vec::with_capacity(self.fields.len());

        for field in &self.fields {
            let value = ctx.data.get(field);

            if self.required {
                let coerced = value
                    .and_then(parse_truth_value)
                    .ok_or(GuardError::InvalidTruthValue)?;
                flags.push((field.clone(), coerced));
                continue;
            }

            match value {
                None | Some(Value::Null) => {}
                Some(Value::String(s)) if s.is_empty() => {}
                Some(value) => {
                    let coerced = parse_truth_value(value)
                        .ok_or_else(|| GuardError::InvalidBoolean(field.clone()))?;
                    flags.push((field.clone(), coerced));
                }
            }
        }

        ctx.flags.extend(flags);

        Ok(())
    }
}
