use super::{Guard, GuardContext};
use crate::server::error::guard::GuardError;

/// Rejects requests missing any of the listed fields, naming the first one missing.
///
/// A field holding JSON `null` counts as present.
pub struct RequiredFieldsGuard {
    fields: Vec<String>,
}

impl RequiredFieldsGuard {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}

impl Guard for RequiredFieldsGuard {
    fn check(&self, ctx: &mut GuardContext) -> Result<(), GuardError> {
        match self.fields.iter().find(|field| !ctx.data.contains_key(*field)) {
            Some(missing) => Err(GuardError::MissingField(missing.clone())),
            None => Ok(()),
        }
    }
}
