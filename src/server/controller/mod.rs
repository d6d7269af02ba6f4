//! HTTP request handlers.
//!
//! Each handler runs its guard pipeline, converts the guarded input into service
//! parameters and converts the result into a response envelope.

pub mod feedback;

#[cfg(test)]
mod test;
