//! Feedback collection API.
//!
//! Clients submit a rating with a comment and list stored feedback, newest first.
//! Requests pass through composable guards (see [`server::middleware::guard`]) before
//! reaching the handlers; every response is an `{"ok": ...}` JSON envelope.

pub mod model;
pub mod server;
