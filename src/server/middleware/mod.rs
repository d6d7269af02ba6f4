//! Request processing ahead of the handlers: the guard pipeline, session-based
//! authentication and typed session access.

pub mod auth;
pub mod guard;
pub mod session;
