use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

pub const LOGIN_REQUIRED_ERROR: &str = "Login Required. Please Sign In.";
pub const INSUFFICIENT_PRIVILEGE_ERROR: &str = "Insufficient Privilege!";

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the session.
    #[error("User not found in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The user exists but the account has been deactivated.
    #[error("User {0} is not active")]
    InactiveUser(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant results in 401 Unauthorized. Missing or unknown users are told to log
/// in, inactive users are told they lack privilege. The detailed reason is only logged.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let message = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => LOGIN_REQUIRED_ERROR,
            Self::InactiveUser(_) => INSUFFICIENT_PRIVILEGE_ERROR,
        };

        (StatusCode::UNAUTHORIZED, Json(ErrorDto::new(message))).into_response()
    }
}
