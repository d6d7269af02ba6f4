use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Rejections produced by the request guard pipeline.
///
/// The `Display` text of each variant is the message sent to the client.
#[derive(Error, Debug, PartialEq)]
pub enum GuardError {
    /// The request used a different HTTP method than the route expects.
    #[error("Invalid Method")]
    InvalidMethod { expected: Method, actual: Method },

    /// The body is neither a JSON object nor URL-encoded form data.
    #[error("Unrecognisable Format")]
    UnrecognisableFormat,

    /// A required field is absent from the request data.
    #[error("Missing key {0}")]
    MissingField(String),

    /// A field expected to hold a truth value holds something else.
    #[error("Invalid boolean format for {0}")]
    InvalidBoolean(String),

    /// A mandatory truth value is absent or malformed.
    #[error("Truth values passed from front end is not correct")]
    InvalidTruthValue,

    /// A pagination parameter failed validation.
    #[error("Invalid {0} Value For Pagination")]
    InvalidPagination(&'static str),

    /// A field holds a value of the wrong type.
    #[error("'{field}' Has To Be {expected}!")]
    FieldType {
        field: String,
        expected: &'static str,
    },

    /// The secret/token pair does not match the configured one.
    #[error("Invalid Token")]
    InvalidToken,
}

impl GuardError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidToken => StatusCode::UNAUTHORIZED,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for GuardError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorDto::new(self.to_string()))).into_response()
    }
}
