//! Crate-level error type and its mapping to responses.

use thiserror::Error;

use crate::http::parser::ParseError;
use crate::http::response::{Response, StatusCode};

/// Failures that escape a handler.
///
/// Handler-level validation (missing header, missing file, ...) is not an
/// error: handlers answer those with their own 400 responses.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Parse(_) => StatusCode::BAD_REQUEST,
            Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// `text/plain` response carrying `Error: <message>`.
    pub fn into_response(self) -> Response {
        Response::text(self.status(), format!("Error: {}", self))
    }
}
