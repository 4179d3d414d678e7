//! Echo route.

use crate::http::{Response, StatusCode};

/// `GET /echo/{message}`: the message back as plain text.
pub fn echo(message: &str) -> Response {
    Response::text(StatusCode::OK, message)
}
