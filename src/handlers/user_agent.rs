//! User-Agent reflection route.

use crate::http::{Headers, Response, StatusCode};

pub const MISSING_USER_AGENT: &str = "Error: no User-Agent found in your HTTP headers";

/// `GET /user-agent`: reflects the `User-Agent` header.
pub fn user_agent(headers: &Headers) -> Response {
    match headers.user_agent() {
        Some(agent) => Response::text(StatusCode::OK, agent),
        None => Response::text(StatusCode::BAD_REQUEST, MISSING_USER_AGENT),
    }
}
