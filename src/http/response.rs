//! Response values and their builder.
//!
//! # Design Decisions
//! - Built once through [`ResponseBuilder`], then only read
//! - No validation: a `content_length` that disagrees with the body is kept as-is
//! - Reason phrases exist only for the codes this server emits

use std::fmt;

use crate::http::request::Body;

/// Numeric status code with an optional reason phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode(u16);

impl StatusCode {
    pub const OK: StatusCode = StatusCode(200);
    pub const CREATED: StatusCode = StatusCode(201);
    pub const BAD_REQUEST: StatusCode = StatusCode(400);
    pub const NOT_FOUND: StatusCode = StatusCode(404);
    pub const INTERNAL_SERVER_ERROR: StatusCode = StatusCode(500);

    pub const fn from_u16(code: u16) -> Self {
        StatusCode(code)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Reason phrase, if this code has one. Other codes go out as a bare number.
    pub fn reason(&self) -> Option<&'static str> {
        match self.0 {
            200 => Some("OK"),
            201 => Some("CREATED"),
            400 => Some("BAD REQUEST"),
            404 => Some("NOT FOUND"),
            500 => Some("INTERNAL SERVER ERROR"),
            _ => None,
        }
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        StatusCode(code)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason() {
            Some(reason) => write!(f, "{} {}", self.0, reason),
            None => write!(f, "{}", self.0),
        }
    }
}

/// An outgoing response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: StatusCode,
    content_type: Option<String>,
    content_length: Option<usize>,
    body: Option<Body>,
}

impl Response {
    pub fn builder(status: StatusCode) -> ResponseBuilder {
        ResponseBuilder::new(status)
    }

    /// `text/plain` response whose length is the message's byte length.
    pub fn text(status: StatusCode, message: impl Into<String>) -> Self {
        let message = message.into();
        Self::builder(status)
            .content_type("text/plain")
            .content_length(message.len())
            .body(message)
            .build()
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn content_length(&self) -> Option<usize> {
        self.content_length
    }

    pub fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }
}

/// Fluent builder for [`Response`].
#[derive(Debug, Clone)]
pub struct ResponseBuilder {
    inner: Response,
}

impl ResponseBuilder {
    fn new(status: StatusCode) -> Self {
        Self {
            inner: Response {
                status,
                content_type: None,
                content_length: None,
                body: None,
            },
        }
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.inner.content_type = Some(content_type.into());
        self
    }

    pub fn content_length(mut self, length: usize) -> Self {
        self.inner.content_length = Some(length);
        self
    }

    pub fn body(mut self, body: impl Into<Body>) -> Self {
        self.inner.body = Some(body.into());
        self
    }

    pub fn build(self) -> Response {
        self.inner
    }
}
