//! Parsed request values.
//!
//! # Responsibilities
//! - Hold the request line (method, path, version)
//! - Hold the recognized headers
//! - Hold the optional single-line body, typed by content type
//!
//! # Design Decisions
//! - Immutable once parsed; fields exposed through accessors
//! - A missing body is `None`, never an uninitialized field

use crate::http::headers::Headers;
use crate::http::method::Method;

/// Content type token that keeps the body as raw bytes.
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Request payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Decoded as UTF-8 text.
    Text(String),
    /// Raw bytes, kept when the content type is url-encoded form data.
    Binary(Vec<u8>),
}

impl Body {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Body::Text(text) => text.as_bytes(),
            Body::Binary(bytes) => bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, Body::Binary(_))
    }
}

impl From<&str> for Body {
    fn from(text: &str) -> Self {
        Body::Text(text.to_string())
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Body::Text(text)
    }
}

impl From<Vec<u8>> for Body {
    fn from(bytes: Vec<u8>) -> Self {
        Body::Binary(bytes)
    }
}

/// A request read from one connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) version: String,
    pub(crate) headers: Headers,
    pub(crate) body: Option<Body>,
}

impl Request {
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Raw path including the leading slash. Not percent-decoded.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    /// Path split on `/`. The leading slash yields an empty first segment.
    pub fn segments(&self) -> Vec<&str> {
        self.path.split('/').collect()
    }
}
