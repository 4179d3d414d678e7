//! Recognized request headers.
//!
//! # Design Decisions
//! - Only a fixed, case-sensitive set of names is retained
//! - Absent headers are `None`; an empty value is `Some("")`
//! - Duplicates: last occurrence wins

use std::collections::HashMap;
use std::fmt;

/// The request headers the parser extracts. Everything else is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderName {
    UserAgent,
    Host,
    ContentLength,
    ContentType,
}

impl HeaderName {
    pub const ALL: [HeaderName; 4] = [
        HeaderName::UserAgent,
        HeaderName::Host,
        HeaderName::ContentLength,
        HeaderName::ContentType,
    ];

    /// Look up a header by its exact wire name.
    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|h| h.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderName::UserAgent => "User-Agent",
            HeaderName::Host => "Host",
            HeaderName::ContentLength => "Content-Length",
            HeaderName::ContentType => "Content-Type",
        }
    }
}

impl fmt::Display for HeaderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values of the recognized headers present in a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    values: HashMap<HeaderName, String>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: HeaderName) -> Option<&str> {
        self.values.get(&name).map(String::as_str)
    }

    pub fn insert(&mut self, name: HeaderName, value: impl Into<String>) {
        self.values.insert(name, value.into());
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.get(HeaderName::UserAgent)
    }

    pub fn content_type(&self) -> Option<&str> {
        self.get(HeaderName::ContentType)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
