//! Route matching logic.
//!
//! # Responsibilities
//! - Match the request method (exact)
//! - Match the path by prefix, exact value, or `/`-segment count
//! - Combine conditions with AND semantics
//!
//! # Design Decisions
//! - Path matching is case-sensitive and done on the raw, unescaped path
//! - No regex to guarantee O(n) matching

use crate::http::{Method, Request};

/// Trait for matching requests against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the request matches this condition.
    fn matches(&self, req: &Request) -> bool;
}

/// Matches the request method.
#[derive(Debug, Clone)]
pub struct MethodMatcher {
    method: Method,
}

impl MethodMatcher {
    pub fn new(method: Method) -> Self {
        Self { method }
    }
}

impl Matcher for MethodMatcher {
    fn matches(&self, req: &Request) -> bool {
        req.method() == &self.method
    }
}

/// Matches the request path prefix.
#[derive(Debug, Clone)]
pub struct PathPrefixMatcher {
    prefix: String,
}

impl PathPrefixMatcher {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Matcher for PathPrefixMatcher {
    fn matches(&self, req: &Request) -> bool {
        req.path().starts_with(&self.prefix)
    }
}

/// Matches one exact path.
#[derive(Debug, Clone)]
pub struct ExactPathMatcher {
    path: String,
}

impl ExactPathMatcher {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Matcher for ExactPathMatcher {
    fn matches(&self, req: &Request) -> bool {
        req.path() == self.path
    }
}

/// Matches paths that split into exactly `count` segments on `/`.
///
/// The leading slash counts: `/files/a.txt` has 3 segments.
#[derive(Debug, Clone, Copy)]
pub struct SegmentCountMatcher {
    count: usize,
}

impl SegmentCountMatcher {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl Matcher for SegmentCountMatcher {
    fn matches(&self, req: &Request) -> bool {
        req.path().split('/').count() == self.count
    }
}

/// Combines multiple matchers with AND semantics.
#[derive(Debug)]
pub struct AndMatcher {
    matchers: Vec<Box<dyn Matcher>>,
}

impl AndMatcher {
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }
}

impl Matcher for AndMatcher {
    fn matches(&self, req: &Request) -> bool {
        self.matchers.iter().all(|m| m.matches(req))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::parse_request;

    fn get(path: &str) -> Request {
        parse_request(format!("GET {} HTTP/1.1\r\n\r\n", path).as_bytes()).unwrap()
    }

    #[test]
    fn test_method_matcher() {
        let matcher = MethodMatcher::new(Method::Post);
        assert!(!matcher.matches(&get("/")));

        let post = parse_request(b"POST / HTTP/1.1\r\n\r\n").unwrap();
        assert!(matcher.matches(&post));
    }

    #[test]
    fn test_path_matchers() {
        assert!(PathPrefixMatcher::new("/files/").matches(&get("/files/a")));
        assert!(!PathPrefixMatcher::new("/files/").matches(&get("/Files/a")));

        assert!(ExactPathMatcher::new("/user-agent").matches(&get("/user-agent")));
        assert!(!ExactPathMatcher::new("/user-agent").matches(&get("/user-agent/")));
    }

    #[test]
    fn test_segment_count() {
        let three = SegmentCountMatcher::new(3);
        assert!(three.matches(&get("/echo/abc")));
        assert!(three.matches(&get("/echo/")));
        assert!(!three.matches(&get("/echo/a/b")));
        assert!(!three.matches(&get("/echo")));
    }

    #[test]
    fn test_and_matcher() {
        let matcher = AndMatcher::new(vec![
            Box::new(MethodMatcher::new(Method::Get)),
            Box::new(PathPrefixMatcher::new("/echo/")),
            Box::new(SegmentCountMatcher::new(3)),
        ]);
        assert!(matcher.matches(&get("/echo/hi")));
        assert!(!matcher.matches(&get("/echo/hi/there")));
    }
}
