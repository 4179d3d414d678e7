//! Request parsing.
//!
//! The whole request is expected in one buffer. Lines are split on CRLF with no
//! unescaping. Only the line immediately after the blank separator is taken as
//! the body; anything after it is ignored and `Content-Length` is not used for
//! framing.

use thiserror::Error;

use crate::http::headers::{HeaderName, Headers};
use crate::http::method::Method;
use crate::http::request::{Body, Request, FORM_URLENCODED};

const CRLF: &[u8] = b"\r\n";

/// Error type for malformed requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Wrong format of HTTP request: expected `METHOD PATH VERSION`, got {0:?}")]
    RequestLine(String),

    #[error("Wrong format of HTTP request: unexpected line {0:?}")]
    Line(String),

    #[error("Wrong format of HTTP request: invalid UTF-8 in {0}")]
    Encoding(&'static str),
}

/// Parse a raw request buffer.
pub fn parse_request(raw: &[u8]) -> Result<Request, ParseError> {
    let lines = split_lines(raw);

    let request_line = decode(lines[0], "request line")?;
    let (method, path, version) = match request_line.split(' ').collect::<Vec<_>>()[..] {
        [method, path, version] => (method, path, version),
        _ => return Err(ParseError::RequestLine(request_line.to_string())),
    };

    let mut headers = Headers::new();
    let mut body = None;

    for (index, line) in lines.iter().enumerate().skip(1) {
        if let Some(at) = find(line, b": ") {
            let name = decode(&line[..at], "header")?;
            if let Some(name) = HeaderName::from_wire(name) {
                let value = decode(&line[at + 2..], "header")?;
                headers.insert(name, value);
            }
        } else if line.is_empty() {
            if let Some(next) = lines.get(index + 1) {
                body = Some(decode_body(next, &headers)?);
            }
            break;
        } else {
            return Err(ParseError::Line(String::from_utf8_lossy(line).into_owned()));
        }
    }

    Ok(Request {
        method: Method::from(method),
        path: path.to_string(),
        version: version.to_string(),
        headers,
        body,
    })
}

fn decode_body(line: &[u8], headers: &Headers) -> Result<Body, ParseError> {
    let binary = headers
        .content_type()
        .map(|ct| ct.contains(FORM_URLENCODED))
        .unwrap_or(false);

    if binary {
        Ok(Body::Binary(line.to_vec()))
    } else {
        decode(line, "body").map(|text| Body::Text(text.to_string()))
    }
}

fn decode<'a>(bytes: &'a [u8], what: &'static str) -> Result<&'a str, ParseError> {
    std::str::from_utf8(bytes).map_err(|_| ParseError::Encoding(what))
}

fn split_lines(raw: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut rest = raw;
    while let Some(at) = find(rest, CRLF) {
        lines.push(&rest[..at]);
        rest = &rest[at + CRLF.len()..];
    }
    lines.push(rest);
    lines
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
