//! Response serialization.

use crate::http::response::Response;

/// Encode a response to wire bytes.
///
/// Order is fixed: status line, `Content-Type` if set, `Content-Length` if set
/// (an explicit zero is written), blank line, body. Never fails.
pub fn encode_response(res: &Response) -> Vec<u8> {
    let body = res.body().map(|b| b.as_bytes()).unwrap_or_default();

    let mut head = format!("HTTP/1.1 {}\r\n", res.status());
    if let Some(content_type) = res.content_type() {
        head.push_str(&format!("Content-Type: {}\r\n", content_type));
    }
    if let Some(length) = res.content_length() {
        head.push_str(&format!("Content-Length: {}\r\n", length));
    }
    head.push_str("\r\n");

    let mut out = Vec::with_capacity(head.len() + body.len());
    out.extend_from_slice(head.as_bytes());
    out.extend_from_slice(body);
    out
}
