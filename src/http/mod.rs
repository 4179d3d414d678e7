//! HTTP/1.1 wire protocol.
//!
//! # Data Flow
//! ```text
//! raw bytes (one read)
//!     → parser.rs (request line, recognized headers, single-line body)
//!     → Request
//!     → [routing::Router picks a handler]
//!     → Response (response.rs, built once)
//!     → serializer.rs (status line, optional headers, body)
//!     → raw bytes (one write)
//! ```
//!
//! # Design Decisions
//! - No keep-alive, chunking or pipelining: one request per connection
//! - Body framing ignores `Content-Length`; only the first body line is read
//! - The content type decides whether a body stays binary or becomes text

pub mod headers;
pub mod method;
pub mod parser;
pub mod request;
pub mod response;
pub mod serializer;
pub mod server;

pub use headers::{HeaderName, Headers};
pub use method::Method;
pub use parser::{parse_request, ParseError};
pub use request::{Body, Request};
pub use response::{Response, ResponseBuilder, StatusCode};
pub use serializer::encode_response;
pub use server::HttpServer;
