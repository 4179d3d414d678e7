//! Minimal HTTP/1.1 file and echo server library.
//!
//! One read, one response, one close per connection. Routes:
//! `GET /echo/{message}`, `GET /user-agent`, `GET /files/{name}`,
//! `POST /files/{name}`; everything else is a 404.

pub mod config;
pub mod error;
pub mod handlers;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod routing;
pub mod storage;

pub use config::ServerConfig;
pub use error::Error;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::Router;
