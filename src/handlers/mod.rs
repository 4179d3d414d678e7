//! Route handlers.
//!
//! Each handler takes exactly what it needs from the request and returns a
//! complete [`Response`](crate::http::Response). Client mistakes are answered
//! with a 400 carrying a diagnostic; only storage I/O failures come back as
//! [`Error`](crate::Error).

pub mod echo;
pub mod files;
pub mod user_agent;

pub use echo::echo;
pub use files::{create_file, read_file};
pub use user_agent::user_agent;
