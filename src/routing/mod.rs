//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Parsed Request (method, path, headers, body)
//!     → router.rs (route lookup, in table order)
//!     → matcher.rs (method, prefix, exact path, segment count)
//!     → handlers (echo, user-agent, file read, file create)
//!     → Response, or a 404 when nothing matched
//! ```
//!
//! # Design Decisions
//! - Route table fixed at construction, immutable at runtime
//! - No regex in hot path
//! - Deterministic: same input always matches same route
//! - First match wins

pub mod matcher;
pub mod router;

pub use router::{Endpoint, Route, Router};
