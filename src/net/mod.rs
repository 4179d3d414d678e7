//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming TCP connection
//!     → listener.rs (accept, connection limit)
//!     → connection.rs (one read, route, one write, close)
//!
//! Connection States:
//!     Accepted → Reading → Routing → Writing → Closed
//! ```
//!
//! # Design Decisions
//! - Bounded accept prevents resource exhaustion
//! - Each connection tracked so shutdown can drain in-flight work
//! - No keep-alive and no read timeout: a silent client holds its task until
//!   shutdown's drain deadline abandons it
//! - Every read is routed, including an empty one (answered with a 400)

pub mod connection;
pub mod listener;

pub use connection::{serve_connection, ConnectionId, ConnectionTracker};
pub use listener::{ConnectionPermit, Listener, ListenerError};
