//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Outgoing response:
//!     → headers.rs (nosniff, Referrer-Policy)
//!     → Send to client
//! ```

pub mod headers;
