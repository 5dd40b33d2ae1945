//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → path.rs (normalize: drop query, empty segments)
//!     → classifier.rs (asset / api / reserved / locale-qualified / unqualified)
//!     → classifier.rs LocaleDetector (leading locale segment)
//!     → router.rs (decision table)
//!     → Return: PassThrough | Redirect(308) | InternalRewrite
//! ```
//!
//! # Design Decisions
//! - Matchers compiled at startup, immutable at runtime
//! - No regex in hot path (segment comparisons only)
//! - Deterministic: same input always yields the same action
//! - First matching classification rule wins

pub mod classifier;
pub mod matcher;
pub mod path;
pub mod router;

pub use classifier::{LocaleDetector, PathClassifier, RouteClassification};
pub use path::RequestPath;
pub use router::{LocaleRouter, RoutingAction, RoutingDecision};
