//! Request middleware that runs before content routing.

pub mod locale;

pub use locale::locale_routing;
