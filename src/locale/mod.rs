//! Locale subsystem.
//!
//! # Data Flow
//! ```text
//! [i18n] config
//!     → registry.rs (supported codes + default, immutable)
//!     → dictionary.rs (one typed bundle per locale, loaded at startup)
//!
//! Per request:
//!     resolved locale code → DictionarySet::resolve → &Dictionary
//!     (whole-bundle fallback to the default locale)
//! ```

pub mod dictionary;
pub mod registry;

pub use dictionary::{Dictionary, DictionaryError, DictionarySet, ResolvedDictionary};
pub use registry::{LocaleRegistry, RegistryError};
