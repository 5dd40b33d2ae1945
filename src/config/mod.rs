//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → SiteConfig (validated, immutable)
//!     → startup builds registry, dictionaries, URL builder from it
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no hot reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, parse_config, ConfigError};
pub use schema::{
    ChangeFrequency, ClassifierConfig, I18nConfig, ListenerConfig, LocaleConfig, LogFormat,
    ManifestConfig, ObservabilityConfig, SiteConfig, SitemapConfig, TextDirection,
};
