//! Locale registry: the single source of truth for supported locales.
//!
//! Built once at startup from [`I18nConfig`] and shared behind an `Arc`.
//! There is no global instance; every component that needs it receives it
//! at construction.

use thiserror::Error;

use crate::config::schema::{I18nConfig, LocaleConfig};

/// Error raised when a registry cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("no locales configured")]
    Empty,

    #[error("default locale '{0}' is not a supported locale")]
    UnknownDefault(String),
}

/// Immutable set of supported locales plus the designated default.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
    default_index: usize,
}

impl LocaleRegistry {
    /// Build a registry from a list of locales and the default locale code.
    pub fn new(locales: Vec<LocaleConfig>, default_code: &str) -> Result<Self, RegistryError> {
        if locales.is_empty() {
            return Err(RegistryError::Empty);
        }

        let default_index = locales
            .iter()
            .position(|locale| locale.code == default_code)
            .ok_or_else(|| RegistryError::UnknownDefault(default_code.to_string()))?;

        Ok(Self {
            locales,
            default_index,
        })
    }

    /// Build a registry from the `[i18n]` section of the configuration.
    pub fn from_config(config: &I18nConfig) -> Result<Self, RegistryError> {
        Self::new(config.locales.clone(), &config.default_locale)
    }

    /// Look up a locale by its exact code.
    pub fn get(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Whether `code` is a supported locale.
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// The locale served at the unprefixed root.
    pub fn default_locale(&self) -> &LocaleConfig {
        &self.locales[self.default_index]
    }

    pub fn is_default(&self, code: &str) -> bool {
        self.default_locale().code == code
    }

    /// All supported locales in configured order.
    pub fn iter(&self) -> impl Iterator<Item = &LocaleConfig> {
        self.locales.iter()
    }

    /// All supported locale codes in configured order.
    pub fn codes(&self) -> Vec<&str> {
        self.locales.iter().map(|locale| locale.code.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}
