//! Per-locale content dictionaries.
//!
//! Each supported locale may ship a `<code>.json` bundle in the configured
//! content directory. Bundles are deserialized into the strongly typed
//! [`Dictionary`] record at startup, so a missing or misspelled key fails the
//! boot instead of surfacing as an empty string on a page.
//!
//! Resolution falls back bundle-by-bundle: a locale without its own bundle is
//! served the default locale's bundle in full, never a per-key mix.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::locale::registry::LocaleRegistry;
use crate::observability::metrics;

/// Error raised while loading dictionaries at startup.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("default locale '{locale}' has no dictionary bundle at {path}")]
    MissingDefault { locale: String, path: PathBuf },

    #[error("failed to read dictionary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid dictionary {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// All localized content for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Dictionary {
    pub name: String,
    pub full_name: String,
    pub title: String,
    pub location: String,
    pub expected_graduation: String,
    pub hero: HeroStrings,
    pub nav: Vec<NavItem>,
    pub skills: SkillsStrings,
    pub projects: Vec<ProjectEntry>,
    pub section_headings: SectionHeadings,
    pub projects_page: ProjectsPageStrings,
    pub button_labels: ButtonLabels,
    pub contact: ContactStrings,
    pub footer: FooterStrings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HeroStrings {
    pub arc_label: String,
    pub main_title: String,
    pub subtitle: String,
    pub stats: String,
    pub badge: String,
    pub cv_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SkillsStrings {
    pub section_label: String,
    pub columns: Vec<SkillColumn>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SkillColumn {
    pub title: String,
    pub items: Vec<String>,
}

/// One project card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectEntry {
    pub episode: String,
    pub title: String,
    pub impact: String,
    pub tech_chips: Vec<String>,
    pub github: String,
    /// Live deployment, when there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SectionHeadings {
    pub projects: String,
    pub experience: String,
    pub education: String,
    pub certifications: String,
    pub internship_badge: String,
    pub tech_loadout: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectsPageStrings {
    pub heading: String,
    pub subtext: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ButtonLabels {
    pub view_projects: String,
    pub download_cv: String,
    pub read_more: String,
    pub case_study: String,
    pub github: String,
    pub email_me: String,
    pub linkedin: String,
    pub repo: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ContactStrings {
    pub heading: String,
    pub subtext: String,
    pub availability: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FooterStrings {
    pub copyright: String,
}

impl Dictionary {
    /// Parse a bundle from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Outcome of resolving a locale to a dictionary.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedDictionary<'a> {
    /// Locale the caller asked for.
    pub requested: &'a str,
    /// Locale whose bundle is actually served.
    pub served: &'a str,
    pub dictionary: &'a Dictionary,
}

impl ResolvedDictionary<'_> {
    pub fn is_fallback(&self) -> bool {
        self.requested != self.served
    }
}

/// Immutable set of dictionaries keyed by locale code.
#[derive(Debug, Clone)]
pub struct DictionarySet {
    bundles: HashMap<String, Dictionary>,
    default_code: String,
}

impl DictionarySet {
    /// Build a set from already parsed bundles.
    ///
    /// Bundles for codes the registry does not know are dropped. The default
    /// locale's bundle is required.
    pub fn new(
        mut bundles: HashMap<String, Dictionary>,
        registry: &LocaleRegistry,
    ) -> Result<Self, DictionaryError> {
        bundles.retain(|code, _| {
            let known = registry.contains(code);
            if !known {
                tracing::warn!(locale = %code, "Ignoring dictionary for unsupported locale");
            }
            known
        });

        let default_code = registry.default_locale().code.clone();
        if !bundles.contains_key(&default_code) {
            return Err(DictionaryError::MissingDefault {
                locale: default_code,
                path: PathBuf::new(),
            });
        }

        Ok(Self {
            bundles,
            default_code,
        })
    }

    /// Load `<code>.json` for every registry locale from `dir`.
    ///
    /// A missing non-default bundle is allowed and logged; that locale will be
    /// served the default bundle.
    pub fn load_dir(dir: &Path, registry: &LocaleRegistry) -> Result<Self, DictionaryError> {
        let mut bundles = HashMap::new();

        for locale in registry.iter() {
            let path = dir.join(format!("{}.json", locale.code));
            let text = match fs::read_to_string(&path) {
                Ok(text) => text,
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    if registry.is_default(&locale.code) {
                        return Err(DictionaryError::MissingDefault {
                            locale: locale.code.clone(),
                            path,
                        });
                    }
                    tracing::warn!(
                        locale = %locale.code,
                        path = %path.display(),
                        "No dictionary bundle, default locale content will be served"
                    );
                    continue;
                }
                Err(source) => return Err(DictionaryError::Io { path, source }),
            };

            let dictionary = Dictionary::from_json(&text)
                .map_err(|source| DictionaryError::Parse { path: path.clone(), source })?;

            tracing::debug!(locale = %locale.code, path = %path.display(), "Loaded dictionary");
            bundles.insert(locale.code.clone(), dictionary);
        }

        Self::new(bundles, registry)
    }

    /// Dictionary for `code`, or the default locale's when absent.
    pub fn resolve(&self, code: &str) -> &Dictionary {
        self.lookup(code).1
    }

    /// Like [`DictionarySet::resolve`] but reports which bundle was served.
    pub fn resolve_entry<'a>(&'a self, code: &'a str) -> ResolvedDictionary<'a> {
        let (served, dictionary) = self.lookup(code);
        ResolvedDictionary {
            requested: code,
            served,
            dictionary,
        }
    }

    /// Served locale code and bundle; both borrow only from `self`.
    fn lookup(&self, code: &str) -> (&str, &Dictionary) {
        if let Some((served, dictionary)) = self.bundles.get_key_value(code) {
            return (served, dictionary);
        }

        metrics::record_dictionary_fallback(code);
        tracing::debug!(requested = %code, served = %self.default_code, "Dictionary fallback");
        (&self.default_code, self.default_dictionary())
    }

    pub fn default_dictionary(&self) -> &Dictionary {
        // Presence checked in `new`.
        &self.bundles[&self.default_code]
    }

    /// Whether `code` has its own bundle.
    pub fn has_bundle(&self, code: &str) -> bool {
        self.bundles.contains_key(code)
    }
}
