//! Path matching rules used by the classifier.
//!
//! # Responsibilities
//! - Match reserved prefixes on segment boundaries
//! - Match exact reserved file paths
//! - Match root-level verification files by name prefix/suffix
//! - Detect file-like final segments (a `.` in the last segment)
//!
//! # Design Decisions
//! - Paths are normalized before matching, so matchers never see queries
//! - Matching is case-sensitive
//! - No regex: every rule is a plain string comparison

use crate::config::schema::VerificationPattern;
use crate::routing::path::RequestPath;

/// Trait for matching a normalized path against a condition.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path matches this condition.
    fn matches(&self, path: &RequestPath) -> bool;
}

/// Matches a path prefix on segment boundaries.
#[derive(Debug, Clone)]
pub struct PathPrefixMatcher {
    prefix: RequestPath,
}

impl PathPrefixMatcher {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: RequestPath::parse(prefix),
        }
    }
}

impl Matcher for PathPrefixMatcher {
    fn matches(&self, path: &RequestPath) -> bool {
        // A root prefix would swallow every request.
        !self.prefix.is_root() && path.starts_with_segments(&self.prefix)
    }
}

/// Matches one exact path.
#[derive(Debug, Clone)]
pub struct ExactPathMatcher {
    expected: RequestPath,
}

impl ExactPathMatcher {
    pub fn new(path: &str) -> Self {
        Self {
            expected: RequestPath::parse(path),
        }
    }
}

impl Matcher for ExactPathMatcher {
    fn matches(&self, path: &RequestPath) -> bool {
        *path == self.expected
    }
}

/// Matches single-segment paths such as `/google1234abcd.html`.
#[derive(Debug, Clone)]
pub struct FilePatternMatcher {
    prefix: String,
    suffix: String,
}

impl FilePatternMatcher {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }
}

impl From<&VerificationPattern> for FilePatternMatcher {
    fn from(pattern: &VerificationPattern) -> Self {
        Self::new(pattern.prefix.clone(), pattern.suffix.clone())
    }
}

impl Matcher for FilePatternMatcher {
    fn matches(&self, path: &RequestPath) -> bool {
        let mut segments = path.segments();
        match (segments.next(), segments.next()) {
            (Some(name), None) => {
                name.len() >= self.prefix.len() + self.suffix.len()
                    && name.starts_with(&self.prefix)
                    && name.ends_with(&self.suffix)
            }
            _ => false,
        }
    }
}

/// Matches paths whose final segment contains a `.` (file-like).
#[derive(Debug, Clone, Copy, Default)]
pub struct FileExtensionMatcher;

impl Matcher for FileExtensionMatcher {
    fn matches(&self, path: &RequestPath) -> bool {
        path.last_segment().is_some_and(|segment| segment.contains('.'))
    }
}

/// Combines multiple matchers with OR semantics.
#[derive(Debug, Default)]
pub struct AnyMatcher {
    matchers: Vec<Box<dyn Matcher>>,
}

impl AnyMatcher {
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }

    pub fn prefixes<'a>(prefixes: impl IntoIterator<Item = &'a String>) -> Self {
        Self::new(
            prefixes
                .into_iter()
                .map(|p| Box::new(PathPrefixMatcher::new(p)) as Box<dyn Matcher>)
                .collect(),
        )
    }

    pub fn push(&mut self, matcher: impl Matcher + 'static) {
        self.matchers.push(Box::new(matcher));
    }
}

impl Matcher for AnyMatcher {
    fn matches(&self, path: &RequestPath) -> bool {
        // Any matcher may pass (OR); empty never matches
        self.matchers.iter().any(|m| m.matches(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(raw: &str) -> RequestPath {
        RequestPath::parse(raw)
    }

    #[test]
    fn test_prefix_matcher() {
        let matcher = PathPrefixMatcher::new("/_next");
        assert!(matcher.matches(&path("/_next")));
        assert!(matcher.matches(&path("/_next/static/chunk")));
        assert!(!matcher.matches(&path("/_nextish")));
        assert!(!matcher.matches(&path("/")));
    }

    #[test]
    fn test_root_prefix_never_matches() {
        let matcher = PathPrefixMatcher::new("/");
        assert!(!matcher.matches(&path("/anything")));
    }

    #[test]
    fn test_exact_matcher() {
        let matcher = ExactPathMatcher::new("/robots.txt");
        assert!(matcher.matches(&path("/robots.txt")));
        assert!(matcher.matches(&path("/robots.txt?v=2")));
        assert!(!matcher.matches(&path("/ar/robots.txt")));
    }

    #[test]
    fn test_file_pattern_matcher() {
        let matcher = FilePatternMatcher::new("google", ".html");
        assert!(matcher.matches(&path("/google1234abcd.html")));
        assert!(matcher.matches(&path("/google.html")));
        assert!(!matcher.matches(&path("/google")));
        assert!(!matcher.matches(&path("/verify/google1.html")));
        assert!(!matcher.matches(&path("/GOOGLE1.html")));
    }

    #[test]
    fn test_file_extension_matcher() {
        let matcher = FileExtensionMatcher;
        assert!(matcher.matches(&path("/favicon.ico")));
        assert!(matcher.matches(&path("/ar/cv.pdf")));
        assert!(!matcher.matches(&path("/v1.2/projects")));
        assert!(!matcher.matches(&path("/")));
    }

    #[test]
    fn test_any_matcher() {
        let mut matcher = AnyMatcher::prefixes(&["/api".to_string()]);
        matcher.push(ExactPathMatcher::new("/health"));
        assert!(matcher.matches(&path("/api/x")));
        assert!(matcher.matches(&path("/health")));
        assert!(!matcher.matches(&path("/projects")));
        assert!(!AnyMatcher::default().matches(&path("/api")));
    }
}
