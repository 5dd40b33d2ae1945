//! Normalized request paths.
//!
//! A [`RequestPath`] is the query-less pathname of a request split into its
//! non-empty segments. Normalization drops the query and fragment, repeated
//! slashes and any trailing slash, so `""`, `"/"` and `"//"` are all the root.
//! Backslashes separate segments too; browsers treat `/\` like `//`, so one
//! must never survive into a `Location` header.
//! Values are never modified in place; every transformation returns a new path.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestPath {
    pathname: String,
}

impl RequestPath {
    /// Normalize a raw request target. Never fails.
    pub fn parse(raw: &str) -> Self {
        let end = raw.find(|c| c == '?' || c == '#').unwrap_or(raw.len());
        Self::from_segments(raw[..end].split(['/', '\\']).filter(|s| !s.is_empty()))
    }

    pub fn root() -> Self {
        Self {
            pathname: "/".to_string(),
        }
    }

    fn from_segments<'a>(segments: impl Iterator<Item = &'a str>) -> Self {
        let mut pathname = String::new();
        for segment in segments {
            pathname.push('/');
            pathname.push_str(segment);
        }
        if pathname.is_empty() {
            pathname.push('/');
        }
        Self { pathname }
    }

    pub fn as_str(&self) -> &str {
        &self.pathname
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.pathname.split('/').filter(|s| !s.is_empty())
    }

    pub fn first_segment(&self) -> Option<&str> {
        self.segments().next()
    }

    pub fn last_segment(&self) -> Option<&str> {
        self.segments().last()
    }

    pub fn is_root(&self) -> bool {
        self.pathname == "/"
    }

    /// True when the path equals `prefix` or continues it at a segment boundary.
    /// `/api` matches `/api` and `/api/users` but not `/apiary`.
    pub fn starts_with_segments(&self, prefix: &RequestPath) -> bool {
        prefix.is_root()
            || self.pathname == prefix.pathname
            || self
                .pathname
                .strip_prefix(prefix.as_str())
                .is_some_and(|rest| rest.starts_with('/'))
    }

    /// The path with its first segment removed (`/en/projects` → `/projects`,
    /// `/en` → `/`).
    pub fn without_first_segment(&self) -> RequestPath {
        Self::from_segments(self.segments().skip(1))
    }

    /// The path with `segment` prepended, unless it already starts with it.
    ///
    /// Applying this twice with the same segment yields the same path.
    pub fn with_prefix(&self, segment: &str) -> RequestPath {
        if self.first_segment() == Some(segment) {
            return self.clone();
        }
        Self::from_segments(std::iter::once(segment).chain(self.segments()))
    }
}

impl fmt::Display for RequestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pathname)
    }
}
