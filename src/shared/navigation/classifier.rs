/**
 * Path Classifier
 *
 * Static tables of exact and prefix path patterns. A path matches when it
 * equals an exact entry, or when it starts with a prefix entry followed by
 * a `/`. There are no wildcards and no normalisation: `/about/` and
 * `/about` are different paths, and `/api` alone does not match the `/api`
 * prefix.
 *
 * The tables are built once at startup and never mutated.
 */

use std::collections::BTreeSet;

/// Exact public paths of the site
///
/// The SPA bases are prefixes rather than exact entries: reloading any page
/// of a shell goes through the server first.
pub const PUBLIC_EXACT: &[&str] = &[
    "/",
    "/frameworks-test",
    "/apps",
    "/about",
    "/cloudflare",
    "/features",
];

/// Public path prefixes of the site
pub const PUBLIC_PREFIXES: &[&str] = &[
    "/api",
    "/docs",
    "/svelte-spa",
    "/solid-spa",
    "/qwik-spa",
    "/qwik-spa-auth",
];

/// Base paths of the single-page shells
///
/// Each is also a public prefix; every path below a base is answered with
/// the shell's document.
pub const SPA_BASES: &[&str] = &["/svelte-spa", "/solid-spa", "/qwik-spa", "/qwik-spa-auth"];

/// Result of classifying a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub public: bool,
}

/// A set of exact and prefix path patterns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathRules {
    exact: BTreeSet<String>,
    prefixes: BTreeSet<String>,
}

impl PathRules {
    /// Build a rule set from exact paths and prefixes
    pub fn new<E, P>(exact: E, prefixes: P) -> Self
    where
        E: IntoIterator,
        E::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            exact: exact.into_iter().map(Into::into).collect(),
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// The canonical public rule set of the site
    pub fn public_site() -> Self {
        Self::new(PUBLIC_EXACT.iter().copied(), PUBLIC_PREFIXES.iter().copied())
    }

    /// Whether `path` matches any exact entry or any prefix entry
    pub fn matches(&self, path: &str) -> bool {
        self.exact.contains(path)
            || self.prefixes.iter().any(|prefix| {
                path.strip_prefix(prefix.as_str())
                    .is_some_and(|rest| rest.starts_with('/'))
            })
    }

    /// Classify `path` against this table as a public-path table
    pub fn classify(&self, path: &str) -> Classification {
        Classification {
            public: self.matches(path),
        }
    }

    pub fn exact(&self) -> impl Iterator<Item = &str> {
        self.exact.iter().map(String::as_str)
    }

    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.prefixes.iter().map(String::as_str)
    }
}
