//! Dispatcher bypass rules.
//!
//! Static-asset and framework-internal paths skip zone dispatch entirely:
//! no resolve, no guard, no rewrite, no propagated headers.
//!
//! # Design Decisions
//! - Explicit rule forms (exact, prefix, extension) instead of a regex,
//!   to keep matching O(n) over the rule list
//! - Rules combine with OR semantics: any match bypasses
//! - Compiled once from config, immutable at runtime

use std::fmt;

use crate::config::schema::BypassConfig;

/// Trait for matching a request path against one bypass condition.
pub trait Matcher: Send + Sync + fmt::Debug {
    /// Returns true if the path matches this condition.
    fn matches(&self, path: &str) -> bool;
}

/// Matches a path exactly.
#[derive(Debug, Clone)]
pub struct ExactPathMatcher {
    path: String,
}

impl ExactPathMatcher {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Matcher for ExactPathMatcher {
    fn matches(&self, path: &str) -> bool {
        path == self.path
    }
}

/// Matches a path prefix.
#[derive(Debug, Clone)]
pub struct PathPrefixMatcher {
    prefix: String,
}

impl PathPrefixMatcher {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Matcher for PathPrefixMatcher {
    fn matches(&self, path: &str) -> bool {
        path.starts_with(&self.prefix)
    }
}

/// Matches a trailing file extension (without the dot).
#[derive(Debug, Clone)]
pub struct ExtensionMatcher {
    extension: String,
}

impl ExtensionMatcher {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }
}

impl Matcher for ExtensionMatcher {
    fn matches(&self, path: &str) -> bool {
        match path.rsplit_once('.') {
            Some((stem, ext)) => ext == self.extension && !stem.ends_with('/'),
            None => false,
        }
    }
}

/// Compiled bypass rule set. Any matching rule bypasses the dispatcher.
#[derive(Debug)]
pub struct BypassRules {
    matchers: Vec<Box<dyn Matcher>>,
}

impl BypassRules {
    /// Compile the configured rule set.
    pub fn from_config(config: &BypassConfig) -> Self {
        let mut matchers: Vec<Box<dyn Matcher>> = Vec::new();
        for path in &config.exact_paths {
            matchers.push(Box::new(ExactPathMatcher::new(path)));
        }
        for prefix in &config.path_prefixes {
            matchers.push(Box::new(PathPrefixMatcher::new(prefix)));
        }
        for ext in &config.extensions {
            matchers.push(Box::new(ExtensionMatcher::new(ext)));
        }
        Self { matchers }
    }

    /// Returns true if the request path should skip zone dispatch.
    pub fn matches(&self, path: &str) -> bool {
        self.matchers.iter().any(|m| m.matches(path))
    }
}
