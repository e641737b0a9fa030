// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Sanitizer configuration

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ErrorContext, Result};
use crate::policy::{PolicyTable, TagPolicy};

/// Default maximum element nesting depth below the fragment container
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Sanitizer configuration
///
/// Every field is optional when deserializing:
///
/// ```json
/// {
///   "escape": true,
///   "tags": { "a": { "href": { "url": ["https://"] }, "title": "identity" } },
///   "css": ["margin"],
///   "urls": ["https://"],
///   "max_depth": 128
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizerConfig {
    /// Render disallowed elements as visible text (`true`) or drop them
    pub escape: bool,
    /// Explicit tag table; replaces the default table entirely
    pub tags: Option<HashMap<String, TagPolicy>>,
    /// Explicit allowed CSS property names
    pub css: Option<BTreeSet<String>>,
    /// Allowed URL prefixes for the default table's URL attributes
    pub urls: Option<Vec<String>>,
    /// Elements nested deeper than this are dropped
    pub max_depth: usize,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            escape: true,
            tags: None,
            css: None,
            urls: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl SanitizerConfig {
    /// Create a new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Escape (true) or strip (false) disallowed elements
    pub fn escape(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    /// Replace the tag table
    pub fn tags(mut self, tags: HashMap<String, TagPolicy>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Replace the allowed CSS properties
    pub fn css<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.css = Some(properties.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the allowed URL prefixes
    pub fn urls<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.urls = Some(prefixes.into_iter().map(Into::into).collect());
        self
    }

    /// Set the maximum nesting depth
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Config that silently drops disallowed elements
    pub fn stripping() -> Self {
        Self::default().escape(false)
    }

    /// Build the policy table this config describes
    pub fn policy(&self) -> PolicyTable {
        PolicyTable::build(self.tags.clone(), self.css.clone(), self.urls.clone())
    }

    /// Parse a config from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).config_context("invalid sanitizer config")
    }

    /// Load a config from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .config_context(&format!("reading {}", path.display()))?;
        Self::from_json(&json)
    }
}
