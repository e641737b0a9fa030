// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! The whitelist table: allowed tags, their attributes, and CSS properties

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use super::attribute::{AttributeSanitizer, TagPolicy};
use super::url::{UrlSanitizer, DEFAULT_URL_PREFIXES};

/// CSS properties allowed when no explicit set is configured
pub const DEFAULT_CSS_PROPERTIES: &[&str] = &["border", "margin", "padding"];

/// Tags that only carry the global attributes in the default table
const GLOBAL_ONLY_TAGS: &[&str] = &["p", "div", "span", "br", "b", "i", "u"];

/// Immutable whitelist consulted by the sanitizer.
///
/// Built once and shared read-only; nothing mutates it after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyTable {
    tags: HashMap<String, TagPolicy>,
    css: BTreeSet<String>,
}

impl PolicyTable {
    /// Build a table, falling back to the defaults for every absent part.
    ///
    /// `urls` only feeds the URL sanitizers of the default tag table; an
    /// explicit `tags` table carries its own sanitizers.
    pub fn build(
        tags: Option<HashMap<String, TagPolicy>>,
        css: Option<BTreeSet<String>>,
        urls: Option<Vec<String>>,
    ) -> Self {
        let urls = urls.unwrap_or_else(|| {
            DEFAULT_URL_PREFIXES.iter().map(|s| s.to_string()).collect()
        });

        let tags = match tags {
            Some(explicit) => explicit
                .into_iter()
                .map(|(tag, policy)| (tag.to_ascii_lowercase(), policy.normalized()))
                .collect(),
            None => default_tags(UrlSanitizer::new(urls)),
        };

        let css = match css {
            Some(explicit) => explicit
                .into_iter()
                .map(|p| p.to_ascii_lowercase())
                .collect(),
            None => DEFAULT_CSS_PROPERTIES.iter().map(|s| s.to_string()).collect(),
        };

        Self { tags, css }
    }

    /// Start a builder
    pub fn builder() -> PolicyBuilder {
        PolicyBuilder::default()
    }

    /// Attribute policy for a lowercase tag name, if the tag is allowed
    pub fn tag(&self, name: &str) -> Option<&TagPolicy> {
        self.tags.get(name)
    }

    /// Whether the lowercase tag name is allowed
    pub fn allows_tag(&self, name: &str) -> bool {
        self.tags.contains_key(name)
    }

    /// Allowed tag names, sorted
    pub fn tag_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tags.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Allowed CSS property names
    pub fn css(&self) -> &BTreeSet<String> {
        &self.css
    }

    /// Whether the lowercase CSS property name is allowed
    pub fn allows_css(&self, property: &str) -> bool {
        self.css.contains(property)
    }
}

impl Default for PolicyTable {
    fn default() -> Self {
        Self::build(None, None, None)
    }
}

/// The default tag table, with URL-bearing attributes checked by `urls`
fn default_tags(urls: UrlSanitizer) -> HashMap<String, TagPolicy> {
    let identity = || AttributeSanitizer::Identity;
    let url = || AttributeSanitizer::Url(urls.clone());

    let global = TagPolicy::new()
        .allow("dir", identity())
        .allow("lang", identity())
        .allow("title", identity());

    let anchor = TagPolicy::new()
        .allow("download", identity())
        .allow("href", url())
        .allow("hreflang", identity())
        .allow("ping", url())
        .allow("rel", identity())
        .allow("target", identity())
        .allow("type", identity());

    let image = TagPolicy::new()
        .allow("alt", identity())
        .allow("height", identity())
        .allow("src", url())
        .allow("width", identity());

    let mut tags = HashMap::new();
    tags.insert("a".to_string(), TagPolicy::merge(&global, &anchor));
    tags.insert("img".to_string(), TagPolicy::merge(&global, &image));
    for tag in GLOBAL_ONLY_TAGS {
        tags.insert(tag.to_string(), global.clone());
    }
    tags
}

/// Builder for [`PolicyTable`]
#[derive(Debug, Clone, Default)]
pub struct PolicyBuilder {
    tags: Option<HashMap<String, TagPolicy>>,
    css: Option<BTreeSet<String>>,
    urls: Option<Vec<String>>,
}

impl PolicyBuilder {
    /// Create a builder with every part defaulted
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole tag table
    pub fn tags(mut self, tags: HashMap<String, TagPolicy>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Add one tag to an explicit table (starts an empty table if none)
    pub fn tag(mut self, name: impl Into<String>, policy: TagPolicy) -> Self {
        self.tags
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), policy);
        self
    }

    /// Replace the allowed CSS property set
    pub fn css<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.css = Some(properties.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the allowed URL prefixes used by the default tag table
    pub fn urls<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.urls = Some(prefixes.into_iter().map(Into::into).collect());
        self
    }

    /// Build the table
    pub fn build(self) -> PolicyTable {
        PolicyTable::build(self.tags, self.css, self.urls)
    }
}
