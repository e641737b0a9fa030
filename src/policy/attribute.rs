// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Per-attribute sanitizers and per-tag attribute policies

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::url::UrlSanitizer;

/// How a single allowed attribute's value is treated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeSanitizer {
    /// Value is copied unchanged
    Identity,
    /// Value must start with one of the allowed URL prefixes, else it is emptied
    Url(UrlSanitizer),
}

impl AttributeSanitizer {
    /// URL sanitizer for the given prefix list
    pub fn url<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AttributeSanitizer::Url(UrlSanitizer::new(prefixes))
    }

    /// Apply the sanitizer to a raw attribute value
    pub fn apply(&self, value: &str) -> String {
        match self {
            AttributeSanitizer::Identity => value.to_string(),
            AttributeSanitizer::Url(url) => url.sanitize(value),
        }
    }
}

/// Allowed attributes of one tag, each with its value sanitizer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagPolicy {
    attributes: HashMap<String, AttributeSanitizer>,
}

impl TagPolicy {
    /// Create an empty policy (no attributes allowed)
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: allow an attribute with the given sanitizer
    pub fn allow(mut self, name: impl Into<String>, sanitizer: AttributeSanitizer) -> Self {
        self.insert(name, sanitizer);
        self
    }

    /// Allow an attribute with the given sanitizer
    pub fn insert(&mut self, name: impl Into<String>, sanitizer: AttributeSanitizer) {
        self.attributes
            .insert(name.into().to_ascii_lowercase(), sanitizer);
    }

    /// Sanitizer for an attribute, if it is allowed
    pub fn get(&self, name: &str) -> Option<&AttributeSanitizer> {
        self.attributes.get(name)
    }

    /// Whether the attribute is allowed
    pub fn allows(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Allowed attribute names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.attributes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of allowed attributes
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Whether no attributes are allowed
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Right-biased union: on a shared key, `overlay`'s sanitizer wins
    pub fn merge(base: &TagPolicy, overlay: &TagPolicy) -> TagPolicy {
        let mut merged = base.clone();
        for (name, sanitizer) in &overlay.attributes {
            merged.attributes.insert(name.clone(), sanitizer.clone());
        }
        merged
    }

    /// Lowercase every attribute name; later duplicates win
    pub(crate) fn normalized(self) -> TagPolicy {
        let mut out = TagPolicy::new();
        for (name, sanitizer) in self.attributes {
            out.insert(name, sanitizer);
        }
        out
    }
}

impl<S: Into<String>> FromIterator<(S, AttributeSanitizer)> for TagPolicy {
    fn from_iter<T: IntoIterator<Item = (S, AttributeSanitizer)>>(iter: T) -> Self {
        let mut policy = TagPolicy::new();
        for (name, sanitizer) in iter {
            policy.insert(name, sanitizer);
        }
        policy
    }
}
