// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! URL prefix filtering for URL-bearing attributes

use serde::{Deserialize, Serialize};

/// URL prefixes allowed when no explicit list is configured
pub const DEFAULT_URL_PREFIXES: &[&str] = &["http://", "https://"];

/// Passes through values that start with an allowed prefix, empties the rest.
///
/// Matching is a plain, case-sensitive prefix test in list order, so
/// `javascript:`, `data:` and any scheme not listed come out as `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UrlSanitizer {
    prefixes: Vec<String>,
}

impl UrlSanitizer {
    /// Create a sanitizer for the given ordered prefix list
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// The configured prefixes, in match order
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Sanitize a single attribute value
    pub fn sanitize(&self, value: &str) -> String {
        if value.is_empty() {
            return String::new();
        }
        match self.prefixes.iter().find(|p| value.starts_with(p.as_str())) {
            Some(_) => value.to_string(),
            None => String::new(),
        }
    }
}

impl Default for UrlSanitizer {
    fn default() -> Self {
        Self::new(DEFAULT_URL_PREFIXES.iter().copied())
    }
}

/// Build a URL sanitizer function from an ordered prefix list
pub fn make_url_sanitizer<I, S>(allowed_prefixes: I) -> impl Fn(&str) -> String
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let sanitizer = UrlSanitizer::new(allowed_prefixes);
    move |value: &str| sanitizer.sanitize(value)
}
