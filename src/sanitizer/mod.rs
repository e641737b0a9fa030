// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTML sanitization
//!
//! Provides the whitelist tree sanitizer and the string entry point.

mod config;
mod tree;

pub use config::{SanitizerConfig, DEFAULT_MAX_DEPTH};
pub use tree::Sanitizer;

use lazy_static::lazy_static;

use crate::error::Result;

lazy_static! {
    /// Process-wide sanitizer: default table, disallowed elements escaped
    static ref DEFAULT_SANITIZER: Sanitizer = Sanitizer::new(SanitizerConfig::default());
}

/// Sanitize an HTML fragment with the default policy, escaping disallowed
/// elements as visible text.
pub fn sanitize(html: &str) -> Result<String> {
    DEFAULT_SANITIZER.sanitize_string(html)
}

/// The shared default sanitizer
pub fn default_sanitizer() -> &'static Sanitizer {
    &DEFAULT_SANITIZER
}
