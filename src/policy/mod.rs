// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Whitelist policy
//!
//! - Per-tag attribute policies with per-attribute value sanitizers
//! - URL prefix filtering for URL-bearing attributes
//! - Allowed CSS property names

mod attribute;
mod table;
mod url;

pub use attribute::{AttributeSanitizer, TagPolicy};
pub use table::{PolicyBuilder, PolicyTable, DEFAULT_CSS_PROPERTIES};
pub use url::{make_url_sanitizer, UrlSanitizer, DEFAULT_URL_PREFIXES};
