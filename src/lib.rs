// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # htmlguard - Whitelist HTML Sanitizer
//!
//! Sanitizes untrusted HTML fragments (release notes, comments, rich text)
//! before rendering. Only an explicit whitelist of tags, per-tag attributes
//! and CSS properties survives; everything else is escaped to inert text or
//! stripped.
//!
//! ## Features
//!
//! - Fail-closed: unknown tags, attributes and CSS properties never pass
//! - Per-attribute value sanitizers (URL prefix checks for `href`, `src`, `ping`)
//! - Escape mode: disallowed elements rendered as visible literal markup
//! - Strip mode: disallowed elements removed with their content
//! - Comments always removed
//! - Script-inert parsing via html5ever, stack-safe on deep nesting
//! - Immutable, thread-shareable policy; JSON-loadable configuration
//!
//! ## Example
//!
//! ```rust
//! use htmlguard::{sanitize, Sanitizer, SanitizerConfig};
//!
//! fn main() -> Result<(), htmlguard::Error> {
//!     let clean = sanitize(r#"<a href="javascript:alert(1)" onclick="x()">hi</a>"#)?;
//!     assert_eq!(clean, r#"<a href="">hi</a>"#);
//!
//!     let strict = Sanitizer::new(SanitizerConfig::new().escape(false).urls(["https://"]));
//!     assert_eq!(strict.sanitize_string("<script>alert(1)</script>ok")?, "ok");
//!     Ok(())
//! }
//! ```

pub mod dom;
pub mod error;
pub mod policy;
pub mod sanitizer;

// Re-exports for convenience

// Sanitizer
pub use sanitizer::{default_sanitizer, sanitize, Sanitizer, SanitizerConfig, DEFAULT_MAX_DEPTH};

// Policy
pub use policy::{
    make_url_sanitizer, AttributeSanitizer, PolicyBuilder, PolicyTable, TagPolicy, UrlSanitizer,
    DEFAULT_CSS_PROPERTIES, DEFAULT_URL_PREFIXES,
};

// DOM
pub use dom::{parse_fragment, Document, Element, Node, NodeType};

// Errors
pub use error::{Error, ErrorContext, Result};

/// htmlguard version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
