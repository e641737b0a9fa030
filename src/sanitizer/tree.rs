// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Whitelist tree sanitizer
//!
//! Walks an input tree depth-first and builds a fresh output tree that only
//! contains text and allowed elements. The input tree is never modified.
//!
//! Per node:
//! - text is copied as-is (the serializer escapes it)
//! - comments become empty text, always
//! - disallowed elements become their own markup as text (escape mode) or
//!   empty text (strip mode); their subtree is not visited
//! - allowed elements are recreated with whitelisted attributes (each passed
//!   through its sanitizer), whitelisted inline CSS, and sanitized children

use std::sync::Arc;

use super::config::SanitizerConfig;
use crate::dom::{parse_fragment, Document, Element, Node, NodeType};
use crate::error::Result;
use crate::policy::PolicyTable;

/// Applies a [`PolicyTable`] to HTML trees and strings.
///
/// Cheap to clone and safe to share across threads: the policy is immutable
/// and every call works on its own trees.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    policy: Arc<PolicyTable>,
    escape: bool,
    max_depth: usize,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new(SanitizerConfig::default())
    }
}

impl Sanitizer {
    /// Create a sanitizer from a config
    pub fn new(config: SanitizerConfig) -> Self {
        Self {
            policy: Arc::new(config.policy()),
            escape: config.escape,
            max_depth: config.max_depth,
        }
    }

    /// Create a sanitizer around an existing (shared) policy table
    pub fn with_policy(policy: Arc<PolicyTable>, escape: bool) -> Self {
        Self {
            policy,
            escape,
            max_depth: super::config::DEFAULT_MAX_DEPTH,
        }
    }

    /// The policy in force
    pub fn policy(&self) -> &PolicyTable {
        &self.policy
    }

    /// Whether disallowed elements are escaped rather than stripped
    pub fn escapes(&self) -> bool {
        self.escape
    }

    /// Sanitize an HTML fragment string.
    ///
    /// Parse failures are returned as errors, never passed through.
    pub fn sanitize_string(&self, html: &str) -> Result<String> {
        let input = parse_fragment(html)?;
        let output = self.sanitize_fragment(&input);
        Ok(output.inner_html())
    }

    /// Sanitize every child of `input`'s container into a fresh document.
    ///
    /// The container itself is not subject to the tag policy.
    pub fn sanitize_fragment(&self, input: &Document) -> Document {
        let output = Document::new();
        let container = output.root();
        for child in input.root().children() {
            let clean = self.sanitize_at(&child, &output, 1);
            container.append_child(&clean);
        }
        output
    }

    /// Sanitize a single node, creating the result inside `out`.
    ///
    /// The returned node is detached; the caller appends it where needed.
    pub fn sanitize_node(&self, node: &Node, out: &Document) -> Node {
        self.sanitize_at(node, out, 1)
    }

    fn sanitize_at(&self, node: &Node, out: &Document, depth: usize) -> Node {
        match node.node_type() {
            NodeType::Text => out.create_text_node(&node.data().unwrap_or_default()),
            NodeType::Element => self.sanitize_element(node, out, depth),
            // Comments are stripped unconditionally; anything else has no
            // business inside a fragment.
            _ => out.create_text_node(""),
        }
    }

    fn sanitize_element(&self, node: &Node, out: &Document, depth: usize) -> Node {
        let tag = node.local_name().unwrap_or_default();

        if depth > self.max_depth {
            tracing::debug!(tag = %tag, depth, "dropping element past depth limit");
            return out.create_text_node("");
        }

        let Some(tag_policy) = self.policy.tag(&tag) else {
            tracing::debug!(tag = %tag, escape = self.escape, "neutralizing disallowed element");
            return if self.escape {
                out.create_text_node(&node.outer_html())
            } else {
                out.create_text_node("")
            };
        };

        let copy: Element = out.create_element(&tag);

        for (name, value) in node.attributes() {
            if name == "style" {
                continue;
            }
            match tag_policy.get(&name) {
                Some(sanitizer) => copy.set_attribute(name, sanitizer.apply(&value)),
                None => tracing::debug!(tag = %tag, attribute = %name, "dropping attribute"),
            }
        }

        let style = node.style();
        let kept: Vec<(String, String)> = self
            .policy
            .css()
            .iter()
            .filter_map(|property| {
                style
                    .iter()
                    .rev()
                    .find(|(name, _)| name == property)
                    .map(|(name, value)| (name.clone(), value.clone()))
            })
            .collect();
        copy.set_style(&kept);

        for child in node.children() {
            let clean = self.sanitize_at(&child, out, depth + 1);
            copy.append_child(&clean);
        }

        copy.node
    }
}
