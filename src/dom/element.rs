// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Element-specific DOM operations

use super::node::{Node, NodeType};
use super::style;

/// Element node with extended operations
#[derive(Debug, Clone)]
pub struct Element {
    /// Inner node reference
    pub node: Node,
}

impl Element {
    /// Create a new element from a node
    pub fn new(node: Node) -> Option<Self> {
        if node.node_type() == NodeType::Element {
            Some(Self { node })
        } else {
            None
        }
    }

    /// Wrap a node already known to be an element
    pub(crate) fn from_node(node: Node) -> Self {
        Self { node }
    }

    /// Get the tag name (uppercase)
    pub fn tag_name(&self) -> String {
        self.node.tag_name().unwrap_or_default()
    }

    /// Get local name (lowercase)
    pub fn local_name(&self) -> String {
        self.node.local_name().unwrap_or_default()
    }

    /// Replace the inline style with the given declarations.
    ///
    /// An empty list removes the `style` attribute altogether.
    pub fn set_style(&self, decls: &[(String, String)]) {
        if decls.is_empty() {
            self.node.remove_attribute("style");
        } else {
            self.node
                .set_attribute("style", style::serialize_declarations(decls));
        }
    }

    /// Get a single inline style property (last declaration wins)
    pub fn style_property(&self, name: &str) -> Option<String> {
        let name = name.to_ascii_lowercase();
        self.node
            .style()
            .into_iter()
            .rev()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v)
    }

    /// Get child elements (only element nodes)
    pub fn children(&self) -> Vec<Element> {
        self.node
            .children()
            .into_iter()
            .filter_map(Element::new)
            .collect()
    }
}

impl std::ops::Deref for Element {
    type Target = Node;

    fn deref(&self) -> &Self::Target {
        &self.node
    }
}
