// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Document representation

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::element::Element;
use super::node::{Node, NodeData, NodeId, NodeStore};

/// A detached HTML fragment.
///
/// The root is a `<div>` container element whose children are the fragment
/// nodes, mirroring `container.innerHTML`. Nodes live in a shared arena;
/// [`Node`] and [`Element`] are handles into it.
#[derive(Debug, Clone)]
pub struct Document {
    /// Root node ID
    root_id: NodeId,
    /// Node storage
    pub(crate) nodes: NodeStore,
}

impl Document {
    /// Create a new empty document with a `<div>` container root
    pub fn new() -> Self {
        let root_id = NodeId::new();
        let mut nodes = HashMap::new();
        nodes.insert(root_id, NodeData::element("div"));

        Self {
            root_id,
            nodes: Arc::new(RwLock::new(nodes)),
        }
    }

    /// Get the root container
    pub fn root(&self) -> Node {
        Node::new(self.root_id, self.nodes.clone())
    }

    /// Number of nodes in the arena, root and detached nodes included
    pub fn node_count(&self) -> usize {
        self.nodes.read().len()
    }

    /// Whether the container has no children
    pub fn is_empty(&self) -> bool {
        self.nodes
            .read()
            .get(&self.root_id)
            .map(|n| n.children.is_empty())
            .unwrap_or(true)
    }

    /// Insert node data as the last child of `parent_id` (used while parsing)
    pub(crate) fn insert(&self, mut data: NodeData, parent_id: NodeId) -> NodeId {
        let id = NodeId::new();
        data.parent = Some(parent_id);

        let mut nodes = self.nodes.write();
        nodes.insert(id, data);
        if let Some(parent) = nodes.get_mut(&parent_id) {
            parent.children.push(id);
        }
        id
    }

    /// Create a new detached element
    pub fn create_element(&self, tag: &str) -> Element {
        let id = NodeId::new();
        self.nodes.write().insert(id, NodeData::element(tag));
        Element::from_node(Node::new(id, self.nodes.clone()))
    }

    /// Create a detached text node
    pub fn create_text_node(&self, content: &str) -> Node {
        let id = NodeId::new();
        self.nodes.write().insert(id, NodeData::text(content));
        Node::new(id, self.nodes.clone())
    }

    /// Serialize the container's children
    pub fn inner_html(&self) -> String {
        self.root().inner_html()
    }

    /// Get all text content
    pub fn text_content(&self) -> String {
        self.root().text_content()
    }

    /// Collect every element in the fragment, in document order
    pub fn elements(&self) -> Vec<Element> {
        let mut out = Vec::new();
        let mut stack: Vec<Node> = self.root().children().into_iter().rev().collect();
        while let Some(node) = stack.pop() {
            stack.extend(node.children().into_iter().rev());
            if let Some(element) = Element::new(node) {
                out.push(element);
            }
        }
        out
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
