// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! DOM Node types

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use super::style;

/// Shared node storage of a document
pub(crate) type NodeStore = Arc<RwLock<HashMap<NodeId, NodeData>>>;

/// Unique node identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

impl NodeId {
    /// Create a new unique node ID
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// Node type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Element node (like <div>, <p>, etc.)
    Element,
    /// Text node
    Text,
    /// Comment node
    Comment,
    /// Document type node (<!DOCTYPE>)
    DocumentType,
    /// Processing instruction
    ProcessingInstruction,
    /// Document fragment
    DocumentFragment,
}

/// Internal node data
#[derive(Debug)]
pub struct NodeData {
    /// Node type
    pub node_type: NodeType,
    /// Tag name, lowercase (for elements)
    pub tag_name: Option<String>,
    /// Text content (for text/comment nodes)
    pub text_content: Option<String>,
    /// Attributes in source order (for elements)
    pub attributes: Vec<(String, String)>,
    /// Parent node ID
    pub parent: Option<NodeId>,
    /// Child node IDs
    pub children: Vec<NodeId>,
}

impl NodeData {
    fn blank(node_type: NodeType) -> Self {
        Self {
            node_type,
            tag_name: None,
            text_content: None,
            attributes: Vec::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// Create a new element node data
    pub fn element(tag_name: impl Into<String>) -> Self {
        let mut data = Self::blank(NodeType::Element);
        data.tag_name = Some(tag_name.into().to_ascii_lowercase());
        data
    }

    /// Create a new text node data
    pub fn text(content: impl Into<String>) -> Self {
        let mut data = Self::blank(NodeType::Text);
        data.text_content = Some(content.into());
        data
    }

    /// Create a new comment node data
    pub fn comment(content: impl Into<String>) -> Self {
        let mut data = Self::blank(NodeType::Comment);
        data.text_content = Some(content.into());
        data
    }

    /// Create a new fragment node data
    pub fn fragment() -> Self {
        Self::blank(NodeType::DocumentFragment)
    }

    /// Create a node of an arbitrary type with no payload
    pub fn of_type(node_type: NodeType) -> Self {
        Self::blank(node_type)
    }

    /// Look up an attribute value by (lowercase) name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing an existing value in place
    pub fn set_attribute(&mut self, name: String, value: String) {
        match self.attributes.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }
}

/// A reference to a node in the DOM tree
#[derive(Debug, Clone)]
pub struct Node {
    /// Node ID
    pub id: NodeId,
    /// Reference to document's node storage
    nodes: NodeStore,
}

impl Node {
    /// Create a new node reference
    pub(crate) fn new(id: NodeId, nodes: NodeStore) -> Self {
        Self { id, nodes }
    }

    /// Get the node type
    pub fn node_type(&self) -> NodeType {
        self.nodes
            .read()
            .get(&self.id)
            .map(|n| n.node_type)
            .unwrap_or(NodeType::Text)
    }

    /// Get the tag name (uppercase, like browsers)
    pub fn tag_name(&self) -> Option<String> {
        self.local_name().map(|t| t.to_uppercase())
    }

    /// Get the tag name in lowercase
    pub fn local_name(&self) -> Option<String> {
        self.nodes
            .read()
            .get(&self.id)
            .and_then(|n| n.tag_name.clone())
    }

    /// Get the raw data of a text or comment node
    pub fn data(&self) -> Option<String> {
        self.nodes
            .read()
            .get(&self.id)
            .and_then(|n| n.text_content.clone())
    }

    /// Get text content
    pub fn text_content(&self) -> String {
        let nodes = self.nodes.read();
        let mut out = String::new();
        let mut stack = vec![self.id];
        while let Some(id) = stack.pop() {
            let Some(node) = nodes.get(&id) else { continue };
            match node.node_type {
                NodeType::Text => out.push_str(node.text_content.as_deref().unwrap_or("")),
                NodeType::Element | NodeType::DocumentFragment => {
                    stack.extend(node.children.iter().rev().copied());
                }
                _ => {}
            }
        }
        out
    }

    /// Get an attribute value
    pub fn get_attribute(&self, name: &str) -> Option<String> {
        let name = name.to_ascii_lowercase();
        self.nodes
            .read()
            .get(&self.id)
            .and_then(|n| n.attribute(&name).map(String::from))
    }

    /// Set an attribute value
    pub fn set_attribute(&self, name: impl Into<String>, value: impl Into<String>) {
        if let Some(node) = self.nodes.write().get_mut(&self.id) {
            node.set_attribute(name.into().to_ascii_lowercase(), value.into());
        }
    }

    /// Remove an attribute
    pub fn remove_attribute(&self, name: &str) {
        let name = name.to_ascii_lowercase();
        if let Some(node) = self.nodes.write().get_mut(&self.id) {
            node.attributes.retain(|(k, _)| *k != name);
        }
    }

    /// Check if has an attribute
    pub fn has_attribute(&self, name: &str) -> bool {
        self.get_attribute(name).is_some()
    }

    /// Get all attributes, in source order
    pub fn attributes(&self) -> Vec<(String, String)> {
        self.nodes
            .read()
            .get(&self.id)
            .map(|n| n.attributes.clone())
            .unwrap_or_default()
    }

    /// Get the declarations of the inline `style` attribute, in source order
    pub fn style(&self) -> Vec<(String, String)> {
        self.get_attribute("style")
            .map(|css| style::parse_declarations(&css))
            .unwrap_or_default()
    }

    /// Get child nodes
    pub fn children(&self) -> Vec<Node> {
        self.nodes
            .read()
            .get(&self.id)
            .map(|n| {
                n.children
                    .iter()
                    .map(|&id| Node::new(id, self.nodes.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Append a child node
    pub fn append_child(&self, child: &Node) {
        let mut nodes = self.nodes.write();

        let old_parent_id = nodes.get(&child.id).and_then(|d| d.parent);
        if let Some(old_pid) = old_parent_id {
            if let Some(old_parent) = nodes.get_mut(&old_pid) {
                old_parent.children.retain(|&id| id != child.id);
            }
        }

        if let Some(child_data) = nodes.get_mut(&child.id) {
            child_data.parent = Some(self.id);
        }

        if let Some(parent_data) = nodes.get_mut(&self.id) {
            parent_data.children.push(child.id);
        }
    }

    /// Get inner HTML
    pub fn inner_html(&self) -> String {
        let nodes = self.nodes.read();
        let children = nodes
            .get(&self.id)
            .map(|n| n.children.clone())
            .unwrap_or_default();
        serialize(&nodes, &children)
    }

    /// Get outer HTML
    pub fn outer_html(&self) -> String {
        let nodes = self.nodes.read();
        serialize(&nodes, &[self.id])
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Elements that never have an end tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Elements whose text children are serialized verbatim
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "style", "script", "xmp", "iframe", "noembed", "noframes", "plaintext",
];

enum Step<'a> {
    Open(NodeId),
    Close(&'a str),
}

/// Serialize a list of sibling nodes to HTML.
///
/// Walks with an explicit stack so arbitrarily deep trees cannot exhaust the
/// call stack.
fn serialize(nodes: &HashMap<NodeId, NodeData>, roots: &[NodeId]) -> String {
    let mut out = String::new();
    let mut stack: Vec<Step<'_>> = roots.iter().rev().map(|&id| Step::Open(id)).collect();

    while let Some(step) = stack.pop() {
        let id = match step {
            Step::Close(tag) => {
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
                continue;
            }
            Step::Open(id) => id,
        };
        let Some(node) = nodes.get(&id) else { continue };

        match node.node_type {
            NodeType::Text => {
                let text = node.text_content.as_deref().unwrap_or("");
                let raw_parent = node
                    .parent
                    .and_then(|p| nodes.get(&p))
                    .and_then(|p| p.tag_name.as_deref())
                    .map(|t| RAW_TEXT_ELEMENTS.contains(&t))
                    .unwrap_or(false);
                if raw_parent {
                    out.push_str(text);
                } else {
                    out.push_str(&escape_text(text));
                }
            }
            NodeType::Comment => {
                out.push_str("<!--");
                out.push_str(node.text_content.as_deref().unwrap_or(""));
                out.push_str("-->");
            }
            NodeType::Element => {
                let tag = node.tag_name.as_deref().unwrap_or("div");
                out.push('<');
                out.push_str(tag);
                for (k, v) in &node.attributes {
                    out.push(' ');
                    out.push_str(k);
                    out.push_str("=\"");
                    out.push_str(&escape_attribute(v));
                    out.push('"');
                }
                out.push('>');

                if !VOID_ELEMENTS.contains(&tag) {
                    stack.push(Step::Close(tag));
                    stack.extend(node.children.iter().rev().map(|&c| Step::Open(c)));
                }
            }
            NodeType::DocumentFragment => {
                stack.extend(node.children.iter().rev().map(|&c| Step::Open(c)));
            }
            NodeType::DocumentType => out.push_str("<!DOCTYPE html>"),
            NodeType::ProcessingInstruction => {}
        }
    }

    out
}

/// Escape text content so it cannot be reinterpreted as markup
pub(crate) fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape HTML special characters in an attribute value
pub(crate) fn escape_attribute(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
        .replace('\u{a0}', "&nbsp;")
}
