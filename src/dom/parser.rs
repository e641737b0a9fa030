// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTML parser using html5ever

use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{parse_fragment as parse_html5_fragment, LocalName, Namespace, ParseOpts, QualName};
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

use super::document::Document;
use super::node::{NodeData, NodeId, NodeType};
use crate::error::{Error, Result};

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Parse an HTML fragment into a detached [`Document`].
///
/// The fragment is parsed in the context of a `<div>` with scripting
/// disabled, the same way a script-less document would handle
/// `container.innerHTML = html`. Nothing is executed or fetched.
pub fn parse_fragment(html: &str) -> Result<Document> {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };
    let context = QualName::new(None, Namespace::from(HTML_NAMESPACE), LocalName::from("div"));

    let dom = parse_html5_fragment(RcDom::default(), opts, context, Vec::new())
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .map_err(|e| Error::html_parse(e.to_string()))?;

    for err in dom.errors.iter() {
        tracing::trace!(error = %err, "html5ever parse error");
    }

    let doc = Document::new();
    let converter = DomConverter::new(&doc);

    // Fragment parsing yields document -> <html> -> fragment nodes.
    let fragment_root = dom.document.children.borrow().first().cloned();
    if let Some(html_root) = fragment_root {
        converter.convert_children(&html_root, doc.root().id);
    }

    Ok(doc)
}

/// Converts html5ever DOM to our DOM
struct DomConverter<'a> {
    doc: &'a Document,
}

impl<'a> DomConverter<'a> {
    fn new(doc: &'a Document) -> Self {
        Self { doc }
    }

    /// Convert every child of `handle` into the subtree under `parent_id`.
    ///
    /// Uses an explicit work stack; pre-order popping keeps sibling order.
    fn convert_children(&self, handle: &Handle, parent_id: NodeId) {
        let mut stack: Vec<(Handle, NodeId)> = Vec::new();
        push_children(&mut stack, handle, parent_id);

        while let Some((handle, parent_id)) = stack.pop() {
            let Some(data) = self.convert_node(&handle) else { continue };
            let node_id = self.doc.insert(data, parent_id);

            push_children(&mut stack, &handle, node_id);
            if let RcNodeData::Element {
                ref template_contents,
                ..
            } = handle.data
            {
                if let Some(contents) = template_contents.borrow().as_ref() {
                    push_children(&mut stack, contents, node_id);
                }
            }
        }
    }

    fn convert_node(&self, handle: &Handle) -> Option<NodeData> {
        let data = match handle.data {
            RcNodeData::Document => return None,
            RcNodeData::Doctype { .. } => NodeData::of_type(NodeType::DocumentType),
            RcNodeData::Text { ref contents } => NodeData::text(contents.borrow().to_string()),
            RcNodeData::Comment { ref contents } => NodeData::comment(contents.to_string()),
            RcNodeData::Element {
                ref name,
                ref attrs,
                ..
            } => {
                let mut data = NodeData::element(name.local.to_string());
                for attr in attrs.borrow().iter() {
                    let attr_name = match attr.name.prefix {
                        Some(ref prefix) => format!("{}:{}", prefix, attr.name.local),
                        None => attr.name.local.to_string(),
                    };
                    data.attributes
                        .push((attr_name.to_ascii_lowercase(), attr.value.to_string()));
                }
                data
            }
            RcNodeData::ProcessingInstruction { .. } => return None,
        };
        Some(data)
    }
}

/// Push children in reverse so the first child is popped first
fn push_children(stack: &mut Vec<(Handle, NodeId)>, handle: &Handle, parent_id: NodeId) {
    let children = handle.children.borrow();
    stack.extend(children.iter().rev().map(|c| (c.clone(), parent_id)));
}
