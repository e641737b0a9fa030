// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! DOM engine for HTML parsing and serialization
//!
//! Provides a detached, script-inert DOM built on top of html5ever. Parsing
//! never executes scripts or fetches resources; serialization escapes text so
//! it cannot be reinterpreted as markup.

mod document;
mod element;
mod node;
mod parser;
mod style;

pub use document::Document;
pub use element::Element;
pub use node::{Node, NodeData, NodeId, NodeType};
pub use parser::parse_fragment;
pub use style::{parse_declarations, serialize_declarations};
