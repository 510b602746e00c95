// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The render contract shared by every synthesizer.
//!
//! Synthesizers consume and produce [`Node`] values: rendered text plus an
//! optional semantic type, an optional scalar/reference flag, and a
//! parenthetical marker. Rendering is pure — the text of a node is fully
//! determined by its fields, with no side effects.
//!
//! Front-end inputs arrive as [`Value`]: either a finished node, bare text
//! (identifiers and labels), or nothing at all. [`Value::Empty`] renders as
//! the empty string, so rendering is total over everything the front end can
//! hand us. Callers never branch on the shape of an input, only on the
//! [`Render`] capability.
//!
//! # Example
//!
//! ```
//! use ocelot_core::codegen::objective_c::{Node, Render, TypeName, Value};
//!
//! let n = Node::new("42").with_type(TypeName::integer()).with_scalar(true);
//! assert_eq!(n.render(), "42");
//! assert_eq!(Value::Empty.render(), "");
//! ```

use super::objc_types::TypeName;
use ecow::EcoString;

/// A renderable piece of Objective-C source.
///
/// Nodes are immutable once built; synthesizers derive new nodes rather
/// than editing old ones. The optional `type_name`/`scalar` classification
/// flows through binary operations and into declarations and casts.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// The rendered source text, without any parenthetical wrapping.
    text: EcoString,
    /// The semantic type, when one is known.
    type_name: Option<TypeName>,
    /// Whether the value is a scalar (`true`), a reference (`false`),
    /// or unclassified (`None`).
    scalar: Option<bool>,
    /// Whether this node must be parenthesized when rendered.
    parenthetical: bool,
}

impl Node {
    /// Creates an untyped node from source text.
    pub fn new(text: impl Into<EcoString>) -> Self {
        Self {
            text: text.into(),
            type_name: None,
            scalar: None,
            parenthetical: false,
        }
    }

    /// Attaches a semantic type.
    #[must_use]
    pub fn with_type(mut self, type_name: TypeName) -> Self {
        self.type_name = Some(type_name);
        self
    }

    /// Attaches a scalar/reference classification.
    #[must_use]
    pub fn with_scalar(mut self, scalar: bool) -> Self {
        self.scalar = Some(scalar);
        self
    }

    /// Marks the node as needing parentheses when embedded or rendered.
    ///
    /// Only the parenthetical synthesizer sets this; see
    /// [`operators::parenthetical`](super::operators::parenthetical).
    pub(super) fn mark_parenthetical(mut self) -> Self {
        self.parenthetical = true;
        self
    }

    /// The raw source text, without parenthetical wrapping.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The semantic type, if known.
    #[must_use]
    pub fn type_name(&self) -> Option<&TypeName> {
        self.type_name.as_ref()
    }

    /// The scalar/reference classification, if known.
    #[must_use]
    pub fn is_scalar(&self) -> Option<bool> {
        self.scalar
    }

    /// Whether this node renders inside parentheses.
    #[must_use]
    pub fn is_parenthetical(&self) -> bool {
        self.parenthetical
    }
}

/// The capability of rendering to Objective-C source text.
///
/// This is the single decision point for parenthesization: a node flagged
/// parenthetical renders as `(text)` here and nowhere else, so parentheses
/// appear exactly once no matter how the node is embedded.
pub trait Render {
    /// Renders to source text.
    fn render(&self) -> EcoString;
}

impl Render for Node {
    fn render(&self) -> EcoString {
        if self.parenthetical {
            let mut out = EcoString::with_capacity(self.text.len() + 2);
            out.push('(');
            out.push_str(&self.text);
            out.push(')');
            out
        } else {
            self.text.clone()
        }
    }
}

impl Render for str {
    fn render(&self) -> EcoString {
        self.into()
    }
}

impl Render for EcoString {
    fn render(&self) -> EcoString {
        self.clone()
    }
}

/// A front-end input: a finished node, bare text, or nothing.
///
/// Bare text covers identifiers and labels that the front end passes as
/// plain strings; `Empty` covers omitted optional inputs, which render as
/// the empty string rather than failing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Nothing supplied; renders as the empty string.
    #[default]
    Empty,
    /// Bare text, such as an identifier or a pre-rendered fragment.
    Text(EcoString),
    /// A synthesized node.
    Node(Node),
}

impl Value {
    /// The underlying node, when this value carries one.
    ///
    /// Type/scalar classification only flows out of nodes; bare text is
    /// always unclassified.
    #[must_use]
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Node(node) => Some(node),
            Self::Empty | Self::Text(_) => None,
        }
    }
}

impl Render for Value {
    fn render(&self) -> EcoString {
        match self {
            Self::Empty => EcoString::new(),
            Self::Text(text) => text.clone(),
            Self::Node(node) => node.render(),
        }
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.into())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text.into())
    }
}

impl From<EcoString> for Value {
    fn from(text: EcoString) -> Self {
        Self::Text(text)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untyped_node() {
        let node = Node::new("self");
        assert_eq!(node.render(), "self");
        assert_eq!(node.type_name(), None);
        assert_eq!(node.is_scalar(), None);
        assert!(!node.is_parenthetical());
    }

    #[test]
    fn typed_node() {
        let node = Node::new("42")
            .with_type(TypeName::integer())
            .with_scalar(true);
        assert_eq!(node.type_name(), Some(&TypeName::integer()));
        assert_eq!(node.is_scalar(), Some(true));
    }

    #[test]
    fn parenthetical_node_renders_wrapped() {
        let node = Node::new("a + b").mark_parenthetical();
        assert_eq!(node.text(), "a + b");
        assert_eq!(node.render(), "(a + b)");
    }

    #[test]
    fn empty_value_renders_empty() {
        assert_eq!(Value::Empty.render(), "");
        let absent: Value = Option::<Node>::None.into();
        assert_eq!(absent.render(), "");
    }

    #[test]
    fn text_value_renders_verbatim() {
        let value: Value = "window".into();
        assert_eq!(value.render(), "window");
        assert_eq!(value.as_node(), None);
    }

    #[test]
    fn node_value_round_trips() {
        let value: Value = Node::new("x").with_scalar(true).into();
        assert_eq!(value.render(), "x");
        assert_eq!(value.as_node().and_then(Node::is_scalar), Some(true));
    }
}
