// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Binary operations and parenthetical grouping.
//!
//! An operation unifies its operands' classifications: the result keeps the
//! left type only when both operands agree exactly, and likewise for the
//! scalar flag. Disagreement leaves the result unclassified rather than
//! guessing.
//!
//! Parenthesization is decided in one place. [`parenthetical`] marks a node
//! and strips its indentation; the parentheses themselves are added by
//! [`Node::render`](super::Node) wherever the node is embedded, so a grouped
//! sub-expression is wrapped exactly once.

use super::node::{Node, Render, Value};

/// Synthesizes a binary operation: `left operator right`.
///
/// Type and scalar classification propagate only on exact agreement:
///
/// ```
/// use ocelot_core::codegen::objective_c::{literals, operators, TypeName};
///
/// let three = literals::number_literal("3").unwrap();
/// let four = literals::number_literal("4").unwrap();
/// let sum = operators::operation(&three, "+", &four);
/// assert_eq!(sum.type_name(), Some(&TypeName::integer()));
/// assert_eq!(sum.is_scalar(), Some(true));
/// ```
#[must_use]
pub fn operation(left: &Node, operator: &str, right: &Node) -> Node {
    let text = format!("{} {operator} {}", left.render(), right.render());

    let mut node = Node::new(text);
    if left.type_name() == right.type_name() {
        if let Some(type_name) = left.type_name() {
            node = node.with_type(type_name.clone());
        }
    }
    if left.is_scalar() == right.is_scalar() {
        if let Some(scalar) = left.is_scalar() {
            node = node.with_scalar(scalar);
        }
    }
    node
}

/// Marks a sub-expression for parenthesization.
///
/// Indentation markers are stripped from the body text — a parenthesized
/// sub-expression must render on a single line. The type and scalar
/// classification of the body do not survive grouping.
#[must_use]
pub fn parenthetical(body: &Value) -> Node {
    let text = body.render().replace("\t", "");
    Node::new(text).mark_parenthetical()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::objective_c::literals::number_literal;
    use crate::codegen::objective_c::TypeName;

    #[test]
    fn matching_types_unify() {
        let left = number_literal("1").unwrap();
        let right = number_literal("2").unwrap();
        let node = operation(&left, "+", &right);
        assert_eq!(node.render(), "1 + 2");
        assert_eq!(node.type_name(), Some(&TypeName::integer()));
        assert_eq!(node.is_scalar(), Some(true));
    }

    #[test]
    fn differing_types_leave_result_untyped() {
        let left = number_literal("1").unwrap();
        let right = number_literal("2.0").unwrap();
        let node = operation(&left, "*", &right);
        assert_eq!(node.render(), "1 * 2.0");
        assert_eq!(node.type_name(), None);
        // Both operands are scalar, so scalar-ness still unifies.
        assert_eq!(node.is_scalar(), Some(true));
    }

    #[test]
    fn unclassified_operands_stay_unclassified() {
        let left = Node::new("a");
        let right = Node::new("b");
        let node = operation(&left, "-", &right);
        assert_eq!(node.type_name(), None);
        assert_eq!(node.is_scalar(), None);
    }

    #[test]
    fn parenthetical_operand_is_wrapped_once() {
        let inner = operation(
            &number_literal("1").unwrap(),
            "+",
            &number_literal("2").unwrap(),
        );
        let grouped = parenthetical(&inner.into());
        let node = operation(&grouped, "*", &number_literal("3").unwrap());
        assert_eq!(node.render(), "(1 + 2) * 3");
    }

    #[test]
    fn parenthetical_strips_indentation() {
        let body: Value = "a +\t b".into();
        let node = parenthetical(&body);
        assert_eq!(node.text(), "a + b");
        assert_eq!(node.render(), "(a + b)");
        assert!(node.is_parenthetical());
    }

    #[test]
    fn grouping_drops_classification() {
        let inner = number_literal("4").unwrap();
        let node = parenthetical(&inner.into());
        assert_eq!(node.type_name(), None);
        assert_eq!(node.is_scalar(), None);
    }
}
