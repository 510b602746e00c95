// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Variable scope tracking and the assignment synthesizer.
//!
//! This module provides the [`ScopeStack`] aggregate which decides, for each
//! identifier assignment in a method body, whether it is a **first
//! declaration** (rendered with a type-qualified prefix and recorded in the
//! stack) or a **reassignment** (rendered bare, so the generated Objective-C
//! never redeclares a variable).
//!
//! # Scope Stack
//!
//! Frames are ordered outermost first, innermost last:
//!
//! ```text
//! Frame 0 (outermost): method body
//! Frame 1: loop body
//! Frame 2 (innermost): nested block
//! ```
//!
//! A lookup scans **all** frames, not only the innermost, so reuse of an
//! identifier anywhere in the visible stack is a reassignment — the target
//! language would reject a redeclaration of a name that is still in scope.
//! New declarations always land in the innermost frame.
//!
//! The stack is owned by the caller and threaded through a sequence of
//! [`assignment`] calls for one method body; mutation is visible as the
//! `&mut` at every call site.

use super::node::{Node, Render, Value};
use super::objc_types::TypeName;
use super::{Result, SynthError};
use ecow::EcoString;
use tracing::trace;

/// A recorded declaration: the identifier and the type it was declared
/// with, when one was known.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    identifier: EcoString,
    type_name: Option<TypeName>,
}

impl Binding {
    /// The declared identifier.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The declared type, if one was known at declaration time.
    #[must_use]
    pub fn type_name(&self) -> Option<&TypeName> {
        self.type_name.as_ref()
    }
}

/// Nested declaration scopes for one method body.
#[derive(Debug, Clone)]
pub struct ScopeStack {
    /// Frames of bindings, outermost first.
    frames: Vec<Vec<Binding>>,
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeStack {
    /// Creates a stack with a single empty root frame.
    #[must_use]
    pub fn new() -> Self {
        Self {
            frames: vec![Vec::new()],
        }
    }

    /// Pushes a new innermost frame.
    ///
    /// Call this when entering a block or any nested context that opens a
    /// declaration scope.
    pub fn push_frame(&mut self) {
        self.frames.push(Vec::new());
    }

    /// Pops the innermost frame, discarding its bindings.
    ///
    /// The root frame cannot be popped.
    pub fn pop_frame(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// The number of frames currently in effect.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Looks up an identifier across **all** frames.
    ///
    /// Frame order does not affect the outcome: any visible binding makes
    /// the identifier bound.
    #[must_use]
    pub fn lookup(&self, identifier: &str) -> Option<&Binding> {
        self.frames
            .iter()
            .flatten()
            .find(|binding| binding.identifier == identifier)
    }

    /// Whether an identifier is bound in any frame.
    #[must_use]
    pub fn is_bound(&self, identifier: &str) -> bool {
        self.lookup(identifier).is_some()
    }

    /// Records a declaration in the innermost frame.
    fn declare(&mut self, identifier: EcoString, type_name: Option<TypeName>) {
        if let Some(innermost) = self.frames.last_mut() {
            innermost.push(Binding {
                identifier,
                type_name,
            });
        }
    }
}

/// Inputs to the assignment synthesizer.
///
/// The type and scalar classification default to whatever the expression
/// node carries; explicit overrides win when the front end knows better.
#[derive(Debug, Clone)]
pub struct Assignment {
    identifier: EcoString,
    operator: EcoString,
    expression: Value,
    type_override: Option<TypeName>,
    scalar_override: Option<bool>,
}

impl Assignment {
    /// Creates an assignment of `expression` to `identifier`.
    pub fn new(
        identifier: impl Into<EcoString>,
        operator: impl Into<EcoString>,
        expression: impl Into<Value>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            operator: operator.into(),
            expression: expression.into(),
            type_override: None,
            scalar_override: None,
        }
    }

    /// Overrides the declared type.
    #[must_use]
    pub fn with_type(mut self, type_name: TypeName) -> Self {
        self.type_override = Some(type_name);
        self
    }

    /// Overrides the scalar/reference classification.
    #[must_use]
    pub fn with_scalar(mut self, scalar: bool) -> Self {
        self.scalar_override = Some(scalar);
        self
    }
}

/// Synthesizes an assignment, deciding declaration vs reassignment.
///
/// If the identifier is bound anywhere in the stack the assignment renders
/// bare (`x = expr`) and the stack is untouched. Otherwise a binding is
/// pushed onto the innermost frame and the declaration is type-qualified:
/// `NSInteger x = expr` for a known scalar type, `NSString *x = expr` for a
/// known reference type, `id x = expr` when no type is known.
///
/// Calling twice with the same identifier against the same stack therefore
/// yields declaration then reassignment, never declaration twice.
///
/// # Example
///
/// ```
/// use ocelot_core::codegen::objective_c::scope::{assignment, Assignment, ScopeStack};
/// use ocelot_core::codegen::objective_c::{literals, Render};
///
/// let mut scope = ScopeStack::new();
/// let expr = literals::number_literal("3").unwrap();
///
/// let first = assignment(&mut scope, &Assignment::new("x", "=", expr.clone())).unwrap();
/// assert_eq!(first.render(), "NSInteger x = 3");
///
/// let second = assignment(&mut scope, &Assignment::new("x", "=", expr)).unwrap();
/// assert_eq!(second.render(), "x = 3");
/// ```
///
/// # Errors
///
/// Returns [`SynthError::MissingRequiredField`] when the identifier is
/// empty.
pub fn assignment(scope: &mut ScopeStack, assign: &Assignment) -> Result<Node> {
    if assign.identifier.is_empty() {
        return Err(SynthError::MissingRequiredField {
            synthesizer: "assignment",
            field: "identifier",
        });
    }

    let identifier = &assign.identifier;
    let operator = &assign.operator;
    let expression = assign.expression.render();

    if scope.is_bound(identifier) {
        trace!(%identifier, "reassignment");
        return Ok(Node::new(format!("{identifier} {operator} {expression}")));
    }

    let expr_node = assign.expression.as_node();
    let type_name = assign
        .type_override
        .clone()
        .or_else(|| expr_node.and_then(|node| node.type_name().cloned()));
    let scalar = assign
        .scalar_override
        .or_else(|| expr_node.and_then(Node::is_scalar));

    trace!(%identifier, ?type_name, scalar, "first declaration");
    scope.declare(identifier.clone(), type_name.clone());

    let text = match (type_name, scalar) {
        (Some(type_name), Some(true)) => {
            format!("{type_name} {identifier} {operator} {expression}")
        }
        (Some(type_name), _) => format!("{type_name} *{identifier} {operator} {expression}"),
        (None, _) => format!(
            "{} {identifier} {operator} {expression}",
            TypeName::object()
        ),
    };
    Ok(Node::new(text))
}
