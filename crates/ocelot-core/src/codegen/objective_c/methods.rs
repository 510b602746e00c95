// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Method argument and method declaration synthesis.
//!
//! A method is synthesized once into two forms: the interface prototype
//! (`- (void)start;`) and the implementation block with its body. The
//! descriptor is immutable afterwards — attaching it to a class is an
//! explicit, separate step on [`ClassDescriptor`](super::ClassDescriptor),
//! never a hidden side effect of synthesis.

use super::node::{Node, Render, Value};
use super::objc_types::{Cast, TypeName};
use super::{Result, SynthError};
use ecow::EcoString;
use std::fmt;

/// Synthesizes one keyword argument of a method signature:
/// `label(Cast)parameter`.
///
/// The parameter name may be supplied explicitly. When it is omitted it is
/// derived from the label by stripping the trailing `:` separator, giving
/// the conventional `at:(NSInteger)at` shape.
///
/// # Example
///
/// ```
/// use ocelot_core::codegen::objective_c::{methods, Cast, Render, TypeName};
///
/// let arg = methods::method_arg(
///     &"withTitle:".into(),
///     &Cast::new(TypeName::string(), false),
///     None,
/// )
/// .unwrap();
/// assert_eq!(arg.render(), "withTitle:(NSString *)withTitle");
/// ```
///
/// # Errors
///
/// Returns [`SynthError::IllFormedLabel`] when no parameter name is given
/// and the label lacks the trailing separator to derive one from.
pub fn method_arg(label: &Value, cast: &Cast, parameter: Option<&str>) -> Result<Node> {
    let label_text = label.render();
    let parameter: EcoString = match parameter {
        Some(name) => name.into(),
        None => match label_text.strip_suffix(':') {
            Some(stem) => stem.into(),
            None => {
                return Err(SynthError::IllFormedLabel {
                    label: label_text.to_string(),
                })
            }
        },
    };
    Ok(Node::new(format!("{label_text}({cast}){parameter}")))
}

/// Whether a method belongs to the class or to its instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    /// A class method, declared with `+`.
    Class,
    /// An instance method, declared with `-`.
    Instance,
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class => f.write_str("+"),
            Self::Instance => f.write_str("-"),
        }
    }
}

/// A method signature: either pre-joined text or ordered fragments.
///
/// Fragments are typically the selector head plus [`method_arg`] nodes;
/// they are rendered in order, space-separated.
#[derive(Debug, Clone, PartialEq)]
pub enum Signature {
    /// A signature supplied whole, e.g. `start` or `setTitle:(NSString *)title`.
    Joined(EcoString),
    /// Ordered signature fragments, joined by single spaces.
    Fragments(Vec<Value>),
}

impl Signature {
    fn assemble(&self) -> EcoString {
        match self {
            Self::Joined(text) => text.clone(),
            Self::Fragments(fragments) => {
                let mut out = EcoString::new();
                for (i, fragment) in fragments.iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    out.push_str(&fragment.render());
                }
                out
            }
        }
    }
}

impl From<&str> for Signature {
    fn from(text: &str) -> Self {
        Self::Joined(text.into())
    }
}

impl From<Vec<Value>> for Signature {
    fn from(fragments: Vec<Value>) -> Self {
        Self::Fragments(fragments)
    }
}

/// Inputs to method synthesis.
///
/// Use [`MethodSpec::new`] for defaults — an instance method returning
/// scalar `void` — then chain builder methods to customize.
///
/// # Example
///
/// ```
/// use ocelot_core::codegen::objective_c::{methods, MethodKind, MethodSpec, Render};
///
/// let spec = MethodSpec::new(MethodKind::Instance)
///     .with_signature("start")
///     .with_body("\tNSLog(@\"starting\");")
///     .with_indent(1);
/// let descriptor = methods::method(spec).unwrap();
/// assert_eq!(descriptor.interface_form().render(), "- (void)start;");
/// ```
#[derive(Debug, Clone)]
pub struct MethodSpec {
    kind: MethodKind,
    return_cast: Option<Cast>,
    signature: Option<Signature>,
    body: Value,
    indent: usize,
}

impl MethodSpec {
    /// Creates a spec with no signature, no body, and a scalar `void`
    /// return type.
    #[must_use]
    pub fn new(kind: MethodKind) -> Self {
        Self {
            kind,
            return_cast: None,
            signature: None,
            body: Value::Empty,
            indent: 0,
        }
    }

    /// Overrides the return type.
    #[must_use]
    pub fn with_return(mut self, cast: Cast) -> Self {
        self.return_cast = Some(cast);
        self
    }

    /// Sets the signature, either pre-joined text or fragments.
    #[must_use]
    pub fn with_signature(mut self, signature: impl Into<Signature>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    /// Sets the body node.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<Value>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets the indent level of the method body; the closing brace sits one
    /// unit shallower.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

/// A synthesized method: both rendered forms plus the classification they
/// were derived from.
///
/// Descriptors are immutable; both forms are derived once, at synthesis
/// time.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDescriptor {
    kind: MethodKind,
    return_cast: Cast,
    signature: EcoString,
    interface_form: Node,
    implementation_form: Node,
}

impl MethodDescriptor {
    /// Whether this is a class or instance method.
    #[must_use]
    pub fn kind(&self) -> MethodKind {
        self.kind
    }

    /// The return type classification.
    #[must_use]
    pub fn return_cast(&self) -> &Cast {
        &self.return_cast
    }

    /// The assembled signature text.
    #[must_use]
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// The interface prototype: `- (void)start;`
    #[must_use]
    pub fn interface_form(&self) -> &Node {
        &self.interface_form
    }

    /// The implementation block: prototype, brace-wrapped body.
    #[must_use]
    pub fn implementation_form(&self) -> &Node {
        &self.implementation_form
    }
}

/// Synthesizes a method descriptor from a spec.
///
/// The interface form is `± (ReturnType)signature;`; the implementation
/// form wraps the body in braces, with the closing brace indented one unit
/// shallower than the body.
///
/// # Errors
///
/// Returns [`SynthError::MissingRequiredField`] when the spec has no
/// signature.
pub fn method(spec: MethodSpec) -> Result<MethodDescriptor> {
    let Some(signature) = spec.signature else {
        return Err(SynthError::MissingRequiredField {
            synthesizer: "method",
            field: "signature",
        });
    };

    let return_cast = spec
        .return_cast
        .unwrap_or_else(|| Cast::new(TypeName::void(), true));
    let signature = signature.assemble();
    let prototype = format!("{} ({}){signature}", spec.kind, return_cast);

    let closing_indent = "\t".repeat(spec.indent.saturating_sub(1));
    let implementation = format!(
        "{prototype} {{\n{}\n{closing_indent}}}",
        spec.body.render()
    );

    Ok(MethodDescriptor {
        kind: spec.kind,
        return_cast,
        signature,
        interface_form: Node::new(format!("{prototype};")),
        implementation_form: Node::new(implementation),
    })
}
