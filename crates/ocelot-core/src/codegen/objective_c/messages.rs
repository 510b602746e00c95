// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Message sends, function invocations, and object construction.
//!
//! Objective-C message syntax is selector-based: `[receiver size]`,
//! `[array at:1 put:x]`. A keyword selector is assembled from ordered
//! `label + argument` parts; construction chains the canonical
//! `alloc`/`init…`/`autorelease` lifecycle around it.

use super::node::{Node, Render, Value};
use super::objc_types::TypeName;
use super::{Result, SynthError};
use ecow::EcoString;

/// One part of a keyword message: a label (with its trailing `:`) and the
/// argument that follows it.
///
/// In `[array at:1 put:x]` the parts are `at:` + `1` and `put:` + `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordArg {
    label: EcoString,
    value: Value,
}

impl KeywordArg {
    /// Creates a keyword part.
    pub fn new(label: impl Into<EcoString>, value: impl Into<Value>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// The label text, including its trailing `:`.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// The selector half of a message send.
///
/// Either ordered keyword parts, or a pre-built selector text supplied
/// whole by the front end (plain selectors like `retain` arrive this way).
#[derive(Debug, Clone, PartialEq)]
pub enum Selector {
    /// Keyword parts, concatenated `label + value` and space-separated
    /// in list order.
    Keyword(Vec<KeywordArg>),
    /// A pre-built selector text.
    Prebuilt(Value),
}

impl Selector {
    /// Assembles the selector text.
    fn assemble(&self) -> EcoString {
        match self {
            Self::Keyword(parts) => {
                let mut out = EcoString::new();
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    out.push_str(&part.label);
                    out.push_str(&part.value.render());
                }
                out
            }
            Self::Prebuilt(value) => value.render(),
        }
    }
}

/// Synthesizes a message send: `[target selector]`.
///
/// No type or scalar classification is inferred — message results are
/// untyped unless the caller annotates the node itself.
///
/// # Example
///
/// ```
/// use ocelot_core::codegen::objective_c::messages::{message, KeywordArg, Selector};
/// use ocelot_core::codegen::objective_c::Render;
///
/// let send = message(
///     &"view".into(),
///     &Selector::Keyword(vec![KeywordArg::new("addSubview:", "label")]),
/// );
/// assert_eq!(send.render(), "[view addSubview:label]");
/// ```
#[must_use]
pub fn message(target: &Value, selector: &Selector) -> Node {
    Node::new(format!("[{} {}]", target.render(), selector.assemble()))
}

/// Synthesizes a plain function invocation: `name(arg1, arg2, …)`.
///
/// Plain function calls are untyped by default; the caller annotates the
/// result when it knows better.
///
/// # Errors
///
/// Returns [`SynthError::MissingRequiredField`] when the function name is
/// empty.
pub fn invocation(function: &str, args: &[Value]) -> Result<Node> {
    if function.is_empty() {
        return Err(SynthError::MissingRequiredField {
            synthesizer: "invocation",
            field: "function name",
        });
    }

    let mut text = EcoString::from(function);
    text.push('(');
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            text.push_str(", ");
        }
        text.push_str(&arg.render());
    }
    text.push(')');
    Ok(Node::new(text))
}

/// Synthesizes object construction: allocate, initialize, autorelease.
///
/// With no initializer the bare `init` selector is used:
///
/// ```
/// use ocelot_core::codegen::objective_c::messages::construction;
/// use ocelot_core::codegen::objective_c::{Render, TypeName};
///
/// let node = construction(&TypeName::new("Widget"), None).unwrap();
/// assert_eq!(node.render(), "[[[Widget alloc] init] autorelease]");
/// ```
///
/// With an initializer, the assembled selector text has its first character
/// upper-cased — once, on the whole text, not per keyword part — and is
/// appended to `init`, giving the `initWithFoo:` naming convention. The
/// result carries the constructed type and is a reference, never a scalar.
///
/// # Errors
///
/// Returns [`SynthError::MissingRequiredField`] when the type name is
/// empty.
pub fn construction(type_name: &TypeName, initializer: Option<&Selector>) -> Result<Node> {
    if type_name.as_str().is_empty() {
        return Err(SynthError::MissingRequiredField {
            synthesizer: "construction",
            field: "type name",
        });
    }

    let init = match initializer {
        None => EcoString::from("init"),
        Some(selector) => {
            let mut init = EcoString::from("init");
            init.push_str(&capitalize_first(&selector.assemble()));
            init
        }
    };

    Ok(
        Node::new(format!("[[[{type_name} alloc] {init}] autorelease]"))
            .with_type(type_name.clone())
            .with_scalar(false),
    )
}

/// Upper-cases the first character of the assembled selector text.
fn capitalize_first(text: &str) -> EcoString {
    let mut chars = text.chars();
    match chars.next() {
        None => EcoString::new(),
        Some(first) => {
            let mut out = EcoString::with_capacity(text.len());
            for upper in first.to_uppercase() {
                out.push(upper);
            }
            out.push_str(chars.as_str());
            out
        }
    }
}
