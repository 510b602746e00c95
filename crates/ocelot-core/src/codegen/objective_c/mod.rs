// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Objective-C synthesis for Ocelot.
//!
//! This module turns semantic node descriptors into Objective-C source text.
//! The front end builds descriptors bottom-up — literals first, then
//! expressions, then methods — and hands them to the synthesizers here. Each
//! synthesizer returns a [`Node`]: rendered text plus an optional semantic
//! type and scalar/reference classification.
//!
//! # Example
//!
//! Ocelot source:
//! ```text
//! title = "Decide"
//! ```
//!
//! Synthesized Objective-C:
//! ```objc
//! NSString *title = @"Decide"
//! ```
//!
//! # Target conventions
//!
//! The target is classic manually-memory-managed Objective-C:
//!
//! - **Messages**: `[receiver selector]`, keyword form `[receiver at:x put:y]`
//! - **Construction**: `[[[Widget alloc] init] autorelease]`
//! - **Scalars vs references**: `NSInteger x` but `NSString *s`
//! - **Class skeletons**: paired `@interface` / `@implementation` blocks
//!
//! # Module Organization
//!
//! ## Core Domain Modules
//!
//! - [`scope`] - Scope stack and the declaration-vs-reassignment engine
//! - [`operators`] - Binary operations with type/scalar unification
//! - [`classes`] - Class descriptors and interface/implementation composition
//!
//! ## Supporting Modules
//!
//! - [`node`] - The render contract every synthesizer consumes and produces
//! - [`objc_types`] - Type name and cast value objects
//! - [`literals`] - String/number literals, imports, geometry constructors
//! - [`messages`] - Message sends, invocations, object construction
//! - [`methods`] - Method argument and method declaration synthesis

pub mod classes;
pub mod literals;
pub mod messages;
pub mod methods;
pub mod node;
pub mod objc_types;
pub mod operators;
pub mod scope;

pub use classes::{ClassDescriptor, IvarDescriptor, PropertyDescriptor};
pub use messages::{KeywordArg, Selector};
pub use methods::{MethodDescriptor, MethodKind, MethodSpec, Signature};
pub use node::{Node, Render, Value};
pub use objc_types::{Cast, TypeName};
pub use scope::{Assignment, Binding, ScopeStack};

use thiserror::Error;

/// Errors that can occur during synthesis.
///
/// Every synthesizer either returns a valid [`Node`] or fails with exactly
/// one of these kinds; no partial results are produced. Failures are
/// input-determined and never retried — the tree-walking driver decides
/// whether to abort or report per node.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SynthError {
    /// Geometry shortcut called with a coordinate list that is neither a
    /// point (2) nor a rect (4).
    #[error("geometry shortcut takes 2 or 4 coordinates, got {count}")]
    InvalidArgumentCount {
        /// The number of coordinates supplied.
        count: usize,
    },

    /// A synthesizer was invoked without a structurally required input.
    #[error("{synthesizer} requires a {field}")]
    MissingRequiredField {
        /// The synthesizer that rejected the input.
        synthesizer: &'static str,
        /// The missing field.
        field: &'static str,
    },

    /// A source token has no renderable form.
    #[error("no renderable form for `{token}`")]
    UnrenderableValue {
        /// The offending token.
        token: String,
    },

    /// A method-argument label is missing the trailing `:` needed to derive
    /// a parameter name.
    #[error("argument label `{label}` has no trailing `:` to derive a parameter name from")]
    IllFormedLabel {
        /// The offending label text.
        label: String,
    },
}

/// Result type for synthesis operations.
pub type Result<T> = std::result::Result<T, SynthError>;

#[cfg(test)]
mod property_tests;
