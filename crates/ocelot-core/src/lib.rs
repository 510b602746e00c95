// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Ocelot transpiler core.
//!
//! This crate contains the synthesis backend of the Ocelot transpiler:
//! - Node model (renderable text with type/scalar classification)
//! - Expression synthesizers (literals, messages, constructions, operations)
//! - Scope-aware assignment rendering (declaration vs reassignment)
//! - Class and method composition (`@interface` / `@implementation` blocks)
//!
//! The front end (lexing and parsing the input DSL into node descriptors)
//! is an external collaborator; this crate never reads files or arguments.

pub mod codegen;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::codegen::objective_c::{
        Cast, ClassDescriptor, Node, Render, Result, ScopeStack, SynthError, TypeName, Value,
    };
}
