// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Class descriptors and the interface/implementation composers.
//!
//! A [`ClassDescriptor`] is created by the front end and owned by it for
//! the whole compilation pass. This module only ever appends to its method
//! list — through the explicit [`ClassDescriptor::attach_method`] call —
//! and reads it back when composing the `@interface` and `@implementation`
//! blocks. Composition itself is pure.

use super::methods::MethodDescriptor;
use super::node::{Node, Render};
use super::objc_types::Cast;
use ecow::EcoString;
use tracing::debug;

/// A declared property carried on a class descriptor.
///
/// Properties are structural data only; the composers do not render them.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDescriptor {
    /// The property name.
    pub name: EcoString,
    /// The property's type classification.
    pub cast: Cast,
}

/// An instance variable carried on a class descriptor.
///
/// Like properties, ivars are structural data only.
#[derive(Debug, Clone, PartialEq)]
pub struct IvarDescriptor {
    /// The ivar name.
    pub name: EcoString,
    /// The ivar's type classification.
    pub cast: Cast,
}

/// A class under synthesis: identity, adopted protocols, and the methods
/// attached so far.
///
/// The descriptor is the one piece of mutable state shared between the
/// front end and this engine. Mutation happens only through
/// [`attach_method`](Self::attach_method); composers read it back without
/// touching it.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDescriptor {
    name: EcoString,
    superclass: EcoString,
    protocols: Vec<EcoString>,
    methods: Vec<MethodDescriptor>,
    properties: Vec<PropertyDescriptor>,
    ivars: Vec<IvarDescriptor>,
}

impl ClassDescriptor {
    /// Creates an empty descriptor for `name : superclass`.
    pub fn new(name: impl Into<EcoString>, superclass: impl Into<EcoString>) -> Self {
        Self {
            name: name.into(),
            superclass: superclass.into(),
            protocols: Vec::new(),
            methods: Vec::new(),
            properties: Vec::new(),
            ivars: Vec::new(),
        }
    }

    /// Appends a method, in call order.
    ///
    /// This is the only mutation the engine performs on a descriptor; it is
    /// deliberately a named operation rather than a side effect of method
    /// synthesis, so the append is visible at the call site.
    pub fn attach_method(&mut self, method: MethodDescriptor) {
        debug!(class = %self.name, signature = method.signature(), "attaching method");
        self.methods.push(method);
    }

    /// Adopts a protocol.
    pub fn add_protocol(&mut self, protocol: impl Into<EcoString>) {
        self.protocols.push(protocol.into());
    }

    /// Records a property.
    pub fn add_property(&mut self, property: PropertyDescriptor) {
        self.properties.push(property);
    }

    /// Records an instance variable.
    pub fn add_ivar(&mut self, ivar: IvarDescriptor) {
        self.ivars.push(ivar);
    }

    /// The class name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The superclass name.
    #[must_use]
    pub fn superclass(&self) -> &str {
        &self.superclass
    }

    /// Adopted protocols, in adoption order.
    #[must_use]
    pub fn protocols(&self) -> &[EcoString] {
        &self.protocols
    }

    /// Attached methods, in attachment order.
    #[must_use]
    pub fn methods(&self) -> &[MethodDescriptor] {
        &self.methods
    }

    /// Recorded properties.
    #[must_use]
    pub fn properties(&self) -> &[PropertyDescriptor] {
        &self.properties
    }

    /// Recorded instance variables.
    #[must_use]
    pub fn ivars(&self) -> &[IvarDescriptor] {
        &self.ivars
    }

    /// The `@interface` header: `Name : Superclass`, plus the protocol
    /// list when any protocols are adopted.
    fn interface_header(&self) -> EcoString {
        let mut header = EcoString::new();
        header.push_str(&self.name);
        header.push_str(" : ");
        header.push_str(&self.superclass);
        if !self.protocols.is_empty() {
            header.push_str(" <");
            for (i, protocol) in self.protocols.iter().enumerate() {
                if i > 0 {
                    header.push_str(", ");
                }
                header.push_str(protocol);
            }
            header.push('>');
        }
        header
    }
}

/// Composes the `@interface` block for a class.
///
/// Each attached method contributes its interface form on its own
/// tab-indented line, in attachment order:
///
/// ```objc
/// @interface DecisionViewController : UIViewController
///
/// 	- (void)start;
///
/// @end
/// ```
#[must_use]
pub fn interface(class: &ClassDescriptor) -> Node {
    let mut text = EcoString::from("@interface ");
    text.push_str(&class.interface_header());
    text.push_str("\n\n");
    for (i, method) in class.methods().iter().enumerate() {
        if i > 0 {
            text.push('\n');
        }
        text.push('\t');
        text.push_str(&method.interface_form().render());
    }
    text.push_str("\n\n@end");
    Node::new(text)
}

/// Composes the `@implementation` block for a class.
///
/// Same frame as [`interface`], with implementation forms joined by blank
/// lines and no superclass in the header.
#[must_use]
pub fn implementation(class: &ClassDescriptor) -> Node {
    let mut text = EcoString::from("@implementation ");
    text.push_str(class.name());
    text.push_str("\n\n");
    for (i, method) in class.methods().iter().enumerate() {
        if i > 0 {
            text.push_str("\n\n");
        }
        text.push('\t');
        text.push_str(&method.implementation_form().render());
    }
    text.push_str("\n\n@end");
    Node::new(text)
}
