// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Objective-C value objects for type-safe synthesis.
//!
//! Value objects are immutable and compared by value, not identity.
//!
//! ## `TypeName`
//!
//! An Objective-C type identifier. The set is open — any class name is a
//! valid type — and two types are equal only by exact name match; there is
//! no subtype relation in this model:
//!
//! ```
//! use ocelot_core::codegen::objective_c::TypeName;
//!
//! assert_eq!(TypeName::integer().as_str(), "NSInteger");
//! assert_ne!(TypeName::new("UIButton"), TypeName::new("UIView"));
//! ```
//!
//! ## `Cast`
//!
//! A `{type, scalar}` pair consumed by parameter and return-type rendering.
//! Scalars render bare, references take the pointer suffix:
//!
//! ```
//! use ocelot_core::codegen::objective_c::{Cast, TypeName};
//!
//! assert_eq!(Cast::new(TypeName::integer(), true).to_string(), "NSInteger");
//! assert_eq!(Cast::new(TypeName::string(), false).to_string(), "NSString *");
//! ```

use ecow::EcoString;
use std::fmt;

/// An Objective-C type identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeName(EcoString);

impl TypeName {
    /// Creates a type name for an arbitrary class or builtin.
    pub fn new(name: impl Into<EcoString>) -> Self {
        Self(name.into())
    }

    /// The built-in integer scalar type, `NSInteger`.
    #[must_use]
    pub fn integer() -> Self {
        Self("NSInteger".into())
    }

    /// The built-in floating-point scalar type, `CGFloat`.
    #[must_use]
    pub fn float() -> Self {
        Self("CGFloat".into())
    }

    /// The point geometry type, `CGPoint`.
    #[must_use]
    pub fn point() -> Self {
        Self("CGPoint".into())
    }

    /// The rectangle geometry type, `CGRect`.
    #[must_use]
    pub fn rect() -> Self {
        Self("CGRect".into())
    }

    /// The string class, `NSString`.
    #[must_use]
    pub fn string() -> Self {
        Self("NSString".into())
    }

    /// The generic object-reference placeholder, `id`.
    ///
    /// Used for declarations whose type could not be inferred.
    #[must_use]
    pub fn object() -> Self {
        Self("id".into())
    }

    /// The `void` return type.
    #[must_use]
    pub fn void() -> Self {
        Self("void".into())
    }

    /// The type name as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A type cast: a target type plus its scalar/reference classification.
///
/// A pure value object with no rendering side effects and no independent
/// identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cast {
    type_name: TypeName,
    scalar: bool,
}

impl Cast {
    /// Creates a cast.
    pub fn new(type_name: TypeName, scalar: bool) -> Self {
        Self { type_name, scalar }
    }

    /// The target type.
    #[must_use]
    pub fn type_name(&self) -> &TypeName {
        &self.type_name
    }

    /// Whether the target is a scalar (passed by value) rather than an
    /// object reference.
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        self.scalar
    }
}

impl fmt::Display for Cast {
    /// Renders the declaration form: `NSInteger` for scalars,
    /// `NSString *` for references.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scalar {
            write!(f, "{}", self.type_name)
        } else {
            write!(f, "{} *", self.type_name)
        }
    }
}
