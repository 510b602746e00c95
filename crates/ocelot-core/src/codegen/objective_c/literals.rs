// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Literal and geometry synthesizers.
//!
//! - Framework imports: `#import <UIKit/UIKit.h>`
//! - String literals: source `"hello"` → `@"hello"`, typed `NSString`
//! - Number literals: `3` → `NSInteger`, `3.0` → `CGFloat`, always scalar
//! - Geometry shortcuts: 2 coordinates → `CGPointMake`, 4 → `CGRectMake`

use super::node::{Node, Render, Value};
use super::objc_types::TypeName;
use super::{Result, SynthError};
use ecow::EcoString;

/// Synthesizes an import for a framework's umbrella header.
///
/// Returns `None` when no framework is named — an absent import is a
/// no-op for the caller, not an error.
///
/// # Example
///
/// ```
/// use ocelot_core::codegen::objective_c::{literals, Render};
///
/// let node = literals::import_directive(Some("UIKit")).unwrap();
/// assert_eq!(node.render(), "#import <UIKit/UIKit.h>");
/// assert!(literals::import_directive(None).is_none());
/// ```
#[must_use]
pub fn import_directive(framework: Option<&str>) -> Option<Node> {
    let framework = framework?;
    Some(Node::new(format!("#import <{framework}/{framework}.h>")))
}

/// Synthesizes a string literal from its quoted source token.
///
/// The first and last character of the token are the source quote
/// delimiters; they are stripped and the content re-wrapped in the
/// Objective-C literal syntax `@"…"`. The result is a non-scalar
/// `NSString` node.
///
/// # Errors
///
/// Returns [`SynthError::UnrenderableValue`] for a token too short to
/// carry a pair of delimiters.
pub fn string_literal(token: &str) -> Result<Node> {
    let mut chars = token.chars();
    if chars.next().is_none() || chars.next_back().is_none() {
        return Err(SynthError::UnrenderableValue {
            token: token.to_string(),
        });
    }
    Ok(Node::new(format!("@\"{}\"", chars.as_str()))
        .with_type(TypeName::string())
        .with_scalar(false))
}

/// Synthesizes a number literal from its source token.
///
/// The textual form decides the type: a decimal point makes it `CGFloat`,
/// otherwise it is `NSInteger`. The rendered text is the token itself.
///
/// # Errors
///
/// Returns [`SynthError::UnrenderableValue`] for a token with no numeric
/// form.
pub fn number_literal(token: &str) -> Result<Node> {
    if token.parse::<f64>().is_err() {
        return Err(SynthError::UnrenderableValue {
            token: token.to_string(),
        });
    }
    let type_name = if token.contains('.') {
        TypeName::float()
    } else {
        TypeName::integer()
    };
    Ok(Node::new(token).with_type(type_name).with_scalar(true))
}

/// Synthesizes a geometry constructor from an ordered coordinate list.
///
/// Exactly 2 coordinates make a point, exactly 4 make a rect:
///
/// ```
/// use ocelot_core::codegen::objective_c::{literals, Render};
///
/// let point = literals::geometry_shortcut(&["x".into(), "y".into()]).unwrap();
/// assert_eq!(point.render(), "CGPointMake(x, y)");
/// ```
///
/// # Errors
///
/// Returns [`SynthError::InvalidArgumentCount`] for any other length.
pub fn geometry_shortcut(coordinates: &[Value]) -> Result<Node> {
    let type_name = match coordinates.len() {
        2 => TypeName::point(),
        4 => TypeName::rect(),
        count => return Err(SynthError::InvalidArgumentCount { count }),
    };

    let mut args = EcoString::new();
    for (i, coordinate) in coordinates.iter().enumerate() {
        if i > 0 {
            args.push_str(", ");
        }
        args.push_str(&coordinate.render());
    }

    let text = format!("{}Make({args})", type_name.as_str());
    Ok(Node::new(text).with_type(type_name).with_scalar(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_names_umbrella_header() {
        let node = import_directive(Some("Foundation")).unwrap();
        assert_eq!(node.render(), "#import <Foundation/Foundation.h>");
    }

    #[test]
    fn absent_import_is_absent() {
        assert!(import_directive(None).is_none());
    }

    #[test]
    fn string_literal_strips_delimiters() {
        let node = string_literal("\"hello\"").unwrap();
        assert_eq!(node.render(), "@\"hello\"");
        assert_eq!(node.type_name(), Some(&TypeName::string()));
        assert_eq!(node.is_scalar(), Some(false));
    }

    #[test]
    fn string_literal_rejects_bare_quote() {
        let err = string_literal("\"").unwrap_err();
        assert_eq!(
            err,
            SynthError::UnrenderableValue {
                token: "\"".to_string()
            }
        );
    }

    #[test]
    fn integer_token_is_nsinteger() {
        let node = number_literal("3").unwrap();
        assert_eq!(node.render(), "3");
        assert_eq!(node.type_name(), Some(&TypeName::integer()));
        assert_eq!(node.is_scalar(), Some(true));
    }

    #[test]
    fn decimal_token_is_cgfloat() {
        let node = number_literal("3.0").unwrap();
        assert_eq!(node.render(), "3.0");
        assert_eq!(node.type_name(), Some(&TypeName::float()));
        assert_eq!(node.is_scalar(), Some(true));
    }

    #[test]
    fn nonsense_token_is_unrenderable() {
        let err = number_literal("banana").unwrap_err();
        assert!(matches!(err, SynthError::UnrenderableValue { .. }));
    }

    #[test]
    fn two_coordinates_make_a_point() {
        let node = geometry_shortcut(&["0".into(), "20".into()]).unwrap();
        assert_eq!(node.render(), "CGPointMake(0, 20)");
        assert_eq!(node.type_name(), Some(&TypeName::point()));
        assert_eq!(node.is_scalar(), Some(true));
    }

    #[test]
    fn four_coordinates_make_a_rect() {
        let node =
            geometry_shortcut(&["0".into(), "0".into(), "320".into(), "480".into()]).unwrap();
        assert_eq!(node.render(), "CGRectMake(0, 0, 320, 480)");
        assert_eq!(node.type_name(), Some(&TypeName::rect()));
    }

    #[test]
    fn other_lengths_are_rejected() {
        for count in [0, 1, 3, 5] {
            let coordinates: Vec<Value> = (0..count).map(|i| i.to_string().into()).collect();
            let err = geometry_shortcut(&coordinates).unwrap_err();
            assert_eq!(err, SynthError::InvalidArgumentCount { count });
        }
    }

    #[test]
    fn coordinates_may_be_nodes() {
        let x = number_literal("1.5").unwrap();
        let y = number_literal("2.5").unwrap();
        let node = geometry_shortcut(&[x.into(), y.into()]).unwrap();
        assert_eq!(node.render(), "CGPointMake(1.5, 2.5)");
    }
}
