// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for Objective-C synthesis.
//!
//! These verify the engine's load-bearing invariants across generated
//! inputs:
//!
//! 1. **Geometry arity is total** — every coordinate count either renders
//!    the right constructor or fails with `InvalidArgumentCount`
//! 2. **Number classification follows the token text** — a decimal point
//!    and nothing else decides integer vs float
//! 3. **Operation unification is exact-match** — equal types propagate,
//!    unequal types never do
//! 4. **Assignment is declare-then-reassign** — one declaration per
//!    identifier per stack, ever

use proptest::prelude::*;

use super::literals::{geometry_shortcut, number_literal};
use super::node::{Node, Render, Value};
use super::objc_types::TypeName;
use super::operators::operation;
use super::scope::{assignment, Assignment, ScopeStack};
use super::SynthError;

fn identifier() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9]{0,11}"
}

fn type_name() -> impl Strategy<Value = TypeName> {
    prop_oneof![
        Just(TypeName::integer()),
        Just(TypeName::float()),
        Just(TypeName::string()),
        Just(TypeName::new("UIView")),
    ]
}

proptest! {
    /// Property 1: geometry synthesis is total over coordinate counts.
    #[test]
    fn geometry_arity_is_total(count in 0usize..16) {
        let coordinates: Vec<Value> = (0..count).map(|i| i.to_string().into()).collect();
        match geometry_shortcut(&coordinates) {
            Ok(node) => {
                prop_assert!(count == 2 || count == 4);
                let expected = if count == 2 { "CGPointMake(" } else { "CGRectMake(" };
                prop_assert!(node.render().starts_with(expected));
                prop_assert_eq!(node.is_scalar(), Some(true));
            }
            Err(err) => {
                prop_assert!(count != 2 && count != 4);
                prop_assert_eq!(err, SynthError::InvalidArgumentCount { count });
            }
        }
    }

    /// Property 2: integer tokens classify as `NSInteger`, fractional
    /// tokens as `CGFloat`, and the token text survives verbatim.
    #[test]
    fn number_classification_follows_the_token(n in -1_000_000i64..1_000_000, frac in 0u32..1000) {
        let integer_token = n.to_string();
        let node = number_literal(&integer_token).unwrap();
        let integer_rendered = node.render();
        prop_assert_eq!(integer_rendered.as_str(), integer_token.as_str());
        prop_assert_eq!(node.type_name(), Some(&TypeName::integer()));

        let float_token = format!("{n}.{frac}");
        let node = number_literal(&float_token).unwrap();
        let float_rendered = node.render();
        prop_assert_eq!(float_rendered.as_str(), float_token.as_str());
        prop_assert_eq!(node.type_name(), Some(&TypeName::float()));
        prop_assert_eq!(node.is_scalar(), Some(true));
    }

    /// Property 3: operation result type is the operand type exactly when
    /// the operands agree, and absent otherwise.
    #[test]
    fn operation_unifies_only_equal_types(left in type_name(), right in type_name()) {
        let l = Node::new("a").with_type(left.clone());
        let r = Node::new("b").with_type(right.clone());
        let node = operation(&l, "+", &r);
        if left == right {
            prop_assert_eq!(node.type_name(), Some(&left));
        } else {
            prop_assert_eq!(node.type_name(), None);
        }
    }

    /// Property 4: for any identifier, the first assignment against a fresh
    /// stack declares and every later one reassigns.
    #[test]
    fn assignment_declares_exactly_once(ident in identifier(), repeats in 1usize..5) {
        let mut scope = ScopeStack::new();
        let expr = number_literal("7").unwrap();

        let first = assignment(&mut scope, &Assignment::new(ident.as_str(), "=", expr.clone()))
            .unwrap()
            .render();
        prop_assert!(first.starts_with("NSInteger "));

        for _ in 0..repeats {
            let next = assignment(&mut scope, &Assignment::new(ident.as_str(), "=", expr.clone()))
                .unwrap()
                .render();
            let expected = format!("{ident} = 7");
            prop_assert_eq!(next.as_str(), expected.as_str());
        }
    }

    /// Synthesis never panics on arbitrary bare-text inputs.
    #[test]
    fn operation_is_safe_on_arbitrary_text(a in ".{0,40}", b in ".{0,40}", op in "[-+*/]") {
        let node = operation(&Node::new(a), &op, &Node::new(b));
        let _ = node.render();
    }
}
