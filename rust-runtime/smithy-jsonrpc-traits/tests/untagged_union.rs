/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use pretty_assertions::assert_eq;
use serde_json::json;
use smithy_jsonrpc_traits::{
    is_untagged_union, untagged_unions, JsonRpcTraits, UntaggedUnionTrait, UNTAGGED_UNION,
};
use smithy_traits::json_ast::load_traits;
use smithy_traits::{
    factory, ConstructError, Node, RegisterError, ShapeId, TraitDefinition, TraitId, TraitLoader,
    TraitPlugins, TraitRegistry,
};

fn registry() -> TraitRegistry {
    let registry = TraitPlugins::new()
        .with_plugin(JsonRpcTraits::new())
        .build_registry()
        .unwrap();
    let documentation = TraitId::from_static("smithy.api#documentation");
    registry
        .register_provider(TraitDefinition::new(
            documentation.clone(),
            factory::string(documentation),
        ))
        .unwrap();
    registry
}

#[test]
fn untagged_union_scenario() {
    let registry = registry();

    let instance = registry
        .construct(&UNTAGGED_UNION, &Node::empty_object())
        .unwrap();
    assert_eq!(instance.id().as_str(), "jsonrpc#untaggedUnion");
    assert_eq!(
        UntaggedUnionTrait::from_instance(&instance),
        Some(UntaggedUnionTrait::new())
    );

    let malformed = Node::from(json!({ "foo": "bar" }));
    assert!(matches!(
        registry.construct(&UNTAGGED_UNION, &malformed),
        Err(ConstructError::Malformed(_))
    ));

    assert!(matches!(
        registry.construct(
            &TraitId::from_static("jsonrpc#otherTrait"),
            &Node::empty_object()
        ),
        Err(ConstructError::Unknown(_))
    ));
}

#[test]
fn registering_the_plugin_twice_fails() {
    let registry = registry();
    let err = TraitPlugins::new()
        .with_plugin(JsonRpcTraits::new())
        .apply(&registry)
        .unwrap_err();
    assert!(matches!(err, RegisterError::Duplicate(_)));
}

#[test]
fn generator_finds_untagged_unions_in_a_model() {
    let model = json!({
        "smithy": "2.0",
        "shapes": {
            "com.example#Tagged": {
                "type": "union",
                "members": {
                    "a": { "target": "smithy.api#String" },
                    "b": { "target": "smithy.api#Integer" }
                }
            },
            "com.example#Value": {
                "type": "union",
                "members": {
                    "text": { "target": "smithy.api#String" },
                    "number": { "target": "smithy.api#Integer" }
                },
                "traits": {
                    "jsonrpc#untaggedUnion": {},
                    "smithy.api#documentation": "A string or a number."
                }
            },
            "com.example#Id": {
                "type": "apply",
                "traits": { "jsonrpc#untaggedUnion": {} }
            }
        }
    });

    let mut loader = TraitLoader::new(registry().seal());
    load_traits(&mut loader, &model).unwrap();
    let traits = loader.finish().unwrap();

    assert_eq!(
        untagged_unions(&traits),
        vec![
            &ShapeId::new("com.example#Id"),
            &ShapeId::new("com.example#Value"),
        ]
    );
    let value = traits.traits(&ShapeId::new("com.example#Value")).unwrap();
    assert!(is_untagged_union(value));
    assert_eq!(value.len(), 2);
    assert!(traits.traits(&ShapeId::new("com.example#Tagged")).is_none());
}

#[test]
fn model_with_bad_traits_reports_all_of_them() {
    let model = json!({
        "smithy": "2.0",
        "shapes": {
            "com.example#A": {
                "type": "union",
                "traits": { "jsonrpc#untaggedUnion": { "discriminator": "kind" } }
            },
            "com.example#B": {
                "type": "union",
                "traits": { "jsonrpc#untaggedUnion": true }
            },
            "com.example#C": {
                "type": "union",
                "traits": { "jsonrpc#otherTrait": {} }
            }
        }
    });

    let mut loader = TraitLoader::new(registry().seal());
    load_traits(&mut loader, &model).unwrap();
    let errors = loader.finish().unwrap_err();

    let messages: Vec<String> = errors.errors().iter().map(ToString::to_string).collect();
    assert_eq!(
        messages,
        vec![
            "com.example#A: invalid value for trait `jsonrpc#untaggedUnion`: annotation traits must be an empty object, found an object with 1 member(s)".to_string(),
            "com.example#B: invalid value for trait `jsonrpc#untaggedUnion`: expected an empty object, found boolean".to_string(),
            "com.example#C: unable to resolve trait `jsonrpc#otherTrait`".to_string(),
        ]
    );
}
