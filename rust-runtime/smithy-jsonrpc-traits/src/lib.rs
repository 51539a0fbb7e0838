/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Smithy traits understood by the JSON-RPC code generator.
//!
//! Register [`JsonRpcTraits`] with the host's trait registry at startup, then
//! use the query functions here while generating code.

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

use smithy_traits::{
    LoadedTraits, RegisterError, ShapeId, TraitDefinition, TraitId, TraitInstance, TraitMap,
    TraitPlugin, TraitRegistry,
};
use tracing::debug;

/// ID of the [`UntaggedUnionTrait`].
pub const UNTAGGED_UNION: TraitId = TraitId::from_static("jsonrpc#untaggedUnion");

/// Marks a union that is serialized without a discriminant.
///
/// The variant of an untagged union is recognized from the structure of the
/// value while decoding, so the generator emits an untagged deserializer for
/// unions carrying this trait. It is an annotation trait: `@jsonrpc#untaggedUnion`
/// takes no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub struct UntaggedUnionTrait;

impl UntaggedUnionTrait {
    /// ID of this trait.
    pub const ID: TraitId = UNTAGGED_UNION;

    /// Creates the trait.
    pub fn new() -> Self {
        Self
    }

    /// Returns the provider that registers this trait.
    pub fn provider() -> TraitDefinition {
        TraitDefinition::annotation(Self::ID)
    }

    /// Reads the trait back from a constructed instance.
    pub fn from_instance(instance: &TraitInstance) -> Option<Self> {
        (instance.id() == &Self::ID && instance.is_annotation()).then_some(Self)
    }

    /// Returns this trait as an instance that can be attached to a shape.
    pub fn to_instance(&self) -> TraitInstance {
        TraitInstance::annotation(Self::ID)
    }
}

/// Registers every JSON-RPC trait.
#[derive(Debug, Default, Clone, Copy)]
#[non_exhaustive]
pub struct JsonRpcTraits;

impl JsonRpcTraits {
    /// Creates the plugin.
    pub fn new() -> Self {
        Self
    }
}

impl TraitPlugin for JsonRpcTraits {
    fn register_traits(&self, registry: &TraitRegistry) -> Result<(), RegisterError> {
        debug!("registering JSON-RPC traits");
        registry.register_provider(UntaggedUnionTrait::provider())
    }
}

/// Returns true if the shape with these traits is an untagged union.
pub fn is_untagged_union(traits: &TraitMap) -> bool {
    traits
        .get(&UNTAGGED_UNION)
        .and_then(UntaggedUnionTrait::from_instance)
        .is_some()
}

/// Returns every untagged union in a loaded model, sorted by shape ID.
pub fn untagged_unions(traits: &LoadedTraits) -> Vec<&ShapeId> {
    traits.shapes_with_trait(&UNTAGGED_UNION)
}
