/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Trait factories and providers.
//!
//! A factory turns the metadata node found in a model into a [`TraitInstance`].
//! Annotation traits and traits that carry a value share the same factory
//! signature and the same error type, so the registry does not need to know
//! which kind of trait it is dispatching to.

use crate::{MalformedTraitError, Node, TraitId, TraitInstance};
use std::fmt;
use std::sync::Arc;

/// Builds a trait instance from its metadata node.
///
/// Implemented for every `Fn(&Node) -> Result<TraitInstance, MalformedTraitError>`
/// closure that is `Send + Sync`.
pub trait TraitFactory: Send + Sync {
    /// Creates the trait, or rejects `node` if it does not fit the trait's shape.
    fn create_trait(&self, node: &Node) -> Result<TraitInstance, MalformedTraitError>;
}

impl<F> TraitFactory for F
where
    F: Fn(&Node) -> Result<TraitInstance, MalformedTraitError> + Send + Sync,
{
    fn create_trait(&self, node: &Node) -> Result<TraitInstance, MalformedTraitError> {
        (self)(node)
    }
}

/// Shared trait factory
#[derive(Clone)]
pub struct SharedTraitFactory(Arc<dyn TraitFactory>);

impl SharedTraitFactory {
    /// Create a new `SharedTraitFactory`.
    pub fn new(factory: impl TraitFactory + 'static) -> Self {
        Self(Arc::new(factory))
    }
}

impl TraitFactory for SharedTraitFactory {
    fn create_trait(&self, node: &Node) -> Result<TraitInstance, MalformedTraitError> {
        self.0.create_trait(node)
    }
}

impl fmt::Debug for SharedTraitFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedTraitFactory")
    }
}

/// Returns a factory for an annotation trait.
///
/// The only metadata an annotation trait accepts is the empty object `{}`.
///
/// # Examples
/// ```
/// use smithy_traits::factory::{self, TraitFactory};
/// use smithy_traits::{Node, TraitId};
///
/// let factory = factory::annotation(TraitId::from_static("jsonrpc#untaggedUnion"));
/// let instance = factory.create_trait(&Node::empty_object()).unwrap();
/// assert!(instance.is_annotation());
/// assert!(factory.create_trait(&Node::from(true)).is_err());
/// ```
pub fn annotation(id: TraitId) -> SharedTraitFactory {
    SharedTraitFactory::new(move |node: &Node| match node {
        Node::Object(members) if members.is_empty() => Ok(TraitInstance::annotation(id.clone())),
        Node::Object(members) => Err(MalformedTraitError::new(
            id.clone(),
            format!(
                "annotation traits must be an empty object, found an object with {} member(s)",
                members.len()
            ),
        )),
        other => Err(MalformedTraitError::unexpected_node(
            id.clone(),
            "an empty object",
            other.type_name(),
        )),
    })
}

/// Returns a factory for a trait whose value is a string, like `smithy.api#documentation`.
pub fn string(id: TraitId) -> SharedTraitFactory {
    SharedTraitFactory::new(move |node: &Node| match node {
        Node::String(_) => Ok(TraitInstance::structured(id.clone(), node.clone())),
        other => Err(MalformedTraitError::unexpected_node(
            id.clone(),
            "a string",
            other.type_name(),
        )),
    })
}

/// Returns a factory for a trait whose value is an object.
pub fn object(id: TraitId) -> SharedTraitFactory {
    SharedTraitFactory::new(move |node: &Node| match node {
        Node::Object(_) => Ok(TraitInstance::structured(id.clone(), node.clone())),
        other => Err(MalformedTraitError::unexpected_node(
            id.clone(),
            "an object",
            other.type_name(),
        )),
    })
}

/// Returns a factory that stores any non-null node as the trait's value.
pub fn document(id: TraitId) -> SharedTraitFactory {
    SharedTraitFactory::new(move |node: &Node| match node {
        Node::Null => Err(MalformedTraitError::new(
            id.clone(),
            "trait values cannot be null",
        )),
        _ => Ok(TraitInstance::structured(id.clone(), node.clone())),
    })
}

/// A source of one kind of trait.
///
/// Hosts register one provider per trait they support at startup.
pub trait TraitProvider: fmt::Debug + Send + Sync {
    /// The ID of the trait this provider creates.
    fn trait_id(&self) -> &TraitId;

    /// Creates the trait from its metadata node.
    fn create_trait(&self, node: &Node) -> Result<TraitInstance, MalformedTraitError>;
}

/// A [`TraitProvider`] made from a trait ID and a factory.
#[derive(Clone, Debug)]
pub struct TraitDefinition {
    id: TraitId,
    factory: SharedTraitFactory,
}

impl TraitDefinition {
    /// Creates a provider for `id` backed by `factory`.
    pub fn new(id: TraitId, factory: impl TraitFactory + 'static) -> Self {
        Self {
            id,
            factory: SharedTraitFactory::new(factory),
        }
    }

    /// Creates a provider for the annotation trait `id`.
    pub fn annotation(id: TraitId) -> Self {
        let factory = annotation(id.clone());
        Self { id, factory }
    }
}

impl TraitProvider for TraitDefinition {
    fn trait_id(&self) -> &TraitId {
        &self.id
    }

    fn create_trait(&self, node: &Node) -> Result<TraitInstance, MalformedTraitError> {
        self.factory.create_trait(node)
    }
}
