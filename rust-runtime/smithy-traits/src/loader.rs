/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Attaching traits to shapes while a model is loaded.

use crate::error::{TraitConflictError, TraitLoadError, TraitLoadErrorKind, TraitLoadErrors};
use crate::{FrozenTraitRegistry, Node, ShapeId, TraitId, TraitInstance, TraitMap};
use std::collections::HashMap;
use tracing::debug;

/// Builds the trait maps of a model's shapes.
///
/// Every trait application found in the model documents is passed to
/// [`apply`](TraitLoader::apply). Failures do not stop the load: they are
/// collected, and [`finish`](TraitLoader::finish) reports all of them at once.
///
/// ```
/// use smithy_traits::{factory, Node, ShapeId, TraitId, TraitLoader, TraitRegistry};
///
/// let untagged_union = TraitId::from_static("jsonrpc#untaggedUnion");
/// let registry = TraitRegistry::new();
/// registry
///     .register(untagged_union.clone(), factory::annotation(untagged_union.clone()))
///     .unwrap();
///
/// let mut loader = TraitLoader::new(registry.seal());
/// let shape = ShapeId::new("com.example#Value");
/// loader.apply(shape.clone(), &untagged_union, &Node::empty_object());
/// let traits = loader.finish().unwrap();
/// assert!(traits.has_trait(&shape, &untagged_union));
/// ```
#[derive(Debug)]
pub struct TraitLoader {
    registry: FrozenTraitRegistry,
    shapes: HashMap<ShapeId, TraitMap>,
    errors: Vec<TraitLoadError>,
}

impl TraitLoader {
    /// Creates a loader that constructs traits through `registry`.
    pub fn new(registry: FrozenTraitRegistry) -> Self {
        Self {
            registry,
            shapes: HashMap::new(),
            errors: Vec::new(),
        }
    }

    /// Applies the trait `trait_id` with metadata `node` to `shape_id`.
    ///
    /// Returns true if the trait was attached. Otherwise the failure is recorded
    /// and reported by [`finish`](TraitLoader::finish).
    pub fn apply(&mut self, shape_id: ShapeId, trait_id: &TraitId, node: &Node) -> bool {
        match self.registry.construct(trait_id, node) {
            Ok(instance) => self.attach(shape_id, instance),
            Err(err) => {
                self.record(TraitLoadError::new(
                    shape_id,
                    TraitLoadErrorKind::Construct(err),
                ));
                false
            }
        }
    }

    /// Attaches an already constructed trait to `shape_id`.
    pub fn attach(&mut self, shape_id: ShapeId, instance: TraitInstance) -> bool {
        let traits = self.shapes.entry(shape_id.clone()).or_default();
        match traits.insert(instance) {
            Ok(()) => true,
            Err(rejected) => {
                let conflict = TraitConflictError::new(shape_id.clone(), rejected.id().clone());
                self.record(TraitLoadError::new(
                    shape_id,
                    TraitLoadErrorKind::Conflict(conflict),
                ));
                false
            }
        }
    }

    /// Returns the problems recorded so far.
    pub fn errors(&self) -> &[TraitLoadError] {
        &self.errors
    }

    /// Finishes the load.
    ///
    /// Fails with every recorded problem, in the order they were found, if
    /// there were any.
    pub fn finish(self) -> Result<LoadedTraits, TraitLoadErrors> {
        if self.errors.is_empty() {
            Ok(LoadedTraits {
                shapes: self.shapes,
            })
        } else {
            debug!(error_count = self.errors.len(), "trait loading failed");
            Err(TraitLoadErrors::new(self.errors))
        }
    }

    fn record(&mut self, error: TraitLoadError) {
        debug!(shape_id = %error.shape_id(), %error, "failed to apply trait");
        self.errors.push(error);
    }
}

/// The traits of every shape in a successfully loaded model.
#[derive(Debug, Clone, Default)]
pub struct LoadedTraits {
    shapes: HashMap<ShapeId, TraitMap>,
}

impl LoadedTraits {
    /// Returns the traits applied to `shape_id`, if it has any.
    pub fn traits(&self, shape_id: &ShapeId) -> Option<&TraitMap> {
        self.shapes.get(shape_id)
    }

    /// Returns the trait `trait_id` of `shape_id`.
    pub fn get(&self, shape_id: &ShapeId, trait_id: &TraitId) -> Option<&TraitInstance> {
        self.traits(shape_id).and_then(|traits| traits.get(trait_id))
    }

    /// Returns true if `shape_id` carries `trait_id`.
    pub fn has_trait(&self, shape_id: &ShapeId, trait_id: &TraitId) -> bool {
        self.get(shape_id, trait_id).is_some()
    }

    /// Returns every shape carrying `trait_id`, sorted by shape ID.
    pub fn shapes_with_trait(&self, trait_id: &TraitId) -> Vec<&ShapeId> {
        let mut shapes: Vec<&ShapeId> = self
            .shapes
            .iter()
            .filter(|(_, traits)| traits.contains(trait_id))
            .map(|(shape_id, _)| shape_id)
            .collect();
        shapes.sort();
        shapes
    }

    /// Returns the IDs of every shape with at least one trait.
    pub fn shape_ids(&self) -> impl Iterator<Item = &ShapeId> {
        self.shapes.keys()
    }
}
