/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! The trait registry.
//!
//! [`TraitRegistry`] and [`FrozenTraitRegistry`] are the two representations of
//! the mapping from trait IDs to trait factories:
//! 1. [`TraitRegistry`] is open while the host registers the traits it supports.
//! 2. Sealing it, explicitly with [`TraitRegistry::seal`] or implicitly on the first
//!    [`TraitRegistry::construct`], moves the factories into a [`FrozenTraitRegistry`].
//!    The frozen form is never mutated again, so it can be cloned and shared across
//!    threads and queried without taking a lock.
//!
//! There is no way back from sealed to open.

use crate::error::{
    AlreadySealedError, ConstructError, DuplicateTraitError, MalformedTraitError, RegisterError,
    UnknownTraitError,
};
use crate::factory::{SharedTraitFactory, TraitFactory, TraitProvider};
use crate::{Node, TraitId, TraitInstance};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};
use tracing::{debug, trace};

/// Mapping from trait IDs to the factories that construct them.
///
/// A registry is usually created once per process and populated at startup:
///
/// ```
/// use smithy_traits::{factory, Node, TraitId, TraitRegistry};
/// use std::sync::LazyLock;
///
/// static REGISTRY: LazyLock<TraitRegistry> = LazyLock::new(|| {
///     let registry = TraitRegistry::new();
///     let id = TraitId::from_static("jsonrpc#untaggedUnion");
///     registry
///         .register(id.clone(), factory::annotation(id))
///         .expect("registered once");
///     registry
/// });
///
/// let id = TraitId::from_static("jsonrpc#untaggedUnion");
/// let instance = REGISTRY.construct(&id, &Node::empty_object()).unwrap();
/// assert_eq!(instance.id(), &id);
/// assert!(REGISTRY.is_sealed());
/// ```
#[derive(Default)]
pub struct TraitRegistry {
    open: Mutex<HashMap<TraitId, SharedTraitFactory>>,
    sealed: OnceLock<FrozenTraitRegistry>,
}

impl TraitRegistry {
    /// Creates an empty, open registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry and registers every provider in `providers`.
    pub fn with_providers<P>(providers: impl IntoIterator<Item = P>) -> Result<Self, RegisterError>
    where
        P: TraitProvider + 'static,
    {
        let registry = Self::new();
        for provider in providers {
            registry.register_provider(provider)?;
        }
        Ok(registry)
    }

    /// Registers `factory` as the constructor for `id`.
    ///
    /// Registration is first-come: if `id` is already registered this fails with
    /// [`DuplicateTraitError`] and the existing factory stays in place. Once the
    /// registry is sealed this fails with [`AlreadySealedError`].
    pub fn register(
        &self,
        id: TraitId,
        factory: impl TraitFactory + 'static,
    ) -> Result<(), RegisterError> {
        let mut open = self.lock_open();
        // `sealed` is only ever set while holding the lock
        if self.sealed.get().is_some() {
            return Err(AlreadySealedError::new(id).into());
        }
        match open.entry(id) {
            Entry::Occupied(entry) => Err(DuplicateTraitError::new(entry.key().clone()).into()),
            Entry::Vacant(entry) => {
                debug!(trait_id = %entry.key(), "registered trait");
                entry.insert(SharedTraitFactory::new(factory));
                Ok(())
            }
        }
    }

    /// Registers the trait created by `provider`.
    pub fn register_provider(
        &self,
        provider: impl TraitProvider + 'static,
    ) -> Result<(), RegisterError> {
        let id = provider.trait_id().clone();
        let provider = Arc::new(provider);
        self.register(id, move |node: &Node| provider.create_trait(node))
    }

    /// Constructs the trait `id` from its metadata node.
    ///
    /// Seals the registry if it is still open.
    pub fn construct(&self, id: &TraitId, node: &Node) -> Result<TraitInstance, ConstructError> {
        self.frozen().construct(id, node)
    }

    /// Seals the registry and returns its frozen form.
    ///
    /// Calling this more than once returns the same frozen registry.
    pub fn seal(&self) -> FrozenTraitRegistry {
        self.frozen().clone()
    }

    /// Returns true once the registry no longer accepts registrations.
    pub fn is_sealed(&self) -> bool {
        self.sealed.get().is_some()
    }

    /// Returns true if a factory is registered for `id`.
    pub fn contains(&self, id: &TraitId) -> bool {
        match self.sealed.get() {
            Some(frozen) => frozen.contains(id),
            None => self.lock_open().contains_key(id),
        }
    }

    /// Returns the number of registered traits.
    pub fn len(&self) -> usize {
        match self.sealed.get() {
            Some(frozen) => frozen.len(),
            None => self.lock_open().len(),
        }
    }

    /// Returns true if no traits are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the registered trait IDs, sorted.
    pub fn trait_ids(&self) -> Vec<TraitId> {
        let mut ids: Vec<TraitId> = match self.sealed.get() {
            Some(frozen) => frozen.trait_ids().cloned().collect(),
            None => self.lock_open().keys().cloned().collect(),
        };
        ids.sort();
        ids
    }

    fn frozen(&self) -> &FrozenTraitRegistry {
        if let Some(frozen) = self.sealed.get() {
            return frozen;
        }
        let mut open = self.lock_open();
        self.sealed.get_or_init(|| {
            let factories = std::mem::take(&mut *open);
            debug!(trait_count = factories.len(), "sealed trait registry");
            FrozenTraitRegistry(Arc::new(factories))
        })
    }

    fn lock_open(&self) -> MutexGuard<'_, HashMap<TraitId, SharedTraitFactory>> {
        // the map is never left half-updated, so a poisoned lock is still usable
        self.open.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for TraitRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraitRegistry")
            .field("sealed", &self.is_sealed())
            .field("traits", &self.trait_ids())
            .finish()
    }
}

/// The sealed, read-only form of a [`TraitRegistry`].
///
/// Cloning is cheap; every clone shares the same factories.
#[derive(Clone)]
#[must_use]
pub struct FrozenTraitRegistry(Arc<HashMap<TraitId, SharedTraitFactory>>);

impl FrozenTraitRegistry {
    /// Constructs the trait `id` from its metadata node.
    ///
    /// Fails with [`UnknownTraitError`] if nothing is registered for `id`, or with
    /// the factory's [`MalformedTraitError`] if it rejects `node`.
    pub fn construct(&self, id: &TraitId, node: &Node) -> Result<TraitInstance, ConstructError> {
        let factory = self
            .0
            .get(id)
            .ok_or_else(|| UnknownTraitError::new(id.clone()))?;
        let instance = factory.create_trait(node)?;
        if instance.id() != id {
            return Err(MalformedTraitError::new(
                id.clone(),
                format!("factory produced trait `{}` instead", instance.id()),
            )
            .into());
        }
        trace!(trait_id = %id, annotation = instance.is_annotation(), "constructed trait");
        Ok(instance)
    }

    /// Returns true if a factory is registered for `id`.
    pub fn contains(&self, id: &TraitId) -> bool {
        self.0.contains_key(id)
    }

    /// Returns the number of registered traits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no traits are registered.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the registered trait IDs in no particular order.
    pub fn trait_ids(&self) -> impl Iterator<Item = &TraitId> {
        self.0.keys()
    }
}

impl fmt::Debug for FrozenTraitRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<&TraitId> = self.0.keys().collect();
        ids.sort();
        f.debug_tuple("FrozenTraitRegistry").field(&ids).finish()
    }
}
