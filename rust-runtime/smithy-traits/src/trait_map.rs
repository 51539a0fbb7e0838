/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::{TraitId, TraitInstance};
use std::collections::HashMap;

/// The traits applied to one shape, keyed by trait ID.
///
/// A shape carries at most one instance of a given trait.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraitMap {
    traits: HashMap<TraitId, TraitInstance>,
}

impl TraitMap {
    /// Creates a new empty TraitMap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a trait into the map.
    ///
    /// Applying a trait that is already present with an equal value is a no-op.
    /// If the present value differs, the map is left unchanged and `instance` is
    /// handed back as the error.
    pub fn insert(&mut self, instance: TraitInstance) -> Result<(), TraitInstance> {
        match self.traits.get(instance.id()) {
            Some(existing) if *existing == instance => Ok(()),
            Some(_) => Err(instance),
            None => {
                self.traits.insert(instance.id().clone(), instance);
                Ok(())
            }
        }
    }

    /// Gets a trait by its ID.
    pub fn get(&self, id: &TraitId) -> Option<&TraitInstance> {
        self.traits.get(id)
    }

    /// Returns true if the map contains a trait with the given ID.
    pub fn contains(&self, id: &TraitId) -> bool {
        self.traits.contains_key(id)
    }

    /// Returns an iterator over all traits.
    pub fn iter(&self) -> impl Iterator<Item = &TraitInstance> {
        self.traits.values()
    }

    /// Returns the number of traits in the map.
    pub fn len(&self) -> usize {
        self.traits.len()
    }

    /// Returns true if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }
}
