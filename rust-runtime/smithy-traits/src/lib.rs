/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Trait registry for Smithy models.
//!
//! Smithy traits are named metadata attached to shapes. This crate decouples
//! which traits exist from how models are loaded:
//! - hosts register a factory per supported trait in a [`TraitRegistry`] at startup,
//! - model loaders construct [`TraitInstance`]s from the metadata [`Node`] found in
//!   documents and attach them to shapes with a [`TraitLoader`],
//! - code generators query the resulting [`LoadedTraits`] by [`TraitId`].

#![allow(clippy::derive_partial_eq_without_eq)]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod error;
pub mod factory;
#[cfg(feature = "json-ast")]
pub mod json_ast;

mod instance;
mod loader;
mod node;
mod plugin;
mod registry;
mod shape_id;
mod trait_map;

pub use error::{
    AlreadySealedError, ConstructError, DuplicateTraitError, MalformedTraitError, RegisterError,
    TraitConflictError, TraitLoadError, TraitLoadErrors, UnknownTraitError,
};
pub use factory::{SharedTraitFactory, TraitDefinition, TraitFactory, TraitProvider};
pub use instance::{TraitInstance, TraitValue};
pub use loader::{LoadedTraits, TraitLoader};
pub use node::{Node, Number};
pub use plugin::{TraitPlugin, TraitPlugins};
pub use registry::{FrozenTraitRegistry, TraitRegistry};
pub use shape_id::{InvalidShapeIdError, ShapeId, TraitId};
pub use trait_map::TraitMap;
