/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Errors returned by trait registration, construction, and loading.

use crate::{ShapeId, TraitId};
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

/// A trait ID was registered more than once.
///
/// The first registration stays active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateTraitError {
    trait_id: TraitId,
}

impl DuplicateTraitError {
    pub(crate) fn new(trait_id: TraitId) -> Self {
        Self { trait_id }
    }

    /// The trait ID that was already registered.
    pub fn trait_id(&self) -> &TraitId {
        &self.trait_id
    }
}

impl fmt::Display for DuplicateTraitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "trait `{}` is already registered", self.trait_id)
    }
}

impl StdError for DuplicateTraitError {}

/// A trait was registered after the registry was sealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlreadySealedError {
    trait_id: TraitId,
}

impl AlreadySealedError {
    pub(crate) fn new(trait_id: TraitId) -> Self {
        Self { trait_id }
    }

    /// The trait ID whose registration was refused.
    pub fn trait_id(&self) -> &TraitId {
        &self.trait_id
    }
}

impl fmt::Display for AlreadySealedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot register trait `{}`: the trait registry is sealed",
            self.trait_id
        )
    }
}

impl StdError for AlreadySealedError {}

/// A model referenced a trait that has no registered factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTraitError {
    trait_id: TraitId,
}

impl UnknownTraitError {
    pub(crate) fn new(trait_id: TraitId) -> Self {
        Self { trait_id }
    }

    /// The trait ID that could not be resolved.
    pub fn trait_id(&self) -> &TraitId {
        &self.trait_id
    }
}

impl fmt::Display for UnknownTraitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unable to resolve trait `{}`", self.trait_id)
    }
}

impl StdError for UnknownTraitError {}

/// A trait factory rejected the metadata node it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedTraitError {
    trait_id: TraitId,
    message: Cow<'static, str>,
}

impl MalformedTraitError {
    /// Creates a new error for `trait_id`. Custom factories use this to reject metadata.
    pub fn new(trait_id: TraitId, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            trait_id,
            message: message.into(),
        }
    }

    /// Creates an error describing a node of the wrong type.
    pub fn unexpected_node(trait_id: TraitId, expected: &'static str, found: &'static str) -> Self {
        Self::new(trait_id, format!("expected {expected}, found {found}"))
    }

    /// The trait whose metadata was rejected.
    pub fn trait_id(&self) -> &TraitId {
        &self.trait_id
    }

    /// Why the metadata was rejected.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for MalformedTraitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid value for trait `{}`: {}", self.trait_id, self.message)
    }
}

impl StdError for MalformedTraitError {}

/// Error returned by [`TraitRegistry::register`](crate::TraitRegistry::register).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterError {
    /// The trait ID was already registered.
    Duplicate(DuplicateTraitError),
    /// The registry no longer accepts registrations.
    AlreadySealed(AlreadySealedError),
}

impl RegisterError {
    /// The trait ID whose registration failed.
    pub fn trait_id(&self) -> &TraitId {
        match self {
            RegisterError::Duplicate(err) => err.trait_id(),
            RegisterError::AlreadySealed(err) => err.trait_id(),
        }
    }
}

impl fmt::Display for RegisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterError::Duplicate(err) => fmt::Display::fmt(err, f),
            RegisterError::AlreadySealed(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl StdError for RegisterError {}

impl From<DuplicateTraitError> for RegisterError {
    fn from(err: DuplicateTraitError) -> Self {
        RegisterError::Duplicate(err)
    }
}

impl From<AlreadySealedError> for RegisterError {
    fn from(err: AlreadySealedError) -> Self {
        RegisterError::AlreadySealed(err)
    }
}

/// Error returned when constructing a trait instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructError {
    /// No factory is registered for the trait ID.
    Unknown(UnknownTraitError),
    /// The factory rejected the metadata node.
    Malformed(MalformedTraitError),
}

impl ConstructError {
    /// The trait ID that failed to construct.
    pub fn trait_id(&self) -> &TraitId {
        match self {
            ConstructError::Unknown(err) => err.trait_id(),
            ConstructError::Malformed(err) => err.trait_id(),
        }
    }
}

impl fmt::Display for ConstructError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructError::Unknown(err) => fmt::Display::fmt(err, f),
            ConstructError::Malformed(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl StdError for ConstructError {}

impl From<UnknownTraitError> for ConstructError {
    fn from(err: UnknownTraitError) -> Self {
        ConstructError::Unknown(err)
    }
}

impl From<MalformedTraitError> for ConstructError {
    fn from(err: MalformedTraitError) -> Self {
        ConstructError::Malformed(err)
    }
}

/// A shape was given two different values for the same trait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitConflictError {
    shape_id: ShapeId,
    trait_id: TraitId,
}

impl TraitConflictError {
    pub(crate) fn new(shape_id: ShapeId, trait_id: TraitId) -> Self {
        Self { shape_id, trait_id }
    }

    /// The shape carrying the conflicting trait.
    pub fn shape_id(&self) -> &ShapeId {
        &self.shape_id
    }

    /// The trait applied more than once.
    pub fn trait_id(&self) -> &TraitId {
        &self.trait_id
    }
}

impl fmt::Display for TraitConflictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "conflicting values for trait `{}` on shape `{}`",
            self.trait_id, self.shape_id
        )
    }
}

impl StdError for TraitConflictError {}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TraitLoadErrorKind {
    Construct(ConstructError),
    Conflict(TraitConflictError),
}

/// One problem found while attaching traits to a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct TraitLoadError {
    shape_id: ShapeId,
    kind: TraitLoadErrorKind,
}

impl TraitLoadError {
    pub(crate) fn new(shape_id: ShapeId, kind: TraitLoadErrorKind) -> Self {
        Self { shape_id, kind }
    }

    /// The shape the trait was applied to.
    pub fn shape_id(&self) -> &ShapeId {
        &self.shape_id
    }

    /// The trait that failed to load.
    pub fn trait_id(&self) -> &TraitId {
        match &self.kind {
            TraitLoadErrorKind::Construct(err) => err.trait_id(),
            TraitLoadErrorKind::Conflict(err) => err.trait_id(),
        }
    }

    /// Returns the construction error, if that is what this is.
    pub fn as_construct_error(&self) -> Option<&ConstructError> {
        match &self.kind {
            TraitLoadErrorKind::Construct(err) => Some(err),
            TraitLoadErrorKind::Conflict(_) => None,
        }
    }

    /// Returns true if the trait had no registered factory.
    pub fn is_unknown_trait(&self) -> bool {
        matches!(
            self.kind,
            TraitLoadErrorKind::Construct(ConstructError::Unknown(_))
        )
    }

    /// Returns true if the trait's factory rejected its metadata.
    pub fn is_malformed_trait(&self) -> bool {
        matches!(
            self.kind,
            TraitLoadErrorKind::Construct(ConstructError::Malformed(_))
        )
    }

    /// Returns true if the shape already carried a different value for the trait.
    pub fn is_conflict(&self) -> bool {
        matches!(self.kind, TraitLoadErrorKind::Conflict(_))
    }
}

impl fmt::Display for TraitLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TraitLoadErrorKind::Construct(err) => write!(f, "{}: {err}", self.shape_id),
            TraitLoadErrorKind::Conflict(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl StdError for TraitLoadError {}

/// Every problem found while loading the traits of a model.
#[derive(Debug, Clone, PartialEq)]
pub struct TraitLoadErrors {
    errors: Vec<TraitLoadError>,
}

impl TraitLoadErrors {
    pub(crate) fn new(errors: Vec<TraitLoadError>) -> Self {
        Self { errors }
    }

    /// The individual errors, in the order the traits were applied.
    pub fn errors(&self) -> &[TraitLoadError] {
        &self.errors
    }

    /// Consumes this value, returning the individual errors.
    pub fn into_errors(self) -> Vec<TraitLoadError> {
        self.errors
    }
}

impl fmt::Display for TraitLoadErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.errors.len();
        let plural = if count == 1 { "" } else { "s" };
        write!(f, "failed to load model traits ({count} error{plural})")?;
        for err in &self.errors {
            write!(f, "\n  - {err}")?;
        }
        Ok(())
    }
}

impl StdError for TraitLoadErrors {}
