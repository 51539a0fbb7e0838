/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::{Node, TraitId};

/// The value carried by a [`TraitInstance`].
#[derive(Debug, Clone, PartialEq)]
pub enum TraitValue {
    /// The trait carries nothing beyond its presence.
    Annotation,
    /// The trait carries a value decoded from its metadata node.
    Structured(Node),
}

/// A trait applied to a shape.
///
/// Instances are immutable and compare by value: two instances are equal when
/// they have the same trait ID and the same value. All annotation traits with
/// a given ID are therefore equal to each other.
#[derive(Debug, Clone, PartialEq)]
pub struct TraitInstance {
    id: TraitId,
    value: TraitValue,
}

impl TraitInstance {
    /// Creates an annotation trait instance.
    pub fn annotation(id: TraitId) -> Self {
        Self {
            id,
            value: TraitValue::Annotation,
        }
    }

    /// Creates a trait instance carrying `value`.
    pub fn structured(id: TraitId, value: Node) -> Self {
        Self {
            id,
            value: TraitValue::Structured(value),
        }
    }

    /// The ID of this trait.
    pub fn id(&self) -> &TraitId {
        &self.id
    }

    /// The value of this trait.
    pub fn value(&self) -> &TraitValue {
        &self.value
    }

    /// Returns true if this is an annotation trait.
    pub fn is_annotation(&self) -> bool {
        matches!(self.value, TraitValue::Annotation)
    }

    /// Returns the structured value, or `None` for annotation traits.
    pub fn as_node(&self) -> Option<&Node> {
        match &self.value {
            TraitValue::Annotation => None,
            TraitValue::Structured(node) => Some(node),
        }
    }

    /// Returns the node written out when this trait is serialized.
    ///
    /// Annotation traits serialize as `{}`.
    pub fn to_node(&self) -> Node {
        match &self.value {
            TraitValue::Annotation => Node::empty_object(),
            TraitValue::Structured(node) => node.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotation_equality_is_by_id() {
        let a = TraitInstance::annotation(TraitId::from_static("jsonrpc#untaggedUnion"));
        let b = TraitInstance::annotation(TraitId::new("jsonrpc#untaggedUnion"));
        let c = TraitInstance::annotation(TraitId::from_static("smithy.api#sensitive"));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn annotation_is_not_equal_to_structured_empty_object() {
        let id = TraitId::from_static("smithy.api#tags");
        assert_ne!(
            TraitInstance::annotation(id.clone()),
            TraitInstance::structured(id, Node::empty_object())
        );
    }

    #[test]
    fn serialized_form() {
        let annotation = TraitInstance::annotation(TraitId::from_static("jsonrpc#untaggedUnion"));
        assert!(annotation.is_annotation());
        assert_eq!(annotation.as_node(), None);
        assert_eq!(annotation.to_node(), Node::empty_object());

        let documentation = TraitInstance::structured(
            TraitId::from_static("smithy.api#documentation"),
            Node::from("docs"),
        );
        assert!(!documentation.is_annotation());
        assert_eq!(documentation.as_node(), Some(&Node::from("docs")));
        assert_eq!(documentation.to_node(), Node::from("docs"));
    }
}
