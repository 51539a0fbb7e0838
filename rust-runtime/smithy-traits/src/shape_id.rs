/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::borrow::Cow;
use std::fmt;

/// A Smithy Shape ID.
///
/// Shape IDs uniquely identify shapes in a Smithy model.
/// Format: `namespace#shapeName` or `namespace#shapeName$memberName`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId {
    value: Cow<'static, str>,
}

impl ShapeId {
    /// Creates a new ShapeId from a string without validating it.
    ///
    /// # Examples
    /// ```
    /// use smithy_traits::ShapeId;
    ///
    /// let shape_id = ShapeId::new("smithy.api#String");
    /// ```
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Cow::Owned(value.into()),
        }
    }

    /// Creates a ShapeId from a static string. Usable in `const` and `static` items.
    pub const fn from_static(value: &'static str) -> Self {
        Self {
            value: Cow::Borrowed(value),
        }
    }

    /// Parses and validates a ShapeId.
    ///
    /// # Examples
    /// ```
    /// use smithy_traits::ShapeId;
    ///
    /// assert!(ShapeId::parse("com.example#MyStruct$member").is_ok());
    /// assert!(ShapeId::parse("MyStruct").is_err());
    /// ```
    pub fn parse(value: impl Into<String>) -> Result<Self, InvalidShapeIdError> {
        let value = value.into();
        match validate(&value) {
            Ok(()) => Ok(Self::new(value)),
            Err(reason) => Err(InvalidShapeIdError { value, reason }),
        }
    }

    /// Returns the string representation of this ShapeId.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the namespace portion of the ShapeId.
    ///
    /// # Examples
    /// ```
    /// use smithy_traits::ShapeId;
    ///
    /// let shape_id = ShapeId::new("smithy.api#String");
    /// assert_eq!(shape_id.namespace(), Some("smithy.api"));
    /// ```
    pub fn namespace(&self) -> Option<&str> {
        self.value.split_once('#').map(|(ns, _)| ns)
    }

    /// Returns the shape name portion of the ShapeId.
    pub fn shape_name(&self) -> Option<&str> {
        self.value
            .split_once('#')
            .and_then(|(_, rest)| rest.split_once('$').map(|(name, _)| name).or(Some(rest)))
    }

    /// Returns the member name if this is a member shape ID.
    pub fn member_name(&self) -> Option<&str> {
        self.value
            .split_once('#')
            .and_then(|(_, rest)| rest.split_once('$').map(|(_, member)| member))
    }

    /// Returns the ID of `member` within this shape.
    ///
    /// Any member already present on this ID is replaced.
    pub fn with_member(&self, member: &str) -> ShapeId {
        let root = self
            .as_str()
            .split_once('$')
            .map(|(root, _)| root)
            .unwrap_or(self.as_str());
        ShapeId::new(format!("{root}${member}"))
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<String> for ShapeId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for ShapeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// The ID of a trait, for example `jsonrpc#untaggedUnion`.
///
/// Traits are themselves shapes, so a trait ID is a shape ID that never
/// refers to a member. It is the key traits are registered and looked up
/// under, and the name written out when a trait is serialized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TraitId(ShapeId);

impl TraitId {
    /// Creates a new TraitId from a string without validating it.
    pub fn new(value: impl Into<String>) -> Self {
        Self(ShapeId::new(value))
    }

    /// Creates a TraitId from a static string. Usable in `const` and `static` items.
    ///
    /// # Examples
    /// ```
    /// use smithy_traits::TraitId;
    ///
    /// const REQUIRED: TraitId = TraitId::from_static("smithy.api#required");
    /// assert_eq!(REQUIRED.name(), Some("required"));
    /// ```
    pub const fn from_static(value: &'static str) -> Self {
        Self(ShapeId::from_static(value))
    }

    /// Parses and validates a TraitId. Member IDs are rejected.
    pub fn parse(value: impl Into<String>) -> Result<Self, InvalidShapeIdError> {
        let shape_id = ShapeId::parse(value)?;
        if shape_id.member_name().is_some() {
            return Err(InvalidShapeIdError {
                value: shape_id.as_str().to_string(),
                reason: "a trait ID cannot refer to a member",
            });
        }
        Ok(Self(shape_id))
    }

    /// Returns the string representation of this TraitId.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the namespace portion of the TraitId.
    pub fn namespace(&self) -> Option<&str> {
        self.0.namespace()
    }

    /// Returns the trait name, e.g. `untaggedUnion` for `jsonrpc#untaggedUnion`.
    pub fn name(&self) -> Option<&str> {
        self.0.shape_name()
    }

    /// Returns the ID of the trait shape.
    pub fn as_shape_id(&self) -> &ShapeId {
        &self.0
    }
}

impl fmt::Display for TraitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<String> for TraitId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for TraitId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<TraitId> for ShapeId {
    fn from(value: TraitId) -> Self {
        value.0
    }
}

/// Error returned when a string is not a valid shape or trait ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidShapeIdError {
    value: String,
    reason: &'static str,
}

impl InvalidShapeIdError {
    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for InvalidShapeIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid shape ID `{}`: {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidShapeIdError {}

fn validate(value: &str) -> Result<(), &'static str> {
    let (namespace, rest) = value
        .split_once('#')
        .ok_or("missing `#` between namespace and shape name")?;
    if !namespace.split('.').all(is_identifier) {
        return Err("namespace must be dot-separated identifiers");
    }
    let (name, member) = match rest.split_once('$') {
        Some((name, member)) => (name, Some(member)),
        None => (rest, None),
    };
    if !is_identifier(name) {
        return Err("shape name is not a valid identifier");
    }
    if let Some(member) = member {
        if !is_identifier(member) {
            return Err("member name is not a valid identifier");
        }
    }
    Ok(())
}

/// `identifier = (1*"_" (ALPHA / DIGIT) / ALPHA) *(ALPHA / DIGIT / "_")`
fn is_identifier(value: &str) -> bool {
    let trimmed = value.trim_start_matches('_');
    let mut chars = trimmed.chars();
    let first_ok = match chars.next() {
        Some(c) if trimmed.len() < value.len() => c.is_ascii_alphanumeric(),
        Some(c) => c.is_ascii_alphabetic(),
        None => false,
    };
    first_ok && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let shape_id = ShapeId::new("smithy.api#String");
        assert_eq!(shape_id.as_str(), "smithy.api#String");
    }

    #[test]
    fn test_namespace() {
        assert_eq!(
            ShapeId::new("smithy.api#String").namespace(),
            Some("smithy.api")
        );
        assert_eq!(
            ShapeId::new("com.example#MyStruct$member").namespace(),
            Some("com.example")
        );
        assert_eq!(ShapeId::new("NoNamespace").namespace(), None);
    }

    #[test]
    fn test_shape_name() {
        assert_eq!(
            ShapeId::new("com.example#MyStruct$member").shape_name(),
            Some("MyStruct")
        );
        assert_eq!(ShapeId::new("NoNamespace").shape_name(), None);
    }

    #[test]
    fn test_member_name() {
        assert_eq!(
            ShapeId::new("com.example#MyStruct$member").member_name(),
            Some("member")
        );
        assert_eq!(ShapeId::new("smithy.api#String").member_name(), None);
    }

    #[test]
    fn test_with_member() {
        let shape = ShapeId::new("com.example#MyUnion");
        assert_eq!(shape.with_member("a").as_str(), "com.example#MyUnion$a");
        assert_eq!(
            shape.with_member("a").with_member("b").as_str(),
            "com.example#MyUnion$b"
        );
    }

    #[test]
    fn static_and_owned_ids_are_equal() {
        const STATIC: ShapeId = ShapeId::from_static("smithy.api#String");
        let owned: ShapeId = String::from("smithy.api#String").into();
        assert_eq!(STATIC, owned);

        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let hash = |id: &ShapeId| {
            let mut hasher = DefaultHasher::new();
            id.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(hash(&STATIC), hash(&owned));
    }

    #[test]
    fn parse_valid_ids() {
        for id in [
            "smithy.api#String",
            "jsonrpc#untaggedUnion",
            "com.example#MyStruct$member",
            "a.b.c#_private1",
            "ns#Name_with_underscores$_1",
        ] {
            assert!(ShapeId::parse(id).is_ok(), "{id} should parse");
        }
    }

    #[test]
    fn parse_invalid_ids() {
        for id in [
            "",
            "NoNamespace",
            "#Name",
            "ns#",
            "ns..a#Name",
            "1ns#Name",
            "ns#Na-me",
            "ns#_",
            "ns#Name$",
            "ns#Name$mem$ber",
        ] {
            assert!(ShapeId::parse(id).is_err(), "{id} should not parse");
        }
    }

    #[test]
    fn trait_id_rejects_members() {
        let err = TraitId::parse("jsonrpc#untaggedUnion$member").unwrap_err();
        assert_eq!(err.value(), "jsonrpc#untaggedUnion$member");
        assert!(err.to_string().contains("member"));
        assert_eq!(
            TraitId::parse("jsonrpc#untaggedUnion").unwrap(),
            TraitId::from_static("jsonrpc#untaggedUnion")
        );
    }

    #[test]
    fn trait_id_accessors() {
        let id = TraitId::from_static("jsonrpc#untaggedUnion");
        assert_eq!(id.namespace(), Some("jsonrpc"));
        assert_eq!(id.name(), Some("untaggedUnion"));
        assert_eq!(id.to_string(), "jsonrpc#untaggedUnion");
        assert_eq!(
            ShapeId::from(id.clone()),
            ShapeId::new("jsonrpc#untaggedUnion")
        );
    }
}
