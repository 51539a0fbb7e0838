/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Reads the trait applications out of a Smithy JSON AST document.
//!
//! Only `shapes.*.traits` and `shapes.*.members.*.traits` are interpreted.
//! Everything else in the document is ignored.

use crate::{InvalidShapeIdError, Node, ShapeId, TraitId, TraitLoader};
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug)]
enum JsonAstErrorKind {
    ExpectedObject(&'static str),
    InvalidShapeId(InvalidShapeIdError),
}

/// The document is not a structurally valid Smithy JSON AST.
#[derive(Debug)]
pub struct JsonAstError {
    kind: JsonAstErrorKind,
    path: String,
}

impl JsonAstError {
    fn expected_object(path: impl Into<String>, found: &'static str) -> Self {
        Self {
            kind: JsonAstErrorKind::ExpectedObject(found),
            path: path.into(),
        }
    }

    fn invalid_shape_id(path: impl Into<String>, source: InvalidShapeIdError) -> Self {
        Self {
            kind: JsonAstErrorKind::InvalidShapeId(source),
            path: path.into(),
        }
    }

    /// The JSON path of the offending value, e.g. `shapes.com.example#Foo.traits`.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for JsonAstError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            JsonAstErrorKind::ExpectedObject(found) => {
                write!(f, "expected an object at `{}`, found {found}", self.path)
            }
            JsonAstErrorKind::InvalidShapeId(_) => write!(f, "invalid shape ID at `{}`", self.path),
        }
    }
}

impl std::error::Error for JsonAstError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            JsonAstErrorKind::ExpectedObject(_) => None,
            JsonAstErrorKind::InvalidShapeId(source) => Some(source),
        }
    }
}

/// Applies every trait in the JSON AST `document` through `loader`.
///
/// The whole document is checked before any trait is applied, so a structural
/// problem is returned with the loader left untouched. Problems with the traits
/// themselves are recorded by the loader and reported when it finishes.
pub fn load_traits(loader: &mut TraitLoader, document: &Value) -> Result<(), JsonAstError> {
    for (shape_id, trait_id, value) in collect_applications(document)? {
        loader.apply(shape_id, &trait_id, &Node::from(value.clone()));
    }
    Ok(())
}

type Application<'a> = (ShapeId, TraitId, &'a Value);

fn collect_applications(document: &Value) -> Result<Vec<Application<'_>>, JsonAstError> {
    let mut applications = Vec::new();
    let root = expect_object(document, "$")?;
    let shapes = match root.get("shapes") {
        Some(shapes) => expect_object(shapes, "shapes")?,
        None => return Ok(applications),
    };
    for (name, shape) in shapes {
        let path = format!("shapes.{name}");
        let shape_id =
            ShapeId::parse(name.as_str()).map_err(|err| JsonAstError::invalid_shape_id(&path, err))?;
        let shape = expect_object(shape, &path)?;
        collect_traits(&mut applications, &shape_id, shape, &path)?;

        if let Some(members) = shape.get("members") {
            let members_path = format!("{path}.members");
            for (member_name, member) in expect_object(members, &members_path)? {
                let member_path = format!("{members_path}.{member_name}");
                let member_id = ShapeId::parse(shape_id.with_member(member_name).as_str())
                    .map_err(|err| JsonAstError::invalid_shape_id(&member_path, err))?;
                let member = expect_object(member, &member_path)?;
                collect_traits(&mut applications, &member_id, member, &member_path)?;
            }
        }
    }
    Ok(applications)
}

fn collect_traits<'a>(
    applications: &mut Vec<Application<'a>>,
    shape_id: &ShapeId,
    shape: &'a Map<String, Value>,
    path: &str,
) -> Result<(), JsonAstError> {
    let Some(traits) = shape.get("traits") else {
        return Ok(());
    };
    let traits_path = format!("{path}.traits");
    for (name, value) in expect_object(traits, &traits_path)? {
        let trait_id = TraitId::parse(name.as_str())
            .map_err(|err| JsonAstError::invalid_shape_id(format!("{traits_path}.{name}"), err))?;
        applications.push((shape_id.clone(), trait_id, value));
    }
    Ok(())
}

fn expect_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, JsonAstError> {
    value
        .as_object()
        .ok_or_else(|| JsonAstError::expected_object(path, json_type_name(value)))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
