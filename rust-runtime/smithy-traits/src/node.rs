/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;

/// A number held by a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Unsigned 64-bit integer value.
    PosInt(u64),
    /// Signed 64-bit integer value. Only used for negative values.
    NegInt(i64),
    /// 64-bit floating-point value.
    Float(f64),
}

/// Trait metadata as it appears in a model document.
///
/// Nodes are protocol-agnostic open content that is accessed like JSON data.
/// A trait application in a model carries one node; each trait factory decides
/// which nodes it accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// JSON object
    Object(HashMap<String, Node>),
    /// JSON array
    Array(Vec<Node>),
    /// JSON number
    Number(Number),
    /// JSON string
    String(String),
    /// JSON boolean
    Bool(bool),
    /// JSON null
    Null,
}

impl Node {
    /// Returns the empty object node `{}`, the value of every annotation trait.
    pub fn empty_object() -> Self {
        Node::Object(HashMap::new())
    }

    /// Returns true if this node is `{}`.
    pub fn is_empty_object(&self) -> bool {
        matches!(self, Node::Object(members) if members.is_empty())
    }

    /// Returns the members of an object node.
    pub fn as_object(&self) -> Option<&HashMap<String, Node>> {
        match self {
            Node::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Returns the value of a string node.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the name of this node's type, for use in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Object(_) => "object",
            Node::Array(_) => "array",
            Node::Number(_) => "number",
            Node::String(_) => "string",
            Node::Bool(_) => "boolean",
            Node::Null => "null",
        }
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Bool(value)
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::String(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::String(value.to_string())
    }
}

impl From<Vec<Node>> for Node {
    fn from(values: Vec<Node>) -> Self {
        Node::Array(values)
    }
}

impl From<HashMap<String, Node>> for Node {
    fn from(values: HashMap<String, Node>) -> Self {
        Node::Object(values)
    }
}

impl From<u64> for Node {
    fn from(value: u64) -> Self {
        Node::Number(Number::PosInt(value))
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        if value < 0 {
            Node::Number(Number::NegInt(value))
        } else {
            Node::Number(Number::PosInt(value as u64))
        }
    }
}

impl From<i32> for Node {
    fn from(value: i32) -> Self {
        Node::from(value as i64)
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::Number(Number::Float(value))
    }
}

#[cfg(feature = "json-ast")]
impl From<serde_json::Value> for Node {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Node::Null,
            Value::Bool(value) => Node::Bool(value),
            Value::Number(number) => {
                if let Some(value) = number.as_u64() {
                    Node::Number(Number::PosInt(value))
                } else if let Some(value) = number.as_i64() {
                    Node::Number(Number::NegInt(value))
                } else {
                    // serde_json numbers are always representable as f64 without arbitrary_precision
                    Node::Number(Number::Float(number.as_f64().unwrap_or(f64::NAN)))
                }
            }
            Value::String(value) => Node::String(value),
            Value::Array(values) => Node::Array(values.into_iter().map(Node::from).collect()),
            Value::Object(members) => Node::Object(
                members
                    .into_iter()
                    .map(|(key, value)| (key, Node::from(value)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Node, Number};
    use std::collections::HashMap;

    #[test]
    fn empty_object() {
        assert!(Node::empty_object().is_empty_object());
        let mut members = HashMap::new();
        members.insert("x".to_string(), Node::from(1));
        assert!(!Node::from(members).is_empty_object());
        assert!(!Node::Array(vec![]).is_empty_object());
        assert!(!Node::Null.is_empty_object());
    }

    #[test]
    fn integers_keep_their_sign() {
        assert_eq!(Node::from(5i64), Node::Number(Number::PosInt(5)));
        assert_eq!(Node::from(-5), Node::Number(Number::NegInt(-5)));
    }

    #[test]
    fn type_names() {
        assert_eq!(Node::empty_object().type_name(), "object");
        assert_eq!(Node::from("a").type_name(), "string");
        assert_eq!(Node::from(true).type_name(), "boolean");
        assert_eq!(Node::Null.type_name(), "null");
        assert_eq!(Node::from(vec![Node::Null]).type_name(), "array");
        assert_eq!(Node::from(0.5).type_name(), "number");
    }

    #[test]
    #[cfg(feature = "json-ast")]
    fn from_json() {
        let node = Node::from(serde_json::json!({
            "name": "value",
            "pos": 1,
            "neg": -1,
            "float": 0.5,
            "list": [true, null]
        }));
        let members = node.as_object().unwrap();
        assert_eq!(members["name"].as_str(), Some("value"));
        assert_eq!(members["pos"], Node::Number(Number::PosInt(1)));
        assert_eq!(members["neg"], Node::Number(Number::NegInt(-1)));
        assert_eq!(members["float"], Node::Number(Number::Float(0.5)));
        assert_eq!(
            members["list"],
            Node::Array(vec![Node::Bool(true), Node::Null])
        );
    }
}
