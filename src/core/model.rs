use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

pub type FieldName = String;

/// Leaf value of an alert event.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    String(String),
    Number(Number),
    Bool(bool),
    Null,
}

/// Generic tree the projection engine walks. Built once from the decoded
/// alert event and only ever read afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum Node {
    Mapping(Vec<(FieldName, Node)>),
    Sequence(Vec<Node>),
    Scalar(Scalar),
}

impl Node {
    pub fn string(s: impl Into<String>) -> Self {
        Self::Scalar(Scalar::String(s.into()))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Scalar(Scalar::Null))
    }

    /// Look up a mapping key. Later duplicates shadow earlier ones.
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Self::Mapping(entries) => entries
                .iter()
                .rev()
                .find(|(name, _)| name == key)
                .map(|(_, node)| node),
            _ => None,
        }
    }

    /// Text used when a value is concatenated into a joined string.
    pub fn to_text(&self) -> String {
        match self {
            Self::Scalar(Scalar::String(s)) => s.clone(),
            Self::Scalar(Scalar::Number(n)) => n.to_string(),
            Self::Scalar(Scalar::Bool(b)) => b.to_string(),
            Self::Scalar(Scalar::Null) => String::new(),
            Self::Mapping(_) | Self::Sequence(_) => Value::from(self.clone()).to_string(),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => {
                Self::Mapping(map.into_iter().map(|(k, v)| (k, Node::from(v))).collect())
            }
            Value::Array(items) => Self::Sequence(items.into_iter().map(Node::from).collect()),
            Value::String(s) => Self::Scalar(Scalar::String(s)),
            Value::Number(n) => Self::Scalar(Scalar::Number(n)),
            Value::Bool(b) => Self::Scalar(Scalar::Bool(b)),
            Value::Null => Self::Scalar(Scalar::Null),
        }
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        match node {
            Node::Mapping(entries) => {
                Value::Object(entries.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
            Node::Sequence(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Node::Scalar(Scalar::String(s)) => Value::String(s),
            Node::Scalar(Scalar::Number(n)) => Value::Number(n),
            Node::Scalar(Scalar::Bool(b)) => Value::Bool(b),
            Node::Scalar(Scalar::Null) => Value::Null,
        }
    }
}
