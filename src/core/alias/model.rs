// Alias engine types: parsed directives, the projected output and errors.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::model::Node;

/// Separator between path segments in a "from" expression.
pub const SEGMENT_SEPARATOR: &str = "->";

/// Separator placed between values produced by a join.
pub const JOIN_SEPARATOR: &str = ", ";

/// The only keyword with defined semantics.
pub const JOIN_KEYWORD: &str = "join";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AliasError {
    #[error("invalid alias syntax: '{0}'")]
    InvalidAliasSyntax(String),

    #[error("field not accessible: '{0}'")]
    FieldNotAccessible(String),
}

/// How tokens carrying a keyword other than `join` are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordPolicy {
    /// Fail tokenization with `InvalidAliasSyntax`
    #[default]
    Reject,
    /// Ignore the keyword and resolve the path directly
    Fallback,
}

/// Non-empty sequence of segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// Split a raw "from" expression on `->`. Returns `None` if any segment
    /// would be empty.
    pub fn parse(raw: &str) -> Option<Self> {
        let segments: Vec<String> = raw.split(SEGMENT_SEPARATOR).map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return None;
        }
        Some(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Leading segments and the final one.
    pub fn split_last(&self) -> (&[String], &str) {
        match self.segments.split_last() {
            Some((last, parent)) => (parent, last.as_str()),
            None => (&[], ""),
        }
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.segments.join(SEGMENT_SEPARATOR))
    }
}

/// One parsed `keyword? path as alias` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasToken {
    pub keyword: Option<String>,
    pub path: Path,
    pub alias: String,
}

impl AliasToken {
    pub fn is_join(&self) -> bool {
        self.keyword.as_deref() == Some(JOIN_KEYWORD)
    }
}

pub type AliasSet = Vec<AliasToken>;

/// Flat alias -> value mapping handed to the template renderer.
///
/// Aliases keep the position of their first insertion; a later insert under
/// the same alias replaces the value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectedObject {
    entries: Vec<(String, Node)>,
}

impl ProjectedObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, alias: String, value: Node) {
        match self.entries.iter_mut().find(|(name, _)| *name == alias) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((alias, value)),
        }
    }

    pub fn get(&self, alias: &str) -> Option<&Node> {
        self.entries
            .iter()
            .find(|(name, _)| name == alias)
            .map(|(_, node)| node)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .iter()
            .map(|(name, node)| (name.to_string(), Value::from(node.clone())))
            .collect();
        Value::Object(map)
    }
}

impl Serialize for ProjectedObject {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}
