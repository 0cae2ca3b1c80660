// Path resolution against an alert event tree.
//
// `resolve` descends one segment per step; `resolve_join` collects the last
// segment from every element of the collection found at the leading ones.

use super::model::{AliasError, Path, JOIN_SEPARATOR};
use crate::core::model::Node;

/// Resolve a full path against `root`.
pub fn resolve<'a>(root: &'a Node, path: &Path) -> Result<&'a Node, AliasError> {
    resolve_segments(root, path.segments())
}

/// Resolve a slice of segments. An empty slice yields `node` itself.
pub fn resolve_segments<'a>(node: &'a Node, segments: &[String]) -> Result<&'a Node, AliasError> {
    let Some((head, rest)) = segments.split_first() else {
        return Ok(node);
    };
    let next = descend(node, head)?;
    resolve_segments(next, rest)
}

fn descend<'a>(node: &'a Node, segment: &str) -> Result<&'a Node, AliasError> {
    let not_accessible = || AliasError::FieldNotAccessible(segment.to_string());

    let child = match node {
        Node::Mapping(_) => node.get(segment),
        Node::Sequence(items) => parse_index(segment).and_then(|index| items.get(index)),
        Node::Scalar(_) => None,
    };

    match child {
        Some(child) if !child.is_null() => Ok(child),
        _ => Err(not_accessible()),
    }
}

/// Sequence index in canonical decimal form: digits only, no leading zeros.
fn parse_index(segment: &str) -> Option<usize> {
    let canonical = !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));
    if canonical {
        segment.parse().ok()
    } else {
        None
    }
}

/// Join the field named by the last segment across every element of the
/// collection located by the leading segments. Any element failing to
/// resolve aborts the whole join.
pub fn resolve_join(root: &Node, path: &Path) -> Result<String, AliasError> {
    let (parent, field) = path.split_last();

    let collection = resolve_segments(root, parent)?;
    let Node::Sequence(items) = collection else {
        let segment = parent.last().map(String::as_str).unwrap_or(field);
        return Err(AliasError::FieldNotAccessible(segment.to_string()));
    };

    let values = items
        .iter()
        .map(|item| descend(item, field).map(Node::to_text))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(values.join(JOIN_SEPARATOR))
}
