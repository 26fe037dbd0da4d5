//! Draft Value Tree
//!
//! Tagged values addressed by dotted paths (`client.fullName`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Children of a map node, ordered by key
pub type FieldMap = BTreeMap<String, DraftValue>;

/// Metadata captured from a file input. File contents are never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileMeta {
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub mime: String,
    #[serde(rename = "capturedAt")]
    pub captured_at: String,
}

/// A node in the draft tree.
///
/// Serialized untagged so the persisted record is a plain JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DraftValue {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
    Files(Vec<FileMeta>),
    Map(FieldMap),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("empty path")]
    Empty,
    #[error("path `{path}` contains an empty segment")]
    EmptySegment { path: String },
    #[error("`{key}` is reserved for wizard bookkeeping")]
    Reserved { key: String },
    #[error("cannot write `{path}`: `{segment}` holds a value, not a group")]
    TypeConflict { path: String, segment: String },
}

impl DraftValue {
    /// Convert arbitrary JSON, dropping leaves the tree cannot represent
    /// (null, arrays that are not file metadata).
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(b) => Some(Self::Bool(b)),
            Value::Number(n) => Some(Self::Number(n)),
            Value::String(s) => Some(Self::Text(s)),
            Value::Array(items) => serde_json::from_value::<Vec<FileMeta>>(Value::Array(items))
                .ok()
                .map(Self::Files),
            Value::Object(entries) => Some(Self::Map(map_from_json(entries))),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Human-readable rendering for read-only views
    pub fn display_text(&self) -> String {
        match self {
            Self::Bool(true) => "Yes".to_string(),
            Self::Bool(false) => "No".to_string(),
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
            Self::Files(files) => files
                .iter()
                .map(|f| f.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            Self::Map(map) => format!("{} fields", map.len()),
        }
    }
}

impl From<&str> for DraftValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DraftValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for DraftValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<FileMeta>> for DraftValue {
    fn from(value: Vec<FileMeta>) -> Self {
        Self::Files(value)
    }
}

pub(crate) fn map_from_json(entries: serde_json::Map<String, Value>) -> FieldMap {
    entries
        .into_iter()
        .filter_map(|(key, value)| DraftValue::from_json(value).map(|v| (key, v)))
        .collect()
}

fn split_path(path: &str) -> Result<Vec<&str>, PathError> {
    if path.is_empty() {
        return Err(PathError::Empty);
    }
    let segments: Vec<&str> = path.split('.').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(PathError::EmptySegment { path: path.to_string() });
    }
    Ok(segments)
}

/// Read the value at `path`. Missing segments and traversal through a
/// leaf both yield `None`.
pub fn get_at_path<'a>(root: &'a FieldMap, path: &str) -> Option<&'a DraftValue> {
    let mut segments = path.split('.');
    let mut current = root.get(segments.next()?)?;
    for segment in segments {
        match current {
            DraftValue::Map(children) => current = children.get(segment)?,
            _ => return None,
        }
    }
    Some(current)
}

/// Write `value` at `path`, creating missing groups on the way.
///
/// An existing non-map value in an intermediate position is an error; it is
/// never replaced. The terminal segment is overwritten whatever it held.
pub fn set_at_path(root: &mut FieldMap, path: &str, value: DraftValue) -> Result<(), PathError> {
    let segments = split_path(path)?;
    let Some((last, parents)) = segments.split_last() else {
        return Err(PathError::Empty);
    };

    let mut current = root;
    for (depth, segment) in parents.iter().enumerate() {
        let slot = current
            .entry((*segment).to_string())
            .or_insert_with(|| DraftValue::Map(FieldMap::new()));
        current = match slot {
            DraftValue::Map(children) => children,
            _ => {
                return Err(PathError::TypeConflict {
                    path: path.to_string(),
                    segment: segments[..=depth].join("."),
                })
            }
        };
    }
    current.insert((*last).to_string(), value);
    Ok(())
}

/// Append recognized text to the value at `path`, separated by a blank
/// line. Absent or blank targets are replaced.
pub fn append_text_at_path(root: &mut FieldMap, path: &str, text: &str) -> Result<(), PathError> {
    let merged = match get_at_path(root, path) {
        None => text.to_string(),
        Some(DraftValue::Text(existing)) if existing.trim().is_empty() => text.to_string(),
        Some(DraftValue::Text(existing)) => format!("{existing}\n\n{text}"),
        Some(_) => {
            return Err(PathError::TypeConflict {
                path: path.to_string(),
                segment: path.to_string(),
            })
        }
    };
    set_at_path(root, path, DraftValue::Text(merged))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_then_get() {
        let mut root = FieldMap::new();
        set_at_path(&mut root, "client.fullName", "Asha Singh".into()).unwrap();
        set_at_path(&mut root, "services.will", true.into()).unwrap();

        assert_eq!(
            get_at_path(&root, "client.fullName"),
            Some(&DraftValue::Text("Asha Singh".to_string()))
        );
        assert_eq!(get_at_path(&root, "services.will"), Some(&DraftValue::Bool(true)));
    }

    #[test]
    fn test_set_creates_intermediate_groups() {
        let mut root = FieldMap::new();
        set_at_path(&mut root, "a.b.c", "deep".into()).unwrap();

        assert!(matches!(get_at_path(&root, "a"), Some(DraftValue::Map(_))));
        assert!(matches!(get_at_path(&root, "a.b"), Some(DraftValue::Map(_))));
        assert_eq!(get_at_path(&root, "a.b.c").and_then(DraftValue::as_text), Some("deep"));
    }

    #[test]
    fn test_terminal_overwrite_ignores_prior_type() {
        let mut root = FieldMap::new();
        set_at_path(&mut root, "client.name", "x".into()).unwrap();
        set_at_path(&mut root, "client", true.into()).unwrap();
        assert_eq!(get_at_path(&root, "client"), Some(&DraftValue::Bool(true)));
    }

    #[test]
    fn test_intermediate_leaf_is_type_conflict() {
        let mut root = FieldMap::new();
        set_at_path(&mut root, "client", "not a group".into()).unwrap();

        let err = set_at_path(&mut root, "client.fullName", "Asha".into()).unwrap_err();
        assert_eq!(
            err,
            PathError::TypeConflict {
                path: "client.fullName".to_string(),
                segment: "client".to_string(),
            }
        );
        // Untouched
        assert_eq!(get_at_path(&root, "client").and_then(DraftValue::as_text), Some("not a group"));
    }

    #[test]
    fn test_get_missing_or_through_leaf() {
        let mut root = FieldMap::new();
        set_at_path(&mut root, "client.email", "a@x.com".into()).unwrap();

        assert_eq!(get_at_path(&root, "family.beneficiaries"), None);
        assert_eq!(get_at_path(&root, "client.email.domain"), None);
        assert_eq!(get_at_path(&root, ""), None);
    }

    #[test]
    fn test_invalid_paths_rejected() {
        let mut root = FieldMap::new();
        assert_eq!(set_at_path(&mut root, "", true.into()), Err(PathError::Empty));
        assert!(matches!(
            set_at_path(&mut root, "client..name", true.into()),
            Err(PathError::EmptySegment { .. })
        ));
        assert!(root.is_empty());
    }

    #[test]
    fn test_append_text() {
        let mut root = FieldMap::new();
        append_text_at_path(&mut root, "uploads.notes", "first").unwrap();
        append_text_at_path(&mut root, "uploads.notes", "second").unwrap();
        assert_eq!(
            get_at_path(&root, "uploads.notes").and_then(DraftValue::as_text),
            Some("first\n\nsecond")
        );

        set_at_path(&mut root, "digital.wallets", "  ".into()).unwrap();
        append_text_at_path(&mut root, "digital.wallets", "ledger").unwrap();
        assert_eq!(get_at_path(&root, "digital.wallets").and_then(DraftValue::as_text), Some("ledger"));
    }

    #[test]
    fn test_append_to_non_text_fails() {
        let mut root = FieldMap::new();
        set_at_path(&mut root, "uploads.consent", true.into()).unwrap();
        assert!(append_text_at_path(&mut root, "uploads.consent", "text").is_err());
    }

    #[test]
    fn test_from_json_drops_unrepresentable() {
        let value = json!({
            "name": "Asha",
            "age": 41,
            "spouse": null,
            "tags": ["a", "b"],
            "files": [{"name": "will.pdf", "size": 10, "type": "application/pdf", "capturedAt": "2024-01-01T00:00:00Z"}],
        });
        let Some(DraftValue::Map(map)) = DraftValue::from_json(value) else {
            panic!("expected map");
        };
        assert!(map.contains_key("name"));
        assert!(map.contains_key("age"));
        assert!(!map.contains_key("spouse"));
        assert!(!map.contains_key("tags"));
        assert!(matches!(map.get("files"), Some(DraftValue::Files(f)) if f.len() == 1));
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;
        use crate::draft::strategies::{arb_field_map, arb_path, arb_value};

        proptest! {
            #[test]
            fn set_then_get_on_fresh_root(path in arb_path(), value in arb_value()) {
                let mut root = FieldMap::new();
                set_at_path(&mut root, &path, value.clone()).unwrap();
                prop_assert_eq!(get_at_path(&root, &path), Some(&value));
            }

            #[test]
            fn set_reads_back_or_leaves_tree_alone(
                mut root in arb_field_map(),
                path in arb_path(),
                value in arb_value(),
            ) {
                let before = root.clone();
                match set_at_path(&mut root, &path, value.clone()) {
                    Ok(()) => prop_assert_eq!(get_at_path(&root, &path), Some(&value)),
                    Err(PathError::TypeConflict { .. }) => prop_assert_eq!(root, before),
                    Err(other) => prop_assert!(false, "unexpected error {other}"),
                }
            }
        }
    }
}
