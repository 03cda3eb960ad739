//! Raw sidebar rows and their normalization into typed records.
//!
//! Rows arrive as column-name → value maps straight from the database join.
//! The source schema has drifted over time (`node_txt` vs `node.txt`,
//! snake_case vs camelCase) and encodes missing parents and notes as empty
//! strings or the literal text `"None"`. [`normalize_row`] resolves all of
//! that once, so nothing downstream ever looks at a sentinel again.

use crate::{NotesiteError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The literal text some writers stored in place of a NULL identifier.
const NONE_SENTINEL: &str = "None";

/// One joined sidebar row as fetched, keyed by source column name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRow(Map<String, Value>);

impl RawRow {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly useful in tests and fixtures.
    #[must_use]
    pub fn with(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.insert(column, value);
        self
    }

    /// Sets `column` to `value`, replacing any previous value.
    pub fn insert(&mut self, column: &str, value: impl Into<Value>) {
        self.0.insert(column.to_string(), value.into());
    }

    /// Returns the value stored under the exact column name.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }
}

impl From<Map<String, Value>> for RawRow {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// A sidebar row after canonicalization.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRow {
    pub id: String,
    pub folder_id: String,
    pub node_text: Option<String>,
    pub parent_id: Option<String>,
    pub note_id: Option<String>,
    /// Route segment with surrounding slashes removed, e.g. `costs`.
    pub link_text: String,
    pub sort_key: f64,
    /// Title of the owning folder, carried by the join.
    pub title: Option<String>,
}

impl NormalizedRow {
    /// True when the row has no parent within its folder.
    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }

    /// The page link for this row, present only when it points at a note.
    pub fn link(&self) -> Option<String> {
        self.note_id
            .as_deref()
            .map(|note_id| note_link(&self.link_text, note_id))
    }
}

/// Canonical fields of a sidebar row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Id,
    FolderId,
    NodeText,
    ParentId,
    NoteId,
    LinkText,
    Sort,
    Title,
}

impl Field {
    fn canonical(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::FolderId => "folderId",
            Field::NodeText => "nodeText",
            Field::ParentId => "parentId",
            Field::NoteId => "noteId",
            Field::LinkText => "linkText",
            Field::Sort => "sortKey",
            Field::Title => "title",
        }
    }

    /// Source column names accepted for this field, in lookup order.
    fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::Id => &["id"],
            Field::FolderId => &["folder_id", "folderId"],
            Field::NodeText => &["node_txt", "node.txt", "nodeTxt"],
            Field::ParentId => &["parent_id", "parentId"],
            Field::NoteId => &["note_id", "noteId"],
            Field::LinkText => &["link_txt", "linkTxt"],
            Field::Sort => &["sort"],
            Field::Title => &["title"],
        }
    }

    /// First non-null value among the aliases.
    fn resolve(self, raw: &RawRow) -> Option<&Value> {
        self.aliases()
            .iter()
            .filter_map(|alias| raw.get(alias))
            .find(|value| !value.is_null())
    }
}

/// Normalizes one raw row; `index` is only used for error reporting.
///
/// # Errors
///
/// Returns [`NotesiteError::MalformedRow`] if `id`, `folderId` or `linkText`
/// is absent or null. Every other irregularity is normalized silently.
pub fn normalize_row(index: usize, raw: &RawRow) -> Result<NormalizedRow> {
    let required = |field: Field| {
        Field::resolve(field, raw)
            .and_then(canonical_string)
            .ok_or(NotesiteError::MalformedRow {
                index,
                field: field.canonical(),
            })
    };

    let id = required(Field::Id)?;
    let folder_id = required(Field::FolderId)?;
    let link_text = route_segment(&required(Field::LinkText)?);

    Ok(NormalizedRow {
        id,
        folder_id,
        node_text: Field::NodeText.resolve(raw).and_then(canonical_string),
        parent_id: normalize_optional_id(Field::ParentId.resolve(raw).and_then(canonical_string)),
        note_id: normalize_optional_id(Field::NoteId.resolve(raw).and_then(canonical_string)),
        link_text,
        sort_key: sort_key(Field::Sort.resolve(raw)),
        title: Field::Title.resolve(raw).and_then(canonical_string),
    })
}

/// Normalizes every row in order, stopping at the first malformed one.
pub fn normalize_rows(rows: &[RawRow]) -> Result<Vec<NormalizedRow>> {
    rows.iter()
        .enumerate()
        .map(|(index, raw)| normalize_row(index, raw))
        .collect()
}

/// Maps the empty string and the `"None"` sentinel to a true `None`.
///
/// This is the only place in the crate that knows about sentinel values.
pub fn normalize_optional_id(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty() && s != NONE_SENTINEL)
}

/// Strips surrounding slashes from a route prefix label: `/costs/` → `costs`.
pub fn route_segment(link_text: &str) -> String {
    link_text.trim_matches('/').to_string()
}

/// The NavTree key for a route segment: `costs` → `/costs/`.
pub fn route_key(segment: &str) -> String {
    format!("/{segment}/")
}

pub(crate) fn note_link(segment: &str, note_id: &str) -> String {
    format!("/{segment}/{note_id}")
}

fn canonical_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn sort_key(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).unwrap_or(0.0)
}
