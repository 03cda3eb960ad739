//! Navigation tree types consumed by the documentation-site renderer.
//!
//! The JSON field names are part of the site's contract and must not change:
//!
//! ```text
//! { id, sort, text, link_txt, folderId, parent_id, noteId, link?, collapsed?, items? }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use notesite_core::NavTree;
//!
//! let mut tree = NavTree::default();
//! tree.push_group("designs", "F2".to_string(), Some("Designs".to_string()), Vec::new());
//! let json = serde_json::to_value(&tree).unwrap();
//! assert_eq!(json["/designs/"][0]["id"], "F2");
//! assert_eq!(json["/designs/"][0]["items"], serde_json::json!([]));
//! ```

use crate::core::row::{route_key, NormalizedRow};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One entry of the navigation outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavNode {
    pub id: String,
    pub sort: f64,
    pub text: Option<String>,
    #[serde(rename = "link_txt")]
    pub link_text: String,
    #[serde(rename = "folderId")]
    pub folder_id: String,
    pub parent_id: Option<String>,
    #[serde(rename = "noteId")]
    pub note_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<NavNode>>,
}

impl NavNode {
    /// A node without children, built from its row.
    pub fn leaf(row: &NormalizedRow) -> Self {
        Self {
            id: row.id.clone(),
            sort: row.sort_key,
            text: row.node_text.clone(),
            link_text: row.link_text.clone(),
            folder_id: row.folder_id.clone(),
            parent_id: row.parent_id.clone(),
            note_id: row.note_id.clone(),
            link: row.link(),
            collapsed: None,
            items: None,
        }
    }

    /// A node carrying its direct children; expanded by default.
    pub fn branch(row: &NormalizedRow, children: Vec<NavNode>) -> Self {
        Self {
            collapsed: Some(false),
            items: Some(children),
            ..Self::leaf(row)
        }
    }

    /// The top-level entry representing one folder under a route.
    pub fn group(
        folder_id: String,
        title: Option<String>,
        link_text: &str,
        sort: f64,
        items: Vec<NavNode>,
    ) -> Self {
        Self {
            id: folder_id.clone(),
            sort,
            text: title,
            link_text: link_text.to_string(),
            folder_id,
            parent_id: None,
            note_id: None,
            link: None,
            collapsed: None,
            items: Some(items),
        }
    }

    /// Direct children, or an empty slice for leaves.
    pub fn children(&self) -> &[NavNode] {
        self.items.as_deref().unwrap_or(&[])
    }
}

/// Route key (`/costs/`) → ordered folder groups.
///
/// Keys iterate and serialize in ascending order, so the same input always
/// produces byte-identical JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavTree(BTreeMap<String, Vec<NavNode>>);

impl NavTree {
    /// Appends a folder group under `segment`'s route key.
    ///
    /// The group's `sort` is the length of that route's list before the push,
    /// so groups number themselves in arrival order.
    pub fn push_group(
        &mut self,
        segment: &str,
        folder_id: String,
        title: Option<String>,
        items: Vec<NavNode>,
    ) {
        let groups = self.0.entry(route_key(segment)).or_default();
        let sort = groups.len() as f64;
        groups.push(NavNode::group(folder_id, title, segment, sort, items));
    }

    /// Groups under a route key such as `/costs/`.
    pub fn get(&self, key: &str) -> Option<&[NavNode]> {
        self.0.get(key).map(Vec::as_slice)
    }

    /// Iterates over `(route key, groups)` in key order.
    pub fn routes(&self) -> impl Iterator<Item = (&str, &[NavNode])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of folder groups across all routes.
    pub fn group_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}
