//! Folder records and the home-page action list derived from them.

use crate::core::row::{normalize_optional_id, route_segment};
use serde::{Deserialize, Serialize};

/// A folder as stored in `note_folder`, normalized on construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderRecord {
    pub id: String,
    pub title: String,
    pub parent_id: Option<String>,
    /// Route segment with surrounding slashes removed.
    pub link_text: String,
}

impl FolderRecord {
    /// Builds a record, normalizing the parent sentinel and the route label.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        parent_id: Option<String>,
        link_text: &str,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            parent_id: normalize_optional_id(parent_id),
            link_text: route_segment(link_text),
        }
    }
}

/// One entry of the site's home-page action list.
///
/// Serialized as `{ id, title, parentId, link }`; `link` is the folder's
/// route segment, which the site turns into a hero action button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeAction {
    pub id: String,
    pub title: String,
    pub parent_id: Option<String>,
    pub link: String,
}

/// Lists every folder as a home action, in the order given.
pub fn home_actions(folders: &[FolderRecord]) -> Vec<HomeAction> {
    folders
        .iter()
        .map(|folder| HomeAction {
            id: folder.id.clone(),
            title: folder.title.clone(),
            parent_id: folder.parent_id.clone(),
            link: folder.link_text.clone(),
        })
        .collect()
}
