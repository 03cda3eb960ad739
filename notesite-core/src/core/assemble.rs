//! Two-level tree assembly for a single folder.
//!
//! Navigation is an outline of top-level nodes and their direct children.
//! The `note_tree` table can express deeper chains, but anything below the
//! second tier is left out of the outline. Every row left out is reported
//! through `log::warn!` and recorded in an [`AssemblyReport`].

use crate::core::nav::NavNode;
use crate::core::partition::FolderRows;
use crate::core::row::NormalizedRow;
use std::collections::HashSet;

/// Rows and folders the assembler could not place in the outline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssemblyReport {
    /// Ids of rows that were not attached anywhere.
    pub dropped_rows: Vec<String>,
    /// Folders with tree-node rows but no top-level row; they get no group.
    pub headless_folders: Vec<String>,
}

impl AssemblyReport {
    pub fn is_clean(&self) -> bool {
        self.dropped_rows.is_empty() && self.headless_folders.is_empty()
    }
}

/// The outline of one folder, ready to become a top-level group.
#[derive(Debug, Clone, PartialEq)]
pub struct FolderTree {
    pub folder_id: String,
    /// Folder title carried on the first top-level row.
    pub title: Option<String>,
    pub items: Vec<NavNode>,
}

/// Builds the outline for one folder's rows.
///
/// Returns `None` when the folder has no top-level row.
pub fn assemble_folder(folder: &FolderRows, report: &mut AssemblyReport) -> Option<FolderTree> {
    let mut top: Vec<&NormalizedRow> = folder.rows.iter().filter(|r| r.is_top_level()).collect();
    sort_stable(&mut top);

    report_unplaced(folder, &top, report);

    if top.is_empty() {
        log::warn!(
            "folder {} has {} tree node(s) but none at the top level; it is left out of the sidebar",
            folder.folder_id,
            folder.rows.len()
        );
        report.headless_folders.push(folder.folder_id.clone());
        return None;
    }

    let items = top
        .iter()
        .map(|node| {
            let mut children: Vec<&NormalizedRow> = folder
                .rows
                .iter()
                .filter(|r| r.parent_id.as_deref() == Some(node.id.as_str()))
                .collect();
            sort_stable(&mut children);

            if children.is_empty() {
                NavNode::leaf(node)
            } else {
                NavNode::branch(node, children.into_iter().map(NavNode::leaf).collect())
            }
        })
        .collect();

    Some(FolderTree {
        folder_id: folder.folder_id.clone(),
        title: top[0].title.clone(),
        items,
    })
}

/// Ascending by sort key; equal keys keep input order.
fn sort_stable(rows: &mut [&NormalizedRow]) {
    rows.sort_by(|a, b| a.sort_key.total_cmp(&b.sort_key));
}

/// Logs and records child rows whose parent is not a top-level row.
fn report_unplaced(folder: &FolderRows, top: &[&NormalizedRow], report: &mut AssemblyReport) {
    let top_ids: HashSet<&str> = top.iter().map(|r| r.id.as_str()).collect();
    let all_ids: HashSet<&str> = folder.rows.iter().map(|r| r.id.as_str()).collect();

    for row in &folder.rows {
        let Some(parent) = row.parent_id.as_deref() else {
            continue;
        };
        if top_ids.contains(parent) {
            continue;
        }
        if all_ids.contains(parent) {
            log::warn!(
                "tree node {} in folder {} is nested below child {}; only two levels are shown",
                row.id,
                folder.folder_id,
                parent
            );
        } else {
            log::warn!(
                "tree node {} in folder {} points at missing parent {}",
                row.id,
                folder.folder_id,
                parent
            );
        }
        report.dropped_rows.push(row.id.clone());
    }
}
