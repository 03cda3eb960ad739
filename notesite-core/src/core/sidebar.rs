//! Sidebar construction: from a fetched snapshot to the route-keyed tree.

use crate::core::assemble::{assemble_folder, AssemblyReport};
use crate::core::folder::FolderRecord;
use crate::core::nav::NavTree;
use crate::core::orphan::append_orphan_folders;
use crate::core::partition::partition;
use crate::core::row::{normalize_rows, RawRow};
use crate::Result;
use std::collections::HashSet;

/// Everything the sidebar builder needs, fetched up front in one read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SidebarSnapshot {
    /// Joined tree-node rows, ordered by folder id.
    pub rows: Vec<RawRow>,
    /// Every folder, including those without tree nodes.
    pub folders: Vec<FolderRecord>,
}

/// Builds the navigation tree for `snapshot`.
///
/// # Errors
///
/// Returns [`crate::NotesiteError::MalformedRow`] if any row lacks `id`,
/// `folderId` or `linkText`; no partial tree is returned.
pub fn build_sidebar(snapshot: &SidebarSnapshot) -> Result<NavTree> {
    build_sidebar_with_report(snapshot).map(|(tree, _)| tree)
}

/// Like [`build_sidebar`], also returning what was left out of the tree.
pub fn build_sidebar_with_report(snapshot: &SidebarSnapshot) -> Result<(NavTree, AssemblyReport)> {
    let rows = normalize_rows(&snapshot.rows)?;
    let seen: HashSet<String> = rows.iter().map(|r| r.folder_id.clone()).collect();

    let mut tree = NavTree::default();
    let mut report = AssemblyReport::default();

    for route in partition(rows) {
        for folder in &route.folders {
            if let Some(outline) = assemble_folder(folder, &mut report) {
                tree.push_group(&route.link_text, outline.folder_id, outline.title, outline.items);
            }
        }
    }

    let orphans = append_orphan_folders(&mut tree, &snapshot.folders, &seen);

    log::debug!(
        "built sidebar: {} route(s), {} group(s) ({} empty folder(s)), {} row(s) dropped",
        tree.len(),
        tree.group_count(),
        orphans,
        report.dropped_rows.len()
    );

    Ok((tree, report))
}
