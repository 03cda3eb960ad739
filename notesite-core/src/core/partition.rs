//! Grouping of normalized rows by route prefix, then by folder.

use crate::core::row::NormalizedRow;
use std::collections::HashMap;

/// The rows of one folder, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct FolderRows {
    pub folder_id: String,
    pub rows: Vec<NormalizedRow>,
}

/// All folders seen under one route segment, in first-encounter order.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePartition {
    pub link_text: String,
    pub folders: Vec<FolderRows>,
}

/// Groups `rows` by `link_text` and then by `folder_id`.
///
/// Route segments and folders keep the order in which they were first seen,
/// and every innermost list keeps input order; the assembler's stable sort
/// relies on the latter.
pub fn partition(rows: Vec<NormalizedRow>) -> Vec<RoutePartition> {
    let mut routes: Vec<RoutePartition> = Vec::new();
    let mut route_index: HashMap<String, usize> = HashMap::new();
    let mut folder_index: HashMap<(usize, String), usize> = HashMap::new();

    for row in rows {
        let r = *route_index.entry(row.link_text.clone()).or_insert_with(|| {
            routes.push(RoutePartition {
                link_text: row.link_text.clone(),
                folders: Vec::new(),
            });
            routes.len() - 1
        });

        let route = &mut routes[r];
        let f = *folder_index
            .entry((r, row.folder_id.clone()))
            .or_insert_with(|| {
                route.folders.push(FolderRows {
                    folder_id: row.folder_id.clone(),
                    rows: Vec::new(),
                });
                route.folders.len() - 1
            });

        route.folders[f].rows.push(row);
    }

    routes
}
