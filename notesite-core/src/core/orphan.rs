//! Empty sidebar groups for folders that own no tree nodes.

use crate::core::folder::FolderRecord;
use crate::core::nav::NavTree;
use std::collections::HashSet;

/// Appends an empty group for every folder whose id is not in `seen`.
///
/// `seen` must hold every folder id present in the tree-node source, whether
/// or not the folder produced a group. Folders are visited in the order
/// given and each lands at the end of its own route's list, so orphan groups
/// are ordered by arrival and not by any folder attribute.
///
/// Returns the number of groups appended.
pub fn append_orphan_folders(
    tree: &mut NavTree,
    folders: &[FolderRecord],
    seen: &HashSet<String>,
) -> usize {
    let mut appended = 0;
    for folder in folders.iter().filter(|f| !seen.contains(&f.id)) {
        tree.push_group(
            &folder.link_text,
            folder.id.clone(),
            Some(folder.title.clone()),
            Vec::new(),
        );
        appended += 1;
    }
    appended
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orphans_appended_after_existing_groups() {
        let mut tree = NavTree::default();
        tree.push_group("costs", "F1".to_string(), Some("Costs".to_string()), Vec::new());

        let folders = vec![
            FolderRecord::new("F1", "Costs", None, "costs"),
            FolderRecord::new("F2", "Designs", None, "/designs/"),
            FolderRecord::new("F3", "Costs appendix", None, "costs"),
        ];
        let seen: HashSet<String> = ["F1".to_string()].into_iter().collect();

        assert_eq!(append_orphan_folders(&mut tree, &folders, &seen), 2);

        let costs = tree.get("/costs/").unwrap();
        assert_eq!(costs.len(), 2);
        assert_eq!(costs[1].id, "F3");
        assert_eq!(costs[1].folder_id, "F3");
        assert_eq!(costs[1].sort, 1.0);
        assert_eq!(costs[1].text.as_deref(), Some("Costs appendix"));

        let designs = tree.get("/designs/").unwrap();
        assert_eq!(designs.len(), 1);
        assert_eq!(designs[0].sort, 0.0);
        assert_eq!(designs[0].link_text, "designs");
        assert!(designs[0].parent_id.is_none());
        assert!(designs[0].items.is_some());
        assert!(designs[0].children().is_empty());
    }

    #[test]
    fn test_seen_folders_are_skipped_even_without_group() {
        let mut tree = NavTree::default();
        let folders = vec![FolderRecord::new("F9", "Headless", None, "costs")];
        let seen: HashSet<String> = ["F9".to_string()].into_iter().collect();
        assert_eq!(append_orphan_folders(&mut tree, &folders, &seen), 0);
        assert!(tree.is_empty());
    }
}
