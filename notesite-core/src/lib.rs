//! Core library for Notesite — documentation-site navigation built from a note database.
//!
//! The primary entry point is [`build_sidebar`], which turns a [`SidebarSnapshot`]
//! (flat joined rows plus folder records, usually fetched with
//! [`Storage::snapshot`]) into a route-keyed [`NavTree`].
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core` module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use core::{
    assemble::{assemble_folder, AssemblyReport, FolderTree},
    error::{NotesiteError, Result},
    folder::{home_actions, FolderRecord, HomeAction},
    nav::{NavNode, NavTree},
    orphan::append_orphan_folders,
    partition::{partition, FolderRows, RoutePartition},
    row::{normalize_optional_id, normalize_row, normalize_rows, route_key, route_segment, NormalizedRow, RawRow},
    sidebar::{build_sidebar, build_sidebar_with_report, SidebarSnapshot},
    storage::{RoutePage, Storage},
};
