//! Internal domain modules for the Notesite core library.
//!
//! All public types from these modules are re-exported at the crate root
//! with `#[doc(inline)]`; import from there in preference to this module.

pub mod assemble;
pub mod error;
pub mod folder;
pub mod nav;
pub mod orphan;
pub mod partition;
pub mod row;
pub mod sidebar;
pub mod storage;

#[doc(inline)]
pub use assemble::{AssemblyReport, FolderTree};
#[doc(inline)]
pub use error::{NotesiteError, Result};
#[doc(inline)]
pub use folder::{FolderRecord, HomeAction};
#[doc(inline)]
pub use nav::{NavNode, NavTree};
#[doc(inline)]
pub use row::{NormalizedRow, RawRow};
#[doc(inline)]
pub use sidebar::{build_sidebar, SidebarSnapshot};
#[doc(inline)]
pub use storage::{RoutePage, Storage};
