//! SQLite access for the read side of Notesite.
//!
//! A [`Storage`] owns one connection. Callers open it per request (or per CLI
//! invocation) and drop it afterwards; nothing here is process-wide.

use crate::core::folder::{home_actions, FolderRecord, HomeAction};
use crate::core::row::{route_segment, RawRow};
use crate::core::sidebar::SidebarSnapshot;
use crate::{NotesiteError, Result};
use rusqlite::types::ValueRef;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Tables that must exist for a file to count as a Notesite database.
const REQUIRED_TABLES: [&str; 3] = ["note_info", "note_folder", "note_tree"];

/// One page published under a route, as listed for the site's dynamic routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePage {
    pub id: String,
    #[serde(rename = "noteid")]
    pub note_id: String,
    pub title: String,
    pub content: Option<String>,
    pub tags: Option<String>,
    pub update_time: Option<String>,
}

pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Creates (or completes) the schema at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(include_str!("schema.sql"))?;
        Ok(Self { conn })
    }

    /// Opens an existing database, validating and migrating its structure.
    ///
    /// # Errors
    ///
    /// Returns [`NotesiteError::InvalidDatabase`] if any of the note tables is
    /// missing, or [`NotesiteError::Database`] if the file is not SQLite.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;

        let table_count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master
             WHERE type='table'
             AND name IN (?1, ?2, ?3)",
            REQUIRED_TABLES,
            |row| row.get(0),
        )?;

        if table_count != REQUIRED_TABLES.len() as i64 {
            return Err(NotesiteError::InvalidDatabase(
                "Not a valid Notesite database".to_string(),
            ));
        }

        // Migrate: older databases predate the sort column.
        let sort_exists: bool = conn.query_row(
            "SELECT COUNT(*) FROM pragma_table_info('note_tree') WHERE name='sort'",
            [],
            |row| row.get::<_, i64>(0).map(|count| count > 0),
        )?;

        if !sort_exists {
            log::info!("adding missing note_tree.sort column");
            conn.execute("ALTER TABLE note_tree ADD COLUMN sort REAL DEFAULT 0", [])?;
        }

        // Views and indexes are recreated if absent.
        conn.execute_batch(include_str!("schema.sql"))?;

        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Fetches the sidebar rows and all folders inside one read transaction.
    ///
    /// Rows keep their source column names; [`crate::build_sidebar`] resolves
    /// them. The transaction rolls back on drop if either read fails.
    pub fn snapshot(&mut self) -> Result<SidebarSnapshot> {
        let tx = self.conn.transaction()?;
        let rows = query_raw_rows(&tx, "SELECT * FROM note_sidebar_view ORDER BY folder_id")?;
        let folders = query_folders(&tx)?;
        tx.commit()?;

        log::debug!("fetched {} sidebar row(s), {} folder(s)", rows.len(), folders.len());
        Ok(SidebarSnapshot { rows, folders })
    }

    /// Lists every folder in storage order.
    pub fn list_folders(&self) -> Result<Vec<FolderRecord>> {
        query_folders(&self.conn)
    }

    /// One home action per folder.
    pub fn home_actions(&self) -> Result<Vec<HomeAction>> {
        Ok(home_actions(&self.list_folders()?))
    }

    /// Pages under the route `link` (slashes optional), ascending by sort key.
    pub fn route_pages(&self, link: &str) -> Result<Vec<RoutePage>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, note_id, title, content, tags, update_time
             FROM note_info_view
             WHERE trim(link_txt, '/') = ?1
             ORDER BY sort ASC",
        )?;
        let pages = stmt
            .query_map([route_segment(link)], |row| {
                Ok(RoutePage {
                    id: row.get(0)?,
                    note_id: row.get(1)?,
                    title: row.get(2)?,
                    content: row.get(3)?,
                    tags: row.get(4)?,
                    update_time: row.get(5)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(pages)
    }
}

fn query_folders(conn: &Connection) -> Result<Vec<FolderRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, title, parent_id, link_txt FROM note_folder ORDER BY rowid",
    )?;
    let folders = stmt
        .query_map([], |row| {
            Ok(FolderRecord::new(
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, Option<String>>(2)?,
                &row.get::<_, String>(3)?,
            ))
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(folders)
}

/// Runs `sql` and maps every row into a [`RawRow`] keyed by column name.
fn query_raw_rows(conn: &Connection, sql: &str) -> Result<Vec<RawRow>> {
    let mut stmt = conn.prepare(sql)?;
    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

    let rows = stmt
        .query_map([], |row| {
            let mut raw = RawRow::new();
            for (i, name) in columns.iter().enumerate() {
                raw.insert(name, json_from_sql(row.get_ref(i)?));
            }
            Ok(raw)
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

fn json_from_sql(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null | ValueRef::Blob(_) => Value::Null,
        ValueRef::Integer(i) => Value::from(i),
        ValueRef::Real(f) => serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number),
        ValueRef::Text(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
    }
}
