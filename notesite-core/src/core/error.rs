//! Error types for the Notesite core library.

use thiserror::Error;

/// All errors that can occur within the Notesite core library.
#[derive(Debug, Error)]
pub enum NotesiteError {
    /// A SQLite operation failed.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A sidebar row is missing one of its required columns.
    ///
    /// `index` is the row's position in the fetched sequence; `field` is the
    /// canonical field name (`id`, `folderId` or `linkText`).
    #[error("Malformed row {index}: missing required field `{field}`")]
    MalformedRow { index: usize, field: &'static str },

    /// The opened file is not a valid Notesite database.
    #[error("Invalid database: {0}")]
    InvalidDatabase(String),

    /// An I/O operation on the filesystem failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Navigation data could not be serialized to JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias that pins the error type to [`NotesiteError`].
pub type Result<T> = std::result::Result<T, NotesiteError>;

impl NotesiteError {
    /// Returns a short, human-readable message suitable for display to the end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Database(e) => format!("Failed to read notes: {e}"),
            Self::MalformedRow { field, .. } => {
                format!("Navigation data is incomplete: a tree node has no {field}")
            }
            Self::InvalidDatabase(_) => "Could not open notes database".to_string(),
            Self::Io(e) => format!("File error: {e}"),
            Self::Json(e) => format!("Data format error: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_row_names_field_and_index() {
        let e = NotesiteError::MalformedRow { index: 3, field: "folderId" };
        let msg = e.to_string();
        assert!(msg.contains("3"));
        assert!(msg.contains("folderId"));
    }

    #[test]
    fn test_user_message_for_malformed_row() {
        let e = NotesiteError::MalformedRow { index: 0, field: "id" };
        assert!(e.user_message().contains("no id"));
    }

    #[test]
    fn test_invalid_database_user_message_hides_detail() {
        let e = NotesiteError::InvalidDatabase("missing table note_tree".to_string());
        assert_eq!(e.user_message(), "Could not open notes database");
    }
}
