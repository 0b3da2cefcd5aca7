//! Session and handle lifecycle.
//!
//! A [`StorageSession`] owns the connection to one database file at a
//! time together with the currently loaded [`TableContext`]. All engine
//! operations go through the session, which enforces the preconditions
//! (open handle, live context) and keeps handle and context lifetimes
//! tied together: reopening or closing drops both.

use std::path::Path;

use rusqlite::{Connection, OpenFlags};
use tracing::{debug, warn};

use crate::catalog;
use crate::error::{Result, StorageError};
use crate::table::{self, TableContext};
use crate::update;

/// Checks whether a file is a readable SQLite database.
///
/// Opens the file read-only, runs a schema-version check, and reports
/// whether both succeeded. The probe connection is always released and
/// the file is never created or mutated. Any failure — missing file,
/// non-database content, corrupted header — yields `false`; a
/// zero-length file counts as a valid empty database.
pub fn probe(path: impl AsRef<Path>) -> bool {
    let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_URI;
    let Ok(conn) = Connection::open_with_flags(path, flags) else {
        return false;
    };
    conn.query_row("PRAGMA schema_version", [], |_| Ok(())).is_ok()
}

/// Owns one open database handle and the currently loaded table.
///
/// The session is the single entry point for all storage operations.
/// It assumes one in-flight operation at a time (the caller serializes
/// user actions) and holds no internal locks.
///
/// # Examples
///
/// ```no_run
/// use sqlite_browse::StorageSession;
///
/// let mut session = StorageSession::new();
/// session.open("inventory.db").unwrap();
///
/// for table in session.list_tables().unwrap() {
///     println!("{table}");
/// }
///
/// let context = session.load_table("parts").unwrap();
/// let rid = context.rows()[0].identity().to_string();
/// session.update_cell(2, &rid, "obsolete").unwrap();
/// ```
#[derive(Debug, Default)]
pub struct StorageSession {
    conn: Option<Connection>,
    context: Option<TableContext>,
}

impl StorageSession {
    /// Creates a closed session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a database is currently open.
    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Opens a database file read-write, closing any previous handle
    /// (and its loaded context) first.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Open`] with the engine's diagnostic text
    /// if the file cannot be opened; the session stays closed.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.close();
        let conn = Connection::open(path.as_ref())
            .map_err(|e| StorageError::Open(e.to_string()))?;
        debug!(path = %path.as_ref().display(), "opened database");
        self.conn = Some(conn);
        Ok(())
    }

    /// Closes the handle and drops the loaded context. Idempotent.
    pub fn close(&mut self) {
        self.context = None;
        if let Some(conn) = self.conn.take() {
            if let Err((_conn, err)) = conn.close() {
                warn!(error = %err, "database close reported an error");
            }
        }
    }

    /// Lists user tables in lexicographic ascending order, excluding
    /// internal `sqlite_*` tables.
    ///
    /// # Errors
    ///
    /// [`StorageError::InvalidState`] without an open handle,
    /// [`StorageError::Query`] on enumeration failure.
    pub fn list_tables(&self) -> Result<Vec<String>> {
        catalog::list_tables(self.connection()?)
    }

    /// Loads the first [`MAX_ROWS`](crate::MAX_ROWS) rows of `table`,
    /// replacing any previously loaded context.
    ///
    /// The old context is discarded before the load is attempted, so a
    /// failed load leaves no context rather than a stale one.
    ///
    /// # Errors
    ///
    /// [`StorageError::InvalidState`] without an open handle or for an
    /// empty table name; [`StorageError::Query`] on prepare/step
    /// failure; [`StorageError::OutOfMemory`] if the engine cannot
    /// allocate during metadata capture.
    pub fn load_table(&mut self, table: &str) -> Result<&TableContext> {
        self.context = None;
        if table.is_empty() {
            return Err(StorageError::InvalidState("empty table name".to_string()));
        }
        let context = table::load_table(self.connection()?, table)?;
        Ok(self.context.insert(context))
    }

    /// The currently loaded table, if any.
    pub fn context(&self) -> Option<&TableContext> {
        self.context.as_ref()
    }

    /// Mutable access to the loaded table, for mirroring committed
    /// edits via [`TableContext::apply_edit`].
    pub fn context_mut(&mut self) -> Option<&mut TableContext> {
        self.context.as_mut()
    }

    /// Writes `new_text` into the cell addressed by `row_identity` and
    /// `column_index` of the loaded table.
    ///
    /// The column name is resolved from the currently held schema, so a
    /// schema swap between load and edit cannot misdirect the write.
    /// `column_index == 0` (the identity column) succeeds without
    /// touching storage. The in-memory row window is left untouched;
    /// the caller mirrors the edit once this returns `Ok`.
    ///
    /// # Errors
    ///
    /// [`StorageError::InvalidState`] without an open handle, without a
    /// loaded context, or for an out-of-range column index;
    /// [`StorageError::Query`] if the update statement fails.
    pub fn update_cell(
        &mut self,
        column_index: usize,
        row_identity: &str,
        new_text: &str,
    ) -> Result<()> {
        let conn = self
            .conn
            .as_ref()
            .ok_or_else(|| StorageError::InvalidState("no open database".to_string()))?;
        let context = self
            .context
            .as_ref()
            .ok_or_else(|| StorageError::InvalidState("no table loaded".to_string()))?;
        update::update_cell(conn, context, column_index, row_identity, new_text)
    }

    fn connection(&self) -> Result<&Connection> {
        self.conn
            .as_ref()
            .ok_or_else(|| StorageError::InvalidState("no open database".to_string()))
    }
}
