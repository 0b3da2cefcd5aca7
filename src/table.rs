//! Bounded row-window loading and the current-table context.
//!
//! A loaded table is represented as a [`TableContext`]: the table name,
//! the column names captured from the result-set descriptor, and up to
//! [`MAX_ROWS`] materialized rows. Column 0 is always the synthetic
//! `rowid` identity column, so edits can be addressed by row identity
//! rather than display position.

use rusqlite::Connection;
use rusqlite::types::ValueRef;
use tracing::debug;

use crate::error::Result;
use crate::ident::quote_ident;

/// Upper bound on rows fetched per table load.
///
/// Tables larger than this are silently truncated to the first
/// `MAX_ROWS` rows; there is no pagination and no overflow indication.
pub const MAX_ROWS: usize = 100;

/// One materialized row: string cells aligned 1:1 with the context's
/// columns, cell 0 holding the row's stable identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowRecord {
    cells: Vec<String>,
}

impl RowRecord {
    /// The row's stable identity value (the `rowid` cell).
    pub fn identity(&self) -> &str {
        &self.cells[0]
    }

    /// All cells in column order, identity first.
    pub fn cells(&self) -> &[String] {
        &self.cells
    }
}

/// The currently loaded table: name, column schema, and row window.
///
/// At most one context is live per session; loading another table (or
/// closing the session) discards it entirely, including any in-memory
/// edits applied via [`apply_edit`](Self::apply_edit).
#[derive(Debug)]
pub struct TableContext {
    table: String,
    columns: Vec<String>,
    rows: Vec<RowRecord>,
}

impl TableContext {
    /// Name of the loaded table.
    pub fn table_name(&self) -> &str {
        &self.table
    }

    /// Column display names in positional order, identity column first.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of columns, identity column included.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// The loaded row window, at most [`MAX_ROWS`] rows.
    pub fn rows(&self) -> &[RowRecord] {
        &self.rows
    }

    /// Position of the row with the given identity, if it is in the
    /// loaded window.
    pub fn row_position(&self, identity: &str) -> Option<usize> {
        self.rows.iter().position(|r| r.identity() == identity)
    }

    /// Mirrors a committed edit into the cached row window.
    ///
    /// The engine never mutates the cache itself; after a successful
    /// [`update_cell`](crate::StorageSession::update_cell) the caller
    /// applies the same change here to keep the displayed window in
    /// sync. Returns `false` without modifying anything for the
    /// identity column or out-of-range coordinates.
    pub fn apply_edit(&mut self, row_index: usize, column_index: usize, text: &str) -> bool {
        if column_index == 0 || column_index >= self.columns.len() {
            return false;
        }
        match self.rows.get_mut(row_index) {
            Some(row) => {
                row.cells[column_index] = text.to_string();
                true
            }
            None => false,
        }
    }
}

/// Loads the first [`MAX_ROWS`] rows of `table`, identity column first.
///
/// Column names are captured from the statement descriptor before any
/// row is stepped, so the context's schema always matches the result
/// set even for tables whose shape is unknown in advance.
pub(crate) fn load_table(conn: &Connection, table: &str) -> Result<TableContext> {
    let sql = format!(
        "SELECT rowid, * FROM {} LIMIT {}",
        quote_ident(table),
        MAX_ROWS
    );
    let mut stmt = conn.prepare(&sql)?;

    let columns: Vec<String> = stmt.column_names().iter().map(|s| s.to_string()).collect();
    let ncols = columns.len();

    let mut rows = Vec::new();
    let mut result = stmt.query([])?;
    while let Some(row) = result.next()? {
        let mut cells = Vec::with_capacity(ncols);
        for i in 0..ncols {
            cells.push(value_to_text(row.get_ref(i)?));
        }
        rows.push(RowRecord { cells });
    }

    debug!(table, columns = ncols, rows = rows.len(), "loaded row window");

    Ok(TableContext {
        table: table.to_string(),
        columns,
        rows,
    })
}

/// Renders a dynamically typed cell as display text.
///
/// NULL becomes the empty string rather than a null marker, since
/// downstream editing only supports textual cells. Blobs are rendered
/// as (lossy) text and treated as opaque.
fn value_to_text(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => String::new(),
        ValueRef::Integer(v) => v.to_string(),
        ValueRef::Real(v) => v.to_string(),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}
