//! Targeted single-cell updates.
//!
//! An edit is addressed by row identity plus column index into the
//! currently held schema, never by display position or an externally
//! supplied column name. Identifiers reach the statement text only
//! through [`quote_ident`]; the new value and the row identity are
//! always bound parameters.

use rusqlite::{Connection, params};
use tracing::debug;

use crate::error::{Result, StorageError};
use crate::ident::quote_ident;
use crate::table::TableContext;

/// Writes `new_text` into one cell of the context's table.
///
/// Column 0 is the identity column and is never editable: requests for
/// it succeed without touching storage. A statement that completes with
/// zero rows changed (the identity vanished since the load) is still
/// success; the store stays authoritative and the caller's next reload
/// reflects it.
pub(crate) fn update_cell(
    conn: &Connection,
    context: &TableContext,
    column_index: usize,
    row_identity: &str,
    new_text: &str,
) -> Result<()> {
    if column_index == 0 {
        return Ok(());
    }
    let column = context.columns().get(column_index).ok_or_else(|| {
        StorageError::InvalidState(format!(
            "column index {column_index} out of range for '{}'",
            context.table_name()
        ))
    })?;

    let sql = format!(
        "UPDATE {} SET {} = ?1 WHERE rowid = ?2",
        quote_ident(context.table_name()),
        quote_ident(column)
    );
    let changed = conn.execute(&sql, params![new_text, row_identity])?;

    debug!(
        table = context.table_name(),
        column = column.as_str(),
        row_identity,
        changed,
        "applied cell update"
    );

    Ok(())
}
