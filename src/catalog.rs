//! User-table enumeration.

use rusqlite::Connection;

use crate::error::Result;

/// Lists user tables in lexicographic ascending order.
///
/// Internal `sqlite_*` tables (such as `sqlite_sequence`) are excluded.
/// The ordering is part of the contract: callers rely on a stable
/// alphabetical catalog.
pub(crate) fn list_tables(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master WHERE type = 'table' \
         AND name NOT LIKE 'sqlite_%' ORDER BY name",
    )?;

    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(names)
}
