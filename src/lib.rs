//! Schema-agnostic SQLite browsing and cell-editing engine.
//!
//! This crate lets a caller inspect and edit an arbitrary SQLite file
//! without prior schema knowledge: list its tables, load a bounded
//! window of rows with dynamically typed columns rendered as text, and
//! apply single-cell edits addressed by row identity. It is the storage
//! core for a table-browser frontend; the presentation layer supplies
//! open/select/edit events and renders what the engine returns, and
//! never constructs SQL itself.
//!
//! # Architecture
//!
//! - **`session`** — handle lifecycle ([`StorageSession`], [`probe`])
//! - **`catalog`** — user-table enumeration
//! - **`table`** — bounded row-window loading ([`TableContext`], [`RowRecord`])
//! - **`update`** — targeted single-cell updates
//! - **`ident`** — SQL identifier quoting
//!
//! # Quick start
//!
//! ```no_run
//! use sqlite_browse::{StorageSession, probe};
//!
//! let path = "contacts.db";
//! if !probe(path) {
//!     eprintln!("not a database");
//!     return;
//! }
//!
//! let mut session = StorageSession::new();
//! session.open(path).unwrap();
//!
//! let tables = session.list_tables().unwrap();
//! let context = session.load_table(&tables[0]).unwrap();
//! for row in context.rows() {
//!     println!("{:?}", row.cells());
//! }
//!
//! // Edit column 1 of the first row, then mirror it into the cache.
//! let rid = context.rows()[0].identity().to_string();
//! session.update_cell(1, &rid, "edited").unwrap();
//! if let Some(ctx) = session.context_mut() {
//!     if let Some(pos) = ctx.row_position(&rid) {
//!         ctx.apply_edit(pos, 1, "edited");
//!     }
//! }
//! ```
//!
//! # Safety model
//!
//! Runtime-discovered table and column names are embedded in statement
//! text only through the identifier-quoting routine; user-supplied cell
//! values and row identities are always bound parameters. Row loads are
//! capped at [`MAX_ROWS`] rows per table.

mod catalog;
mod error;
mod ident;
mod session;
mod table;
mod update;

pub use error::{Result, StorageError};
pub use session::{StorageSession, probe};
pub use table::{MAX_ROWS, RowRecord, TableContext};
