//! SQL identifier quoting.
//!
//! Table and column names discovered at runtime cannot be passed through
//! bound parameters, so they are embedded in statement text directly.
//! This module is the single sanctioned path for doing that: every
//! identifier goes through [`quote_ident`], and user-supplied *values*
//! never do.

/// Quotes an arbitrary string for use in an SQL identifier position.
///
/// Wraps the name in double quotes and doubles any embedded double
/// quote, per the SQL standard. The result is safe to splice into
/// statement text regardless of the name's content.
pub(crate) fn quote_ident(name: &str) -> String {
    let mut quoted = String::with_capacity(name.len() + 2);
    quoted.push('"');
    for c in name.chars() {
        if c == '"' {
            quoted.push('"');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}
