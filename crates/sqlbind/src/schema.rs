//! Compile-time schema description.
//!
//! A table is described to the builders by a [`Schema`] implementation whose
//! associated witness enums name the valid columns. Builders only accept
//! those witnesses, so a reference to an undeclared column is a type error,
//! not a runtime one.

/// Witness for a single table column.
///
/// Typically implemented on a fieldless enum with one variant per column.
pub trait Field: Copy + Send + Sync + 'static {
    /// The column name as it appears in SQL text.
    fn as_str(&self) -> &'static str;
}

/// Compile-time description of a table. Never instantiated.
pub trait Schema {
    /// Witness covering every declared column.
    type Field: Field;

    /// Witness covering the columns writable by INSERT and UPDATE, with
    /// primary-key columns omitted. Tables without a generated key can
    /// reuse `Self::Field` here.
    type WriteField: Field;
}

/// Widened witness for a joined SELECT: a column of either the local table
/// or the joined foreign table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JoinField<L, R> {
    Local(L),
    Foreign(R),
}

impl<L: Field, R: Field> Field for JoinField<L, R> {
    fn as_str(&self) -> &'static str {
        match self {
            JoinField::Local(field) => field.as_str(),
            JoinField::Foreign(field) => field.as_str(),
        }
    }
}
