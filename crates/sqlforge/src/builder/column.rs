//! Column assignment for UPDATE and single-row INSERT.

use super::QueryBuilder;
use crate::error::BuilderError;
use crate::expr::Expr;

/// Pending assignment to a named column, from [`QueryBuilder::column`].
#[must_use = "call .set(value) to assign the column"]
pub struct ColumnSetter<'a> {
    builder: &'a mut QueryBuilder,
    name: String,
}

impl<'a> ColumnSetter<'a> {
    /// Push the column and its value.
    pub fn set(self, value: impl Into<Expr>) -> &'a mut QueryBuilder {
        self.builder.set_column(self.name, value)
    }
}

/// Pending reassignment of an existing column, from [`QueryBuilder::column_at`].
#[must_use = "call .set(value) to assign the column"]
pub struct ColumnAt<'a> {
    builder: &'a mut QueryBuilder,
    index: usize,
}

impl<'a> ColumnAt<'a> {
    /// Replace the value bound to the column in the last row.
    pub fn set(self, value: impl Into<Expr>) -> &'a mut QueryBuilder {
        let builder = self.builder;
        let width = builder.columns.len();
        if self.index >= width || builder.values.len() < width {
            builder.record_error(BuilderError::ColumnIndexOutOfRange {
                index: self.index,
                len: width,
            });
            return builder;
        }
        let last_row = builder.values.len() - width;
        builder.values[last_row + self.index] = value.into();
        builder
    }
}

impl QueryBuilder {
    /// Append `name = value` to the column and value lists.
    ///
    /// Meant for UPDATE and single-row INSERT; use
    /// [`insert_row`](QueryBuilder::insert_row) for multi-row inserts.
    pub fn set_column(&mut self, name: impl Into<String>, value: impl Into<Expr>) -> &mut Self {
        self.columns.push(name.into());
        self.values.push(value.into());
        self
    }

    /// Start an assignment to column `name`: `qb.column("x").set(1)`.
    pub fn column(&mut self, name: impl Into<String>) -> ColumnSetter<'_> {
        ColumnSetter {
            builder: self,
            name: name.into(),
        }
    }

    /// Start a reassignment of the column at `index`: `qb.column_at(0).set(2)`.
    pub fn column_at(&mut self, index: usize) -> ColumnAt<'_> {
        ColumnAt {
            builder: self,
            index,
        }
    }
}
