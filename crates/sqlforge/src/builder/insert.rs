//! INSERT rows and column alignment.
//!
//! Rows may name different columns. The builder keeps one rectangular value matrix:
//! a column first seen in a later row is appended to `columns`, every earlier row is
//! padded with `NULL` for it, and columns a row leaves out are `NULL` in that row.

use super::{QueryBuilder, QueryMethod};
use crate::error::BuilderError;
use crate::expr::{Expr, IntoRow};

impl QueryBuilder {
    /// Make this an INSERT and append one row of `(column, value)` pairs.
    ///
    /// Pairs may come in any order. A row that names a column twice is rejected.
    pub fn insert_row<I, C, V>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (C, V)>,
        C: Into<String>,
        V: Into<Expr>,
    {
        let row = pairs
            .into_iter()
            .map(|(column, value)| (column.into(), value.into()))
            .collect();
        self.align_row(row);
        self
    }

    /// Append one row per item.
    pub fn insert_rows<I, R>(&mut self, rows: I) -> &mut Self
    where
        I: IntoIterator<Item = R>,
        R: IntoRow,
    {
        for row in rows {
            self.align_row(row.into_row());
        }
        self
    }

    /// Append a record, typically a `#[derive(InsertRow)]` struct.
    pub fn insert_record(&mut self, record: impl IntoRow) -> &mut Self {
        self.align_row(record.into_row());
        self
    }

    /// Rows replace an `INSERT ... SELECT` source set earlier.
    fn align_row(&mut self, row: Vec<(String, Expr)>) {
        if row.is_empty() {
            self.record_error(BuilderError::EmptyRow);
            return;
        }
        if let Some(dup) = first_duplicate(&row) {
            let dup = dup.to_string();
            self.record_error(BuilderError::DuplicateColumn(dup));
            return;
        }

        let old_width = self.columns.len();
        if !is_rectangular(old_width, self.values.len()) {
            self.record_error(BuilderError::ColumnValueMismatch {
                columns: old_width,
                values: self.values.len(),
            });
            return;
        }
        let rows = self.values.len().checked_div(old_width).unwrap_or(0);

        for (column, _) in &row {
            if !self.columns.contains(column) {
                self.columns.push(column.clone());
            }
        }
        let width = self.columns.len();

        // New columns sit at the end, so each existing row is padded at its tail.
        if width > old_width && rows > 0 {
            let mut padded = Vec::with_capacity((rows + 1) * width);
            let mut old = std::mem::take(&mut self.values).into_iter();
            for _ in 0..rows {
                padded.extend(old.by_ref().take(old_width));
                padded.extend(std::iter::repeat_with(Expr::null).take(width - old_width));
            }
            self.values = padded;
        }

        let mut slots: Vec<Option<Expr>> = std::iter::repeat_with(|| None).take(width).collect();
        for (column, value) in row {
            if let Some(pos) = self.columns.iter().position(|c| *c == column) {
                slots[pos] = Some(value);
            }
        }
        self.values
            .extend(slots.into_iter().map(|slot| slot.unwrap_or_else(Expr::null)));
        self.select_stmt = None;
        self.method = QueryMethod::Insert;
    }
}

fn first_duplicate(row: &[(String, Expr)]) -> Option<&str> {
    row.iter()
        .enumerate()
        .find(|(i, (column, _))| row[..*i].iter().any(|(seen, _)| seen == column))
        .map(|(_, (column, _))| column.as_str())
}

pub(crate) fn is_rectangular(columns: usize, values: usize) -> bool {
    match columns {
        0 => values == 0,
        n => values % n == 0,
    }
}
