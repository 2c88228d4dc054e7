//! Mutable query builder.
//!
//! A [`QueryBuilder`] accumulates the pieces of one statement through chained calls and
//! is rendered by [`QueryBuilder::to_sql`]. It holds plain data only; the grammar is
//! passed in at render time, so one builder can be rendered for several dialects.
//!
//! ## Design
//!
//! - The statement kind is chosen by the last of `select`, `insert*`, `update` or
//!   `remove`.
//! - Where clauses are not joined implicitly: `and_where*` / `or_where*` push clauses
//!   that carry their own ` AND ` / ` OR ` prefix.
//! - Misuse never panics. The offending call is a no-op, the error is logged under the
//!   `sqlforge::builder` target and kept in [`QueryBuilder::errors`].

mod column;
mod insert;
mod join;
mod where_clause;

pub use column::{ColumnAt, ColumnSetter};
pub use join::{Join, JoinCondition, JoinKind, JoinTarget};

pub(crate) use insert::is_rectangular as insert_is_rectangular;

use crate::error::BuilderError;
use crate::expr::Expr;
use crate::render::LOG_TARGET;

/// The kind of statement a builder renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryMethod {
    Select,
    Insert,
    InsertDefault,
    Update,
    Delete,
    #[default]
    None,
}

/// Builder for one SELECT, INSERT, UPDATE or DELETE statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryBuilder {
    method: QueryMethod,
    from_tables: Vec<String>,
    /// Projection for SELECT, target columns for INSERT and UPDATE.
    columns: Vec<String>,
    /// Row-major; INSERT rows are `columns.len()` wide.
    values: Vec<Expr>,
    where_clauses: Vec<Expr>,
    joins: Vec<Join>,
    /// Source of `INSERT ... SELECT`.
    select_stmt: Option<Box<QueryBuilder>>,
    errors: Vec<BuilderError>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== target tables ====================

    /// Set the single target table, replacing any previous ones.
    pub fn table(&mut self, name: impl Into<String>) -> &mut Self {
        self.from_tables.clear();
        self.from_tables.push(name.into());
        self
    }

    /// Set several target tables, replacing any previous ones.
    ///
    /// SELECT lists them all; the other statements only use the first.
    pub fn tables<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.from_tables.clear();
        self.from_tables.extend(names.into_iter().map(Into::into));
        self
    }

    // ==================== statement kinds ====================

    /// Make this a SELECT and append projection columns.
    ///
    /// Column text is written as-is (see
    /// [`RenderConfig::escape_select_columns`](crate::RenderConfig::escape_select_columns)).
    /// Repeated calls accumulate.
    pub fn select<I, S>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns = columns.into_iter();
        self.columns.reserve(columns.size_hint().0);
        self.columns.extend(columns.map(Into::into));
        self.method = QueryMethod::Select;
        self
    }

    /// Make this a SELECT and append one projection column.
    pub fn select_column(&mut self, column: impl Into<String>) -> &mut Self {
        self.columns.push(column.into());
        self.method = QueryMethod::Select;
        self
    }

    /// Make this a SELECT without adding columns (`SELECT *` when none were given).
    pub fn select_all(&mut self) -> &mut Self {
        self.method = QueryMethod::Select;
        self
    }

    /// Make this an INSERT; rows come from `insert_row` or `set_column`.
    pub fn insert(&mut self) -> &mut Self {
        self.method = QueryMethod::Insert;
        self
    }

    /// Make this an `INSERT ... SELECT`.
    ///
    /// Rows inserted earlier are discarded; their columns stay as the target column
    /// list. A source that is not a SELECT is rejected and the builder is left unchanged.
    pub fn insert_select(&mut self, source: impl Into<Box<QueryBuilder>>) -> &mut Self {
        let source = source.into();
        if !source.is_select() {
            self.record_error(BuilderError::only_select("INSERT ... SELECT"));
            return self;
        }
        self.values.clear();
        self.select_stmt = Some(source);
        self.method = QueryMethod::Insert;
        self
    }

    /// Make this an `INSERT ... DEFAULT VALUES`.
    pub fn insert_default(&mut self) -> &mut Self {
        self.method = QueryMethod::InsertDefault;
        self
    }

    pub fn update(&mut self) -> &mut Self {
        self.method = QueryMethod::Update;
        self
    }

    /// Make this a DELETE.
    pub fn remove(&mut self) -> &mut Self {
        self.method = QueryMethod::Delete;
        self
    }

    // ==================== accessors ====================

    pub fn method(&self) -> QueryMethod {
        self.method
    }

    pub fn is_select(&self) -> bool {
        self.method == QueryMethod::Select
    }

    pub fn from_tables(&self) -> &[String] {
        &self.from_tables
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[Expr] {
        &self.values
    }

    pub fn where_clauses(&self) -> &[Expr] {
        &self.where_clauses
    }

    pub fn joins(&self) -> &[Join] {
        &self.joins
    }

    pub fn select_stmt(&self) -> Option<&QueryBuilder> {
        self.select_stmt.as_deref()
    }

    /// Misuse recorded by earlier calls, oldest first.
    pub fn errors(&self) -> &[BuilderError] {
        &self.errors
    }

    pub fn clear_errors(&mut self) -> &mut Self {
        self.errors.clear();
        self
    }

    pub(crate) fn record_error(&mut self, err: BuilderError) {
        tracing::error!(target: LOG_TARGET, error = %err, "query builder call ignored");
        self.errors.push(err);
    }
}
