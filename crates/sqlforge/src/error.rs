//! Error types for sqlforge

use thiserror::Error;

/// Result type alias for sqlforge operations
pub type BuilderResult<T> = Result<T, BuilderError>;

/// Everything that can go wrong while building or rendering a query.
///
/// None of these abort a builder chain: mutation methods log the error, record it on the
/// builder and leave the builder as it was. [`QueryBuilder::try_to_sql`] surfaces them.
///
/// [`QueryBuilder::try_to_sql`]: crate::QueryBuilder::try_to_sql
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuilderError {
    /// A non-SELECT builder was used where a subquery is required
    #[error("Only SELECT queries are allowed as a subquery in {context}")]
    OnlySelectAllowedAsSubquery { context: &'static str },

    /// An additive `and_where*` / `or_where*` call without a base clause
    #[error("{operation} requires a prior where clause; call where_ or where_in first")]
    NoPriorWhereClause { operation: &'static str },

    /// Rendering a statement without any target table
    #[error("Missing table name for {statement} statement")]
    MissingTableName { statement: &'static str },

    /// A value that cannot be turned into an SQL expression
    #[error("Unsupported expression type: {0}")]
    UnsupportedExpressionType(String),

    /// Rendering a builder whose statement kind was never chosen
    #[error("Empty query: call select, insert, update or remove before rendering")]
    EmptyQuery,

    /// `IN` with an empty candidate list
    #[error("IN requires at least one candidate value")]
    EmptyCandidateList,

    /// `JOIN ... USING ()` without columns
    #[error("JOIN ... USING requires at least one column")]
    EmptyUsingColumns,

    /// The same column appears twice in one inserted row
    #[error("Duplicate column '{0}' in inserted row")]
    DuplicateColumn(String),

    /// An inserted row without any `(column, value)` pair
    #[error("Inserted row has no columns")]
    EmptyRow,

    /// Positional column assignment past the known columns
    #[error("Column index {index} out of range ({len} columns)")]
    ColumnIndexOutOfRange { index: usize, len: usize },

    /// The value buffer does not line up with the column list
    #[error("{values} values do not line up with {columns} columns")]
    ColumnValueMismatch { columns: usize, values: usize },

    /// INSERT with target columns but no values and no source query
    #[error("INSERT has columns but neither values nor a SELECT source")]
    MissingValues,

    /// NaN or infinity cannot be written as an SQL literal
    #[error("Non-finite float {0} cannot be rendered as an SQL literal")]
    NonFiniteFloat(f64),

    /// Identifier text that cannot be parsed
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// Configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BuilderError {
    /// Create a subquery-kind error for the given call site
    pub fn only_select(context: &'static str) -> Self {
        Self::OnlySelectAllowedAsSubquery { context }
    }

    /// Create a missing-where error for the given call site
    pub fn no_prior_where(operation: &'static str) -> Self {
        Self::NoPriorWhereClause { operation }
    }

    /// Create a missing-table error for the given statement kind
    pub fn missing_table(statement: &'static str) -> Self {
        Self::MissingTableName { statement }
    }

    /// Create an unsupported-expression error
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::UnsupportedExpressionType(message.into())
    }

    /// Create an identifier error
    pub fn invalid_identifier(message: impl Into<String>) -> Self {
        Self::InvalidIdentifier(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is a subquery-kind error
    pub fn is_only_select(&self) -> bool {
        matches!(self, Self::OnlySelectAllowedAsSubquery { .. })
    }

    /// Check if this is a missing-where error
    pub fn is_no_prior_where(&self) -> bool {
        matches!(self, Self::NoPriorWhereClause { .. })
    }

    /// Check if this is a missing-table error
    pub fn is_missing_table(&self) -> bool {
        matches!(self, Self::MissingTableName { .. })
    }

    /// Check if this is an empty-query error
    pub fn is_empty_query(&self) -> bool {
        matches!(self, Self::EmptyQuery)
    }
}
