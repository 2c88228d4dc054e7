use super::Expr;
use crate::error::{BuilderError, BuilderResult};
use crate::ident::split_identifier;

/// A column reference: `[schema.][table.]column`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    pub schema: Option<String>,
    pub table: Option<String>,
    pub column: String,
}

impl ColumnRef {
    /// An unqualified column.
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            schema: None,
            table: None,
            column: column.into(),
        }
    }

    /// A table-qualified column.
    pub fn with_table(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            schema: None,
            table: Some(table.into()),
            column: column.into(),
        }
    }

    /// A fully qualified column.
    pub fn qualified(
        schema: impl Into<String>,
        table: impl Into<String>,
        column: impl Into<String>,
    ) -> Self {
        Self {
            schema: Some(schema.into()),
            table: Some(table.into()),
            column: column.into(),
        }
    }

    /// Parse dotted notation, e.g. `users.id` or `public."UserTable".id`.
    pub fn parse(s: &str) -> BuilderResult<Self> {
        let mut parts = split_identifier(s)?;
        let column = parts.pop().unwrap_or_default();
        match parts.len() {
            0 => Ok(Self::new(column)),
            1 => Ok(Self::with_table(parts.remove(0), column)),
            2 => {
                let table = parts.pop().unwrap_or_default();
                let schema = parts.pop().unwrap_or_default();
                Ok(Self::qualified(schema, table, column))
            }
            _ => Err(BuilderError::invalid_identifier(format!(
                "'{s}' has more than three parts"
            ))),
        }
    }

    /// The present parts in order: schema, table, column.
    pub fn parts(&self) -> impl Iterator<Item = &str> {
        self.schema
            .as_deref()
            .into_iter()
            .chain(self.table.as_deref())
            .chain(std::iter::once(self.column.as_str()))
    }
}

/// Create a column expression from dotted notation.
///
/// Text that does not parse as an identifier becomes a single column name and is
/// quoted by the grammar when rendered, so `col` never fails.
pub fn col(name: &str) -> Expr {
    Expr::Column(ColumnRef::parse(name).unwrap_or_else(|_| ColumnRef::new(name)))
}

impl From<ColumnRef> for Expr {
    fn from(column: ColumnRef) -> Self {
        Expr::Column(column)
    }
}

/// Left-hand side of a `where_` comparison.
///
/// Strings name a column here (`where_("id", 5)` renders `id = 5`), while on the
/// right-hand side they are string literals.
pub trait IntoColumnExpr {
    fn into_column_expr(self) -> Expr;
}

impl IntoColumnExpr for Expr {
    fn into_column_expr(self) -> Expr {
        self
    }
}

impl IntoColumnExpr for ColumnRef {
    fn into_column_expr(self) -> Expr {
        Expr::Column(self)
    }
}

impl IntoColumnExpr for &str {
    fn into_column_expr(self) -> Expr {
        col(self)
    }
}

impl IntoColumnExpr for String {
    fn into_column_expr(self) -> Expr {
        col(&self)
    }
}

impl IntoColumnExpr for &String {
    fn into_column_expr(self) -> Expr {
        col(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_qualified() {
        let c = ColumnRef::parse("public.users.id").unwrap();
        assert_eq!(c, ColumnRef::qualified("public", "users", "id"));
        assert_eq!(c.parts().collect::<Vec<_>>(), vec!["public", "users", "id"]);
    }

    #[test]
    fn parse_rejects_four_parts() {
        assert!(ColumnRef::parse("a.b.c.d").is_err());
    }

    #[test]
    fn col_falls_back_to_single_name() {
        assert_eq!(col("count(*)"), Expr::Column(ColumnRef::new("count(*)")));
        assert_eq!(col("u.name"), Expr::Column(ColumnRef::with_table("u", "name")));
    }
}
