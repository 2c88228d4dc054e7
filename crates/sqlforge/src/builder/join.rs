//! JOIN clauses.

use super::QueryBuilder;
use crate::error::BuilderError;
use crate::expr::Expr;

/// Join category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Full,
    Cross,
}

/// What is joined: a table by name or a nested SELECT.
#[derive(Debug, Clone, PartialEq)]
pub enum JoinTarget {
    Table(String),
    Subquery(Box<QueryBuilder>),
}

impl From<&str> for JoinTarget {
    fn from(name: &str) -> Self {
        JoinTarget::Table(name.to_string())
    }
}

impl From<String> for JoinTarget {
    fn from(name: String) -> Self {
        JoinTarget::Table(name)
    }
}

impl From<QueryBuilder> for JoinTarget {
    fn from(query: QueryBuilder) -> Self {
        JoinTarget::Subquery(Box::new(query))
    }
}

impl From<&QueryBuilder> for JoinTarget {
    fn from(query: &QueryBuilder) -> Self {
        JoinTarget::Subquery(Box::new(query.clone()))
    }
}

/// How joined rows are matched.
#[derive(Debug, Clone, PartialEq)]
pub enum JoinCondition {
    None,
    On(Expr),
    Using(Vec<String>),
}

impl JoinCondition {
    /// `USING (columns...)`
    pub fn using<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        JoinCondition::Using(columns.into_iter().map(Into::into).collect())
    }

    /// `ON <expr>`
    pub fn on(expr: impl Into<Expr>) -> Self {
        JoinCondition::On(expr.into())
    }
}

/// One JOIN clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub kind: JoinKind,
    pub target: JoinTarget,
    pub condition: JoinCondition,
}

impl QueryBuilder {
    /// Append a join.
    ///
    /// A subquery target must be a SELECT and `USING` needs at least one column;
    /// otherwise the join is dropped and the error recorded.
    pub fn join(
        &mut self,
        kind: JoinKind,
        target: impl Into<JoinTarget>,
        condition: JoinCondition,
    ) -> &mut Self {
        let target = target.into();
        if let JoinTarget::Subquery(query) = &target {
            if !query.is_select() {
                self.record_error(BuilderError::only_select("JOIN"));
                return self;
            }
        }
        if matches!(&condition, JoinCondition::Using(columns) if columns.is_empty()) {
            self.record_error(BuilderError::EmptyUsingColumns);
            return self;
        }
        self.joins.push(Join {
            kind,
            target,
            condition,
        });
        self
    }

    // ==================== USING ====================

    pub fn inner_join_using<I, S>(&mut self, target: impl Into<JoinTarget>, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.join(JoinKind::Inner, target, JoinCondition::using(columns))
    }

    /// `LEFT JOIN target USING (columns...)`
    pub fn left_join_using<I, S>(&mut self, target: impl Into<JoinTarget>, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.join(JoinKind::Left, target, JoinCondition::using(columns))
    }

    /// `RIGHT JOIN target USING (columns...)`
    pub fn right_join_using<I, S>(&mut self, target: impl Into<JoinTarget>, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.join(JoinKind::Right, target, JoinCondition::using(columns))
    }

    pub fn full_join_using<I, S>(&mut self, target: impl Into<JoinTarget>, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.join(JoinKind::Full, target, JoinCondition::using(columns))
    }

    // ==================== ON ====================

    /// `INNER JOIN target ON <expr>`
    pub fn inner_join_on(&mut self, target: impl Into<JoinTarget>, on: impl Into<Expr>) -> &mut Self {
        self.join(JoinKind::Inner, target, JoinCondition::on(on))
    }

    pub fn left_join_on(&mut self, target: impl Into<JoinTarget>, on: impl Into<Expr>) -> &mut Self {
        self.join(JoinKind::Left, target, JoinCondition::on(on))
    }

    pub fn right_join_on(&mut self, target: impl Into<JoinTarget>, on: impl Into<Expr>) -> &mut Self {
        self.join(JoinKind::Right, target, JoinCondition::on(on))
    }

    pub fn full_join_on(&mut self, target: impl Into<JoinTarget>, on: impl Into<Expr>) -> &mut Self {
        self.join(JoinKind::Full, target, JoinCondition::on(on))
    }

    /// `CROSS JOIN target`
    pub fn cross_join(&mut self, target: impl Into<JoinTarget>) -> &mut Self {
        self.join(JoinKind::Cross, target, JoinCondition::None)
    }
}
