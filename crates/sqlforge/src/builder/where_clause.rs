//! WHERE clauses.
//!
//! `where_*` replaces the clause list; `and_*` / `or_*` append to it and require a
//! clause to already be there.

use super::QueryBuilder;
use crate::error::BuilderError;
use crate::expr::{Expr, InCandidates, InOp, IntoColumnExpr, UnaryOp};

impl QueryBuilder {
    /// `WHERE lhs = rhs`, replacing existing clauses.
    ///
    /// A string `lhs` names a column; a string `rhs` is a string literal.
    pub fn where_(&mut self, lhs: impl IntoColumnExpr, rhs: impl Into<Expr>) -> &mut Self {
        self.where_expr(lhs.into_column_expr().eq(rhs))
    }

    /// `WHERE <expr>`, replacing existing clauses.
    pub fn where_expr(&mut self, expr: impl Into<Expr>) -> &mut Self {
        self.where_clauses.clear();
        self.where_clauses.push(expr.into());
        self
    }

    /// `... AND lhs = rhs`
    pub fn and_where(&mut self, lhs: impl IntoColumnExpr, rhs: impl Into<Expr>) -> &mut Self {
        self.chain_where(UnaryOp::And, "and_where", |_| {
            Some(lhs.into_column_expr().eq(rhs))
        })
    }

    /// `... OR lhs = rhs`
    pub fn or_where(&mut self, lhs: impl IntoColumnExpr, rhs: impl Into<Expr>) -> &mut Self {
        self.chain_where(UnaryOp::Or, "or_where", |_| {
            Some(lhs.into_column_expr().eq(rhs))
        })
    }

    /// `... AND NOT lhs = rhs`
    pub fn and_where_not(&mut self, lhs: impl IntoColumnExpr, rhs: impl Into<Expr>) -> &mut Self {
        self.chain_where(UnaryOp::AndNot, "and_where_not", |_| {
            Some(lhs.into_column_expr().eq(rhs))
        })
    }

    /// `... OR NOT lhs = rhs`
    pub fn or_where_not(&mut self, lhs: impl IntoColumnExpr, rhs: impl Into<Expr>) -> &mut Self {
        self.chain_where(UnaryOp::OrNot, "or_where_not", |_| {
            Some(lhs.into_column_expr().eq(rhs))
        })
    }

    /// `... AND <expr>`
    pub fn and_where_expr(&mut self, expr: impl Into<Expr>) -> &mut Self {
        self.chain_where(UnaryOp::And, "and_where_expr", |_| Some(expr.into()))
    }

    /// `... OR <expr>`
    pub fn or_where_expr(&mut self, expr: impl Into<Expr>) -> &mut Self {
        self.chain_where(UnaryOp::Or, "or_where_expr", |_| Some(expr.into()))
    }

    // ==================== IN ====================

    /// `WHERE lhs IN (...)`, replacing existing clauses.
    ///
    /// Candidates are either a non-empty list or a SELECT builder.
    pub fn where_in(
        &mut self,
        lhs: impl IntoColumnExpr,
        candidates: impl Into<InCandidates>,
    ) -> &mut Self {
        if let Some(expr) = self.in_clause(InOp::In, lhs, candidates.into(), "where_in") {
            self.where_expr(expr);
        }
        self
    }

    /// `WHERE lhs NOT IN (...)`, replacing existing clauses.
    pub fn where_not_in(
        &mut self,
        lhs: impl IntoColumnExpr,
        candidates: impl Into<InCandidates>,
    ) -> &mut Self {
        if let Some(expr) = self.in_clause(InOp::NotIn, lhs, candidates.into(), "where_not_in") {
            self.where_expr(expr);
        }
        self
    }

    /// `... AND lhs IN (...)`
    pub fn and_where_in(
        &mut self,
        lhs: impl IntoColumnExpr,
        candidates: impl Into<InCandidates>,
    ) -> &mut Self {
        self.chain_where(UnaryOp::And, "and_where_in", |qb| {
            qb.in_clause(InOp::In, lhs, candidates.into(), "and_where_in")
        })
    }

    /// `... OR lhs IN (...)`
    pub fn or_where_in(
        &mut self,
        lhs: impl IntoColumnExpr,
        candidates: impl Into<InCandidates>,
    ) -> &mut Self {
        self.chain_where(UnaryOp::Or, "or_where_in", |qb| {
            qb.in_clause(InOp::In, lhs, candidates.into(), "or_where_in")
        })
    }

    /// `... AND lhs NOT IN (...)`
    pub fn and_where_not_in(
        &mut self,
        lhs: impl IntoColumnExpr,
        candidates: impl Into<InCandidates>,
    ) -> &mut Self {
        self.chain_where(UnaryOp::And, "and_where_not_in", |qb| {
            qb.in_clause(InOp::NotIn, lhs, candidates.into(), "and_where_not_in")
        })
    }

    /// `... OR lhs NOT IN (...)`
    pub fn or_where_not_in(
        &mut self,
        lhs: impl IntoColumnExpr,
        candidates: impl Into<InCandidates>,
    ) -> &mut Self {
        self.chain_where(UnaryOp::Or, "or_where_not_in", |qb| {
            qb.in_clause(InOp::NotIn, lhs, candidates.into(), "or_where_not_in")
        })
    }

    /// Append `build`'s clause behind `marker`. The base clause is checked before
    /// `build` runs, so a rejected call records exactly one error.
    fn chain_where(
        &mut self,
        marker: UnaryOp,
        operation: &'static str,
        build: impl FnOnce(&mut Self) -> Option<Expr>,
    ) -> &mut Self {
        if self.where_clauses.is_empty() {
            self.record_error(BuilderError::no_prior_where(operation));
            return self;
        }
        if let Some(expr) = build(self) {
            self.where_clauses.push(Expr::unary(marker, expr));
        }
        self
    }

    fn in_clause(
        &mut self,
        mode: InOp,
        lhs: impl IntoColumnExpr,
        candidates: InCandidates,
        operation: &'static str,
    ) -> Option<Expr> {
        match &candidates {
            InCandidates::Subquery(query) if !query.is_select() => {
                self.record_error(BuilderError::only_select(operation));
                return None;
            }
            InCandidates::List(items) if items.is_empty() => {
                self.record_error(BuilderError::EmptyCandidateList);
                return None;
            }
            _ => {}
        }
        Some(lhs.into_column_expr().in_candidates(mode, candidates))
    }
}
