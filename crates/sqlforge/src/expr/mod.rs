//! Expression layer for WHERE clauses, assigned values and join conditions.
//!
//! [`Expr`] is a closed set of self-rendering nodes. Every value a builder accepts
//! passes through `Into<Expr>` first (see [`value`](self::value) for the accepted
//! inputs), so the serializer only ever has to walk this one type.
//!
//! ```ignore
//! use sqlforge::{col, Expr};
//!
//! let adult = col("age").ge(18);
//! let active = col("deleted_at").is_null();
//! ```

mod column;
mod render;
mod value;

pub use column::{ColumnRef, IntoColumnExpr, col};
pub use value::{IntoRow, Literal, Value};

pub(crate) use render::render_subquery;

use crate::builder::QueryBuilder;
use crate::config::RenderConfig;
use crate::grammar::Grammar;
use crate::render::Renderer;

/// Prefix operators, including the AND/OR markers that join where clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Plus,
    Minus,
    Increment,
    Decrement,
    Negate,
    And,
    Or,
    AndNot,
    OrNot,
}

/// Infix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    Neq,
    Gt,
    Lt,
    Ge,
    Le,
}

impl BinaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Eq => "=",
            BinaryOp::Neq => "!=",
            BinaryOp::Gt => ">",
            BinaryOp::Lt => "<",
            BinaryOp::Ge => ">=",
            BinaryOp::Le => "<=",
        }
    }
}

/// `IS NULL` / `IS NOT NULL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullCheck {
    IsNull,
    NotNull,
}

/// `IS`, `IS NOT`, `IS DISTINCT FROM`, `IS NOT DISTINCT FROM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsOp {
    Is,
    IsNot,
    IsDistinct,
    IsNotDistinct,
}

/// `IN` / `NOT IN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InOp {
    In,
    NotIn,
}

/// Right-hand side of an `IN`: a literal list or a nested SELECT.
#[derive(Debug, Clone, PartialEq)]
pub enum InCandidates {
    List(Vec<Expr>),
    Subquery(Box<QueryBuilder>),
}

impl<T: Into<Expr>> From<Vec<T>> for InCandidates {
    fn from(items: Vec<T>) -> Self {
        InCandidates::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Expr>, const N: usize> From<[T; N]> for InCandidates {
    fn from(items: [T; N]) -> Self {
        InCandidates::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<QueryBuilder> for InCandidates {
    fn from(query: QueryBuilder) -> Self {
        InCandidates::Subquery(Box::new(query))
    }
}

impl From<&QueryBuilder> for InCandidates {
    fn from(query: &QueryBuilder) -> Self {
        InCandidates::Subquery(Box::new(query.clone()))
    }
}

/// Expression node.
///
/// Rendering never mutates a node, so one expression can be rendered any number of
/// times with the same result.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Literal value: number, string, blob, boolean or NULL.
    Literal(Literal),

    /// Column reference: `[schema.][table.]column`.
    Column(ColumnRef),

    /// Prefix operator applied to one operand.
    Unary { op: UnaryOp, operand: Box<Expr> },

    /// Infix operator: `left op right`.
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Parenthesized comma list: `(a, b, c)`.
    List(Vec<Expr>),

    /// `operand IS [NOT] NULL`.
    IsNull { mode: NullCheck, operand: Box<Expr> },

    /// `left IS [NOT] [DISTINCT FROM] right`.
    Is {
        mode: IsOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// `left [NOT] IN (...)`.
    In {
        mode: InOp,
        left: Box<Expr>,
        candidates: InCandidates,
    },

    /// Scalar subquery: `(SELECT ...)`.
    Subquery(Box<QueryBuilder>),

    /// Raw SQL fragment, written verbatim.
    Raw(String),
}

/// Create a literal expression.
pub fn lit(value: impl Into<Literal>) -> Expr {
    Expr::Literal(value.into())
}

/// Create a raw SQL fragment. The text is not escaped.
pub fn raw(sql: impl Into<String>) -> Expr {
    Expr::Raw(sql.into())
}

impl Expr {
    /// The NULL literal.
    pub fn null() -> Self {
        Expr::Literal(Literal::Null)
    }

    pub fn unary(op: UnaryOp, operand: impl Into<Expr>) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand.into()),
        }
    }

    pub fn binary(op: BinaryOp, left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left.into()),
            right: Box::new(right.into()),
        }
    }

    /// Create a parenthesized list from any iterable of expression-like values.
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Expr>,
    {
        Expr::List(items.into_iter().map(Into::into).collect())
    }

    fn is_mode(self, mode: IsOp, right: impl Into<Expr>) -> Self {
        Expr::Is {
            mode,
            left: Box::new(self),
            right: Box::new(right.into()),
        }
    }

    fn in_mode(self, mode: InOp, candidates: InCandidates) -> Self {
        Expr::In {
            mode,
            left: Box::new(self),
            candidates,
        }
    }

    // ==================== comparisons ====================

    /// `self = rhs`
    pub fn eq(self, rhs: impl Into<Expr>) -> Self {
        Expr::binary(BinaryOp::Eq, self, rhs)
    }

    /// `self != rhs`
    pub fn neq(self, rhs: impl Into<Expr>) -> Self {
        Expr::binary(BinaryOp::Neq, self, rhs)
    }

    /// `self > rhs`
    pub fn gt(self, rhs: impl Into<Expr>) -> Self {
        Expr::binary(BinaryOp::Gt, self, rhs)
    }

    /// `self < rhs`
    pub fn lt(self, rhs: impl Into<Expr>) -> Self {
        Expr::binary(BinaryOp::Lt, self, rhs)
    }

    /// `self >= rhs`
    pub fn ge(self, rhs: impl Into<Expr>) -> Self {
        Expr::binary(BinaryOp::Ge, self, rhs)
    }

    /// `self <= rhs`
    pub fn le(self, rhs: impl Into<Expr>) -> Self {
        Expr::binary(BinaryOp::Le, self, rhs)
    }

    // ==================== arithmetic ====================

    /// `self + rhs`
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, rhs: impl Into<Expr>) -> Self {
        Expr::binary(BinaryOp::Add, self, rhs)
    }

    /// `self - rhs`
    #[allow(clippy::should_implement_trait)]
    pub fn sub(self, rhs: impl Into<Expr>) -> Self {
        Expr::binary(BinaryOp::Sub, self, rhs)
    }

    /// `self * rhs`
    #[allow(clippy::should_implement_trait)]
    pub fn mul(self, rhs: impl Into<Expr>) -> Self {
        Expr::binary(BinaryOp::Mul, self, rhs)
    }

    /// `self / rhs`
    #[allow(clippy::should_implement_trait)]
    pub fn div(self, rhs: impl Into<Expr>) -> Self {
        Expr::binary(BinaryOp::Div, self, rhs)
    }

    /// `self % rhs`
    pub fn modulo(self, rhs: impl Into<Expr>) -> Self {
        Expr::binary(BinaryOp::Mod, self, rhs)
    }

    // ==================== prefix operators ====================

    /// `+self`
    pub fn unary_plus(self) -> Self {
        Expr::unary(UnaryOp::Plus, self)
    }

    /// `-self`
    pub fn unary_minus(self) -> Self {
        Expr::unary(UnaryOp::Minus, self)
    }

    /// `NOT self`
    pub fn negate(self) -> Self {
        Expr::unary(UnaryOp::Negate, self)
    }

    /// `(self + 1)`
    pub fn increment(self) -> Self {
        Expr::unary(UnaryOp::Increment, self)
    }

    /// `(self - 1)`
    pub fn decrement(self) -> Self {
        Expr::unary(UnaryOp::Decrement, self)
    }

    // ==================== null / identity checks ====================

    /// `self IS NULL`
    pub fn is_null(self) -> Self {
        Expr::IsNull {
            mode: NullCheck::IsNull,
            operand: Box::new(self),
        }
    }

    /// `self IS NOT NULL`
    pub fn is_not_null(self) -> Self {
        Expr::IsNull {
            mode: NullCheck::NotNull,
            operand: Box::new(self),
        }
    }

    /// `self IS rhs`
    pub fn is(self, rhs: impl Into<Expr>) -> Self {
        self.is_mode(IsOp::Is, rhs)
    }

    /// `self IS NOT rhs`
    pub fn is_not(self, rhs: impl Into<Expr>) -> Self {
        self.is_mode(IsOp::IsNot, rhs)
    }

    /// `self IS DISTINCT FROM rhs`
    pub fn is_distinct_from(self, rhs: impl Into<Expr>) -> Self {
        self.is_mode(IsOp::IsDistinct, rhs)
    }

    /// `self IS NOT DISTINCT FROM rhs`
    pub fn is_not_distinct_from(self, rhs: impl Into<Expr>) -> Self {
        self.is_mode(IsOp::IsNotDistinct, rhs)
    }

    // ==================== IN ====================

    /// `self IN (items...)`
    pub fn in_list<I, T>(self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Expr>,
    {
        let items = items.into_iter().map(Into::into).collect();
        self.in_mode(InOp::In, InCandidates::List(items))
    }

    /// `self NOT IN (items...)`
    pub fn not_in_list<I, T>(self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Expr>,
    {
        let items = items.into_iter().map(Into::into).collect();
        self.in_mode(InOp::NotIn, InCandidates::List(items))
    }

    /// `self IN (SELECT ...)`
    pub fn in_subquery(self, query: impl Into<Box<QueryBuilder>>) -> Self {
        self.in_mode(InOp::In, InCandidates::Subquery(query.into()))
    }

    /// `self NOT IN (SELECT ...)`
    pub fn not_in_subquery(self, query: impl Into<Box<QueryBuilder>>) -> Self {
        self.in_mode(InOp::NotIn, InCandidates::Subquery(query.into()))
    }

    /// Build an `IN` / `NOT IN` node from prepared candidates.
    pub fn in_candidates(self, mode: InOp, candidates: InCandidates) -> Self {
        self.in_mode(mode, candidates)
    }

    // ==================== rendering ====================

    /// Render this expression on its own with default settings.
    pub fn to_sql(&self, grammar: &dyn Grammar) -> String {
        let config = RenderConfig::default();
        let mut r = Renderer::new(grammar, &config);
        self.render(&mut r);
        r.finish().0
    }
}
