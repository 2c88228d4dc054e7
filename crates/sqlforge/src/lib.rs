//! # sqlforge
//!
//! A text-generating SQL query builder.
//!
//! ## Features
//!
//! - **Typed expressions**: a closed [`Expr`] tree that renders itself, built from plain
//!   Rust values through `Into<Expr>`
//! - **Chainable builder**: one [`QueryBuilder`] for SELECT, INSERT (rows, DEFAULT
//!   VALUES or a SELECT source), UPDATE and DELETE
//! - **Column alignment**: insert rows that name different columns and the value
//!   matrix stays rectangular, with `NULL` in the gaps
//! - **Pluggable grammars**: keyword spelling, identifier quoting and literal escaping
//!   come from a [`Grammar`] (SQLite, PostgreSQL and MySQL are built in)
//! - **Non-fatal errors**: misuse is logged through `tracing` and recorded on the
//!   builder; [`QueryBuilder::try_to_sql`] turns it into a `Result`
//!
//! The output is plain SQL text with every literal inlined. Nothing here talks to a
//! database.
//!
//! ## Example
//!
//! ```ignore
//! use sqlforge::{PostgresGrammar, QueryBuilder, col};
//!
//! let grammar = PostgresGrammar::new();
//!
//! let mut active = QueryBuilder::new();
//! active.table("orders").select(["user_id"]).where_("status", "open");
//!
//! let mut qb = QueryBuilder::new();
//! qb.table("users")
//!     .select(["id", "name"])
//!     .where_in("id", active)
//!     .and_where_expr(col("deleted_at").is_null());
//!
//! assert_eq!(
//!     qb.to_sql(&grammar),
//!     r#"SELECT id, name FROM "users" WHERE id IN (SELECT user_id FROM "orders" WHERE status = 'open') AND deleted_at IS NULL"#
//! );
//!
//! let mut insert = QueryBuilder::new();
//! insert
//!     .table("users")
//!     .insert_row([("id", 1)])
//!     .insert_row(vec![("id", sqlforge::Expr::from(2)), ("name", "a".into())]);
//! assert_eq!(
//!     insert.to_sql(&grammar),
//!     r#"INSERT INTO "users" (id, name) VALUES (1, NULL), (2, 'a')"#
//! );
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod expr;
pub mod grammar;
pub mod ident;
pub mod prelude;
pub mod render;

pub use builder::{
    ColumnAt, ColumnSetter, Join, JoinCondition, JoinKind, JoinTarget, QueryBuilder, QueryMethod,
};
pub use config::{Dialect, RenderConfig};
pub use error::{BuilderError, BuilderResult};
pub use expr::{
    BinaryOp, ColumnRef, Expr, InCandidates, InOp, IntoColumnExpr, IntoRow, IsOp, Literal,
    NullCheck, UnaryOp, Value, col, lit, raw,
};
pub use grammar::{Grammar, KeywordCase, Keywords, MySqlGrammar, PostgresGrammar, SqliteGrammar};
pub use render::Renderer;

#[cfg(feature = "derive")]
pub use sqlforge_derive::InsertRow;
