//! Convenient imports for typical `sqlforge` usage.
//!
//! ```ignore
//! use sqlforge::prelude::*;
//! ```

pub use crate::{
    BuilderError, BuilderResult, Expr, Grammar, IntoRow, QueryBuilder, RenderConfig, col, lit,
    raw,
};

pub use crate::{MySqlGrammar, PostgresGrammar, SqliteGrammar};

#[cfg(feature = "derive")]
pub use crate::InsertRow;
