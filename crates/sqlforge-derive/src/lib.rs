//! Derive macros for sqlforge
//!
//! Provides `#[derive(InsertRow)]`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod row;

/// Derive `sqlforge::IntoRow` for a struct, so it can be passed to
/// `QueryBuilder::insert_record` and `QueryBuilder::insert_rows`.
///
/// # Example
///
/// ```ignore
/// use sqlforge::InsertRow;
///
/// #[derive(InsertRow)]
/// struct NewUser {
///     id: i64,
///     #[sql(column = "user_name")]
///     name: String,
///     #[sql(skip)]
///     password_confirmation: String,
/// }
/// ```
///
/// # Attributes
///
/// - `#[sql(column = "name")]` - Insert the field under a different column name
/// - `#[sql(skip)]` - Leave the field out of the row
///
/// Every other field's type must convert into `sqlforge::Expr`.
#[proc_macro_derive(InsertRow, attributes(sql))]
pub fn derive_insert_row(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    row::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
