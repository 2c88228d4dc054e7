//! Conversions from Rust values into [`Expr`].
//!
//! This is the single funnel every builder method goes through:
//!
//! - an [`Expr`] passes through unchanged
//! - a [`Value`] (raw database value) unwraps to its literal, `NULL` when unset
//! - integers, floats, booleans, strings and byte buffers become literals
//! - `()` and `None` become `NULL`
//! - a [`QueryBuilder`] becomes a scalar subquery
//!
//! Types without a conversion are rejected at compile time. Inputs that can only be
//! checked at runtime (`u64` beyond `i64::MAX`, JSON arrays) go through `TryFrom` and
//! report [`BuilderError::UnsupportedExpressionType`].

use super::Expr;
use crate::builder::QueryBuilder;
use crate::error::BuilderError;

/// Literal value carried by [`Expr::Literal`].
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Float(f64),
    Integer(i64),
    String(String),
    Blob(Vec<u8>),
    Bool(bool),
    Null,
}

/// A raw database value as a driver would hand it out.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Float(f64),
    Integer(i64),
    String(String),
    Blob(Vec<u8>),
}

impl From<Value> for Literal {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Literal::Null,
            Value::Float(v) => Literal::Float(v),
            Value::Integer(v) => Literal::Integer(v),
            Value::String(v) => Literal::String(v),
            Value::Blob(v) => Literal::Blob(v),
        }
    }
}

impl From<Literal> for Expr {
    fn from(literal: Literal) -> Self {
        Expr::Literal(literal)
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Expr::Literal(value.into())
    }
}

macro_rules! literal_from {
    ($variant:ident as $target:ty: $($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Literal {
                fn from(v: $t) -> Self {
                    Literal::$variant(<$target>::from(v))
                }
            }

            impl From<$t> for Expr {
                fn from(v: $t) -> Self {
                    Expr::Literal(Literal::from(v))
                }
            }
        )*
    };
}

literal_from!(Integer as i64: i8, i16, i32, i64, u8, u16, u32);
literal_from!(Float as f64: f64);
literal_from!(Bool as bool: bool);
literal_from!(String as String: &str, String, &String, char);
literal_from!(Blob as Vec<u8>: Vec<u8>, &[u8]);

// Parse the shortest decimal text of the f32 so `0.1f32` stays `0.1`.
impl From<f32> for Literal {
    fn from(v: f32) -> Self {
        Literal::Float(v.to_string().parse().unwrap_or_else(|_| f64::from(v)))
    }
}

impl From<f32> for Expr {
    fn from(v: f32) -> Self {
        Expr::Literal(Literal::from(v))
    }
}

impl From<()> for Literal {
    fn from(_: ()) -> Self {
        Literal::Null
    }
}

impl From<()> for Expr {
    fn from(_: ()) -> Self {
        Expr::null()
    }
}

impl<T: Into<Expr>> From<Option<T>> for Expr {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Expr::null, Into::into)
    }
}

impl From<QueryBuilder> for Expr {
    fn from(query: QueryBuilder) -> Self {
        Expr::Subquery(Box::new(query))
    }
}

impl From<&QueryBuilder> for Expr {
    fn from(query: &QueryBuilder) -> Self {
        Expr::Subquery(Box::new(query.clone()))
    }
}

macro_rules! integer_try_from {
    ($($t:ty),* $(,)?) => {
        $(
            impl TryFrom<$t> for Expr {
                type Error = BuilderError;

                fn try_from(v: $t) -> Result<Self, Self::Error> {
                    i64::try_from(v)
                        .map(|v| Expr::Literal(Literal::Integer(v)))
                        .map_err(|_| {
                            BuilderError::unsupported(format!(
                                "{} value {v} does not fit an SQL integer",
                                stringify!($t)
                            ))
                        })
                }
            }
        )*
    };
}

integer_try_from!(u64, usize, isize, i128, u128);

impl TryFrom<serde_json::Value> for Expr {
    type Error = BuilderError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value as Json;
        match value {
            Json::Null => Ok(Expr::null()),
            Json::Bool(b) => Ok(b.into()),
            Json::String(s) => Ok(s.into()),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(i.into())
                } else if n.is_u64() {
                    Err(BuilderError::unsupported(format!(
                        "JSON number {n} does not fit an SQL integer"
                    )))
                } else {
                    n.as_f64().map(Expr::from).ok_or_else(|| {
                        BuilderError::unsupported(format!("JSON number {n} is not representable"))
                    })
                }
            }
            Json::Array(_) => Err(BuilderError::unsupported("JSON array")),
            Json::Object(_) => Err(BuilderError::unsupported("JSON object")),
        }
    }
}

/// A value that can be inserted as one row of `(column, value)` pairs.
///
/// Implemented by `#[derive(InsertRow)]` and by plain pair collections.
pub trait IntoRow {
    fn into_row(self) -> Vec<(String, Expr)>;
}

impl<C: Into<String>, V: Into<Expr>> IntoRow for Vec<(C, V)> {
    fn into_row(self) -> Vec<(String, Expr)> {
        self.into_iter().map(|(c, v)| (c.into(), v.into())).collect()
    }
}

impl<C: Into<String>, V: Into<Expr>, const N: usize> IntoRow for [(C, V); N] {
    fn into_row(self) -> Vec<(String, Expr)> {
        self.into_iter().map(|(c, v)| (c.into(), v.into())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_become_literals() {
        assert_eq!(Expr::from(5), Expr::Literal(Literal::Integer(5)));
        assert_eq!(Expr::from(7u8), Expr::Literal(Literal::Integer(7)));
        assert_eq!(Expr::from(1.5f32), Expr::Literal(Literal::Float(1.5)));
        assert_eq!(Expr::from(0.1f32), Expr::Literal(Literal::Float(0.1)));
        assert_eq!(Expr::from(true), Expr::Literal(Literal::Bool(true)));
        assert_eq!(Expr::from("a"), Expr::Literal(Literal::String("a".into())));
        assert_eq!(Expr::from(vec![1u8, 2]), Expr::Literal(Literal::Blob(vec![1, 2])));
    }

    #[test]
    fn absent_values_become_null() {
        assert_eq!(Expr::from(()), Expr::null());
        assert_eq!(Expr::from(None::<i32>), Expr::null());
        assert_eq!(Expr::from(Some(3)), Expr::from(3));
        assert_eq!(Expr::from(Value::default()), Expr::null());
    }

    #[test]
    fn raw_values_unwrap() {
        assert_eq!(Expr::from(Value::Integer(9)), Expr::from(9));
        assert_eq!(Expr::from(Value::Float(0.5)), Expr::from(0.5));
        assert_eq!(Expr::from(Value::String("x".into())), Expr::from("x"));
        assert_eq!(Expr::from(Value::Blob(vec![0])), Expr::from(vec![0u8]));
    }

    #[test]
    fn expressions_pass_through() {
        let e = Expr::Raw("now()".into());
        assert_eq!(Expr::from(e.clone()), e);
    }

    #[test]
    fn oversized_integers_are_unsupported() {
        assert!(Expr::try_from(u64::MAX).is_err());
        assert_eq!(Expr::try_from(42u64).unwrap(), Expr::from(42));
        let err = Expr::try_from(i128::MIN).unwrap_err();
        assert!(matches!(err, BuilderError::UnsupportedExpressionType(_)));
    }

    #[test]
    fn json_values() {
        use serde_json::json;
        assert_eq!(Expr::try_from(json!(null)).unwrap(), Expr::null());
        assert_eq!(Expr::try_from(json!(3)).unwrap(), Expr::from(3));
        assert_eq!(Expr::try_from(json!(2.5)).unwrap(), Expr::from(2.5));
        assert_eq!(Expr::try_from(json!("s")).unwrap(), Expr::from("s"));
        assert!(Expr::try_from(json!([1, 2])).is_err());
        assert!(Expr::try_from(json!({"a": 1})).is_err());
        assert!(Expr::try_from(json!(u64::MAX)).is_err());
    }

    #[test]
    fn pair_rows() {
        let row = [("id", Expr::from(1)), ("name", Expr::from("a"))].into_row();
        assert_eq!(row[0].0, "id");
        assert_eq!(row[1].1, Expr::from("a"));
    }
}
