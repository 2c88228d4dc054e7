use super::{ColumnRef, Expr, InCandidates, InOp, IsOp, Literal, NullCheck, UnaryOp};
use crate::builder::QueryBuilder;
use crate::error::BuilderError;
use crate::render::Renderer;

impl Expr {
    /// Append this expression to the renderer.
    pub fn render(&self, r: &mut Renderer<'_>) {
        match self {
            Expr::Literal(literal) => literal.render(r),
            Expr::Column(column) => column.render(r),
            Expr::Unary { op, operand } => render_unary(*op, operand, r),
            Expr::Binary { op, left, right } => {
                left.render(r);
                r.push_char(' ');
                r.push(op.as_str());
                r.push_char(' ');
                right.render(r);
            }
            Expr::List(items) => {
                r.push_char('(');
                r.comma_separated(items, |r, e| e.render(r));
                r.push_char(')');
            }
            Expr::IsNull { mode, operand } => {
                operand.render(r);
                r.push_char(' ');
                r.keyword(|k| k.is);
                r.push_char(' ');
                if *mode == NullCheck::NotNull {
                    r.keyword(|k| k.not_word);
                    r.push_char(' ');
                }
                r.keyword(|k| k.null);
            }
            Expr::Is { mode, left, right } => {
                left.render(r);
                r.push_char(' ');
                r.keyword(|k| k.is);
                if matches!(mode, IsOp::IsNot | IsOp::IsNotDistinct) {
                    r.push_char(' ');
                    r.keyword(|k| k.not_word);
                }
                if matches!(mode, IsOp::IsDistinct | IsOp::IsNotDistinct) {
                    r.push_char(' ');
                    r.keyword(|k| k.distinct);
                    r.push_char(' ');
                    r.keyword(|k| k.from);
                }
                r.push_char(' ');
                right.render(r);
            }
            Expr::In {
                mode,
                left,
                candidates,
            } => {
                left.render(r);
                r.push_char(' ');
                if *mode == InOp::NotIn {
                    r.keyword(|k| k.not_word);
                    r.push_char(' ');
                }
                r.keyword(|k| k.in_word);
                r.push_char(' ');
                match candidates {
                    InCandidates::List(items) => {
                        if items.is_empty() {
                            r.report(BuilderError::EmptyCandidateList);
                        }
                        r.push_char('(');
                        r.comma_separated(items, |r, e| e.render(r));
                        r.push_char(')');
                    }
                    InCandidates::Subquery(query) => render_subquery(query, "IN", r),
                }
            }
            Expr::Subquery(query) => render_subquery(query, "a scalar subquery", r),
            Expr::Raw(sql) => r.push(sql),
        }
    }
}

fn render_unary(op: UnaryOp, operand: &Expr, r: &mut Renderer<'_>) {
    match op {
        UnaryOp::And | UnaryOp::Or | UnaryOp::AndNot | UnaryOp::OrNot => {
            r.push_char(' ');
            if matches!(op, UnaryOp::And | UnaryOp::AndNot) {
                r.keyword(|k| k.and_word);
            } else {
                r.keyword(|k| k.or_word);
            }
            r.push_char(' ');
            if matches!(op, UnaryOp::AndNot | UnaryOp::OrNot) {
                r.keyword(|k| k.not_word);
                r.push_char(' ');
            }
            operand.render(r);
        }
        UnaryOp::Plus => {
            r.push_char('+');
            operand.render(r);
        }
        // A negative operand would otherwise produce `--`, which opens a comment.
        UnaryOp::Minus => {
            r.push_char('-');
            let start = r.sql().len();
            operand.render(r);
            if r.sql()[start..].starts_with('-') {
                r.insert_char(start, ' ');
            }
        }
        UnaryOp::Negate => {
            r.keyword(|k| k.not_word);
            r.push_char(' ');
            operand.render(r);
        }
        // `++` / `--` are not SQL (and `--` opens a comment), so spell the arithmetic out.
        UnaryOp::Increment | UnaryOp::Decrement => {
            r.push_char('(');
            operand.render(r);
            r.push(if op == UnaryOp::Increment { " + 1)" } else { " - 1)" });
        }
    }
}

pub(crate) fn render_subquery(query: &QueryBuilder, context: &'static str, r: &mut Renderer<'_>) {
    if !query.is_select() {
        r.report(BuilderError::only_select(context));
    }
    r.push_char('(');
    query.write_sql(r);
    r.push_char(')');
}

impl Literal {
    pub fn render(&self, r: &mut Renderer<'_>) {
        match self {
            Literal::Float(v) if v.is_finite() => r.float(*v),
            Literal::Float(v) => {
                r.report(BuilderError::NonFiniteFloat(*v));
                r.keyword(|k| k.null);
            }
            Literal::Integer(v) => r.integer(*v),
            Literal::String(s) => r.string_literal(s),
            Literal::Blob(bytes) => r.blob(bytes),
            Literal::Bool(true) => r.keyword(|k| k.true_word),
            Literal::Bool(false) => r.keyword(|k| k.false_word),
            Literal::Null => r.keyword(|k| k.null),
        }
    }
}

impl ColumnRef {
    pub fn render(&self, r: &mut Renderer<'_>) {
        for (i, part) in self.parts().enumerate() {
            if i > 0 {
                r.push_char('.');
            }
            if part == "*" {
                r.push_char('*');
            } else {
                r.identifier(part);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{col, lit, raw};
    use crate::grammar::{KeywordCase, PostgresGrammar, SqliteGrammar};

    fn sql(e: &Expr) -> String {
        e.to_sql(&SqliteGrammar::new())
    }

    #[test]
    fn literals() {
        assert_eq!(sql(&lit(5)), "5");
        assert_eq!(sql(&lit(2.0)), "2.0");
        assert_eq!(sql(&lit(0.1f32)), "0.1");
        assert_eq!(sql(&lit("it's")), "'it''s'");
        assert_eq!(sql(&lit(true)), "TRUE");
        assert_eq!(sql(&Expr::null()), "NULL");
        assert_eq!(sql(&lit(vec![0xdeu8, 0xad])), "X'DEAD'");
    }

    #[test]
    fn non_finite_float_renders_null() {
        assert_eq!(sql(&lit(f64::NAN)), "NULL");
    }

    #[test]
    fn column_refs() {
        assert_eq!(sql(&col("id")), "id");
        assert_eq!(sql(&col("public.users.id")), "public.users.id");
        assert_eq!(sql(&col("u.*")), "u.*");
        assert_eq!(sql(&col("order")), r#""order""#);
        assert_eq!(sql(&col("first name")), r#""first name""#);
    }

    #[test]
    fn binary_ops() {
        assert_eq!(sql(&col("id").eq(5)), "id = 5");
        assert_eq!(sql(&col("a").neq("x")), "a != 'x'");
        assert_eq!(sql(&col("price").mul(2).ge(10)), "price * 2 >= 10");
        assert_eq!(sql(&col("n").modulo(3)), "n % 3");
    }

    #[test]
    fn unary_ops() {
        assert_eq!(sql(&col("flag").negate()), "NOT flag");
        assert_eq!(sql(&col("n").unary_minus()), "-n");
        assert_eq!(sql(&col("n").unary_plus()), "+n");
        assert_eq!(sql(&col("hits").increment()), "(hits + 1)");
        assert_eq!(sql(&col("hits").decrement()), "(hits - 1)");
        assert_eq!(sql(&Expr::unary(UnaryOp::And, col("a").eq(1))), " AND a = 1");
        assert_eq!(sql(&Expr::unary(UnaryOp::OrNot, col("a").eq(1))), " OR NOT a = 1");
    }

    #[test]
    fn minus_of_negative_operand_never_opens_comment() {
        assert_eq!(sql(&lit(-5).unary_minus()), "- -5");
        assert_eq!(sql(&col("n").unary_minus().unary_minus()), "- -n");
        assert_eq!(sql(&lit(-1.5).unary_minus()), "- -1.5");
        assert_eq!(sql(&lit(5).unary_minus()), "-5");
    }

    #[test]
    fn null_and_identity_checks() {
        assert_eq!(sql(&col("deleted_at").is_null()), "deleted_at IS NULL");
        assert_eq!(sql(&col("deleted_at").is_not_null()), "deleted_at IS NOT NULL");
        assert_eq!(sql(&col("a").is(true)), "a IS TRUE");
        assert_eq!(sql(&col("a").is_not(Expr::null())), "a IS NOT NULL");
        assert_eq!(sql(&col("a").is_distinct_from(col("b"))), "a IS DISTINCT FROM b");
        assert_eq!(
            sql(&col("a").is_not_distinct_from(1)),
            "a IS NOT DISTINCT FROM 1"
        );
    }

    #[test]
    fn in_lists() {
        assert_eq!(sql(&col("id").in_list([1, 2, 3])), "id IN (1, 2, 3)");
        assert_eq!(sql(&col("s").not_in_list(["a", "b"])), "s NOT IN ('a', 'b')");
        assert_eq!(sql(&Expr::list([1, 2])), "(1, 2)");
    }

    #[test]
    fn in_subquery() {
        let mut sub = QueryBuilder::new();
        sub.table("office_revenue").select(["office_code"]);
        let e = col("office_code").in_subquery(sub);
        assert_eq!(
            sql(&e),
            r#"office_code IN (SELECT office_code FROM "office_revenue")"#
        );
    }

    #[test]
    fn scalar_subquery() {
        let mut sub = QueryBuilder::new();
        sub.table("t").select(["max(id)"]);
        assert_eq!(sql(&col("id").eq(sub)), r#"id = (SELECT max(id) FROM "t")"#);
    }

    #[test]
    fn raw_is_verbatim() {
        assert_eq!(sql(&col("created_at").lt(raw("now()"))), "created_at < now()");
    }

    #[test]
    fn rendering_is_idempotent() {
        let e = col("a").eq(1);
        assert_eq!(sql(&e), sql(&e));
    }

    #[test]
    fn lowercase_keywords_and_postgres_quoting() {
        let g = PostgresGrammar::new().with_keyword_case(KeywordCase::Lower);
        let e = col("Users.id").is_not_null();
        assert_eq!(e.to_sql(&g), r#""Users".id is not null"#);
    }
}
