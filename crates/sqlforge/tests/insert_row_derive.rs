#![cfg(feature = "derive")]

use sqlforge::{Expr, InsertRow, IntoRow, QueryBuilder, SqliteGrammar};

#[derive(InsertRow)]
struct NewUser {
    id: i64,
    #[sql(column = "user_name")]
    name: String,
    email: Option<String>,
    #[sql(skip)]
    #[allow(dead_code)]
    password_confirmation: String,
}

#[derive(InsertRow)]
struct Visit<'a> {
    user_id: i32,
    path: &'a str,
}

fn alice() -> NewUser {
    NewUser {
        id: 1,
        name: "alice".to_string(),
        email: None,
        password_confirmation: "secret".to_string(),
    }
}

#[test]
fn derived_row_uses_field_order_and_renames() {
    let row = alice().into_row();
    assert_eq!(
        row,
        vec![
            ("id".to_string(), Expr::from(1i64)),
            ("user_name".to_string(), Expr::from("alice")),
            ("email".to_string(), Expr::null()),
        ]
    );
}

#[test]
fn insert_records() {
    let mut qb = QueryBuilder::new();
    qb.table("users").insert_record(alice()).insert_rows([NewUser {
        id: 2,
        name: "bob".to_string(),
        email: Some("bob@example.com".to_string()),
        password_confirmation: String::new(),
    }]);
    assert_eq!(
        qb.to_sql(&SqliteGrammar::new()),
        concat!(
            r#"INSERT INTO "users" (id, user_name, email)"#,
            r#" VALUES (1, 'alice', NULL), (2, 'bob', 'bob@example.com')"#,
        )
    );
}

#[test]
fn derived_rows_mix_with_pair_rows() {
    let mut qb = QueryBuilder::new();
    qb.table("visits")
        .insert_record(Visit {
            user_id: 7,
            path: "/",
        })
        .insert_row([("path", Expr::from("/about")), ("referrer", Expr::from("x"))]);
    assert_eq!(
        qb.to_sql(&SqliteGrammar::new()),
        r#"INSERT INTO "visits" (user_id, path, referrer) VALUES (7, '/', NULL), (NULL, '/about', 'x')"#
    );
}
