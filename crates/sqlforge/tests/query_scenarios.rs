use sqlforge::{
    BuilderError, Dialect, Expr, KeywordCase, PostgresGrammar, QueryBuilder, RenderConfig,
    SqliteGrammar, col,
};

#[test]
fn simple_select() {
    let mut qb = QueryBuilder::new();
    qb.select(["id", "name"]).table("users");
    assert_eq!(
        qb.to_sql(&SqliteGrammar::new()),
        r#"SELECT id, name FROM "users""#
    );
}

#[test]
fn equality_where() {
    let mut qb = QueryBuilder::new();
    qb.table("users").select_all().where_("id", 5);
    assert_eq!(
        qb.try_to_sql(&SqliteGrammar::new()).unwrap(),
        r#"SELECT * FROM "users" WHERE id = 5"#
    );
}

#[test]
fn multi_row_insert_with_late_column() {
    let mut qb = QueryBuilder::new();
    qb.table("users")
        .insert_row([("id", 1)])
        .insert_row([("id", Expr::from(2)), ("name", Expr::from("a"))]);
    assert_eq!(qb.columns(), ["id", "name"]);
    assert_eq!(
        qb.values(),
        [Expr::from(1), Expr::null(), Expr::from(2), Expr::from("a")]
    );
    assert!(
        qb.to_sql(&SqliteGrammar::new())
            .ends_with("VALUES (1, NULL), (2, 'a')")
    );
}

#[test]
fn update_with_where() {
    let mut qb = QueryBuilder::new();
    qb.table("t").update().column("x").set(1).where_("id", 5);
    assert_eq!(
        qb.to_sql(&SqliteGrammar::new()),
        r#"UPDATE "t" SET x = 1 WHERE id = 5"#
    );
}

#[test]
fn where_in_with_subquery() {
    let mut sub = QueryBuilder::new();
    sub.table("office_revenue")
        .select(["office_code"])
        .where_expr(col("revenue").gt(1000));

    let mut qb = QueryBuilder::new();
    qb.table("offices").select_all().where_in("office_code", &sub);
    let sub_sql = sub.to_sql(&SqliteGrammar::new());
    assert_eq!(
        qb.to_sql(&SqliteGrammar::new()),
        format!(r#"SELECT * FROM "offices" WHERE office_code IN ({sub_sql})"#)
    );
}

#[test]
fn where_in_with_non_select_subquery_is_noop() {
    let mut sub = QueryBuilder::new();
    sub.table("office_revenue").update();

    let mut qb = QueryBuilder::new();
    qb.table("offices").select_all();
    let before = qb.clone();
    qb.where_in("office_code", sub);

    assert_eq!(qb.where_clauses(), before.where_clauses());
    assert_eq!(
        qb.errors(),
        [BuilderError::OnlySelectAllowedAsSubquery { context: "where_in" }]
    );
}

#[test]
fn join_using() {
    let mut qb = QueryBuilder::new();
    qb.table("users").select_all().left_join_using("orders", ["user_id"]);
    assert!(
        qb.to_sql(&SqliteGrammar::new())
            .contains(r#"LEFT JOIN "orders" USING (user_id)"#)
    );
}

#[test]
fn rendering_twice_gives_the_same_text() {
    let mut qb = QueryBuilder::new();
    qb.table("users")
        .select(["id"])
        .where_("a", 1)
        .and_where_in("b", [1, 2])
        .inner_join_on("roles", col("users.role_id").eq(col("roles.id")));
    let grammar = PostgresGrammar::new();
    assert_eq!(qb.to_sql(&grammar), qb.to_sql(&grammar));
}

#[test]
fn config_file_selects_grammar() {
    let path = std::env::temp_dir().join(format!("sqlforge-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        "dialect = \"mysql\"\nkeyword_case = \"lower\"\nmax_logged_sql = 16\n",
    )
    .unwrap();
    let config = RenderConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.dialect, Dialect::Mysql);
    assert_eq!(config.keyword_case, KeywordCase::Lower);
    assert_eq!(config.max_logged_sql, Some(16));

    let mut qb = QueryBuilder::new();
    qb.table("users").remove().where_("id", 1);
    let grammar = config.grammar();
    assert_eq!(
        qb.to_sql_with(grammar.as_ref(), &config),
        "delete from `users` where id = 1"
    );
}
