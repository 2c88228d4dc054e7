use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlforge::{Expr, QueryBuilder, SqliteGrammar, col};

/// SELECT col0, col1, ... FROM "t" WHERE col0 = 0 AND col1 = 1 ...
fn build_select(n: usize) -> QueryBuilder {
    let mut qb = QueryBuilder::new();
    qb.table("t").select((0..n).map(|i| format!("col{i}")));
    for i in 0..n {
        let clause = col(&format!("col{i}")).eq(i as i64);
        if i == 0 {
            qb.where_expr(clause);
        } else {
            qb.and_where_expr(clause);
        }
    }
    qb
}

/// `rows` inserted rows that each add one new column.
fn build_staggered_insert(rows: usize) -> QueryBuilder {
    let mut qb = QueryBuilder::new();
    qb.table("t");
    for i in 0..rows {
        qb.insert_row([
            ("id".to_string(), Expr::from(i as i64)),
            (format!("extra{i}"), Expr::from("x")),
        ]);
    }
    qb
}

fn bench_select_to_sql(c: &mut Criterion) {
    let grammar = SqliteGrammar::new();
    let mut group = c.benchmark_group("render/select_to_sql");

    for n in [1, 5, 10, 50, 100] {
        let qb = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &qb, |b, qb| {
            b.iter(|| black_box(qb.to_sql(&grammar)));
        });
    }

    group.finish();
}

fn bench_insert_alignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/insert_alignment");

    for rows in [5, 20, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, &rows| {
            b.iter(|| black_box(build_staggered_insert(rows)));
        });
    }

    group.finish();
}

fn bench_insert_to_sql(c: &mut Criterion) {
    let grammar = SqliteGrammar::new();
    let mut group = c.benchmark_group("render/insert_to_sql");

    for rows in [5, 20, 100] {
        let qb = build_staggered_insert(rows);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &qb, |b, qb| {
            b.iter(|| black_box(qb.to_sql(&grammar)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_select_to_sql,
    bench_insert_alignment,
    bench_insert_to_sql
);
criterion_main!(benches);
