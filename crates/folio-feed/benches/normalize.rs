//! Benchmarks for feed envelope parsing and row normalization.

use std::fmt::Write;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use folio_feed::columns::DEFAULT_STRATEGIES;
use folio_feed::{normalize_table, parse_envelope};

/// Build a query response body with `rows` posts in alternating date formats.
fn response_body(rows: usize) -> String {
    let mut body = String::from(
        r#"google.visualization.Query.setResponse({"table":{"cols":[{"label":"Заглавие"},{"label":"Дата"},{"label":"Кратко"},{"label":"Текст"}],"rows":["#,
    );
    for i in 0..rows {
        if i > 0 {
            body.push(',');
        }
        let day = i % 28 + 1;
        let date = if i % 2 == 0 {
            format!("{day:02}.03.2026")
        } else {
            format!("2025-11-{day:02}")
        };
        write!(
            body,
            r#"{{"c":[{{"v":"Новина номер {i}"}},{{"v":"{date}"}},{{"v":"Кратко описание"}},{{"v":"Текст на новината"}}]}}"#
        )
        .unwrap();
    }
    body.push_str("]}});");
    body
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("feed_normalize");

    for rows in [10, 100, 1000] {
        let body = response_body(rows);
        group.bench_with_input(BenchmarkId::new("parse_and_normalize", rows), &body, |b, body| {
            b.iter(|| {
                let table = parse_envelope(body).unwrap();
                normalize_table(&table, &DEFAULT_STRATEGIES)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
