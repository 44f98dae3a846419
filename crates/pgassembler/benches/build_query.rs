use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use pgassembler::QueryAssembler;

/// `n` fields, `n` AND conditions and `n / 2` OR conditions.
fn assembler(n: usize) -> QueryAssembler {
    let mut q = QueryAssembler::new("t");
    q.select((0..n).map(|i| format!("col{i}")));
    for i in 0..n {
        q.and_where(format!("col{i}"), "=", i as i64);
    }
    for i in 0..n / 2 {
        q.or_where(format!("col{i}"), ">", i as i64);
    }
    q
}

fn bench_build_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("assembler/build_query");

    for n in [1, 5, 10, 50, 100] {
        let q = assembler(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &q, |b, q| {
            b.iter(|| black_box(q.build_query()));
        });
    }

    group.finish();
}

fn bench_with_ctes(c: &mut Criterion) {
    let mut group = c.benchmark_group("assembler/build_query_ctes");

    for ctes in [1, 4, 16] {
        let mut q = QueryAssembler::new("cte0");
        q.select(["*"]);
        for i in 0..ctes {
            q.add_cte(format!("cte{i}"), assembler(5));
        }
        group.bench_with_input(BenchmarkId::from_parameter(ctes), &q, |b, q| {
            b.iter(|| black_box(q.build_query()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_query, bench_with_ctes);
criterion_main!(benches);
