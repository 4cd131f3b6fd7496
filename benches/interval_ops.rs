use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tabular_dp::problems::bool_paren::{BoolExpr, BoolOp};
use tabular_dp::problems::matrix_chain::MatrixChain;

fn random_dims(rng: &mut StdRng, n: usize) -> Vec<u64> {
    (0..=n).map(|_| rng.gen_range(5..64)).collect()
}

fn random_expr(rng: &mut StdRng, operands: usize) -> BoolExpr {
    let vals: Vec<bool> = (0..operands).map(|_| rng.gen_bool(0.5)).collect();
    let ops: Vec<BoolOp> = (1..operands)
        .map(|_| match rng.gen_range(0..3) {
            0 => BoolOp::And,
            1 => BoolOp::Or,
            _ => BoolOp::Xor,
        })
        .collect();
    BoolExpr::new(vals, ops).expect("generated arity is consistent")
}

fn bench_matrix_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_chain_fill");
    for &n in &[32usize, 96, 192] {
        group.bench_function(format!("chain_n_{n}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(4242);
                    MatrixChain::new(random_dims(&mut rng, n)).expect("n + 1 dims generated")
                },
                |chain| {
                    criterion::black_box(chain.min_cost());
                },
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

fn bench_bool_paren(c: &mut Criterion) {
    let mut group = c.benchmark_group("bool_paren_count");
    for &n in &[8usize, 16, 24] {
        group.bench_function(format!("operands_{n}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(1717);
                    random_expr(&mut rng, n)
                },
                |expr| {
                    criterion::black_box(expr.count_true());
                },
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_matrix_chain, bench_bool_paren);
criterion_main!(benches);
