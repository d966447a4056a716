use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lazyseq::Seq;

fn naturals<'a>() -> Seq<'a, u64> {
    Seq::iterate(0, |n| n + 1)
}

fn deep_map(c: &mut Criterion) {
    let mut seq = naturals();
    for _ in 0..100 {
        seq = seq.map(|n| n + 1);
    }

    c.bench_function("take 1000 through 100 maps", |b| {
        b.iter(|| seq.take(black_box(1_000)))
    });
}

fn mixed_chain(c: &mut Criterion) {
    let seq = naturals()
        .filter(|n| n % 3 != 0)
        .map_indexed(|n, i| n ^ i as u64)
        .flat_map(|n| [n, n / 2])
        .zip(&naturals())
        .map(|(a, b)| a.wrapping_add(b));

    c.bench_function("take 1000 through mixed chain", |b| {
        b.iter(|| seq.take(black_box(1_000)))
    });
}

fn primes(c: &mut Criterion) {
    let primes = Seq::iterate(2, |n: &u64| n + 1)
        .filter_dependent(|n, primes| primes.iter().all(|p| n % p != 0));

    c.bench_function("nth 500 prime", |b| b.iter(|| primes.nth(black_box(500))));
}

criterion_group!(benches, deep_map, mixed_chain, primes);
criterion_main!(benches);
