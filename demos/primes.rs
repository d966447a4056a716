//! Print the first primes, each candidate checked against the primes found before it.
//!
//! Set `RUST_LOG=lazyseq=trace` to watch the realizations.

use lazyseq::Seq;

use tracing_subscriber::EnvFilter;

const COUNT: usize = 25;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let primes = Seq::iterate(2, |n: &u64| n + 1).filter_dependent(|n, primes| {
        primes
            .iter()
            .take_while(|p| *p * *p <= *n)
            .all(|p| n % p != 0)
    });

    let (first, rest) = primes.take_continuous(COUNT);
    println!("first {COUNT} primes: {first:?}");

    // the continuation re-derives the prefix on its own
    match rest.first() {
        Ok(next) => println!("next prime: {next}"),
        Err(e) => eprintln!("{e}"),
    }

    let twins = primes
        .zip(&primes.skip(1))
        .filter(|(p, q)| q - p == 2)
        .take(5);
    println!("first twin primes: {twins:?}");
}
