#![allow(dead_code)]

use lazyseq::Seq;

use tracing_subscriber::EnvFilter;

/// Install a subscriber printing the crate's events, filtered by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn naturals<'a>() -> Seq<'a, u64> {
    Seq::iterate(0, |n| n + 1)
}

pub fn finite<'a>(n: u64) -> Seq<'a, u64> {
    Seq::from_iterable(0..n)
}
