mod common;

use common::naturals;

use lazyseq::Seq;

const fn factorial(n: u64) -> u64 {
    let mut acc = 1;
    let mut k = 2;
    while k <= n {
        acc *= k;
        k += 1;
    }
    acc
}

#[test]
fn test_deep_chain() {
    const DEPTH: u64 = 1_000;

    let mut seq = naturals();
    for _ in 0..DEPTH {
        seq = seq.map(|n| n + 1);
    }

    assert_eq!(seq.take(3), vec![DEPTH, DEPTH + 1, DEPTH + 2]);
}

#[test]
fn test_long_filter_run() {
    // the only accepted element sits behind a million rejected ones
    let seq = naturals().filter(|n| *n >= 1_000_000);

    assert_eq!(seq.first(), Ok(1_000_000));
}

#[test]
#[ignore]
fn test_load() {
    const N: u64 = 10;

    let is_even = |n: &u64| *n % 2 == 0;
    let plus_one = |n: u64| n + 1;

    let seq = Seq::cycle((0..N).collect())
        .filter(is_even)
        .map(factorial)
        .map(plus_one);

    // 0!, 2!, 4!, 6!, 8! plus one, over and over
    let period = [2, 3, 25, 721, 40_321];

    let (prefix, rest) = seq.take_continuous(factorial(N) as usize);
    assert!(prefix.iter().enumerate().all(|(i, n)| *n == period[i % 5]));

    assert_eq!(rest.nth(factorial(N) as usize), Ok(period[0]));
}

#[test]
fn test_factorial() {
    assert_eq!(factorial(0), 1);
    assert_eq!(factorial(1), 1);
    assert_eq!(factorial(5), 120);
}
