mod common;

use common::{finite, init_tracing, naturals};

use lazyseq::Seq;

const MAX: usize = 12;

fn samples<'a>() -> Vec<Seq<'a, u64>> {
    vec![
        naturals(),
        finite(5),
        naturals().filter(|n| n % 3 == 1),
        naturals().flat_map(|n| vec![n; (n % 3) as usize]),
        naturals().map_indexed(|n, i| n * i as u64),
        finite(7).intersperse(&naturals()),
        Seq::from_iter_once((0..9).map(|n| n * n)),
    ]
}

#[test]
fn test_purity() {
    init_tracing();

    for seq in samples() {
        for n in 0..MAX {
            assert_eq!(seq.take(n), seq.take(n));
        }
    }
}

#[test]
fn test_skip_take_decomposition() {
    init_tracing();

    for seq in samples() {
        for n in 0..MAX {
            for m in 0..MAX {
                let mut split = seq.take(n);
                split.extend(seq.skip(n).take(m));
                assert_eq!(seq.take(n + m), split, "n = {n}, m = {m}");
            }
        }
    }
}

#[test]
fn test_continuation() {
    init_tracing();

    for seq in samples() {
        for n in 0..MAX {
            let (values, continuation) = seq.take_continuous(n);
            assert_eq!(values, seq.take(n));
            for m in 0..MAX {
                assert_eq!(continuation.take(m), seq.skip(n).take(m));
            }
        }
    }
}

#[test]
fn test_map_is_elementwise() {
    let f = |n: u64| n * 7 + 1;

    for seq in samples() {
        let expected: Vec<_> = seq.take(MAX).into_iter().map(f).collect();
        assert_eq!(seq.map(f).take(MAX), expected);
    }
}

#[test]
fn test_filter_keeps_order() {
    let p = |n: &u64| n % 2 == 0;

    for seq in samples() {
        let source = seq.take(100);
        let expected: Vec<_> = source.iter().copied().filter(p).take(5).collect();
        let filtered = seq.filter(p).take_while(|n| *n < 100).take(5);

        assert!(filtered.iter().all(p));
        assert_eq!(filtered, expected);
    }
}

#[test]
fn test_transformations_leave_parent_untouched() {
    let parent = naturals();
    let before = parent.take(MAX);

    let children = [
        parent.map(|n| n + 1),
        parent.filter(|n| n % 2 == 1),
        parent.skip(4),
        parent.scan(0, |acc, n| acc + n),
    ];
    for child in &children {
        child.take(MAX);
    }

    assert_eq!(parent.take(MAX), before);
}

#[test]
fn test_realizations_do_not_share_cursors() {
    let seq = naturals().filter_dependent(|n, accepted| accepted.len() < 3 || n % 10 == 0);

    let mut first = seq.cursor();
    assert_eq!(first.pull(), Some(0));
    assert_eq!(first.pull(), Some(1));

    // a second traversal starts with an empty history of its own
    assert_eq!(seq.take(5), vec![0, 1, 2, 10, 20]);

    assert_eq!(first.pull(), Some(2));
    assert_eq!(first.pull(), Some(10));
}
