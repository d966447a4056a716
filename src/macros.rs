//! This module defines macros easing the testing of sequences.

/// Assert that a sequence starts with the given elements.
///
/// # Examples
///
/// ```
/// use lazyseq::{assert_takes, Seq};
///
/// assert_takes!(Seq::iterate(1, |n: &u8| n * 2), [1, 2, 4]);
/// ```
#[macro_export]
macro_rules! assert_takes {
    ($seq:expr, [$($x:expr),* $(,)?]) => {{
        let expected = [$($x),*];
        let realized = $seq.take(expected.len());
        assert_eq!(realized.as_slice(), &expected[..]);
    }};
}

/// Send the given messages, in order, through the given sender.
///
/// A panic is caused if sending fails (probably due to a disconnected channel).
#[macro_export]
macro_rules! enqueue {
    ($tx:expr, [$($x:expr),* $(,)?]) => {{
        $($tx.send($x).unwrap();)*
    }};
}
