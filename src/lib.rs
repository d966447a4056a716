//! lazyseq represents possibly infinite sequences as immutable values which are evaluated only as far as someone asks for.
//!
//! ## Design
//!
//! The idea is to never store elements (or a half-consumed iterator) in a sequence but only the recipe for producing them: a [`Generator`], that is, a factory which hands out a fresh, independent [`Cursor`] starting at the first element every time it is called.
//! Transforming a sequence wraps the factory of the old sequence into a new one without touching the old sequence.
//! Realizing a sequence calls the factory once, pulls from the resulting cursor until enough is known and throws the cursor away.
//! Consequently, realizing the same sequence twice in the same way yields the same result twice (provided the closures it was built from are themselves pure).
//!
//! The following graphic illustrates what happens on `Seq::iterate(0, |n| n + 1).map(double).take(3)`:
//!
//! <pre>
//! Seq                    Seq
//! [iterate(0, succ)] <-- [map(double)]        (factories only, nothing evaluated)
//!                              |
//!                              | take(3)
//!                              v
//! Cursor                 Cursor
//! [0, 1, 2, ...]  -----> [0, 2, 4, ...]       (fresh cursors, pulled 3 times, then dropped)
//! </pre>
//!
//! ## Usage
//!
//! To get a [`Seq`] off the ground use one of its constructors:
//! - [`wrap`](`Seq::wrap`) lifts a re-invocable factory of iterators.
//! - [`iterate`](`Seq::iterate`) unfolds a seed with a step closure.
//! - [`from_iterable`](`Seq::from_iterable`) lifts a re-iterable collection (for example a range).
//! - [`from_iter_once`](`Seq::from_iter_once`) and `from_receiver` lift single-use producers by memoizing what they produced.
//!
//! Then transform it with [`map`](`Seq::map`), [`filter`](`Seq::filter`), [`flat_map`](`Seq::flat_map`), [`zip`](`Seq::zip`) and friends and finally realize it with [`take`](`Seq::take`), [`nth`](`Seq::nth`) or [`take_continuous`](`Seq::take_continuous`).
//! For stepping through a sequence by hand, [`to_generator`](`Seq::to_generator`) exposes the raw pull protocol.
//!
//! Note that filtering an infinite sequence with a predicate which is never satisfied again makes realizing the result run forever: bounding that is up to the caller.
//!
//! # Examples
//!
//! The even natural numbers:
//!
//! ```
//! use lazyseq::Seq;
//!
//! let naturals = Seq::iterate(0, |n: &u64| n + 1);
//! let evens = naturals.filter(|n| n % 2 == 0);
//!
//! assert_eq!(evens.take(5), vec![0, 2, 4, 6, 8]);
//! // realizing again yields the same
//! assert_eq!(evens.take(5), vec![0, 2, 4, 6, 8]);
//! // the original is untouched
//! assert_eq!(naturals.take(3), vec![0, 1, 2]);
//! ```
//!
//! The primes, each number being checked against the primes accepted before it:
//!
//! ```
//! use lazyseq::Seq;
//!
//! let primes = Seq::iterate(2, |n: &u64| n + 1)
//!     .filter_dependent(|n, primes| primes.iter().all(|p| n % p != 0));
//!
//! assert_eq!(primes.take(6), vec![2, 3, 5, 7, 11, 13]);
//! ```
//!
//! Realizing in chunks:
//!
//! ```
//! use lazyseq::Seq;
//!
//! let letters = Seq::cycle(vec!['a', 'b', 'c']);
//!
//! let (first, rest) = letters.take_continuous(2);
//! assert_eq!(first, vec!['a', 'b']);
//! assert_eq!(rest.take(2), vec!['c', 'a']);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

mod combinators;

mod error;

mod macros;

pub mod streams;

pub use error::SeqError;
pub use streams::{Cursor, Generator};

use combinators::{
    Cycle, Filter, FilterDependent, FilterIndexed, FlatMap, Intersperse, Iterate, Map, MapIndexed,
    Scan, Skip, TakeWhile, Zip,
};
use streams::replay::{Replay, Replaying};

use alloc::rc::Rc;
use alloc::vec::Vec;

use core::fmt;
use core::fmt::Display;

/// [`Seq<X>`] is an immutable, lazily evaluated and possibly infinite sequence of `X`.
///
/// Cloning a sequence is cheap: it clones a handle to the same [`Generator`].
pub struct Seq<'a, X> {
    generator: Generator<'a, X>,
}

impl<'a, X> Clone for Seq<'a, X> {
    fn clone(&self) -> Self {
        Self {
            generator: self.generator.clone(),
        }
    }
}

impl<'a, X> fmt::Debug for Seq<'a, X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seq(..)")
    }
}

impl<'a, X: 'a> Seq<'a, X> {
    fn from_factory<F>(factory: F) -> Self
    where
        F: Fn() -> Cursor<'a, X> + 'a,
    {
        Self {
            generator: Generator::new(Rc::new(factory)),
        }
    }

    /// Lift a factory of iterators into a sequence.
    /// - `factory` is called once per realization and must produce a fresh iterator starting at the first element every time.
    ///
    /// If `factory` shares mutable state between the iterators it produces, realizing the sequence twice may give different results.
    /// This is not detected.
    ///
    /// # Examples
    ///
    /// The powers of two:
    ///
    /// ```
    /// use lazyseq::Seq;
    ///
    /// let powers = Seq::wrap(|| (0..).map(|k| 1_u64 << k));
    ///
    /// assert_eq!(powers.take(4), vec![1, 2, 4, 8]);
    /// ```
    pub fn wrap<F, I>(factory: F) -> Self
    where
        F: Fn() -> I + 'a,
        I: IntoIterator<Item = X>,
        I::IntoIter: 'a,
    {
        Self::from_factory(move || Cursor::new(factory().into_iter()))
    }

    /// Create the sequence starting with `seed` where each further element is obtained by applying `step` to its predecessor.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazyseq::Seq;
    ///
    /// let collatz = Seq::iterate(6, |n: &u32| if n % 2 == 0 { n / 2 } else { 3 * n + 1 });
    ///
    /// assert_eq!(collatz.take(6), vec![6, 3, 10, 5, 16, 8]);
    /// ```
    pub fn iterate<F>(seed: X, step: F) -> Self
    where
        X: Clone,
        F: Fn(&X) -> X + 'a,
    {
        let step = Rc::new(step);
        Self::from_factory(move || Cursor::new(Iterate::new(seed.clone(), Rc::clone(&step))))
    }

    /// Lift a re-iterable collection into a sequence.
    /// - `source` is cloned and iterated anew on every realization.
    ///
    /// If cloning `source` does not restart it (as with iterators over shared channels), realizations may disagree; use [`from_iter_once`](`Seq::from_iter_once`) for such sources.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazyseq::Seq;
    ///
    /// assert_eq!(Seq::from_iterable(vec![1, 2, 3]).take(5), vec![1, 2, 3]);
    /// assert_eq!(Seq::from_iterable(10..).take(2), vec![10, 11]);
    /// ```
    pub fn from_iterable<I>(source: I) -> Self
    where
        I: IntoIterator<Item = X> + Clone + 'a,
        I::IntoIter: 'a,
    {
        Self::from_factory(move || Cursor::new(source.clone().into_iter()))
    }

    /// Lift a single-use iterator into a sequence.
    ///
    /// Whatever is pulled from `iter` is memoized and replayed to later realizations, so all realizations agree.
    /// The memo grows with the longest prefix realized so far and lives as long as the sequence or any sequence derived from it.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazyseq::Seq;
    ///
    /// let words = "lazy sequences are values".split(' ');
    /// let words = Seq::from_iter_once(words);
    ///
    /// assert_eq!(words.take(2), vec!["lazy", "sequences"]);
    /// assert_eq!(words.take(2), vec!["lazy", "sequences"]);
    /// ```
    pub fn from_iter_once<I>(iter: I) -> Self
    where
        X: Clone,
        I: IntoIterator<Item = X>,
        I::IntoIter: 'a,
    {
        let replay = Replay::shared(iter.into_iter());
        Self::from_factory(move || Replaying::cursor(&replay))
    }

    /// Lift a receiver of messages into a sequence.
    ///
    /// Realizing blocks the current thread until enough messages have arrived.
    /// The sequence ends once all senders are dropped and every sent message is part of it.
    /// Messages are memoized as in [`from_iter_once`](`Seq::from_iter_once`).
    ///
    /// # Examples
    ///
    /// ```
    /// use lazyseq::Seq;
    ///
    /// let (tx, rx) = crossbeam::channel::unbounded();
    /// tx.send(1).unwrap();
    /// tx.send(2).unwrap();
    /// drop(tx);
    ///
    /// assert_eq!(Seq::from_receiver(rx).take(5), vec![1, 2]);
    /// ```
    #[cfg(feature = "std")]
    pub fn from_receiver(receiver: crossbeam::channel::Receiver<X>) -> Self
    where
        X: Clone,
    {
        Self::from_iter_once(streams::receivers::Messages::new(receiver))
    }

    /// Create the infinite sequence of a certain constant.
    ///
    /// # Examples
    ///
    /// ```
    /// let trues = lazyseq::Seq::constant(true);
    ///
    /// assert_eq!(trues.nth(1_000), Ok(true));
    /// ```
    pub fn constant(x: X) -> Self
    where
        X: Clone,
    {
        Self::from_factory(move || Cursor::new(core::iter::repeat(x.clone())))
    }

    /// Create the infinite sequence running through `items` over and over again.
    ///
    /// If `items` is empty, so is the sequence.
    pub fn cycle(items: Vec<X>) -> Self
    where
        X: Clone,
    {
        let snapshot: Rc<[X]> = Rc::from(items);
        Self::from_factory(move || Cursor::new(Cycle::new(Rc::clone(&snapshot))))
    }

    /// Create the sequence without elements.
    pub fn empty() -> Self {
        Self::from_factory(Cursor::exhausted)
    }
}

impl<'a, X: 'a> Seq<'a, X> {
    /// Get the producer factory of `self` to step through it by hand.
    pub fn to_generator(&self) -> Generator<'a, X> {
        self.generator.clone()
    }

    /// Instantiate a fresh cursor over `self`.
    ///
    /// The same as `self.to_generator().cursor()`.
    pub fn cursor(&self) -> Cursor<'a, X> {
        self.generator.cursor()
    }

    /// Apply a closure to each element.
    /// - `f` is the closure to be applied.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazyseq::Seq;
    ///
    /// let squares = Seq::iterate(1, |n: &u32| n + 1).map(|n| n * n);
    ///
    /// assert_eq!(squares.take(4), vec![1, 4, 9, 16]);
    /// ```
    pub fn map<Y, F>(&self, f: F) -> Seq<'a, Y>
    where
        Y: 'a,
        F: Fn(X) -> Y + 'a,
    {
        let parent = self.generator.clone();
        let f = Rc::new(f);
        Seq::from_factory(move || Cursor::new(Map::new(parent.cursor(), Rc::clone(&f))))
    }

    /// Apply a closure to each element and its position.
    pub fn map_indexed<Y, F>(&self, f: F) -> Seq<'a, Y>
    where
        Y: 'a,
        F: Fn(X, usize) -> Y + 'a,
    {
        let parent = self.generator.clone();
        let f = Rc::new(f);
        Seq::from_factory(move || Cursor::new(MapIndexed::new(parent.cursor(), Rc::clone(&f))))
    }

    /// Keep only the elements satisfying a predicate, in their original order.
    /// - `p` is the predicate serving as filter.
    ///
    /// Realizing the result does not terminate if more elements are asked for than there are elements satisfying `p`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazyseq::Seq;
    ///
    /// let odds = Seq::iterate(0, |n: &u32| n + 1).filter(|n| n % 2 == 1);
    ///
    /// assert_eq!(odds.take(3), vec![1, 3, 5]);
    /// ```
    pub fn filter<P>(&self, p: P) -> Self
    where
        P: Fn(&X) -> bool + 'a,
    {
        let parent = self.generator.clone();
        let p = Rc::new(p);
        Self::from_factory(move || Cursor::new(Filter::new(parent.cursor(), Rc::clone(&p))))
    }

    /// Keep only the elements satisfying a predicate on the element and its position.
    ///
    /// The position counts all elements examined so far, accepted or not.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazyseq::Seq;
    ///
    /// let letters = Seq::from_iterable('a'..='z');
    ///
    /// assert_eq!(letters.filter_indexed(|_, i| i % 5 == 0).take(3), vec!['a', 'f', 'k']);
    /// ```
    pub fn filter_indexed<P>(&self, p: P) -> Self
    where
        P: Fn(&X, usize) -> bool + 'a,
    {
        let parent = self.generator.clone();
        let p = Rc::new(p);
        Self::from_factory(move || Cursor::new(FilterIndexed::new(parent.cursor(), Rc::clone(&p))))
    }

    /// Keep only the elements satisfying a predicate on the element and the elements accepted before it.
    ///
    /// The accepted elements are handed to `p` in the order they were emitted.
    /// They are kept for as long as one realization runs, so memory grows with the number of accepted elements.
    pub fn filter_dependent<P>(&self, p: P) -> Self
    where
        X: Clone,
        P: Fn(&X, &[X]) -> bool + 'a,
    {
        let parent = self.generator.clone();
        let p = Rc::new(p);
        Self::from_factory(move || {
            Cursor::new(FilterDependent::new(parent.cursor(), Rc::clone(&p)))
        })
    }

    /// Replace each element with a finite collection and concatenate the collections.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazyseq::Seq;
    ///
    /// let staircase = Seq::iterate(1, |n: &usize| n + 1).flat_map(|n| vec![n; n]);
    ///
    /// assert_eq!(staircase.take(6), vec![1, 2, 2, 3, 3, 3]);
    /// ```
    pub fn flat_map<C, F>(&self, f: F) -> Seq<'a, C::Item>
    where
        C: IntoIterator,
        C::IntoIter: 'a,
        C::Item: 'a,
        F: Fn(X) -> C + 'a,
    {
        let parent = self.generator.clone();
        let f = Rc::new(f);
        Seq::from_factory(move || {
            Cursor::new(FlatMap::<_, _, C::IntoIter>::new(parent.cursor(), Rc::clone(&f)))
        })
    }

    /// Keep the elements up to (excluding) the first one not satisfying a predicate.
    pub fn take_while<P>(&self, p: P) -> Self
    where
        P: Fn(&X) -> bool + 'a,
    {
        let parent = self.generator.clone();
        let p = Rc::new(p);
        Self::from_factory(move || Cursor::new(TakeWhile::new(parent.cursor(), Rc::clone(&p))))
    }

    /// Accumulate the elements, emitting the accumulator after each one.
    /// - `init` is the initial accumulator (not emitted itself).
    /// - `f` combines the accumulator with the next element.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazyseq::Seq;
    ///
    /// let triangular = Seq::iterate(1, |n: &u32| n + 1).scan(0, |sum, n| sum + n);
    ///
    /// assert_eq!(triangular.take(4), vec![1, 3, 6, 10]);
    /// ```
    pub fn scan<S, F>(&self, init: S, f: F) -> Seq<'a, S>
    where
        S: Clone + 'a,
        F: Fn(&S, X) -> S + 'a,
    {
        let parent = self.generator.clone();
        let f = Rc::new(f);
        Seq::from_factory(move || {
            Cursor::new(Scan::new(parent.cursor(), Rc::clone(&f), init.clone()))
        })
    }

    /// Pair up the elements of `self` and `other` position by position.
    ///
    /// The result ends as soon as one of both ends.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazyseq::Seq;
    ///
    /// let names = Seq::from_iterable(vec!["a", "b", "c"]);
    /// let naturals = Seq::iterate(0, |n: &u32| n + 1);
    ///
    /// assert_eq!(names.zip(&naturals).take(10), vec![("a", 0), ("b", 1), ("c", 2)]);
    /// ```
    pub fn zip<Y: 'a>(&self, other: &Seq<'a, Y>) -> Seq<'a, (X, Y)> {
        let left = self.generator.clone();
        let right = other.generator.clone();
        Seq::from_factory(move || Cursor::new(Zip::new(left.cursor(), right.cursor())))
    }

    /// Alternate between the elements of `self` and `other`, starting with `self`.
    ///
    /// The result ends as soon as the sequence whose turn it is ends.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazyseq::Seq;
    ///
    /// let ones = Seq::iterate(1, |n: &u32| n + 1);
    /// let tens = Seq::iterate(10, |n: &u32| n + 10);
    ///
    /// assert_eq!(ones.intersperse(&tens).take(6), vec![1, 10, 2, 20, 3, 30]);
    /// ```
    pub fn intersperse(&self, other: &Self) -> Self {
        let first = self.generator.clone();
        let second = other.generator.clone();
        Self::from_factory(move || Cursor::new(Intersperse::new(first.cursor(), second.cursor())))
    }
}

impl<'a, X: 'a> Seq<'a, X> {
    /// Realize the first `n` elements of `self`.
    ///
    /// If `self` ends before `n` elements are produced, only the elements actually produced are returned.
    /// This is no error (as opposed to [`nth`](`Seq::nth`)).
    ///
    /// # Examples
    ///
    /// ```
    /// use lazyseq::Seq;
    ///
    /// assert_eq!(Seq::iterate(0, |n: &u8| n + 1).take(3), vec![0, 1, 2]);
    /// assert_eq!(Seq::from_iterable(vec![1, 2]).take(3), vec![1, 2]);
    /// ```
    pub fn take(&self, n: usize) -> Vec<X> {
        let values: Vec<X> = self.cursor().take(n).collect();
        tracing::trace!(requested = n, realized = values.len(), "take");
        values
    }

    /// The same as [`take`](`Seq::take`) but accepting any integer as count.
    ///
    /// # Errors
    ///
    /// [`SeqError::InvalidArgument`] if `n` is negative or too large for `usize`; nothing is pulled then.
    pub fn try_take<N>(&self, n: N) -> Result<Vec<X>, SeqError>
    where
        N: TryInto<usize> + Display + Copy,
    {
        let n = error::count("n", n)?;
        Ok(self.take(n))
    }

    /// Realize the element at position `n` (counting from `0`).
    ///
    /// # Errors
    ///
    /// [`SeqError::OutOfRange`] if `self` has no more than `n` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazyseq::{Seq, SeqError};
    ///
    /// assert_eq!(Seq::iterate(0, |n: &u8| n + 1).nth(5), Ok(5));
    /// assert_eq!(
    ///     Seq::from_iterable(vec![1, 2, 3]).nth(5),
    ///     Err(SeqError::OutOfRange { index: 5, len: 3 })
    /// );
    /// ```
    pub fn nth(&self, n: usize) -> Result<X, SeqError> {
        let mut cursor = self.cursor();
        let mut len = 0;
        while let Some(x) = cursor.pull() {
            if len == n {
                tracing::trace!(index = n, "nth");
                return Ok(x);
            }
            len += 1;
        }
        tracing::debug!(index = n, len, "index out of range");
        Err(SeqError::OutOfRange { index: n, len })
    }

    /// The same as [`nth`](`Seq::nth`) but accepting any integer as index.
    ///
    /// # Errors
    ///
    /// [`SeqError::InvalidArgument`] if `n` is negative or too large for `usize`.
    /// [`SeqError::OutOfRange`] if `self` has no more than `n` elements.
    pub fn try_nth<N>(&self, n: N) -> Result<X, SeqError>
    where
        N: TryInto<usize> + Display + Copy,
    {
        self.nth(error::count("n", n)?)
    }

    /// Realize the first element.
    ///
    /// # Errors
    ///
    /// [`SeqError::OutOfRange`] if `self` is empty.
    pub fn first(&self) -> Result<X, SeqError> {
        self.nth(0)
    }

    /// Create the sequence of all but the first `n` elements of `self`.
    ///
    /// Nothing is pulled now: every realization of the result drops the prefix from a fresh cursor over `self` again.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazyseq::Seq;
    ///
    /// let naturals = Seq::iterate(0, |n: &u8| n + 1);
    ///
    /// assert_eq!(naturals.skip(3).take(3), vec![3, 4, 5]);
    /// assert_eq!(naturals.take(1), vec![0]);
    /// ```
    pub fn skip(&self, n: usize) -> Self {
        let parent = self.generator.clone();
        Self::from_factory(move || Cursor::new(Skip::new(parent.cursor(), n)))
    }

    /// The same as [`skip`](`Seq::skip`) but accepting any integer as count.
    ///
    /// # Errors
    ///
    /// [`SeqError::InvalidArgument`] if `n` is negative or too large for `usize`.
    pub fn try_skip<N>(&self, n: N) -> Result<Self, SeqError>
    where
        N: TryInto<usize> + Display + Copy,
    {
        Ok(self.skip(error::count("n", n)?))
    }

    /// Realize the first `n` elements of `self` and return them together with the sequence of the remaining ones.
    ///
    /// The continuation is the same as `self.skip(n)`: it does not resume the cursor used here but re-derives the dropped prefix on each of its realizations.
    pub fn take_continuous(&self, n: usize) -> (Vec<X>, Self) {
        (self.take(n), self.skip(n))
    }

    /// The same as [`take_continuous`](`Seq::take_continuous`) but accepting any integer as count.
    ///
    /// # Errors
    ///
    /// [`SeqError::InvalidArgument`] if `n` is negative or too large for `usize`.
    pub fn try_take_continuous<N>(&self, n: N) -> Result<(Vec<X>, Self), SeqError>
    where
        N: TryInto<usize> + Display + Copy,
    {
        Ok(self.take_continuous(error::count("n", n)?))
    }

    /// Split `self` into its first element and the sequence of the remaining ones or return `None` if `self` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazyseq::Seq;
    ///
    /// let (head, tail) = Seq::constant('x').uncons().unwrap();
    /// assert_eq!(head, 'x');
    /// assert_eq!(tail.take(2), vec!['x', 'x']);
    ///
    /// assert!(Seq::<u8>::empty().uncons().is_none());
    /// ```
    pub fn uncons(&self) -> Option<(X, Self)> {
        let head = self.cursor().pull()?;
        Some((head, self.skip(1)))
    }

    /// Realize the first element satisfying a predicate, if any.
    ///
    /// On an infinite sequence without such element this does not terminate.
    pub fn find<P>(&self, p: P) -> Option<X>
    where
        P: FnMut(&X) -> bool,
    {
        self.cursor().find(p)
    }
}

impl<'s, 'a, X> IntoIterator for &'s Seq<'a, X> {
    type Item = X;
    type IntoIter = Cursor<'a, X>;

    /// Instantiate a fresh cursor over the sequence.
    fn into_iter(self) -> Cursor<'a, X> {
        self.generator.cursor()
    }
}
