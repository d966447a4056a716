//! This module defines the pull-cursor protocol sequences are realized through.
//! Additionally, it declares modules with sources which lift single-use producers into sequences.
//!
//! A [`Generator`] is a re-invocable producer factory: every call of [`Generator::cursor`] hands out a brand-new [`Cursor`] starting at position `0`.
//! A [`Cursor`] is the ephemeral, stateful end of the protocol: one [`pull`](`Cursor::pull`) yields at most one element.

pub(crate) mod replay;

#[cfg(feature = "std")]
pub(crate) mod receivers;

use alloc::boxed::Box;
use alloc::rc::Rc;

use core::fmt;

/// [`Factory<X>`] types the closures behind a [`Generator<X>`].
pub(crate) type Factory<'a, X> = dyn Fn() -> Cursor<'a, X> + 'a;

/// [`Cursor<X>`] is a single traversal over a sequence of `X`.
///
/// It is owned exclusively by whoever instantiated it and is never handed out twice.
/// Once it reports exhaustion it keeps doing so: the producer behind it is dropped on the first `None`.
pub struct Cursor<'a, X> {
    producer: Option<Box<dyn Iterator<Item = X> + 'a>>,
}

impl<'a, X> Cursor<'a, X> {
    /// Wrap an iterator into a cursor.
    pub fn new<I>(producer: I) -> Self
    where
        I: Iterator<Item = X> + 'a,
    {
        Self {
            producer: Some(Box::new(producer)),
        }
    }

    /// A cursor which is exhausted from the start.
    pub fn exhausted() -> Self {
        Self { producer: None }
    }

    /// Advance `self` by one element.
    ///
    /// `Some(x)` means there is a value, `None` means `self` is exhausted now and forever.
    ///
    /// Note that pulling from a filtering cursor may never return if no further element passes the filter.
    pub fn pull(&mut self) -> Option<X> {
        let x = self.producer.as_mut()?.next();
        if x.is_none() {
            self.producer = None;
        }
        x
    }

    /// Check whether `self` has already reported exhaustion.
    pub fn is_exhausted(&self) -> bool {
        self.producer.is_none()
    }
}

impl<'a, X> Iterator for Cursor<'a, X> {
    type Item = X;

    fn next(&mut self) -> Option<X> {
        self.pull()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.producer {
            Some(producer) => producer.size_hint(),
            None => (0, Some(0)),
        }
    }
}

impl<'a, X> core::iter::FusedIterator for Cursor<'a, X> {}

impl<'a, X> fmt::Debug for Cursor<'a, X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("exhausted", &self.is_exhausted())
            .finish()
    }
}

/// [`Generator<X>`] is the producer factory of a sequence of `X`.
///
/// Cloning a generator is cheap and yields a handle to the same factory.
pub struct Generator<'a, X> {
    factory: Rc<Factory<'a, X>>,
}

impl<'a, X> Generator<'a, X> {
    pub(crate) fn new(factory: Rc<Factory<'a, X>>) -> Self {
        Self { factory }
    }

    /// Instantiate a fresh cursor starting at position `0`.
    ///
    /// # Examples
    ///
    /// Stepping through the natural numbers by hand:
    ///
    /// ```
    /// use lazyseq::Seq;
    ///
    /// let naturals = Seq::iterate(0, |n: &u64| n + 1).to_generator();
    ///
    /// let mut cursor = naturals.cursor();
    /// assert_eq!(cursor.pull(), Some(0));
    /// assert_eq!(cursor.pull(), Some(1));
    ///
    /// // other cursors are not affected
    /// assert_eq!(naturals.cursor().pull(), Some(0));
    /// ```
    pub fn cursor(&self) -> Cursor<'a, X> {
        (self.factory)()
    }
}

impl<'a, X> Clone for Generator<'a, X> {
    fn clone(&self) -> Self {
        Self {
            factory: Rc::clone(&self.factory),
        }
    }
}

impl<'a, X> fmt::Debug for Generator<'a, X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Generator(..)")
    }
}
