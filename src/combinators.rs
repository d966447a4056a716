//! This module defines the cursors which compose existing cursors into new ones.
//! In particular, there are source cursors to get a sequence off the ground.
//!
//! Every composed cursor owns the cursor(s) it delegates to plus whatever state one traversal needs (an index, the accepted history, the collection being drained).
//! That state is created together with the cursor and never shared, which is what keeps sequences built from these cursors pure.
//! The user-supplied closures on the other hand are shared (behind an [`Rc`]) between all cursors instantiated from the same sequence.

use alloc::rc::Rc;
use alloc::vec::Vec;

/// The cursor which applies a given closure to each element of its parent.
pub struct Map<I, F> {
    parent: I,
    f: Rc<F>,
}

impl<I, F> Map<I, F> {
    pub(crate) fn new(parent: I, f: Rc<F>) -> Self {
        Self { parent, f }
    }
}

impl<I, F, Y> Iterator for Map<I, F>
where
    I: Iterator,
    F: Fn(I::Item) -> Y,
{
    type Item = Y;

    fn next(&mut self) -> Option<Y> {
        self.parent.next().map(|x| (self.f)(x))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.parent.size_hint()
    }
}

/// The cursor which applies a given closure to each element of its parent together with the element's position.
pub struct MapIndexed<I, F> {
    parent: I,
    f: Rc<F>,
    index: usize,
}

impl<I, F> MapIndexed<I, F> {
    pub(crate) fn new(parent: I, f: Rc<F>) -> Self {
        Self {
            parent,
            f,
            index: 0,
        }
    }
}

impl<I, F, Y> Iterator for MapIndexed<I, F>
where
    I: Iterator,
    F: Fn(I::Item, usize) -> Y,
{
    type Item = Y;

    fn next(&mut self) -> Option<Y> {
        let x = self.parent.next()?;
        let y = (self.f)(x, self.index);
        self.index += 1;
        Some(y)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.parent.size_hint()
    }
}

/// The cursor which skips the elements of its parent not satisfying a given predicate.
///
/// Pulling from it does not return as long as its parent keeps producing elements which fail the predicate.
pub struct Filter<I, P> {
    parent: I,
    p: Rc<P>,
}

impl<I, P> Filter<I, P> {
    pub(crate) fn new(parent: I, p: Rc<P>) -> Self {
        Self { parent, p }
    }
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: Fn(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let x = self.parent.next()?;
            if (self.p)(&x) {
                return Some(x);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.parent.size_hint().1)
    }
}

/// The same as [`Filter`] but the predicate also sees the position of the element.
///
/// The position counts every element examined, not only the accepted ones.
pub struct FilterIndexed<I, P> {
    parent: I,
    p: Rc<P>,
    index: usize,
}

impl<I, P> FilterIndexed<I, P> {
    pub(crate) fn new(parent: I, p: Rc<P>) -> Self {
        Self {
            parent,
            p,
            index: 0,
        }
    }
}

impl<I, P> Iterator for FilterIndexed<I, P>
where
    I: Iterator,
    P: Fn(&I::Item, usize) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let x = self.parent.next()?;
            let index = self.index;
            self.index += 1;
            if (self.p)(&x, index) {
                return Some(x);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.parent.size_hint().1)
    }
}

/// The same as [`Filter`] but the predicate also sees all elements accepted so far, in the order they were emitted.
pub struct FilterDependent<I: Iterator, P> {
    parent: I,
    p: Rc<P>,
    accepted: Vec<I::Item>,
}

impl<I: Iterator, P> FilterDependent<I, P> {
    pub(crate) fn new(parent: I, p: Rc<P>) -> Self {
        Self {
            parent,
            p,
            accepted: Vec::new(),
        }
    }
}

impl<I, P> Iterator for FilterDependent<I, P>
where
    I: Iterator,
    I::Item: Clone,
    P: Fn(&I::Item, &[I::Item]) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let x = self.parent.next()?;
            if (self.p)(&x, &self.accepted) {
                self.accepted.push(x.clone());
                return Some(x);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.parent.size_hint().1)
    }
}

/// The cursor which replaces each element of its parent with a collection and drains that collection before moving on.
pub struct FlatMap<I, F, J> {
    parent: I,
    f: Rc<F>,
    inner: Option<J>,
}

impl<I, F, J> FlatMap<I, F, J> {
    pub(crate) fn new(parent: I, f: Rc<F>) -> Self {
        Self {
            parent,
            f,
            inner: None,
        }
    }
}

impl<I, F, C, J> Iterator for FlatMap<I, F, J>
where
    I: Iterator,
    F: Fn(I::Item) -> C,
    C: IntoIterator<IntoIter = J>,
    J: Iterator,
{
    type Item = J::Item;

    fn next(&mut self) -> Option<J::Item> {
        // loop in lieu of recursion as long runs of empty collections must not grow the stack
        loop {
            if let Some(inner) = &mut self.inner {
                if let Some(y) = inner.next() {
                    return Some(y);
                }
                self.inner = None;
            }
            let x = self.parent.next()?;
            self.inner = Some((self.f)(x).into_iter());
        }
    }
}

/// The cursor which emits the elements of its parent as long as they satisfy a given predicate and is exhausted from the first one which does not.
pub struct TakeWhile<I, P> {
    parent: Option<I>,
    p: Rc<P>,
}

impl<I, P> TakeWhile<I, P> {
    pub(crate) fn new(parent: I, p: Rc<P>) -> Self {
        Self {
            parent: Some(parent),
            p,
        }
    }
}

impl<I, P> Iterator for TakeWhile<I, P>
where
    I: Iterator,
    P: Fn(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let x = self.parent.as_mut()?.next();
        match x {
            Some(x) if (self.p)(&x) => Some(x),
            _ => {
                self.parent = None;
                None
            }
        }
    }
}

/// The cursor which emits the running accumulation of its parent's elements.
pub struct Scan<I, F, S> {
    parent: I,
    f: Rc<F>,
    state: S,
}

impl<I, F, S> Scan<I, F, S> {
    pub(crate) fn new(parent: I, f: Rc<F>, init: S) -> Self {
        Self {
            parent,
            f,
            state: init,
        }
    }
}

impl<I, F, S> Iterator for Scan<I, F, S>
where
    I: Iterator,
    F: Fn(&S, I::Item) -> S,
    S: Clone,
{
    type Item = S;

    fn next(&mut self) -> Option<S> {
        let x = self.parent.next()?;
        self.state = (self.f)(&self.state, x);
        Some(self.state.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.parent.size_hint()
    }
}

/// The cursor which pulls from two parents in lockstep and pairs up their elements.
///
/// It is exhausted as soon as one of its parents is; the element already pulled from the other one is discarded.
pub struct Zip<I, J> {
    left: I,
    right: J,
}

impl<I, J> Zip<I, J> {
    pub(crate) fn new(left: I, right: J) -> Self {
        Self { left, right }
    }
}

impl<I, J> Iterator for Zip<I, J>
where
    I: Iterator,
    J: Iterator,
{
    type Item = (I::Item, J::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let x = self.left.next()?;
        let y = self.right.next()?;
        Some((x, y))
    }
}

/// The cursor which alternates between its two parents, one element at a time and starting with the first.
///
/// It is exhausted as soon as the parent whose turn it is is.
pub struct Intersperse<I, J> {
    first: I,
    second: J,
    second_next: bool,
    exhausted: bool,
}

impl<I, J> Intersperse<I, J> {
    pub(crate) fn new(first: I, second: J) -> Self {
        Self {
            first,
            second,
            second_next: false,
            exhausted: false,
        }
    }
}

impl<I, J> Iterator for Intersperse<I, J>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.exhausted {
            return None;
        }
        let x = if self.second_next {
            self.second.next()
        } else {
            self.first.next()
        };
        match x {
            Some(_) => self.second_next = !self.second_next,
            None => self.exhausted = true,
        }
        x
    }
}

/// The cursor which discards a given number of elements of its parent before exposing the rest.
///
/// Discarding happens on the first pull, not when the cursor is constructed.
pub struct Skip<I> {
    parent: I,
    n: usize,
}

impl<I> Skip<I> {
    pub(crate) fn new(parent: I, n: usize) -> Self {
        Self { parent, n }
    }
}

impl<I: Iterator> Iterator for Skip<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        while self.n > 0 {
            self.n -= 1;
            self.parent.next()?;
        }
        self.parent.next()
    }
}

/// The source cursor which starts with a seed and repeatedly applies a step closure to obtain the next element.
///
/// The step is applied to the last emitted element only when the next one is pulled, so `k` pulls cost `k - 1` steps.
pub struct Iterate<X, F> {
    state: Option<IterateState<X>>,
    step: Rc<F>,
}

enum IterateState<X> {
    Seed(X),
    Emitted(X),
}

impl<X, F> Iterate<X, F> {
    pub(crate) fn new(seed: X, step: Rc<F>) -> Self {
        Self {
            state: Some(IterateState::Seed(seed)),
            step,
        }
    }
}

impl<X, F> Iterator for Iterate<X, F>
where
    X: Clone,
    F: Fn(&X) -> X,
{
    type Item = X;

    fn next(&mut self) -> Option<X> {
        let x = match self.state.take()? {
            IterateState::Seed(seed) => seed,
            IterateState::Emitted(last) => (self.step)(&last),
        };
        self.state = Some(IterateState::Emitted(x.clone()));
        Some(x)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// The source cursor which runs through a shared finite snapshot over and over again.
pub struct Cycle<X> {
    snapshot: Rc<[X]>,
    position: usize,
}

impl<X> Cycle<X> {
    pub(crate) fn new(snapshot: Rc<[X]>) -> Self {
        Self {
            snapshot,
            position: 0,
        }
    }
}

impl<X: Clone> Iterator for Cycle<X> {
    type Item = X;

    fn next(&mut self) -> Option<X> {
        if self.snapshot.is_empty() {
            return None;
        }
        let x = self.snapshot[self.position].clone();
        self.position = (self.position + 1) % self.snapshot.len();
        Some(x)
    }
}
