//! This module provides a replay buffer turning a single-use producer into a re-invocable one.
//!
//! Every element pulled from the producer is memoized, so cursors which come later replay what earlier ones already pulled and only advance the producer beyond that.

use super::Cursor;

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;

use core::cell::RefCell;

/// [`Replay<X>`] is the state shared by all cursors over the same single-use producer.
pub(crate) struct Replay<'a, X> {
    /// elements pulled so far, in order
    memo: Vec<X>,
    /// the producer or `None` once it is exhausted
    producer: Option<Box<dyn Iterator<Item = X> + 'a>>,
}

impl<'a, X> Replay<'a, X> {
    pub(crate) fn shared<I>(producer: I) -> Rc<RefCell<Self>>
    where
        I: Iterator<Item = X> + 'a,
    {
        Rc::new(RefCell::new(Self {
            memo: Vec::new(),
            producer: Some(Box::new(producer)),
        }))
    }

    /// Get the element at `position`, advancing the producer if it has not been reached yet.
    fn get(&mut self, position: usize) -> Option<X>
    where
        X: Clone,
    {
        while self.memo.len() <= position {
            let x = self.producer.as_mut()?.next();
            match x {
                Some(x) => self.memo.push(x),
                None => {
                    tracing::trace!(memoized = self.memo.len(), "replayed producer exhausted");
                    self.producer = None;
                    return None;
                }
            }
        }
        Some(self.memo[position].clone())
    }
}

/// [`Replaying<X>`] is one traversal over a [`Replay<X>`].
pub(crate) struct Replaying<'a, X> {
    replay: Rc<RefCell<Replay<'a, X>>>,
    position: usize,
}

impl<'a, X> Replaying<'a, X> {
    pub(crate) fn cursor(replay: &Rc<RefCell<Replay<'a, X>>>) -> Cursor<'a, X>
    where
        X: Clone + 'a,
    {
        Cursor::new(Self {
            replay: Rc::clone(replay),
            position: 0,
        })
    }
}

impl<'a, X: Clone> Iterator for Replaying<'a, X> {
    type Item = X;

    fn next(&mut self) -> Option<X> {
        let x = self.replay.borrow_mut().get(self.position)?;
        self.position += 1;
        Some(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::vec;

    #[test]
    fn test_replay_memoizes() {
        let pulls = Rc::new(RefCell::new(0));
        let counted = Rc::clone(&pulls);
        let replay = Replay::shared((0..).inspect(move |_| *counted.borrow_mut() += 1));

        let first: Vec<_> = Replaying::cursor(&replay).take(3).collect();
        let second: Vec<_> = Replaying::cursor(&replay).take(5).collect();

        assert_eq!(first, vec![0, 1, 2]);
        assert_eq!(second, vec![0, 1, 2, 3, 4]);
        assert_eq!(*pulls.borrow(), 5);
    }

    #[test]
    fn test_replay_interleaved_cursors() {
        let replay = Replay::shared([10, 20, 30].into_iter());

        let mut first = Replaying::cursor(&replay);
        let mut second = Replaying::cursor(&replay);

        assert_eq!(first.pull(), Some(10));
        assert_eq!(first.pull(), Some(20));
        assert_eq!(second.pull(), Some(10));
        assert_eq!(first.pull(), Some(30));
        assert_eq!(first.pull(), None);
        assert_eq!(second.pull(), Some(20));
        assert_eq!(second.pull(), Some(30));
        assert_eq!(second.pull(), None);
    }
}
