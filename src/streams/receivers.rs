//! This module provides a source of elements backed by receivers of messages.
//! Receiving blocks until a message arrives; the source is exhausted once all senders are gone and the channel is drained.

use crossbeam::channel::Receiver;

/// [`Messages<X>`] abstracts receivers of messages of type `X` as a single-use producer.
pub(crate) struct Messages<X> {
    /// receiver of messages
    receiver: Receiver<X>,
    /// number of messages received so far
    received: usize,
}

impl<X> Messages<X> {
    pub(crate) fn new(receiver: Receiver<X>) -> Self {
        Self {
            receiver,
            received: 0,
        }
    }
}

impl<X> Iterator for Messages<X> {
    type Item = X;

    /// Receive the next message, blocking the current thread until there is one.
    fn next(&mut self) -> Option<X> {
        match self.receiver.recv() {
            Ok(x) => {
                self.received += 1;
                Some(x)
            }
            Err(_) => {
                tracing::debug!(received = self.received, "channel disconnected");
                None
            }
        }
    }
}
