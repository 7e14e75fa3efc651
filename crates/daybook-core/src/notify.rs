//! Opt-in change subscriptions.
//!
//! Services that expose observable state keep a `Subscribers` list and call
//! `broadcast` after each change. Consumers receive snapshots over a standard
//! channel; dropping the receiver unsubscribes.

use std::sync::mpsc::{channel, Receiver, Sender};

/// A list of channel subscribers for snapshots of type `T`.
#[derive(Debug)]
pub struct Subscribers<T> {
    senders: Vec<Sender<T>>,
}

impl<T: Clone> Subscribers<T> {
    pub fn new() -> Self {
        Self {
            senders: Vec::new(),
        }
    }

    /// Register a new subscriber.
    pub fn subscribe(&mut self) -> Receiver<T> {
        let (tx, rx) = channel();
        self.senders.push(tx);
        rx
    }

    /// Send `value` to every live subscriber, dropping disconnected ones.
    pub fn broadcast(&mut self, value: &T) {
        self.senders.retain(|tx| tx.send(value.clone()).is_ok());
    }
}

impl<T: Clone> Default for Subscribers<T> {
    fn default() -> Self {
        Self::new()
    }
}
