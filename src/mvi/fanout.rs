//! Fan-out channel: each value reaches exactly one of the active consumers.

use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};

/// Create a bounded fan-out channel.
///
/// Senders wait when the buffer is full, so a slow UI applies backpressure
/// to the effect handler that emits, never to the fold loop.
pub fn fan_out<T>(capacity: usize) -> (FanOutSender<T>, FanOut<T>) {
    let (sender, receiver) = mpsc::channel(capacity.max(1));
    (
        FanOutSender { sender },
        FanOut {
            receiver: Arc::new(Mutex::new(receiver)),
        },
    )
}

pub struct FanOutSender<T> {
    sender: mpsc::Sender<T>,
}

impl<T> Clone for FanOutSender<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Send> FanOutSender<T> {
    /// Emit a value. Returns `false` if every consumer is gone.
    pub async fn send(&self, value: T) -> bool {
        self.sender.send(value).await.is_ok()
    }
}

/// Subscription handle. Clones share one queue: a value is consumed once.
pub struct FanOut<T> {
    receiver: Arc<Mutex<mpsc::Receiver<T>>>,
}

impl<T> Clone for FanOut<T> {
    fn clone(&self) -> Self {
        Self {
            receiver: Arc::clone(&self.receiver),
        }
    }
}

impl<T: Send> FanOut<T> {
    /// Wait for the next value. `None` once all senders are dropped.
    pub async fn recv(&self) -> Option<T> {
        self.receiver.lock().await.recv().await
    }

    /// Take a value if one is immediately available.
    pub fn try_recv(&self) -> Option<T> {
        let mut receiver = self.receiver.try_lock().ok()?;
        receiver.try_recv().ok()
    }
}
