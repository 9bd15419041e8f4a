//! Write-only handle into a store's mutation intake.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Fire-and-forget sender of messages into the fold loop.
///
/// A commit may be bound to a cancellation scope; once the scope is
/// cancelled every later `send` is dropped, so abandoned work can never
/// mutate state.
pub struct Commit<M> {
    sender: mpsc::UnboundedSender<M>,
    scope: Option<CancellationToken>,
}

impl<M> Clone for Commit<M> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            scope: self.scope.clone(),
        }
    }
}

impl<M: Send + 'static> Commit<M> {
    pub fn new(sender: mpsc::UnboundedSender<M>) -> Self {
        Self {
            sender,
            scope: None,
        }
    }

    /// Create a commit together with the receiving end of its intake.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<M>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::new(sender), receiver)
    }

    /// Returns a copy of this commit that stops delivering once `scope` is cancelled.
    pub fn scoped(&self, scope: CancellationToken) -> Self {
        Self {
            sender: self.sender.clone(),
            scope: Some(scope),
        }
    }

    /// Enqueue a message. Returns `false` if it was dropped.
    pub fn send(&self, msg: M) -> bool {
        if self.is_cancelled() {
            tracing::trace!("Commit dropped: scope cancelled");
            return false;
        }
        if self.sender.send(msg).is_err() {
            tracing::trace!("Commit dropped: intake closed");
            return false;
        }
        true
    }

    /// The cancellation scope this commit is bound to, if any.
    pub fn scope(&self) -> Option<&CancellationToken> {
        self.scope.as_ref()
    }

    pub fn is_cancelled(&self) -> bool {
        self.scope
            .as_ref()
            .map(CancellationToken::is_cancelled)
            .unwrap_or(false)
    }
}
