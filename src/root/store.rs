//! Single-writer store: folds messages into [`RootState`] one at a time.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::mvi::{Commit, EffectHandler, Effects, Reducer};

use super::effect::{Eff, HostCommand};
use super::intent::Msg;
use super::reducer::RootReducer;
use super::state::{Route, RootState};

/// Owns the fold loop for one session.
///
/// Messages submitted through [`submit`](Self::submit) are folded strictly
/// in submission order. Every resulting state is published before its
/// effects are dispatched; effects run on their own tasks and never hold
/// up the loop.
pub struct RootStore {
    intake: Commit<Msg>,
    state: watch::Receiver<RootState>,
    shutdown: CancellationToken,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl RootStore {
    /// Start the fold loop on the current runtime.
    ///
    /// `initial` seeds the loop (fresh state when `None`); the root initial
    /// effects are dispatched either way.
    pub fn spawn(handler: Arc<dyn EffectHandler<Eff, Msg>>, initial: Option<RootState>) -> Self {
        let state = initial.unwrap_or_default();
        let (intake, receiver) = Commit::channel();
        let (publisher, subscriber) = watch::channel(state.clone());
        let shutdown = CancellationToken::new();

        let fold = FoldLoop {
            state,
            receiver,
            publisher,
            handler,
            commit: intake.clone(),
            shutdown: shutdown.clone(),
        };
        let task = tokio::spawn(fold.run(RootState::initial_effects()));

        Self {
            intake,
            state: subscriber,
            shutdown,
            task: Mutex::new(Some(task)),
        }
    }

    /// Latest published state. Never blocks on the fold loop.
    pub fn current_state(&self) -> RootState {
        self.state.borrow().clone()
    }

    /// Stream of published states.
    pub fn subscribe(&self) -> watch::Receiver<RootState> {
        self.state.clone()
    }

    /// Enqueue a message. Returns immediately.
    pub fn submit(&self, msg: impl Into<Msg>) {
        if !self.intake.send(msg.into()) {
            tracing::debug!("Store stopped, message dropped");
        }
    }

    /// A commit handle into this store's intake.
    pub fn commit(&self) -> Commit<Msg> {
        self.intake.clone()
    }

    /// Whether the fold loop is still accepting messages.
    pub fn is_running(&self) -> bool {
        self.task
            .lock()
            .as_ref()
            .map(|task| !task.is_finished())
            .unwrap_or(false)
    }

    /// Stop the fold loop and wait for it to exit.
    pub async fn shutdown(&self) {
        self.shutdown.cancel();
        let task = self.task.lock().take();
        if let Some(task) = task {
            if let Err(e) = task.await {
                tracing::error!("Fold loop ended abnormally: {}", e);
            }
        }
    }
}

impl Drop for RootStore {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

struct FoldLoop {
    state: RootState,
    receiver: mpsc::UnboundedReceiver<Msg>,
    publisher: watch::Sender<RootState>,
    handler: Arc<dyn EffectHandler<Eff, Msg>>,
    commit: Commit<Msg>,
    shutdown: CancellationToken,
}

impl FoldLoop {
    async fn run(mut self, initial_effects: Effects<Eff>) {
        tracing::debug!("Fold loop started on '{}'", self.state.current_route());
        self.dispatch(initial_effects).await;

        loop {
            let msg = tokio::select! {
                biased;
                _ = self.shutdown.cancelled() => break,
                msg = self.receiver.recv() => match msg {
                    Some(msg) => msg,
                    None => break,
                },
            };

            match self.fold(msg) {
                Some(effects) => self.dispatch(effects).await,
                None => {
                    self.dispatch(Effects::from([Eff::Host(HostCommand::Finish)]))
                        .await;
                    break;
                }
            }
        }

        tracing::debug!("Fold loop stopped");
    }

    /// Reduce one message and publish the result. `None` means the reducer
    /// faulted and the session cannot continue.
    fn fold(&mut self, msg: Msg) -> Option<Effects<Eff>> {
        let previous = self.state.clone();
        let label = format!("{msg:?}");

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            RootReducer::reduce(previous, msg)
        }));

        let (next, effects) = match outcome {
            Ok(outcome) => outcome,
            Err(_) => {
                tracing::error!("Reducer fault on {}; finishing session", label);
                return None;
            }
        };

        tracing::debug!(
            msg = %label,
            delta = ?describe_delta(&self.state, &next),
            effects = ?effects,
            "Folded"
        );

        self.state = next.clone();
        self.publisher.send_replace(next);
        Some(effects)
    }

    /// Run teardown effects to completion, then spawn the rest.
    ///
    /// Scopes are bound here, on the loop, so a teardown folded later
    /// cancels every effect of the visit it ends even if those effects
    /// have not started running yet.
    async fn dispatch(&self, effects: Effects<Eff>) {
        let (teardown, rest): (Vec<Eff>, Vec<Eff>) =
            effects.into_iter().partition(Eff::is_teardown);

        for effect in teardown {
            self.handler.handle(effect, self.commit.clone()).await;
        }

        for effect in rest {
            let handler = Arc::clone(&self.handler);
            let commit = match handler.bind_scope(&effect) {
                Some(scope) => self.commit.scoped(scope),
                None => self.commit.clone(),
            };
            tokio::spawn(async move { handler.handle(effect, commit).await });
        }
    }
}

/// Names of the parts of the state that differ.
fn describe_delta(previous: &RootState, next: &RootState) -> Vec<String> {
    let mut changed = Vec::new();
    if previous.current_route != next.current_route {
        changed.push(format!("route->{}", next.current_route));
    }
    if previous.backstack.len() != next.backstack.len() {
        changed.push(format!("backstack={}", next.backstack.len()));
    }
    if previous.cart_count != next.cart_count {
        changed.push(format!("cart_count={}", next.cart_count));
    }
    for route in [Route::Dishes, Route::Dish, Route::Cart] {
        if previous.screens.get(&route) != next.screens.get(&route) {
            changed.push(format!("screen:{route}"));
        }
    }
    changed
}
