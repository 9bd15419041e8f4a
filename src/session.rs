//! One user session: a store wired to its effect dispatcher.

use std::sync::Arc;

use tokio::sync::watch;

use crate::config::EngineConfig;
use crate::mvi::FanOut;
use crate::root::{
    Collaborators, EffDispatcher, HostCommand, Msg, Notification, RootState, RootStore,
};

/// Everything a UI surface needs: state, intake, and the two fan-out channels.
///
/// Must be started inside a Tokio runtime. Dropping the session stops its
/// fold loop.
pub struct Session {
    store: RootStore,
    notifications: FanOut<Notification>,
    host_commands: FanOut<HostCommand>,
}

impl Session {
    pub fn start(
        config: &EngineConfig,
        collaborators: Collaborators,
        initial: Option<RootState>,
    ) -> Self {
        let (dispatcher, notifications, host_commands) = EffDispatcher::new(config, collaborators);
        let store = RootStore::spawn(Arc::new(dispatcher), initial);

        tracing::info!(
            "Session started on '{}' (cart: {})",
            store.current_state().current_route(),
            store.current_state().cart_count()
        );

        Self {
            store,
            notifications,
            host_commands,
        }
    }

    pub fn submit(&self, msg: impl Into<Msg>) {
        self.store.submit(msg);
    }

    pub fn current_state(&self) -> RootState {
        self.store.current_state()
    }

    pub fn subscribe(&self) -> watch::Receiver<RootState> {
        self.store.subscribe()
    }

    /// Notifications for the UI surface. Clones share one queue; a full
    /// queue that nobody drains holds up the handler that emits.
    pub fn notifications(&self) -> FanOut<Notification> {
        self.notifications.clone()
    }

    pub fn host_commands(&self) -> FanOut<HostCommand> {
        self.host_commands.clone()
    }

    pub fn store(&self) -> &RootStore {
        &self.store
    }

    /// Stop the fold loop and return the last published state.
    pub async fn shutdown(self) -> RootState {
        self.store.shutdown().await;
        let state = self.store.current_state();
        tracing::info!("Session ended on '{}'", state.current_route());
        state
    }
}
