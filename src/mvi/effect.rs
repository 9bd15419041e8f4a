//! Effects and effect handlers.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::commit::Commit;

/// Marker trait for effect descriptions.
///
/// A reducer emits effects as a set: unordered and duplicate-free.
pub trait Effect: Debug + Clone + PartialEq + Eq + Hash + Send + 'static {}

/// The set of effects produced by one reduction.
pub type Effects<E> = HashSet<E>;

/// Executes one effect and feeds results back through `commit`.
///
/// Handlers run concurrently with each other and with the fold loop;
/// they must never block it.
#[async_trait]
pub trait EffectHandler<E, M>: Send + Sync {
    /// Scope the effect belongs to, resolved on the fold loop before the
    /// effect is spawned. The store binds the effect's [`Commit`] to it.
    fn bind_scope(&self, _effect: &E) -> Option<CancellationToken> {
        None
    }

    async fn handle(&self, effect: E, commit: Commit<M>);
}
