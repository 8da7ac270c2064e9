//! Identity and cancellation for fire-and-forget fetches.
//!
//! A `TaskHandle` pairs a [`TaskId`] with a `tokio_util` [`CancellationToken`].
//! The owner keeps the handle; the async callback keeps a clone of the token and
//! the id. When the callback finishes it checks both: a cancelled token or an id
//! that is no longer the owner's current one means the result is stale and must
//! be dropped.
//!
//! ```ignore
//! let handle = TaskHandle::new(TaskId::new(TypeId::of::<MySource>(), 1), CancellationToken::new());
//! let token = handle.cancellation_token();
//! spawn_fetch(move |result| {
//!     if token.is_cancelled() {
//!         return;
//!     }
//!     publish(result);
//! });
//! handle.cancel();
//! ```

use std::any::TypeId;

use tokio_util::sync::CancellationToken;

/// The `TypeId` of the spawning owner plus a generation counter.
///
/// Two ids with the same type but different generations belong to successive
/// fetches of the same owner; only the newest one may publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    type_id: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(type_id: TypeId, generation: u64) -> Self {
        Self {
            type_id,
            generation,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The id the owner's next fetch will carry.
    pub fn next(&self) -> Self {
        Self::new(self.type_id, self.generation + 1)
    }
}

/// Owner-side handle of a spawned fetch.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Clone of the token to move into the async callback.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    /// Cooperative: the callback observes it the next time it checks the token.
    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}
