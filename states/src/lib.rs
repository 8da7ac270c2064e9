//! Single-threaded state store for the profiles UI.
//!
//! States are plain values. Computes are cached values that only commands write,
//! posting replacements back through an [`Updater`].

mod basic_state;
mod command;
mod compute;
mod ctx;
mod dep;
mod error;
mod query;
mod state;
mod task;
mod updater;

pub use basic_state::Time;
pub use command::Command;
pub use compute::{Compute, assign_impl};
pub use ctx::StateCtx;
pub use dep::Dep;
pub use error::Error;
pub use query::{QueryState, QueryStatus};
pub use state::{State, state_assign_impl};
pub use task::{TaskHandle, TaskId};
pub use updater::{Updater, Waker};
