use std::any::Any;

use crate::{Dep, Updater};

/// A side effect (usually network IO) run on explicit request.
///
/// Commands never mutate the context directly. They read a [`Dep`] snapshot and
/// post results with the [`Updater`], which `StateCtx::sync_computes` applies on
/// the next frame.
pub trait Command: Any {
    fn run(&self, deps: Dep, updater: Updater);
}
