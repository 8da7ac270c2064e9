use std::any::{Any, type_name};

use log::warn;

/// A cached value readable with [`crate::StateCtx::cached`].
///
/// Computes are never mutated in place: a [`crate::Command`] posts a replacement
/// through its [`crate::Updater`] and `StateCtx::sync_computes` assigns it.
pub trait Compute: Any {
    fn as_any(&self) -> &dyn Any;

    /// A `Send` copy handed to commands through [`crate::Dep`], so a command can
    /// build the next value from the current one.
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Shared `assign_box` body for `Compute` implementors.
pub fn assign_impl<T: Compute>(target: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *target = *value,
        Err(_) => warn!("Ignored compute update with mismatched type for {}", type_name::<T>()),
    }
}
