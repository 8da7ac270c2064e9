use std::any::{Any, type_name};

use log::warn;

/// A plain value stored in [`crate::StateCtx`].
///
/// States are mutated in place by the UI thread, or replaced wholesale by an
/// [`crate::Updater`] posted from a command callback.
pub trait State: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// A `Send` copy handed to commands through [`crate::Dep`].
    ///
    /// States that commands never read can keep the default.
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Shared `assign_box` body for `State` implementors.
pub fn state_assign_impl<T: State>(target: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *target = *value,
        Err(_) => warn!("Ignored state update with mismatched type for {}", type_name::<T>()),
    }
}
