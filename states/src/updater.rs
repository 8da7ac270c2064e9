use std::{
    any::{Any, TypeId, type_name},
    fmt::{Debug, Formatter},
    sync::Arc,
};

use flume::Sender;
use log::debug;

/// Callback used to ask the UI for another frame once new data is posted.
pub type Waker = Arc<dyn Fn() + Send + Sync>;

pub(crate) type Update = (TypeId, Box<dyn Any + Send>);

/// Posts replacement values for states and computes back to the owning context.
///
/// Cheap to clone and `Send`, so it can be moved into an HTTP callback. If the
/// context has been dropped by the time a value is posted, the value is discarded.
#[derive(Clone)]
pub struct Updater {
    send: Sender<Update>,
    waker: Option<Waker>,
}

impl Debug for Updater {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Updater")
            .field("has_waker", &self.waker.is_some())
            .finish()
    }
}

impl Updater {
    pub(crate) fn new(send: Sender<Update>, waker: Option<Waker>) -> Self {
        Self { send, waker }
    }

    pub fn set<T: Any + Send>(&self, value: T) {
        if self.send.send((TypeId::of::<T>(), Box::new(value))).is_err() {
            debug!("Dropped update for {}: state context is gone", type_name::<T>());
            return;
        }
        if let Some(wake) = &self.waker {
            wake();
        }
    }
}
