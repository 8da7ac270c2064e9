use std::{any::Any, sync::Arc};

use profiles_states::{State, state_assign_impl};

use crate::{EhttpFetcher, FetchService};

/// The HTTP service shared by every users source of a context.
#[derive(Debug, Clone)]
pub struct FetchState {
    pub inner: Arc<dyn FetchService>,
}

impl FetchState {
    pub fn new(inner: Arc<dyn FetchService>) -> Self {
        Self { inner }
    }
}

impl Default for FetchState {
    fn default() -> Self {
        Self::new(Arc::new(EhttpFetcher))
    }
}

impl State for FetchState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}
