use std::{
    any::{Any, TypeId, type_name},
    collections::BTreeMap,
};

use crate::{Compute, Error, State};

/// Owned snapshot of the states and computes a command may read.
///
/// Built from [`State::snapshot`] and [`Compute::snapshot`] so it can travel to
/// an HTTP callback thread.
#[derive(Default)]
pub struct Dep {
    inner: BTreeMap<TypeId, Box<dyn Any + Send>>,
}

impl Dep {
    pub fn new(entries: impl Iterator<Item = (TypeId, Box<dyn Any + Send>)>) -> Self {
        Self {
            inner: entries.collect(),
        }
    }

    pub fn get_state_ref<T: State>(&self) -> Result<&T, Error> {
        self.get::<T>()
            .ok_or_else(|| Error::state_not_found(TypeId::of::<T>(), type_name::<T>()))
    }

    pub fn get_compute_ref<T: Compute>(&self) -> Result<&T, Error> {
        self.get::<T>()
            .ok_or_else(|| Error::compute_not_found(TypeId::of::<T>(), type_name::<T>()))
    }

    fn get<T: Any>(&self) -> Option<&T> {
        self.inner
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
    }
}
