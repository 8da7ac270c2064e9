use std::{
    any::{Any, TypeId, type_name},
    collections::BTreeMap,
};

use flume::{Receiver, Sender};
use log::{debug, warn};

use crate::{
    Command, Compute, Dep, Error, State, Updater,
    updater::{Update, Waker},
};

/// Owner of every state, compute and command of one UI tree.
///
/// All reads and writes happen on the UI thread. Async work reaches back in only
/// through [`Updater`] values, applied by [`StateCtx::sync_computes`].
pub struct StateCtx {
    states: BTreeMap<TypeId, Box<dyn State>>,
    computes: BTreeMap<TypeId, Box<dyn Compute>>,
    commands: BTreeMap<TypeId, Box<dyn Command>>,
    command_queue: Vec<TypeId>,

    send: Sender<Update>,
    recv: Receiver<Update>,
    waker: Option<Waker>,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            states: BTreeMap::new(),
            computes: BTreeMap::new(),
            commands: BTreeMap::new(),
            command_queue: Vec::new(),
            send,
            recv,
            waker: None,
        }
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(TypeId::of::<T>(), Box::new(state));
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        self.computes.insert(TypeId::of::<T>(), Box::new(compute));
    }

    pub fn record_command<T: Command>(&mut self, command: T) {
        self.commands.insert(TypeId::of::<T>(), Box::new(command));
    }

    /// Installs the callback every future [`Updater`] fires after posting.
    pub fn set_waker(&mut self, waker: Waker) {
        self.waker = Some(waker);
    }

    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone(), self.waker.clone())
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .ok_or_else(|| Error::state_not_found(TypeId::of::<T>(), type_name::<T>()))
    }

    pub fn try_state_mut<T: State>(&mut self) -> Result<&mut T, Error> {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .ok_or_else(|| Error::state_not_found(TypeId::of::<T>(), type_name::<T>()))
    }

    /// Mutates a state in place. A missing state is logged and left alone.
    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        match self.try_state_mut::<T>() {
            Ok(state) => f(state),
            Err(err) => warn!("{err}"),
        }
    }

    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|compute| compute.as_any().downcast_ref::<T>())
    }

    /// Snapshot of every state and compute that opts into `snapshot`.
    pub fn dep(&self) -> Dep {
        let states = self
            .states
            .iter()
            .filter_map(|(id, state)| state.snapshot().map(|snapshot| (*id, snapshot)));
        let computes = self
            .computes
            .iter()
            .filter_map(|(id, compute)| compute.snapshot().map(|snapshot| (*id, snapshot)));
        Dep::new(states.chain(computes))
    }

    /// Queues a command for the next [`StateCtx::flush_commands`].
    ///
    /// A command already waiting in the queue is not queued twice.
    pub fn enqueue_command<T: Command>(&mut self) {
        let id = TypeId::of::<T>();
        if self.command_queue.contains(&id) {
            debug!("{} is already queued", type_name::<T>());
            return;
        }
        self.command_queue.push(id);
    }

    /// Runs a registered command immediately.
    pub fn dispatch<T: Command>(&mut self) -> Result<(), Error> {
        self.run_command(TypeId::of::<T>(), type_name::<T>())
    }

    /// Runs every queued command in enqueue order.
    pub fn flush_commands(&mut self) {
        let queue = std::mem::take(&mut self.command_queue);
        for id in queue {
            if let Err(err) = self.run_command(id, "queued command") {
                warn!("{err}");
            }
        }
    }

    fn run_command(&self, id: TypeId, name: &str) -> Result<(), Error> {
        let command = self
            .commands
            .get(&id)
            .ok_or_else(|| Error::command_not_found(id, name))?;
        command.run(self.dep(), self.updater());
        Ok(())
    }

    /// Applies every value posted through an [`Updater`] since the last call.
    ///
    /// Returns `true` when anything changed.
    pub fn sync_computes(&mut self) -> bool {
        let mut changed = false;
        let updates: Vec<Update> = self.recv.try_iter().collect();

        for (id, value) in updates {
            if let Some(compute) = self.computes.get_mut(&id) {
                compute.assign_box(value);
            } else if let Some(state) = self.states.get_mut(&id) {
                state.assign_box(value);
            } else {
                debug!("Dropped update for unregistered type {id:?}");
                continue;
            }
            changed = true;
        }

        changed
    }
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.states.len())
            .field("computes", &self.computes.len())
            .field("commands", &self.commands.len())
            .field("queued", &self.command_queue.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;
    use crate::{assign_impl, state_assign_impl};

    #[derive(Debug, Clone, Default)]
    struct Counter {
        value: i32,
    }

    impl State for Counter {
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

    /// Running total of every counter value seen by `Accumulate`.
    #[derive(Debug, Clone, Default)]
    struct Total {
        value: i32,
    }

    impl Compute for Total {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
            Some(Box::new(self.clone()))
        }

        fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
            assign_impl(self, new_self);
        }
    }

    struct Increment;

    impl Command for Increment {
        fn run(&self, deps: Dep, updater: Updater) {
            let current = deps.get_state_ref::<Counter>().map_or(0, |c| c.value);
            updater.set(Counter { value: current + 1 });
        }
    }

    struct Accumulate;

    impl Command for Accumulate {
        fn run(&self, deps: Dep, updater: Updater) {
            let (Ok(counter), Ok(total)) = (
                deps.get_state_ref::<Counter>(),
                deps.get_compute_ref::<Total>(),
            ) else {
                return;
            };
            updater.set(Total {
                value: total.value + counter.value,
            });
        }
    }

    fn ctx() -> StateCtx {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter::default());
        ctx.record_compute(Total::default());
        ctx.record_command(Increment);
        ctx.record_command(Accumulate);
        ctx
    }

    fn counter(ctx: &StateCtx) -> i32 {
        ctx.try_state::<Counter>().map_or(-1, |c| c.value)
    }

    #[test]
    fn queued_commands_post_through_updater() {
        let mut ctx = ctx();
        ctx.enqueue_command::<Increment>();
        ctx.flush_commands();

        assert_eq!(counter(&ctx), 0, "not applied before sync");
        assert!(ctx.sync_computes());
        assert_eq!(counter(&ctx), 1);
        assert!(!ctx.sync_computes(), "nothing left to apply");
    }

    #[test]
    fn command_queued_twice_runs_once() {
        let mut ctx = ctx();
        ctx.enqueue_command::<Increment>();
        ctx.enqueue_command::<Increment>();
        ctx.flush_commands();
        ctx.sync_computes();

        assert_eq!(counter(&ctx), 1);

        ctx.enqueue_command::<Increment>();
        ctx.flush_commands();
        ctx.sync_computes();
        assert_eq!(counter(&ctx), 2, "queue is reusable after a flush");
    }

    #[test]
    fn commands_read_compute_snapshots() {
        let mut ctx = ctx();
        ctx.update::<Counter>(|c| c.value = 5);

        ctx.dispatch::<Accumulate>().expect("registered");
        ctx.sync_computes();
        ctx.dispatch::<Accumulate>().expect("registered");
        ctx.sync_computes();

        assert_eq!(ctx.cached::<Total>().map(|t| t.value), Some(10));
    }

    #[test]
    fn missing_compute_is_reported_by_dep() {
        let ctx = StateCtx::new();
        assert!(matches!(
            ctx.dep().get_compute_ref::<Total>(),
            Err(Error::ComputeNotFound { .. })
        ));
    }

    #[test]
    fn dispatch_unregistered_command_errors() {
        struct Unknown;
        impl Command for Unknown {
            fn run(&self, _deps: Dep, _updater: Updater) {}
        }

        let mut ctx = ctx();
        let result = ctx.dispatch::<Unknown>();
        assert!(matches!(result, Err(Error::CommandNotFound { .. })));
    }

    #[test]
    fn updater_wakes_after_posting() {
        let wakes = Arc::new(AtomicUsize::new(0));
        let mut ctx = ctx();
        let counter = wakes.clone();
        ctx.set_waker(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        ctx.updater().set(Counter { value: 3 });
        assert_eq!(wakes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn updater_outliving_context_is_harmless() {
        let updater = ctx().updater();
        updater.set(Counter { value: 9 });
    }

    #[test]
    fn missing_state_is_reported_not_panicked() {
        let mut ctx = StateCtx::new();
        assert!(matches!(
            ctx.try_state::<Counter>(),
            Err(Error::StateNotFound { .. })
        ));
        ctx.update::<Counter>(|c| c.value = 1);
        assert!(ctx.try_state::<Counter>().is_err());
    }
}
