use std::any::TypeId;

use flume::{Receiver, Sender};
use log::{debug, error, info};
use profiles_states::{StateCtx, TaskHandle, TaskId, Waker};
use tokio_util::sync::CancellationToken;

use super::{SourceView, UserSource};
use crate::{DisplayUser, FetchState, ProfilesConfig, UsersResult, fetch_users};

/// Fetches once per activation and keeps the batch to itself.
///
/// Failures are logged and the table stays empty; there is no loading state.
/// Each activation gets a new [`TaskId`] generation; results tagged with any
/// other generation, or arriving after [`UserSource::deactivate`], are dropped.
pub struct DirectUserSource {
    users: Vec<DisplayUser>,
    task: Option<TaskHandle>,
    last_id: TaskId,
    send: Sender<(TaskId, UsersResult)>,
    recv: Receiver<(TaskId, UsersResult)>,
    waker: Option<Waker>,
}

impl Default for DirectUserSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectUserSource {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            users: Vec::new(),
            task: None,
            last_id: TaskId::new(TypeId::of::<Self>(), 0),
            send,
            recv,
            waker: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.task.is_some()
    }

    pub fn users(&self) -> &[DisplayUser] {
        &self.users
    }

    fn accepts(&self, id: TaskId) -> bool {
        self.task
            .as_ref()
            .is_some_and(|task| task.id() == id && !task.is_cancelled())
    }
}

impl UserSource for DirectUserSource {
    fn name(&self) -> &'static str {
        "direct"
    }

    fn activate(&mut self, ctx: &mut StateCtx) {
        if self.is_active() {
            return;
        }

        let id = self.last_id.next();
        self.last_id = id;
        let task = TaskHandle::new(id, CancellationToken::new());
        let token = task.cancellation_token();
        self.task = Some(task);

        let (url, fetcher) = match (
            ctx.try_state::<ProfilesConfig>(),
            ctx.try_state::<FetchState>(),
        ) {
            (Ok(config), Ok(fetch)) => (config.users_url(), fetch.inner.clone()),
            (Err(err), _) | (_, Err(err)) => {
                error!("Direct users source cannot fetch: {err}");
                return;
            }
        };
        let send = self.send.clone();
        let waker = self.waker.clone();

        info!("Direct users source activated (generation {})", id.generation());
        fetch_users(fetcher.as_ref(), &url, move |result| {
            if token.is_cancelled() {
                debug!(
                    "Dropping users response for deactivated generation {}",
                    id.generation()
                );
                return;
            }
            if send.send((id, result)).is_err() {
                debug!("Direct users source is gone, dropping response");
                return;
            }
            if let Some(wake) = waker {
                wake();
            }
        });
    }

    fn subscribe(&mut self, _ctx: &mut StateCtx, waker: Waker) {
        self.waker = Some(waker);
    }

    fn poll(&mut self, _ctx: &mut StateCtx) {
        let arrived: Vec<(TaskId, UsersResult)> = self.recv.try_iter().collect();
        for (id, result) in arrived {
            if !self.accepts(id) {
                debug!("Ignoring stale users response (generation {})", id.generation());
                continue;
            }
            match result {
                Ok(users) => self.users = users,
                Err(err) => error!("Error fetching users: {err}"),
            }
        }
    }

    fn current<'a>(&'a self, _ctx: &'a StateCtx) -> SourceView<'a> {
        SourceView::Ready(&self.users)
    }

    fn deactivate(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel();
            info!(
                "Direct users source deactivated (generation {})",
                task.id().generation()
            );
        }
        self.users.clear();
    }
}
