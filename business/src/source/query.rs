//! Users read through the shared query cache.
//!
//! `UsersQuery` is a cache slot in the state context. Only
//! `FetchUsersQueryCommand` writes it, building each new value from a snapshot
//! of the current one so the last good batch survives a refetch.

use std::any::Any;

use chrono::Utc;
use log::{debug, error, info, warn};
use profiles_states::{
    Command, Compute, Dep, QueryState, StateCtx, Time, Updater, Waker, assign_impl,
};

use super::{SourceView, UserSource};
use crate::{DisplayUser, FetchState, ProfilesConfig, fetch_users};

/// Cache key of the users query.
pub const USERS_QUERY_KEY: &str = "users";

#[derive(Debug, Clone, Default)]
pub struct UsersQuery {
    pub state: QueryState<Vec<DisplayUser>>,
}

impl UsersQuery {
    /// True until the first batch lands, and while any refetch runs.
    pub fn is_loading(&self) -> bool {
        self.state.is_idle() || self.state.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    pub fn data(&self) -> Option<&[DisplayUser]> {
        self.state.data().map(Vec::as_slice)
    }
}

impl Compute for UsersQuery {
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

/// Fetches the users batch into [`UsersQuery`].
///
/// Posts `Loading` first, then `Ready` or `Error` when the request finishes.
/// Data from an earlier fetch is carried through both.
#[derive(Debug, Default)]
pub struct FetchUsersQueryCommand;

impl Command for FetchUsersQueryCommand {
    fn run(&self, deps: Dep, updater: Updater) {
        let mut query = match deps.get_compute_ref::<UsersQuery>() {
            Ok(query) => query.clone(),
            Err(err) => {
                warn!("Query {USERS_QUERY_KEY:?}: {err}");
                UsersQuery::default()
            }
        };

        let (config, fetch) = match (
            deps.get_state_ref::<ProfilesConfig>(),
            deps.get_state_ref::<FetchState>(),
        ) {
            (Ok(config), Ok(fetch)) => (config, fetch),
            (Err(err), _) | (_, Err(err)) => {
                error!("FetchUsersQueryCommand: {err}");
                query.state.fail(err.to_string());
                updater.set(query);
                return;
            }
        };

        info!("Query {USERS_QUERY_KEY:?}: fetching");
        query.state.start_loading();
        updater.set(query.clone());

        fetch_users(fetch.inner.as_ref(), &config.users_url(), move |result| {
            match result {
                Ok(data) => query.state.succeed(data, Utc::now()),
                Err(err) => {
                    error!("Query {USERS_QUERY_KEY:?} failed: {err}");
                    query.state.fail(err.to_string());
                }
            }
            updater.set(query);
        });
    }
}

/// Table source backed by the `"users"` query.
///
/// Fetches when the query is idle or its data is older than
/// [`ProfilesConfig::query_stale_secs`]. Errors are kept, not retried. Once a
/// batch has landed it stays on screen through later refetches.
#[derive(Debug, Default)]
pub struct QueryUserSource {
    active: bool,
}

impl QueryUserSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a request for the query is in flight.
    pub fn is_fetching(ctx: &StateCtx) -> bool {
        ctx.cached::<UsersQuery>()
            .is_some_and(|query| query.state.is_loading())
    }

    /// Queues a refetch for the next `StateCtx::flush_commands`, keeping the
    /// current rows until it lands. Does nothing while a fetch is in flight.
    pub fn refresh(&mut self, ctx: &mut StateCtx) {
        self.active = true;
        if Self::is_fetching(ctx) {
            debug!("Query {USERS_QUERY_KEY:?}: refresh skipped, fetch in flight");
            return;
        }
        info!("Query {USERS_QUERY_KEY:?}: invalidated");
        ctx.enqueue_command::<FetchUsersQueryCommand>();
    }

    fn fetch(ctx: &mut StateCtx) {
        if let Err(err) = ctx.dispatch::<FetchUsersQueryCommand>() {
            warn!("Query {USERS_QUERY_KEY:?}: {err}");
            return;
        }
        // The command posts `Loading` synchronously; apply it now so the
        // freshness check below never starts a second request for this key.
        ctx.sync_computes();
    }

    fn needs_fetch(ctx: &StateCtx) -> bool {
        let Some(query) = ctx.cached::<UsersQuery>() else {
            return false;
        };
        if query.state.is_idle() {
            return true;
        }
        let now = ctx.try_state::<Time>().map(|time| *time.as_ref());
        let stale_after = ctx
            .try_state::<ProfilesConfig>()
            .map(ProfilesConfig::query_stale_after);
        match (now, stale_after) {
            (Ok(now), Ok(stale_after)) => query.state.is_stale(now, stale_after),
            _ => false,
        }
    }
}

impl UserSource for QueryUserSource {
    fn name(&self) -> &'static str {
        "query"
    }

    fn activate(&mut self, ctx: &mut StateCtx) {
        self.active = true;
        if Self::needs_fetch(ctx) {
            Self::fetch(ctx);
        }
    }

    fn subscribe(&mut self, ctx: &mut StateCtx, waker: Waker) {
        ctx.set_waker(waker);
    }

    fn poll(&mut self, ctx: &mut StateCtx) {
        ctx.sync_computes();
        if self.active && Self::needs_fetch(ctx) {
            Self::fetch(ctx);
        }
    }

    fn current<'a>(&'a self, ctx: &'a StateCtx) -> SourceView<'a> {
        let Some(query) = ctx.cached::<UsersQuery>() else {
            return SourceView::Error("users query is not registered");
        };
        match (query.data(), query.error()) {
            (Some(users), _) => SourceView::Ready(users),
            (None, Some(message)) => SourceView::Error(message),
            (None, None) => SourceView::Loading,
        }
    }

    fn deactivate(&mut self) {
        self.active = false;
    }
}
