//! Strategies that feed the user table.
//!
//! - `direct`: fetch once on activation, keep the batch locally, log failures.
//! - `query`: read through the `"users"` query cache held in [`StateCtx`].
//!
//! The table only sees [`SourceView`], never the strategy behind it.

mod direct;
mod query;

pub use direct::DirectUserSource;
pub use query::{FetchUsersQueryCommand, QueryUserSource, USERS_QUERY_KEY, UsersQuery};

use profiles_states::{StateCtx, Waker};

use crate::DisplayUser;

/// What a source currently has to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceView<'a> {
    Loading,
    Error(&'a str),
    Ready(&'a [DisplayUser]),
}

impl<'a> SourceView<'a> {
    pub fn users(&self) -> Option<&'a [DisplayUser]> {
        match *self {
            Self::Ready(users) => Some(users),
            _ => None,
        }
    }
}

pub trait UserSource {
    /// Short label for logs and headings.
    fn name(&self) -> &'static str;

    /// Called every frame the table is on screen; starts a fetch when one is due.
    fn activate(&mut self, ctx: &mut StateCtx);

    /// Registers the callback fired when new data lands off the UI thread.
    fn subscribe(&mut self, ctx: &mut StateCtx, waker: Waker);

    /// Picks up results that arrived since the last frame.
    fn poll(&mut self, ctx: &mut StateCtx);

    fn current<'a>(&'a self, ctx: &'a StateCtx) -> SourceView<'a>;

    /// The table left the screen. Anything still in flight must not publish.
    fn deactivate(&mut self);
}
