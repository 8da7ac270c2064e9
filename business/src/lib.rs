//! Users data for the profiles UI: fetching, normalization and the table model.

mod columns;
mod config;
mod error;
mod fetch_service;
mod fetch_state;
mod profile;
mod source;
mod table_model;
mod users_api;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use columns::{AVATAR_ALT, CellKind, ColumnDef, ColumnKey, ColumnSchema, USER_COLUMNS};
pub use config::{
    DEFAULT_API_BASE_URL, DEFAULT_QUERY_STALE_SECS, ProfilesConfig, RESULTS_PER_FETCH,
};
pub use error::FetchError;
#[cfg(any(test, feature = "test-utils"))]
pub use fetch_service::MockFetcher;
pub use fetch_service::{EhttpFetcher, FetchService};
pub use fetch_state::FetchState;
pub use profile::{
    DisplayUser, RandomUserResponse, RawLocation, RawLogin, RawName, RawPicture, RawUserRecord,
    normalize_batch, normalize_user, parse_users,
};
pub use source::{
    DirectUserSource, FetchUsersQueryCommand, QueryUserSource, SourceView, USERS_QUERY_KEY,
    UserSource, UsersQuery,
};
pub use table_model::{CellContent, CellView, HeaderGroup, HeaderView, RowView, TableViewModel};
pub use users_api::{UsersResult, fetch_users, users_from_response};

use profiles_states::StateCtx;

/// Registers every state, compute and command the users sources rely on.
pub fn register(ctx: &mut StateCtx, config: ProfilesConfig, fetch: FetchState) {
    ctx.add_state(profiles_states::Time::default());
    ctx.add_state(config);
    ctx.add_state(fetch);
    ctx.record_compute(UsersQuery::default());
    ctx.record_command(FetchUsersQueryCommand);
}
