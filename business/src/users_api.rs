//! The one network read both users sources share.

use log::info;

use crate::{DisplayUser, FetchError, FetchService, parse_users};

pub type UsersResult = Result<Vec<DisplayUser>, FetchError>;

/// Maps a finished HTTP exchange to a published batch (or nothing).
pub fn users_from_response(result: ehttp::Result<ehttp::Response>) -> UsersResult {
    let response = result.map_err(FetchError::Network)?;
    if !(200..300).contains(&response.status) {
        return Err(FetchError::Network(format!(
            "API returned status: {}",
            response.status
        )));
    }
    parse_users(&response.bytes)
}

/// GETs `url` and hands the normalized batch to `on_done`, on whatever thread
/// the fetcher completes on. Failures are left to the caller to report.
pub fn fetch_users(
    fetcher: &dyn FetchService,
    url: &str,
    on_done: impl FnOnce(UsersResult) + Send + 'static,
) {
    info!("Fetching users from {url}");
    let request = ehttp::Request::get(url);

    fetcher.fetch(
        request,
        Box::new(move |result| {
            let users = users_from_response(result);
            if let Ok(users) = &users {
                info!("Fetched {} users", users.len());
            }
            on_done(users);
        }),
    );
}
