use std::any::Any;

use anyhow::bail;
use log::info;
use profiles_states::{State, state_assign_impl};
use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "https://randomuser.me";

/// Users requested per fetch. Fixed; there is no pagination.
pub const RESULTS_PER_FETCH: u8 = 10;

/// Mirrors the five minute refresh of the API status check.
pub const DEFAULT_QUERY_STALE_SECS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilesConfig {
    pub api_base_url: String,
    /// Age after which the cached users query is refetched. `0` never refetches.
    pub query_stale_secs: u64,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    users_api_base_url: Option<String>,
    users_query_stale_secs: Option<u64>,
}

impl ProfilesConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            query_stale_secs: DEFAULT_QUERY_STALE_SECS,
        }
    }

    /// Reads `USERS_API_BASE_URL` and `USERS_QUERY_STALE_SECS`, falling back to defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I, S>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let raw: RawConfig = serde_env::from_iter(vars)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            users_api_base_url,
            users_query_stale_secs,
        } = raw;

        let api_base_url = match users_api_base_url {
            Some(url) => {
                let url = url.trim().trim_end_matches('/').to_string();
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    bail!("USERS_API_BASE_URL must be an http(s) URL, got {url:?}");
                }
                info!("Using USERS_API_BASE_URL {url}");
                url
            }
            None => DEFAULT_API_BASE_URL.to_string(),
        };

        Ok(Self {
            api_base_url,
            query_stale_secs: users_query_stale_secs.unwrap_or(DEFAULT_QUERY_STALE_SECS),
        })
    }

    pub fn users_url(&self) -> String {
        format!(
            "{}/api/?results={}",
            self.api_base_url.trim_end_matches('/'),
            RESULTS_PER_FETCH
        )
    }

    pub fn query_stale_after(&self) -> chrono::Duration {
        i64::try_from(self.query_stale_secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .unwrap_or(chrono::Duration::MAX)
    }
}

impl Default for ProfilesConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl State for ProfilesConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send + 'static>> {
        Some(Box::new(self.clone()))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}
