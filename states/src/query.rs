//! Lifecycle of a keyed asynchronous read.
//!
//! `QueryState` is the value a query compute stores. The UI only ever asks it
//! three things: is it loading, did it fail, and what data does it hold. Data
//! outlives a later fetch, so a revalidation that is running or has failed still
//! shows the last good batch.

use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QueryStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    Error(String),
    Ready,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState<T> {
    status: QueryStatus,
    data: Option<T>,
    fetched_at: Option<DateTime<Utc>>,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            status: QueryStatus::Idle,
            data: None,
            fetched_at: None,
        }
    }
}

impl<T> QueryState<T> {
    pub fn status(&self) -> &QueryStatus {
        &self.status
    }

    pub fn is_idle(&self) -> bool {
        self.status == QueryStatus::Idle
    }

    pub fn is_loading(&self) -> bool {
        self.status == QueryStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            QueryStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    /// The last successful batch, kept while a newer fetch runs or after it fails.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    /// A fetch started. Previous data stays readable.
    pub fn start_loading(&mut self) {
        self.status = QueryStatus::Loading;
    }

    pub fn succeed(&mut self, data: T, fetched_at: DateTime<Utc>) {
        self.status = QueryStatus::Ready;
        self.data = Some(data);
        self.fetched_at = Some(fetched_at);
    }

    /// A fetch failed. Previous data stays readable.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = QueryStatus::Error(message.into());
    }

    /// Ready data older than `stale_after`. A zero or negative window never goes stale,
    /// and neither does a query that is loading or failed.
    pub fn is_stale(&self, now: DateTime<Utc>, stale_after: Duration) -> bool {
        if stale_after <= Duration::zero() || self.status != QueryStatus::Ready {
            return false;
        }
        self.fetched_at
            .is_some_and(|fetched_at| now.signed_duration_since(fetched_at) >= stale_after)
    }
}
