use std::fmt::Debug;

use ehttp::{Request, Response, Result};

/// The HTTP seam. Production uses [`EhttpFetcher`]; tests swap in `MockFetcher`.
pub trait FetchService: Send + Sync + Debug {
    fn fetch(&self, request: Request, on_done: Box<dyn FnOnce(Result<Response>) + Send + 'static>);
}

#[derive(Debug, Default)]
pub struct EhttpFetcher;

impl FetchService for EhttpFetcher {
    fn fetch(&self, request: Request, on_done: Box<dyn FnOnce(Result<Response>) + Send + 'static>) {
        ehttp::fetch(request, on_done);
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub use mock::MockFetcher;

#[cfg(any(test, feature = "test-utils"))]
mod mock {
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;

    type OnDone = Box<dyn FnOnce(Result<Response>) + Send + 'static>;

    /// Answers requests with a canned result, or holds them until the test completes them.
    #[derive(Default)]
    pub struct MockFetcher {
        pub response: Option<Result<Response>>,
        deferred: bool,
        pending: Mutex<Vec<OnDone>>,
        requests: Mutex<Vec<String>>,
        calls: AtomicUsize,
    }

    impl Debug for MockFetcher {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("MockFetcher")
                .field("deferred", &self.deferred)
                .field("calls", &self.calls())
                .finish()
        }
    }

    impl MockFetcher {
        /// Completes every request synchronously with `status` and `body`.
        pub fn with_body(status: u16, body: impl Into<Vec<u8>>) -> Self {
            Self {
                response: Some(Ok(Response {
                    url: String::new(),
                    ok: (200..300).contains(&status),
                    status,
                    status_text: String::new(),
                    headers: Default::default(),
                    bytes: body.into(),
                })),
                ..Default::default()
            }
        }

        /// Completes every request synchronously with a transport error.
        pub fn with_error(message: impl Into<String>) -> Self {
            Self {
                response: Some(Err(message.into())),
                ..Default::default()
            }
        }

        /// Holds callbacks until [`MockFetcher::complete_next`] is called.
        pub fn deferred() -> Self {
            Self {
                deferred: true,
                ..Default::default()
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn requested_urls(&self) -> Vec<String> {
            self.requests.lock().map(|urls| urls.clone()).unwrap_or_default()
        }

        /// Fires the oldest held callback. Returns `false` if none was waiting.
        pub fn complete_next(&self, result: Result<Response>) -> bool {
            let next = match self.pending.lock() {
                Ok(mut pending) if !pending.is_empty() => Some(pending.remove(0)),
                _ => None,
            };
            match next {
                Some(on_done) => {
                    on_done(result);
                    true
                }
                None => false,
            }
        }
    }

    impl FetchService for MockFetcher {
        fn fetch(&self, request: Request, on_done: OnDone) {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Ok(mut urls) = self.requests.lock() {
                urls.push(request.url);
            }

            if self.deferred {
                if let Ok(mut pending) = self.pending.lock() {
                    pending.push(on_done);
                }
                return;
            }

            match &self.response {
                Some(response) => on_done(response.clone()),
                None => on_done(Err("MockFetcher: no response set".to_string())),
            }
        }
    }
}
