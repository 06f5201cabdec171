//! Request sequencing, cancellation and timeouts.
//!
//! Every call site that talks to the backend (search, suggestions, document
//! view, word cloud) owns one [`RequestSlot`]. Issuing a request through the
//! slot:
//!
//! 1. aborts whatever the slot issued before (a pending debounce timer stops
//!    sleeping, an in-flight fetch stops being polled),
//! 2. hands out a fresh [`RequestToken`],
//! 3. returns the wrapped future for the caller to spawn.
//!
//! When the future resolves, the caller applies the result only if
//! [`RequestSlot::settle`] says the token is still current. A slow response
//! can therefore never overwrite the answer to a newer request.
//!
//! ```
//! use docufind_core::request::RequestSlot;
//! use docufind_core::ApiError;
//!
//! # futures::executor::block_on(async {
//! let mut slot = RequestSlot::default();
//! let (first, _stale) = slot.issue(async { Ok::<_, ApiError>("old") });
//! let (second, fresh) = slot.issue(async { Ok::<_, ApiError>("new") });
//!
//! assert_eq!(fresh.await, Ok("new"));
//! assert!(!slot.settle(first));
//! assert!(slot.settle(second));
//! # });
//! ```

use crate::error::ApiError;
use crate::platform;
use futures::future::{self, AbortHandle, Aborted, Either};
use std::future::Future;
use std::time::Duration;

/// Identifies one request issued by a [`RequestSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// Handle that can abort an in-flight request.
#[derive(Debug, Clone)]
pub struct RequestHandle {
    abort: AbortHandle,
}

impl RequestHandle {
    /// Aborts the request. Its future resolves to [`ApiError::Cancelled`]
    /// the next time it is polled.
    pub fn cancel(&self) {
        self.abort.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }
}

/// Wraps `fut` so it can be aborted through the returned handle.
pub fn cancellable<F, T>(fut: F) -> (RequestHandle, impl Future<Output = Result<T, ApiError>>)
where
    F: Future<Output = Result<T, ApiError>>,
{
    let (abortable, abort) = future::abortable(fut);
    let wrapped = async move {
        match abortable.await {
            Ok(result) => result,
            Err(Aborted) => Err(ApiError::Cancelled),
        }
    };
    (RequestHandle { abort }, wrapped)
}

/// Races `fut` against a timer, failing with [`ApiError::Timeout`] if the
/// timer fires first.
pub async fn with_timeout<F, T>(timeout: Duration, fut: F) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    let fut = std::pin::pin!(fut);
    let timer = std::pin::pin!(platform::sleep(timeout));

    match future::select(fut, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::Timeout(timeout)),
    }
}

/// Sequencing state for one request call site.
#[derive(Debug, Default)]
pub struct RequestSlot {
    latest: u64,
    in_flight: Option<RequestHandle>,
}

impl RequestSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supersedes any previous request and wraps `fut` as the new current one.
    pub fn issue<F, T>(&mut self, fut: F) -> (RequestToken, impl Future<Output = Result<T, ApiError>>)
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        self.abort_in_flight();
        self.latest += 1;

        let (handle, wrapped) = cancellable(fut);
        self.in_flight = Some(handle);
        (RequestToken(self.latest), wrapped)
    }

    /// True if `token` belongs to the most recently issued request.
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest && self.in_flight.is_some()
    }

    /// Marks `token` as finished.
    ///
    /// Returns `true` if its result should be applied, `false` if it was
    /// superseded or cancelled in the meantime.
    pub fn settle(&mut self, token: RequestToken) -> bool {
        if self.is_current(token) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    /// Aborts the current request, if any, without issuing a new one.
    pub fn cancel(&mut self) {
        self.abort_in_flight();
        self.latest += 1;
    }

    /// True while the most recent request has not been settled or cancelled.
    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    fn abort_in_flight(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.cancel();
        }
    }
}
