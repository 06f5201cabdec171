//! Platform-specific timer utilities.
//!
//! Debouncing and request timeouts both need to wait on the current executor:
//!
//! - **Desktop/CLI**: `tokio::time::sleep`
//! - **Web**: `gloo_timers::future::TimeoutFuture` (browser `setTimeout`)
//!
//! Keeping the cfg split here means the rest of the crate stays free of
//! target-specific code.

use std::time::Duration;

/// Suspends the current task for `duration`.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Suspends the current task for `duration`.
///
/// Web version: browser timers take whole milliseconds as `u32`.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(millis).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_sleep_advances_clock() {
        let start = tokio::time::Instant::now();
        sleep(Duration::from_millis(300)).await;
        assert!(start.elapsed() >= Duration::from_millis(300));
    }
}
