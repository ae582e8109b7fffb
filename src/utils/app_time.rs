// src/utils/app_time.rs

use std::future::Future;

#[cfg(not(target_arch = "wasm32"))]
pub type AppInstant = std::time::Instant;

#[cfg(target_arch = "wasm32")]
pub type AppInstant = web_time::Instant;

#[cfg(not(target_arch = "wasm32"))]
pub fn now() -> AppInstant {
    std::time::Instant::now()
}

#[cfg(target_arch = "wasm32")]
pub fn now() -> AppInstant {
    web_time::Instant::now()
}

/// Suspend the current task (never the thread) for `ms` milliseconds.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(clamp_ms(ms)).await;
}

/// Run `fut` for at most `ms` milliseconds. `None` means it timed out.
#[cfg(not(target_arch = "wasm32"))]
pub async fn with_timeout<F: Future>(ms: u64, fut: F) -> Option<F::Output> {
    tokio::time::timeout(std::time::Duration::from_millis(ms), fut)
        .await
        .ok()
}

#[cfg(target_arch = "wasm32")]
pub async fn with_timeout<F: Future>(ms: u64, fut: F) -> Option<F::Output> {
    use futures::future::{Either, select};

    let fut = Box::pin(fut);
    let timer = Box::pin(gloo_timers::future::TimeoutFuture::new(clamp_ms(ms)));
    match select(fut, timer).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(_) => None,
    }
}

// Browser timers take a u32 millisecond count
#[cfg(target_arch = "wasm32")]
fn clamp_ms(ms: u64) -> u32 {
    u32::try_from(ms).unwrap_or(u32::MAX)
}
