//! Fixed UI delays that work both in the browser and under native tests.

/// Suspends the current task for `ms` milliseconds.
pub async fn sleep(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
