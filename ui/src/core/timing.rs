//! Timer helpers that work on both WASM and native runtimes.

/// How long the "copied" indicator stays up after a successful copy.
pub const COPY_FEEDBACK_MS: u64 = 2_000;

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
