//! Heartbeat polling for cached fetches.
//!
//! Page-level data is refreshed wholesale on a fixed interval rather
//! than incrementally. A failing round is logged and dropped; the
//! cache keeps the previous value and the next tick retries, so the
//! aggregators themselves never retry.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::{FetchCache, FetchKey};

/// Re-run `fetch` for `key` on a fixed heartbeat, refreshing the cache.
///
/// The first round runs immediately. Aborting the returned handle (or
/// dropping the runtime) stops the refresh; ticks missed while a slow
/// round is in flight are collapsed rather than bursted.
pub fn spawn_refresh<T, F, Fut>(
    cache: Arc<FetchCache<T>>,
    key: FetchKey,
    interval: Duration,
    fetch: F,
) -> JoinHandle<()>
where
    T: Send + Sync + 'static,
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = crate::error::Result<T>> + Send,
{
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            match cache.get_or_fetch(&key, &fetch).await {
                Ok(_) => debug!(key = %key, "Refreshed cached fetch"),
                Err(e) => warn!(
                    key = %key,
                    error = %e,
                    "Fetch refresh failed, retrying next heartbeat"
                ),
            }
        }
    })
}
