//! Fetch Cache Adapter - Keyed Request Deduplication
//!
//! The fetch collaborator the host wires the aggregators into.
//! Requests are keyed; concurrent callers of one key share a single
//! in-flight fetch, and the last successful value is memoized for
//! synchronous reads between rounds. Errors are delivered to every
//! waiter of the failing round and are never cached.
//!
//! A superseding caller does not cancel an in-flight round; it joins
//! it. Re-running on an interval lives in [`poller`].

pub mod poller;

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::{Mutex, watch};

use crate::error::Error;
use crate::ports::options_sdk::SdkError;

pub use poller::spawn_refresh;

/// Cache key: a fetch id plus its serialized parameters.
pub type FetchKey = String;

/// Identifiers for the fetches this crate issues, one per use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchId {
    PortfolioPageData,
    SpotPriceHistory,
}

impl FetchId {
    fn as_str(self) -> &'static str {
        match self {
            Self::PortfolioPageData => "portfolio-page-data",
            Self::SpotPriceHistory => "spot-price-history",
        }
    }
}

impl std::fmt::Display for FetchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build a cache key from a fetch id and its serialized parameters.
///
/// Params are JSON-encoded so tuples of network/owner/period values
/// key distinct cache entries without a hand-written format.
pub fn fetch_key(id: FetchId, params: &impl serde::Serialize) -> FetchKey {
    let params = serde_json::to_string(params).unwrap_or_default();
    format!("{id}:{params}")
}

/// Outcome of one fetch round, shared between the leader and waiters.
type Round<T> = Option<std::result::Result<Arc<T>, Arc<Error>>>;

struct Entry<T> {
    /// Last successful value, kept across failed rounds.
    last: Option<Arc<T>>,
    /// Receiver for the in-flight round, if one is running.
    inflight: Option<watch::Receiver<Round<T>>>,
}

impl<T> Entry<T> {
    fn new() -> Self {
        Self {
            last: None,
            inflight: None,
        }
    }
}

enum Role<T> {
    Leader(watch::Sender<Round<T>>),
    Waiter(watch::Receiver<Round<T>>),
}

/// Keyed async cache with request deduplication and memoization.
pub struct FetchCache<T> {
    entries: Mutex<HashMap<FetchKey, Entry<T>>>,
}

impl<T: Send + Sync + 'static> FetchCache<T> {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Last successful value for `key`, if any. No I/O.
    pub async fn last(&self, key: &str) -> Option<Arc<T>> {
        let entries = self.entries.lock().await;
        entries.get(key).and_then(|e| e.last.clone())
    }

    /// Drop the memoized value for `key`. An in-flight round is
    /// unaffected and will re-populate the entry on success.
    pub async fn invalidate(&self, key: &str) {
        let mut entries = self.entries.lock().await;
        if let Some(entry) = entries.get_mut(key) {
            entry.last = None;
        }
    }

    /// Run `fetch` for `key`, deduplicating concurrent callers.
    ///
    /// If a round for the same key is already in flight the caller
    /// awaits its outcome instead of issuing a second request. On
    /// success the value replaces the memoized entry; on failure the
    /// previous value is kept and the error goes to every caller of
    /// the round.
    pub async fn get_or_fetch<F, Fut>(
        &self,
        key: &str,
        fetch: F,
    ) -> std::result::Result<Arc<T>, Arc<Error>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = crate::error::Result<T>>,
    {
        let role = {
            let mut entries = self.entries.lock().await;
            let entry = entries
                .entry(key.to_string())
                .or_insert_with(Entry::new);
            match &entry.inflight {
                // has_changed() errs once the leader is gone; a stale
                // receiver from an abandoned round must not block the key.
                Some(rx) if rx.has_changed().is_ok() => Role::Waiter(rx.clone()),
                _ => {
                    let (tx, rx) = watch::channel(None);
                    entry.inflight = Some(rx);
                    Role::Leader(tx)
                }
            }
        };

        match role {
            Role::Waiter(mut rx) => match rx.wait_for(Option::is_some).await {
                Ok(round) => round.clone().unwrap_or_else(|| Err(abandoned_round())),
                Err(_) => Err(abandoned_round()),
            },
            Role::Leader(tx) => {
                let result = fetch().await.map(Arc::new).map_err(Arc::new);
                {
                    let mut entries = self.entries.lock().await;
                    let entry = entries
                        .entry(key.to_string())
                        .or_insert_with(Entry::new);
                    if let Ok(value) = &result {
                        entry.last = Some(Arc::clone(value));
                    }
                    entry.inflight = None;
                }
                let _ = tx.send(Some(result.clone()));
                result
            }
        }
    }
}

impl<T: Send + Sync + 'static> Default for FetchCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Error seen by waiters whose leading fetch was dropped mid-round.
fn abandoned_round() -> Arc<Error> {
    Arc::new(Error::Sdk(SdkError::Upstream(
        "in-flight fetch dropped before completion".to_string(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[test]
    fn test_fetch_key_format() {
        let key = fetch_key(
            FetchId::PortfolioPageData,
            &(crate::domain::network::Network::Arbitrum, Some("0xowner")),
        );
        assert_eq!(key, "portfolio-page-data:[\"arbitrum\",\"0xowner\"]");
    }

    #[tokio::test]
    async fn test_concurrent_callers_share_one_fetch() {
        let cache = FetchCache::<u64>::new();
        let calls = AtomicUsize::new(0);

        let fetch = || async {
            calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(10)).await;
            Ok(7u64)
        };

        let (a, b) = tokio::join!(
            cache.get_or_fetch("k", fetch),
            cache.get_or_fetch("k", fetch),
        );
        assert_eq!(*a.unwrap(), 7);
        assert_eq!(*b.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_last_memoizes_success() {
        let cache = FetchCache::<u64>::new();
        assert!(cache.last("k").await.is_none());

        cache.get_or_fetch("k", || async { Ok(3u64) }).await.unwrap();
        assert_eq!(*cache.last("k").await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        let cache = FetchCache::<u64>::new();
        let calls = AtomicUsize::new(0);

        let failing = || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(Error::Sdk(SdkError::Upstream("boom".to_string())))
        };

        assert!(cache.get_or_fetch("k", failing).await.is_err());
        assert!(cache.last("k").await.is_none());

        // A new round runs the fetch again.
        assert!(cache.get_or_fetch("k", failing).await.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failed_round_keeps_previous_value() {
        let cache = FetchCache::<u64>::new();
        cache.get_or_fetch("k", || async { Ok(5u64) }).await.unwrap();

        let _ = cache
            .get_or_fetch("k", || async {
                Err(Error::Sdk(SdkError::Upstream("boom".to_string())))
            })
            .await;
        assert_eq!(*cache.last("k").await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_invalidate_clears_memoized_value() {
        let cache = FetchCache::<u64>::new();
        cache.get_or_fetch("k", || async { Ok(5u64) }).await.unwrap();
        cache.invalidate("k").await;
        assert!(cache.last("k").await.is_none());
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let cache = FetchCache::<u64>::new();
        cache.get_or_fetch("a", || async { Ok(1u64) }).await.unwrap();
        cache.get_or_fetch("b", || async { Ok(2u64) }).await.unwrap();
        assert_eq!(*cache.last("a").await.unwrap(), 1);
        assert_eq!(*cache.last("b").await.unwrap(), 2);
    }
}
