//! Polling refresh of fetched data into a shared, last-write-wins cache.

use std::{
    collections::HashMap,
    fmt::Debug,
    future::Future,
    hash::Hash,
    sync::Arc,
    time::Duration,
};

use log::{
    debug,
    warn,
};
use tokio::{
    sync::RwLock,
    task::JoinHandle,
    time::MissedTickBehavior,
};
use vault_helpers::constants::refresh::{
    FAST_INTERVAL,
    SLOW_INTERVAL,
};
use vault_trait::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollIntervals {
    pub fast: Duration,
    pub slow: Duration,
}

impl Default for PollIntervals {
    fn default() -> Self {
        Self {
            fast: Duration::from_secs(FAST_INTERVAL),
            slow: Duration::from_secs(SLOW_INTERVAL),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTier {
    /// User balances and vault figures.
    Fast,
    /// Prices and global configuration.
    Slow,
    /// Values that never change once read.
    Immutable,
}

impl RefreshTier {
    /// `None` for data that is fetched once.
    pub fn interval(self, intervals: &PollIntervals) -> Option<Duration> {
        match self {
            RefreshTier::Fast => Some(intervals.fast),
            RefreshTier::Slow => Some(intervals.slow),
            RefreshTier::Immutable => None,
        }
    }
}

/// Cloneable handle to a map shared between pollers and readers.
#[derive(Debug)]
pub struct Cache<K, V> {
    entries: Arc<RwLock<HashMap<K, V>>>,
}

impl<K, V> Clone for Cache<K, V> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<K, V> Default for Cache<K, V> {
    fn default() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<K: Eq + Hash, V: Clone> Cache<K, V> {
    pub async fn get(&self, key: &K) -> Option<V> {
        self.entries.read().await.get(key).cloned()
    }

    /// Replaces the value under `key`, returning the previous one.
    pub async fn insert(&self, key: K, value: V) -> Option<V> {
        self.entries.write().await.insert(key, value)
    }

    pub async fn invalidate(&self, key: &K) -> Option<V> {
        self.entries.write().await.remove(key)
    }
}

async fn refresh_once<K, V, F, Fut>(cache: &Cache<K, V>, key: &K, fetch: &mut F)
where
    K: Eq + Hash + Clone + Debug,
    V: Clone,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<V, ClientError>>,
{
    match fetch().await {
        Ok(value) => {
            debug!("refreshed {key:?}");
            cache.insert(key.clone(), value).await;
        }
        Err(e) => warn!("refresh of {key:?} failed, keeping last value: {e}"),
    }
}

/// Keeps `key` up to date by running `fetch` on the tier's interval, starting immediately.
///
/// A failed fetch leaves the cached value untouched. [`RefreshTier::Immutable`] fetches once and
/// the task then ends.
pub fn spawn_polling<K, V, F, Fut>(
    cache: Cache<K, V>,
    key: K,
    tier: RefreshTier,
    intervals: PollIntervals,
    mut fetch: F,
) -> JoinHandle<()>
where
    K: Eq + Hash + Clone + Debug + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = Result<V, ClientError>> + Send,
{
    tokio::spawn(async move {
        let Some(period) = tier.interval(&intervals) else {
            refresh_once(&cache, &key, &mut fetch).await;
            return
        };

        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            refresh_once(&cache, &key, &mut fetch).await;
        }
    })
}
