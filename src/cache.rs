//! Resolution cache
//!
//! A get-or-populate map shared by every consumer in the session. Lookups
//! never coordinate: two callers racing on the same cold key both compute the
//! value and the last insert wins. Entries are immutable once written.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use dashmap::DashMap;

use crate::{
    normalize::Normalizer,
    types::{CacheStatistics, ResolvedName},
};

/// Source of the current time for entry ageing
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Decides whether a stored entry is still usable
pub trait EvictionPolicy: Send + Sync {
    fn is_expired(&self, inserted_at: Instant, now: Instant) -> bool;
}

/// Entries live for the whole session
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverEvict;

impl EvictionPolicy for NeverEvict {
    fn is_expired(&self, _inserted_at: Instant, _now: Instant) -> bool {
        false
    }
}

/// Entries expire once they are older than the given age
#[derive(Debug, Clone, Copy)]
pub struct MaxAge(pub Duration);

impl EvictionPolicy for MaxAge {
    fn is_expired(&self, inserted_at: Instant, now: Instant) -> bool {
        now.saturating_duration_since(inserted_at) > self.0
    }
}

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    inserted_at: Instant,
}

/// Concurrent get-or-populate cache keyed by string
pub struct ResolutionCache<V> {
    entries: DashMap<String, Entry<V>>,
    clock: Arc<dyn Clock>,
    policy: Arc<dyn EvictionPolicy>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<V: Clone> ResolutionCache<V> {
    /// Create a cache that never evicts
    pub fn new() -> Self {
        Self::with_policy(Arc::new(SystemClock), Arc::new(NeverEvict))
    }

    /// Create a cache with an explicit clock and eviction policy
    pub fn with_policy(clock: Arc<dyn Clock>, policy: Arc<dyn EvictionPolicy>) -> Self {
        Self {
            entries: DashMap::new(),
            clock,
            policy,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Look up a live entry. Counts a hit or a miss.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = self.clock.now();
        let found = self
            .entries
            .get(key)
            .filter(|entry| !self.policy.is_expired(entry.inserted_at, now))
            .map(|entry| entry.value.clone());

        match found {
            Some(value) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(value)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Store a value, replacing whatever was there
    pub fn insert(&self, key: impl Into<String>, value: V) {
        let entry = Entry { value, inserted_at: self.clock.now() };
        self.entries.insert(key.into(), entry);
    }

    /// Return the cached value or compute, store and return it.
    ///
    /// `populate` runs outside any shard lock, so it may itself use the cache.
    pub fn get_or_insert_with<F>(&self, key: &str, populate: F) -> V
    where
        F: FnOnce() -> V,
    {
        if let Some(value) = self.get(key) {
            return value;
        }
        let value = populate();
        self.insert(key, value.clone());
        value
    }

    pub fn contains_key(&self, key: &str) -> bool {
        let now = self.clock.now();
        self.entries
            .get(key)
            .is_some_and(|entry| !self.policy.is_expired(entry.inserted_at, now))
    }

    /// Drop every expired entry. Returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !self.policy.is_expired(entry.inserted_at, now));
        before.saturating_sub(self.entries.len())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all entries and reset the counters
    pub fn clear(&self) {
        self.entries.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    pub fn statistics(&self) -> CacheStatistics {
        CacheStatistics {
            entries: self.entries.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl<V: Clone> Default for ResolutionCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for ResolutionCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolutionCache")
            .field("entries", &self.entries.len())
            .field("hits", &self.hits.load(Ordering::Relaxed))
            .field("misses", &self.misses.load(Ordering::Relaxed))
            .finish()
    }
}

/// Normalizer memoized by raw identifier
#[derive(Debug)]
pub struct CachingNormalizer {
    normalizer: Normalizer,
    cache: ResolutionCache<ResolvedName>,
}

impl CachingNormalizer {
    pub fn new(normalizer: Normalizer) -> Self {
        Self::with_cache(normalizer, ResolutionCache::new())
    }

    pub fn with_cache(normalizer: Normalizer, cache: ResolutionCache<ResolvedName>) -> Self {
        Self { normalizer, cache }
    }

    /// Canonical identifier for `identifier`, computed at most once per
    /// live cache entry
    pub fn resolve(&self, identifier: &str) -> Arc<str> {
        self.resolve_name(identifier).canonical
    }

    /// Like [`resolve`](Self::resolve), keeping the fallback flag
    pub fn resolve_name(&self, identifier: &str) -> ResolvedName {
        self.cache.get_or_insert_with(identifier, || {
            let resolved = self.normalizer.resolve(identifier);
            log::debug!("Cached icon '{}' -> '{}'", identifier, resolved.canonical);
            resolved
        })
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn cache(&self) -> &ResolutionCache<ResolvedName> {
        &self.cache
    }
}
