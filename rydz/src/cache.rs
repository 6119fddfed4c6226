//! Caching layer for distance lookups.
//!
//! Road distances between two addresses rarely change, and every flat-rate
//! quote needs one, so answers from the (slow, metered) distance service are
//! kept for a while. Only successful lookups are cached.

use std::time::Duration;

use moka::sync::Cache as MokaCache;
use rust_decimal::Decimal;
use tracing::trace;

use crate::distance::{DistanceError, DistanceSource};
use crate::domain::Address;

/// Cache key: the one-line renderings of (origin, destination).
///
/// This is exactly what the distance service is asked about, so two
/// addresses that render the same share an entry.
type RouteKey = (String, String);

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(24 * 60 * 60),
            max_capacity: 10_000,
        }
    }
}

/// Distance source with caching.
///
/// Wraps any [`DistanceSource`] and remembers the miles it returned per
/// route.
pub struct CachedDistanceSource<D> {
    source: D,
    routes: MokaCache<RouteKey, Decimal>,
}

impl<D: DistanceSource> CachedDistanceSource<D> {
    /// Create a new cached source.
    pub fn new(source: D, config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { source, routes }
    }

    /// Access the underlying source for lookups that bypass the cache.
    pub fn source(&self) -> &D {
        &self.source
    }

    /// Get cache statistics.
    pub fn entry_count(&self) -> u64 {
        self.routes.run_pending_tasks();
        self.routes.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.routes.invalidate_all();
    }
}

impl<D: DistanceSource> DistanceSource for CachedDistanceSource<D> {
    fn distance(&self, origin: &Address, destination: &Address) -> Result<Decimal, DistanceError> {
        let key = (origin.to_string(), destination.to_string());

        if let Some(miles) = self.routes.get(&key) {
            trace!(origin = %key.0, destination = %key.1, "distance cache hit");
            return Ok(miles);
        }

        trace!(origin = %key.0, destination = %key.1, "distance cache miss");
        let miles = self.source.distance(origin, destination)?;
        self.routes.insert(key, miles);

        Ok(miles)
    }
}
