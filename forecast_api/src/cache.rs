//! Short-lived single-slot cache for forecast results

use demand_forecast::engine::ForecastResult;
use demand_forecast::error::ForecastError;
use std::sync::Mutex;
use std::time::{Duration, Instant};

struct CachedForecast {
    computed_at: Instant,
    forecast: ForecastResult,
}

/// Single-slot forecast cache with a time-to-live.
///
/// The slot lock is held across recomputation, so at most one forecast
/// computation runs at a time per process; concurrent requests reuse the
/// result instead of recomputing independently. A zero TTL keeps the
/// serialization guarantee but never reuses a stored result.
pub struct ForecastCache {
    ttl: Duration,
    slot: Mutex<Option<CachedForecast>>,
}

impl ForecastCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: Mutex::new(None),
        }
    }

    /// Return a fresh cached forecast, or compute and store a new one.
    pub fn get_or_compute<F>(&self, compute: F) -> Result<ForecastResult, ForecastError>
    where
        F: FnOnce() -> Result<ForecastResult, ForecastError>,
    {
        // A poisoned slot only means a previous compute panicked; any stale
        // entry is discarded below once expired.
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());

        if !self.ttl.is_zero() {
            if let Some(cached) = slot.as_ref() {
                if cached.computed_at.elapsed() < self.ttl {
                    return Ok(cached.forecast.clone());
                }
            }
        }

        let forecast = compute()?;
        if !self.ttl.is_zero() {
            *slot = Some(CachedForecast {
                computed_at: Instant::now(),
                forecast: forecast.clone(),
            });
        }

        Ok(forecast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn count_computes(cache: &ForecastCache, counter: &AtomicUsize) -> ForecastResult {
        cache
            .get_or_compute(|| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(ForecastResult::default())
            })
            .unwrap()
    }

    #[test]
    fn test_fresh_result_is_reused() {
        let cache = ForecastCache::new(Duration::from_secs(60));
        let counter = AtomicUsize::new(0);

        count_computes(&cache, &counter);
        count_computes(&cache, &counter);

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_zero_ttl_always_recomputes() {
        let cache = ForecastCache::new(Duration::ZERO);
        let counter = AtomicUsize::new(0);

        count_computes(&cache, &counter);
        count_computes(&cache, &counter);

        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_error_is_not_cached() {
        let cache = ForecastCache::new(Duration::from_secs(60));

        let result = cache.get_or_compute(|| {
            Err(ForecastError::DataError("source down".to_string()))
        });
        assert!(result.is_err());

        let counter = AtomicUsize::new(0);
        count_computes(&cache, &counter);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}
