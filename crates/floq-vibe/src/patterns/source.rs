//! Lookup glue between the external pattern store and `EngineInputs`.
//!
//! The store is slow and may fail; the engine never waits on it. Callers ask
//! a [`CachedPatternSource`] for a snapshot and put whatever comes back
//! (possibly `None`) into the next evaluation's inputs.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;
use thiserror::Error;

use super::types::PersonalPatterns;

/// Failures reported by an external pattern store.
#[derive(Debug, Error)]
pub enum PatternStoreError {
    #[error("pattern store unavailable: {message}")]
    Unavailable { message: String },

    #[error("malformed pattern record for {user_id}: {message}")]
    Malformed { user_id: String, message: String },
}

/// An external store of learned personal patterns.
pub trait PatternSource: Send + Sync {
    /// Load the current snapshot for `user_id`. `Ok(None)` means no profile yet.
    fn load(&self, user_id: &str) -> Result<Option<PersonalPatterns>, PatternStoreError>;
}

/// TTL cache in front of a [`PatternSource`].
///
/// Store errors are logged and reported as "no patterns" so the engine falls
/// back to its default path.
pub struct CachedPatternSource {
    inner: Arc<dyn PatternSource>,
    cache: Cache<String, Arc<PersonalPatterns>>,
}

impl CachedPatternSource {
    pub fn new(inner: Arc<dyn PatternSource>, capacity: u64, ttl: Duration) -> Self {
        Self {
            inner,
            cache: Cache::builder()
                .max_capacity(capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Cache up to 1,000 users for five minutes.
    pub fn with_defaults(inner: Arc<dyn PatternSource>) -> Self {
        Self::new(inner, 1_000, Duration::from_secs(300))
    }

    /// Snapshot for `user_id`, from cache when fresh.
    pub fn patterns_for(&self, user_id: &str) -> Option<Arc<PersonalPatterns>> {
        if let Some(hit) = self.cache.get(user_id) {
            return Some(hit);
        }

        match self.inner.load(user_id) {
            Ok(Some(patterns)) => {
                let patterns = Arc::new(patterns);
                self.cache.insert(user_id.to_string(), Arc::clone(&patterns));
                Some(patterns)
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(user_id, error = %e, "pattern lookup failed, evaluating without patterns");
                None
            }
        }
    }

    /// Drop the cached snapshot so the next lookup hits the store.
    pub fn invalidate(&self, user_id: &str) {
        self.cache.invalidate(user_id);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::patterns::types::Chronotype;

    struct CountingSource {
        calls: AtomicUsize,
        fail: bool,
    }

    impl PatternSource for CountingSource {
        fn load(&self, user_id: &str) -> Result<Option<PersonalPatterns>, PatternStoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(PatternStoreError::Unavailable {
                    message: "timeout".to_string(),
                });
            }
            if user_id == "new-user" {
                return Ok(None);
            }
            Ok(Some(PersonalPatterns {
                chronotype: Chronotype::Owl,
                has_enough_data: true,
                ..Default::default()
            }))
        }
    }

    fn source(fail: bool) -> Arc<CountingSource> {
        Arc::new(CountingSource {
            calls: AtomicUsize::new(0),
            fail,
        })
    }

    #[test]
    fn test_second_lookup_hits_cache() {
        let store = source(false);
        let cached = CachedPatternSource::with_defaults(store.clone());
        let first = cached.patterns_for("u1").unwrap();
        let second = cached.patterns_for("u1").unwrap();
        assert_eq!(first.chronotype, Chronotype::Owl);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(store.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_invalidate_forces_reload() {
        let store = source(false);
        let cached = CachedPatternSource::with_defaults(store.clone());
        cached.patterns_for("u1");
        cached.invalidate("u1");
        cached.patterns_for("u1");
        assert_eq!(store.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_store_error_yields_none() {
        let cached = CachedPatternSource::with_defaults(source(true));
        assert!(cached.patterns_for("u1").is_none());
    }

    #[test]
    fn test_missing_profile_is_not_cached() {
        let store = source(false);
        let cached = CachedPatternSource::with_defaults(store.clone());
        assert!(cached.patterns_for("new-user").is_none());
        assert!(cached.patterns_for("new-user").is_none());
        assert_eq!(store.calls.load(Ordering::SeqCst), 2);
    }
}
