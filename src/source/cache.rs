//! Memoization of the normalized reference dataset.

use super::fetch::TableSource;
use crate::core::normalize::normalize;
use crate::errors::AppResult;
use crate::models::Dataset;
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Keep the first successful load for the lifetime of the cache
    UntilRestart,
    /// Reload once the stored load is older than the given age
    Ttl(Duration),
}

#[derive(Debug)]
struct Entry {
    dataset: Option<Dataset>,
    loaded_at: Instant,
}

/// Owned cache around a [`TableSource`].
///
/// An absent table is cached like a present one; errors are never cached so
/// the next call tries again.
#[derive(Debug)]
pub struct DatasetCache {
    policy: CachePolicy,
    entry: Option<Entry>,
}

impl DatasetCache {
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            policy,
            entry: None,
        }
    }

    pub fn policy(&self) -> CachePolicy {
        self.policy
    }

    pub fn get_or_load(&mut self, source: &dyn TableSource) -> AppResult<Option<&Dataset>> {
        self.get_or_load_at(source, Instant::now())
    }

    fn get_or_load_at(
        &mut self,
        source: &dyn TableSource,
        now: Instant,
    ) -> AppResult<Option<&Dataset>> {
        let fresh = match (&self.entry, self.policy) {
            (None, _) => false,
            (Some(_), CachePolicy::UntilRestart) => true,
            (Some(e), CachePolicy::Ttl(ttl)) => now.saturating_duration_since(e.loaded_at) < ttl,
        };

        if fresh {
            debug!(source = %source.describe(), "dataset cache hit");
        } else {
            debug!(source = %source.describe(), "dataset cache miss");
            let dataset = source.fetch_table()?.map(|raw| normalize(&raw));
            self.entry = Some(Entry {
                dataset,
                loaded_at: now,
            });
        }

        Ok(self.entry.as_ref().and_then(|e| e.dataset.as_ref()))
    }

    /// Drop the stored load; the next access fetches again.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.entry.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::source::table::RawTable;
    use std::cell::Cell;

    struct CountingSource {
        calls: Cell<usize>,
        table: Option<RawTable>,
        fail: bool,
    }

    impl CountingSource {
        fn with(table: Option<RawTable>) -> Self {
            Self {
                calls: Cell::new(0),
                table,
                fail: false,
            }
        }
    }

    impl TableSource for CountingSource {
        fn fetch_table(&self) -> AppResult<Option<RawTable>> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err(AppError::Io(std::io::Error::other("offline")));
            }
            Ok(self.table.clone())
        }

        fn describe(&self) -> String {
            "counting".into()
        }
    }

    fn beef_table() -> RawTable {
        RawTable {
            headers: vec!["Category".into(), "Food".into(), "CO2e pr kg".into()],
            rows: vec![vec!["Meat".into(), "Beef".into(), "26,5".into()]],
        }
    }

    #[test]
    fn until_restart_fetches_once() {
        let src = CountingSource::with(Some(beef_table()));
        let mut cache = DatasetCache::new(CachePolicy::UntilRestart);

        for _ in 0..3 {
            let ds = cache.get_or_load(&src).unwrap().unwrap();
            assert_eq!(ds.len(), 1);
        }
        assert_eq!(src.calls.get(), 1);
    }

    #[test]
    fn absent_table_is_memoized_too() {
        let src = CountingSource::with(None);
        let mut cache = DatasetCache::new(CachePolicy::UntilRestart);

        assert!(cache.get_or_load(&src).unwrap().is_none());
        assert!(cache.get_or_load(&src).unwrap().is_none());
        assert_eq!(src.calls.get(), 1);
        assert!(cache.is_loaded());
    }

    #[test]
    fn ttl_expiry_triggers_reload() {
        let src = CountingSource::with(Some(beef_table()));
        let mut cache = DatasetCache::new(CachePolicy::Ttl(Duration::from_secs(60)));
        let t0 = Instant::now();

        cache.get_or_load_at(&src, t0).unwrap();
        cache.get_or_load_at(&src, t0 + Duration::from_secs(30)).unwrap();
        assert_eq!(src.calls.get(), 1);

        cache.get_or_load_at(&src, t0 + Duration::from_secs(61)).unwrap();
        assert_eq!(src.calls.get(), 2);
    }

    #[test]
    fn errors_are_not_cached() {
        let mut src = CountingSource::with(Some(beef_table()));
        src.fail = true;
        let mut cache = DatasetCache::new(CachePolicy::UntilRestart);

        assert!(cache.get_or_load(&src).is_err());
        assert!(!cache.is_loaded());

        src.fail = false;
        assert!(cache.get_or_load(&src).unwrap().is_some());
        assert_eq!(src.calls.get(), 2);
    }

    #[test]
    fn invalidate_forces_refetch() {
        let src = CountingSource::with(Some(beef_table()));
        let mut cache = DatasetCache::new(CachePolicy::UntilRestart);

        cache.get_or_load(&src).unwrap();
        cache.invalidate();
        cache.get_or_load(&src).unwrap();
        assert_eq!(src.calls.get(), 2);
    }
}
