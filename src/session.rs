//! Per-invocation state: where the reference table comes from and its cache.

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Dataset;
use crate::source::{DatasetCache, TableSource, source_for};
use std::path::PathBuf;

pub struct Session {
    source: Box<dyn TableSource>,
    cache: DatasetCache,
}

impl Session {
    pub fn open(cfg: &Config, local_source: Option<&PathBuf>) -> AppResult<Self> {
        Ok(Self::with_source(source_for(cfg, local_source)?, cfg))
    }

    pub fn with_source(source: Box<dyn TableSource>, cfg: &Config) -> Self {
        Self {
            source,
            cache: DatasetCache::new(cfg.cache_policy()),
        }
    }

    /// The reference dataset, or `None` when the source holds no matching table.
    pub fn dataset(&mut self) -> AppResult<Option<&Dataset>> {
        self.cache.get_or_load(self.source.as_ref())
    }

    pub fn source_label(&self) -> String {
        self.source.describe()
    }
}
