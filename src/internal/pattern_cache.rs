//! Module with the pattern cache.
//!
//! Every [crate::StringScanner] owns one cache. It maps the literal source text of a pattern to
//! its compiled form so that scanning with the same source string compiles the regex only once.
//! Entries are never evicted or replaced. A source that fails to compile is not inserted.

use log::debug;
use rustc_hash::FxHashMap;

use crate::{Pattern, Result};

/// The cache is a `FxHashMap` that maps pattern sources to compiled patterns.
#[derive(Debug, Clone, Default)]
pub(crate) struct PatternCache {
    cache: FxHashMap<String, Pattern>,
}

impl PatternCache {
    /// Creates a new, empty pattern cache.
    pub(crate) fn new() -> Self {
        Self {
            cache: FxHashMap::default(),
        }
    }

    /// Returns the compiled pattern for `source`, compiling and inserting it on first use.
    pub(crate) fn get(&mut self, source: &str) -> Result<&Pattern> {
        if !self.cache.contains_key(source) {
            let pattern = Pattern::new(source)?;
            debug!("Caching pattern '{}'", pattern);
            self.cache.insert(source.to_string(), pattern);
        }
        // The entry was inserted above if it was missing.
        Ok(&self.cache[source])
    }

    /// The number of cached patterns.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.cache.len()
    }
}
