/// Module with the per-scanner cache of compiled patterns.
mod pattern_cache;
pub(crate) use pattern_cache::PatternCache;

/// Module with the two matching strategies of the scan operations.
mod search_mode;
pub(crate) use search_mode::SearchMode;
