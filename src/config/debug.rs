//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Emit a line for every feed tick broadcast (noisy at 2s cadence).
    pub log_feed_ticks: bool,

    /// Log subscriber registration / removal on the feed.
    pub log_feed_subscribers: bool,

    /// Log every store mutation applied from a feed batch.
    pub log_store_updates: bool,

    /// Log sort-preference changes from header clicks.
    pub log_sort_events: bool,

    /// Log persistence restore/save of app state.
    pub log_persistence: bool,
}

pub const DF: LogFlags = LogFlags {
    log_feed_ticks: false,
    log_feed_subscribers: true,
    log_store_updates: false,
    log_sort_events: true,
    log_persistence: true,
};
