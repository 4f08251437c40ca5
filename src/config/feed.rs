use std::time::Duration;

use crate::config::constants::TICK_INTERVAL;

/// Configuration for the simulated market feed.
///
/// All jitter values are half-spans of a uniform distribution centered on
/// zero. Cosmetic noise only; no distribution guarantees beyond "uniform
/// within the stated bounds".
pub struct FeedConfig {
    /// Time between feed ticks.
    pub tick_interval: Duration,

    /// Price multiplier jitter per tick. 0.01 = each tick lands within
    /// [-1%, +1%] of the seed price.
    pub price_jitter: f64,

    /// Half-span of the raw change fields (1h/24h/7d). 5.0 = each tick
    /// draws a value in [-5, +5].
    pub change_span: f64,

    /// Volume multiplier jitter per tick. 0.05 = within [-5%, +5%] of the
    /// seed volume.
    pub volume_jitter: f64,

    /// Half-span of the seeded chart-history jitter around the seed price.
    pub chart_seed_jitter: f64,
}

pub const FEED: FeedConfig = FeedConfig {
    tick_interval: TICK_INTERVAL,
    price_jitter: 0.01,
    change_span: 5.0,
    volume_jitter: 0.05,
    chart_seed_jitter: 0.05,
};

impl FeedConfig {
    /// Variant with a fast cadence for exercising the worker in tests.
    pub fn with_tick_interval(tick_interval: Duration) -> Self {
        Self {
            tick_interval,
            ..FEED
        }
    }
}
