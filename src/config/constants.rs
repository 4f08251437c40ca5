use std::time::Duration;

// Top Level Constants
pub const TICK_INTERVAL: Duration = Duration::from_secs(2); // Feed cadence. Used throughout app from this point forwards.

/// Number of daily points in each asset's trailing-week chart.
pub const CHART_POINTS: usize = 7;
