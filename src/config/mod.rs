//! Configuration module for the coin-pulse application.

// Can all be private now because we have a public re-export.
mod debug;
mod feed;
mod persistence;

// Public
pub mod constants;

// Re-export commonly used items
pub use debug::DF;
pub use feed::{FEED, FeedConfig};
pub use persistence::PERSISTENCE;
