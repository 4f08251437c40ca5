mod price_feed;
mod seed;

pub use {
    price_feed::{FeedBatch, FeedSubscription, PriceFeedSimulator},
    seed::seed_assets,
};
