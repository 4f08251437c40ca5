// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod models;
pub mod ui;

// Re-export commonly used types outside of crate
pub use app::App;
pub use data::{FeedBatch, FeedSubscription, PriceFeedSimulator, seed_assets};
pub use models::{Asset, AssetStore, ChartPoint, SortColumn, SortDirection, sorted_assets};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Start with the live feed paused (resume from the toolbar)
    #[arg(long, default_value_t = false)]
    pub paused: bool,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
