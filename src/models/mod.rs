mod asset;
mod sort;
mod store;

pub use asset::{Asset, ChartPoint};
pub use sort::{SortColumn, SortDirection, sorted_assets};
pub use store::AssetStore;
