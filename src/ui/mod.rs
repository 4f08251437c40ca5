mod sparkline;
mod table;
mod ui_config;
mod ui_text;
mod utils;

pub(crate) use table::{AssetTable, apply_header_click};
pub(crate) use ui_config::UI_CONFIG;
pub(crate) use ui_text::UI_TEXT;

pub use utils::{format_number, format_percentage, format_price};
