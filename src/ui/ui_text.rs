//! User-facing strings, gathered in one place.

pub struct UiText {
    pub app_heading: &'static str,

    // Table headers
    pub col_rank: &'static str,
    pub col_badge: &'static str,
    pub col_name: &'static str,
    pub col_symbol: &'static str,
    pub col_price: &'static str,
    pub col_change_1h: &'static str,
    pub col_change_24h: &'static str,
    pub col_change_7d: &'static str,
    pub col_market_cap: &'static str,
    pub col_volume_24h: &'static str,
    pub col_circulating: &'static str,
    pub col_max_supply: &'static str,
    pub col_chart: &'static str,

    // Sparkline tooltip
    pub tip_title: &'static str,
    pub tip_date: &'static str,
    pub tip_price: &'static str,
    pub tip_volume: &'static str,
    pub tip_market_cap: &'static str,

    // Status bar
    pub status_live: &'static str,
    pub status_paused: &'static str,
    pub status_loading: &'static str,
    pub btn_pause: &'static str,
    pub btn_resume: &'static str,

    /// Rendered for uncapped / unknown numeric values.
    pub infinity: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    app_heading: "Coin Pulse",

    col_rank: "#",
    col_badge: "",
    col_name: "Name",
    col_symbol: "Symbol",
    col_price: "Price",
    col_change_1h: "1h %",
    col_change_24h: "24h %",
    col_change_7d: "7d %",
    col_market_cap: "Market Cap",
    col_volume_24h: "24h Volume",
    col_circulating: "Circulating Supply",
    col_max_supply: "Max Supply",
    col_chart: "7D Chart",

    tip_title: "Detailed Price Data",
    tip_date: "Date",
    tip_price: "Price",
    tip_volume: "Volume",
    tip_market_cap: "Market Cap",

    status_live: "LIVE",
    status_paused: "PAUSED",
    status_loading: "Loading...",
    btn_pause: "Pause feed",
    btn_resume: "Resume feed",

    infinity: "\u{221e}",
};

// (Sort arrows)
pub const ICON_SORT_ASC: &str = "\u{25b2}"; // ▲
pub const ICON_SORT_DESC: &str = "\u{25bc}"; // ▼
