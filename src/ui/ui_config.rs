use eframe::egui::{Color32, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,

    /// Positive change cells and upward sparklines.
    pub trend_up: Color32,
    /// Negative change cells and downward sparklines.
    pub trend_down: Color32,
    pub text_neutral: Color32,
    pub status_error: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub sparkline_width: f32,
    pub sparkline_height: f32,
    pub badge_radius: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY, // This sets every label globally to this color
        heading: Color32::YELLOW,
        central_panel: Color32::from_rgb(18, 18, 24),
        side_panel: Color32::from_rgb(25, 25, 25),

        trend_up: Color32::from_rgb(76, 175, 80),
        trend_down: Color32::from_rgb(244, 67, 54),
        text_neutral: Color32::LIGHT_GRAY,
        status_error: Color32::from_rgb(255, 100, 100),
    },
    sparkline_width: 100.0,
    sparkline_height: 40.0,
    badge_radius: 10.0,
};

impl UiConfig {
    /// Frame for the Top Toolbar (Standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for Bottom Status bar (Tighter vertical padding)
    pub fn bottom_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(8, 4), // Tighter vertically
            ..Default::default()
        }
    }

    /// Cell color for a signed change value.
    pub fn change_color(&self, value: f64) -> Color32 {
        if value >= 0.0 {
            self.colors.trend_up
        } else {
            self.colors.trend_down
        }
    }
}
