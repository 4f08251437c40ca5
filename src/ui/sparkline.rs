use eframe::egui::{Id, LayerId, Order::Tooltip, RichText, Ui};

#[allow(deprecated)]
use eframe::egui::show_tooltip_at_pointer;

use egui_plot::{Line, Plot, PlotPoints, Points};

use crate::models::Asset;
use crate::ui::ui_config::UI_CONFIG;
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::{format_number, format_price};

/// Draw one asset's trailing-week trend as a small inline line chart.
///
/// Trend color follows the 7d change (flat counts as up). Hovering runs a
/// manual nearest-point hit test and pops a tooltip with that point's
/// details.
pub fn render_sparkline(ui: &mut Ui, asset: &Asset) {
    if asset.chart_data.is_empty() {
        ui.label("-");
        return;
    }

    let color = if asset.is_week_positive() {
        UI_CONFIG.colors.trend_up
    } else {
        UI_CONFIG.colors.trend_down
    };

    let coords: Vec<[f64; 2]> = asset
        .chart_data
        .iter()
        .enumerate()
        .map(|(i, point)| [i as f64, point.price])
        .collect();

    Plot::new(("sparkline", asset.id.as_str()))
        .width(UI_CONFIG.sparkline_width)
        .height(UI_CONFIG.sparkline_height)
        .show_axes([false, false])
        .show_grid(false)
        .show_background(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .label_formatter(|_, _| String::new())
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new("", PlotPoints::new(coords.clone()))
                    .color(color)
                    .width(1.5),
            );
            plot_ui.points(
                Points::new("", PlotPoints::new(coords))
                    .color(color)
                    .radius(2.0),
            );

            // Manual Hit Test
            if let Some(pointer) = plot_ui.pointer_coordinate() {
                let idx = pointer.x.round();
                if idx >= 0.0 && (idx as usize) < asset.chart_data.len() {
                    let point = &asset.chart_data[idx as usize];
                    let tooltip_layer = LayerId::new(Tooltip, Id::new("sparkline_tooltips"));

                    #[allow(deprecated)]
                    show_tooltip_at_pointer(
                        plot_ui.ctx(),
                        tooltip_layer,
                        Id::new(("sparkline_tip", asset.id.as_str())),
                        |ui: &mut Ui| {
                            ui.label(RichText::new(UI_TEXT.tip_title).strong().color(color));
                            ui.separator();
                            ui.label(format!(
                                "{}: {}",
                                UI_TEXT.tip_date,
                                point.date.format("%Y-%m-%d")
                            ));
                            ui.label(format!(
                                "{}: ${}",
                                UI_TEXT.tip_price,
                                format_price(point.price)
                            ));
                            if let Some(volume) = point.volume {
                                ui.label(format!(
                                    "{}: ${}",
                                    UI_TEXT.tip_volume,
                                    format_number(Some(volume))
                                ));
                            }
                            if let Some(market_cap) = point.market_cap {
                                ui.label(format!(
                                    "{}: ${}",
                                    UI_TEXT.tip_market_cap,
                                    format_number(Some(market_cap))
                                ));
                            }
                        },
                    );
                }
            }
        });
}
