use std::hash::{Hash, Hasher};

use eframe::egui::{Align2, Color32, FontId, Grid, RichText, ScrollArea, Sense, Ui, Vec2};

use crate::models::{Asset, SortColumn, SortDirection, sorted_assets};
use crate::ui::sparkline::render_sparkline;
use crate::ui::ui_config::UI_CONFIG;
use crate::ui::ui_text::{ICON_SORT_ASC, ICON_SORT_DESC, UI_TEXT};
use crate::ui::utils::{format_number, format_percentage, format_price};

/// Update the sort preference for a header click: clicking the active column
/// flips the direction, clicking any other column selects it highest-first.
pub fn apply_header_click(
    clicked: SortColumn,
    column: &mut SortColumn,
    direction: &mut SortDirection,
) {
    if *column == clicked {
        *direction = direction.toggle();
    } else {
        *column = clicked;
        *direction = SortDirection::Descending;
    }
}

/// The main asset grid.
pub struct AssetTable<'a> {
    assets: &'a [Asset],
    sort_col: SortColumn,
    sort_dir: SortDirection,
}

impl<'a> AssetTable<'a> {
    pub fn new(assets: &'a [Asset], sort_col: SortColumn, sort_dir: SortDirection) -> Self {
        Self {
            assets,
            sort_col,
            sort_dir,
        }
    }

    /// Render the table. Returns the column whose header was clicked, if any.
    pub fn render(&self, ui: &mut Ui) -> Option<SortColumn> {
        let mut clicked = None;

        let sorted = sorted_assets(self.assets, self.sort_col, self.sort_dir);

        ScrollArea::both()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                Grid::new("asset_grid")
                    .striped(true)
                    .spacing([16.0, 6.0])
                    .show(ui, |ui| {
                        self.render_header_row(ui, &mut clicked);

                        for (i, asset) in sorted.iter().enumerate() {
                            ui.label(format!("{}", i + 1));
                            render_badge(ui, asset);
                            ui.label(RichText::new(&asset.name).strong());
                            ui.label(
                                RichText::new(&asset.symbol)
                                    .color(UI_CONFIG.colors.text_neutral),
                            );
                            ui.label(format!("${}", format_price(asset.price)));

                            for change in [asset.change_1h, asset.change_24h, asset.change_7d] {
                                ui.label(
                                    RichText::new(format_percentage(change))
                                        .color(UI_CONFIG.change_color(change)),
                                );
                            }

                            ui.label(format!("${}", format_number(Some(asset.market_cap))));
                            ui.label(format!("${}", format_number(Some(asset.volume_24h))));
                            ui.label(format_number(Some(asset.circulating_supply)));
                            ui.label(format_number(asset.max_supply));
                            render_sparkline(ui, asset);

                            ui.end_row();
                        }
                    });
            });

        clicked
    }

    fn render_header_row(&self, ui: &mut Ui, clicked: &mut Option<SortColumn>) {
        self.plain_header(ui, UI_TEXT.col_rank);
        self.plain_header(ui, UI_TEXT.col_badge);
        self.sortable_header(ui, UI_TEXT.col_name, SortColumn::Name, clicked);
        self.plain_header(ui, UI_TEXT.col_symbol);
        self.sortable_header(ui, UI_TEXT.col_price, SortColumn::Price, clicked);
        self.sortable_header(ui, UI_TEXT.col_change_1h, SortColumn::Change1h, clicked);
        self.sortable_header(ui, UI_TEXT.col_change_24h, SortColumn::Change24h, clicked);
        self.sortable_header(ui, UI_TEXT.col_change_7d, SortColumn::Change7d, clicked);
        self.sortable_header(ui, UI_TEXT.col_market_cap, SortColumn::MarketCap, clicked);
        self.sortable_header(ui, UI_TEXT.col_volume_24h, SortColumn::Volume24h, clicked);
        self.plain_header(ui, UI_TEXT.col_circulating);
        self.sortable_header(ui, UI_TEXT.col_max_supply, SortColumn::MaxSupply, clicked);
        self.plain_header(ui, UI_TEXT.col_chart);
        ui.end_row();
    }

    fn plain_header(&self, ui: &mut Ui, label: &str) {
        ui.label(RichText::new(label).strong());
    }

    fn sortable_header(
        &self,
        ui: &mut Ui,
        label: &str,
        column: SortColumn,
        clicked: &mut Option<SortColumn>,
    ) {
        let active = self.sort_col == column;

        let text = if active {
            let arrow = match self.sort_dir {
                SortDirection::Ascending => ICON_SORT_ASC,
                SortDirection::Descending => ICON_SORT_DESC,
            };
            format!("{} {}", label, arrow)
        } else {
            label.to_string()
        };

        let mut rich = RichText::new(text).strong();
        if active {
            rich = rich.color(UI_CONFIG.colors.heading);
        }

        if ui.selectable_label(active, rich).clicked() {
            *clicked = Some(column);
        }
    }
}

/// Stand-in for the provider logo: a deterministic colored disc with the
/// symbol's first letter. The real logo URL shows on hover.
fn render_badge(ui: &mut Ui, asset: &Asset) {
    let radius = UI_CONFIG.badge_radius;
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(radius * 2.0), Sense::hover());

    ui.painter()
        .circle_filled(rect.center(), radius, badge_color(&asset.symbol));

    let letter = asset.symbol.chars().next().unwrap_or('?');
    ui.painter().text(
        rect.center(),
        Align2::CENTER_CENTER,
        letter,
        FontId::proportional(11.0),
        Color32::WHITE,
    );

    if !asset.logo.is_empty() {
        response.on_hover_text(&asset.logo);
    }
}

fn badge_color(symbol: &str) -> Color32 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    symbol.hash(&mut hasher);
    let h = hasher.finish();

    // Keep each channel away from the extremes so the letter stays legible.
    let r = 64 + (h & 0x7F) as u8;
    let g = 64 + ((h >> 8) & 0x7F) as u8;
    let b = 64 + ((h >> 16) & 0x7F) as u8;
    Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_click_toggles_active_column() {
        let mut column = SortColumn::Price;
        let mut direction = SortDirection::Descending;

        apply_header_click(SortColumn::Price, &mut column, &mut direction);
        assert_eq!(column, SortColumn::Price);
        assert_eq!(direction, SortDirection::Ascending);

        apply_header_click(SortColumn::Price, &mut column, &mut direction);
        assert_eq!(direction, SortDirection::Descending);
    }

    #[test]
    fn test_header_click_new_column_defaults_descending() {
        let mut column = SortColumn::Price;
        let mut direction = SortDirection::Ascending;

        apply_header_click(SortColumn::MarketCap, &mut column, &mut direction);
        assert_eq!(column, SortColumn::MarketCap);
        assert_eq!(direction, SortDirection::Descending);
    }

    #[test]
    fn test_badge_color_is_deterministic() {
        assert_eq!(badge_color("BTC"), badge_color("BTC"));
        // Different symbols land on different colors (for these inputs).
        assert_ne!(badge_color("BTC"), badge_color("ETH"));
    }
}
