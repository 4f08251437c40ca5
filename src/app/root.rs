use eframe::{
    Frame, Storage,
    egui::{CentralPanel, Context, RichText, TopBottomPanel, Visuals},
};
use serde::{Deserialize, Serialize};

use crate::{
    Cli,
    config::constants::TICK_INTERVAL,
    data::{FeedSubscription, PriceFeedSimulator, seed_assets},
    models::{Asset, AssetStore, SortColumn, SortDirection},
    ui::{AssetTable, UI_CONFIG, UI_TEXT, apply_header_click},
};

#[cfg(debug_assertions)]
use crate::config::DF;

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    // Sort preference persists across sessions.
    pub(crate) sort_col: SortColumn,
    pub(crate) sort_dir: SortDirection,

    #[serde(skip)]
    pub(crate) store: AssetStore,
    #[serde(skip)]
    pub(crate) seeds: Vec<Asset>,
    #[serde(skip)]
    pub(crate) feed: PriceFeedSimulator,
    #[serde(skip)]
    pub(crate) subscription: Option<FeedSubscription>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            sort_col: SortColumn::default(),
            sort_dir: SortDirection::default(),
            store: AssetStore::new(),
            seeds: Vec::new(),
            feed: PriceFeedSimulator::new(),
            subscription: None,
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        #[cfg(debug_assertions)]
        if DF.log_persistence {
            log::info!(
                "restored sort preference: {} {:?}",
                app.sort_col,
                app.sort_dir
            );
        }

        // Seed the store once. The only thing that can fail at startup is the
        // embedded JSON parse; surface that through the store's error slot.
        app.store.set_loading(true);
        match seed_assets() {
            Ok(seeds) => {
                app.store.set_assets(seeds.clone());
                app.seeds = seeds;
            }
            Err(e) => {
                log::error!("failed to load seed assets: {e:#}");
                app.store.set_error(Some(format!("{e:#}")));
            }
        }
        app.store.set_loading(false);

        app.subscription = Some(app.feed.subscribe());
        if !args.paused && !app.seeds.is_empty() {
            app.feed.start(app.seeds.clone());
        }

        app
    }

    /// Apply every batch the feed produced since the last frame. Each record
    /// replaces its entry by id, so a batch is just a burst of upserts.
    fn drain_feed(&mut self) {
        let mut batches = Vec::new();
        if let Some(sub) = &self.subscription {
            while let Ok(batch) = sub.rx.try_recv() {
                batches.push(batch);
            }
        }

        for batch in batches {
            for asset in batch {
                self.store.update_asset(asset);
            }
        }
    }

    fn toggle_feed(&mut self) {
        if self.feed.is_running() {
            self.feed.stop();
        } else if !self.seeds.is_empty() {
            self.feed.start(self.seeds.clone());
        }
    }

    fn render_top_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("top_toolbar")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new(UI_TEXT.app_heading)
                            .color(UI_CONFIG.colors.heading)
                            .strong(),
                    );

                    ui.separator();

                    let label = if self.feed.is_running() {
                        UI_TEXT.btn_pause
                    } else {
                        UI_TEXT.btn_resume
                    };
                    if ui.button(label).clicked() {
                        self.toggle_feed();
                    }
                });
            });
    }

    fn render_status_panel(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("status_bar")
            .frame(UI_CONFIG.bottom_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let (text, color) = if self.feed.is_running() {
                        (UI_TEXT.status_live, UI_CONFIG.colors.trend_up)
                    } else {
                        (UI_TEXT.status_paused, UI_CONFIG.colors.text_neutral)
                    };
                    ui.label(RichText::new(text).strong().color(color));

                    ui.separator();
                    ui.label(format!("{} assets", self.store.assets().len()));

                    if let Some(error) = self.store.error() {
                        ui.separator();
                        ui.label(RichText::new(error).color(UI_CONFIG.colors.status_error));
                    }
                });
            });
    }

    fn render_central_panel(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            if self.store.is_loading() {
                ui.centered_and_justified(|ui| {
                    ui.label(UI_TEXT.status_loading);
                });
                return;
            }

            let table = AssetTable::new(self.store.assets(), self.sort_col, self.sort_dir);
            if let Some(clicked) = table.render(ui) {
                apply_header_click(clicked, &mut self.sort_col, &mut self.sort_dir);

                #[cfg(debug_assertions)]
                if DF.log_sort_events {
                    log::info!("sort preference now {} {:?}", self.sort_col, self.sort_dir);
                }
            }
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.drain_feed();

        self.render_top_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);

        // egui only repaints on input; keep frames coming while batches are
        // in flight so fresh ticks appear without the user wiggling a mouse.
        if self.feed.is_running() {
            ctx.request_repaint_after(TICK_INTERVAL / 4);
        }
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        #[cfg(debug_assertions)]
        if DF.log_persistence {
            log::info!(
                "saving sort preference: {} {:?}",
                self.sort_col,
                self.sort_dir
            );
        }
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Release in the order we acquired: subscription first, then the
        // worker, so no periodic callback outlives the view.
        if let Some(sub) = self.subscription.take() {
            self.feed.unsubscribe(sub.id);
        }
        self.feed.stop();
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
