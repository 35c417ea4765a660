// src/bin/stock_display.rs

use eframe::egui;
use egui::{Color32, FontId, Frame, RichText, Stroke};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};
use log::{error, info};
use stock_display::{SharedStore, StockStore, StoreConfig};

struct StockDisplayApp {
    store: SharedStore,
    // Filled by the store listener, shown in the status line.
    last_change: std::sync::Arc<parking_lot::Mutex<Option<String>>>,
}

impl eframe::App for StockDisplayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Picker choices are collected under the read guard and applied after it drops.
        let mut picked: Option<String> = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            let store = self.store.read();

            ui.horizontal(|ui| {
                ui.heading("股票走势");
                ui.add_space(20.0);

                let current = store
                    .selected_stock()
                    .map(|s| s.display_label())
                    .unwrap_or_else(|| store.selected_symbol().to_string());
                egui::ComboBox::from_label("Stock")
                    .selected_text(current)
                    .show_ui(ui, |ui| {
                        for stock in store.stocks() {
                            let is_selected = stock.symbol == store.selected_symbol();
                            if ui.selectable_label(is_selected, stock.display_label()).clicked() {
                                picked = Some(stock.symbol.clone());
                            }
                        }
                    });
            });

            if let Some(msg) = self.last_change.lock().as_ref() {
                ui.label(RichText::new(msg).italics());
            }
            ui.separator();

            let Some(series) = store.selected_series() else {
                ui.label(RichText::new("No data for the selected symbol").color(Color32::LIGHT_RED));
                return;
            };
            let dataset = series.dataset();
            let color = parse_hex_color(&dataset.border_color).unwrap_or(Color32::LIGHT_BLUE);

            Frame::dark_canvas(ui.style())
                .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                .show(ui, |ui| {
                    let mono_font = FontId::monospace(14.0);
                    egui::Grid::new("series_grid").num_columns(series.labels.len()).spacing([20.0, 2.0]).show(ui, |ui| {
                        for label in &series.labels {
                            ui.label(RichText::new(label).strong());
                        }
                        ui.end_row();
                        for v in &dataset.data {
                            ui.label(RichText::new(v.to_string()).font(mono_font.clone()));
                        }
                        ui.end_row();
                    });
                });
            ui.add_space(4.0);

            let ys: Vec<f64> = dataset.data.iter().map(|&v| v as f64).collect();
            Frame::dark_canvas(ui.style()).show(ui, |ui| {
                Plot::new("stock_plot")
                    .height(ui.available_height())
                    .width(ui.available_width())
                    .legend(Legend::default())
                    .show(ui, |plot_ui| {
                        let line = Line::new(PlotPoints::from_ys_f64(&ys))
                            .color(color)
                            .stroke(Stroke::new(2.0, color))
                            .name(&dataset.label);
                        plot_ui.line(line);
                        plot_ui.points(Points::new(PlotPoints::from_ys_f64(&ys)).color(color).radius(3.0));
                    });
            });
        });

        if let Some(symbol) = picked {
            self.store.select(&symbol);
        }
    }
}

/// "#rrggbb" -> Color32
fn parse_hex_color(hex: &str) -> Option<Color32> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?))
}

fn load_store() -> StockStore {
    // Optional first argument: path to a JSON StoreConfig.
    let Some(path) = std::env::args().nth(1) else {
        return StockStore::new();
    };
    let built = StoreConfig::from_json_file(&path).and_then(StockStore::from_config);
    match built {
        Ok(store) => {
            info!("loaded store config from {}", path);
            store
        }
        Err(e) => {
            error!("failed to load {}: {}; using defaults", path, e);
            StockStore::new()
        }
    }
}

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let store = SharedStore::new(load_store());
    let last_change = std::sync::Arc::new(parking_lot::Mutex::new(None));
    let sink = last_change.clone();
    store.subscribe(move |change| {
        *sink.lock() = Some(format!("{} -> {}", change.previous, change.current));
    });

    let app_state = StockDisplayApp { store, last_change };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_title("Stock Display"),
        ..Default::default()
    };

    eframe::run_native(
        "Stock Display App",
        native_options,
        Box::new(|_cc| Box::new(app_state)),
    )
}
