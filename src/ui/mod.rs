//! User interface layout and rendering.
//!
//! # Module Organization
//!
//! - `state` - Application state structures and the main ConverterApp
//! - `map` - Map view adapter, tile sources and the marker layer
//!
//! The per-frame layout is a top toolbar, a left panel holding the
//! conversion form and a central panel holding the map. Validation failures
//! are shown as one centered alert dialog until dismissed.

mod map;
mod state;

pub use map::{MapMarker, MapView, TileProviderKind};
pub use state::ConverterApp;

use eframe::egui;

use crate::constants::{APP_STATE_KEY, APP_TITLE, FORM_PANEL_WIDTH, RESULT_DECIMALS};
use crate::types::{DmsFields, MarkerIcon};

impl eframe::App for ConverterApp {
    /// Persist UI preferences between restarts.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match self.to_json() {
            Ok(json) => storage.set_string(APP_STATE_KEY, json),
            Err(err) => log::warn!("failed to serialize app state: {err}"),
        }
    }

    /// Main update function called by egui for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let visuals = if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);

        egui::TopBottomPanel::top("top_toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });

        egui::SidePanel::left("converter_panel")
            .resizable(false)
            .exact_width(FORM_PANEL_WIDTH)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.draw_form(ui);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.map.show(ui);
        });

        self.draw_alert(ctx);
    }
}

impl ConverterApp {
    /// Draws the toolbar: title, theme toggle and tile-provider selector.
    fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(APP_TITLE).strong());
            ui.separator();

            let theme_label = if self.dark_mode { "Light mode" } else { "Dark mode" };
            if ui.button(theme_label).clicked() {
                self.dark_mode = !self.dark_mode;
            }
            ui.separator();

            let mut selected = self.map.provider();
            egui::ComboBox::from_id_salt("tile_provider_combo")
                .selected_text(selected.label())
                .show_ui(ui, |ui| {
                    for provider in TileProviderKind::ALL {
                        ui.selectable_value(&mut selected, provider, provider.label());
                    }
                });
            if selected != self.map.provider() {
                self.map.set_provider(selected, ui.ctx());
            }
        });
    }

    /// Draws the conversion form: six inputs, icon selector, action buttons
    /// and the result fields.
    fn draw_form(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        ui.vertical_centered(|ui| {
            ui.heading("DMS to DD");
            ui.label("Enter coordinates in degrees, minutes and seconds to convert them to decimal degrees.");
        });
        ui.add_space(8.0);

        ui.columns(2, |columns| {
            Self::draw_axis_inputs(&mut columns[0], "Latitude", &mut self.form.latitude);
            Self::draw_axis_inputs(&mut columns[1], "Longitude", &mut self.form.longitude);
        });
        ui.add_space(8.0);

        egui::ComboBox::from_label("Marker icon")
            .selected_text(self.form.icon.label())
            .show_ui(ui, |ui| {
                for icon in MarkerIcon::ALL {
                    ui.selectable_value(&mut self.form.icon, icon, icon.label());
                }
            });
        ui.add_space(8.0);

        ui.vertical_centered_justified(|ui| {
            if ui.button("Convert").clicked() {
                self.convert_clicked();
            }
            if ui.button("Add to map").clicked() {
                self.add_marker_clicked();
            }
        });

        ui.add_space(8.0);
        ui.separator();
        self.draw_results(ui);
    }

    /// Draws one axis' labelled degrees/minutes/seconds inputs.
    fn draw_axis_inputs(ui: &mut egui::Ui, heading: &str, fields: &mut DmsFields) {
        ui.label(egui::RichText::new(heading).strong());
        ui.add(egui::TextEdit::singleline(&mut fields.degrees).hint_text("Degrees (°)"));
        ui.add(egui::TextEdit::singleline(&mut fields.minutes).hint_text("Minutes (′)"));
        ui.add(egui::TextEdit::singleline(&mut fields.seconds).hint_text("Seconds (″)"));
    }

    /// Draws the read-only result fields.
    fn draw_results(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("Result").strong());

        ui.label("Lat (DD):");
        ui.add(
            egui::TextEdit::singleline(&mut self.form.result_lat)
                .interactive(false)
                .horizontal_align(egui::Align::Center),
        );
        ui.label("Lng (DD):");
        ui.add(
            egui::TextEdit::singleline(&mut self.form.result_lng)
                .interactive(false)
                .horizontal_align(egui::Align::Center),
        );

        ui.add_space(4.0);
        ui.small(format!(
            "Results are shown with {RESULT_DECIMALS} decimal places."
        ));
    }

    /// Draws the alert dialog for the current validation failure, if any.
    fn draw_alert(&mut self, ctx: &egui::Context) {
        let Some(message) = self.alert.clone() else {
            return;
        };
        egui::Window::new("Notice")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(4.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        self.alert = None;
                    }
                });
            });
    }
}
