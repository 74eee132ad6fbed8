//! Application state management.
//!
//! [`ConverterApp`] composes the form state machine with the map view and
//! the few UI preferences that survive restarts. Everything coordinate- or
//! result-shaped is transient.

use serde::{Deserialize, Serialize};

use super::map::MapView;
use crate::constants::APP_STATE_KEY;
use crate::form::ConverterForm;

/// The main application structure: form, map and UI preferences.
///
/// Implements `eframe::App`; per-frame layout lives in the parent module.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterApp {
    /// Conversion form state (fields, icon choice, latest result).
    pub form: ConverterForm,
    /// The single live map view.
    pub map: MapView,
    /// Message of the currently shown alert dialog, if any.
    #[serde(skip)]
    pub alert: Option<String>,
    /// Whether dark mode visuals are enabled.
    pub dark_mode: bool,
}

impl Default for ConverterApp {
    fn default() -> Self {
        Self {
            form: ConverterForm::default(),
            map: MapView::default(),
            alert: None,
            dark_mode: true,
        }
    }
}

impl ConverterApp {
    /// Creates the application, restoring persisted UI preferences and
    /// installing the image loaders used for marker icons.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        cc.storage
            .and_then(|storage| storage.get_string(APP_STATE_KEY))
            .and_then(|json| match Self::from_json(&json) {
                Ok(app) => Some(app),
                Err(err) => {
                    log::warn!("failed to restore preferences: {err}");
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Serializes the persistable application state to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes application state from JSON; transient fields come back
    /// at their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Runs the conversion and surfaces any validation failure as an alert.
    pub fn convert_clicked(&mut self) {
        if let Err(err) = self.form.perform_conversion(&mut self.map) {
            self.alert = Some(err.to_string());
        }
    }

    /// Places a marker and surfaces any validation failure as an alert.
    pub fn add_marker_clicked(&mut self) {
        if let Err(err) = self.form.place_marker(&mut self.map) {
            self.alert = Some(err.to_string());
        }
    }
}
