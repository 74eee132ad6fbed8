//! # DMS to DD Converter
//!
//! A small GUI tool that converts geographic coordinates entered in
//! degrees-minutes-seconds (DMS) into decimal degrees (DD) and plots the
//! result on an interactive slippy map.
//!
//! ## Features
//! - Six free-text DMS fields (degrees/minutes/seconds × latitude/longitude)
//!   with range validation on minutes and seconds
//! - Decimal-degree results shown with 8 fractional digits
//! - Camera flight to the converted coordinate on an OpenStreetMap or
//!   MapTiler basemap
//! - Marker placement with a selectable icon, one more marker per click
//!
//! The conversion and form state machine live in [`ConverterForm`] and are
//! independent of the UI; the map widget is reached only through the
//! [`MapOps`] capability trait.

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod constants;
mod conversion;
mod form;
mod types;
mod ui;

// Re-export public types and functions
pub use conversion::{dms_to_decimal, ConvertError};
pub use form::{ConverterForm, FormError, MapOps};
pub use types::{CoordinatePair, Dms, DmsFields, MarkerIcon};
pub use ui::{ConverterApp, MapMarker, MapView, TileProviderKind};

/// Runs the converter application with default settings.
///
/// Initializes the egui application window and starts the main event loop.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an
/// `eframe::Error` if initialization fails.
#[cfg(not(target_arch = "wasm32"))]
pub fn run_app() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        constants::APP_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(ConverterApp::new(cc)))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converter_form_default() {
        let form = ConverterForm::default();
        assert!(form.result.is_none());
        assert!(form.result_lat.is_empty());
        assert_eq!(form.icon, MarkerIcon::Default);
    }

    #[test]
    fn test_public_conversion_entry_point() {
        let dd = dms_to_decimal(40.0, 30.0, 30.0).unwrap();
        assert!((dd - 40.508_333_33).abs() < 1e-8);
    }
}
