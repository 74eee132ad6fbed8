//! The converter form state machine.
//!
//! [`ConverterForm`] owns the raw field text, the selected marker icon and
//! the last successful conversion result. Its two operations (converting
//! the fields and placing a marker) return `Result` values; the UI layer
//! surfaces errors as alert dialogs. A failed operation never mutates the
//! displayed result, so an earlier success is kept until the next one.
//!
//! The map widget is reached only through the [`MapOps`] capability trait,
//! keeping this module free of any concrete mapping library.

use serde::{Deserialize, Serialize};

use crate::constants::{RESULT_DECIMALS, RESULT_ZOOM};
use crate::conversion::ConvertError;
use crate::types::{CoordinatePair, DmsFields, MarkerIcon};

/// The two operations the form needs from a map view.
pub trait MapOps {
    /// Centers the camera on the given coordinate at the given zoom level.
    fn move_camera(&mut self, latitude: f64, longitude: f64, zoom: f64);
    /// Adds one marker at the given coordinate, drawn with the given icon.
    fn add_marker(&mut self, latitude: f64, longitude: f64, icon: MarkerIcon);
}

/// A user-visible validation failure of a form operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormError {
    /// At least one of the six fields is empty or not numeric.
    IncompleteInput,
    /// Minutes or seconds fell outside `[0, 60)`.
    AngleOutOfRange(ConvertError),
    /// Marker placement was requested before any successful conversion.
    NothingConverted,
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IncompleteInput => {
                write!(f, "Enter all coordinate values before converting.")
            }
            Self::AngleOutOfRange(err) => write!(f, "{err}"),
            Self::NothingConverted => {
                write!(f, "Convert coordinates first before adding a marker.")
            }
        }
    }
}

impl std::error::Error for FormError {}

impl From<ConvertError> for FormError {
    fn from(err: ConvertError) -> Self {
        Self::AngleOutOfRange(err)
    }
}

/// State of the conversion form: six text fields, the selected marker icon
/// and the latest result.
///
/// Only the icon choice is persisted between sessions; field text and
/// results are transient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterForm {
    /// Latitude degrees/minutes/seconds field text.
    #[serde(skip)]
    pub latitude: DmsFields,
    /// Longitude degrees/minutes/seconds field text.
    #[serde(skip)]
    pub longitude: DmsFields,
    /// Icon used for the next placed marker.
    pub icon: MarkerIcon,
    /// Latest successful conversion, if any.
    #[serde(skip)]
    pub result: Option<CoordinatePair>,
    /// Latitude result formatted for display.
    #[serde(skip)]
    pub result_lat: String,
    /// Longitude result formatted for display.
    #[serde(skip)]
    pub result_lng: String,
}

impl ConverterForm {
    /// Attempts to convert the six fields into a [`CoordinatePair`].
    ///
    /// On success the pair replaces any previous result, the display strings
    /// are regenerated and the camera is centered on the new coordinate at
    /// [`RESULT_ZOOM`]. On failure nothing changes and the error describes
    /// what to correct.
    pub fn perform_conversion(&mut self, map: &mut dyn MapOps) -> Result<(), FormError> {
        let lat = self.latitude.parse().ok_or(FormError::IncompleteInput)?;
        let lng = self.longitude.parse().ok_or(FormError::IncompleteInput)?;

        let latitude = lat.to_decimal_degrees()?;
        let longitude = lng.to_decimal_degrees()?;

        self.result = Some(CoordinatePair {
            latitude,
            longitude,
        });
        self.result_lat = format!("{latitude:.prec$}", prec = RESULT_DECIMALS);
        self.result_lng = format!("{longitude:.prec$}", prec = RESULT_DECIMALS);

        map.move_camera(latitude, longitude, RESULT_ZOOM);
        Ok(())
    }

    /// Places one marker at the latest converted coordinate.
    ///
    /// Requires a prior successful conversion. Every call adds a further
    /// marker; there is no deduplication or removal.
    pub fn place_marker(&self, map: &mut dyn MapOps) -> Result<(), FormError> {
        let pair = self.result.ok_or(FormError::NothingConverted)?;
        map.add_marker(pair.latitude, pair.longitude, self.icon);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Map double that records the calls it receives.
    #[derive(Default)]
    struct RecordingMap {
        camera_moves: Vec<(f64, f64, f64)>,
        markers: Vec<(f64, f64, MarkerIcon)>,
    }

    impl MapOps for RecordingMap {
        fn move_camera(&mut self, latitude: f64, longitude: f64, zoom: f64) {
            self.camera_moves.push((latitude, longitude, zoom));
        }

        fn add_marker(&mut self, latitude: f64, longitude: f64, icon: MarkerIcon) {
            self.markers.push((latitude, longitude, icon));
        }
    }

    fn filled_form() -> ConverterForm {
        ConverterForm {
            latitude: DmsFields {
                degrees: "40".to_string(),
                minutes: "30".to_string(),
                seconds: "30".to_string(),
            },
            longitude: DmsFields {
                degrees: "-74".to_string(),
                minutes: "0".to_string(),
                seconds: "21.6".to_string(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn successful_conversion_stores_pair_and_moves_camera() {
        let mut form = filled_form();
        let mut map = RecordingMap::default();

        form.perform_conversion(&mut map).unwrap();

        let pair = form.result.unwrap();
        assert_eq!(form.result_lat, "40.50833333");
        assert_eq!(form.result_lng, "-74.00600000");
        assert_eq!(map.camera_moves, vec![(pair.latitude, pair.longitude, RESULT_ZOOM)]);
    }

    #[test]
    fn missing_field_reports_incomplete_input() {
        let mut form = filled_form();
        form.longitude.seconds.clear();
        let mut map = RecordingMap::default();

        assert_eq!(
            form.perform_conversion(&mut map),
            Err(FormError::IncompleteInput)
        );
        assert!(form.result.is_none());
        assert!(map.camera_moves.is_empty());
    }

    #[test]
    fn non_numeric_field_reports_incomplete_input() {
        let mut form = filled_form();
        form.latitude.degrees = "north".to_string();
        let mut map = RecordingMap::default();

        assert_eq!(
            form.perform_conversion(&mut map),
            Err(FormError::IncompleteInput)
        );
    }

    #[test]
    fn out_of_range_minutes_report_a_distinct_error() {
        let mut form = filled_form();
        form.latitude.minutes = "75".to_string();
        let mut map = RecordingMap::default();

        assert_eq!(
            form.perform_conversion(&mut map),
            Err(FormError::AngleOutOfRange(ConvertError::MinutesOutOfRange(
                75.0
            )))
        );
        assert!(map.camera_moves.is_empty());
    }

    #[test]
    fn failures_keep_the_previous_result() {
        let mut form = filled_form();
        let mut map = RecordingMap::default();
        form.perform_conversion(&mut map).unwrap();
        let first = form.result;
        let first_lat = form.result_lat.clone();

        // An incomplete attempt must not disturb the prior success.
        form.latitude.degrees.clear();
        assert!(form.perform_conversion(&mut map).is_err());
        assert_eq!(form.result, first);
        assert_eq!(form.result_lat, first_lat);

        // Neither must an out-of-range attempt.
        form.latitude.degrees = "10".to_string();
        form.latitude.seconds = "60".to_string();
        assert!(form.perform_conversion(&mut map).is_err());
        assert_eq!(form.result, first);
        assert_eq!(map.camera_moves.len(), 1);
    }

    #[test]
    fn sequential_conversions_replace_the_pair() {
        let mut form = filled_form();
        let mut map = RecordingMap::default();
        form.perform_conversion(&mut map).unwrap();

        form.latitude = DmsFields {
            degrees: "-10".to_string(),
            minutes: "30".to_string(),
            seconds: "0".to_string(),
        };
        form.perform_conversion(&mut map).unwrap();

        let pair = form.result.unwrap();
        assert_eq!(pair.latitude, -10.5);
        assert_eq!(form.result_lat, "-10.50000000");
        assert_eq!(map.camera_moves.len(), 2);
    }

    #[test]
    fn marker_before_conversion_is_rejected() {
        let form = ConverterForm::default();
        let mut map = RecordingMap::default();

        assert_eq!(form.place_marker(&mut map), Err(FormError::NothingConverted));
        assert!(map.markers.is_empty());
    }

    #[test]
    fn marker_placement_records_the_selected_icon() {
        let mut form = filled_form();
        form.icon = MarkerIcon::Flag;
        let mut map = RecordingMap::default();
        form.perform_conversion(&mut map).unwrap();

        form.place_marker(&mut map).unwrap();
        form.place_marker(&mut map).unwrap();

        let pair = form.result.unwrap();
        assert_eq!(
            map.markers,
            vec![
                (pair.latitude, pair.longitude, MarkerIcon::Flag),
                (pair.latitude, pair.longitude, MarkerIcon::Flag),
            ]
        );
    }

    #[test]
    fn error_messages_are_distinct_per_failure_class() {
        let incomplete = FormError::IncompleteInput.to_string();
        let range =
            FormError::AngleOutOfRange(ConvertError::SecondsOutOfRange(60.0)).to_string();
        let unconverted = FormError::NothingConverted.to_string();

        assert_ne!(incomplete, range);
        assert_ne!(incomplete, unconverted);
        assert_ne!(range, unconverted);
    }
}
