//! Core data types for coordinate entry, conversion results and marker icons.

use serde::{Deserialize, Serialize};

use crate::constants::{FLAG_ICON_URL, PIN_ICON_URL};
use crate::conversion::{dms_to_decimal, ConvertError};

/// One axis' angle in degrees-minutes-seconds form.
///
/// Minutes and seconds are expected in `[0, 60)`; degrees may be any real
/// number and its sign decides the hemisphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees, signed.
    pub degrees: f64,
    /// Arc minutes.
    pub minutes: f64,
    /// Arc seconds.
    pub seconds: f64,
}

impl Dms {
    /// Creates an angle from its three components.
    pub fn new(degrees: f64, minutes: f64, seconds: f64) -> Self {
        Self {
            degrees,
            minutes,
            seconds,
        }
    }

    /// Converts this angle to signed decimal degrees.
    ///
    /// Fails when minutes or seconds fall outside `[0, 60)`.
    pub fn to_decimal_degrees(self) -> Result<f64, ConvertError> {
        dms_to_decimal(self.degrees, self.minutes, self.seconds)
    }
}

/// A converted latitude/longitude pair in decimal degrees.
///
/// Regenerated wholesale on every successful conversion; never partially
/// updated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinatePair {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// The three free-text fields of one axis, exactly as typed by the user.
///
/// Values stay strings until a conversion is attempted; parsing happens in
/// [`DmsFields::parse`] and never mutates the fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DmsFields {
    /// Degrees field text.
    pub degrees: String,
    /// Minutes field text.
    pub minutes: String,
    /// Seconds field text.
    pub seconds: String,
}

impl DmsFields {
    /// Parses the three fields into a [`Dms`] angle.
    ///
    /// Returns `None` when any field is empty or does not parse as a number;
    /// range validation is left to the conversion step.
    pub fn parse(&self) -> Option<Dms> {
        let degrees = self.degrees.trim().parse::<f64>().ok()?;
        let minutes = self.minutes.trim().parse::<f64>().ok()?;
        let seconds = self.seconds.trim().parse::<f64>().ok()?;
        Some(Dms::new(degrees, minutes, seconds))
    }
}

/// The marker glyph used when placing a point on the map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerIcon {
    /// A plain painted circle; no image download involved.
    #[default]
    Default,
    /// Hosted map-pin image.
    Pin,
    /// Hosted flag image.
    Flag,
}

impl MarkerIcon {
    /// Every selectable icon, in display order.
    pub const ALL: [Self; 3] = [Self::Default, Self::Pin, Self::Flag];

    /// Human-readable name shown in the icon selector.
    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Pin => "Pin",
            Self::Flag => "Flag",
        }
    }

    /// Image URL for this icon, or `None` for the painted default glyph.
    pub fn url(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Pin => Some(PIN_ICON_URL),
            Self::Flag => Some(FLAG_ICON_URL),
        }
    }
}
