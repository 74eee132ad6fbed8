//! Conversion from degrees-minutes-seconds angles to decimal degrees.
//!
//! The arithmetic is a single pure transformation: the fractional arc
//! components are folded into the absolute degree value and the sign of the
//! `degrees` component alone decides the hemisphere of the result.

use crate::constants::{MINUTES_IN_DEGREE, SECONDS_IN_DEGREE};

/// A minutes or seconds component fell outside the half-open range `[0, 60)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConvertError {
    /// The minutes component was negative, `>= 60`, or not a finite number.
    MinutesOutOfRange(f64),
    /// The seconds component was negative, `>= 60`, or not a finite number.
    SecondsOutOfRange(f64),
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MinutesOutOfRange(value) => {
                write!(f, "Minutes must be between 0 and 59 (got {value}).")
            }
            Self::SecondsOutOfRange(value) => {
                write!(f, "Seconds must be between 0 and 59 (got {value}).")
            }
        }
    }
}

impl std::error::Error for ConvertError {}

/// Converts a DMS angle to signed decimal degrees.
///
/// Minutes and seconds must lie in `[0, 60)`. The magnitude is
/// `|degrees| + minutes/60 + seconds/3600` and the sign is taken from
/// `degrees` alone: negative degrees yield a negative result, zero degrees
/// always yield a non-negative one.
///
/// # Example
///
/// ```
/// use dms2dd::dms_to_decimal;
///
/// assert_eq!(dms_to_decimal(-10.0, 30.0, 0.0), Ok(-10.5));
/// ```
pub fn dms_to_decimal(degrees: f64, minutes: f64, seconds: f64) -> Result<f64, ConvertError> {
    if !(0.0..MINUTES_IN_DEGREE).contains(&minutes) {
        return Err(ConvertError::MinutesOutOfRange(minutes));
    }
    if !(0.0..MINUTES_IN_DEGREE).contains(&seconds) {
        return Err(ConvertError::SecondsOutOfRange(seconds));
    }

    let dd = degrees.abs() + minutes / MINUTES_IN_DEGREE + seconds / SECONDS_IN_DEGREE;
    Ok(if degrees < 0.0 { -dd } else { dd })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::RESULT_DECIMALS;

    #[test]
    fn zero_angle_converts_to_zero() {
        assert_eq!(dms_to_decimal(0.0, 0.0, 0.0), Ok(0.0));
    }

    #[test]
    fn negative_degrees_carry_the_sign() {
        assert_eq!(dms_to_decimal(-10.0, 30.0, 0.0), Ok(-10.5));
    }

    #[test]
    fn minutes_and_seconds_accumulate_fractions() {
        let dd = dms_to_decimal(40.0, 30.0, 30.0).unwrap();
        assert_eq!(format!("{dd:.prec$}", prec = RESULT_DECIMALS), "40.50833333");
    }

    #[test]
    fn sign_is_taken_from_degrees_alone() {
        // Zero degrees never produce a negative result, whatever the
        // fractional components are.
        let dd = dms_to_decimal(0.0, 30.0, 0.0).unwrap();
        assert_eq!(dd, 0.5);

        let dd = dms_to_decimal(7.0, 0.0, 36.0).unwrap();
        assert!(dd > 0.0);
    }

    #[test]
    fn minutes_of_sixty_are_rejected() {
        assert_eq!(
            dms_to_decimal(12.0, 60.0, 0.0),
            Err(ConvertError::MinutesOutOfRange(60.0))
        );
    }

    #[test]
    fn seconds_of_sixty_are_rejected() {
        assert_eq!(
            dms_to_decimal(12.0, 0.0, 60.0),
            Err(ConvertError::SecondsOutOfRange(60.0))
        );
    }

    #[test]
    fn negative_fractional_components_are_rejected() {
        assert!(dms_to_decimal(12.0, -1.0, 0.0).is_err());
        assert!(dms_to_decimal(12.0, 0.0, -0.5).is_err());
    }

    #[test]
    fn non_finite_components_are_rejected() {
        assert!(dms_to_decimal(12.0, f64::NAN, 0.0).is_err());
        assert!(dms_to_decimal(12.0, 0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn error_messages_name_the_offending_component() {
        let err = dms_to_decimal(0.0, 75.0, 0.0).unwrap_err();
        assert!(err.to_string().contains("Minutes"));

        let err = dms_to_decimal(0.0, 0.0, 99.0).unwrap_err();
        assert!(err.to_string().contains("Seconds"));
    }
}
