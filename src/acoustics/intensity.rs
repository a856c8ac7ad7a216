//! Intensity ↔ decibel conversion
//!
//! `dB = 10 · log10(I / I₀)` and its inverse `I = I₀ · 10^(dB / 10)`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DecibelError, Result};

// ============================================================================
// Constants
// ============================================================================

/// Threshold of human hearing, the canonical 0 dB reference (W/m²)
pub const HEARING_THRESHOLD: f64 = 1e-12;

/// Theoretical minimum reference offered as an alternative (W/m²)
pub const THEORETICAL_MINIMUM: f64 = 1e-16;

// ============================================================================
// Reference Intensity
// ============================================================================

/// Reference intensity I₀ that defines 0 dB
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceIntensity {
    /// 1 × 10⁻¹² W/m²
    HearingThreshold,
    /// 1 × 10⁻¹⁶ W/m²
    TheoreticalMinimum,
    /// Any other positive intensity in W/m²
    Custom(f64),
}

impl ReferenceIntensity {
    /// Intensity in W/m²
    pub fn value(&self) -> f64 {
        match self {
            ReferenceIntensity::HearingThreshold => HEARING_THRESHOLD,
            ReferenceIntensity::TheoreticalMinimum => THEORETICAL_MINIMUM,
            ReferenceIntensity::Custom(value) => *value,
        }
    }

    /// Parse a reference from a name (`threshold`, `hearing`, `theoretical`)
    /// or a positive number such as `1e-12`.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "threshold" | "hearing" | "hearing-threshold" => {
                return Ok(ReferenceIntensity::HearingThreshold)
            }
            "theoretical" | "theoretical-minimum" => {
                return Ok(ReferenceIntensity::TheoreticalMinimum)
            }
            _ => {}
        }

        let value: f64 = trimmed.parse().map_err(|_| DecibelError::UnknownReference {
            name: trimmed.to_string(),
        })?;
        if !value.is_finite() || value <= 0.0 {
            return Err(DecibelError::NonPositiveReference { value });
        }

        // Canonical constants collapse onto their named variants
        if value == HEARING_THRESHOLD {
            Ok(ReferenceIntensity::HearingThreshold)
        } else if value == THEORETICAL_MINIMUM {
            Ok(ReferenceIntensity::TheoreticalMinimum)
        } else {
            Ok(ReferenceIntensity::Custom(value))
        }
    }
}

impl Default for ReferenceIntensity {
    fn default() -> Self {
        ReferenceIntensity::HearingThreshold
    }
}

impl fmt::Display for ReferenceIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceIntensity::HearingThreshold => {
                write!(f, "1 × 10⁻¹² W/m² (Threshold of hearing)")
            }
            ReferenceIntensity::TheoreticalMinimum => {
                write!(f, "1 × 10⁻¹⁶ W/m² (Theoretical minimum)")
            }
            ReferenceIntensity::Custom(value) => write!(f, "{} W/m²", value),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

/// Decibel level of `intensity` against the threshold of hearing
#[inline]
pub fn decibel_from_intensity(intensity: f64) -> f64 {
    decibel_from_intensity_with_reference(intensity, HEARING_THRESHOLD)
}

/// Decibel level of `intensity` against `reference`
///
/// Non-positive intensities return exactly `0.0` rather than negative
/// infinity. Callers rely on this clamp; keep it.
/// `reference` must be positive; other values are not handled.
#[inline]
pub fn decibel_from_intensity_with_reference(intensity: f64, reference: f64) -> f64 {
    if intensity <= 0.0 {
        return 0.0;
    }
    10.0 * (intensity / reference).log10()
}

/// Intensity in W/m² for `decibel` against the threshold of hearing
#[inline]
pub fn intensity_from_decibel(decibel: f64) -> f64 {
    intensity_from_decibel_with_reference(decibel, HEARING_THRESHOLD)
}

/// Intensity in W/m² for `decibel` against `reference`
#[inline]
pub fn intensity_from_decibel_with_reference(decibel: f64, reference: f64) -> f64 {
    reference * 10.0_f64.powf(decibel / 10.0)
}

/// Factor by which the louder of two levels exceeds the quieter in energy
///
/// Symmetric in its arguments; every 10 dB of difference is a factor of 10.
#[inline]
pub fn energy_ratio(decibel_a: f64, decibel_b: f64) -> f64 {
    let difference = (decibel_a - decibel_b).abs();
    10.0_f64.powf(difference / 10.0)
}

/// Absolute intensity difference in W/m² between two levels
pub fn power_difference(decibel_a: f64, decibel_b: f64, reference: f64) -> f64 {
    let a = intensity_from_decibel_with_reference(decibel_a, reference);
    let b = intensity_from_decibel_with_reference(decibel_b, reference);
    (a - b).abs()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_conversation_level() {
        assert_relative_eq!(decibel_from_intensity(1e-6), 60.0, epsilon = 1e-9);
        assert_relative_eq!(intensity_from_decibel(60.0), 1e-6, max_relative = 1e-12);
    }

    #[test]
    fn test_threshold_is_zero_db() {
        assert_relative_eq!(decibel_from_intensity(HEARING_THRESHOLD), 0.0, epsilon = 1e-12);
        assert_relative_eq!(intensity_from_decibel(0.0), HEARING_THRESHOLD);
    }

    #[test]
    fn test_non_positive_intensity_clamps_to_zero() {
        assert_eq!(decibel_from_intensity(0.0), 0.0);
        assert_eq!(decibel_from_intensity(-5.0), 0.0);
        assert_eq!(decibel_from_intensity_with_reference(-1e-3, THEORETICAL_MINIMUM), 0.0);
    }

    #[test]
    fn test_theoretical_reference_shifts_by_40_db() {
        let standard = decibel_from_intensity(1e-6);
        let theoretical = decibel_from_intensity_with_reference(1e-6, THEORETICAL_MINIMUM);
        assert_relative_eq!(theoretical - standard, 40.0, epsilon = 1e-9);
    }

    #[test]
    fn test_negative_decibels_below_reference() {
        assert_relative_eq!(intensity_from_decibel(-10.0), 1e-13, max_relative = 1e-12);
        assert_relative_eq!(decibel_from_intensity(1e-13), -10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_energy_ratio_rules() {
        assert_relative_eq!(energy_ratio(90.0, 60.0), 1000.0, max_relative = 1e-12);
        assert_relative_eq!(energy_ratio(60.0, 90.0), 1000.0, max_relative = 1e-12);
        assert_eq!(energy_ratio(42.0, 42.0), 1.0);
        assert_relative_eq!(energy_ratio(17.5, 27.5), 10.0, max_relative = 1e-12);
    }

    #[test]
    fn test_power_difference() {
        // 1e-6 - 1e-9 W/m²
        let diff = power_difference(60.0, 30.0, HEARING_THRESHOLD);
        assert_relative_eq!(diff, 1e-6 - 1e-9, max_relative = 1e-9);
        assert_eq!(power_difference(50.0, 50.0, HEARING_THRESHOLD), 0.0);
    }

    #[test]
    fn test_reference_parse_names() {
        assert_eq!(
            ReferenceIntensity::parse("threshold").unwrap(),
            ReferenceIntensity::HearingThreshold
        );
        assert_eq!(
            ReferenceIntensity::parse(" Theoretical ").unwrap(),
            ReferenceIntensity::TheoreticalMinimum
        );
        assert_eq!(
            ReferenceIntensity::parse("1e-16").unwrap(),
            ReferenceIntensity::TheoreticalMinimum
        );
        assert_eq!(
            ReferenceIntensity::parse("2e-12").unwrap(),
            ReferenceIntensity::Custom(2e-12)
        );
    }

    #[test]
    fn test_reference_parse_rejects_bad_values() {
        assert!(matches!(
            ReferenceIntensity::parse("loud"),
            Err(DecibelError::UnknownReference { .. })
        ));
        assert!(matches!(
            ReferenceIntensity::parse("0"),
            Err(DecibelError::NonPositiveReference { .. })
        ));
        assert!(matches!(
            ReferenceIntensity::parse("-1e-12"),
            Err(DecibelError::NonPositiveReference { .. })
        ));
    }

    #[test]
    fn test_reference_serde() {
        let json = serde_json::to_string(&ReferenceIntensity::TheoreticalMinimum).unwrap();
        assert_eq!(json, "\"theoretical_minimum\"");

        let custom: ReferenceIntensity = serde_json::from_str(r#"{"custom":5e-13}"#).unwrap();
        assert_eq!(custom.value(), 5e-13);
    }
}
