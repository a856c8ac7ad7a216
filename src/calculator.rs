//! Calculators
//!
//! Validates raw user input and runs it through the acoustic math. The math
//! accepts anything; the rules about what a user may enter live here.

use serde::Serialize;

use crate::acoustics::{
    self, energy_ratio, format_intensity_for_decibel, hearing_damage_warning,
    intensity_from_decibel_with_reference, power_difference, sound_category, ComparisonTable,
    HearingWarning, ReferenceIntensity, SoundCategory, HEARING_THRESHOLD,
};
use crate::error::{DecibelError, Result};

/// Largest level the extreme calculator suggests entering (dB)
pub const EXTREME_INPUT_MAX_DB: f64 = 10_000.0;

/// Parse a finite number from user input
pub fn parse_number(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(DecibelError::InvalidNumber {
            input: trimmed.to_string(),
        }),
    }
}

/// Result of converting an intensity to a decibel level
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecibelReading {
    pub intensity: f64,
    pub reference: f64,
    pub decibels: f64,
    pub category: SoundCategory,
    pub warning: Option<HearingWarning>,
}

/// Convert a validated intensity against a validated reference
pub fn calculate_decibels(intensity: f64, reference: ReferenceIntensity) -> Result<DecibelReading> {
    if intensity.is_nan() || intensity <= 0.0 {
        return Err(DecibelError::NonPositiveIntensity { value: intensity });
    }
    let reference = reference.value();
    if reference.is_nan() || reference <= 0.0 {
        return Err(DecibelError::NonPositiveReference { value: reference });
    }

    let decibels = acoustics::decibel_from_intensity_with_reference(intensity, reference);
    Ok(DecibelReading {
        intensity,
        reference,
        decibels,
        category: sound_category(decibels),
        warning: hearing_damage_warning(decibels),
    })
}

/// Parse and convert raw calculator fields
pub fn calculate_decibels_from_input(intensity: &str, reference: &str) -> Result<DecibelReading> {
    let intensity = parse_number(intensity)?;
    let reference = ReferenceIntensity::parse(reference)?;
    calculate_decibels(intensity, reference)
}

/// Energy comparison between two levels
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyComparison {
    pub base_decibel: f64,
    pub compare_decibel: f64,
    /// Absolute level difference (dB)
    pub difference: f64,
    /// Energy factor between the two levels
    pub ratio: f64,
    /// Absolute intensity difference against the threshold of hearing (W/m²)
    pub power_difference: f64,
}

/// Compare two levels
pub fn compare_levels(base_decibel: f64, compare_decibel: f64) -> Result<EnergyComparison> {
    for value in [base_decibel, compare_decibel] {
        if value.is_nan() {
            return Err(DecibelError::InvalidNumber {
                input: value.to_string(),
            });
        }
    }

    Ok(EnergyComparison {
        base_decibel,
        compare_decibel,
        difference: (compare_decibel - base_decibel).abs(),
        ratio: energy_ratio(base_decibel, compare_decibel),
        power_difference: power_difference(base_decibel, compare_decibel, HEARING_THRESHOLD),
    })
}

/// Parse and compare raw calculator fields
pub fn compare_levels_from_input(base: &str, compare: &str) -> Result<EnergyComparison> {
    compare_levels(parse_number(base)?, parse_number(compare)?)
}

/// Result of the extreme calculator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtremeReading {
    pub decibels: f64,
    /// Intensity in W/m²; infinite once it no longer fits in an `f64`
    pub intensity: f64,
    /// Intensity rendered in scientific notation, valid past `f64` range
    pub intensity_display: String,
    pub cosmic_comparison: String,
    pub warning: Option<HearingWarning>,
}

/// Evaluate an extreme level against `table`
pub fn extreme_reading(
    decibel: f64,
    reference: ReferenceIntensity,
    table: &ComparisonTable,
) -> Result<ExtremeReading> {
    if decibel.is_nan() || decibel < 0.0 {
        return Err(DecibelError::NegativeDecibel { value: decibel });
    }
    let reference = reference.value();

    Ok(ExtremeReading {
        decibels: decibel,
        intensity: intensity_from_decibel_with_reference(decibel, reference),
        intensity_display: format_intensity_for_decibel(decibel, reference),
        cosmic_comparison: table.lookup(decibel).to_string(),
        warning: hearing_damage_warning(decibel),
    })
}
