//! Acoustic Intensity Math
//!
//! Pure conversions between intensity (W/m²) and decibel level, energy
//! comparisons, magnitude formatting and threshold lookups. Nothing in this
//! module keeps state, logs or returns an error.

mod classify;
mod comparison;
mod format;
mod intensity;

pub use classify::{hearing_damage_message, hearing_damage_warning, sound_category, HearingWarning, SoundCategory};
pub use comparison::{cosmic_comparison, ComparisonTable, ComparisonTier, COSMIC_FALLBACK, COSMIC_TIERS};
pub use format::{format_intensity_for_decibel, format_scientific};
pub use intensity::{
    decibel_from_intensity, decibel_from_intensity_with_reference, energy_ratio,
    intensity_from_decibel, intensity_from_decibel_with_reference, power_difference,
    ReferenceIntensity, HEARING_THRESHOLD, THEORETICAL_MINIMUM,
};
