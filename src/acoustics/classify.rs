//! Loudness categories and hearing damage warnings

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse loudness bucket for a decibel level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundCategory {
    Quiet,
    Normal,
    Loud,
    Dangerous,
}

impl SoundCategory {
    pub fn label(&self) -> &'static str {
        match self {
            SoundCategory::Quiet => "quiet",
            SoundCategory::Normal => "normal",
            SoundCategory::Loud => "loud",
            SoundCategory::Dangerous => "dangerous",
        }
    }
}

impl fmt::Display for SoundCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Categorize a decibel level
///
/// Half-open buckets: below 40 quiet, below 70 normal, below 100 loud,
/// everything else dangerous.
pub fn sound_category(decibel: f64) -> SoundCategory {
    if decibel < 40.0 {
        SoundCategory::Quiet
    } else if decibel < 70.0 {
        SoundCategory::Normal
    } else if decibel < 100.0 {
        SoundCategory::Loud
    } else {
        SoundCategory::Dangerous
    }
}

/// Hearing damage severity, ordered from mildest to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HearingWarning {
    /// 85 dB and above
    ExtendedExposure,
    /// 100 dB and above
    ProlongedExposure,
    /// 120 dB and above
    PainThreshold,
    /// 140 dB and above
    ImmediateDamage,
}

impl HearingWarning {
    /// Lowest level at which this warning applies (dB)
    pub fn threshold_db(&self) -> f64 {
        match self {
            HearingWarning::ExtendedExposure => 85.0,
            HearingWarning::ProlongedExposure => 100.0,
            HearingWarning::PainThreshold => 120.0,
            HearingWarning::ImmediateDamage => 140.0,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            HearingWarning::ExtendedExposure => "Extended exposure may cause hearing damage",
            HearingWarning::ProlongedExposure => {
                "Dangerous - prolonged exposure causes hearing damage"
            }
            HearingWarning::PainThreshold => "Pain threshold - immediate hearing damage possible",
            HearingWarning::ImmediateDamage => {
                "Immediate permanent hearing damage - pain threshold exceeded"
            }
        }
    }
}

impl fmt::Display for HearingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Most severe warning that applies to `decibel`, if any
pub fn hearing_damage_warning(decibel: f64) -> Option<HearingWarning> {
    // Highest severity first
    [
        HearingWarning::ImmediateDamage,
        HearingWarning::PainThreshold,
        HearingWarning::ProlongedExposure,
        HearingWarning::ExtendedExposure,
    ]
    .into_iter()
    .find(|warning| decibel >= warning.threshold_db())
}

/// Warning text for `decibel`, or `None` below 85 dB
pub fn hearing_damage_message(decibel: f64) -> Option<&'static str> {
    hearing_damage_warning(decibel).map(|warning| warning.message())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.0, SoundCategory::Quiet)]
    #[test_case(39.0, SoundCategory::Quiet)]
    #[test_case(39.999, SoundCategory::Quiet)]
    #[test_case(40.0, SoundCategory::Normal)]
    #[test_case(69.0, SoundCategory::Normal)]
    #[test_case(70.0, SoundCategory::Loud)]
    #[test_case(99.9, SoundCategory::Loud)]
    #[test_case(100.0, SoundCategory::Dangerous)]
    #[test_case(-20.0, SoundCategory::Quiet)]
    #[test_case(1000.0, SoundCategory::Dangerous)]
    fn test_sound_category(decibel: f64, expected: SoundCategory) {
        assert_eq!(sound_category(decibel), expected);
    }

    #[test_case(84.0, None)]
    #[test_case(84.99, None)]
    #[test_case(85.0, Some(HearingWarning::ExtendedExposure))]
    #[test_case(99.0, Some(HearingWarning::ExtendedExposure))]
    #[test_case(100.0, Some(HearingWarning::ProlongedExposure))]
    #[test_case(120.0, Some(HearingWarning::PainThreshold))]
    #[test_case(139.9, Some(HearingWarning::PainThreshold))]
    #[test_case(140.0, Some(HearingWarning::ImmediateDamage))]
    #[test_case(194.0, Some(HearingWarning::ImmediateDamage))]
    fn test_hearing_damage_warning(decibel: f64, expected: Option<HearingWarning>) {
        assert_eq!(hearing_damage_warning(decibel), expected);
    }

    #[test]
    fn test_warning_messages() {
        assert_eq!(hearing_damage_message(60.0), None);
        assert_eq!(
            hearing_damage_message(85.0),
            Some("Extended exposure may cause hearing damage")
        );
        assert_eq!(
            hearing_damage_message(140.0),
            Some("Immediate permanent hearing damage - pain threshold exceeded")
        );
    }

    #[test]
    fn test_warning_ordering() {
        assert!(HearingWarning::ImmediateDamage > HearingWarning::PainThreshold);
        assert!(HearingWarning::ExtendedExposure < HearingWarning::ProlongedExposure);
    }

    #[test]
    fn test_category_serde() {
        let json = serde_json::to_string(&SoundCategory::Dangerous).unwrap();
        assert_eq!(json, "\"dangerous\"");
        assert_eq!(SoundCategory::Loud.to_string(), "loud");
    }
}
