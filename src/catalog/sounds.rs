//! Everyday and extreme sound examples

use serde::Serialize;

use crate::acoustics::SoundCategory;

/// An everyday sound with its measured level
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SoundExample {
    pub id: &'static str,
    pub name: &'static str,
    pub decibels: f64,
    pub description: &'static str,
    pub category: SoundCategory,
    /// Measured intensity in W/m²
    pub energy_intensity: f64,
}

/// A real or theoretical level far beyond everyday experience
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExtremeExample {
    pub decibels: f64,
    pub name: &'static str,
    pub description: &'static str,
    pub comparison: &'static str,
}

/// Levels at or past this are only possible as shock waves, not sound in air
pub const AIR_LIMIT_DB: f64 = 194.0;

/// Maximum distance (dB) for `nearest_sound_example` to match
pub const NEAREST_MATCH_DB: f64 = 5.0;

pub(super) static SOUND_EXAMPLES: [SoundExample; 9] = [
    SoundExample {
        id: "threshold",
        name: "Threshold of hearing",
        decibels: 0.0,
        description: "The quietest sound a human can hear",
        category: SoundCategory::Quiet,
        energy_intensity: 1e-12,
    },
    SoundExample {
        id: "whisper",
        name: "Library whisper",
        decibels: 30.0,
        description: "Very quiet whisper in a library",
        category: SoundCategory::Quiet,
        energy_intensity: 1e-9,
    },
    SoundExample {
        id: "conversation",
        name: "Normal conversation",
        decibels: 60.0,
        description: "Typical conversation at home",
        category: SoundCategory::Normal,
        energy_intensity: 1e-6,
    },
    SoundExample {
        id: "traffic",
        name: "City traffic",
        decibels: 85.0,
        description: "Heavy traffic on a busy street",
        category: SoundCategory::Loud,
        energy_intensity: 3.16e-4,
    },
    SoundExample {
        id: "lawnmower",
        name: "Lawn mower",
        decibels: 90.0,
        description: "Gas-powered lawn mower",
        category: SoundCategory::Loud,
        energy_intensity: 1e-3,
    },
    SoundExample {
        id: "motorcycle",
        name: "Motorcycle",
        decibels: 95.0,
        description: "Motorcycle engine at close range",
        category: SoundCategory::Loud,
        energy_intensity: 3.16e-3,
    },
    SoundExample {
        id: "jackhammer",
        name: "Jackhammer",
        decibels: 110.0,
        description: "Construction jackhammer",
        category: SoundCategory::Dangerous,
        energy_intensity: 1e-1,
    },
    SoundExample {
        id: "rock-concert",
        name: "Rock concert",
        decibels: 115.0,
        description: "Front row at a rock concert",
        category: SoundCategory::Dangerous,
        energy_intensity: 3.16e-1,
    },
    SoundExample {
        id: "jet-engine",
        name: "Jet engine",
        decibels: 140.0,
        description: "Jet engine at takeoff",
        category: SoundCategory::Dangerous,
        energy_intensity: 100.0,
    },
];

pub(super) static EXTREME_EXAMPLES: [ExtremeExample; 6] = [
    ExtremeExample {
        decibels: 180.0,
        name: "Krakatoa volcanic eruption",
        description: "The loudest sound in recorded history",
        comparison: "Heard 3,000 miles away",
    },
    ExtremeExample {
        decibels: AIR_LIMIT_DB,
        name: "Theoretical air limit",
        description: "Maximum sound level possible in air",
        comparison: "Sound waves become shock waves",
    },
    ExtremeExample {
        decibels: 210.0,
        name: "Hypersonic shock wave",
        description: "Beyond the realm of traditional sound",
        comparison: "Matter begins to behave differently",
    },
    ExtremeExample {
        decibels: 300.0,
        name: "Supernova explosion",
        description: "Theoretical decibel level of a supernova",
        comparison: "If sound could travel through space",
    },
    ExtremeExample {
        decibels: 500.0,
        name: "Big Bang echo",
        description: "Theoretical sound of universe creation",
        comparison: "The birth of everything",
    },
    ExtremeExample {
        decibels: 1000.0,
        name: "Universal destruction",
        description: "Energy to destroy galaxies",
        comparison: "Transcends physics as we know it",
    },
];

impl ExtremeExample {
    /// Whether this level can exist as sound in air at all
    pub fn is_physically_possible(&self) -> bool {
        self.decibels <= AIR_LIMIT_DB
    }
}
