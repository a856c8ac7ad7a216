//! Visualization helpers
//!
//! Bar heights and energy blocks that make the logarithmic scale visible,
//! plus the 10 dB step ladder used by the stepping demo.

use serde::Serialize;

use crate::acoustics::{intensity_from_decibel, HEARING_THRESHOLD};

/// Level drawn as a full-height bar unless the caller picks another
pub const DEFAULT_BAR_MAX_DB: f64 = 60.0;

/// Most energy blocks ever drawn for one level
pub const MAX_ENERGY_BLOCKS: u32 = 100;

/// Bar height in percent of the bar for `max_decibel`, capped at 100
///
/// The height is the ratio of the two levels' log intensities, so it grows
/// linearly in dB. Levels at or below 0 dB give a height of zero or less.
pub fn bar_height(decibel: f64, max_decibel: f64) -> f64 {
    let intensity = intensity_from_decibel(decibel);
    let max_intensity = intensity_from_decibel(max_decibel);
    let height = (intensity / HEARING_THRESHOLD).log10() / (max_intensity / HEARING_THRESHOLD).log10();
    (height * 100.0).min(100.0)
}

/// Number of unit blocks for `decibel`, where 10 dB is one block
pub fn energy_blocks(decibel: f64) -> u32 {
    let ratio = 10.0_f64.powf((decibel - 10.0) / 10.0).round();
    if ratio.is_nan() || ratio <= 0.0 {
        return 0;
    }
    ratio.min(MAX_ENERGY_BLOCKS as f64) as u32
}

/// One rung of the demo ladder
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DemoStep {
    pub decibels: f64,
    pub label: &'static str,
}

pub static DEMO_LADDER: [DemoStep; 5] = [
    DemoStep { decibels: 10.0, label: "10 dB" },
    DemoStep { decibels: 20.0, label: "20 dB (10× energy)" },
    DemoStep { decibels: 30.0, label: "30 dB (100× energy)" },
    DemoStep { decibels: 40.0, label: "40 dB (1,000× energy)" },
    DemoStep { decibels: 50.0, label: "50 dB (10,000× energy)" },
];

/// Demo step at `index`, holding on the last rung once the ladder ends
pub fn demo_step(index: usize) -> &'static DemoStep {
    &DEMO_LADDER[index.min(DEMO_LADDER.len() - 1)]
}

/// Whether the demo has reached its final rung
pub fn demo_finished(index: usize) -> bool {
    index >= DEMO_LADDER.len() - 1
}
