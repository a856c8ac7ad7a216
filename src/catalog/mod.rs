//! Sound Catalog
//!
//! Reference sounds, extreme levels and the quiz question bank.

mod questions;
mod sounds;

pub use questions::{QuizOption, QuizQuestion};
pub use sounds::{ExtremeExample, SoundExample, AIR_LIMIT_DB, NEAREST_MATCH_DB};

/// Everyday sounds, quietest first
pub fn sound_examples() -> &'static [SoundExample] {
    &sounds::SOUND_EXAMPLES
}

/// Extreme levels, quietest first
pub fn extreme_examples() -> &'static [ExtremeExample] {
    &sounds::EXTREME_EXAMPLES
}

/// Quiz questions in presentation order
pub fn quiz_questions() -> &'static [QuizQuestion] {
    &questions::QUIZ_QUESTIONS
}

/// Look up an everyday sound by id
pub fn find_sound_example(id: &str) -> Option<&'static SoundExample> {
    sound_examples().iter().find(|example| example.id == id)
}

/// First everyday sound within 5 dB of `decibel`, or the threshold of
/// hearing when none is that close
pub fn nearest_sound_example(decibel: f64) -> &'static SoundExample {
    let examples = sound_examples();
    examples
        .iter()
        .find(|example| (example.decibels - decibel).abs() <= NEAREST_MATCH_DB)
        .unwrap_or(&examples[0])
}
