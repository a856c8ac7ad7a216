//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use log::{info, warn};

use crate::acoustics::{
    decibel_from_intensity_with_reference, format_intensity_for_decibel, format_scientific,
    hearing_damage_warning, intensity_from_decibel_with_reference, sound_category,
    ReferenceIntensity, HEARING_THRESHOLD,
};
use crate::analytics::Tracker;
use crate::calculator::{
    calculate_decibels, compare_levels_from_input, extreme_reading, parse_number,
};
use crate::catalog::{extreme_examples, nearest_sound_example, quiz_questions, sound_examples};
use crate::config::LabConfig;
use crate::error::{DecibelError, Result};
use crate::quiz::QuizSession;
use crate::visual::{bar_height, energy_blocks, DEFAULT_BAR_MAX_DB};

fn resolve_reference(config: &LabConfig, reference: Option<&str>) -> Result<ReferenceIntensity> {
    match reference {
        Some(name) => ReferenceIntensity::parse(name),
        None => Ok(config.reference),
    }
}

/// Convert an intensity to decibels.
pub fn from_intensity(config: &LabConfig, intensity: &str, reference: Option<&str>) -> Result<()> {
    let reference = resolve_reference(config, reference)?;
    let intensity = parse_number(intensity)?;
    info!("Converting {} W/m² against {}", intensity, reference);

    let reading = calculate_decibels(intensity, reference)?;
    println!("Intensity:  {} W/m²", format_scientific(reading.intensity));
    println!("Reference:  {}", reference);
    println!("Level:      {:.2} dB", reading.decibels);
    println!("Category:   {}", reading.category);
    if let Some(warning) = reading.warning {
        println!("Warning:    {}", warning);
    }

    // Cross-check the inverse conversion
    let back = intensity_from_decibel_with_reference(reading.decibels, reading.reference);
    if ((back - intensity) / intensity).abs() > 1e-9 {
        warn!("Round trip drifted: {} -> {} W/m²", intensity, back);
    }

    Ok(())
}

/// Convert decibels to an intensity.
pub fn to_intensity(config: &LabConfig, decibels: &str, reference: Option<&str>) -> Result<()> {
    let reference = resolve_reference(config, reference)?;
    let decibels = parse_number(decibels)?;
    info!("Converting {} dB against {}", decibels, reference);

    println!("Level:      {} dB", decibels);
    println!("Reference:  {}", reference);
    println!(
        "Intensity:  {} W/m²",
        format_intensity_for_decibel(decibels, reference.value())
    );

    // Examples are listed against the threshold of hearing
    let standard_db = decibels
        + decibel_from_intensity_with_reference(reference.value(), HEARING_THRESHOLD);
    let example = nearest_sound_example(standard_db);
    println!("Sounds like: {} ({} dB)", example.name, example.decibels);

    Ok(())
}

/// Compare the energy of two levels.
pub fn compare(tracker: &Tracker, base: &str, compare: &str) -> Result<()> {
    let comparison = compare_levels_from_input(base, compare)?;
    info!(
        "Comparing {} dB with {} dB",
        comparison.base_decibel, comparison.compare_decibel
    );
    tracker.track_calculation(
        comparison.base_decibel,
        comparison.compare_decibel,
        comparison.ratio,
    );

    println!("Difference:       {} dB", comparison.difference);
    println!("Energy ratio:     {}×", format_scientific(comparison.ratio));
    println!(
        "Power difference: {} W/m²",
        format_scientific(comparison.power_difference)
    );
    for level in [comparison.base_decibel, comparison.compare_decibel] {
        println!(
            "{:>8} dB  bar {:>5.1}%  blocks {}",
            level,
            bar_height(level, DEFAULT_BAR_MAX_DB),
            energy_blocks(level)
        );
    }

    Ok(())
}

/// Format a value in scientific notation.
pub fn format(value: &str) -> Result<()> {
    let value = parse_number(value)?;
    println!("{}", format_scientific(value));
    Ok(())
}

/// Show category and hearing warning for a level.
pub fn classify(tracker: &Tracker, decibels: &str) -> Result<()> {
    let decibels = parse_number(decibels)?;
    tracker.track_slider_usage("decibel", decibels);

    let example = nearest_sound_example(decibels);
    println!("Level:     {} dB", decibels);
    println!("Category:  {}", sound_category(decibels));
    println!("Example:   {} - {}", example.name, example.description);
    match hearing_damage_warning(decibels) {
        Some(warning) => println!("Warning:   {}", warning),
        None => println!("Warning:   none"),
    }

    Ok(())
}

/// Evaluate an extreme level.
pub fn extreme(config: &LabConfig, tracker: &Tracker, decibels: &str) -> Result<()> {
    let decibels = parse_number(decibels)?;
    let table = config.comparison_table();
    let reading = extreme_reading(decibels, config.reference, &table)?;
    tracker.track_extreme_calculation(decibels, "custom");

    println!("Level:      {} dB", reading.decibels);
    println!("Intensity:  {} W/m²", reading.intensity_display);
    println!("Comparison: {}", reading.cosmic_comparison);
    if let Some(warning) = reading.warning {
        println!("Warning:    {}", warning);
    }

    Ok(())
}

/// List reference sounds.
pub fn list_examples(extreme: bool) -> Result<()> {
    if extreme {
        println!("{:<8} {:<28} {}", "dB", "Name", "Comparison");
        println!("{:-<72}", "");
        for example in extreme_examples() {
            println!(
                "{:<8} {:<28} {}",
                example.decibels, example.name, example.comparison
            );
        }
        return Ok(());
    }

    println!("{:<6} {:<22} {:<10} {}", "dB", "Name", "Category", "Intensity");
    println!("{:-<60}", "");
    for example in sound_examples() {
        println!(
            "{:<6} {:<22} {:<10} {} W/m²",
            example.decibels,
            example.name,
            example.category.label(),
            format_scientific(example.energy_intensity)
        );
    }
    Ok(())
}

/// Print the quiz, or grade a full set of answers.
pub fn quiz(tracker: &Tracker, answers: Option<&[String]>) -> Result<()> {
    let Some(answers) = answers else {
        for question in quiz_questions() {
            println!("{}. {}", question.id, question.question);
            for option in &question.options {
                println!("   {}) {}", option.value, option.text);
            }
            println!();
        }
        println!("Grade with: decibel-lab quiz --answers a,b,c,d,a");
        return Ok(());
    };

    let mut session = QuizSession::new();
    let outcomes = session.answer_all(answers)?;
    for outcome in &outcomes {
        tracker.track_quiz_answer(outcome.question_id, outcome.correct, &outcome.answer);
        let mark = if outcome.correct { "✓" } else { "✗" };
        println!(
            "{} Question {}: you answered {}, correct is {}",
            mark, outcome.question_id, outcome.answer, outcome.correct_option
        );
        if !outcome.correct {
            println!("    {}", outcome.explanation);
        }
    }

    println!();
    println!(
        "Score: {}/{} ({}% mastery)",
        session.score(),
        session.len(),
        session.mastery_percent()
    );

    Ok(())
}

/// Error text for the terminal.
///
/// Input errors read as a prompt to re-enter the value, followed by hints.
/// Anything else carries its error code so it can be reported.
pub fn describe_error(err: &DecibelError) -> String {
    let mut text = if err.is_input_error() {
        format!("Invalid input: {}", err)
    } else {
        format!("Error [{}]: {}", err.error_code(), err)
    };
    for suggestion in err.recovery_suggestions() {
        text.push_str("\n  hint: ");
        text.push_str(suggestion);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn test_describe_input_error_has_hints() {
        let err = DecibelError::InvalidNumber {
            input: "loud".to_string(),
        };
        assert_eq!(
            describe_error(&err),
            "Invalid input: Not a number: 'loud'\n  \
             hint: Enter a plain number such as 60 or 1e-6\n  \
             hint: Scientific notation uses 'e', e.g. 3.16e-4"
        );
    }

    #[test]
    fn test_describe_other_error_has_code() {
        let err = DecibelError::ConfigNotFound {
            path: PathBuf::from("lab.json"),
        };
        let text = describe_error(&err);
        assert!(text.starts_with("Error [CONFIG_NOT_FOUND]: Config file not found: lab.json"));
        assert!(text.contains("hint: Check the --config path"));
    }

    #[test]
    fn test_describe_empty_quiz_has_no_hints() {
        assert_eq!(
            describe_error(&DecibelError::EmptyQuiz),
            "Error [EMPTY_QUIZ]: Quiz has no questions"
        );
    }

    #[test]
    fn test_quiz_rejects_wrong_answer_count() {
        let answers = vec!["c".to_string()];
        let err = quiz(&Tracker::disabled(), Some(answers.as_slice())).unwrap_err();
        assert!(matches!(err, DecibelError::AnswerCountMismatch { expected: 5, actual: 1 }));
    }
}
