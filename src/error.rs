//! Error handling for Decibel Lab
//!
//! The acoustic math itself never fails. These errors come from validating
//! caller input before it reaches the math, from the quiz session and from
//! loading configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for Decibel Lab operations
pub type Result<T> = std::result::Result<T, DecibelError>;

/// Main error type for Decibel Lab operations
#[derive(Error, Debug)]
pub enum DecibelError {
    // Input Errors
    #[error("Not a number: '{input}'")]
    InvalidNumber { input: String },

    #[error("Intensity must be greater than zero, got {value} W/m²")]
    NonPositiveIntensity { value: f64 },

    #[error("Reference intensity must be greater than zero, got {value} W/m²")]
    NonPositiveReference { value: f64 },

    #[error("Decibel level must be zero or greater, got {value} dB")]
    NegativeDecibel { value: f64 },

    #[error("Unknown reference intensity: '{name}'")]
    UnknownReference { name: String },

    // Quiz Errors
    #[error("Unknown answer option '{option}' for question {question_id}")]
    UnknownOption { question_id: u32, option: String },

    #[error("No answer selected for question {question_id}")]
    NoAnswerSelected { question_id: u32 },

    #[error("Question {question_id} has already been answered")]
    AlreadyAnswered { question_id: u32 },

    #[error("Quiz has no questions")]
    EmptyQuiz,

    #[error("Expected {expected} quiz answers, got {actual}")]
    AnswerCountMismatch { expected: usize, actual: usize },

    // Configuration Errors
    #[error("Invalid comparison table: {reason}")]
    InvalidComparisonTable { reason: String },

    #[error("Config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DecibelError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            DecibelError::InvalidNumber { .. } => "INVALID_NUMBER",
            DecibelError::NonPositiveIntensity { .. } => "NON_POSITIVE_INTENSITY",
            DecibelError::NonPositiveReference { .. } => "NON_POSITIVE_REFERENCE",
            DecibelError::NegativeDecibel { .. } => "NEGATIVE_DECIBEL",
            DecibelError::UnknownReference { .. } => "UNKNOWN_REFERENCE",
            DecibelError::UnknownOption { .. } => "UNKNOWN_OPTION",
            DecibelError::NoAnswerSelected { .. } => "NO_ANSWER_SELECTED",
            DecibelError::AlreadyAnswered { .. } => "ALREADY_ANSWERED",
            DecibelError::EmptyQuiz => "EMPTY_QUIZ",
            DecibelError::AnswerCountMismatch { .. } => "ANSWER_COUNT_MISMATCH",
            DecibelError::InvalidComparisonTable { .. } => "INVALID_COMPARISON_TABLE",
            DecibelError::ConfigNotFound { .. } => "CONFIG_NOT_FOUND",
            DecibelError::Io(_) => "IO_ERROR",
            DecibelError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if this error is caused by user input that can simply be re-entered
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DecibelError::InvalidNumber { .. }
                | DecibelError::NonPositiveIntensity { .. }
                | DecibelError::NonPositiveReference { .. }
                | DecibelError::NegativeDecibel { .. }
                | DecibelError::UnknownReference { .. }
                | DecibelError::UnknownOption { .. }
                | DecibelError::NoAnswerSelected { .. }
        )
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            DecibelError::InvalidNumber { .. } => vec![
                "Enter a plain number such as 60 or 1e-6",
                "Scientific notation uses 'e', e.g. 3.16e-4",
            ],
            DecibelError::NonPositiveIntensity { .. } => vec![
                "Intensity is a power density and must be above zero",
                "The threshold of hearing is 1e-12 W/m²",
            ],
            DecibelError::NonPositiveReference { .. } | DecibelError::UnknownReference { .. } => {
                vec![
                    "Use 'threshold' for 1e-12 W/m² (threshold of hearing)",
                    "Use 'theoretical' for 1e-16 W/m² (theoretical minimum)",
                    "Or give any positive intensity in W/m²",
                ]
            }
            DecibelError::NegativeDecibel { .. } => vec![
                "The extreme calculator starts at 0 dB",
                "Try values of 1000 dB and above",
            ],
            DecibelError::UnknownOption { .. } => vec!["Answer with one of: a, b, c, d"],
            DecibelError::AnswerCountMismatch { .. } => {
                vec!["Give one answer per question, separated by commas"]
            }
            DecibelError::InvalidComparisonTable { .. } => vec![
                "Tier upper bounds must be finite and strictly increasing",
                "Remove the cosmic_tiers entry to use the built-in table",
            ],
            DecibelError::ConfigNotFound { .. } => vec![
                "Check the --config path",
                "Omit --config to run with defaults",
            ],
            _ => vec![],
        }
    }
}
