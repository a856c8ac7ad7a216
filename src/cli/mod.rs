//! CLI Module
//!
//! Command-line interface for Decibel Lab.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Decibel Lab - explore the logarithmic decibel scale
#[derive(Parser, Debug)]
#[command(name = "decibel-lab")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert an intensity in W/m² to decibels
    #[command(name = "from-intensity")]
    FromIntensity {
        /// Intensity in W/m², e.g. 1e-6
        #[arg(allow_hyphen_values = true)]
        intensity: String,

        /// Reference intensity: threshold, theoretical or a number in W/m²
        #[arg(short, long)]
        reference: Option<String>,
    },

    /// Convert decibels to an intensity in W/m²
    #[command(name = "to-intensity")]
    ToIntensity {
        /// Level in dB
        #[arg(allow_hyphen_values = true)]
        decibels: String,

        /// Reference intensity: threshold, theoretical or a number in W/m²
        #[arg(short, long)]
        reference: Option<String>,
    },

    /// Compare the energy of two levels
    #[command(name = "compare")]
    Compare {
        /// Base level in dB
        #[arg(allow_hyphen_values = true)]
        base: String,

        /// Level to compare against in dB
        #[arg(allow_hyphen_values = true)]
        compare: String,
    },

    /// Format a number in the course's scientific notation
    #[command(name = "format")]
    Format {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Show the loudness category and hearing warning for a level
    #[command(name = "classify")]
    Classify {
        /// Level in dB
        #[arg(allow_hyphen_values = true)]
        decibels: String,
    },

    /// Explore levels far past anything audible
    #[command(name = "extreme")]
    Extreme {
        /// Level in dB (0 and above)
        #[arg(allow_hyphen_values = true)]
        decibels: String,
    },

    /// List reference sounds
    #[command(name = "examples")]
    Examples {
        /// List extreme levels instead of everyday sounds
        #[arg(short, long)]
        extreme: bool,
    },

    /// Show the quiz, or grade answers given as a comma-separated list
    #[command(name = "quiz")]
    Quiz {
        /// Answers in order, e.g. c,a,d,c,c
        #[arg(short, long, value_delimiter = ',')]
        answers: Option<Vec<String>>,
    },
}
