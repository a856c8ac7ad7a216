//! Decibel Lab - Learning the Logarithmic Decibel Scale
//!
//! Decibel Lab provides the logic behind an interactive decibel course:
//! 1. Acoustic math - intensity ↔ decibel conversion, energy ratios,
//!    scientific notation and threshold lookups (all pure functions)
//! 2. Learning material - reference sounds, extreme levels and a quiz
//!
//! # Architecture
//!
//! - `acoustics`: stateless math every other module calls into
//! - `calculator`, `visual`, `quiz`: validate input and hold view state
//! - `analytics`: usage events forwarded to a pluggable sink

pub mod acoustics;
pub mod analytics;
pub mod calculator;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod quiz;
pub mod visual;

pub use error::{DecibelError, Result};
