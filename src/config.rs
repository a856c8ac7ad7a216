//! Configuration
//!
//! Optional JSON file that sets the default reference intensity and can
//! replace the cosmic comparison tiers without touching the math.
//!
//! ```json
//! {
//!   "reference": "hearing_threshold",
//!   "cosmic_tiers": {
//!     "tiers": [{ "upper_bound": 200.0, "message": "Plausible" }],
//!     "fallback": "Beyond physics"
//!   },
//!   "analytics": true
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::acoustics::{ComparisonTable, ReferenceIntensity};
use crate::error::{DecibelError, Result};

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    /// Reference intensity used when a command does not name one
    pub reference: ReferenceIntensity,

    /// Replacement for the built-in cosmic comparison table
    pub cosmic_tiers: Option<ComparisonTable>,

    /// Whether analytics events are logged
    pub analytics: bool,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            reference: ReferenceIntensity::HearingThreshold,
            cosmic_tiers: None,
            analytics: true,
        }
    }
}

impl LabConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DecibelError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate config JSON
    pub fn from_json(contents: &str) -> Result<Self> {
        let config: LabConfig = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, otherwise defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        let reference = self.reference.value();
        if !reference.is_finite() || reference <= 0.0 {
            return Err(DecibelError::NonPositiveReference { value: reference });
        }
        if let Some(table) = &self.cosmic_tiers {
            table.validate()?;
        }
        Ok(())
    }

    /// Comparison table in effect
    pub fn comparison_table(&self) -> ComparisonTable {
        self.cosmic_tiers.clone().unwrap_or_default()
    }
}
