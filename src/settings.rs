//! Puzzle settings
//!
//! Stored as JSON. Missing fields fall back to defaults so older files keep
//! loading.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, SpinnerError, check_tolerance};

/// Tolerances and layout for a puzzle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleSettings {
    /// Minimum gap kept between two spinners' occupied zones (degrees)
    pub overlap_tolerance: f32,
    /// Widest spread that still counts as aligned (degrees)
    pub solution_tolerance: f32,
    /// Spinners in the puzzle
    pub spinner_count: usize,
    /// Scramble seed
    pub seed: u64,
    /// Re-rolls allowed when a scramble comes out solved
    pub scramble_attempts: u32,
}

impl Default for PuzzleSettings {
    fn default() -> Self {
        Self {
            overlap_tolerance: DEFAULT_OVERLAP_TOLERANCE,
            solution_tolerance: DEFAULT_SOLUTION_TOLERANCE,
            spinner_count: DEFAULT_SPINNERS,
            seed: 0,
            scramble_attempts: DEFAULT_SCRAMBLE_ATTEMPTS,
        }
    }
}

impl PuzzleSettings {
    /// Check tolerances and spinner count
    pub fn validate(&self) -> Result<()> {
        check_tolerance(self.overlap_tolerance)?;
        check_tolerance(self.solution_tolerance)?;

        if !(MIN_SPINNERS..=MAX_SPINNERS).contains(&self.spinner_count) {
            return Err(SpinnerError::SpinnerCount {
                count: self.spinner_count,
                min: MIN_SPINNERS,
                max: MAX_SPINNERS,
            });
        }
        if self.scramble_attempts == 0 {
            return Err(SpinnerError::Settings(
                "scramble_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self =
            serde_json::from_str(json).map_err(|e| SpinnerError::Settings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| SpinnerError::Settings(e.to_string()))
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
