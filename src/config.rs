// src/config.rs

//! Tunables for the simulator façade and the fixture generator.
//!
//! Both structs deserialize with every field optional, so a caller can load
//! `{}` from JSON (or any serde format) and get the defaults.

use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_EMPTY_SLOT_WEIGHT, DEFAULT_SEQUENCE_LENGTH, GateError};

/// Settings for [`crate::Simulator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Number of slots in a circuit column; parsed text is padded to this.
    pub sequence_length: usize,
    /// Repeat the final state once so the UI can hold it at the detector.
    pub detector_dwell: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            sequence_length: DEFAULT_SEQUENCE_LENGTH,
            detector_dwell: false,
        }
    }
}

impl SimulatorConfig {
    /// Rejects a zero sequence length.
    pub fn validate(&self) -> Result<(), GateError> {
        if self.sequence_length == 0 {
            return Err(GateError::InvalidConfig("sequence_length must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Settings for [`crate::fixtures`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureConfig {
    /// Grid rows.
    pub rows: usize,
    /// Grid columns.
    pub cols: usize,
    /// Slots per generated sequence.
    pub sequence_length: usize,
    /// Copies of "no gate" in the selection pool, on top of one per gate.
    pub empty_slot_weight: usize,
    /// Whether `Noise` may be drawn.
    pub include_noise: bool,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 3,
            sequence_length: DEFAULT_SEQUENCE_LENGTH,
            empty_slot_weight: DEFAULT_EMPTY_SLOT_WEIGHT,
            include_noise: true,
        }
    }
}

impl FixtureConfig {
    /// Rejects empty grids and zero-length sequences.
    pub fn validate(&self) -> Result<(), GateError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GateError::InvalidConfig(format!(
                "fixture grid must be non-empty, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.sequence_length == 0 {
            return Err(GateError::InvalidConfig("sequence_length must be at least 1".to_string()));
        }
        Ok(())
    }
}
