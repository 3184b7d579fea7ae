//! Simulation parameters and configuration.
//!
//! Parameters control how the random driver picks operations: the mean length
//! of newly inserted TEs, the mean distance a copy travels, and the relative
//! weights of insert, copy and disable.

use crate::errors::ParamsError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default mean TE length, in slots.
pub const DEFAULT_TE_LEN: f64 = 200.0;
/// Default mean copy offset, in slots.
pub const DEFAULT_TE_OFFSET: f64 = 500.0;

/// One of the three genome edits the driver can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Insert,
    Copy,
    Disable,
}

impl Operation {
    /// Operations in the order used by `OperationWeights::for_active`.
    pub const ALL: [Operation; 3] = [Operation::Insert, Operation::Copy, Operation::Disable];
}

/// Relative weights of the three operations.
///
/// Copy and disable weights are scaled by the number of active TEs at each
/// step, so a genome with many active elements copies and loses them faster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationWeights {
    pub insert: f64,
    pub copy: f64,
    pub disable: f64,
}

impl OperationWeights {
    pub fn new(insert: f64, copy: f64, disable: f64) -> Self {
        Self {
            insert,
            copy,
            disable,
        }
    }

    /// Effective weights for a genome with `active` active TEs, ordered as
    /// `Operation::ALL`.
    pub fn for_active(&self, active: usize) -> [f64; 3] {
        let a = active as f64;
        [self.insert, a * self.copy, a * self.disable]
    }

    fn validate(&self) -> Result<(), ParamsError> {
        for (name, value) in [
            ("insert", self.insert),
            ("copy", self.copy),
            ("disable", self.disable),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ParamsError::InvalidWeight { name, value });
            }
        }
        if self.insert <= 0.0 {
            return Err(ParamsError::InsertWeightNotPositive(self.insert));
        }
        Ok(())
    }
}

impl Default for OperationWeights {
    fn default() -> Self {
        Self::new(0.1, 2.0, 1.0)
    }
}

impl std::str::FromStr for OperationWeights {
    type Err = String;

    /// Parse `"insert,copy,disable"`, e.g. `"0.1,2,1"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(format!(
                "Expected three comma-separated weights (insert,copy,disable), got '{s}'"
            ));
        }
        let mut values = [0.0; 3];
        for (value, part) in values.iter_mut().zip(&parts) {
            *value = part
                .parse::<f64>()
                .map_err(|e| format!("Invalid weight '{part}': {e}"))?;
        }
        Ok(Self::new(values[0], values[1], values[2]))
    }
}

/// Parameters for the random TE driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Mean length of an inserted TE (geometric distribution).
    pub te_len: f64,
    /// Mean absolute copy offset (geometric distribution, random sign).
    pub te_offset: f64,
    /// Operation weights.
    pub weights: OperationWeights,
}

impl SimulationParams {
    pub fn new(te_len: f64, te_offset: f64, weights: OperationWeights) -> Self {
        Self {
            te_len,
            te_offset,
            weights,
        }
    }

    /// Check that every parameter can drive a simulation.
    pub fn validate(&self) -> Result<(), ParamsError> {
        for (name, value) in [("te_len", self.te_len), ("te_offset", self.te_offset)] {
            if !value.is_finite() || value < 1.0 {
                return Err(ParamsError::InvalidMean { name, value });
            }
        }
        self.weights.validate()
    }

    /// Load and validate parameters from a JSON file.
    ///
    /// Missing fields take their default values.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let text = fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&text)?;
        params.validate()?;
        Ok(params)
    }

    /// Write parameters as pretty-printed JSON.
    pub fn to_json_file(&self, path: impl AsRef<Path>) -> Result<(), ParamsError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self::new(DEFAULT_TE_LEN, DEFAULT_TE_OFFSET, OperationWeights::default())
    }
}
