//! Scalar inputs for a single projection

use super::{
    DEFAULT_CONTRIBUTION, DEFAULT_RATE_OF_RETURN, DEFAULT_STARTING_AMOUNT, DEFAULT_YEARS_TO_GROW,
    MAX_YEARS_TO_GROW,
};
use crate::error::{Result, SimulatorError};
use serde::{Deserialize, Serialize};

/// Inputs for one projection run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectionInput {
    /// Initial balance (must be non-negative)
    #[serde(default = "default_starting_amount")]
    pub starting_amount: f64,

    /// Amount added once per year; negative values model withdrawals
    #[serde(default = "default_contribution")]
    pub contribution: f64,

    /// Annual rate of return in percent (4.0 = 4%)
    #[serde(default = "default_rate_of_return")]
    pub rate_of_return: f64,

    /// Number of yearly periods to simulate
    #[serde(default = "default_years_to_grow")]
    pub years_to_grow: u32,
}

fn default_starting_amount() -> f64 { DEFAULT_STARTING_AMOUNT }
fn default_contribution() -> f64 { DEFAULT_CONTRIBUTION }
fn default_rate_of_return() -> f64 { DEFAULT_RATE_OF_RETURN }
fn default_years_to_grow() -> u32 { DEFAULT_YEARS_TO_GROW }

impl Default for ProjectionInput {
    fn default() -> Self {
        Self {
            starting_amount: DEFAULT_STARTING_AMOUNT,
            contribution: DEFAULT_CONTRIBUTION,
            rate_of_return: DEFAULT_RATE_OF_RETURN,
            years_to_grow: DEFAULT_YEARS_TO_GROW,
        }
    }
}

impl ProjectionInput {
    pub fn new(starting_amount: f64, contribution: f64, rate_of_return: f64, years_to_grow: u32) -> Self {
        Self {
            starting_amount,
            contribution,
            rate_of_return,
            years_to_grow,
        }
    }

    /// Annual rate as a fraction (4% -> 0.04)
    pub fn rate_fraction(&self) -> f64 {
        self.rate_of_return / 100.0
    }

    /// Check the boundary conditions the engine itself does not defend against.
    ///
    /// The engine lets NaN and infinities flow through its arithmetic, so
    /// callers taking untrusted input should run this first.
    pub fn validate(&self) -> Result<()> {
        if !self.starting_amount.is_finite() {
            return Err(SimulatorError::invalid("startingAmount", "must be a finite number"));
        }
        if self.starting_amount < 0.0 {
            return Err(SimulatorError::invalid(
                "startingAmount",
                format!("must be non-negative, got {}", self.starting_amount),
            ));
        }
        if !self.contribution.is_finite() {
            return Err(SimulatorError::invalid("contribution", "must be a finite number"));
        }
        if !self.rate_of_return.is_finite() {
            return Err(SimulatorError::invalid("rateOfReturn", "must be a finite number"));
        }
        if self.years_to_grow > MAX_YEARS_TO_GROW {
            return Err(SimulatorError::invalid(
                "yearsToGrow",
                format!("must be at most {}, got {}", MAX_YEARS_TO_GROW, self.years_to_grow),
            ));
        }
        Ok(())
    }
}
