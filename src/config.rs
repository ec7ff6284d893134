//! JSON configuration loading
//!
//! A simulation file may hold a bare input object:
//!
//! ```json
//! { "startingAmount": 1000, "contribution": 200, "rateOfReturn": 5, "yearsToGrow": 3 }
//! ```
//!
//! or wrap it together with engine settings:
//!
//! ```json
//! { "input": { "yearsToGrow": 30 }, "engine": { "baseYear": 2025, "rounding": "carryRounded" } }
//! ```
//!
//! Missing fields fall back to the simulator defaults.

use crate::error::Result;
use crate::projection::{ProjectionConfig, ProjectionInput};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Input plus engine settings for one run
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SimulationFile {
    #[serde(default)]
    pub input: ProjectionInput,

    #[serde(default)]
    pub engine: ProjectionConfig,
}

/// Top-level keys that mark the wrapped form
const WRAPPED_KEYS: [&str; 2] = ["input", "engine"];

/// Read a simulation (bare or wrapped form) from any reader
///
/// The form is chosen from the top-level keys, so a malformed wrapped file
/// is an error rather than a bare input full of defaults.
pub fn simulation_from_reader<R: Read>(reader: R) -> Result<SimulationFile> {
    let value: serde_json::Value = serde_json::from_reader(reader)?;
    let wrapped = value
        .as_object()
        .is_some_and(|obj| WRAPPED_KEYS.iter().any(|k| obj.contains_key(*k)));

    if wrapped {
        Ok(serde_json::from_value(value)?)
    } else {
        Ok(SimulationFile {
            input: serde_json::from_value(value)?,
            engine: ProjectionConfig::default(),
        })
    }
}

/// Load a simulation file from disk
pub fn load_simulation<P: AsRef<Path>>(path: P) -> Result<SimulationFile> {
    let file = File::open(path)?;
    simulation_from_reader(BufReader::new(file))
}

/// Read only the projection input from any reader
pub fn input_from_reader<R: Read>(reader: R) -> Result<ProjectionInput> {
    Ok(simulation_from_reader(reader)?.input)
}

/// Load only the projection input from disk
pub fn load_input<P: AsRef<Path>>(path: P) -> Result<ProjectionInput> {
    Ok(load_simulation(path)?.input)
}
