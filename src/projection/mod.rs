//! Projection engine for year-by-year investment growth

mod input;
mod engine;
mod result;

pub use input::ProjectionInput;
pub use engine::{project, ProjectionEngine, ProjectionConfig, RoundingPolicy};
pub use result::{ProjectionResult, YearlyProjection};

// ============================================================================
// Default Simulator Inputs
// ============================================================================
// Values a fresh simulator form starts with.

/// Default starting balance
pub const DEFAULT_STARTING_AMOUNT: f64 = 5000.0;

/// Default contribution added each year
pub const DEFAULT_CONTRIBUTION: f64 = 100.0;

/// Default annual rate of return, in percent (4 = 4%)
pub const DEFAULT_RATE_OF_RETURN: f64 = 4.0;

/// Default number of years to project
pub const DEFAULT_YEARS_TO_GROW: u32 = 10;

/// Longest horizon `ProjectionInput::validate` accepts
pub const MAX_YEARS_TO_GROW: u32 = 1_000;
