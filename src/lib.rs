//! Investment Simulator - year-by-year growth projections for a savings balance
//!
//! This library provides:
//! - A deterministic projection engine (starting amount, periodic contribution,
//!   annual rate of return, horizon in years)
//! - Chart-ready series and a bar chart description for rendering surfaces
//! - Safe chart replacement on a surface via explicit handle threading
//! - JSON configuration loading and CSV/JSON output

pub mod error;
pub mod observer;
pub mod config;
pub mod projection;
pub mod chart;

// Re-export commonly used types
pub use error::{Result, SimulatorError};
pub use observer::{LogObserver, NoopObserver, SimulationObserver};
pub use projection::{
    project, ProjectionConfig, ProjectionEngine, ProjectionInput, ProjectionResult,
    RoundingPolicy, YearlyProjection,
};
pub use chart::{render, render_observed, to_series, ChartConfig, ChartHandle, ChartSeries, RenderTarget};
