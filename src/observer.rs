//! Observability hook for projections and chart rendering
//!
//! The engine and the chart adapter never log on their own. They report
//! events to a [`SimulationObserver`], so callers choose whether anything is
//! traced. [`LogObserver`] forwards events to the `log` facade.

use crate::chart::ChartHandle;
use crate::projection::{ProjectionResult, YearlyProjection};

/// Receiver for projection and render events. All methods default to no-ops.
pub trait SimulationObserver {
    /// Called once per emitted period, in year order
    fn on_year(&self, _row: &YearlyProjection) {}

    /// Called after the full result has been assembled
    fn on_projection_complete(&self, _result: &ProjectionResult) {}

    /// Called after a previous chart was destroyed on a surface
    fn on_chart_destroyed(&self, _handle_id: u64) {}

    /// Called after a new chart was created on a surface
    fn on_chart_created(&self, _handle: &ChartHandle) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SimulationObserver for NoopObserver {}

/// Observer that writes events through the `log` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl SimulationObserver for LogObserver {
    fn on_year(&self, row: &YearlyProjection) {
        log::debug!(
            "Year {}: Total={:.2}, Contribution={:.2}, Interest={:.2}",
            row.year,
            row.total,
            row.contribution,
            row.interest
        );
    }

    fn on_projection_complete(&self, result: &ProjectionResult) {
        log::info!(
            "Projection complete: {} years, final amount {:.2}",
            result.years.len(),
            result.final_amount
        );
    }

    fn on_chart_destroyed(&self, handle_id: u64) {
        log::info!("Destroyed previous chart instance {}", handle_id);
    }

    fn on_chart_created(&self, handle: &ChartHandle) {
        log::info!("Chart {} created with new data", handle.id());
    }
}
