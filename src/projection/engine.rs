//! Yearly compounding engine

use super::{ProjectionInput, ProjectionResult, YearlyProjection, MAX_YEARS_TO_GROW};
use crate::observer::{NoopObserver, SimulationObserver};
use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// How the per-period rounding to cents interacts with compounding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoundingPolicy {
    /// Round only the emitted rows; the carried balance keeps full precision
    #[default]
    EmitOnly,
    /// Round the balance at the end of every period and compound the rounded value
    CarryRounded,
}

/// Engine settings
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionConfig {
    /// Calendar year that period 0 corresponds to. `None` uses the current local year.
    #[serde(default)]
    pub base_year: Option<i32>,

    #[serde(default)]
    pub rounding: RoundingPolicy,
}

/// Deterministic projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Project an input without reporting progress
    pub fn project(&self, input: &ProjectionInput) -> ProjectionResult {
        self.project_observed(input, &NoopObserver)
    }

    /// Project an input, reporting each emitted year and the finished result
    ///
    /// Each period adds the contribution first and then applies the annual
    /// rate, so the contribution earns a full period of return.
    pub fn project_observed(
        &self,
        input: &ProjectionInput,
        observer: &dyn SimulationObserver,
    ) -> ProjectionResult {
        let base_year = self.config.base_year.unwrap_or_else(current_year);
        let growth = 1.0 + input.rate_fraction();

        let mut years = Vec::with_capacity(input.years_to_grow.min(MAX_YEARS_TO_GROW) as usize);
        let mut total = input.starting_amount;

        for period in 1..=input.years_to_grow {
            total += input.contribution;
            total *= growth;

            let rounded_total = round_cents(total);
            if self.config.rounding == RoundingPolicy::CarryRounded {
                total = rounded_total;
            }

            let cumulative = input.starting_amount + input.contribution * period as f64;
            let row = YearlyProjection {
                year: calendar_year(base_year, period),
                total: rounded_total,
                contribution: cumulative,
                interest: round_cents(total - cumulative),
            };
            observer.on_year(&row);
            years.push(row);
        }

        let final_amount = years.last().map(|y| y.total).unwrap_or(input.starting_amount);
        let result = ProjectionResult { years, final_amount };
        observer.on_projection_complete(&result);
        result
    }
}

/// Project with default settings (current year, emit-only rounding)
pub fn project(input: &ProjectionInput) -> ProjectionResult {
    ProjectionEngine::default().project(input)
}

/// Round to 2 decimal places, half away from zero
pub(crate) fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Calendar year at the end of `period`, saturating at `i32::MAX`
fn calendar_year(base_year: i32, period: u32) -> i32 {
    i32::try_from(period).map_or(i32::MAX, |p| base_year.saturating_add(p))
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}
