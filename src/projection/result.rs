//! Projection output rows and result container

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// One simulated year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyProjection {
    /// Calendar year at the end of this period
    pub year: i32,

    /// Balance at the end of the period, rounded to cents
    pub total: f64,

    /// Cumulative principal paid in so far (starting amount + contributions)
    pub contribution: f64,

    /// total - contribution, rounded to cents. Negative when the balance
    /// trails the principal paid in.
    pub interest: f64,
}

/// Ordered yearly rows plus the final balance
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub years: Vec<YearlyProjection>,
    pub final_amount: f64,
}

impl ProjectionResult {
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn last_year(&self) -> Option<&YearlyProjection> {
        self.years.last()
    }

    /// Interest accrued over the whole horizon (0 for an empty projection)
    pub fn total_interest(&self) -> f64 {
        self.years.last().map(|y| y.interest).unwrap_or(0.0)
    }

    /// Write the yearly rows as CSV with a `Year,Total,Contribution,Interest` header
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(["Year", "Total", "Contribution", "Interest"])?;
        for row in &self.years {
            wtr.write_record([
                row.year.to_string(),
                format!("{:.2}", row.total),
                format!("{:.2}", row.contribution),
                format!("{:.2}", row.interest),
            ])?;
        }
        wtr.flush()?;
        Ok(())
    }
}
