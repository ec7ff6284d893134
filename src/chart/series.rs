//! Parallel chart series and the bar chart description built from them

use crate::projection::ProjectionResult;
use serde::{Deserialize, Serialize};

/// Four index-aligned series, one entry per projected year
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub balance: Vec<f64>,
    pub contribution: Vec<f64>,
    pub interest: Vec<f64>,
}

impl ChartSeries {
    pub fn from_result(result: &ProjectionResult) -> Self {
        let n = result.years.len();
        let mut series = Self {
            labels: Vec::with_capacity(n),
            balance: Vec::with_capacity(n),
            contribution: Vec::with_capacity(n),
            interest: Vec::with_capacity(n),
        };
        for row in &result.years {
            series.labels.push(row.year.to_string());
            series.balance.push(row.total);
            series.contribution.push(row.contribution);
            series.interest.push(row.interest);
        }
        series
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Bar chart with balance, contribution and interest datasets
    pub fn to_config(&self) -> ChartConfig {
        ChartConfig {
            kind: ChartKind::Bar,
            labels: self.labels.clone(),
            datasets: vec![
                Dataset::new("Total Balance", &self.balance, BALANCE_COLOR),
                Dataset::new("Contributions", &self.contribution, CONTRIBUTION_COLOR),
                Dataset::new("Total Interest", &self.interest, INTEREST_COLOR),
            ],
            options: ChartOptions::default(),
        }
    }
}

/// Reshape a projection into chart series
pub fn to_series(result: &ProjectionResult) -> ChartSeries {
    ChartSeries::from_result(result)
}

pub const BALANCE_COLOR: &str = "#1890ff";
pub const CONTRIBUTION_COLOR: &str = "#52c41a";
pub const INTEREST_COLOR: &str = "#faad14";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: String,
}

impl Dataset {
    fn new(label: &str, data: &[f64], color: &str) -> Self {
        Self {
            label: label.to_string(),
            data: data.to_vec(),
            background_color: color.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub legend: LegendPosition,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            legend: LegendPosition::Bottom,
        }
    }
}

/// Everything a rendering surface needs to draw one chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub options: ChartOptions,
}
