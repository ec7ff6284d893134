//! Run the same input across a range of annual rates
//!
//! Each projection is independent, so rates are projected in parallel.

use anyhow::{bail, Context, Result};
use clap::Parser;
use investment_simulator::config::load_input;
use investment_simulator::{ProjectionEngine, ProjectionInput, ProjectionResult};
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "rate_sweep", about = "Compare final balances across rates of return")]
struct Args {
    /// JSON file with the base input; the rate in it is ignored
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    starting_amount: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    contribution: Option<f64>,

    #[arg(long)]
    years: Option<u32>,

    /// Lowest rate in percent
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    min_rate: f64,

    /// Highest rate in percent (inclusive)
    #[arg(long, default_value_t = 10.0, allow_hyphen_values = true)]
    max_rate: f64,

    /// Rate increment in percent
    #[arg(long, default_value_t = 1.0)]
    step: f64,
}

fn rates(min: f64, max: f64, step: f64) -> Result<Vec<f64>> {
    if !(step.is_finite() && step > 0.0) {
        bail!("--step must be a positive number, got {step}");
    }
    if !(min.is_finite() && max.is_finite()) || min > max {
        bail!("invalid rate range {min}..={max}");
    }
    let count = ((max - min) / step + 1e-9).floor() as usize + 1;
    Ok((0..count).map(|i| min + step * i as f64).collect())
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let mut base = match &args.config {
        Some(path) => load_input(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => ProjectionInput::default(),
    };
    if let Some(v) = args.starting_amount {
        base.starting_amount = v;
    }
    if let Some(v) = args.contribution {
        base.contribution = v;
    }
    if let Some(v) = args.years {
        base.years_to_grow = v;
    }
    base.validate().context("Invalid projection input")?;

    let rates = rates(args.min_rate, args.max_rate, args.step)?;
    log::info!("Projecting {} rates over {} years", rates.len(), base.years_to_grow);

    let start = Instant::now();
    let engine = ProjectionEngine::default();
    let results: Vec<(f64, ProjectionResult)> = rates
        .par_iter()
        .map(|&rate| {
            let input = ProjectionInput { rate_of_return: rate, ..base };
            (rate, engine.project(&input))
        })
        .collect();
    log::info!("Projections complete in {:?}", start.elapsed());

    println!("{:>8} {:>16} {:>16}", "Rate %", "Final Amount", "Total Interest");
    for (rate, result) in &results {
        println!(
            "{:>8.2} {:>16.2} {:>16.2}",
            rate,
            result.final_amount,
            result.total_interest()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates_inclusive() {
        assert_eq!(rates(0.0, 3.0, 1.0).unwrap(), vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(rates(2.0, 2.0, 0.5).unwrap(), vec![2.0]);
        assert_eq!(rates(0.0, 1.0, 0.3).unwrap().len(), 4);
    }

    #[test]
    fn test_rates_rejects_bad_ranges() {
        assert!(rates(5.0, 1.0, 1.0).is_err());
        assert!(rates(0.0, 1.0, 0.0).is_err());
        assert!(rates(0.0, f64::NAN, 1.0).is_err());
    }
}
