//! Project investment growth and draw the yearly breakdown
//!
//! Inputs come from flags, a JSON simulation file, or both (flags win).

use anyhow::{Context, Result};
use clap::Parser;
use investment_simulator::chart::{render_observed, to_series, TerminalSurface};
use investment_simulator::config::{load_simulation, SimulationFile};
use investment_simulator::{LogObserver, ProjectionEngine, RoundingPolicy};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "simulate", about = "Year-by-year investment growth projection")]
struct Args {
    /// JSON simulation file (bare input or {"input": .., "engine": ..})
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial balance
    #[arg(long)]
    starting_amount: Option<f64>,

    /// Amount added each year (negative for withdrawals)
    #[arg(long, allow_hyphen_values = true)]
    contribution: Option<f64>,

    /// Annual rate of return in percent
    #[arg(long, allow_hyphen_values = true)]
    rate: Option<f64>,

    /// Number of years to project
    #[arg(long)]
    years: Option<u32>,

    /// Calendar year the projection starts from (defaults to this year)
    #[arg(long)]
    base_year: Option<i32>,

    /// Compound the balance after rounding it to cents each year
    #[arg(long)]
    carry_rounded: bool,

    /// Write the yearly rows to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print the chart configuration as JSON instead of drawing it
    #[arg(long)]
    chart_json: bool,

    /// Skip the chart entirely
    #[arg(long)]
    no_chart: bool,
}

impl Args {
    fn simulation(&self) -> Result<SimulationFile> {
        let mut sim = match &self.config {
            Some(path) => load_simulation(path)
                .with_context(|| format!("Failed to load simulation file {}", path.display()))?,
            None => SimulationFile::default(),
        };

        if let Some(v) = self.starting_amount {
            sim.input.starting_amount = v;
        }
        if let Some(v) = self.contribution {
            sim.input.contribution = v;
        }
        if let Some(v) = self.rate {
            sim.input.rate_of_return = v;
        }
        if let Some(v) = self.years {
            sim.input.years_to_grow = v;
        }
        if self.base_year.is_some() {
            sim.engine.base_year = self.base_year;
        }
        if self.carry_rounded {
            sim.engine.rounding = RoundingPolicy::CarryRounded;
        }
        Ok(sim)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let sim = args.simulation()?;
    sim.input.validate().context("Invalid projection input")?;

    let engine = ProjectionEngine::new(sim.engine);
    let result = engine.project_observed(&sim.input, &LogObserver);

    println!("Starting amount: {:.2}", sim.input.starting_amount);
    println!("Contribution:    {:.2}", sim.input.contribution);
    println!("Rate of return:  {}%", sim.input.rate_of_return);
    println!("Years to grow:   {}", sim.input.years_to_grow);
    println!();
    println!("{:<6} {:>14} {:>14} {:>14}", "Year", "Total", "Contribution", "Interest");
    for row in &result.years {
        println!(
            "{:<6} {:>14.2} {:>14.2} {:>14.2}",
            row.year, row.total, row.contribution, row.interest
        );
    }
    println!();
    println!("Final amount: {:.2}", result.final_amount);

    if let Some(path) = &args.csv {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        result.write_csv(BufWriter::new(file))?;
        println!("Output written to {}", path.display());
    }

    let series = to_series(&result);
    if args.chart_json {
        println!("{}", serde_json::to_string_pretty(&series.to_config())?);
    } else if !args.no_chart {
        println!();
        let mut surface = TerminalSurface::new(io::stdout().lock());
        render_observed(&series, &mut surface, None, &LogObserver)
            .context("Failed to draw chart")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn simulation_file(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(json.as_bytes()).expect("Failed to write temp file");
        file
    }

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("simulate").chain(args.iter().copied()))
            .expect("Failed to parse args")
    }

    #[test]
    fn test_flags_override_file_values() {
        let file = simulation_file(
            r#"{"input": {"startingAmount": 1000, "contribution": 200, "rateOfReturn": 5, "yearsToGrow": 3},
                "engine": {"baseYear": 2020}}"#,
        );
        let path = file.path().to_str().unwrap();
        let args = parse(&["--config", path, "--years", "7", "--base-year", "2030", "--carry-rounded"]);
        let sim = args.simulation().unwrap();

        assert_eq!(sim.input.years_to_grow, 7);
        assert_eq!(sim.engine.base_year, Some(2030));
        assert_eq!(sim.engine.rounding, RoundingPolicy::CarryRounded);
        // Values without a flag come from the file
        assert_eq!(sim.input.starting_amount, 1000.0);
        assert_eq!(sim.input.contribution, 200.0);
        assert_eq!(sim.input.rate_of_return, 5.0);
    }

    #[test]
    fn test_file_values_kept_without_flags() {
        let file = simulation_file(
            r#"{"input": {"yearsToGrow": 4}, "engine": {"baseYear": 2020, "rounding": "carryRounded"}}"#,
        );
        let args = parse(&["--config", file.path().to_str().unwrap()]);
        let sim = args.simulation().unwrap();

        assert_eq!(sim.input.years_to_grow, 4);
        assert_eq!(sim.engine.base_year, Some(2020));
        assert_eq!(sim.engine.rounding, RoundingPolicy::CarryRounded);
    }

    #[test]
    fn test_negative_flags_without_file() {
        let args = parse(&["--contribution", "-50", "--rate", "-2.5"]);
        let sim = args.simulation().unwrap();

        assert_eq!(sim.input.contribution, -50.0);
        assert_eq!(sim.input.rate_of_return, -2.5);
        assert_eq!(sim.input.starting_amount, 5000.0);
        assert_eq!(sim.engine.base_year, None);
    }

    #[test]
    fn test_bad_config_file_is_an_error() {
        let file = simulation_file(r#"{"input": {"yearsToGrow": -1}}"#);
        let args = parse(&["--config", file.path().to_str().unwrap(), "--years", "3"]);
        assert!(args.simulation().is_err());
    }
}
