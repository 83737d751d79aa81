//! Argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sbicalc_core::MetricId;

#[derive(Parser, Debug)]
#[command(name = "sbicalc")]
#[command(about = "Space-based interceptor constellation sizing and cost calculator")]
pub struct Args {
    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,

    /// YAML scenario file mapping field keys to values
    #[arg(short, long, global = true)]
    pub scenario: Option<PathBuf>,

    /// Shared-link query string, e.g. `salvoSize=2&flyoutTimeSeconds=90`
    #[arg(short, long, global = true)]
    pub query: Option<String>,

    /// Override one field; may be repeated
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_assignment, global = true)]
    pub sets: Vec<(String, String)>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate the scenario and print the report
    Run {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Sweep one input across a range and chart a metric against it
    Sweep(SweepArgs),
    /// List the assumption fields with their defaults and bounds
    Fields,
    /// Print the normalized assumptions as a shareable query string
    Link,
    /// Write the normalized assumptions to a YAML scenario file
    Save {
        /// Destination file
        path: PathBuf,
    },
}

#[derive(clap::Args, Debug, Clone)]
pub struct SweepArgs {
    /// Field key for the horizontal axis
    #[arg(long, default_value = "maxDeltaVKmPerS")]
    pub field: String,

    /// Metric key for the vertical axis
    #[arg(long, default_value = "interceptorMassKg")]
    pub metric: MetricId,

    /// Range start (defaults to a window around the scenario value)
    #[arg(long)]
    pub start: Option<String>,

    /// Range end (defaults to a window around the scenario value)
    #[arg(long)]
    pub end: Option<String>,

    /// Report the sample nearest this input value
    #[arg(long)]
    pub probe: Option<f64>,

    /// Write the samples to a `.csv` or `.json` file, or into a directory
    /// under a dated default name
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Maximum number of steps across the range
    #[arg(long)]
    pub max_steps: Option<i64>,

    /// Maximum number of generated points
    #[arg(long)]
    pub max_points: Option<i64>,

    /// Print the sweep result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Parse a `key=value` override
pub fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing field key in `{s}`"));
    }
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("salvoSize=2"),
            Ok(("salvoSize".to_string(), "2".to_string()))
        );
        assert_eq!(
            parse_assignment(" payloadCapacityPerVehicleKg =45,000"),
            Ok(("payloadCapacityPerVehicleKg".to_string(), "45,000".to_string()))
        );
        assert!(parse_assignment("salvoSize").is_err());
        assert!(parse_assignment("=2").is_err());
    }

    #[test]
    fn test_sweep_defaults() {
        let args = Args::try_parse_from(["sbicalc", "sweep"]).unwrap();
        let Command::Sweep(sweep) = args.command else {
            panic!("expected sweep");
        };
        assert_eq!(sweep.field, "maxDeltaVKmPerS");
        assert_eq!(sweep.metric, MetricId::InterceptorMassKg);
        assert!(sweep.start.is_none() && sweep.end.is_none());
    }

    #[test]
    fn test_global_overrides_after_subcommand() {
        let args = Args::try_parse_from([
            "sbicalc",
            "run",
            "--set",
            "salvoSize=2",
            "--set",
            "flyoutTimeSeconds=90",
            "--json",
        ])
        .unwrap();
        assert_eq!(args.sets.len(), 2);
        assert!(matches!(args.command, Command::Run { json: true }));
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_rejects_unknown_metric() {
        assert!(Args::try_parse_from(["sbicalc", "sweep", "--metric", "warpFactor"]).is_err());
    }
}
