//! Command line definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fuzzy_fan::LinguisticVariable;

use crate::config::OutputFormat;

/// Inspect the membership functions of the fuzzy fan-speed controller.
#[derive(Debug, Parser)]
#[command(name = "fuzzy-fan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Decimals printed for membership degrees
    #[arg(short, long, global = true)]
    pub precision: Option<usize>,

    /// Configuration file path
    #[arg(short, long, global = true, env = "FUZZY_FAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Aligned table (default)
    Table,
    /// Pretty printed JSON
    Json,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Membership degrees of a single value
    Degrees(DegreesArgs),

    /// Sampled membership curves over the whole domain
    Curve(CurveArgs),
}

#[derive(Debug, Parser)]
pub struct DegreesArgs {
    /// temperature, humidity or fan-speed
    pub variable: LinguisticVariable,

    /// Crisp value to evaluate
    #[arg(allow_negative_numbers = true)]
    pub value: f64,

    /// Evaluate values outside the domain instead of rejecting them
    #[arg(long)]
    pub unchecked: bool,
}

#[derive(Debug, Parser)]
pub struct CurveArgs {
    /// temperature, humidity or fan-speed
    pub variable: LinguisticVariable,

    /// Sampling step, overrides the configured one
    #[arg(short, long)]
    pub step: Option<f64>,

    /// Highlight the degrees at this value
    #[arg(short, long, allow_negative_numbers = true)]
    pub marker: Option<f64>,
}
