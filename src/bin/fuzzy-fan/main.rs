//! fuzzy-fan - print membership degrees and curves of the fan controller.

mod cli;
mod config;
mod output;

use anyhow::Result;
use clap::Parser;
use fuzzy_fan::{sample_with_step, Reading};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::output::Formatter;

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let format = cli.format.map(Into::into).unwrap_or(config.output.format);
    let precision = cli.precision.unwrap_or(config.output.precision);
    let formatter = Formatter::new(format, precision);

    match cli.command {
        Command::Degrees(args) => {
            let reading = if args.unchecked {
                if !args.variable.contains(args.value) {
                    tracing::warn!(
                        variable = %args.variable,
                        value = args.value,
                        "value outside the domain, degrees follow the formulas only"
                    );
                }
                Reading::new(args.variable, args.value)
            } else {
                Reading::checked(args.variable, args.value)?
            };

            println!("{}", formatter.format_reading(&reading)?);
        },
        Command::Curve(args) => {
            let step = args.step.unwrap_or(config.sampling.step);
            let curve = sample_with_step(args.variable, step)?;
            let marker = match args.marker {
                Some(x) => {
                    let x = args.variable.check(x)?;
                    curve.marker(x)
                },
                None => None,
            };

            tracing::info!(variable = %args.variable, step, points = curve.len(), "sampled curve");

            println!("{}", formatter.format_curve(&curve, marker.as_ref())?);
        },
    }

    Ok(())
}
