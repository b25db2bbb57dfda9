use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;

use dblimit::report;
use dblimit::validation::{self, DEFAULT_SWEEP};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Table(args) => execute_table(args),
        Commands::Validate(args) => execute_validate(args),
    }
}

#[derive(Parser)]
#[command(author, version, about = "Decibel limiter curve tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print input and output level for each given level.
    Table(TableArgs),
    /// Check the limiter output against the expected tolerance bands.
    Validate(ValidateArgs),
}

#[derive(Args)]
struct TableArgs {
    /// Input levels in dB. Defaults to a spread from -15 to 25 dB.
    #[arg(allow_negative_numbers = true)]
    levels: Vec<f64>,
}

#[derive(Args)]
struct ValidateArgs {
    /// First level of the sweep in dB.
    #[arg(long, allow_negative_numbers = true, default_value_t = DEFAULT_SWEEP.0)]
    start: f64,
    /// End of the sweep in dB, not included.
    #[arg(long, allow_negative_numbers = true, default_value_t = DEFAULT_SWEEP.1)]
    stop: f64,
    /// Distance between swept levels in dB.
    #[arg(long, default_value_t = DEFAULT_SWEEP.2)]
    step: f64,
    /// Explicit input levels in dB. Replaces the sweep when given.
    #[arg(allow_negative_numbers = true)]
    levels: Vec<f64>,
}

fn checked_levels(levels: Vec<f64>) -> Result<Vec<f64>> {
    for &level in &levels {
        dblimit::try_decibel_limiter(level)
            .with_context(|| format!("cannot process level {}", level))?;
    }
    Ok(levels)
}

fn execute_table(args: TableArgs) -> Result<()> {
    let levels = match args.levels {
        l if l.is_empty() => report::DEFAULT_LEVELS.to_vec(),
        l => checked_levels(l)?
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_level_table(&mut out, &levels).context("failed to write level table")?;
    out.flush()?;
    Ok(())
}

fn execute_validate(args: ValidateArgs) -> Result<()> {
    let (start, stop, step) = (args.start, args.stop, args.step);
    let levels = match args.levels {
        l if l.is_empty() => validation::sweep(start, stop, step)
            .with_context(|| format!("invalid sweep {} to {} step {}", start, stop, step))?,
        l => checked_levels(l)?
    };
    info!("Validating {} levels", levels.len());

    let result = validation::test_limiter(levels);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_validation_report(&mut out, &result).context("failed to write validation report")?;
    out.flush()?;

    if !result.passed() {
        bail!("{} of {} levels outside the expected range", result.failures().count(), result.samples().len());
    }
    Ok(())
}
