mod config;
mod logging;

use config::Config;
use log::*;
use rally_timing::{parse_clock_time, RoundingPolicy, Threshold};
use std::path::PathBuf;
use structopt::StructOpt;

const APP_NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Debug, StructOpt)]
#[structopt(name = APP_NAME, author, about)]
struct Opt {
    /// Enable verbose logging
    #[structopt(short, long)]
    verbose: bool,
    /// Custom path to the app's configuration file. By default the app will use the system-specific user configuration
    /// directory.
    #[structopt(short, long)]
    config: Option<PathBuf>,
    /// Seconds past the minute (0-59) at which an elapsed time rounds up. Overrides the configured threshold.
    #[structopt(short, long)]
    threshold: Option<u32>,
    /// Custom rally data directory. Overrides the configured data directory.
    #[structopt(long)]
    data_root: Option<PathBuf>,
    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Round an elapsed time given in minutes, such as 2.5
    Round { minutes: f64 },
    /// Round the time elapsed between two clock readings (HH:MM:SS)
    Diff { start: String, end: String },
    /// Compute the penalty of an actual stage time against the expected time in minutes
    Penalty { expected: f64, start: String, end: String },
    /// Print the locations of the rally data files
    Paths {
        /// Create the result directory if it doesn't exist
        #[structopt(long)]
        ensure: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();

    setup_logging(&opt)?;
    let mut cfg = load_config(&opt)?;

    debug!("{:?}", opt);
    debug!("{:?}", cfg);

    if let Some(threshold) = opt.threshold {
        cfg.threshold = Threshold::new(threshold)?;
    }

    if let Some(root) = opt.data_root {
        cfg.data_root = Some(root);
    }

    let policy = cfg.rounding_policy();
    debug!("Rounding up at {} past the minute", policy.threshold());

    match opt.cmd {
        Command::Round { minutes } => println!("{}", policy.round(minutes)?),
        Command::Diff { start, end } => {
            let (start, end) = parse_clock_pair(&start, &end)?;
            println!("{}", policy.round_difference(end, start)?);
        }
        Command::Penalty { expected, start, end } => print_penalty(&policy, expected, &start, &end)?,
        Command::Paths { ensure } => {
            let paths = cfg.data_paths()?;

            if ensure {
                let result = paths.ensure_result_dir()?;
                info!("Result directory is ready at {}", result.display());
            }

            for (name, path) in &paths.entries() {
                println!("{: >13}: {}", name, path.display());
            }
        }
    }

    Ok(())
}

fn print_penalty(policy: &RoundingPolicy, expected: f64, start: &str, end: &str) -> anyhow::Result<()> {
    let (start, end) = parse_clock_pair(start, end)?;
    let penalty = policy.penalty(expected, start, end)?;

    if penalty < 0 {
        warn!("Stage finished {} minute(s) early", -penalty);
    }

    println!("{}", penalty);
    Ok(())
}

fn parse_clock_pair(start: &str, end: &str) -> rally_timing::Result<(chrono::NaiveTime, chrono::NaiveTime)> {
    Ok((parse_clock_time(start)?, parse_clock_time(end)?))
}

fn setup_logging(opt: &Opt) -> anyhow::Result<()> {
    logging::setup_logging(logging::log_level(opt.verbose))?;
    Ok(())
}

fn load_config(opt: &Opt) -> anyhow::Result<Config> {
    Ok(match opt.config.as_deref() {
        Some(path) => confy::load_path(path)?,
        None => confy::load(APP_NAME)?,
    })
}
