mod cli;
mod config;
mod error;
mod stardate;

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::error::Result;

const EXAMPLES: &str = "\
Examples:
  Convert a date to stardate:
    stardate --date 21-02-2025
  Convert a date to stardate using a temporary base year:
    stardate --date 21-02-2025 --base 2300
  Convert a stardate to human date:
    stardate --stardate 45000
  Update the reference base year:
    stardate --set-base 2300
  Show the current reference base year:
    stardate --show-base";

#[derive(Parser, Debug)]
#[command(name = "stardate", version)]
#[command(about = "Convert calendar dates to stardates and back", long_about = None)]
#[command(after_help = EXAMPLES)]
struct Cli {
    /// Human date in DD-MM-YYYY format to convert to stardate (defaults to today)
    #[arg(short, long)]
    date: Option<String>,

    /// Stardate value to convert to human date
    #[arg(short, long, allow_negative_numbers = true)]
    stardate: Option<f64>,

    /// Temporary base year for this conversion only (not persisted)
    #[arg(short, long, allow_negative_numbers = true)]
    base: Option<i32>,

    /// Set and persist a new base year for all future conversions
    #[arg(long, allow_negative_numbers = true)]
    set_base: Option<i32>,

    /// Display the current persistent base year
    #[arg(long)]
    show_base: bool,

    /// Path to the base year file (defaults to ~/.stardate-cli-config)
    #[arg(long, env = "STARDATE_CONFIG")]
    config: Option<PathBuf>,
}

impl Cli {
    /// True when no mode-selecting flag was given
    fn is_bare(&self) -> bool {
        self.date.is_none()
            && self.stardate.is_none()
            && self.base.is_none()
            && self.set_base.is_none()
            && !self.show_base
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.clone().or_else(config::default_path);
    let mut persistent_base = config::load_or_default(config_path.as_deref());

    if cli.is_bare() {
        return cli::show::summary(persistent_base);
    }

    if cli.show_base {
        return cli::show::base(persistent_base);
    }

    if let Some(year) = cli.set_base {
        cli::base::set(config_path.as_deref(), year)?;
        persistent_base = year;
    }

    let base_year = cli.base.unwrap_or(persistent_base);
    tracing::debug!("converting with base year {}", base_year);

    if let Some(stardate) = cli.stardate {
        return cli::convert::to_date(stardate, base_year);
    }

    cli::convert::to_stardate(cli.date.as_deref(), base_year)
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version are not failures
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };
    init_logging();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
