//! mcgreeks - Monte Carlo option pricing from the command line
//!
//! # Commands
//!
//! - `mcgreeks price` - Price the configured European option
//! - `mcgreeks greeks` - Estimate Delta, Gamma and Theta
//! - `mcgreeks check` - Show the resolved configuration and stream preview
//!
//! Settings come from `mcgreeks.toml`, then `MCGREEKS_*` environment
//! variables, then command line flags.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pricer_mc::mc::PayoffType;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

use commands::OutputFormat;
use config::{LogLevel, Overrides, RunConfig};
pub use error::{CliError, Result};

/// Monte Carlo European option pricer
#[derive(Parser)]
#[command(name = "mcgreeks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (default: ./mcgreeks.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Flags shared by `price` and `greeks`
#[derive(Args)]
struct RunArgs {
    /// Option kind (call or put)
    #[arg(short, long)]
    kind: Option<PayoffType>,

    /// Number of Monte Carlo paths
    #[arg(short = 'm', long)]
    paths: Option<usize>,

    /// Number of time steps per path
    #[arg(short = 'n', long)]
    steps: Option<usize>,

    /// MT19937 seed
    #[arg(short, long)]
    seed: Option<u32>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Show Black-Scholes reference values alongside
    #[arg(long)]
    compare: bool,
}

impl RunArgs {
    fn overrides(&self) -> Result<Overrides> {
        if self.paths == Some(0) {
            return Err(CliError::InvalidArgument("--paths must be at least 1".into()));
        }
        if self.steps == Some(0) {
            return Err(CliError::InvalidArgument("--steps must be at least 1".into()));
        }
        Ok(Overrides {
            kind: self.kind,
            paths: self.paths,
            steps: self.steps,
            seed: self.seed,
        })
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Price the configured option
    Price(RunArgs),

    /// Estimate Delta, Gamma and Theta by finite differences
    Greeks(RunArgs),

    /// Check configuration and show the first random draws
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let overrides = match &cli.command {
        Commands::Price(args) | Commands::Greeks(args) => args.overrides()?,
        Commands::Check => Overrides::default(),
    };
    let config = RunConfig::load_or_default(cli.config.as_deref())?
        .with_env_override()?
        .with_cli_override(overrides);

    // Initialise tracing; RUST_LOG takes precedence over the configured level
    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        config.log_level
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(?config, "Resolved configuration");

    config.validate()?;

    match cli.command {
        Commands::Price(args) => commands::price::run(&config, args.format, args.compare),
        Commands::Greeks(args) => commands::greeks::run(&config, args.format, args.compare),
        Commands::Check => commands::check::run(&config),
    }
}
