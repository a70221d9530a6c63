// Revnet Simulator - CLI
// Runs revenue-network economic simulations from a TOML configuration

use clap::{Parser, Subcommand};
use revnet_sim::progress::SimulationProgress;
use revnet_sim::{report, Config, SimResult, Simulator};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "revnet-sim")]
#[command(version = "0.2.0")]
#[command(about = "Revenue Network Economics Simulator", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, default_value = "config.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Run a simulation
    Run {
        /// Override the configured number of days
        #[arg(short, long)]
        days: Option<u32>,

        /// Override the configured random seed
        #[arg(short, long)]
        seed: Option<u64>,

        /// Export full outcome (snapshots + traders) as JSON
        #[arg(long)]
        json: Option<String>,

        /// Export per-day snapshot table as CSV
        #[arg(long)]
        csv: Option<String>,

        /// Disable the progress bar
        #[arg(long)]
        no_progress: bool,
    },
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Init { force } => init_config(&cli.config, force),
        Commands::Run {
            days,
            seed,
            json,
            csv,
            no_progress,
        } => run_simulation(&cli.config, days, seed, json, csv, no_progress),
    };

    if let Err(e) = result {
        error!(category = e.category(), "{}", e);
        std::process::exit(1);
    }
}

fn init_config(path: &str, force: bool) -> SimResult<()> {
    if std::path::Path::new(path).exists() && !force {
        return Err(revnet_sim::SimError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path
        )));
    }

    Config::default().to_file(path)?;
    println!("📁 Wrote default config to {}", path);
    Ok(())
}

fn run_simulation(
    config_path: &str,
    days: Option<u32>,
    seed: Option<u64>,
    json: Option<String>,
    csv: Option<String>,
    no_progress: bool,
) -> SimResult<()> {
    let mut config = Config::load_or_create(config_path)?;

    if let Some(days) = days {
        config.simulation.total_days = days;
    }
    if let Some(seed) = seed {
        config.simulation.random_seed = seed;
    }

    info!(
        days = config.simulation.total_days,
        seed = config.simulation.random_seed,
        "loaded configuration from {}",
        config_path
    );

    let mut simulator = Simulator::new(config)?;
    let progress = (!no_progress).then(|| SimulationProgress::new(simulator.total_days()));

    loop {
        let more = simulator.step()?;
        if let Some(ref progress) = progress {
            progress.day_done(simulator.current_day() - 1);
        }
        if !more {
            break;
        }
    }
    if let Some(ref progress) = progress {
        progress.finish();
    }

    let outcome = simulator.finish();
    report::print_summary(&outcome);

    if let Some(path) = json {
        report::write_json(&outcome, &path)?;
        println!("💾 Wrote JSON outcome to {}", path);
    }
    if let Some(path) = csv {
        report::write_csv(&outcome, &path)?;
        println!("💾 Wrote CSV snapshots to {}", path);
    }

    Ok(())
}
