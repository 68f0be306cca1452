use anyhow::Result;
use clap::{Parser, Subcommand};

use cashpulse::cli::{handle_budget_command, handle_range_command, handle_snapshot_command};
use cashpulse::config::{paths::CashpulsePaths, settings::Settings};
use cashpulse::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "cashpulse",
    author = "Kaylee Beyene",
    version,
    about = "Period reconciliation for personal finance",
    long_about = "Cashpulse works out calendar month ranges, how each budget stands \
                  for a period, and one-month investment returns between holding \
                  snapshots."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calendar month and date range commands
    #[command(subcommand)]
    Range(cashpulse::cli::RangeCommands),

    /// Budget status commands
    #[command(subcommand)]
    Budget(cashpulse::cli::BudgetCommands),

    /// Holding snapshot and investment return commands
    #[command(subcommand)]
    Snapshot(cashpulse::cli::SnapshotCommands),

    /// Show configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = CashpulsePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    init_tracing(&settings.log_level);

    match cli.command {
        Some(Commands::Range(cmd)) => {
            handle_range_command(&settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&settings, cmd)?;
        }
        Some(Commands::Snapshot(cmd)) => {
            handle_snapshot_command(&settings, cmd)?;
        }
        Some(Commands::Config) => {
            println!("Cashpulse Configuration");
            println!("=======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Year window:     ±{}", settings.year_window);
            println!("  Log level:       {}", settings.log_level);
        }
        None => {
            println!("Cashpulse - period reconciliation for personal finance");
            println!();
            println!("Run 'cashpulse --help' for usage information.");
        }
    }

    Ok(())
}
