use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use finance_tracker::cli::{
    handle_add_command, handle_balance_command, handle_list_command, handle_report_command,
    AddArgs, ListArgs, ReportArgs,
};
use finance_tracker::config::{Settings, TrackerPaths};
use finance_tracker::logging::init_tracing;
use finance_tracker::storage::Ledger;

#[derive(Parser)]
#[command(
    name = "finance-tracker",
    version,
    about = "Terminal personal finance tracker",
    long_about = "Finance Tracker records income and expenses in a CSV ledger and \
                  shows the balance and per-category charts in the terminal."
)]
struct Cli {
    /// Ledger file to use instead of the configured one
    #[arg(long, global = true, env = "FINANCE_TRACKER_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Record a transaction
    Add(AddArgs),

    /// List recorded transactions
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show the current balance
    Balance,

    /// Show category breakdowns and the income/expense split
    Report(ReportArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    init_tracing(&paths.log_file(), &settings.log_filter)?;

    // The ledger is only opened by commands that use it; loading creates the file
    let ledger_path = settings.ledger_path(&paths, cli.file);
    let load_ledger = || Ledger::load(ledger_path.clone());

    match cli.command {
        None | Some(Commands::Tui) => {
            let mut ledger = load_ledger();
            finance_tracker::tui::run_tui(&mut ledger, &settings)?;
        }
        Some(Commands::Add(args)) => handle_add_command(&mut load_ledger(), &settings, args)?,
        Some(Commands::List(args)) => handle_list_command(&load_ledger(), args)?,
        Some(Commands::Balance) => handle_balance_command(&load_ledger(), &settings)?,
        Some(Commands::Report(args)) => handle_report_command(&load_ledger(), args)?,
        Some(Commands::Config) => {
            println!("Finance Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Ledger file:    {}", ledger_path.display());
            println!("Log file:       {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {:?}", settings.currency_symbol);
            println!("  Log filter:      {}", settings.log_filter);
        }
    }

    Ok(())
}
