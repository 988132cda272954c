//! CLI Adapter.

mod install;
mod list;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::domain::{AppError, CatalogSource, LocalSourceConfig, RemoteSourceConfig};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "PROMPT_CHARTER_LOG";

#[derive(Parser)]
#[command(name = "prompt-charter")]
#[command(version)]
#[command(about = "CLI tool to install curated AI coding rule sets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactively install a RULES.md file to your project
    #[clap(visible_alias = "i")]
    Install(SourceArgs),
    /// Interactively replace the installed RULES.md file
    #[clap(visible_alias = "u")]
    Update(SourceArgs),
    /// List all available rule sets
    #[clap(visible_alias = "ls")]
    List(ListArgs),
}

#[derive(Args, Debug, Clone)]
struct SourceArgs {
    /// Use local filesystem instead of GitHub (for development)
    #[arg(short, long)]
    local: bool,
    /// Catalog repository root for --local (defaults to the current directory)
    #[arg(long, value_name = "DIR", requires = "local")]
    root: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct ListArgs {
    #[command(flatten)]
    source: SourceArgs,
    /// Print rule sets as a JSON array instead of the grouped view
    #[arg(long)]
    json: bool,
}

impl SourceArgs {
    fn catalog_source(&self) -> Result<CatalogSource, AppError> {
        if self.local {
            Ok(CatalogSource::Local(LocalSourceConfig::resolve(self.root.clone())?))
        } else {
            Ok(CatalogSource::Remote(RemoteSourceConfig::from_env()?))
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        None => {
            print_overview();
            Ok(())
        }
        Some(Commands::Install(args)) => install::run_install(&args),
        Some(Commands::Update(args)) => install::run_update(&args),
        Some(Commands::List(args)) => list::run_list(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn print_overview() {
    println!("\n🎯 Prompt Charter - AI Coding Rule Sets\n");
    println!("Install curated architectural rules to guide AI coding tools.\n");
    println!("Available commands:");
    println!("  install  - Interactively install a rule set");
    println!("  update   - Replace the installed rule set");
    println!("  list     - Show all available rule sets");
    println!("  --help   - Show help information\n");
    println!("Example: prompt-charter install\n");
}

/// Print the connectivity hint after a failed remote operation.
fn print_remote_tip(source: &CatalogSource, err: &AppError) {
    if !source.is_local() && matches!(err, AppError::Fetch { .. }) {
        eprintln!("\nTip: Check your internet connection or try again later.");
        eprintln!("Or use --local for local testing.");
    }
}

fn print_source_banner(title: &str, source: &CatalogSource) {
    println!("\n{}", title);
    match source {
        CatalogSource::Local(config) => {
            println!("(Local filesystem mode: {})\n", config.root.display())
        }
        CatalogSource::Remote(config) => {
            println!("(GitHub remote: {}/{}@{})\n", config.owner, config.repo, config.branch)
        }
    }
}
