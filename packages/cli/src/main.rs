use clap::{Parser, Subcommand};
use colored::*;
use std::process;

mod commands;

use commands::creation::CreationCommands;
use commands::guidelines::GuidelinesCommands;
use commands::settings::SettingsCommands;
use commands::utils::hint_for;
use commands::words::WordsCommands;
use groupctl_settings::SettingsError;

#[derive(Parser)]
#[command(name = "groupctl")]
#[command(about = "groupctl - Microsoft 365 group settings administration")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the tenant's Group.Unified settings object
    #[command(subcommand)]
    Settings(SettingsCommands),
    /// Control who can create Microsoft 365 groups
    #[command(subcommand)]
    Creation(CreationCommands),
    /// Manage the group usage guidelines link
    #[command(subcommand)]
    Guidelines(GuidelinesCommands),
    /// Manage the blocked word list for group names
    #[command(subcommand)]
    Words(WordsCommands),
}

#[tokio::main]
async fn main() {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    match handle_command(cli.command).await {
        Ok(_) => {}
        Err(e) => {
            report_failure(&e);
            process::exit(1);
        }
    }
}

async fn handle_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Settings(cmd) => commands::settings::handle_settings_command(cmd).await,
        Commands::Creation(cmd) => commands::creation::handle_creation_command(cmd).await,
        Commands::Guidelines(cmd) => commands::guidelines::handle_guidelines_command(cmd).await,
        Commands::Words(cmd) => commands::words::handle_words_command(cmd).await,
    }
}

/// Precondition failures get a warning with guidance; everything else is an
/// error with the underlying cause attached.
fn report_failure(error: &anyhow::Error) {
    match error.downcast_ref::<SettingsError>() {
        Some(settings_error) if settings_error.is_user_error() => {
            eprintln!("{} {}", "Warning:".yellow().bold(), settings_error);
            if let Some(hint) = hint_for(settings_error) {
                eprintln!("{} {}", "Tip:".yellow(), hint);
            }
        }
        _ => {
            eprintln!("{} {:#}", "Error:".red().bold(), error);
        }
    }
}
