use clap::Subcommand;
use colored::*;

use groupctl_settings::{WordListReport, WordOutcome};

use super::utils::build_gateway;

#[derive(Subcommand)]
pub enum WordsCommands {
    /// Add words to the blocked word list
    Add {
        /// Words to block in group names
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Remove words from the blocked word list
    Remove {
        /// Words to unblock
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Show the blocked word list
    List,
}

pub async fn handle_words_command(command: WordsCommands) -> anyhow::Result<()> {
    match command {
        WordsCommands::Add { words } => add_words(&words).await,
        WordsCommands::Remove { words } => remove_words(&words).await,
        WordsCommands::List => list_words().await,
    }
}

async fn add_words(words: &[String]) -> anyhow::Result<()> {
    let gateway = build_gateway()?;
    let report = gateway.add_blocked_words(words).await?;
    print_report(&report);
    Ok(())
}

async fn remove_words(words: &[String]) -> anyhow::Result<()> {
    let gateway = build_gateway()?;
    let report = gateway.remove_blocked_words(words).await?;
    print_report(&report);
    Ok(())
}

async fn list_words() -> anyhow::Result<()> {
    let gateway = build_gateway()?;
    let list = gateway.blocked_words().await?;

    println!("{}", "🚫 Blocked words for group names".blue().bold());
    if list.is_empty() {
        println!("{}", "No blocked words are configured".dimmed());
    } else {
        println!("{}", list.to_string().cyan());
        println!("Total: {} words", list.len().to_string().cyan());
    }
    Ok(())
}

fn print_report(report: &WordListReport) {
    for outcome in &report.outcomes {
        match outcome {
            WordOutcome::Added(word) => {
                println!("{} Added '{}'", "✅".green(), word);
            }
            WordOutcome::AlreadyListed(word) => {
                println!("{} '{}' is already on the list", "⚠️".yellow(), word);
            }
            WordOutcome::Removed(word) => {
                println!("{} Removed '{}'", "✅".green(), word);
            }
            WordOutcome::NotListed(word) => {
                println!("{} '{}' is not on the list", "⚠️".yellow(), word);
            }
        }
    }

    if report.persisted {
        let rendered = report.list.to_string();
        let display = if rendered.is_empty() {
            "(empty)".to_string()
        } else {
            rendered
        };
        println!("Blocked word list is now: {}", display.cyan());
    } else {
        println!("{}", "No changes made".dimmed());
    }
}
