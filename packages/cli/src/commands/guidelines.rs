use clap::Subcommand;
use colored::*;
use url::Url;

use super::utils::build_gateway;

#[derive(Subcommand)]
pub enum GuidelinesCommands {
    /// Set the usage guidelines URL shown during group creation
    Set {
        /// Absolute http(s) URL of the guidelines page
        url: String,
    },
    /// Clear the usage guidelines URL
    Clear,
}

pub async fn handle_guidelines_command(command: GuidelinesCommands) -> anyhow::Result<()> {
    match command {
        GuidelinesCommands::Set { url } => set_guidelines(&url).await,
        GuidelinesCommands::Clear => clear_guidelines().await,
    }
}

/// Reject malformed or non-web URLs before anything reaches the directory
fn validate_guidelines_url(raw: &str) -> anyhow::Result<Url> {
    let parsed = Url::parse(raw).map_err(|e| anyhow::anyhow!("Invalid URL '{}': {}", raw, e))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        anyhow::bail!("Guidelines URL must use http or https, got '{}'", parsed.scheme());
    }
    Ok(parsed)
}

async fn set_guidelines(url: &str) -> anyhow::Result<()> {
    let validated = validate_guidelines_url(url)?;

    let gateway = build_gateway()?;
    gateway.set_guidelines_url(validated.as_str()).await?;

    println!(
        "{} Usage guidelines URL set to {}",
        "✅".green(),
        validated.as_str().cyan()
    );
    Ok(())
}

async fn clear_guidelines() -> anyhow::Result<()> {
    let gateway = build_gateway()?;
    gateway.clear_guidelines_url().await?;

    println!("{} Usage guidelines URL cleared", "✅".green());
    Ok(())
}
