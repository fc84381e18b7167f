use clap::{Args, Subcommand};
use colored::*;

use groupctl_settings::GroupSelector;

use super::utils::build_gateway;

#[derive(Subcommand)]
pub enum CreationCommands {
    /// Allow everyone to create Microsoft 365 groups
    Enable,
    /// Block self-service group creation
    Disable,
    /// Restrict group creation to the members of one group
    AllowGroup(AllowGroupArgs),
    /// Remove the group-creation restriction
    ClearAllowed,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct AllowGroupArgs {
    /// Display name of the group (must match exactly one group)
    #[arg(long)]
    pub name: Option<String>,
    /// Object id of the group
    #[arg(long)]
    pub id: Option<String>,
}

pub async fn handle_creation_command(command: CreationCommands) -> anyhow::Result<()> {
    match command {
        CreationCommands::Enable => set_enabled(true).await,
        CreationCommands::Disable => set_enabled(false).await,
        CreationCommands::AllowGroup(args) => allow_group(args).await,
        CreationCommands::ClearAllowed => clear_allowed().await,
    }
}

async fn set_enabled(enabled: bool) -> anyhow::Result<()> {
    let gateway = build_gateway()?;
    gateway.set_group_creation_enabled(enabled).await?;

    if enabled {
        println!("{} Self-service group creation enabled", "✅".green());
    } else {
        println!("{} Self-service group creation disabled", "✅".green());
        println!(
            "{}",
            "Members of the allowed group (if set) can still create groups".dimmed()
        );
    }
    Ok(())
}

async fn allow_group(args: AllowGroupArgs) -> anyhow::Result<()> {
    let selector = match (args.name, args.id) {
        (Some(name), None) => GroupSelector::Name(name),
        (None, Some(id)) => GroupSelector::Id(id),
        _ => anyhow::bail!("Provide exactly one of --name or --id"),
    };

    let gateway = build_gateway()?;
    let (group, _) = gateway.set_allowed_group(&selector).await?;

    println!(
        "{} Group creation restricted to '{}' ({})",
        "✅".green(),
        group.display_name.cyan(),
        group.id
    );
    Ok(())
}

async fn clear_allowed() -> anyhow::Result<()> {
    let gateway = build_gateway()?;
    gateway.clear_allowed_group().await?;

    println!("{} Group-creation restriction cleared", "✅".green());
    Ok(())
}
