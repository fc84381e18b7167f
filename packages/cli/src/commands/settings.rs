use clap::Subcommand;
use colored::*;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use inquire::Confirm;

use groupctl_settings::{Confirmation, GroupSettings, SettingsError, TEMPLATE_NAME};

use super::utils::build_gateway;

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Create the settings object from the template's default values
    Create,
    /// Show the current settings object
    Show,
    /// Delete the settings object
    Delete {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn handle_settings_command(command: SettingsCommands) -> anyhow::Result<()> {
    match command {
        SettingsCommands::Create => create_settings().await,
        SettingsCommands::Show => show_settings().await,
        SettingsCommands::Delete { yes } => delete_settings(yes).await,
    }
}

async fn create_settings() -> anyhow::Result<()> {
    let gateway = build_gateway()?;
    let settings = gateway.create().await?;

    println!(
        "{} Created '{}' settings object for this tenant",
        "✅".green(),
        TEMPLATE_NAME
    );
    println!();
    print_settings_table(&settings);
    Ok(())
}

async fn show_settings() -> anyhow::Result<()> {
    let gateway = build_gateway()?;

    match gateway.fetch().await {
        Ok(settings) => {
            println!("{}", format!("⚙️  {} Settings", TEMPLATE_NAME).blue().bold());
            println!();
            print_settings_table(&settings);
            Ok(())
        }
        Err(SettingsError::NotFound(_)) => {
            println!(
                "{}",
                "No Group.Unified settings object exists for this tenant".yellow()
            );
            println!(
                "{}",
                "Use 'groupctl settings create' to create one from the template defaults".dimmed()
            );
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

async fn delete_settings(yes: bool) -> anyhow::Result<()> {
    let gateway = build_gateway()?;

    let confirmed = if yes {
        true
    } else {
        Confirm::new(&format!(
            "Delete the '{}' settings object for this tenant?",
            TEMPLATE_NAME
        ))
        .with_default(false)
        .prompt()?
    };

    match gateway.remove(Confirmation::from(confirmed)).await {
        Ok(()) => {
            println!("{} Settings object deleted", "✅".green());
            println!(
                "{}",
                "Group creation now follows the service-wide defaults".dimmed()
            );
            Ok(())
        }
        Err(SettingsError::UserDeclined) => {
            println!("{}", "No changes made".yellow());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn print_settings_table(settings: &GroupSettings) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec!["Property", "Value"]);

    for (name, value) in settings.properties() {
        let display = if value.is_empty() { "—" } else { value };
        table.add_row(vec![name, display]);
    }

    println!("{}", table);
}
