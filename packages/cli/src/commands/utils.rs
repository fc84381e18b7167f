use groupctl_config::GraphConfig;
use groupctl_directory::DirectoryClient;
use groupctl_settings::{SettingsError, SettingsGateway};

/// Resolve configuration and build the gateway every command runs against
pub fn build_gateway() -> anyhow::Result<SettingsGateway<DirectoryClient>> {
    let config = GraphConfig::load()?;
    let client = DirectoryClient::new(&config)?;
    Ok(SettingsGateway::new(client))
}

/// Actionable follow-up for precondition failures
pub fn hint_for(error: &SettingsError) -> Option<&'static str> {
    match error {
        SettingsError::NotFound(_) => Some("Run 'groupctl settings create' first"),
        SettingsError::AlreadyExists(_) => {
            Some("Run 'groupctl settings show' to inspect the existing object")
        }
        SettingsError::NoMatch { .. } => {
            Some("Check the group's display name, or pass its object id with --id")
        }
        SettingsError::AmbiguousMatch { .. } => {
            Some("Use a longer name prefix, or pass the object id with --id")
        }
        SettingsError::UserDeclined => None,
        _ => None,
    }
}
