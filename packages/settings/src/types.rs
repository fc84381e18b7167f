// ABOUTME: Typed view over the Group.Unified settings object
// ABOUTME: Known property keys and validated access to the remote property bag

use groupctl_directory::{DirectorySetting, SettingValue};

use crate::error::SettingsError;

/// The settings template every groupctl operation targets
pub const TEMPLATE_NAME: &str = "Group.Unified";

/// Property keys defined by the Group.Unified template
pub mod keys {
    pub const ENABLE_GROUP_CREATION: &str = "EnableGroupCreation";
    pub const GROUP_CREATION_ALLOWED_GROUP_ID: &str = "GroupCreationAllowedGroupId";
    pub const USAGE_GUIDELINES_URL: &str = "UsageGuidelinesUrl";
    pub const CUSTOM_BLOCKED_WORDS_LIST: &str = "CustomBlockedWordsList";
    pub const ENABLE_MS_STANDARD_BLOCKED_WORDS: &str = "EnableMSStandardBlockedWords";
    pub const CLASSIFICATION_LIST: &str = "ClassificationList";
    pub const CLASSIFICATION_DESCRIPTIONS: &str = "ClassificationDescriptions";
    pub const DEFAULT_CLASSIFICATION: &str = "DefaultClassification";
    pub const ALLOW_GUESTS_TO_BE_GROUP_OWNER: &str = "AllowGuestsToBeGroupOwner";
    pub const ALLOW_GUESTS_TO_ACCESS_GROUPS: &str = "AllowGuestsToAccessGroups";
    pub const ALLOW_TO_ADD_GUESTS: &str = "AllowToAddGuests";
    pub const GUEST_USAGE_GUIDELINES_URL: &str = "GuestUsageGuidelinesUrl";
    pub const PREFIX_SUFFIX_NAMING_REQUIREMENT: &str = "PrefixSuffixNamingRequirement";

    /// Every key the Group.Unified template defines
    pub const ALL: &[&str] = &[
        ENABLE_GROUP_CREATION,
        GROUP_CREATION_ALLOWED_GROUP_ID,
        USAGE_GUIDELINES_URL,
        CUSTOM_BLOCKED_WORDS_LIST,
        ENABLE_MS_STANDARD_BLOCKED_WORDS,
        CLASSIFICATION_LIST,
        CLASSIFICATION_DESCRIPTIONS,
        DEFAULT_CLASSIFICATION,
        ALLOW_GUESTS_TO_BE_GROUP_OWNER,
        ALLOW_GUESTS_TO_ACCESS_GROUPS,
        ALLOW_TO_ADD_GUESTS,
        GUEST_USAGE_GUIDELINES_URL,
        PREFIX_SUFFIX_NAMING_REQUIREMENT,
    ];
}

/// Check whether a property key is defined by the template
pub fn is_known_key(key: &str) -> bool {
    keys::ALL.contains(&key)
}

/// The tenant's Group.Unified settings object, property bag included.
///
/// Mutation goes through [`GroupSettings::set`], which rejects keys the
/// template does not define before any network traffic happens.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSettings {
    id: String,
    values: Vec<SettingValue>,
}

impl GroupSettings {
    /// Build the typed view from the raw remote settings object
    pub fn from_remote(setting: DirectorySetting) -> Self {
        Self {
            id: setting.id,
            values: setting.values,
        }
    }

    /// Remote object id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current value of a property, when the object carries it
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|v| v.name == key)
            .map(|v| v.value.as_str())
    }

    /// Set one known property, adding it when the remote object lacks it
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<(), SettingsError> {
        if !is_known_key(key) {
            return Err(SettingsError::UnknownKey {
                key: key.to_string(),
            });
        }
        let value = value.into();
        match self.values.iter_mut().find(|v| v.name == key) {
            Some(existing) => existing.value = value,
            None => self.values.push(SettingValue::new(key, value)),
        }
        Ok(())
    }

    /// All properties in remote order, for display
    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|v| (v.name.as_str(), v.value.as_str()))
    }

    /// The complete value set, as written back on every mutation
    pub fn values(&self) -> &[SettingValue] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> GroupSettings {
        GroupSettings::from_remote(DirectorySetting {
            id: "abc".to_string(),
            display_name: Some(TEMPLATE_NAME.to_string()),
            template_id: None,
            values: vec![
                SettingValue::new(keys::ENABLE_GROUP_CREATION, "True"),
                SettingValue::new(keys::CUSTOM_BLOCKED_WORDS_LIST, ""),
            ],
        })
    }

    #[test]
    fn get_returns_current_value() {
        let settings = sample();
        assert_eq!(settings.get(keys::ENABLE_GROUP_CREATION), Some("True"));
        assert_eq!(settings.get(keys::USAGE_GUIDELINES_URL), None);
    }

    #[test]
    fn set_updates_existing_property_in_place() {
        let mut settings = sample();
        settings.set(keys::ENABLE_GROUP_CREATION, "False").unwrap();
        assert_eq!(settings.get(keys::ENABLE_GROUP_CREATION), Some("False"));
        assert_eq!(settings.values().len(), 2);
    }

    #[test]
    fn set_adds_known_property_the_object_lacked() {
        let mut settings = sample();
        settings
            .set(keys::USAGE_GUIDELINES_URL, "https://contoso.example/guidelines")
            .unwrap();
        assert_eq!(
            settings.get(keys::USAGE_GUIDELINES_URL),
            Some("https://contoso.example/guidelines")
        );
        assert_eq!(settings.values().len(), 3);
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut settings = sample();
        let err = settings.set("EnableGroupCreatoin", "True").unwrap_err();
        assert!(matches!(err, SettingsError::UnknownKey { .. }));
        // Nothing written
        assert_eq!(settings, sample());
    }
}
