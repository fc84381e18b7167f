// ABOUTME: Read-modify-write gateway over the tenant's Group.Unified settings object
// ABOUTME: Every mutation re-fetches the object, changes one property, and writes it back whole

use groupctl_directory::{DirectoryApi, DirectoryGroup, NewDirectorySetting, SettingValue};

use crate::error::{SettingsError, SettingsResult};
use crate::types::{keys, GroupSettings, TEMPLATE_NAME};
use crate::words::{BlockedWordList, WordListReport, WordOutcome};

/// The caller's yes/no decision for destructive operations.
///
/// The gateway never prompts; the CLI layer collects the answer and passes
/// it down as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Confirmation::Confirmed
        } else {
            Confirmation::Declined
        }
    }
}

/// Selects the group allowed to create groups
#[derive(Debug, Clone)]
pub enum GroupSelector {
    /// Directory object id, used verbatim after an existence check
    Id(String),
    /// Display name prefix; must resolve to exactly one group
    Name(String),
}

/// Gateway implementing the read-modify-write contract against the
/// tenant's single Group.Unified settings object.
///
/// Writes carry no concurrency token: the object is overwritten as a
/// whole, so two operators mutating different properties race and the
/// last write silently wins. That matches the service's intended
/// administration model and is deliberately not papered over here.
pub struct SettingsGateway<A> {
    directory: A,
}

impl<A: DirectoryApi> SettingsGateway<A> {
    pub fn new(directory: A) -> Self {
        Self { directory }
    }

    async fn find_setting(&self) -> SettingsResult<Option<GroupSettings>> {
        let settings = self
            .directory
            .list_settings()
            .await
            .map_err(SettingsError::ReadFailed)?;
        Ok(settings
            .into_iter()
            .find(|s| s.display_name.as_deref() == Some(TEMPLATE_NAME))
            .map(GroupSettings::from_remote))
    }

    /// Whether the settings object currently exists.
    ///
    /// Absence is a regular answer here, not an error; only transport
    /// failures propagate.
    pub async fn exists(&self) -> SettingsResult<bool> {
        Ok(self.find_setting().await?.is_some())
    }

    /// Fetch the current settings object
    pub async fn fetch(&self) -> SettingsResult<GroupSettings> {
        self.find_setting()
            .await?
            .ok_or_else(|| SettingsError::NotFound(TEMPLATE_NAME.to_string()))
    }

    /// Create the settings object from the template's default values
    pub async fn create(&self) -> SettingsResult<GroupSettings> {
        if self.exists().await? {
            return Err(SettingsError::AlreadyExists(TEMPLATE_NAME.to_string()));
        }

        let template = self
            .directory
            .list_setting_templates()
            .await
            .map_err(SettingsError::ReadFailed)?
            .into_iter()
            .find(|t| t.display_name == TEMPLATE_NAME)
            .ok_or_else(|| SettingsError::TemplateMissing(TEMPLATE_NAME.to_string()))?;

        let values = template
            .values
            .iter()
            .map(|param| {
                SettingValue::new(&param.name, param.default_value.clone().unwrap_or_default())
            })
            .collect();

        let created = self
            .directory
            .create_setting(NewDirectorySetting {
                template_id: template.id,
                values,
            })
            .await
            .map_err(SettingsError::WriteFailed)?;

        tracing::debug!(id = %created.id, "Created settings object from template");
        Ok(GroupSettings::from_remote(created))
    }

    /// Set one property and write the complete value set back.
    ///
    /// The object is re-fetched first so the write reflects the current
    /// remote state of every other property; the fetch-then-write gap is
    /// the documented race window.
    pub async fn set_property(&self, key: &str, value: &str) -> SettingsResult<GroupSettings> {
        let mut settings = self.fetch().await?;
        settings.set(key, value)?;
        self.directory
            .update_setting(settings.id(), settings.values().to_vec())
            .await
            .map_err(SettingsError::WriteFailed)?;
        tracing::debug!(key, "Updated settings property");
        Ok(settings)
    }

    /// Delete the settings object, given the caller's explicit confirmation
    pub async fn remove(&self, confirmation: Confirmation) -> SettingsResult<()> {
        if confirmation == Confirmation::Declined {
            return Err(SettingsError::UserDeclined);
        }
        let settings = self.fetch().await?;
        self.directory
            .delete_setting(settings.id())
            .await
            .map_err(SettingsError::WriteFailed)?;
        tracing::debug!(id = settings.id(), "Deleted settings object");
        Ok(())
    }

    /// Turn self-service group creation on or off
    pub async fn set_group_creation_enabled(&self, enabled: bool) -> SettingsResult<GroupSettings> {
        let value = if enabled { "True" } else { "False" };
        self.set_property(keys::ENABLE_GROUP_CREATION, value).await
    }

    /// Resolve a group selector to exactly one directory group
    pub async fn resolve_group(&self, selector: &GroupSelector) -> SettingsResult<DirectoryGroup> {
        match selector {
            GroupSelector::Id(id) => self
                .directory
                .get_group(id)
                .await
                .map_err(SettingsError::ReadFailed)?
                .ok_or_else(|| SettingsError::NoMatch { name: id.clone() }),
            GroupSelector::Name(name) => {
                let mut matches = self
                    .directory
                    .find_groups_by_name(name)
                    .await
                    .map_err(SettingsError::ReadFailed)?;
                match matches.len() {
                    0 => Err(SettingsError::NoMatch { name: name.clone() }),
                    1 => Ok(matches.remove(0)),
                    count => Err(SettingsError::AmbiguousMatch {
                        name: name.clone(),
                        count,
                    }),
                }
            }
        }
    }

    /// Restrict group creation to one group.
    ///
    /// The settings object must exist before any group lookup is issued.
    pub async fn set_allowed_group(
        &self,
        selector: &GroupSelector,
    ) -> SettingsResult<(DirectoryGroup, GroupSettings)> {
        self.fetch().await?;
        let group = self.resolve_group(selector).await?;
        let settings = self
            .set_property(keys::GROUP_CREATION_ALLOWED_GROUP_ID, &group.id)
            .await?;
        Ok((group, settings))
    }

    /// Lift the group-creation restriction
    pub async fn clear_allowed_group(&self) -> SettingsResult<GroupSettings> {
        self.set_property(keys::GROUP_CREATION_ALLOWED_GROUP_ID, "")
            .await
    }

    /// Set the usage guidelines link shown during group creation
    pub async fn set_guidelines_url(&self, url: &str) -> SettingsResult<GroupSettings> {
        self.set_property(keys::USAGE_GUIDELINES_URL, url).await
    }

    /// Clear the usage guidelines link
    pub async fn clear_guidelines_url(&self) -> SettingsResult<GroupSettings> {
        self.set_property(keys::USAGE_GUIDELINES_URL, "").await
    }

    /// Current blocked word list
    pub async fn blocked_words(&self) -> SettingsResult<BlockedWordList> {
        let settings = self.fetch().await?;
        Ok(BlockedWordList::parse(
            settings.get(keys::CUSTOM_BLOCKED_WORDS_LIST).unwrap_or(""),
        ))
    }

    /// Add words to the blocked word list, writing back only on change
    pub async fn add_blocked_words<S: AsRef<str>>(
        &self,
        words: &[S],
    ) -> SettingsResult<WordListReport> {
        let settings = self.fetch().await?;
        let mut list =
            BlockedWordList::parse(settings.get(keys::CUSTOM_BLOCKED_WORDS_LIST).unwrap_or(""));
        let outcomes = list.add_all(words);
        self.persist_word_list(settings, list, outcomes).await
    }

    /// Remove words from the blocked word list, writing back only on change
    pub async fn remove_blocked_words<S: AsRef<str>>(
        &self,
        words: &[S],
    ) -> SettingsResult<WordListReport> {
        let settings = self.fetch().await?;
        let mut list =
            BlockedWordList::parse(settings.get(keys::CUSTOM_BLOCKED_WORDS_LIST).unwrap_or(""));
        let outcomes = list.remove_all(words);
        self.persist_word_list(settings, list, outcomes).await
    }

    async fn persist_word_list(
        &self,
        mut settings: GroupSettings,
        list: BlockedWordList,
        outcomes: Vec<WordOutcome>,
    ) -> SettingsResult<WordListReport> {
        for outcome in outcomes.iter().filter(|o| o.is_warning()) {
            tracing::warn!(word = outcome.word(), "No-op blocked word edit");
        }

        let changed = outcomes.iter().any(|o| !o.is_warning());
        if changed {
            settings.set(keys::CUSTOM_BLOCKED_WORDS_LIST, list.to_string())?;
            self.directory
                .update_setting(settings.id(), settings.values().to_vec())
                .await
                .map_err(SettingsError::WriteFailed)?;
        } else {
            tracing::debug!("Blocked word list unchanged, skipping write");
        }

        Ok(WordListReport {
            outcomes,
            list,
            persisted: changed,
        })
    }
}
