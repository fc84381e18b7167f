// ABOUTME: Domain error taxonomy for settings operations
// ABOUTME: Precondition failures, group resolution failures, and transport wrapping

use groupctl_directory::DirectoryError;
use thiserror::Error;

/// Result type for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Errors from the settings domain layer.
///
/// Precondition failures (`NotFound`, `AlreadyExists`, `NoMatch`,
/// `AmbiguousMatch`, `UserDeclined`) are user errors the CLI renders as
/// warnings with guidance; `ReadFailed`/`WriteFailed` wrap the transport
/// error with the phase that failed.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("No '{0}' settings object exists for this tenant")]
    NotFound(String),

    #[error("A '{0}' settings object already exists for this tenant")]
    AlreadyExists(String),

    #[error("No group found matching '{name}'")]
    NoMatch { name: String },

    #[error("{count} groups match '{name}'; narrow the name or pass the object id")]
    AmbiguousMatch { name: String, count: usize },

    #[error("Unknown setting key: {key}")]
    UnknownKey { key: String },

    #[error("Deletion was not confirmed, no changes made")]
    UserDeclined,

    #[error("Template '{0}' is not published by the directory service")]
    TemplateMissing(String),

    #[error("Failed to read from the directory service")]
    ReadFailed(#[source] DirectoryError),

    #[error("Failed to write to the directory service")]
    WriteFailed(#[source] DirectoryError),
}

impl SettingsError {
    /// Precondition / user errors, as opposed to transport failures
    pub fn is_user_error(&self) -> bool {
        !matches!(
            self,
            SettingsError::ReadFailed(_) | SettingsError::WriteFailed(_)
        )
    }
}
