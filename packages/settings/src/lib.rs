// ABOUTME: Domain layer for the tenant-wide Group.Unified settings object
// ABOUTME: Read-modify-write gateway and blocked word list editing

pub mod error;
pub mod gateway;
pub mod types;
pub mod words;

pub use error::{SettingsError, SettingsResult};
pub use gateway::{Confirmation, GroupSelector, SettingsGateway};
pub use types::{keys, GroupSettings, TEMPLATE_NAME};
pub use words::{BlockedWordList, WordListReport, WordOutcome};
