//! Microsoft Graph directory client for groupctl
//!
//! Provides OAuth2 client-credentials token acquisition and a thin typed
//! client over the `groupSettings`, `groupSettingTemplates`, and `groups`
//! resources.

pub mod api;
pub mod auth;
pub mod client;
pub mod error;

// Re-export commonly used types and traits
pub use api::{
    DirectoryGroup, DirectorySetting, NewDirectorySetting, SettingTemplate, SettingValue,
    TemplateParam,
};
pub use auth::{AccessToken, TokenProvider};
pub use client::{DirectoryApi, DirectoryClient};
pub use error::{DirectoryError, DirectoryResult};
