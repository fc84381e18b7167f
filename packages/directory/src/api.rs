//! Request and response models for the Microsoft Graph directory API

use serde::{Deserialize, Serialize};

/// Standard Graph collection envelope
#[derive(Debug, Deserialize)]
pub struct GraphList<T> {
    pub value: Vec<T>,
}

/// One name/value pair inside a settings object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingValue {
    pub name: String,
    pub value: String,
}

impl SettingValue {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A directory settings object instantiated from a template
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectorySetting {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub template_id: Option<String>,
    pub values: Vec<SettingValue>,
}

/// Template parameter definition carrying its default value
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateParam {
    pub name: String,
    #[serde(rename = "type", default)]
    pub value_type: Option<String>,
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A settings template published by the directory service
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingTemplate {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub values: Vec<TemplateParam>,
}

/// Create request for a new settings object
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDirectorySetting {
    pub template_id: String,
    pub values: Vec<SettingValue>,
}

/// Update request replacing the complete value set of a settings object
#[derive(Debug, Serialize)]
pub struct SettingValuesPatch {
    pub values: Vec<SettingValue>,
}

/// Directory group as returned by group lookups
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryGroup {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub mail_nickname: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Standard Graph error envelope
#[derive(Debug, Deserialize)]
pub struct GraphErrorBody {
    pub error: GraphErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct GraphErrorDetail {
    pub code: String,
    pub message: String,
}
