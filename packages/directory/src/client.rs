//! Typed Microsoft Graph client for directory settings and groups

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::api::{
    DirectoryGroup, DirectorySetting, GraphErrorBody, GraphList, NewDirectorySetting,
    SettingTemplate, SettingValue, SettingValuesPatch,
};
use crate::auth::TokenProvider;
use crate::error::{DirectoryError, DirectoryResult};
use groupctl_config::GraphConfig;

/// Operations the domain layer needs from the remote directory service.
///
/// Implemented by [`DirectoryClient`] against Microsoft Graph; tests
/// substitute an in-memory fake.
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    /// List all tenant-wide settings objects
    async fn list_settings(&self) -> DirectoryResult<Vec<DirectorySetting>>;

    /// Create a settings object from a template
    async fn create_setting(&self, new: NewDirectorySetting) -> DirectoryResult<DirectorySetting>;

    /// Replace the complete value set of an existing settings object
    async fn update_setting(&self, id: &str, values: Vec<SettingValue>) -> DirectoryResult<()>;

    /// Delete a settings object
    async fn delete_setting(&self, id: &str) -> DirectoryResult<()>;

    /// List the settings templates published by the service
    async fn list_setting_templates(&self) -> DirectoryResult<Vec<SettingTemplate>>;

    /// Find groups whose display name starts with the given prefix
    async fn find_groups_by_name(&self, name: &str) -> DirectoryResult<Vec<DirectoryGroup>>;

    /// Look up a single group by object id; `None` when it does not exist
    async fn get_group(&self, id: &str) -> DirectoryResult<Option<DirectoryGroup>>;
}

/// Escape a string literal for use inside an OData `$filter` expression
pub fn escape_odata(value: &str) -> String {
    value.replace('\'', "''")
}

/// Main client for Microsoft Graph directory operations
pub struct DirectoryClient {
    http_client: Client,
    base_url: String,
    tokens: TokenProvider,
}

impl DirectoryClient {
    /// Create a new directory client from resolved configuration
    pub fn new(config: &GraphConfig) -> DirectoryResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DirectoryError::Network(e.to_string()))?;

        let tokens = TokenProvider::new(config, http_client.clone());

        Ok(Self {
            http_client,
            base_url: format!("{}/v1.0", config.graph_base_url.trim_end_matches('/')),
            tokens,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Turn a non-success response into the transport error taxonomy
    async fn error_from(response: reqwest::Response) -> DirectoryError {
        let status = response.status();
        let message = match response.json::<GraphErrorBody>().await {
            Ok(body) => format!("{}: {}", body.error.code, body.error.message),
            Err(_) => status.to_string(),
        };
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => DirectoryError::auth(message),
            _ => DirectoryError::Http {
                status: status.as_u16(),
                message,
            },
        }
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> DirectoryResult<Vec<T>> {
        let token = self.tokens.bearer_token().await?;
        let response = self
            .http_client
            .get(self.url(path))
            .bearer_auth(token)
            .query(query)
            .send()
            .await
            .map_err(|e| DirectoryError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let list: GraphList<T> = response
            .json()
            .await
            .map_err(|e| DirectoryError::invalid(e.to_string()))?;
        Ok(list.value)
    }
}

#[async_trait]
impl DirectoryApi for DirectoryClient {
    async fn list_settings(&self) -> DirectoryResult<Vec<DirectorySetting>> {
        tracing::debug!("GET groupSettings");
        self.get_list("groupSettings", &[]).await
    }

    async fn create_setting(&self, new: NewDirectorySetting) -> DirectoryResult<DirectorySetting> {
        tracing::debug!(template_id = %new.template_id, "POST groupSettings");
        let token = self.tokens.bearer_token().await?;
        let response = self
            .http_client
            .post(self.url("groupSettings"))
            .bearer_auth(token)
            .json(&new)
            .send()
            .await
            .map_err(|e| DirectoryError::Network(e.to_string()))?;

        match response.status() {
            StatusCode::CREATED | StatusCode::OK => response
                .json::<DirectorySetting>()
                .await
                .map_err(|e| DirectoryError::invalid(e.to_string())),
            _ => Err(Self::error_from(response).await),
        }
    }

    async fn update_setting(&self, id: &str, values: Vec<SettingValue>) -> DirectoryResult<()> {
        tracing::debug!(id, "PATCH groupSettings");
        let token = self.tokens.bearer_token().await?;
        let response = self
            .http_client
            .patch(self.url(&format!("groupSettings/{}", id)))
            .bearer_auth(token)
            .json(&SettingValuesPatch { values })
            .send()
            .await
            .map_err(|e| DirectoryError::Network(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from(response).await)
        }
    }

    async fn delete_setting(&self, id: &str) -> DirectoryResult<()> {
        tracing::debug!(id, "DELETE groupSettings");
        let token = self.tokens.bearer_token().await?;
        let response = self
            .http_client
            .delete(self.url(&format!("groupSettings/{}", id)))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| DirectoryError::Network(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from(response).await)
        }
    }

    async fn list_setting_templates(&self) -> DirectoryResult<Vec<SettingTemplate>> {
        tracing::debug!("GET groupSettingTemplates");
        self.get_list("groupSettingTemplates", &[]).await
    }

    async fn find_groups_by_name(&self, name: &str) -> DirectoryResult<Vec<DirectoryGroup>> {
        tracing::debug!(name, "GET groups by display name");
        let filter = format!("startswith(displayName,'{}')", escape_odata(name));
        self.get_list(
            "groups",
            &[
                ("$filter", filter.as_str()),
                ("$select", "id,displayName,mailNickname,description"),
            ],
        )
        .await
    }

    async fn get_group(&self, id: &str) -> DirectoryResult<Option<DirectoryGroup>> {
        tracing::debug!(id, "GET groups by id");
        let token = self.tokens.bearer_token().await?;
        let response = self
            .http_client
            .get(self.url(&format!("groups/{}", id)))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| DirectoryError::Network(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let group = response
                    .json::<DirectoryGroup>()
                    .await
                    .map_err(|e| DirectoryError::invalid(e.to_string()))?;
                Ok(Some(group))
            }
            _ => Err(Self::error_from(response).await),
        }
    }
}
