//! Unit tests for the directory client wire types and errors

#[cfg(test)]
mod directory_unit_tests {
    use chrono::{Duration, Utc};
    use pretty_assertions::assert_eq;
    use groupctl_directory::{
        AccessToken, DirectoryError, DirectorySetting, NewDirectorySetting, SettingTemplate,
        SettingValue,
    };

    #[test]
    fn test_directory_error_creation() {
        let auth_error = DirectoryError::auth("Test auth error");
        assert!(matches!(auth_error, DirectoryError::Authentication(_)));
        assert!(auth_error.is_auth_error());

        let network_error = DirectoryError::Network("connection refused".to_string());
        assert!(network_error.is_network_error());
        assert!(!network_error.is_auth_error());

        let config_error = DirectoryError::config("Test config error");
        assert!(matches!(config_error, DirectoryError::Configuration(_)));
    }

    #[test]
    fn test_error_display() {
        let error = DirectoryError::auth("Invalid credentials");
        assert_eq!(format!("{}", error), "Authentication error: Invalid credentials");

        let error = DirectoryError::Http {
            status: 409,
            message: "Request_BadRequest: value exists".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Graph API error (409): Request_BadRequest: value exists"
        );
    }

    #[test]
    fn test_setting_deserializes_from_graph_payload() {
        let payload = r#"{
            "id": "f0b2d6f5-097d-4177-91af-a24e530b53cc",
            "displayName": "Group.Unified",
            "templateId": "62375ab9-6b52-47ed-826b-58e47e0e304b",
            "values": [
                { "name": "EnableGroupCreation", "value": "True" },
                { "name": "CustomBlockedWordsList", "value": "CEO,HR" }
            ]
        }"#;

        let setting: DirectorySetting = serde_json::from_str(payload).unwrap();
        assert_eq!(setting.id, "f0b2d6f5-097d-4177-91af-a24e530b53cc");
        assert_eq!(setting.display_name.as_deref(), Some("Group.Unified"));
        assert_eq!(setting.values.len(), 2);
        assert_eq!(
            setting.values[1],
            SettingValue::new("CustomBlockedWordsList", "CEO,HR")
        );
    }

    #[test]
    fn test_template_deserializes_default_values() {
        let payload = r#"{
            "id": "62375ab9-6b52-47ed-826b-58e47e0e304b",
            "displayName": "Group.Unified",
            "description": "Setting templates define the different settings that can be used for the associated ObjectSettings objects",
            "values": [
                { "name": "EnableGroupCreation", "type": "System.Boolean", "defaultValue": "true", "description": "Flag indicating if group creation feature is on" },
                { "name": "UsageGuidelinesUrl", "type": "System.String", "defaultValue": "", "description": "A link to the Group Usage Guidelines" }
            ]
        }"#;

        let template: SettingTemplate = serde_json::from_str(payload).unwrap();
        assert_eq!(template.display_name, "Group.Unified");
        assert_eq!(template.values[0].default_value.as_deref(), Some("true"));
        assert_eq!(template.values[1].default_value.as_deref(), Some(""));
    }

    #[test]
    fn test_create_request_serializes_camel_case() {
        let new = NewDirectorySetting {
            template_id: "62375ab9-6b52-47ed-826b-58e47e0e304b".to_string(),
            values: vec![SettingValue::new("EnableGroupCreation", "True")],
        };

        let json = serde_json::to_value(&new).unwrap();
        assert_eq!(
            json["templateId"].as_str(),
            Some("62375ab9-6b52-47ed-826b-58e47e0e304b")
        );
        assert_eq!(json["values"][0]["name"].as_str(), Some("EnableGroupCreation"));
    }

    #[test]
    fn test_access_token_expiry_buffer() {
        let valid = AccessToken {
            token: "t".to_string(),
            expires_at: Utc::now() + Duration::minutes(30),
        };
        assert!(valid.is_valid());

        // Inside the 5 minute refresh buffer counts as expired
        let near_expiry = AccessToken {
            token: "t".to_string(),
            expires_at: Utc::now() + Duration::minutes(2),
        };
        assert!(near_expiry.is_expired());
    }
}
