// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across groupctl

// Tenant & Application Credentials
pub const GROUPCTL_TENANT_ID: &str = "GROUPCTL_TENANT_ID";
pub const GROUPCTL_CLIENT_ID: &str = "GROUPCTL_CLIENT_ID";
pub const GROUPCTL_CLIENT_SECRET: &str = "GROUPCTL_CLIENT_SECRET";

// Endpoint Overrides
pub const GROUPCTL_GRAPH_URL: &str = "GROUPCTL_GRAPH_URL";
pub const GROUPCTL_LOGIN_URL: &str = "GROUPCTL_LOGIN_URL";

// HTTP Behavior
pub const GROUPCTL_HTTP_TIMEOUT_SECS: &str = "GROUPCTL_HTTP_TIMEOUT_SECS";
