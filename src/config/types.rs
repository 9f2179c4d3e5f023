use serde::{Deserialize, Serialize};

/// User configuration stored in `~/.qovery.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub auth: QoveryAuth,
    #[serde(default)]
    pub api: ApiConfig,
}

/// Cached credentials written by `qovery auth login`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QoveryAuth {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// Account the token belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// Unix timestamp (seconds) after which the token is no longer used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<u64>,
}

/// API endpoint overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
