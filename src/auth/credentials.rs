//! Credential storage and retrieval for Qovery authentication
//!
//! Stores authentication tokens in ~/.qovery.toml

use crate::config::types::{Config, QoveryAuth};
use crate::config::{load_config, save_global_config};
use crate::error::Result;
use std::time::{SystemTime, UNIX_EPOCH};

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Save credentials to global config file
pub fn save_credentials(
    access_token: &str,
    account_id: Option<&str>,
    expires_in_secs: Option<u64>,
) -> Result<()> {
    let mut config = load_config();

    config.auth = QoveryAuth {
        access_token: Some(access_token.to_string()),
        account_id: account_id.map(|s| s.to_string()),
        expires_at: expires_in_secs.map(|secs| now_secs() + secs),
    };

    save_global_config(&config)
}

/// Access token from a loaded config, if present and not expired
pub fn access_token_from(config: &Config) -> Option<String> {
    if let Some(expires_at) = config.auth.expires_at {
        if now_secs() > expires_at {
            return None;
        }
    }

    config
        .auth
        .access_token
        .clone()
        .filter(|token| !token.is_empty())
}

/// Get authentication status including expiry info
pub fn auth_status_from(config: &Config) -> AuthStatus {
    match &config.auth.access_token {
        None => AuthStatus::NotAuthenticated,
        Some(_) => match config.auth.expires_at {
            Some(expires_at) if now_secs() > expires_at => AuthStatus::Expired,
            expires_at => AuthStatus::Authenticated {
                account_id: config.auth.account_id.clone(),
                expires_at,
            },
        },
    }
}

pub fn get_auth_status() -> AuthStatus {
    auth_status_from(&load_config())
}

/// Clear stored credentials (logout)
pub fn clear_credentials() -> Result<()> {
    let mut config = load_config();
    config.auth = QoveryAuth::default();
    save_global_config(&config)
}

/// Authentication status enum
#[derive(Debug, PartialEq)]
pub enum AuthStatus {
    NotAuthenticated,
    Expired,
    Authenticated {
        account_id: Option<String>,
        expires_at: Option<u64>,
    },
}
