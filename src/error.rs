//! Crate-level error type
//!
//! Every command handler returns [`Result`]; the binary prints the error and
//! exits non-zero.

use crate::platform::api::PlatformApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// A call to the Qovery API failed
    #[error(transparent)]
    Api(#[from] PlatformApiError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration document could not be serialized or parsed
    #[error("Invalid .qovery.yml document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document parsed but violates the service catalog
    #[error("Invalid .qovery.yml document: {0}")]
    InvalidManifest(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The terminal prompt failed for a reason other than the user aborting
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// The remote catalog offered nothing to choose from
    #[error("No {0} available")]
    NothingToSelect(&'static str),

    /// The user aborted a prompt (Esc / Ctrl-C)
    #[error("Wizard cancelled")]
    Cancelled,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParsingFailed(String),

    #[error("No home directory found to store {0}")]
    NoHomeDirectory(&'static str),
}

pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_is_transparent() {
        let err: CliError = PlatformApiError::Unauthorized.into();
        assert_eq!(err.to_string(), PlatformApiError::Unauthorized.to_string());
    }

    #[test]
    fn test_config_error_message() {
        let err: CliError = ConfigError::ParsingFailed("bad toml".to_string()).into();
        assert!(err.to_string().contains("bad toml"));
    }
}
