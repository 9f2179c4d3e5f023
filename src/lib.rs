//! # Qovery CLI
//!
//! Command line client for the Qovery platform. Its main entry point is
//! `qovery init`, an interactive wizard that ties the current repository to a
//! Qovery project and application and writes the result to `.qovery.yml`.
//!
//! ## Features
//!
//! - **Project setup**: pick or create a project (and its cloud region) and an application
//! - **Services**: declare databases and brokers from a fixed catalog of versions
//! - **Storage listing**: show the databases and brokers running for a branch
//! - **Credentials**: store an API token in `~/.qovery.toml`
//!
//! ## Example
//!
//! ```rust,no_run
//! use qovery_cli::manifest::{load_manifest, DatabaseType, ServiceKind};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! if let Some(manifest) = load_manifest(Path::new("."))? {
//!     println!("{} / {}", manifest.application.project, manifest.application.name);
//! }
//! println!("{:?}", DatabaseType::versions_for("PostgreSQL"));
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod cli;
pub mod common;
pub mod config;
pub mod error;
pub mod handlers;
pub mod manifest;
pub mod platform;
pub mod wizard;

#[cfg(test)]
mod test_support;

// Re-export commonly used types and functions
pub use error::{CliError, Result};
pub use handlers::*;
use cli::{Commands, StorageCommand};
use platform::api::PlatformApiClient;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run one command and return the process exit code
pub fn run_command(command: Commands) -> Result<i32> {
    match command {
        Commands::Init => {
            let working_dir = std::env::current_dir()?;
            let outcome = handlers::handle_init(working_dir)?;
            Ok(handlers::exit_code(&outcome))
        }
        Commands::Storage {
            command: StorageCommand::List { project, branch },
        } => {
            let ctx = CommandContext::new(std::env::current_dir()?, project, branch);
            let client = PlatformApiClient::new()?;
            handlers::handle_storage_list(&ctx, &client)?;
            Ok(0)
        }
        Commands::Auth { command } => {
            handlers::handle_auth(command)?;
            Ok(0)
        }
    }
}
