//! Qovery API client module
//!
//! Provides authenticated access to the Qovery API for managing projects,
//! repositories and other remote resources.
//!
//! # Example
//!
//! ```rust,no_run
//! use qovery_cli::platform::api::{DirectoryClient, PlatformApiClient};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PlatformApiClient::new()?;
//!
//!     for project in client.list_projects()? {
//!         println!("Project: {}", project.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod directory;
pub mod error;
pub mod types;

// Re-export commonly used items
pub use client::PlatformApiClient;
pub use directory::DirectoryClient;
pub use error::{PlatformApiError, Result};
pub use types::{
    Account, CloudProvider, CloudProviderRegion, CreateProjectRequest, CreateRepositoryRequest,
    Project, Repository, Storage,
};
