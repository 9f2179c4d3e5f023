//! API response types for the Qovery API
//!
//! These types mirror the backend DTOs for projects, repositories, cloud
//! regions and storage.

use serde::{Deserialize, Serialize};

/// List endpoints wrap their items in `results`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// Account of the authenticated user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Empty when the backend does not recognise the token
    #[serde(default)]
    pub id: String,
}

/// A deployment location offered by a cloud provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CloudProviderRegion {
    #[serde(default)]
    pub id: String,
    /// Region identifier as shown to the user (e.g. "us-east-1")
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Cloud provider and the regions it offers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CloudProvider {
    pub name: String,
    #[serde(default)]
    pub regions: Vec<CloudProviderRegion>,
}

/// Project information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_provider_region: Option<CloudProviderRegion>,
}

/// Request body for creating a new project
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub cloud_provider_region: CloudProviderRegion,
}

/// Repository (deployable application) within a project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Request body for creating a repository in a project
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateRepositoryRequest {
    pub name: String,
    pub url: String,
}

/// Application a storage service is bound to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRef {
    pub name: String,
}

/// Storage service (database or broker) deployed for a branch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Storage {
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(rename = "type", default)]
    pub storage_type: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub application: Option<ApplicationRef>,
}

impl Storage {
    /// Name of the bound application, or "none"
    pub fn application_name(&self) -> &str {
        self.application
            .as_ref()
            .map(|a| a.name.as_str())
            .unwrap_or("none")
    }
}

/// API error response format
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    /// Error message
    pub error: Option<String>,
    /// Detailed error message
    pub message: Option<String>,
}

impl ApiErrorResponse {
    /// Get the error message, preferring `message` over `error`
    pub fn get_message(&self) -> String {
        self.message
            .clone()
            .or_else(|| self.error.clone())
            .unwrap_or_else(|| "Unknown error".to_string())
    }
}
