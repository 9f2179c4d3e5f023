//! HTTP client for the Qovery API
//!
//! Provides authenticated, blocking access to the Qovery API for managing
//! projects, repositories and storage.

use super::directory::DirectoryClient;
use super::error::{PlatformApiError, Result};
use super::types::{
    Account, ApiErrorResponse, CloudProvider, CreateProjectRequest, CreateRepositoryRequest,
    ListResponse, Project, Repository, Storage,
};
use crate::auth::credentials;
use crate::config::types::Config;
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Production API URL
const QOVERY_API_URL_PROD: &str = "https://api.qovery.com";

/// Environment variable overriding the API URL
pub const API_URL_ENV: &str = "QOVERY_API_URL";

/// User agent for API requests
const USER_AGENT: &str = concat!("qovery-cli/", env!("CARGO_PKG_VERSION"));

/// Client for interacting with the Qovery API
pub struct PlatformApiClient {
    /// HTTP client with configured timeout and headers
    http_client: Client,
    /// Base API URL
    api_url: String,
    access_token: Option<String>,
    account_id: String,
}

impl PlatformApiClient {
    /// Create a client from the user configuration in `~/.qovery.toml`
    ///
    /// `QOVERY_API_URL` takes precedence over the configured URL.
    pub fn new() -> Result<Self> {
        Self::from_config(&crate::config::load_config())
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let api_url = get_api_url(config);
        let mut client = Self::with_url(api_url)?;
        client.access_token = credentials::access_token_from(config);
        client.account_id = config.auth.account_id.clone().unwrap_or_default();
        Ok(client)
    }

    /// Create a client with a custom API URL and no credentials
    pub fn with_url(api_url: impl Into<String>) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()
            .map_err(PlatformApiError::HttpError)?;

        Ok(Self {
            http_client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            access_token: None,
            account_id: String::new(),
        })
    }

    /// Get the configured API URL
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn auth_token(&self) -> Result<&str> {
        self.access_token
            .as_deref()
            .ok_or(PlatformApiError::Unauthorized)
    }

    /// Make an authenticated GET request
    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let token = self.auth_token()?;
        let url = format!("{}{}", self.api_url, path);
        log::debug!("GET {}", url);

        let response = self.http_client.get(&url).bearer_auth(token).send()?;

        handle_response(response)
    }

    /// Make an authenticated POST request with a JSON body
    fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let token = self.auth_token()?;
        let url = format!("{}{}", self.api_url, path);
        log::debug!("POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(token)
            .json(body)
            .send()?;

        handle_response(response)
    }

    fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let response: ListResponse<T> = self.get(path)?;
        Ok(response.results)
    }
}

impl DirectoryClient for PlatformApiClient {
    /// Endpoint: GET /project
    fn list_projects(&self) -> Result<Vec<Project>> {
        self.get_list("/project")
    }

    fn get_project_by_name(&self, name: &str) -> Result<Option<Project>> {
        Ok(self
            .list_projects()?
            .into_iter()
            .find(|p| p.name == name))
    }

    /// Endpoint: POST /project
    fn create_project(&self, request: &CreateProjectRequest) -> Result<Project> {
        self.post("/project", request)
    }

    /// Endpoint: GET /cloud
    fn list_cloud_providers(&self) -> Result<Vec<CloudProvider>> {
        self.get_list("/cloud")
    }

    /// Endpoint: GET /project/:projectId/repository
    fn list_repositories(&self, project_id: &str) -> Result<Vec<Repository>> {
        self.get_list(&repository_path(project_id))
    }

    fn get_repository_by_name(&self, project_id: &str, name: &str) -> Result<Option<Repository>> {
        Ok(self
            .list_repositories(project_id)?
            .into_iter()
            .find(|r| r.name == name))
    }

    /// Endpoint: POST /project/:projectId/repository
    fn create_repository(
        &self,
        project_id: &str,
        request: &CreateRepositoryRequest,
    ) -> Result<Repository> {
        self.post(&repository_path(project_id), request)
    }

    fn get_account_id(&self) -> Result<String> {
        Ok(self.account_id.clone())
    }

    /// Endpoint: GET /account
    fn get_account(&self) -> Result<Account> {
        self.get("/account")
    }

    /// Endpoint: GET /project/:projectId/branch/:branch/storage
    fn list_storage(&self, project_id: &str, branch: &str) -> Result<Vec<Storage>> {
        self.get_list(&storage_path(project_id, branch))
    }
}

/// Handle the HTTP response, converting errors appropriately
fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        response
            .json::<T>()
            .map_err(|e| PlatformApiError::ParseError(e.to_string()))
    } else {
        // Try to parse error response for better error messages
        let status_code = status.as_u16();
        let error_body = response.text().unwrap_or_default();
        let error_message = serde_json::from_str::<ApiErrorResponse>(&error_body)
            .map(|e| e.get_message())
            .unwrap_or(error_body);

        log::debug!("API error {}: {}", status_code, error_message);
        Err(PlatformApiError::from_status(status_code, error_message))
    }
}

fn repository_path(project_id: &str) -> String {
    format!("/project/{}/repository", urlencoding::encode(project_id))
}

/// Branch names commonly contain `/`, so every segment is percent-encoded
fn storage_path(project_id: &str, branch: &str) -> String {
    format!(
        "/project/{}/branch/{}/storage",
        urlencoding::encode(project_id),
        urlencoding::encode(branch)
    )
}

/// Get the API URL: environment override, then user config, then production
fn get_api_url(config: &Config) -> String {
    std::env::var(API_URL_ENV)
        .ok()
        .filter(|url| !url.is_empty())
        .or_else(|| config.api.url.clone())
        .unwrap_or_else(|| QOVERY_API_URL_PROD.to_string())
}
