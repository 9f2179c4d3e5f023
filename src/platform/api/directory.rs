//! Operations the CLI consumes from the Qovery API
//!
//! Lookups by name return `Ok(None)` when nothing matches; `Err` always means
//! the request itself failed.

use super::error::Result;
use super::types::{
    Account, CloudProvider, CreateProjectRequest, CreateRepositoryRequest, Project, Repository,
    Storage,
};

pub trait DirectoryClient {
    fn list_projects(&self) -> Result<Vec<Project>>;

    /// Exact, case-sensitive match on the project name
    fn get_project_by_name(&self, name: &str) -> Result<Option<Project>>;

    fn create_project(&self, request: &CreateProjectRequest) -> Result<Project>;

    fn list_cloud_providers(&self) -> Result<Vec<CloudProvider>>;

    fn list_repositories(&self, project_id: &str) -> Result<Vec<Repository>>;

    /// Exact, case-sensitive match on the repository name within a project
    fn get_repository_by_name(&self, project_id: &str, name: &str) -> Result<Option<Repository>>;

    fn create_repository(
        &self,
        project_id: &str,
        request: &CreateRepositoryRequest,
    ) -> Result<Repository>;

    /// Locally cached account id; empty when unknown
    fn get_account_id(&self) -> Result<String>;

    /// Account resolved by the backend from the current token
    fn get_account(&self) -> Result<Account>;

    fn list_storage(&self, project_id: &str, branch: &str) -> Result<Vec<Storage>>;
}
