//! Project step of the init wizard
//!
//! Picks an existing project, or creates one in a region chosen by the user.

use crate::error::Result;
use crate::platform::api::types::{CreateProjectRequest, Project};
use crate::platform::api::DirectoryClient;
use crate::wizard::prompt::Prompter;
use crate::wizard::region_selection::select_region;
use crate::wizard::selection::{prompt_unique_name, select_or_create, Choice};

pub const CREATE_PROJECT_LABEL: &str = "Create new project";

/// Result of the project step
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectSelection {
    Existing(Project),
    Created(Project),
}

impl ProjectSelection {
    pub fn project(&self) -> &Project {
        match self {
            ProjectSelection::Existing(p) | ProjectSelection::Created(p) => p,
        }
    }

    pub fn into_project(self) -> Project {
        match self {
            ProjectSelection::Existing(p) | ProjectSelection::Created(p) => p,
        }
    }
}

pub fn select_project(
    client: &dyn DirectoryClient,
    prompter: &mut dyn Prompter,
) -> Result<ProjectSelection> {
    let projects = client.list_projects()?;

    let choice = select_or_create(
        prompter,
        "Choose the project you want (or create a new one)",
        CREATE_PROJECT_LABEL,
        &projects,
        |p| p.name.as_str(),
    )?;

    match choice {
        Choice::Existing(project) => Ok(ProjectSelection::Existing(project)),
        Choice::CreateNew => {
            let name = prompt_unique_name(prompter, "Enter the project name", "project", None, |n| {
                Ok(client.get_project_by_name(n)?.is_some())
            })?;

            let region = select_region(client, prompter)?;
            let project = client.create_project(&CreateProjectRequest {
                name,
                cloud_provider_region: region,
            })?;

            log::info!("Created project {} ({})", project.name, project.id);
            Ok(ProjectSelection::Created(project))
        }
    }
}
