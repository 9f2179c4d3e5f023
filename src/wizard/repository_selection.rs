//! Repository step of the init wizard
//!
//! Picks an application of the project or registers a new one, proposing the
//! current directory name as its default name.

use crate::error::Result;
use crate::platform::api::types::{CreateRepositoryRequest, Project, Repository};
use crate::platform::api::DirectoryClient;
use crate::wizard::prompt::Prompter;
use crate::wizard::selection::{prompt_unique_name, select_or_create, Choice};

pub const CREATE_REPOSITORY_LABEL: &str = "Create new application";

pub fn select_repository(
    client: &dyn DirectoryClient,
    prompter: &mut dyn Prompter,
    project: &Project,
    default_name: &str,
) -> Result<Repository> {
    let repositories = client.list_repositories(&project.id)?;

    let choice = select_or_create(
        prompter,
        "Choose the application you want (or create a new one)",
        CREATE_REPOSITORY_LABEL,
        &repositories,
        |r| r.name.as_str(),
    )?;

    match choice {
        Choice::Existing(repository) => Ok(repository),
        Choice::CreateNew => {
            let message = format!("Enter the application name [default: {}]", default_name);
            let name =
                prompt_unique_name(prompter, &message, "application", Some(default_name), |n| {
                    Ok(client.get_repository_by_name(&project.id, n)?.is_some())
                })?;

            let url = prompter.input("Enter the application/repository git URL", false)?;
            let repository =
                client.create_repository(&project.id, &CreateRepositoryRequest { name, url })?;

            log::info!("Created application {} ({})", repository.name, repository.id);
            Ok(repository)
        }
    }
}
