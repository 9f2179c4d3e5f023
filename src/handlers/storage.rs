use crate::common::command_utils::current_branch_name;
use crate::error::Result;
use crate::manifest::load_manifest;
use crate::platform::api::types::Storage;
use crate::platform::api::{DirectoryClient, PlatformApiError};
use prettytable::{format, Cell, Row, Table};
use std::path::PathBuf;

/// Flags of one listing command, resolved against the working directory
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    pub working_dir: PathBuf,
    pub project: Option<String>,
    pub branch: Option<String>,
}

impl CommandContext {
    pub fn new(working_dir: PathBuf, project: Option<String>, branch: Option<String>) -> Self {
        Self {
            working_dir,
            project,
            branch,
        }
    }

    /// Project name from `-p`, else from the local `.qovery.yml`
    fn project_name(&self) -> Option<String> {
        self.project.clone().or_else(|| {
            load_manifest(&self.working_dir)
                .inspect_err(|e| log::debug!("Ignoring unreadable .qovery.yml: {}", e))
                .ok()
                .flatten()
                .map(|m| m.application.project)
        })
    }

    /// Branch from `-b`, else the checked-out git branch
    fn branch_name(&self) -> Option<String> {
        self.branch
            .clone()
            .or_else(|| current_branch_name(&self.working_dir))
    }

    /// `(project, branch)`, or `None` when either cannot be determined
    pub fn target(&self) -> Option<(String, String)> {
        let project = self.project_name().filter(|p| !p.is_empty())?;
        let branch = self.branch_name().filter(|b| !b.is_empty())?;
        Some((project, branch))
    }
}

pub const NOT_A_PROJECT: &str = "The current directory is not a Qovery project (-h for help)";

/// `qovery storage list`
pub fn handle_storage_list(ctx: &CommandContext, client: &dyn DirectoryClient) -> Result<()> {
    let Some((project_name, branch)) = ctx.target() else {
        println!("{}", NOT_A_PROJECT);
        return Ok(());
    };

    let project = client
        .get_project_by_name(&project_name)?
        .ok_or_else(|| PlatformApiError::NotFound(format!("project '{}'", project_name)))?;
    log::debug!("Listing storage of {} on branch {}", project.id, branch);

    let services = client.list_storage(&project.id, &branch)?;
    print!("{}", render_storage_table(&services));
    Ok(())
}

/// Table with one row per service; only the header when empty
pub fn render_storage_table(services: &[Storage]) -> String {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);
    table.set_titles(Row::new(
        ["name", "status", "type", "version", "application"]
            .iter()
            .map(|h| Cell::new(h))
            .collect(),
    ));

    for service in services {
        table.add_row(Row::new(vec![
            Cell::new(&service.name),
            Cell::new(&service.status),
            Cell::new(&service.storage_type),
            Cell::new(&service.version),
            Cell::new(service.application_name()),
        ]));
    }

    table.to_string()
}
