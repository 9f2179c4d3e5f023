//! Scripted prompter and in-memory directory for tests

use crate::error::Result;
use crate::platform::api::error::{PlatformApiError, Result as ApiResult};
use crate::platform::api::types::{
    Account, CloudProvider, CloudProviderRegion, CreateProjectRequest, CreateRepositoryRequest,
    Project, Repository, Storage,
};
use crate::platform::api::DirectoryClient;
use crate::wizard::Prompter;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Text(String),
    /// `None` simulates backing out of the menu
    Select(Option<String>),
    Confirm(bool),
}

impl Answer {
    pub fn text(value: &str) -> Self {
        Answer::Text(value.to_string())
    }

    pub fn select(value: &str) -> Self {
        Answer::Select(Some(value.to_string()))
    }
}

/// A prompt the wizard showed
#[derive(Debug, Clone, PartialEq)]
pub enum Asked {
    Input { message: String, allow_empty: bool },
    Select { message: String, options: Vec<String> },
    Confirm { message: String, default: bool },
}

impl Asked {
    pub fn message(&self) -> &str {
        match self {
            Asked::Input { message, .. }
            | Asked::Select { message, .. }
            | Asked::Confirm { message, .. } => message,
        }
    }
}

/// Replays answers in order and panics on a prompt it has no answer for
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub asked: Vec<Asked>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: answers.into(),
            asked: Vec::new(),
        }
    }

    fn next(&mut self, asked: Asked) -> Answer {
        let answer = self
            .answers
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted answer for {:?}", asked));
        self.asked.push(asked);
        answer
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    pub fn last_options(&self) -> Vec<String> {
        self.asked
            .iter()
            .rev()
            .find_map(|a| match a {
                Asked::Select { options, .. } => Some(options.clone()),
                _ => None,
            })
            .unwrap_or_default()
    }

    pub fn was_asked(&self, fragment: &str) -> bool {
        self.asked.iter().any(|a| a.message().contains(fragment))
    }

    pub fn count_asked(&self, fragment: &str) -> usize {
        self.asked
            .iter()
            .filter(|a| a.message().contains(fragment))
            .count()
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, message: &str, allow_empty: bool) -> Result<String> {
        match self.next(Asked::Input {
            message: message.to_string(),
            allow_empty,
        }) {
            Answer::Text(value) => Ok(value),
            other => panic!("expected text answer for '{}', got {:?}", message, other),
        }
    }

    fn select(
        &mut self,
        message: &str,
        options: &[String],
        _default: Option<&str>,
    ) -> Result<Option<String>> {
        let asked = Asked::Select {
            message: message.to_string(),
            options: options.to_vec(),
        };
        // Mirrors the terminal prompter: nothing to choose from, nothing asked
        if options.is_empty() {
            self.asked.push(asked);
            return Ok(None);
        }
        match self.next(asked) {
            Answer::Select(choice) => Ok(choice),
            other => panic!("expected select answer for '{}', got {:?}", message, other),
        }
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        match self.next(Asked::Confirm {
            message: message.to_string(),
            default,
        }) {
            Answer::Confirm(value) => Ok(value),
            other => panic!("expected confirm answer for '{}', got {:?}", message, other),
        }
    }
}

/// In-memory stand-in for the Qovery API
#[derive(Default)]
pub struct FakeDirectory {
    pub cached_account_id: String,
    pub remote_account_id: String,
    pub account_unreachable: bool,
    pub projects: RefCell<Vec<Project>>,
    pub providers: Vec<CloudProvider>,
    pub repositories: RefCell<HashMap<String, Vec<Repository>>>,
    pub storage: Vec<Storage>,
    pub created_projects: RefCell<Vec<CreateProjectRequest>>,
    pub created_repositories: RefCell<Vec<(String, CreateRepositoryRequest)>>,
}

impl FakeDirectory {
    pub fn authenticated(account_id: &str) -> Self {
        Self {
            cached_account_id: account_id.to_string(),
            remote_account_id: account_id.to_string(),
            ..Self::default()
        }
    }

    pub fn with_project(self, id: &str, name: &str) -> Self {
        self.projects.borrow_mut().push(Project {
            id: id.to_string(),
            name: name.to_string(),
            cloud_provider_region: None,
        });
        self
    }

    pub fn with_repository(self, project_id: &str, id: &str, name: &str) -> Self {
        self.repositories
            .borrow_mut()
            .entry(project_id.to_string())
            .or_default()
            .push(Repository {
                id: id.to_string(),
                name: name.to_string(),
                url: format!("git@x/{}.git", name),
            });
        self
    }

    pub fn with_provider(mut self, name: &str, regions: &[&str]) -> Self {
        self.providers.push(CloudProvider {
            name: name.to_string(),
            regions: regions
                .iter()
                .map(|r| CloudProviderRegion {
                    id: format!("{}-{}", name, r),
                    full_name: r.to_string(),
                    description: None,
                })
                .collect(),
        });
        self
    }
}

impl DirectoryClient for FakeDirectory {
    fn list_projects(&self) -> ApiResult<Vec<Project>> {
        Ok(self.projects.borrow().clone())
    }

    fn get_project_by_name(&self, name: &str) -> ApiResult<Option<Project>> {
        Ok(self.projects.borrow().iter().find(|p| p.name == name).cloned())
    }

    fn create_project(&self, request: &CreateProjectRequest) -> ApiResult<Project> {
        assert!(
            self.get_project_by_name(&request.name)?.is_none(),
            "created a colliding project '{}'",
            request.name
        );
        self.created_projects.borrow_mut().push(request.clone());
        let project = Project {
            id: format!("new-project-{}", self.created_projects.borrow().len()),
            name: request.name.clone(),
            cloud_provider_region: Some(request.cloud_provider_region.clone()),
        };
        self.projects.borrow_mut().push(project.clone());
        Ok(project)
    }

    fn list_cloud_providers(&self) -> ApiResult<Vec<CloudProvider>> {
        Ok(self.providers.clone())
    }

    fn list_repositories(&self, project_id: &str) -> ApiResult<Vec<Repository>> {
        Ok(self
            .repositories
            .borrow()
            .get(project_id)
            .cloned()
            .unwrap_or_default())
    }

    fn get_repository_by_name(&self, project_id: &str, name: &str) -> ApiResult<Option<Repository>> {
        Ok(self
            .list_repositories(project_id)?
            .into_iter()
            .find(|r| r.name == name))
    }

    fn create_repository(
        &self,
        project_id: &str,
        request: &CreateRepositoryRequest,
    ) -> ApiResult<Repository> {
        assert!(
            self.get_repository_by_name(project_id, &request.name)?.is_none(),
            "created a colliding repository '{}'",
            request.name
        );
        self.created_repositories
            .borrow_mut()
            .push((project_id.to_string(), request.clone()));
        let repository = Repository {
            id: format!("new-repo-{}", self.created_repositories.borrow().len()),
            name: request.name.clone(),
            url: request.url.clone(),
        };
        self.repositories
            .borrow_mut()
            .entry(project_id.to_string())
            .or_default()
            .push(repository.clone());
        Ok(repository)
    }

    fn get_account_id(&self) -> ApiResult<String> {
        Ok(self.cached_account_id.clone())
    }

    fn get_account(&self) -> ApiResult<Account> {
        if self.account_unreachable {
            return Err(PlatformApiError::Unauthorized);
        }
        Ok(Account {
            id: self.remote_account_id.clone(),
        })
    }

    fn list_storage(&self, _project_id: &str, _branch: &str) -> ApiResult<Vec<Storage>> {
        Ok(self.storage.clone())
    }
}
