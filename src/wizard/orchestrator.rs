//! Wizard orchestration - ties all steps together

use crate::error::Result;
use crate::manifest::{self, BrokerType, DatabaseType, QoveryManifest, MANIFEST_FILE_NAME};
use crate::platform::api::DirectoryClient;
use crate::wizard::attachments::collect_attachments;
use crate::wizard::project_selection::{select_project, ProjectSelection};
use crate::wizard::prompt::Prompter;
use crate::wizard::render::{display_selected, display_step_header};
use crate::wizard::repository_selection::select_repository;
use std::path::{Path, PathBuf};

/// Per-invocation inputs of `qovery init`
#[derive(Debug, Clone)]
pub struct InitContext {
    pub working_dir: PathBuf,
}

impl InitContext {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }

    /// Base name of the working directory, offered as the application name
    pub fn default_application_name(&self) -> String {
        directory_name(&self.working_dir)
    }
}

/// How the wizard ended
#[derive(Debug, Clone, PartialEq)]
pub enum InitOutcome {
    /// `.qovery.yml` was written at this path
    Created(PathBuf),
    /// A `.qovery.yml` was already there; nothing asked, nothing written
    AlreadyConfigured,
    /// Neither account probe returned an identity
    NotAuthenticated,
}

pub(crate) fn directory_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Account id from the local cache, else from the API
///
/// A probe that fails counts as having no identity.
fn resolve_account_id(client: &dyn DirectoryClient) -> Option<String> {
    let local = client
        .get_account_id()
        .inspect_err(|e| log::debug!("Local account probe failed: {}", e))
        .ok()
        .filter(|id| !id.is_empty());

    local.or_else(|| {
        client
            .get_account()
            .inspect_err(|e| log::debug!("Remote account probe failed: {}", e))
            .ok()
            .map(|account| account.id)
            .filter(|id| !id.is_empty())
    })
}

/// Run the init wizard
pub fn run_init(
    ctx: &InitContext,
    client: &dyn DirectoryClient,
    prompter: &mut dyn Prompter,
) -> Result<InitOutcome> {
    if manifest::manifest_exists(&ctx.working_dir) {
        log::debug!("{} already present, nothing to do", MANIFEST_FILE_NAME);
        return Ok(InitOutcome::AlreadyConfigured);
    }

    let Some(account_id) = resolve_account_id(client) else {
        return Ok(InitOutcome::NotAuthenticated);
    };
    log::debug!("Authenticated as account {}", account_id);

    // Step 1: Project (and its region when created)
    display_step_header(
        1,
        "Project",
        "Pick the project this application belongs to, or create a new one.",
    );
    let selection = select_project(client, prompter)?;
    if let ProjectSelection::Created(created) = &selection {
        if let Some(region) = &created.cloud_provider_region {
            display_selected("Region", &region.full_name);
        }
    }
    let project = selection.into_project();
    display_selected("Project", &project.name);

    // Step 2: Application
    display_step_header(
        2,
        "Application",
        "Pick the application matching this repository, or register it.",
    );
    let repository = select_repository(
        client,
        prompter,
        &project,
        &ctx.default_application_name(),
    )?;
    display_selected("Application", &repository.name);

    // Step 3: Network
    display_step_header(3, "Network", "Decide how the application is reached.");
    let mut manifest = QoveryManifest::new(&account_id, &project, &repository);
    if prompter.confirm(
        "Would you like to make your application publicly accessible?",
        false,
    )? {
        let dns = prompter.input("Do you want to set a custom domain (ex: api.foo.com)?", true)?;
        manifest = manifest.with_public_access(dns);
    }

    // Step 4: Services
    display_step_header(
        4,
        "Services",
        "Declare the databases and brokers your application needs.",
    );
    let databases = collect_attachments::<DatabaseType>(prompter)?;
    let brokers = collect_attachments::<BrokerType>(prompter)?;
    manifest = manifest.with_databases(databases).with_brokers(brokers);

    let path = manifest::write_manifest(&ctx.working_dir, &manifest)?;
    manifest::append_gitignore(&ctx.working_dir);

    Ok(InitOutcome::Created(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use crate::manifest::load_manifest;
    use crate::test_support::{Answer, Asked, FakeDirectory, ScriptedPrompter};
    use crate::wizard::project_selection::CREATE_PROJECT_LABEL;
    use crate::wizard::repository_selection::CREATE_REPOSITORY_LABEL;
    use std::fs;
    use tempfile::TempDir;

    fn context(dir: &TempDir) -> InitContext {
        InitContext::new(dir.path())
    }

    #[test]
    fn test_existing_manifest_short_circuits() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(MANIFEST_FILE_NAME), "qovery: {}\n").unwrap();
        let client = FakeDirectory::default();
        let mut prompter = ScriptedPrompter::new(vec![]);

        let outcome = run_init(&context(&dir), &client, &mut prompter).unwrap();

        assert_eq!(outcome, InitOutcome::AlreadyConfigured);
        assert!(prompter.asked.is_empty());
    }

    #[test]
    fn test_not_authenticated() {
        let dir = TempDir::new().unwrap();
        let client = FakeDirectory {
            account_unreachable: true,
            ..FakeDirectory::default()
        };
        let mut prompter = ScriptedPrompter::new(vec![]);

        let outcome = run_init(&context(&dir), &client, &mut prompter).unwrap();

        assert_eq!(outcome, InitOutcome::NotAuthenticated);
        assert!(prompter.asked.is_empty());
        assert!(!dir.path().join(MANIFEST_FILE_NAME).exists());
    }

    #[test]
    fn test_either_probe_authenticates() {
        let local_only = FakeDirectory {
            cached_account_id: "local".to_string(),
            account_unreachable: true,
            ..FakeDirectory::default()
        };
        assert_eq!(resolve_account_id(&local_only), Some("local".to_string()));

        let remote_only = FakeDirectory {
            remote_account_id: "remote".to_string(),
            ..FakeDirectory::default()
        };
        assert_eq!(resolve_account_id(&remote_only), Some("remote".to_string()));

        assert_eq!(resolve_account_id(&FakeDirectory::default()), None);
    }

    #[test]
    fn test_existing_project_new_repository() {
        let dir = TempDir::new().unwrap();
        let client = FakeDirectory::authenticated("acct123")
            .with_project("1", "shop")
            .with_provider("aws", &["us-east-1"]);
        let mut prompter = ScriptedPrompter::new(vec![
            Answer::select("shop"),
            Answer::select(CREATE_REPOSITORY_LABEL),
            Answer::text("api"),
            Answer::text("git@x/api.git"),
            Answer::Confirm(false),
            Answer::Confirm(false),
            Answer::Confirm(false),
        ]);

        let outcome = run_init(&context(&dir), &client, &mut prompter).unwrap();

        let path = dir.path().join(MANIFEST_FILE_NAME);
        assert_eq!(outcome, InitOutcome::Created(path.clone()));
        assert!(!prompter.was_asked("region"));
        assert!(!prompter.was_asked("custom domain"));
        assert_eq!(
            prompter.asked[4],
            Asked::Confirm {
                message: "Would you like to make your application publicly accessible?"
                    .to_string(),
                default: false,
            }
        );
        assert_eq!(prompter.remaining(), 0);

        let manifest = load_manifest(dir.path()).unwrap().unwrap();
        assert_eq!(manifest.qovery.key, "acct123/1/new-repo-1");
        assert_eq!(manifest.application.project, "shop");
        assert_eq!(manifest.application.name, "api");
        assert!(!manifest.application.publicly_accessible);

        let yaml = fs::read_to_string(&path).unwrap();
        assert!(!yaml.contains("network"));
        assert!(!yaml.contains("databases"));
        assert!(!yaml.contains("brokers"));
    }

    #[test]
    fn test_new_project_in_region() {
        let dir = TempDir::new().unwrap();
        let client = FakeDirectory::authenticated("acct123")
            .with_provider("aws", &["us-east-1"])
            .with_provider("scaleway", &["fr-par"]);
        let mut prompter = ScriptedPrompter::new(vec![
            Answer::select(CREATE_PROJECT_LABEL),
            Answer::text("newco"),
            Answer::select("aws/us-east-1"),
            Answer::select(CREATE_REPOSITORY_LABEL),
            Answer::text("web"),
            Answer::text("git@x/web.git"),
            Answer::Confirm(true),
            Answer::text("web.newco.io"),
            Answer::Confirm(true),
            Answer::select("Redis"),
            Answer::select("5.0"),
            Answer::text("cache"),
            Answer::Confirm(false),
            Answer::Confirm(true),
            Answer::select("RabbitMQ"),
            Answer::select("3.8"),
            Answer::text("events"),
            Answer::Confirm(false),
        ]);

        run_init(&context(&dir), &client, &mut prompter).unwrap();

        assert_eq!(prompter.last_options(), vec!["3.8", "3.7", "3.6"]);
        assert_eq!(prompter.remaining(), 0);

        let created = client.created_projects.borrow();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].cloud_provider_region.id, "aws-us-east-1");

        let manifest = load_manifest(dir.path()).unwrap().unwrap();
        assert_eq!(manifest.qovery.key, "acct123/new-project-1/new-repo-1");
        assert_eq!(manifest.network.unwrap().dns, "web.newco.io");
        assert_eq!(manifest.databases.len(), 1);
        assert_eq!(manifest.databases[0].kind, DatabaseType::Redis);
        assert_eq!(manifest.brokers[0].name, "events");
    }

    #[test]
    fn test_public_without_domain() {
        let dir = TempDir::new().unwrap();
        let client = FakeDirectory::authenticated("acct123")
            .with_project("1", "shop")
            .with_repository("1", "7", "api");
        let mut prompter = ScriptedPrompter::new(vec![
            Answer::select("shop"),
            Answer::select("api"),
            Answer::Confirm(true),
            Answer::text(""),
            Answer::Confirm(false),
            Answer::Confirm(false),
        ]);

        run_init(&context(&dir), &client, &mut prompter).unwrap();

        let manifest = load_manifest(dir.path()).unwrap().unwrap();
        assert_eq!(manifest.qovery.key, "acct123/1/7");
        assert!(manifest.application.publicly_accessible);
        assert_eq!(manifest.network.unwrap().dns, "");
    }

    #[test]
    fn test_gitignore_is_appended() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".gitignore"), "target\n").unwrap();
        let client = FakeDirectory::authenticated("acct123")
            .with_project("1", "shop")
            .with_repository("1", "7", "api");
        let mut prompter = ScriptedPrompter::new(vec![
            Answer::select("shop"),
            Answer::select("api"),
            Answer::Confirm(false),
            Answer::Confirm(false),
            Answer::Confirm(false),
        ]);

        run_init(&context(&dir), &client, &mut prompter).unwrap();

        let gitignore = fs::read_to_string(dir.path().join(".gitignore")).unwrap();
        assert!(gitignore.starts_with("target\n"));
        assert!(gitignore.contains("\n.qovery\n"));
        assert!(gitignore.contains("local_configuration.json"));
    }

    #[test]
    fn test_cancel_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let client = FakeDirectory::authenticated("acct123").with_project("1", "shop");
        let mut prompter = ScriptedPrompter::new(vec![Answer::Select(None)]);

        let result = run_init(&context(&dir), &client, &mut prompter);

        assert!(matches!(result, Err(CliError::Cancelled)));
        assert!(!dir.path().join(MANIFEST_FILE_NAME).exists());
        assert!(!dir.path().join(".gitignore").exists());
    }

    #[test]
    fn test_default_application_name() {
        let ctx = InitContext::new("/home/me/my-service");
        assert_eq!(ctx.default_application_name(), "my-service");
        assert_eq!(InitContext::new("/").default_application_name(), "");
    }
}
