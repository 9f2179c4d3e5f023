//! Interactive `qovery init` wizard
//!
//! Walks the user from project selection to a written `.qovery.yml`.

mod attachments;
mod orchestrator;
mod project_selection;
mod prompt;
mod region_selection;
mod render;
mod repository_selection;
mod selection;

pub use attachments::{
    attachment_wizard, collect_attachments, AttachmentLoop, LoopState, MAX_ATTACHMENT_PROMPTS,
};
pub use orchestrator::{run_init, InitContext, InitOutcome};
pub use project_selection::{select_project, ProjectSelection, CREATE_PROJECT_LABEL};
pub use prompt::{InquirePrompter, Prompter};
pub use region_selection::{find_region, region_label, region_labels, select_region};
pub use render::{display_selected, display_step_header, wizard_render_config};
pub use repository_selection::{select_repository, CREATE_REPOSITORY_LABEL};
pub use selection::{prompt_unique_name, select_or_create, Choice};
