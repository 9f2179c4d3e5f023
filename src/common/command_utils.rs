use crate::error::Result;
use std::path::Path;
use std::process::{Command, Output};

/// Run `cmd` inside `dir` and return its raw output
pub fn execute_command_in(dir: &Path, cmd: &str, args: &[&str]) -> Result<Output> {
    let output = Command::new(cmd).args(args).current_dir(dir).output()?;

    Ok(output)
}

/// Name of the git branch checked out in `dir`
///
/// `None` outside a repository, on a detached HEAD, or when git is missing.
pub fn current_branch_name(dir: &Path) -> Option<String> {
    let output = execute_command_in(dir, "git", &["rev-parse", "--abbrev-ref", "HEAD"])
        .inspect_err(|e| log::debug!("git not available: {}", e))
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let branch = String::from_utf8_lossy(&output.stdout).trim().to_string();
    match branch.as_str() {
        "" | "HEAD" => None,
        _ => Some(branch),
    }
}
