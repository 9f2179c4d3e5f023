use crate::error::Result;
use crate::platform::api::PlatformApiClient;
use crate::wizard::{run_init, InitContext, InitOutcome, InquirePrompter};
use colored::Colorize;
use std::path::PathBuf;

/// `qovery init`: run the wizard in `working_dir` and report how it ended
pub fn handle_init(working_dir: PathBuf) -> Result<InitOutcome> {
    let client = PlatformApiClient::new()?;
    let mut prompter = InquirePrompter::new();
    let ctx = InitContext::new(working_dir);

    let outcome = run_init(&ctx, &client, &mut prompter)?;
    print_outcome(&outcome);
    Ok(outcome)
}

/// Process exit code for a finished wizard
pub fn exit_code(outcome: &InitOutcome) -> i32 {
    match outcome {
        InitOutcome::Created(_) | InitOutcome::AlreadyConfigured => 0,
        InitOutcome::NotAuthenticated => 1,
    }
}

fn print_outcome(outcome: &InitOutcome) {
    match outcome {
        InitOutcome::AlreadyConfigured => {
            println!("You already have a .qovery.yml file");
        }
        InitOutcome::NotAuthenticated => {
            println!("You must use 'qovery auth login' before using 'qovery init'!");
        }
        InitOutcome::Created(path) => {
            log::info!("Configuration written to {}", path.display());
            println!();
            println!(
                "{} Your Qovery configuration file has been successfully created (.qovery.yml)",
                "✓".green()
            );
            println!("{} 1/ Commit into your repository and push it to get your app deployed", "➤".cyan());
            println!("{} commands: {}", "➤".cyan(), "git add .qovery.yml && git commit".bold());
            println!("{} 2/ Check the status of your deployment", "➤".cyan());
            println!("{} commands: {}", "➤".cyan(), "qovery status".bold());
        }
    }
}
