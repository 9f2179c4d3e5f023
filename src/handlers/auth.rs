use crate::auth::credentials::{self, AuthStatus};
use crate::cli::AuthCommand;
use crate::config::load_config;
use crate::error::Result;
use crate::platform::api::{DirectoryClient, PlatformApiClient};
use colored::Colorize;

pub fn handle_auth(command: AuthCommand) -> Result<()> {
    match command {
        AuthCommand::Login { token, account_id } => login(&token, account_id),
        AuthCommand::Logout => {
            credentials::clear_credentials()?;
            println!("{} Logged out", "✓".green());
            Ok(())
        }
        AuthCommand::Status => {
            print_status(&credentials::get_auth_status());
            Ok(())
        }
    }
}

/// Store the token, resolving the account id from the API when not given
fn login(token: &str, account_id: Option<String>) -> Result<()> {
    credentials::save_credentials(token, account_id.as_deref(), None)?;

    if account_id.is_none() {
        let client = PlatformApiClient::from_config(&load_config())?;
        match client.get_account() {
            Ok(account) if !account.id.is_empty() => {
                credentials::save_credentials(token, Some(&account.id), None)?;
            }
            Ok(_) => log::warn!("The API returned no account id"),
            Err(e) => log::warn!("Could not fetch the account id: {}", e),
        }
    }

    println!("{} Credentials saved", "✓".green());
    Ok(())
}

fn print_status(status: &AuthStatus) {
    match status {
        AuthStatus::NotAuthenticated => {
            println!("{} Not logged in. Run {}", "✗".red(), "qovery auth login".bold());
        }
        AuthStatus::Expired => {
            println!("{} Session expired. Run {}", "✗".red(), "qovery auth login".bold());
        }
        AuthStatus::Authenticated { account_id, .. } => {
            println!(
                "{} Logged in (account: {})",
                "✓".green(),
                account_id.as_deref().unwrap_or("unknown").cyan()
            );
        }
    }
}
