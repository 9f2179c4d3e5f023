use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "qovery")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Deploy your applications on Qovery")]
#[command(long_about = "Command line interface for Qovery. Run `qovery init` inside a git repository to describe the application, its databases and brokers in a .qovery.yml file.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a .qovery.yml file for the current directory
    Init,

    /// Manage storage (databases and brokers)
    Storage {
        #[command(subcommand)]
        command: StorageCommand,
    },

    /// Manage local credentials
    Auth {
        #[command(subcommand)]
        command: AuthCommand,
    },
}

#[derive(Subcommand)]
pub enum StorageCommand {
    /// List storage of a project branch
    List {
        /// Your project name
        #[arg(short, long, value_name = "NAME")]
        project: Option<String>,

        /// Your branch name
        #[arg(short, long, value_name = "NAME")]
        branch: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum AuthCommand {
    /// Store an API token
    Login {
        /// Qovery API token
        #[arg(long, env = "QOVERY_TOKEN", hide_env_values = true)]
        token: String,

        /// Account id; fetched from the API when omitted
        #[arg(long, value_name = "ID")]
        account_id: Option<String>,
    },

    /// Remove stored credentials
    Logout,

    /// Show whether credentials are stored and still valid
    Status,
}

impl Cli {
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
