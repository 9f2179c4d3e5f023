// Handler modules
pub mod auth;
pub mod init;
pub mod storage;

pub use auth::handle_auth;
pub use init::{exit_code, handle_init};
pub use storage::{handle_storage_list, render_storage_table, CommandContext};
