//! The `.qovery.yml` project file
//!
//! Written once by `qovery init` and read back by the commands that need to
//! know which project the current directory belongs to.

pub mod catalog;
pub mod types;

pub use catalog::{BrokerType, DatabaseType, ServiceKind};
pub use types::{
    Application, Attachment, BrokerAttachment, DatabaseAttachment, Network, QoveryKey,
    QoveryManifest,
};

use crate::error::{CliError, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name of the project file
pub const MANIFEST_FILE_NAME: &str = ".qovery.yml";

const GITIGNORE_FILE_NAME: &str = ".gitignore";

/// Local state directory and credentials cache, never committed
const GITIGNORE_ENTRIES: &str = "\n.qovery\nlocal_configuration.json\n";

pub fn manifest_path(dir: &Path) -> PathBuf {
    dir.join(MANIFEST_FILE_NAME)
}

pub fn manifest_exists(dir: &Path) -> bool {
    manifest_path(dir).exists()
}

/// Serialize the manifest into `dir/.qovery.yml`
///
/// Fails if the file already exists.
pub fn write_manifest(dir: &Path, manifest: &QoveryManifest) -> Result<PathBuf> {
    let yaml = serde_yaml::to_string(manifest)?;
    let path = manifest_path(dir);

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)?;
    file.write_all(yaml.as_bytes())?;

    log::debug!("Wrote {} ({} bytes)", path.display(), yaml.len());
    Ok(path)
}

/// Read `dir/.qovery.yml`; `Ok(None)` when the file does not exist
pub fn load_manifest(dir: &Path) -> Result<Option<QoveryManifest>> {
    let path = manifest_path(dir);
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let manifest: QoveryManifest = serde_yaml::from_str(&content)?;
    manifest.validate().map_err(CliError::InvalidManifest)?;
    Ok(Some(manifest))
}

/// Append the local-only entries to `dir/.gitignore`, creating it if needed
///
/// Best effort: failures are logged and otherwise ignored.
pub fn append_gitignore(dir: &Path) {
    let path = dir.join(GITIGNORE_FILE_NAME);
    let result = OpenOptions::new()
        .append(true)
        .create(true)
        .open(&path)
        .and_then(|mut file| file.write_all(GITIGNORE_ENTRIES.as_bytes()));

    if let Err(e) = result {
        log::debug!("Could not update {}: {}", path.display(), e);
    }
}
