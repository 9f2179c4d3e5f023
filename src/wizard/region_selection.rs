//! Region step of the init wizard
//!
//! Regions come from the cloud provider catalog and are never created here.

use crate::error::{CliError, Result};
use crate::platform::api::types::{CloudProvider, CloudProviderRegion};
use crate::platform::api::DirectoryClient;
use crate::wizard::prompt::Prompter;

const REGION_MESSAGE: &str = "Choose the region where you want to host your project and applications";

/// Menu label for a region: `<provider>/<region full name>`
pub fn region_label(provider: &CloudProvider, region: &CloudProviderRegion) -> String {
    format!("{}/{}", provider.name, region.full_name)
}

/// Flatten every provider × region pair into labels, in catalog order
pub fn region_labels(providers: &[CloudProvider]) -> Vec<String> {
    providers
        .iter()
        .flat_map(|p| p.regions.iter().map(move |r| region_label(p, r)))
        .collect()
}

/// Map a label back to its region
pub fn find_region(providers: &[CloudProvider], label: &str) -> Option<CloudProviderRegion> {
    providers.iter().find_map(|p| {
        p.regions
            .iter()
            .find(|r| region_label(p, r) == label)
            .cloned()
    })
}

pub fn select_region(
    client: &dyn DirectoryClient,
    prompter: &mut dyn Prompter,
) -> Result<CloudProviderRegion> {
    let providers = client.list_cloud_providers()?;
    let labels = region_labels(&providers);
    if labels.is_empty() {
        return Err(CliError::NothingToSelect("cloud region"));
    }

    let choice = prompter
        .select(REGION_MESSAGE, &labels, None)?
        .ok_or(CliError::Cancelled)?;

    log::debug!("Selected region {}", choice);
    find_region(&providers, &choice).ok_or(CliError::NothingToSelect("cloud region"))
}
