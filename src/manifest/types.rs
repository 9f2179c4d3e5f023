use super::catalog::{BrokerType, DatabaseType, ServiceKind};
use crate::platform::api::types::{Project, Repository};
use serde::{Deserialize, Serialize};

/// Root of the `.qovery.yml` document
///
/// Field order is the key order of the written file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QoveryManifest {
    pub qovery: QoveryKey,
    pub application: Application,
    /// Only present for publicly accessible applications
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<Network>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub databases: Vec<DatabaseAttachment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub brokers: Vec<BrokerAttachment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QoveryKey {
    /// `<accountId>/<projectId>/<repositoryId>`
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub project: String,
    pub name: String,
    pub publicly_accessible: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Network {
    /// Custom domain; may be empty
    #[serde(default)]
    pub dns: String,
}

/// A managed service bound to the application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "K: ServiceKind")]
pub struct Attachment<K> {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: K,
    pub version: String,
}

pub type DatabaseAttachment = Attachment<DatabaseType>;
pub type BrokerAttachment = Attachment<BrokerType>;

impl<K: ServiceKind> Attachment<K> {
    /// Returns `None` when `version` is not offered for `kind`
    pub fn new(name: impl Into<String>, kind: K, version: &str) -> Option<Self> {
        if !kind.versions().iter().any(|v| *v == version) {
            return None;
        }
        Some(Self {
            name: name.into(),
            kind,
            version: version.to_string(),
        })
    }

    pub fn has_supported_version(&self) -> bool {
        self.kind.versions().iter().any(|v| *v == self.version)
    }
}

/// Identity key tying the file to an account, project and repository
pub fn identity_key(account_id: &str, project: &Project, repository: &Repository) -> String {
    format!("{}/{}/{}", account_id, project.id, repository.id)
}

impl QoveryManifest {
    /// Private application with no attached services
    pub fn new(account_id: &str, project: &Project, repository: &Repository) -> Self {
        Self {
            qovery: QoveryKey {
                key: identity_key(account_id, project, repository),
            },
            application: Application {
                project: project.name.clone(),
                name: repository.name.clone(),
                publicly_accessible: false,
            },
            network: None,
            databases: Vec::new(),
            brokers: Vec::new(),
        }
    }

    /// Mark the application publicly accessible under an optional domain
    pub fn with_public_access(mut self, dns: impl Into<String>) -> Self {
        self.application.publicly_accessible = true;
        self.network = Some(Network { dns: dns.into() });
        self
    }

    pub fn with_databases(mut self, databases: Vec<DatabaseAttachment>) -> Self {
        self.databases = databases;
        self
    }

    pub fn with_brokers(mut self, brokers: Vec<BrokerAttachment>) -> Self {
        self.brokers = brokers;
        self
    }

    /// Check catalog and network invariants of a parsed document
    pub fn validate(&self) -> Result<(), String> {
        if self.network.is_some() && !self.application.publicly_accessible {
            return Err("network is only allowed for publicly accessible applications".to_string());
        }
        if let Some(db) = self.databases.iter().find(|d| !d.has_supported_version()) {
            return Err(format!(
                "unsupported {} version '{}' for database '{}'",
                db.kind.label(),
                db.version,
                db.name
            ));
        }
        if let Some(broker) = self.brokers.iter().find(|b| !b.has_supported_version()) {
            return Err(format!(
                "unsupported {} version '{}' for broker '{}'",
                broker.kind.label(),
                broker.version,
                broker.name
            ));
        }
        Ok(())
    }
}
