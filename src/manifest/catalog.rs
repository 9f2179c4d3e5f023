//! Databases and brokers that can be attached to an application
//!
//! Each service type has a fixed list of supported versions. Lookups by name
//! accept the menu label or the lowercase identifier; anything else has no
//! versions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A kind of managed service declared in `.qovery.yml`
pub trait ServiceKind:
    Copy + Eq + fmt::Debug + Serialize + for<'de> Deserialize<'de> + 'static
{
    /// Singular noun used in prompts ("database", "broker")
    const NOUN: &'static str;
    /// First question of the attachment loop
    const FIRST_QUESTION: &'static str;
    /// Question asked after the first attachment
    const MORE_QUESTION: &'static str;

    /// All kinds, in menu order
    fn all() -> &'static [Self];

    /// Menu label (e.g. "PostgreSQL")
    fn label(&self) -> &'static str;

    /// Identifier written to `.qovery.yml` (e.g. "postgresql")
    fn as_str(&self) -> &'static str;

    /// Supported versions, newest first
    fn versions(&self) -> &'static [&'static str];

    /// Resolve a label or identifier, case-insensitively
    fn parse(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|kind| {
            kind.as_str().eq_ignore_ascii_case(name) || kind.label().eq_ignore_ascii_case(name)
        })
    }

    /// Versions for a label or identifier; empty for unknown names
    fn versions_for(name: &str) -> &'static [&'static str] {
        Self::parse(name).map(|kind| kind.versions()).unwrap_or(&[])
    }
}

// =============================================================================
// Databases
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseType {
    Postgresql,
    Mongodb,
    Mysql,
    Redis,
    Memcached,
    Elasticsearch,
}

pub static POSTGRESQL_VERSIONS: &[&str] = &["12", "11.5", "11.4", "11.2", "11.1", "10.10", "9.6"];
pub static MONGODB_VERSIONS: &[&str] = &["3.6"];
pub static MYSQL_VERSIONS: &[&str] = &["8.0", "5.7", "5.6", "5.5"];
pub static REDIS_VERSIONS: &[&str] = &["5.0", "4.0", "3.2", "2.8", "2.6"];
pub static MEMCACHED_VERSIONS: &[&str] = &["1.5", "1.4"];
pub static ELASTICSEARCH_VERSIONS: &[&str] = &["7.1", "6.8", "5.6", "2.3", "1.5"];

impl ServiceKind for DatabaseType {
    const NOUN: &'static str = "database";
    const FIRST_QUESTION: &'static str = "Do you need a database? (PostgreSQL, MySQL, MongoDB, ...)";
    const MORE_QUESTION: &'static str = "Do you want to add another database?";

    fn all() -> &'static [Self] {
        &[
            DatabaseType::Postgresql,
            DatabaseType::Mongodb,
            DatabaseType::Mysql,
            DatabaseType::Redis,
            DatabaseType::Memcached,
            DatabaseType::Elasticsearch,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            DatabaseType::Postgresql => "PostgreSQL",
            DatabaseType::Mongodb => "MongoDB",
            DatabaseType::Mysql => "MySQL",
            DatabaseType::Redis => "Redis",
            DatabaseType::Memcached => "Memcached",
            DatabaseType::Elasticsearch => "Elasticsearch",
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            DatabaseType::Postgresql => "postgresql",
            DatabaseType::Mongodb => "mongodb",
            DatabaseType::Mysql => "mysql",
            DatabaseType::Redis => "redis",
            DatabaseType::Memcached => "memcached",
            DatabaseType::Elasticsearch => "elasticsearch",
        }
    }

    fn versions(&self) -> &'static [&'static str] {
        match self {
            DatabaseType::Postgresql => POSTGRESQL_VERSIONS,
            DatabaseType::Mongodb => MONGODB_VERSIONS,
            DatabaseType::Mysql => MYSQL_VERSIONS,
            DatabaseType::Redis => REDIS_VERSIONS,
            DatabaseType::Memcached => MEMCACHED_VERSIONS,
            DatabaseType::Elasticsearch => ELASTICSEARCH_VERSIONS,
        }
    }
}

// =============================================================================
// Brokers
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrokerType {
    Rabbitmq,
    Kafka,
}

pub static RABBITMQ_VERSIONS: &[&str] = &["3.8", "3.7", "3.6"];
pub static KAFKA_VERSIONS: &[&str] = &["2.3", "2.2", "2.1"];

impl ServiceKind for BrokerType {
    const NOUN: &'static str = "broker";
    const FIRST_QUESTION: &'static str = "Do you need a broker? (RabbitMQ, Kafka, ...)";
    const MORE_QUESTION: &'static str = "Do you want to add another broker?";

    fn all() -> &'static [Self] {
        &[BrokerType::Rabbitmq, BrokerType::Kafka]
    }

    fn label(&self) -> &'static str {
        match self {
            BrokerType::Rabbitmq => "RabbitMQ",
            BrokerType::Kafka => "Kafka",
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            BrokerType::Rabbitmq => "rabbitmq",
            BrokerType::Kafka => "kafka",
        }
    }

    fn versions(&self) -> &'static [&'static str] {
        match self {
            BrokerType::Rabbitmq => RABBITMQ_VERSIONS,
            BrokerType::Kafka => KAFKA_VERSIONS,
        }
    }
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for BrokerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DatabaseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ServiceKind>::parse(s).ok_or_else(|| {
            format!(
                "Unknown database type: '{}'. Valid options: postgresql, mongodb, mysql, redis, memcached, elasticsearch",
                s
            )
        })
    }
}

impl FromStr for BrokerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ServiceKind>::parse(s)
            .ok_or_else(|| format!("Unknown broker type: '{}'. Valid options: rabbitmq, kafka", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_every_database_has_versions() {
        for kind in DatabaseType::all() {
            assert!(!kind.versions().is_empty(), "{} has no versions", kind);
            assert_eq!(DatabaseType::versions_for(kind.as_str()), kind.versions());
            assert_eq!(DatabaseType::versions_for(kind.label()), kind.versions());
        }
        assert_eq!(DatabaseType::all().len(), 6);
    }

    #[test]
    fn test_every_broker_has_versions() {
        for kind in BrokerType::all() {
            assert!(!kind.versions().is_empty(), "{} has no versions", kind);
            assert_eq!(BrokerType::versions_for(kind.label()), kind.versions());
        }
        assert_eq!(BrokerType::all().len(), 2);
    }

    #[test]
    fn test_known_version_tables() {
        assert_eq!(DatabaseType::versions_for("PostgreSQL")[0], "12");
        assert_eq!(DatabaseType::versions_for("mongodb"), &["3.6"]);
        assert_eq!(BrokerType::versions_for("kafka"), &["2.3", "2.2", "2.1"]);
    }

    #[test]
    fn test_cross_catalog_names_are_unknown() {
        assert!(DatabaseType::versions_for("kafka").is_empty());
        assert!(BrokerType::versions_for("redis").is_empty());
        assert!(DatabaseType::versions_for("").is_empty());
    }

    #[test]
    fn test_serialized_names_are_lowercase() {
        assert_eq!(
            serde_yaml::to_string(&DatabaseType::Elasticsearch).unwrap().trim(),
            "elasticsearch"
        );
        assert_eq!(
            serde_yaml::to_string(&BrokerType::Rabbitmq).unwrap().trim(),
            "rabbitmq"
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("MySQL".parse::<DatabaseType>(), Ok(DatabaseType::Mysql));
        assert!("oracle".parse::<DatabaseType>().is_err());
        assert_eq!("RabbitMQ".parse::<BrokerType>(), Ok(BrokerType::Rabbitmq));
    }

    proptest! {
        #[test]
        fn database_versions_exist_only_for_known_names(name in "[a-zA-Z0-9 ._-]{0,20}") {
            prop_assert_eq!(
                DatabaseType::versions_for(&name).is_empty(),
                DatabaseType::parse(&name).is_none()
            );
        }

        #[test]
        fn broker_versions_exist_only_for_known_names(name in "[a-zA-Z0-9 ._-]{0,20}") {
            prop_assert_eq!(
                BrokerType::versions_for(&name).is_empty(),
                BrokerType::parse(&name).is_none()
            );
        }
    }
}
