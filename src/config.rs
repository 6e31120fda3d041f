use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use url::Url;

/// Cluster category for grouping in the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClusterCategory {
    Local,
    Test,
    Production,
}

/// A predefined ledger cluster with label and default RPC endpoint.
#[derive(Clone, Debug)]
pub struct Cluster {
    pub label: &'static str,
    pub default_rpc: &'static str,
    pub category: ClusterCategory,
}

impl Cluster {
    pub const fn new(
        label: &'static str,
        default_rpc: &'static str,
        category: ClusterCategory,
    ) -> Self {
        Self {
            label,
            default_rpc,
            category,
        }
    }
}

use ClusterCategory::*;

/// Built-in clusters. The file-backed ledger ignores the endpoint; remote
/// implementations of the ledger trait use it.
pub const CLUSTERS: &[Cluster] = &[
    Cluster::new("Localnet", "http://127.0.0.1:8899", Local),
    Cluster::new("Devnet", "https://api.devnet.example.org", Test),
    Cluster::new("Testnet", "https://api.testnet.example.org", Test),
    Cluster::new("Mainnet", "https://api.mainnet.example.org", Production),
];

/// Find a cluster by label.
pub fn find_cluster(label: &str) -> Option<&'static Cluster> {
    CLUSTERS.iter().find(|c| c.label == label)
}

/// Find the index of a cluster in CLUSTERS by label.
pub fn find_cluster_index(label: &str) -> Option<usize> {
    CLUSTERS.iter().position(|c| c.label == label)
}

/// Typed counterpart of the program's interface descriptor. Names the
/// on-ledger program and the two instructions the portal issues.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgramDescriptor {
    pub program_id: String,
    pub initialize_instruction: String,
    pub append_instruction: String,
}

impl Default for ProgramDescriptor {
    fn default() -> Self {
        Self {
            program_id: "gifport".to_string(),
            initialize_instruction: "start_stuff_off".to_string(),
            append_instruction: "add_gif".to_string(),
        }
    }
}

impl ProgramDescriptor {
    /// Load a descriptor from a JSON file, the way the original shipped its
    /// interface blob alongside the app.
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Load-time configuration passed into the controller at construction.
#[derive(Clone, Debug)]
pub struct Config {
    pub rpc_url: String,
    pub cluster_label: String,
    pub program: ProgramDescriptor,
    /// Where the embedded base-account keypair lives.
    pub base_keypair_path: PathBuf,
}

impl Config {
    pub fn new(rpc_url: String, cluster_label: String) -> Self {
        let base_keypair_path = env::var("GIFPORT_BASE_KEYPAIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_keypair_path());

        Self {
            rpc_url,
            cluster_label,
            program: ProgramDescriptor::default(),
            base_keypair_path,
        }
    }

    pub fn from_cluster(cluster: &Cluster) -> Self {
        Self::new(cluster.default_rpc.to_string(), cluster.label.to_string())
    }

    /// Validate the configured endpoint.
    pub fn validate_rpc_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.rpc_url)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        // Default to Devnet - the GUI will load user settings and update.
        if let Some(devnet) = find_cluster("Devnet") {
            Self::from_cluster(devnet)
        } else {
            Self::new(
                "https://api.devnet.example.org".to_string(),
                "Devnet".to_string(),
            )
        }
    }
}

fn default_keypair_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("gifport").join("base_account.json"))
        .unwrap_or_else(|| PathBuf::from("./base_account.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== cluster lookup tests ====================

    #[test]
    fn test_find_cluster_devnet() {
        let cluster = find_cluster("Devnet");
        assert!(cluster.is_some());
        assert_eq!(cluster.unwrap().category, ClusterCategory::Test);
    }

    #[test]
    fn test_find_cluster_not_found() {
        assert!(find_cluster("Betanet").is_none());
    }

    #[test]
    fn test_find_cluster_index() {
        assert_eq!(find_cluster_index("Localnet"), Some(0));
        assert_eq!(find_cluster_index("Betanet"), None);
    }

    // ==================== config tests ====================

    #[test]
    fn test_default_config_is_devnet() {
        let config = Config::default();
        assert_eq!(config.cluster_label, "Devnet");
        assert!(config.validate_rpc_url().is_ok());
    }

    #[test]
    fn test_all_builtin_rpc_urls_parse() {
        for cluster in CLUSTERS {
            assert!(
                Url::parse(cluster.default_rpc).is_ok(),
                "bad RPC url for {}",
                cluster.label
            );
        }
    }

    // ==================== program descriptor tests ====================

    #[test]
    fn test_descriptor_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("program.json");
        let descriptor = ProgramDescriptor::default();
        std::fs::write(&path, serde_json::to_string(&descriptor).unwrap()).unwrap();
        assert_eq!(ProgramDescriptor::load(&path).unwrap(), descriptor);
    }
}
