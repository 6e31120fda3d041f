use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const SETTINGS_FILE: &str = "gifport_settings.json";

fn default_cluster_label() -> String {
    "Devnet".to_string()
}

fn default_auto_reconnect() -> bool {
    false
}

/// User settings that persist between sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettings {
    /// Selected cluster label
    #[serde(default = "default_cluster_label")]
    pub cluster_label: String,
    /// Custom RPC endpoint override (empty = use the cluster default)
    #[serde(default)]
    pub custom_rpc: String,
    /// Reconnect the wallet automatically at startup without prompting
    #[serde(default = "default_auto_reconnect")]
    pub auto_reconnect: bool,
    /// Path to the wallet keypair file (None = not configured yet)
    #[serde(default)]
    pub wallet_keyfile: Option<PathBuf>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            cluster_label: default_cluster_label(),
            custom_rpc: String::new(),
            auto_reconnect: default_auto_reconnect(),
            wallet_keyfile: None,
        }
    }
}

impl UserSettings {
    /// Get the directory where settings are stored
    fn settings_dir() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            let app_dir = config_dir.join("gifport");
            if !app_dir.exists() {
                let _ = fs::create_dir_all(&app_dir);
            }
            app_dir
        } else {
            PathBuf::from(".")
        }
    }

    fn settings_path() -> PathBuf {
        Self::settings_dir().join(SETTINGS_FILE)
    }

    /// Settings file location as a string for display in the UI
    pub fn settings_path_display() -> String {
        Self::settings_path().display().to_string()
    }

    /// Load settings from disk, falling back to defaults on any problem
    pub fn load() -> Self {
        let path = Self::settings_path();
        match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!("failed to parse settings file, using defaults: {}", e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Persist settings to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::settings_path();
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        tracing::debug!("settings saved to {}", path.display());
        Ok(())
    }

    /// Effective RPC endpoint: custom override when set, cluster default
    /// otherwise.
    pub fn effective_rpc(&self) -> Option<String> {
        let custom = self.custom_rpc.trim();
        if !custom.is_empty() {
            return Some(custom.to_string());
        }
        crate::config::find_cluster(&self.cluster_label).map(|c| c.default_rpc.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = UserSettings::default();
        assert_eq!(settings.cluster_label, "Devnet");
        assert!(!settings.auto_reconnect);
        assert!(settings.wallet_keyfile.is_none());
    }

    #[test]
    fn test_forward_compatible_parse() {
        // Unknown fields are ignored, missing fields get defaults.
        let settings: UserSettings =
            serde_json::from_str(r#"{"cluster_label":"Testnet","future_field":1}"#).unwrap();
        assert_eq!(settings.cluster_label, "Testnet");
        assert_eq!(settings.custom_rpc, "");
    }

    #[test]
    fn test_effective_rpc_prefers_custom() {
        let mut settings = UserSettings::default();
        assert_eq!(
            settings.effective_rpc().as_deref(),
            Some("https://api.devnet.example.org")
        );
        settings.custom_rpc = "http://localhost:1234 ".to_string();
        assert_eq!(settings.effective_rpc().as_deref(), Some("http://localhost:1234"));
    }
}
