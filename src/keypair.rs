//! The embedded base-account keypair.
//!
//! The portal stores all records on a single fixed account whose address is
//! the public half of this keypair. The keypair co-signs the one-time
//! account creation and is otherwise a load-time constant.

use anyhow::{anyhow, Context, Result};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Secret length: 32 bytes of seed followed by the 32-byte public half.
pub const SECRET_LEN: usize = 64;

/// A 64-byte account keypair. The address is the hex-encoded public half.
#[derive(Clone)]
pub struct BaseKeypair {
    secret: [u8; SECRET_LEN],
}

/// On-disk layout, compatible with the common web-wallet export format
/// (`{"_keypair":{"secretKey":[...]}}`).
#[derive(Serialize, Deserialize)]
struct KeyfileDocument {
    #[serde(rename = "_keypair")]
    keypair: KeyfileInner,
}

#[derive(Serialize, Deserialize)]
struct KeyfileInner {
    #[serde(rename = "secretKey")]
    secret_key: Vec<u8>,
}

impl BaseKeypair {
    /// Build a keypair from raw secret bytes.
    pub fn from_secret(secret: &[u8]) -> Result<Self> {
        let secret: [u8; SECRET_LEN] = secret
            .try_into()
            .map_err(|_| anyhow!("keypair secret must be {} bytes, got {}", SECRET_LEN, secret.len()))?;
        Ok(Self { secret })
    }

    /// Generate a fresh keypair. Used on first run when no keyfile exists.
    pub fn generate() -> Self {
        let mut secret = [0u8; SECRET_LEN];
        rand::thread_rng().fill_bytes(&mut secret);
        Self { secret }
    }

    /// Load a keypair from a JSON keyfile.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read keyfile {}", path.display()))?;
        let doc: KeyfileDocument = serde_json::from_str(&raw)
            .with_context(|| format!("keyfile {} is not valid JSON", path.display()))?;
        Self::from_secret(&doc.keypair.secret_key)
    }

    /// Write the keypair to a JSON keyfile, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let doc = KeyfileDocument {
            keypair: KeyfileInner {
                secret_key: self.secret.to_vec(),
            },
        };
        fs::write(path, serde_json::to_string(&doc)?)
            .with_context(|| format!("failed to write keyfile {}", path.display()))?;
        Ok(())
    }

    /// Load the keyfile at `path`, generating and persisting one if missing.
    pub fn load_or_generate(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            let keypair = Self::generate();
            keypair.save(path)?;
            tracing::info!("generated new keypair at {}", path.display());
            Ok(keypair)
        }
    }

    /// The account address: the hex-encoded public half of the secret.
    pub fn address(&self) -> String {
        hex::encode(&self.secret[32..])
    }

    /// Shortened address for display, e.g. `a1b2c3…d4e5f6`.
    pub fn short_address(&self) -> String {
        let addr = self.address();
        format!("{}…{}", &addr[..6], &addr[addr.len() - 6..])
    }
}

impl std::fmt::Debug for BaseKeypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the secret half.
        f.debug_struct("BaseKeypair")
            .field("address", &self.address())
            .finish()
    }
}
