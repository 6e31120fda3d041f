//! Wallet provider seam.
//!
//! The controller never talks to a concrete wallet; it depends on the
//! [`WalletProvider`] trait and receives an implementation at construction.
//! `KeyfileWallet` is the reference implementation backed by a local
//! keypair file.

use crate::keypair::BaseKeypair;
use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// A successfully established wallet session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletSession {
    /// The wallet's public address.
    pub address: String,
}

#[derive(Debug, Error)]
pub enum WalletError {
    /// No wallet is available (no extension, no keyfile).
    #[error("no wallet available")]
    NotAvailable,
    /// The wallet declined the connection, e.g. a trusted reconnect was
    /// requested but the user has not approved automatic reconnects.
    #[error("wallet declined the connection")]
    Declined,
    #[error("wallet error: {0}")]
    Other(#[from] anyhow::Error),
}

/// External agent managing the user's signing key.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Connect to the wallet. With `trusted_only` the connect must succeed
    /// without any user interaction or fail with [`WalletError::Declined`].
    async fn connect(&self, trusted_only: bool) -> Result<WalletSession, WalletError>;
}

/// Wallet backed by a local keypair file.
///
/// Trusted connects succeed only when the user opted in to automatic
/// reconnects; interactive connects load the keyfile directly.
pub struct KeyfileWallet {
    path: PathBuf,
    auto_reconnect: bool,
}

impl KeyfileWallet {
    pub fn new(path: PathBuf, auto_reconnect: bool) -> Self {
        Self {
            path,
            auto_reconnect,
        }
    }
}

#[async_trait]
impl WalletProvider for KeyfileWallet {
    async fn connect(&self, trusted_only: bool) -> Result<WalletSession, WalletError> {
        if !self.path.exists() {
            return Err(WalletError::NotAvailable);
        }
        if trusted_only && !self.auto_reconnect {
            return Err(WalletError::Declined);
        }
        let keypair = BaseKeypair::load(&self.path).map_err(WalletError::Other)?;
        Ok(WalletSession {
            address: keypair.address(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::block_on;

    fn keyfile_in(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("wallet.json");
        BaseKeypair::generate().save(&path).unwrap();
        path
    }

    #[test]
    fn test_connect_without_keyfile_is_not_available() {
        let dir = tempfile::tempdir().unwrap();
        let wallet = KeyfileWallet::new(dir.path().join("missing.json"), true);
        assert!(matches!(
            block_on(wallet.connect(false)),
            Err(WalletError::NotAvailable)
        ));
    }

    #[test]
    fn test_trusted_connect_requires_opt_in() {
        let dir = tempfile::tempdir().unwrap();
        let path = keyfile_in(&dir);
        let wallet = KeyfileWallet::new(path, false);
        assert!(matches!(
            block_on(wallet.connect(true)),
            Err(WalletError::Declined)
        ));
        // Interactive connect still works.
        assert!(block_on(wallet.connect(false)).is_ok());
    }

    #[test]
    fn test_trusted_connect_with_opt_in() {
        let dir = tempfile::tempdir().unwrap();
        let path = keyfile_in(&dir);
        let wallet = KeyfileWallet::new(path.clone(), true);
        let session = block_on(wallet.connect(true)).unwrap();
        assert_eq!(session.address, BaseKeypair::load(&path).unwrap().address());
    }
}
