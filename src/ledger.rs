//! Remote ledger seam.
//!
//! The ledger holds one account per portal, keyed by the base account's
//! address. The controller depends on the [`LedgerClient`] trait only;
//! [`crate::file_ledger::FileLedger`] is the reference implementation.

use async_trait::async_trait;
use thiserror::Error;

/// A single stored link, as seen by the controller and the gallery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub link: String,
}

impl Record {
    pub fn new(link: impl Into<String>) -> Self {
        Self { link: link.into() }
    }
}

#[derive(Debug, Error)]
pub enum LedgerError {
    /// The account has never been initialized. This is a normal state for
    /// the portal (it drives the one-time-initialize affordance), not a
    /// hard error.
    #[error("account {0} not found")]
    AccountNotFound(String),
    /// The create instruction was sent for an account that already exists.
    #[error("account {0} already exists")]
    AccountExists(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("malformed account data: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("ledger error: {0}")]
    Other(#[from] anyhow::Error),
}

/// External agent reading and writing account state on the remote ledger.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Fetch the record list stored on `account_id`.
    async fn fetch_account(&self, account_id: &str) -> Result<Vec<Record>, LedgerError>;

    /// Create the account. Callable once; signed by the payer (connected
    /// wallet) and the co-signer (the base account keypair).
    async fn create_account(
        &self,
        account_id: &str,
        payer: &str,
        co_signer: &str,
    ) -> Result<(), LedgerError>;

    /// Append a record to the account, signed by the payer.
    async fn append_record(
        &self,
        account_id: &str,
        payer: &str,
        link: &str,
    ) -> Result<(), LedgerError>;
}
