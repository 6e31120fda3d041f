//! File-backed ledger implementation.
//!
//! Each account is a JSON document under a data directory. Good enough to
//! run the portal end to end locally; any other [`LedgerClient`] can be
//! injected in its place.

use crate::ledger::{LedgerClient, LedgerError, Record};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One stored entry. Entries carry the submitting address and a timestamp;
/// the controller-facing [`Record`] exposes only the link.
#[derive(Debug, Serialize, Deserialize)]
struct StoredEntry {
    link: String,
    submitted_by: String,
    submitted_at: DateTime<Utc>,
}

/// On-disk account document.
#[derive(Debug, Serialize, Deserialize)]
struct AccountDocument {
    created_by: String,
    co_signer: String,
    created_at: DateTime<Utc>,
    #[serde(default)]
    entries: Vec<StoredEntry>,
}

pub struct FileLedger {
    data_dir: PathBuf,
}

impl FileLedger {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Default location: `<config dir>/gifport/accounts`.
    pub fn in_app_data_dir() -> Self {
        let dir = dirs::config_dir()
            .map(|d| d.join("gifport").join("accounts"))
            .unwrap_or_else(|| PathBuf::from("./accounts"));
        Self::new(dir)
    }

    fn account_path(&self, account_id: &str) -> PathBuf {
        self.data_dir.join(format!("{account_id}.json"))
    }

    fn read_document(&self, path: &Path, account_id: &str) -> Result<AccountDocument, LedgerError> {
        if !path.exists() {
            return Err(LedgerError::AccountNotFound(account_id.to_string()));
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn write_document(&self, path: &Path, doc: &AccountDocument) -> Result<(), LedgerError> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, serde_json::to_string_pretty(doc)?)?;
        Ok(())
    }
}

#[async_trait]
impl LedgerClient for FileLedger {
    async fn fetch_account(&self, account_id: &str) -> Result<Vec<Record>, LedgerError> {
        let doc = self.read_document(&self.account_path(account_id), account_id)?;
        Ok(doc.entries.into_iter().map(|e| Record::new(e.link)).collect())
    }

    async fn create_account(
        &self,
        account_id: &str,
        payer: &str,
        co_signer: &str,
    ) -> Result<(), LedgerError> {
        let path = self.account_path(account_id);
        if path.exists() {
            return Err(LedgerError::AccountExists(account_id.to_string()));
        }
        let doc = AccountDocument {
            created_by: payer.to_string(),
            co_signer: co_signer.to_string(),
            created_at: Utc::now(),
            entries: Vec::new(),
        };
        self.write_document(&path, &doc)?;
        tracing::info!(account = account_id, payer, "created record account");
        Ok(())
    }

    async fn append_record(
        &self,
        account_id: &str,
        payer: &str,
        link: &str,
    ) -> Result<(), LedgerError> {
        let path = self.account_path(account_id);
        let mut doc = self.read_document(&path, account_id)?;
        doc.entries.push(StoredEntry {
            link: link.to_string(),
            submitted_by: payer.to_string(),
            submitted_at: Utc::now(),
        });
        self.write_document(&path, &doc)?;
        tracing::debug!(account = account_id, link, "appended record");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger() -> (tempfile::TempDir, FileLedger) {
        let dir = tempfile::tempdir().unwrap();
        let ledger = FileLedger::new(dir.path().join("accounts"));
        (dir, ledger)
    }

    #[tokio::test]
    async fn test_fetch_missing_account_is_not_found() {
        let (_dir, ledger) = ledger();
        assert!(matches!(
            ledger.fetch_account("acc1").await,
            Err(LedgerError::AccountNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_create_is_once_only() {
        let (_dir, ledger) = ledger();
        ledger.create_account("acc1", "payer", "cosigner").await.unwrap();
        assert!(matches!(
            ledger.create_account("acc1", "payer", "cosigner").await,
            Err(LedgerError::AccountExists(_))
        ));
    }

    #[tokio::test]
    async fn test_created_account_fetches_empty() {
        let (_dir, ledger) = ledger();
        ledger.create_account("acc1", "payer", "cosigner").await.unwrap();
        assert_eq!(ledger.fetch_account("acc1").await.unwrap(), vec![]);
    }

    #[tokio::test]
    async fn test_append_preserves_order() {
        let (_dir, ledger) = ledger();
        ledger.create_account("acc1", "w1", "c1").await.unwrap();
        ledger.append_record("acc1", "w1", "https://x/a.gif").await.unwrap();
        ledger.append_record("acc1", "w1", "https://x/b.gif").await.unwrap();

        let records = ledger.fetch_account("acc1").await.unwrap();
        assert_eq!(
            records,
            vec![Record::new("https://x/a.gif"), Record::new("https://x/b.gif")]
        );
    }

    #[tokio::test]
    async fn test_append_to_missing_account_fails() {
        let (_dir, ledger) = ledger();
        assert!(matches!(
            ledger.append_record("acc1", "w1", "https://x/a.gif").await,
            Err(LedgerError::AccountNotFound(_))
        ));
    }
}
