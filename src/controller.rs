//! Portal controller: the view/state synchronization core.
//!
//! Holds the three pieces of UI state (session, draft input, record list)
//! and reacts to the external triggers - startup, connect, input, submit -
//! by calling out to the injected [`WalletProvider`] and [`LedgerClient`]
//! and replacing state from the results. Every operation returns an
//! explicit `Result`; presentation policy belongs to the caller.

use crate::ledger::{LedgerClient, LedgerError, Record};
use crate::wallet::{WalletError, WalletProvider};
use std::sync::Arc;
use thiserror::Error;

/// The record list is either the uninitialized sentinel or a fully fetched
/// sequence. An empty sequence is a valid, initialized account; the
/// sentinel means the account has never been fetched successfully this
/// session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordList {
    Uninitialized,
    Loaded(Vec<Record>),
}

/// Which of the three screens the UI should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PortalView {
    /// No session: show the connect-wallet control.
    Disconnected,
    /// Session present but the account does not exist yet: show the
    /// one-time initialize control.
    Uninitialized,
    /// Session present and the account fetched: show the submit form and
    /// the gallery.
    Ready,
}

/// Outcome of a submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    /// The draft was empty; nothing was sent and nothing changed.
    EmptyDraft,
}

#[derive(Debug, Error)]
pub enum PortalError {
    #[error(transparent)]
    Wallet(#[from] WalletError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("no wallet connected")]
    NotConnected,
}

/// Immutable copy of the controller state, cheap enough to hand to a
/// render pass on another thread.
#[derive(Clone, Debug)]
pub struct PortalSnapshot {
    pub session: Option<String>,
    pub draft: String,
    pub records: RecordList,
    pub view: PortalView,
}

pub struct PortalController {
    wallet: Arc<dyn WalletProvider>,
    ledger: Arc<dyn LedgerClient>,
    /// Fixed account holding all records; also the co-signer identity for
    /// the one-time create instruction.
    account_id: String,
    session: Option<String>,
    draft: String,
    records: RecordList,
}

impl PortalController {
    pub fn new(
        wallet: Arc<dyn WalletProvider>,
        ledger: Arc<dyn LedgerClient>,
        account_id: String,
    ) -> Self {
        Self {
            wallet,
            ledger,
            account_id,
            session: None,
            draft: String::new(),
            records: RecordList::Uninitialized,
        }
    }

    /// Startup trigger: attempt a trusted (non-interactive) reconnect and,
    /// on success, sync the record list. A missing or declining wallet is
    /// an expected outcome here, surfaced only through the returned error.
    pub async fn initialize(&mut self) -> Result<(), PortalError> {
        let session = self.wallet.connect(true).await?;
        tracing::info!(address = %session.address, "reconnected to trusted wallet");
        self.session = Some(session.address);
        self.sync_records().await
    }

    /// Explicit user action: interactive wallet connect, then sync.
    pub async fn connect_wallet(&mut self) -> Result<(), PortalError> {
        let session = self.wallet.connect(false).await?;
        tracing::info!(address = %session.address, "wallet connected");
        self.session = Some(session.address);
        self.sync_records().await
    }

    /// Fetch the account and fully replace the record list. A missing
    /// account is a normal state (the uninitialized sentinel), not an
    /// error; any other fetch failure also resets to the sentinel and is
    /// returned for presentation.
    pub async fn sync_records(&mut self) -> Result<(), PortalError> {
        match self.ledger.fetch_account(&self.account_id).await {
            Ok(records) => {
                tracing::debug!(count = records.len(), "record list fetched");
                self.records = RecordList::Loaded(records);
                Ok(())
            }
            Err(LedgerError::AccountNotFound(_)) => {
                tracing::info!(account = %self.account_id, "record account not initialized yet");
                self.records = RecordList::Uninitialized;
                Ok(())
            }
            Err(e) => {
                self.records = RecordList::Uninitialized;
                Err(e.into())
            }
        }
    }

    /// Explicit user action shown only in the `Uninitialized` view: send
    /// the one-time create-account instruction, co-signed by the embedded
    /// account keypair, then sync.
    pub async fn initialize_record_account(&mut self) -> Result<(), PortalError> {
        let payer = self.session.clone().ok_or(PortalError::NotConnected)?;
        self.ledger
            .create_account(&self.account_id, &payer, &self.account_id)
            .await?;
        tracing::info!(account = %self.account_id, "record account created");
        self.sync_records().await
    }

    /// Replace the draft verbatim. No validation, no trimming.
    pub fn on_input_change(&mut self, text: &str) {
        self.draft = text.to_string();
    }

    /// Submit the current draft. An empty draft sends nothing and changes
    /// nothing. A successful append clears the draft and syncs; a failed
    /// one leaves the draft untouched so the user can resubmit.
    pub async fn submit_record(&mut self) -> Result<SubmitOutcome, PortalError> {
        if self.draft.is_empty() {
            tracing::debug!("submit with empty draft ignored");
            return Ok(SubmitOutcome::EmptyDraft);
        }
        let payer = self.session.clone().ok_or(PortalError::NotConnected)?;
        self.ledger
            .append_record(&self.account_id, &payer, &self.draft)
            .await?;
        tracing::info!(link = %self.draft, "record submitted");
        self.draft.clear();
        self.sync_records().await?;
        Ok(SubmitOutcome::Submitted)
    }

    pub fn session(&self) -> Option<&str> {
        self.session.as_deref()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn records(&self) -> &RecordList {
        &self.records
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// View selection from the current state.
    pub fn view(&self) -> PortalView {
        match (&self.session, &self.records) {
            (None, _) => PortalView::Disconnected,
            (Some(_), RecordList::Uninitialized) => PortalView::Uninitialized,
            (Some(_), RecordList::Loaded(_)) => PortalView::Ready,
        }
    }

    pub fn snapshot(&self) -> PortalSnapshot {
        PortalSnapshot {
            session: self.session.clone(),
            draft: self.draft.clone(),
            records: self.records.clone(),
            view: self.view(),
        }
    }
}
