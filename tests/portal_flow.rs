//! End-to-end portal flow against the reference collaborators: a
//! keyfile-backed wallet and a file-backed ledger in a temp directory.

use gifport::controller::{PortalController, PortalView, RecordList, SubmitOutcome};
use gifport::file_ledger::FileLedger;
use gifport::keypair::BaseKeypair;
use gifport::ledger::Record;
use gifport::wallet::KeyfileWallet;
use std::sync::Arc;

fn portal_in(dir: &tempfile::TempDir, auto_reconnect: bool) -> PortalController {
    let wallet_path = dir.path().join("wallet.json");
    BaseKeypair::generate().save(&wallet_path).unwrap();

    let base = BaseKeypair::generate();
    let wallet = Arc::new(KeyfileWallet::new(wallet_path, auto_reconnect));
    let ledger = Arc::new(FileLedger::new(dir.path().join("accounts")));
    PortalController::new(wallet, ledger, base.address())
}

#[tokio::test]
async fn first_run_walks_connect_initialize_submit() {
    let dir = tempfile::tempdir().unwrap();
    let mut portal = portal_in(&dir, false);

    // Fresh wallet, fresh ledger: trusted reconnect declines, we stay
    // disconnected until the explicit connect.
    assert!(portal.initialize().await.is_err());
    assert_eq!(portal.view(), PortalView::Disconnected);

    portal.connect_wallet().await.unwrap();
    assert_eq!(portal.view(), PortalView::Uninitialized);

    portal.initialize_record_account().await.unwrap();
    assert_eq!(portal.view(), PortalView::Ready);
    assert_eq!(portal.records(), &RecordList::Loaded(vec![]));

    portal.on_input_change("https://x/y.gif");
    assert_eq!(portal.submit_record().await.unwrap(), SubmitOutcome::Submitted);
    assert_eq!(portal.draft(), "");
    assert_eq!(
        portal.records(),
        &RecordList::Loaded(vec![Record::new("https://x/y.gif")])
    );
}

#[tokio::test]
async fn records_survive_a_new_session() {
    let dir = tempfile::tempdir().unwrap();

    let base = BaseKeypair::generate();
    let wallet_path = dir.path().join("wallet.json");
    BaseKeypair::generate().save(&wallet_path).unwrap();

    {
        let wallet = Arc::new(KeyfileWallet::new(wallet_path.clone(), true));
        let ledger = Arc::new(FileLedger::new(dir.path().join("accounts")));
        let mut portal = PortalController::new(wallet, ledger, base.address());
        portal.connect_wallet().await.unwrap();
        portal.initialize_record_account().await.unwrap();
        portal.on_input_change("https://x/a.gif");
        portal.submit_record().await.unwrap();
    }

    // New controller, same ledger directory: trusted reconnect succeeds
    // and the sync finds the record submitted in the previous session.
    let wallet = Arc::new(KeyfileWallet::new(wallet_path, true));
    let ledger = Arc::new(FileLedger::new(dir.path().join("accounts")));
    let mut portal = PortalController::new(wallet, ledger, base.address());
    portal.initialize().await.unwrap();
    assert_eq!(portal.view(), PortalView::Ready);
    assert_eq!(
        portal.records(),
        &RecordList::Loaded(vec![Record::new("https://x/a.gif")])
    );
}

#[tokio::test]
async fn second_initialization_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut portal = portal_in(&dir, false);

    portal.connect_wallet().await.unwrap();
    portal.initialize_record_account().await.unwrap();
    assert!(portal.initialize_record_account().await.is_err());
    // The account is still intact.
    assert_eq!(portal.view(), PortalView::Ready);
}
