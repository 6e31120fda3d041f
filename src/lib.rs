//! GIF Portal: a desktop client for a wallet-backed, on-ledger GIF link
//! gallery.
//!
//! The crate splits into a headless core and a GUI shell:
//!
//! - [`controller`] - the portal state machine (session, draft, records)
//! - [`wallet`] / [`ledger`] - the injected collaborator traits plus the
//!   keyfile-backed and file-backed reference implementations
//! - [`config`] / [`keypair`] - load-time constants passed into the
//!   controller at construction
//! - [`gui`] - the egui/eframe shell

pub mod config;
pub mod controller;
pub mod file_ledger;
pub mod gui;
pub mod keypair;
pub mod ledger;
pub mod operation_log;
pub mod user_settings;
pub mod wallet;
