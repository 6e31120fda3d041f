//! View modules for the GUI
//!
//! Each submodule contains the rendering logic for one screen. View
//! functions are methods on `PortalApp` called from `App::update` in
//! `app.rs`.
//!
//! - `portal` - the three-state main screen (connect / initialize / gallery)
//! - `activity` - the persisted operation log
//! - `settings` - cluster, RPC, and wallet options

pub mod activity;
pub mod portal;
pub mod settings;
