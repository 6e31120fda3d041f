//! GUI module for the GIF Portal application, built with egui/eframe.
//!
//! ## Module Structure
//!
//! - `app` - PortalApp struct, job orchestration, and `launch`
//! - `async_job` - background job polling for the portal operations
//! - `theme` - centralized theme and styling (AppTheme)
//! - `notifications` - notification entries
//! - `views` - view rendering (portal, activity, settings)

mod app;
pub mod async_job;
pub mod notifications;
pub mod theme;
pub mod views;

pub use app::{launch, GuiSection, PortalApp};

pub use async_job::AsyncJob;
pub use notifications::NotificationEntry;
pub use theme::{configure_style, AppTheme};
