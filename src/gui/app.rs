//! Main GUI application module.
//!
//! Owns the portal controller behind an async mutex, spawns one background
//! job per user action, and re-renders from an immutable snapshot of the
//! controller state. At most one portal job runs at a time; the
//! affordances are disabled while it is in flight, so overlapping actions
//! are rejected rather than raced.

use crate::{
    config::{self, Config},
    controller::{PortalController, PortalError, PortalSnapshot, PortalView, RecordList, SubmitOutcome},
    file_ledger::FileLedger,
    keypair::BaseKeypair,
    ledger::LedgerClient,
    operation_log,
    user_settings::UserSettings,
    wallet::{KeyfileWallet, WalletError, WalletProvider},
};
use anyhow::{anyhow, Result};
use eframe::{egui, egui::RichText, App, Frame, NativeOptions};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::async_job::AsyncJob;
use super::notifications::NotificationEntry;
use super::theme::{configure_style, AppTheme};

/// GUI section enum for navigation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuiSection {
    Portal,
    Activity,
    Settings,
}

/// Outcome of a portal job: the post-operation snapshot plus an optional
/// error message for presentation.
type PortalJobOutcome = (PortalSnapshot, Option<String>);

pub(crate) struct LogViewState {
    pub(crate) content: String,
    pub(crate) job: Option<AsyncJob<String>>,
    pub(crate) error: Option<String>,
}

impl Default for LogViewState {
    fn default() -> Self {
        Self {
            content: "No activity yet. Initialize the account or submit a link.".to_string(),
            job: None,
            error: None,
        }
    }
}

pub struct PortalApp {
    pub(crate) config: Config,
    pub(crate) user_settings: UserSettings,
    pub(crate) theme: AppTheme,
    pub(crate) section: GuiSection,
    pub(crate) notifications: VecDeque<NotificationEntry>,

    pub(crate) controller: Arc<Mutex<PortalController>>,
    pub(crate) snapshot: PortalSnapshot,
    pub(crate) draft_input: String,
    pub(crate) portal_job: Option<AsyncJob<PortalJobOutcome>>,
    startup_attempted: bool,

    pub(crate) log_view: LogViewState,

    // Settings page editing state
    pub(crate) settings_cluster_index: usize,
    pub(crate) settings_custom_rpc: String,
    pub(crate) settings_auto_reconnect: bool,
    pub(crate) settings_keyfile: String,
}

impl PortalApp {
    fn new(
        config: Config,
        user_settings: UserSettings,
        controller: Arc<Mutex<PortalController>>,
        ctx: &egui::Context,
    ) -> Self {
        let theme = AppTheme::default();
        configure_style(ctx, &theme);

        let settings_cluster_index =
            config::find_cluster_index(&user_settings.cluster_label).unwrap_or(0);
        let settings_custom_rpc = user_settings.custom_rpc.clone();
        let settings_auto_reconnect = user_settings.auto_reconnect;
        let settings_keyfile = user_settings
            .wallet_keyfile
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();

        Self {
            config,
            user_settings,
            theme,
            section: GuiSection::Portal,
            notifications: VecDeque::with_capacity(20),
            controller,
            snapshot: PortalSnapshot {
                session: None,
                draft: String::new(),
                records: RecordList::Uninitialized,
                view: PortalView::Disconnected,
            },
            draft_input: String::new(),
            portal_job: None,
            startup_attempted: false,
            log_view: LogViewState::default(),
            settings_cluster_index,
            settings_custom_rpc,
            settings_auto_reconnect,
            settings_keyfile,
        }
    }

    /// True while a portal action is in flight. Used to disable the
    /// connect/initialize/submit affordances.
    pub(crate) fn busy(&self) -> bool {
        self.portal_job.is_some()
    }

    /// Startup trigger: trusted reconnect without prompting. A missing or
    /// declining wallet is expected and stays out of the notification feed.
    fn start_startup_reconnect(&mut self) {
        if self.portal_job.is_some() {
            return;
        }
        let controller = self.controller.clone();
        self.portal_job = Some(AsyncJob::spawn(move || async move {
            let mut portal = controller.lock().await;
            let error = match portal.initialize().await {
                Ok(()) => None,
                Err(PortalError::Wallet(WalletError::NotAvailable)) => {
                    tracing::info!("no wallet available for trusted reconnect");
                    None
                }
                Err(PortalError::Wallet(WalletError::Declined)) => {
                    tracing::debug!("trusted reconnect declined");
                    None
                }
                Err(e) => Some(format!("Startup sync failed: {}", e)),
            };
            Ok((portal.snapshot(), error))
        }));
    }

    pub(crate) fn start_connect(&mut self) {
        if self.portal_job.is_some() {
            return;
        }
        let controller = self.controller.clone();
        self.portal_job = Some(AsyncJob::spawn(move || async move {
            let mut portal = controller.lock().await;
            let error = portal
                .connect_wallet()
                .await
                .err()
                .map(|e| format!("Connect failed: {}", e));
            Ok((portal.snapshot(), error))
        }));
    }

    pub(crate) fn start_initialize_account(&mut self) {
        if self.portal_job.is_some() {
            return;
        }
        let controller = self.controller.clone();
        let cluster = self.config.cluster_label.clone();
        self.portal_job = Some(AsyncJob::spawn(move || async move {
            let mut portal = controller.lock().await;
            let error = match portal.initialize_record_account().await {
                Ok(()) => {
                    let _ = operation_log::append_log(
                        "Initialize record account",
                        &cluster,
                        format!("account: {}", portal.account_id()),
                    );
                    None
                }
                Err(e) => Some(format!("Account initialization failed: {}", e)),
            };
            Ok((portal.snapshot(), error))
        }));
    }

    pub(crate) fn start_submit(&mut self) {
        if self.portal_job.is_some() {
            return;
        }
        let controller = self.controller.clone();
        let cluster = self.config.cluster_label.clone();
        let draft = self.draft_input.clone();
        self.portal_job = Some(AsyncJob::spawn(move || async move {
            let mut portal = controller.lock().await;
            portal.on_input_change(&draft);
            let error = match portal.submit_record().await {
                Ok(SubmitOutcome::Submitted) => {
                    let _ = operation_log::append_log(
                        "Submit record",
                        &cluster,
                        format!("link: {}", draft),
                    );
                    None
                }
                Ok(SubmitOutcome::EmptyDraft) => None,
                Err(e) => Some(format!("Submit failed: {}", e)),
            };
            Ok((portal.snapshot(), error))
        }));
    }

    pub(crate) fn start_refresh(&mut self) {
        if self.portal_job.is_some() {
            return;
        }
        let controller = self.controller.clone();
        self.portal_job = Some(AsyncJob::spawn(move || async move {
            let mut portal = controller.lock().await;
            let error = portal
                .sync_records()
                .await
                .err()
                .map(|e| format!("Refresh failed: {}", e));
            Ok((portal.snapshot(), error))
        }));
    }

    pub(crate) fn refresh_logs(&mut self) {
        if self.log_view.job.is_none() {
            self.log_view.job = Some(AsyncJob::spawn(|| async move {
                match operation_log::read_log() {
                    Ok(content) if content.is_empty() => Ok("No activity recorded yet.".to_string()),
                    Ok(content) => Ok(content),
                    Err(e) => Err(anyhow!("Failed to read activity log: {}", e)),
                }
            }));
        }
    }

    fn poll_jobs(&mut self) {
        if let Some(job) = &mut self.portal_job {
            if let Some(res) = job.poll() {
                match res {
                    Ok((snapshot, error)) => {
                        self.draft_input = snapshot.draft.clone();
                        self.snapshot = snapshot;
                        if let Some(message) = error {
                            tracing::warn!("{}", message);
                            self.notifications.push_back(NotificationEntry::new(message));
                        }
                    }
                    Err(e) => {
                        tracing::error!("portal job failed: {}", e);
                        self.notifications
                            .push_back(NotificationEntry::new(format!("Background task failed: {}", e)));
                    }
                }
                self.portal_job = None;
            }
        }

        if let Some(job) = &mut self.log_view.job {
            if let Some(res) = job.poll() {
                match res {
                    Ok(content) => {
                        self.log_view.content = content;
                        self.log_view.error = None;
                    }
                    Err(e) => {
                        self.log_view.error = Some(e.to_string());
                    }
                }
                self.log_view.job = None;
            }
        }

        while self.notifications.len() > 50 {
            self.notifications.pop_front();
        }
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(self.theme.spacing_sm);
            ui.horizontal(|ui| {
                ui.heading(
                    RichText::new("🖼 GIF Portal")
                        .size(24.0)
                        .color(self.theme.primary),
                );
                ui.label(
                    RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                        .size(12.0)
                        .color(self.theme.text_secondary),
                );
                ui.separator();
                ui.selectable_value(&mut self.section, GuiSection::Portal, "Portal");
                ui.selectable_value(&mut self.section, GuiSection::Activity, "Activity");
                ui.selectable_value(&mut self.section, GuiSection::Settings, "Settings");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(&self.config.cluster_label)
                            .color(self.theme.accent)
                            .strong(),
                    );
                    ui.label(RichText::new("Cluster:").color(self.theme.text_secondary));
                    if self.busy() {
                        ui.spinner();
                    }
                });
            });
            ui.add_space(self.theme.spacing_sm);
        });
    }

    fn render_notification_bar(&mut self, ctx: &egui::Context) {
        if let Some(entry) = self.notifications.back().cloned() {
            egui::TopBottomPanel::bottom("notification_bar").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&entry.message).color(self.theme.warning));
                    ui.label(
                        RichText::new(entry.time_ago())
                            .small()
                            .color(self.theme.text_secondary),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("Dismiss").clicked() {
                            self.notifications.pop_back();
                        }
                    });
                });
            });
        }
    }
}

impl App for PortalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        if !self.startup_attempted {
            self.startup_attempted = true;
            self.start_startup_reconnect();
        }

        self.poll_jobs();

        // Keep repainting while a background job is pending so its result
        // is picked up without user input.
        if self.busy() || self.log_view.job.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        self.render_top_bar(ctx);
        self.render_notification_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.section {
                    GuiSection::Portal => self.view_portal(ui),
                    GuiSection::Activity => self.view_activity(ui),
                    GuiSection::Settings => self.view_settings(ui),
                });
        });
    }
}

/// Default location of the wallet keyfile when the user has not picked one.
fn default_wallet_keyfile() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("gifport").join("wallet.json"))
        .unwrap_or_else(|| PathBuf::from("./wallet.json"))
}

pub fn launch(mut config: Config) -> Result<()> {
    // Load user settings and apply them to the config
    let user_settings = UserSettings::load();
    if let Some(cluster) = config::find_cluster(&user_settings.cluster_label) {
        let keypair_path = config.base_keypair_path.clone();
        config = Config::from_cluster(cluster);
        config.base_keypair_path = keypair_path;
    }
    let custom_rpc = user_settings.custom_rpc.trim();
    if !custom_rpc.is_empty() {
        config.rpc_url = custom_rpc.to_string();
    }
    config.validate_rpc_url()?;

    // The embedded base account keypair: its address is the fixed account
    // all records live on, and it co-signs the one-time create.
    let base_keypair = BaseKeypair::load_or_generate(&config.base_keypair_path)?;
    let account_id = base_keypair.address();
    tracing::info!(account = %base_keypair.short_address(), "portal account loaded");

    let wallet_path = user_settings
        .wallet_keyfile
        .clone()
        .unwrap_or_else(default_wallet_keyfile);
    let wallet: Arc<dyn WalletProvider> =
        Arc::new(KeyfileWallet::new(wallet_path, user_settings.auto_reconnect));
    let ledger: Arc<dyn LedgerClient> = Arc::new(FileLedger::in_app_data_dir());
    let controller = Arc::new(Mutex::new(PortalController::new(wallet, ledger, account_id)));

    let app_creator = move |cc: &eframe::CreationContext<'_>| {
        Box::new(PortalApp::new(
            config.clone(),
            user_settings.clone(),
            controller.clone(),
            &cc.egui_ctx,
        )) as Box<dyn App>
    };

    let viewport = egui::ViewportBuilder::default().with_inner_size([960.0, 680.0]);
    let native_options = NativeOptions {
        viewport,
        persist_window: true,
        ..Default::default()
    };

    eframe::run_native("GIF Portal", native_options, Box::new(app_creator))
        .map_err(|e| anyhow!("Failed to start GUI: {}", e))
}
