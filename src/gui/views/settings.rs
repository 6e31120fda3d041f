//! Settings view: cluster selection, RPC override, wallet options.
//!
//! Saved settings take effect at the next launch because the wallet and
//! ledger collaborators are constructed once, before the GUI starts.

use crate::config::{ClusterCategory, CLUSTERS};
use crate::gui::app::PortalApp;
use crate::gui::notifications::NotificationEntry;
use crate::user_settings::UserSettings;
use eframe::egui::{self, RichText};
use std::path::PathBuf;

impl PortalApp {
    pub(crate) fn view_settings(&mut self, ui: &mut egui::Ui) {
        ui.heading(RichText::new("Settings").size(18.0));
        ui.add_space(self.theme.spacing_md);

        self.render_cluster_panel(ui);
        ui.add_space(self.theme.spacing_md);
        self.render_wallet_panel(ui);
        ui.add_space(self.theme.spacing_md);

        if ui.add(self.theme.button_primary("Save settings")).clicked() {
            self.save_settings();
        }
        ui.label(
            RichText::new("Cluster and wallet changes apply after restart.")
                .small()
                .color(self.theme.text_secondary),
        );

        ui.add_space(self.theme.spacing_lg);
        self.render_about_panel(ui);
    }

    fn render_cluster_panel(&mut self, ui: &mut egui::Ui) {
        self.theme.frame_panel().show(ui, |ui| {
            ui.label(
                RichText::new("Cluster")
                    .size(16.0)
                    .strong()
                    .color(self.theme.text_primary),
            );
            ui.add_space(self.theme.spacing_sm);

            let selected = CLUSTERS[self.settings_cluster_index].label;
            egui::ComboBox::from_label("endpoint")
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    for (index, cluster) in CLUSTERS.iter().enumerate() {
                        let tag = match cluster.category {
                            ClusterCategory::Local => "local",
                            ClusterCategory::Test => "test",
                            ClusterCategory::Production => "production",
                        };
                        ui.selectable_value(
                            &mut self.settings_cluster_index,
                            index,
                            format!("{} ({})", cluster.label, tag),
                        );
                    }
                });

            ui.add_space(self.theme.spacing_sm);
            ui.horizontal(|ui| {
                ui.label(RichText::new("Custom RPC:").color(self.theme.text_secondary));
                ui.add(
                    egui::TextEdit::singleline(&mut self.settings_custom_rpc)
                        .hint_text(CLUSTERS[self.settings_cluster_index].default_rpc)
                        .desired_width(360.0),
                );
            });
        });
    }

    fn render_wallet_panel(&mut self, ui: &mut egui::Ui) {
        self.theme.frame_panel().show(ui, |ui| {
            ui.label(
                RichText::new("Wallet")
                    .size(16.0)
                    .strong()
                    .color(self.theme.text_primary),
            );
            ui.add_space(self.theme.spacing_sm);

            ui.horizontal(|ui| {
                ui.label(RichText::new("Keyfile:").color(self.theme.text_secondary));
                ui.add(
                    egui::TextEdit::singleline(&mut self.settings_keyfile)
                        .hint_text("default location")
                        .desired_width(360.0),
                );
                if ui.add(self.theme.button_secondary("Browse…")).clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("JSON keyfile", &["json"])
                        .pick_file()
                    {
                        self.settings_keyfile = path.display().to_string();
                    }
                }
            });

            ui.checkbox(
                &mut self.settings_auto_reconnect,
                "Reconnect automatically at startup (no prompt)",
            );
        });
    }

    fn render_about_panel(&mut self, ui: &mut egui::Ui) {
        self.theme.frame_panel().show(ui, |ui| {
            ui.label(
                RichText::new("About")
                    .size(16.0)
                    .strong()
                    .color(self.theme.text_primary),
            );
            ui.add_space(self.theme.spacing_sm);
            egui::Grid::new("about_grid")
                .num_columns(2)
                .spacing([self.theme.spacing_md, self.theme.spacing_xs])
                .show(ui, |ui| {
                    ui.label(RichText::new("Version:").color(self.theme.text_secondary));
                    ui.label(
                        RichText::new(env!("CARGO_PKG_VERSION"))
                            .strong()
                            .color(self.theme.accent),
                    );
                    ui.end_row();

                    ui.label(RichText::new("Settings file:").color(self.theme.text_secondary));
                    ui.label(
                        RichText::new(UserSettings::settings_path_display())
                            .small()
                            .color(self.theme.text_secondary),
                    );
                    ui.end_row();
                });
        });
    }

    fn save_settings(&mut self) {
        let custom_rpc = self.settings_custom_rpc.trim();
        if !custom_rpc.is_empty() && url::Url::parse(custom_rpc).is_err() {
            self.notifications
                .push_back(NotificationEntry::new("Custom RPC is not a valid URL"));
            return;
        }

        self.user_settings.cluster_label =
            CLUSTERS[self.settings_cluster_index].label.to_string();
        self.user_settings.custom_rpc = custom_rpc.to_string();
        self.user_settings.auto_reconnect = self.settings_auto_reconnect;
        let keyfile = self.settings_keyfile.trim();
        self.user_settings.wallet_keyfile = if keyfile.is_empty() {
            None
        } else {
            Some(PathBuf::from(keyfile))
        };

        match self.user_settings.save() {
            Ok(()) => {
                self.notifications
                    .push_back(NotificationEntry::new("Settings saved"));
            }
            Err(e) => {
                tracing::error!("failed to save settings: {}", e);
                self.notifications
                    .push_back(NotificationEntry::new(format!("Failed to save settings: {}", e)));
            }
        }
    }
}
