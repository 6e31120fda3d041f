//! Portal view: the three-state main screen.
//!
//! Disconnected shows the connect control, Uninitialized the one-time
//! account initialization, Ready the submit form and the gallery.

use crate::controller::{PortalView, RecordList};
use crate::gui::app::PortalApp;
use crate::gui::notifications::NotificationEntry;
use eframe::egui::{self, RichText};

impl PortalApp {
    pub(crate) fn view_portal(&mut self, ui: &mut egui::Ui) {
        ui.add_space(self.theme.spacing_lg);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("View your GIF collection on the ledger ✨")
                    .size(16.0)
                    .color(self.theme.text_secondary),
            );
        });
        ui.add_space(self.theme.spacing_lg);

        match self.snapshot.view {
            PortalView::Disconnected => self.render_disconnected(ui),
            PortalView::Uninitialized => self.render_uninitialized(ui),
            PortalView::Ready => self.render_ready(ui),
        }

        ui.add_space(self.theme.spacing_lg);
        self.render_session_footer(ui);
    }

    fn render_disconnected(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            let busy = self.busy();
            if ui
                .add_enabled(!busy, self.theme.button_hero("Connect Wallet"))
                .clicked()
            {
                self.start_connect();
            }
            ui.add_space(self.theme.spacing_sm);
            ui.label(
                RichText::new("Connect a wallet to browse and submit GIFs.")
                    .small()
                    .color(self.theme.text_secondary),
            );
        });
    }

    fn render_uninitialized(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("The record account has not been created yet.")
                    .color(self.theme.text_primary),
            );
            ui.add_space(self.theme.spacing_sm);
            let busy = self.busy();
            if ui
                .add_enabled(
                    !busy,
                    self.theme.button_hero("One-time account initialization"),
                )
                .clicked()
            {
                self.start_initialize_account();
            }
        });
    }

    fn render_ready(&mut self, ui: &mut egui::Ui) {
        let busy = self.busy();

        // Submission form
        self.theme.frame_panel().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("GIF link:").color(self.theme.text_secondary));
                let edit = egui::TextEdit::singleline(&mut self.draft_input)
                    .hint_text("enter gif link")
                    .desired_width(ui.available_width() - 160.0);
                ui.add_enabled(!busy, edit);

                let can_submit = !busy && !self.draft_input.is_empty();
                if ui
                    .add_enabled(can_submit, self.theme.button_primary("Submit"))
                    .clicked()
                {
                    self.start_submit();
                }
            });
        });

        ui.add_space(self.theme.spacing_md);

        // Gallery
        let records = match &self.snapshot.records {
            RecordList::Loaded(records) => records.clone(),
            RecordList::Uninitialized => Vec::new(),
        };

        ui.horizontal(|ui| {
            ui.heading(RichText::new("Gallery").size(18.0));
            ui.label(
                RichText::new(format!("{} item(s)", records.len()))
                    .color(self.theme.text_secondary),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(!busy, self.theme.button_secondary("Refresh"))
                    .clicked()
                {
                    self.start_refresh();
                }
            });
        });
        ui.add_space(self.theme.spacing_xs);

        if records.is_empty() {
            ui.label(
                RichText::new("No GIFs yet. Submit the first one!")
                    .color(self.theme.text_secondary),
            );
            return;
        }

        let mut open_error: Option<String> = None;
        self.theme.frame_surface().show(ui, |ui| {
            for (index, record) in records.iter().enumerate() {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!("{:>3}.", index + 1))
                            .monospace()
                            .color(self.theme.text_secondary),
                    );
                    ui.monospace(RichText::new(&record.link).color(self.theme.accent));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("Open").clicked() {
                            if let Err(e) = open::that(&record.link) {
                                open_error = Some(format!("Failed to open link: {}", e));
                            }
                        }
                        if ui.small_button("📋").on_hover_text("Copy link").clicked() {
                            ui.output_mut(|o| o.copied_text = record.link.clone());
                        }
                    });
                });
                if index + 1 < records.len() {
                    ui.separator();
                }
            }
        });
        if let Some(message) = open_error {
            self.notifications.push_back(NotificationEntry::new(message));
        }
    }

    fn render_session_footer(&mut self, ui: &mut egui::Ui) {
        self.theme.frame_panel().show(ui, |ui| {
            egui::Grid::new("session_grid")
                .num_columns(2)
                .spacing([self.theme.spacing_md, self.theme.spacing_xs])
                .show(ui, |ui| {
                    ui.label(RichText::new("Wallet:").color(self.theme.text_secondary));
                    match &self.snapshot.session {
                        Some(address) => {
                            ui.monospace(RichText::new(shorten(address)).color(self.theme.success));
                        }
                        None => {
                            ui.label(
                                RichText::new("not connected").color(self.theme.text_secondary),
                            );
                        }
                    }
                    ui.end_row();

                    ui.label(RichText::new("Cluster:").color(self.theme.text_secondary));
                    ui.label(RichText::new(&self.config.cluster_label).color(self.theme.accent));
                    ui.end_row();

                    ui.label(RichText::new("Program:").color(self.theme.text_secondary));
                    ui.monospace(
                        RichText::new(&self.config.program.program_id)
                            .color(self.theme.text_secondary),
                    );
                    ui.end_row();
                });
        });
    }
}

fn shorten(address: &str) -> String {
    if address.len() > 14 {
        format!("{}…{}", &address[..6], &address[address.len() - 6..])
    } else {
        address.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::shorten;

    #[test]
    fn test_shorten_long_address() {
        let address = "ab".repeat(32);
        assert_eq!(shorten(&address), "ababab…bababa");
    }

    #[test]
    fn test_shorten_keeps_short_values() {
        assert_eq!(shorten("W1"), "W1");
    }
}
