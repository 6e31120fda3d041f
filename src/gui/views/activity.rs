//! Activity view: the persisted operation log.

use crate::gui::app::PortalApp;
use crate::operation_log;
use eframe::egui::{self, RichText};

impl PortalApp {
    pub(crate) fn view_activity(&mut self, ui: &mut egui::Ui) {
        // Auto-load the log on first visit.
        if self.log_view.content.starts_with("No activity yet") && self.log_view.job.is_none() {
            self.refresh_logs();
        }

        ui.horizontal(|ui| {
            ui.heading(RichText::new("Activity").size(18.0));
            let is_loading = self.log_view.job.is_some();
            if ui
                .add_enabled(
                    !is_loading,
                    self.theme
                        .button_secondary(if is_loading { "…" } else { "Refresh" }),
                )
                .clicked()
            {
                self.refresh_logs();
            }
        });
        ui.label(
            RichText::new(operation_log::log_file_path())
                .small()
                .color(self.theme.text_secondary),
        );
        ui.add_space(self.theme.spacing_xs);

        if let Some(err) = &self.log_view.error {
            ui.colored_label(self.theme.error, err);
        }

        self.theme.frame_surface().show(ui, |ui| {
            ui.set_min_height(300.0);
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(&self.log_view.content);
                });
        });
    }
}
