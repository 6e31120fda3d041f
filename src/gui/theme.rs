//! Centralized theme and styling for the GUI.

use eframe::egui;

/// Centralized theme: colors, spacing, and styled widget factories.
#[derive(Clone, Copy)]
pub struct AppTheme {
    pub background: egui::Color32,
    pub surface: egui::Color32,
    pub panel_fill: egui::Color32,
    pub text_primary: egui::Color32,
    pub text_secondary: egui::Color32,

    pub primary: egui::Color32,
    pub success: egui::Color32,
    pub warning: egui::Color32,
    pub error: egui::Color32,
    pub accent: egui::Color32,

    pub spacing_xs: f32,
    pub spacing_sm: f32,
    pub spacing_md: f32,
    pub spacing_lg: f32,

    pub button_medium: egui::Vec2,
    pub button_large: egui::Vec2,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self {
            // Dark portal palette: near-black base with magenta-to-cyan accents
            background: egui::Color32::from_rgb(10, 8, 16),
            surface: egui::Color32::from_rgb(20, 16, 30),
            panel_fill: egui::Color32::from_rgb(15, 12, 24),
            text_primary: egui::Color32::from_rgb(235, 230, 245),
            text_secondary: egui::Color32::from_rgb(150, 145, 165),

            primary: egui::Color32::from_rgb(190, 70, 235),   // magenta (#be46eb)
            success: egui::Color32::from_rgb(60, 215, 130),
            warning: egui::Color32::from_rgb(255, 180, 60),
            error: egui::Color32::from_rgb(255, 95, 95),
            accent: egui::Color32::from_rgb(70, 200, 235),    // cyan

            spacing_xs: 4.0,
            spacing_sm: 8.0,
            spacing_md: 16.0,
            spacing_lg: 24.0,

            button_medium: egui::vec2(140.0, 36.0),
            button_large: egui::vec2(220.0, 48.0),
        }
    }
}

impl AppTheme {
    /// Primary call-to-action button (connect, initialize, submit).
    pub fn button_primary(&self, text: &str) -> egui::Button<'_> {
        egui::Button::new(
            egui::RichText::new(text)
                .color(self.text_primary)
                .strong(),
        )
        .fill(self.surface)
        .stroke(egui::Stroke::new(2.0, self.primary))
        .min_size(self.button_medium)
    }

    /// Large variant for the single-affordance screens.
    pub fn button_hero(&self, text: &str) -> egui::Button<'_> {
        egui::Button::new(
            egui::RichText::new(text)
                .size(18.0)
                .color(self.text_primary)
                .strong(),
        )
        .fill(self.surface)
        .stroke(egui::Stroke::new(3.0, self.primary))
        .min_size(self.button_large)
    }

    /// Low-emphasis button (refresh, copy, open).
    pub fn button_secondary(&self, text: &str) -> egui::Button<'_> {
        egui::Button::new(egui::RichText::new(text).color(self.text_secondary))
            .fill(self.panel_fill)
            .stroke(egui::Stroke::new(1.0, self.text_secondary))
    }

    /// Framed panel for grouped content.
    pub fn frame_panel(&self) -> egui::Frame {
        egui::Frame::none()
            .fill(self.panel_fill)
            .stroke(egui::Stroke::new(1.0, self.surface))
            .rounding(egui::Rounding::same(6.0))
            .inner_margin(egui::Margin::same(self.spacing_md))
    }

    /// Flat surface for scrollable content.
    pub fn frame_surface(&self) -> egui::Frame {
        egui::Frame::none()
            .fill(self.surface)
            .rounding(egui::Rounding::same(4.0))
            .inner_margin(egui::Margin::same(self.spacing_sm))
    }
}

/// Apply the theme to the egui context.
pub fn configure_style(ctx: &egui::Context, theme: &AppTheme) {
    let mut style = (*ctx.style()).clone();
    style.visuals.dark_mode = true;
    style.visuals.panel_fill = theme.background;
    style.visuals.window_fill = theme.background;
    style.visuals.extreme_bg_color = theme.surface;
    style.visuals.override_text_color = Some(theme.text_primary);
    style.visuals.widgets.noninteractive.bg_fill = theme.panel_fill;
    style.visuals.widgets.inactive.bg_fill = theme.surface;
    style.visuals.widgets.hovered.bg_fill = theme.surface;
    style.visuals.selection.bg_fill = theme.primary.linear_multiply(0.4);
    style.spacing.item_spacing = egui::vec2(theme.spacing_sm, theme.spacing_sm);
    ctx.set_style(style);
}
