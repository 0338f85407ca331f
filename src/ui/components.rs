//! Reusable UI components
//!
//! Provides common UI elements for the application.

use crate::state::AgentStatus;
use eframe::egui;

/// Badge fill for ACTIVE
pub const ACTIVE_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 170, 0);
/// Badge fill for INACTIVE
pub const INACTIVE_COLOR: egui::Color32 = egui::Color32::from_rgb(210, 0, 0);
/// Badge fill for every other status
pub const DEFAULT_STATUS_COLOR: egui::Color32 = egui::Color32::from_rgb(210, 170, 0);
/// Accent used for primary actions and user chat bubbles
pub const ACCENT_COLOR: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);
/// Inline error text
pub const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);

/// Badge color for a status
/// ACTIVE (green), INACTIVE (red), anything else (yellow)
pub fn status_color(status: AgentStatus) -> egui::Color32 {
    match status {
        AgentStatus::Active => ACTIVE_COLOR,
        AgentStatus::Inactive => INACTIVE_COLOR,
        _ => DEFAULT_STATUS_COLOR,
    }
}

/// Render a status badge: status text on a colored pill
pub fn status_badge(ui: &mut egui::Ui, status: AgentStatus) -> egui::Response {
    egui::Frame::none()
        .fill(status_color(status))
        .rounding(egui::Rounding::same(4.0))
        .inner_margin(egui::Margin::symmetric(6.0, 2.0))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(status.as_str())
                    .color(egui::Color32::WHITE)
                    .size(11.0),
            );
        })
        .response
}

/// Render a primary action button
pub fn primary_button(ui: &mut egui::Ui, text: &str, enabled: bool) -> egui::Response {
    ui.add_enabled(
        enabled,
        egui::Button::new(egui::RichText::new(text).strong().color(egui::Color32::WHITE))
            .fill(ACCENT_COLOR),
    )
}

/// Render a secondary button
pub fn secondary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.button(text)
}

/// Render a back link
pub fn back_button(ui: &mut egui::Ui) -> egui::Response {
    ui.button("← Back")
}

/// Centered loading indicator
pub fn loading_view(ui: &mut egui::Ui, text: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.spinner();
        ui.add_space(8.0);
        ui.label(egui::RichText::new(text).weak());
    });
}

/// Centered error message
pub fn error_view(ui: &mut egui::Ui, text: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(egui::RichText::new(text).color(ERROR_COLOR).size(15.0));
    });
}

/// Inline error banner
pub fn error_banner(ui: &mut egui::Ui, text: &str) {
    egui::Frame::none()
        .fill(ERROR_COLOR.linear_multiply(0.15))
        .stroke(egui::Stroke::new(1.0, ERROR_COLOR))
        .rounding(egui::Rounding::same(4.0))
        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(text).color(ERROR_COLOR));
        });
}

/// Round "+" button floating over the bottom-right corner
/// Returns true when clicked
pub fn floating_action_button(ctx: &egui::Context, id: &str, tooltip: &str) -> bool {
    egui::Area::new(egui::Id::new(id))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -24.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.add(
                egui::Button::new(
                    egui::RichText::new("+")
                        .size(28.0)
                        .color(egui::Color32::WHITE),
                )
                .fill(ACCENT_COLOR)
                .rounding(egui::Rounding::same(28.0))
                .min_size(egui::vec2(56.0, 56.0)),
            )
            .on_hover_text(tooltip)
            .clicked()
        })
        .inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_color_mapping() {
        for status in AgentStatus::ALL {
            let expected = match status {
                AgentStatus::Active => ACTIVE_COLOR,
                AgentStatus::Inactive => INACTIVE_COLOR,
                AgentStatus::Created | AgentStatus::Creating => DEFAULT_STATUS_COLOR,
            };
            assert_eq!(status_color(status), expected);
        }
    }

    #[test]
    fn test_status_colors_are_distinct() {
        assert_ne!(ACTIVE_COLOR, INACTIVE_COLOR);
        assert_ne!(ACTIVE_COLOR, DEFAULT_STATUS_COLOR);
        assert_ne!(INACTIVE_COLOR, DEFAULT_STATUS_COLOR);
    }
}
