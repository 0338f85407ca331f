//! Not-found view
//!
//! Fallback for unmatched paths.

use crate::router::Route;
use crate::ui::components::*;
use eframe::egui;

/// Render the fallback view for `path`
/// Returns the dashboard route when the link is clicked
pub fn render_not_found(ui: &mut egui::Ui, path: &str) -> Option<Route> {
    let mut navigate = None;
    ui.vertical_centered(|ui| {
        ui.add_space(100.0);
        ui.label(egui::RichText::new("404").size(64.0).strong());
        ui.add_space(12.0);
        ui.label(egui::RichText::new("Page not found").size(20.0));
        ui.add_space(4.0);
        ui.label(egui::RichText::new(path).monospace().weak());
        ui.add_space(28.0);
        if primary_button(ui, "Back to Dashboard", true).clicked() {
            navigate = Some(Route::Dashboard);
        }
    });
    navigate
}
