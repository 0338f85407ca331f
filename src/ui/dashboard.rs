//! Dashboard view
//!
//! Agent cards, per-card chat action, and the create-agent button.

use crate::router::Route;
use crate::state::{Agent, AgentsStore};
use crate::ui::components::*;
use eframe::egui;

const CARD_WIDTH: f32 = 260.0;

/// Render the agent dashboard
/// Returns the route to navigate to, if an action was taken
pub fn render_dashboard(
    ctx: &egui::Context,
    ui: &mut egui::Ui,
    store: &AgentsStore,
) -> Option<Route> {
    let mut navigate = None;

    if floating_action_button(ctx, "create_agent_fab", "Add new agent") {
        navigate = Some(Route::CreateAgent);
    }

    if store.loading() {
        loading_view(ui, "Loading agents...");
        return navigate;
    }
    if let Some(error) = store.error() {
        error_view(ui, error);
        return navigate;
    }

    ui.add_space(12.0);
    ui.heading(egui::RichText::new("Agent Dashboard").size(22.0));
    ui.add_space(12.0);

    egui::ScrollArea::vertical()
        .id_source("agent_cards_scroll")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            if store.agents().is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label(egui::RichText::new("No agents found.").italics().weak().size(14.0));
                });
                return;
            }

            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);
                for agent in store.agents() {
                    if agent_card(ui, agent) {
                        navigate = Some(Route::Chat(agent.agent_name.clone()));
                    }
                }
            });
            // keep the last row clear of the floating button
            ui.add_space(80.0);
        });

    navigate
}

/// Render one agent card
/// Returns true when "Start Chat" was clicked
fn agent_card(ui: &mut egui::Ui, agent: &Agent) -> bool {
    let mut clicked = false;
    egui::Frame::group(ui.style())
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&agent.agent_name).strong().size(16.0));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        status_badge(ui, agent.status);
                    });
                });
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("Game:").strong());
                    ui.label(&agent.game_name);
                });

                if let Some(collection) = agent.display_collection() {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new("Collection:").strong());
                        ui.label(collection);
                    });
                }

                if let Some(hints) = agent.display_hints() {
                    ui.add_space(4.0);
                    ui.label(egui::RichText::new(format!("\"{}\"", hints)).italics().size(12.0));
                }

                ui.add_space(10.0);
                let button = egui::Button::new(
                    egui::RichText::new("Start Chat").color(egui::Color32::WHITE),
                )
                .fill(ACCENT_COLOR)
                .min_size(egui::vec2(CARD_WIDTH, 28.0));
                clicked = ui.add(button).clicked();
            });
        });
    clicked
}
