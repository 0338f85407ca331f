//! Agent chat view
//!
//! Resolves the agent from the route and hosts a single-agent transcript.

use crate::router::Route;
use crate::state::{AgentResource, AgentsStore, AppState, ChatMessage, ChatSession, Sender};
use crate::ui::components::*;
use eframe::egui;

/// Chat view state for one agent
#[derive(Debug)]
pub struct AgentChatView {
    /// Agent being chatted with
    pub resource: AgentResource,
    /// Transcript and in-flight replies
    pub session: ChatSession,
    /// Text in the input field
    pub input: String,
}

impl AgentChatView {
    /// Start resolving `agent_name` and open an empty transcript
    pub fn new(state: &AppState, agent_name: Option<String>) -> Self {
        let resource = AgentResource::new(state.service(), state.runtime.clone(), agent_name.clone());
        let session = ChatSession::new(
            agent_name.unwrap_or_default(),
            state.runtime.clone(),
            state.config.ui.chat_reply_delay,
        );
        Self {
            resource,
            session,
            input: String::new(),
        }
    }

    /// Apply completed background work
    pub fn poll(&mut self) {
        self.resource.poll();
        self.session.poll();
    }

    /// Whether anything is still in flight
    pub fn busy(&self) -> bool {
        self.resource.loading() || self.session.awaiting_reply()
    }

    /// Send whatever is in the input field
    /// Returns true if a message was sent
    pub fn send(&mut self, store: &AgentsStore) -> bool {
        let sent = self.session.send(store, &self.input);
        if sent {
            self.input.clear();
        }
        sent
    }

    /// Render the chat view
    /// Returns the route to navigate to, if any
    pub fn render(&mut self, ui: &mut egui::Ui, store: &AgentsStore) -> Option<Route> {
        if self.resource.loading() {
            loading_view(ui, "Loading...");
            return None;
        }
        let agent = match (self.resource.error(), self.resource.agent()) {
            (None, Some(agent)) => agent.clone(),
            (error, _) => {
                let mut navigate = None;
                ui.add_space(12.0);
                if back_button(ui).clicked() {
                    navigate = Some(Route::Dashboard);
                }
                error_view(ui, error.unwrap_or("Agent not found"));
                return navigate;
            }
        };

        let mut navigate = None;

        // Header
        egui::TopBottomPanel::top("chat_header").show_inside(ui, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if back_button(ui).clicked() {
                    navigate = Some(Route::Dashboard);
                }
                ui.add_space(12.0);
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&agent.agent_name).strong().size(18.0));
                    ui.label(egui::RichText::new(&agent.game_name).weak().size(12.0));
                });
            });
            ui.add_space(8.0);
        });

        // Input form
        egui::TopBottomPanel::bottom("chat_input").show_inside(ui, |ui| {
            ui.add_space(8.0);
            if let Some(error) = self.session.error() {
                ui.label(egui::RichText::new(error).color(ERROR_COLOR).size(12.0));
                ui.add_space(4.0);
            }
            ui.horizontal(|ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.input)
                        .hint_text("Type your message...")
                        .desired_width(ui.available_width() - 80.0),
                );
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if primary_button(ui, "Send", true).clicked() || submitted {
                    self.send(store);
                    response.request_focus();
                }
            });
            ui.add_space(8.0);
        });

        // Transcript
        egui::CentralPanel::default().show_inside(ui, |ui| {
            egui::ScrollArea::vertical()
                .id_source("chat_transcript_scroll")
                .auto_shrink([false; 2])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    if self.session.transcript().is_empty() {
                        ui.vertical_centered(|ui| {
                            ui.add_space(40.0);
                            ui.label(
                                egui::RichText::new(format!(
                                    "Start a conversation with {}!",
                                    agent.agent_name
                                ))
                                .weak(),
                            );
                        });
                    }
                    for message in self.session.transcript() {
                        chat_bubble(ui, message);
                        ui.add_space(6.0);
                    }
                    if self.session.awaiting_reply() {
                        ui.horizontal(|ui| {
                            ui.spinner();
                        });
                    }
                });
        });

        navigate
    }
}

/// Render one transcript entry: user on the right, agent on the left
fn chat_bubble(ui: &mut egui::Ui, message: &ChatMessage) {
    let max_width = ui.available_width() * 0.75;
    let (layout, fill, text_color) = match message.sender {
        Sender::User => (
            egui::Layout::right_to_left(egui::Align::TOP),
            ACCENT_COLOR,
            egui::Color32::WHITE,
        ),
        Sender::Agent => (
            egui::Layout::left_to_right(egui::Align::TOP),
            ui.visuals().faint_bg_color,
            ui.visuals().text_color(),
        ),
    };
    ui.with_layout(layout, |ui| {
        egui::Frame::none()
            .fill(fill)
            .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
            .rounding(egui::Rounding::same(8.0))
            .inner_margin(egui::Margin::same(10.0))
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                ui.label(egui::RichText::new(&message.text).color(text_color));
            });
    });
}
