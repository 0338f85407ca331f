//! Main application layout
//!
//! Handles the menu bar, route dispatch, and view mounting.

use crate::router::Route;
use crate::state::AppState;
use crate::ui::agent_chat::AgentChatView;
use crate::ui::create_agent::CreateAgentForm;
use crate::ui::dashboard::render_dashboard;
use crate::ui::not_found::render_not_found;
use eframe::egui;
use std::time::Duration;

/// Repaint interval while requests are in flight
const BUSY_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

/// The mounted view and its view-local state
///
/// Replacing the view drops its state, including any pending results.
#[derive(Debug)]
pub enum ActiveView {
    /// Agent list
    Dashboard,
    /// Create-agent form
    CreateAgent(CreateAgentForm),
    /// Chat with one agent
    Chat(Box<AgentChatView>),
    /// Unmatched path
    NotFound(String),
}

impl ActiveView {
    /// Build the view for a route
    pub fn mount(route: &Route, state: &AppState) -> Self {
        match route {
            Route::Dashboard => ActiveView::Dashboard,
            Route::CreateAgent => ActiveView::CreateAgent(CreateAgentForm::new()),
            Route::Chat(name) => {
                ActiveView::Chat(Box::new(AgentChatView::new(state, Some(name.clone()))))
            }
            Route::NotFound(path) => ActiveView::NotFound(path.clone()),
        }
    }

    /// Apply completed view-local background work
    pub fn poll(&mut self, state: &mut AppState) -> Option<Route> {
        match self {
            ActiveView::CreateAgent(form) => form.poll(&mut state.agents),
            ActiveView::Chat(chat) => {
                chat.poll();
                None
            }
            ActiveView::Dashboard | ActiveView::NotFound(_) => None,
        }
    }

    /// Whether view-local work is in flight
    pub fn busy(&self) -> bool {
        match self {
            ActiveView::CreateAgent(form) => form.submitting(),
            ActiveView::Chat(chat) => chat.busy(),
            ActiveView::Dashboard | ActiveView::NotFound(_) => false,
        }
    }
}

/// Navigate and remount the view if the route changed
pub fn apply_navigation(state: &mut AppState, view: &mut ActiveView, route: Route) {
    if state.navigate(route) {
        // the form is dropped, so nobody will collect its outcome
        if let ActiveView::CreateAgent(CreateAgentForm {
            pending: Some(ticket),
            ..
        }) = view
        {
            state.agents.abandon_create(*ticket);
        }
        *view = ActiveView::mount(&state.route, state);
    }
}

/// Render the main application layout
/// Polls background work, draws the menu bar and the active view
pub fn render_app_layout(ctx: &egui::Context, state: &mut AppState, view: &mut ActiveView) {
    state.agents.poll();
    let mut navigate = view.poll(state);

    // Menu bar at the top
    if let Some(route) = render_menu_bar(ctx, state) {
        navigate = Some(route);
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        let requested = match view {
            ActiveView::Dashboard => render_dashboard(ctx, ui, &state.agents),
            ActiveView::CreateAgent(form) => form.render(ui, &mut state.agents),
            ActiveView::Chat(chat) => chat.render(ui, &state.agents),
            ActiveView::NotFound(path) => render_not_found(ui, path),
        };
        if requested.is_some() {
            navigate = requested;
        }
    });

    if let Some(route) = navigate {
        apply_navigation(state, view, route);
    }

    if state.busy() || view.busy() {
        ctx.request_repaint_after(BUSY_REPAINT_INTERVAL);
    }
}

/// Render the top menu bar
/// Returns a route when a navigation entry was used
fn render_menu_bar(ctx: &egui::Context, state: &mut AppState) -> Option<Route> {
    let mut navigate = None;
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            // File menu
            ui.menu_button("File", |ui| {
                if ui.button("Dashboard").clicked() {
                    navigate = Some(Route::Dashboard);
                    ui.close_menu();
                }
                if ui.button("New Agent").clicked() {
                    navigate = Some(Route::CreateAgent);
                    ui.close_menu();
                }
                if ui.button("Refresh Agents").clicked() {
                    state.agents.fetch_agents();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            // View menu
            ui.menu_button("View", |ui| {
                if ui.checkbox(&mut state.ui_state.dark_mode, "Dark Mode").changed() {
                    ctx.set_visuals(if state.ui_state.dark_mode {
                        egui::Visuals::dark()
                    } else {
                        egui::Visuals::light()
                    });
                }
            });

            ui.separator();

            // Address field
            let response = ui.add(
                egui::TextEdit::singleline(&mut state.ui_state.address)
                    .desired_width(280.0)
                    .font(egui::TextStyle::Monospace),
            );
            let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Go").clicked() || entered {
                navigate = Some(Route::parse(&state.ui_state.address));
            }

            if state.agents.loading() {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.spinner();
                });
            }
        });
    });
    navigate
}
