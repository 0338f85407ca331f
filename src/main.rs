//! Agent Dashboard - Main Entry Point
//!
//! Native Rust GUI for listing, creating, and chatting with agents.

use agent_dashboard::state::AppState;
use agent_dashboard::ui::{render_app_layout, ActiveView};
use agent_dashboard::Config;
use eframe::egui;
use tokio::runtime::Runtime;
use tracing::info;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env();
    info!("Configuration loaded: {:?}", config);

    // Background requests run here; the window owns the main thread
    let runtime = Runtime::new()?;

    let state = AppState::new(config, runtime.handle().clone())?;
    info!(base_url = %state.config.api.base_url, "Agent backend configured");

    // Configure window options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Agent Dashboard")
            .with_inner_size([1100.0, 750.0])
            .with_min_inner_size([720.0, 520.0]),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Agent Dashboard",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Box::new(AgentDashboardApp::new(state))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run window: {}", e))?;

    info!("Window closed");
    Ok(())
}

/// Main application struct
/// Owns application state and the mounted view
struct AgentDashboardApp {
    /// Application state (shared agent list, route, UI preferences)
    state: AppState,
    /// Currently mounted view
    view: ActiveView,
}

impl AgentDashboardApp {
    /// Create a new application instance on the dashboard
    fn new(state: AppState) -> Self {
        let view = ActiveView::mount(&state.route, &state);
        Self { state, view }
    }
}

impl eframe::App for AgentDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Render the main application layout
        render_app_layout(ctx, &mut self.state, &mut self.view);
    }
}
