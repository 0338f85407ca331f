//! Create agent view
//!
//! Form state, validation, submission, and rendering.

use crate::api::CreateAgentPayload;
use crate::error::ClientError;
use crate::router::Route;
use crate::state::{AgentStatus, AgentsStore, CreateTicket, NewAgent};
use crate::ui::components::*;
use eframe::egui;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extensions accepted for the manual file
pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["pdf", "doc", "docx", "txt"];

/// Shown when a required field is empty
pub const REQUIRED_FIELDS_ERROR: &str = "Agent name and game name are required";

/// Create-agent form state
#[derive(Debug, Clone, Default)]
pub struct CreateAgentForm {
    /// Required agent name
    pub agent_name: String,
    /// Required game name
    pub game_name: String,
    /// Optional behavior hints
    pub temperature_hints: String,
    /// Initial status
    pub status: AgentStatus,
    /// Optional collection
    pub collection_name: String,
    /// Chosen manual file
    pub manual_file: Option<PathBuf>,
    /// Path typed in the file field
    pub manual_file_input: String,
    /// Inline error shown above the form
    pub form_error: Option<String>,
    /// Ticket for the submission in flight, if any
    pub pending: Option<CreateTicket>,
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Whether a file has one of the accepted extensions
pub fn is_accepted_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()))
}

impl CreateAgentForm {
    /// Empty form with status CREATED
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this form's submission is in flight
    pub fn submitting(&self) -> bool {
        self.pending.is_some()
    }

    /// Check required fields and build the agent fields
    ///
    /// # Errors
    /// * Returns `ClientError::Validation` if agent name or game name is blank
    pub fn validate(&self) -> Result<NewAgent, ClientError> {
        if self.agent_name.trim().is_empty() || self.game_name.trim().is_empty() {
            return Err(ClientError::Validation(REQUIRED_FIELDS_ERROR.to_string()));
        }
        Ok(NewAgent {
            agent_name: self.agent_name.trim().to_string(),
            game_name: self.game_name.trim().to_string(),
            temperature_hints: optional(&self.temperature_hints),
            status: self.status,
            collection_name: optional(&self.collection_name),
        })
    }

    /// Multipart payload carrying every field and the optional file
    pub fn payload(&self) -> Result<CreateAgentPayload, ClientError> {
        Ok(CreateAgentPayload::Multipart {
            agent: self.validate()?,
            manual_file: self.manual_file.clone(),
        })
    }

    /// Choose the manual file
    /// Returns false (and sets the inline error) for unsupported types
    pub fn set_manual_file(&mut self, path: PathBuf) -> bool {
        if !is_accepted_file(&path) {
            self.form_error = Some(format!(
                "Unsupported file type: {} (accepted: .pdf, .doc, .docx, .txt)",
                path.display()
            ));
            return false;
        }
        self.manual_file_input = path.display().to_string();
        self.manual_file = Some(path);
        self.form_error = None;
        true
    }

    /// Forget the chosen manual file
    pub fn clear_manual_file(&mut self) {
        self.manual_file = None;
        self.manual_file_input.clear();
    }

    /// Validate and start the create call
    /// Returns true if a request was started
    pub fn submit(&mut self, store: &mut AgentsStore) -> bool {
        if self.submitting() {
            return false;
        }
        match self.payload() {
            Ok(payload) => {
                debug!(agent = %payload.agent_name(), "Submitting new agent");
                self.form_error = None;
                self.pending = Some(store.add_agent(payload));
                true
            }
            Err(e) => {
                self.form_error = Some(e.to_string());
                false
            }
        }
    }

    /// Pick up the result of a submission
    /// Returns the dashboard route after a successful create
    pub fn poll(&mut self, store: &mut AgentsStore) -> Option<Route> {
        let ticket = self.pending?;
        let outcome = store.take_create_outcome(ticket)?;
        self.pending = None;
        match outcome {
            Ok(_) => Some(Route::Dashboard),
            Err(message) => {
                self.form_error = Some(message);
                None
            }
        }
    }

    /// Render the form
    /// Returns the route to navigate to, if any
    pub fn render(&mut self, ui: &mut egui::Ui, store: &mut AgentsStore) -> Option<Route> {
        let mut navigate = None;

        let dropped = ui.ctx().input(|i| i.raw.dropped_files.clone());
        if let Some(path) = dropped.into_iter().find_map(|file| file.path) {
            self.set_manual_file(path);
        }

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            if back_button(ui).clicked() {
                navigate = Some(Route::Dashboard);
            }
            ui.add_space(12.0);
            ui.heading(egui::RichText::new("Create New Agent").size(22.0));
        });
        ui.add_space(12.0);

        if let Some(error) = &self.form_error {
            error_banner(ui, error);
            ui.add_space(8.0);
        }

        egui::ScrollArea::vertical()
            .id_source("create_agent_scroll")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.set_max_width(560.0);
                egui::Grid::new("create_agent_grid")
                    .num_columns(2)
                    .spacing([16.0, 12.0])
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new("Agent Name *").strong());
                        ui.add(
                            egui::TextEdit::singleline(&mut self.agent_name)
                                .hint_text("Unique name for the agent")
                                .desired_width(360.0),
                        );
                        ui.end_row();

                        ui.label(egui::RichText::new("Game Name *").strong());
                        ui.add(
                            egui::TextEdit::singleline(&mut self.game_name)
                                .hint_text("Game associated with the agent")
                                .desired_width(360.0),
                        );
                        ui.end_row();

                        ui.label(egui::RichText::new("Temperature Hints").strong());
                        ui.add(
                            egui::TextEdit::multiline(&mut self.temperature_hints)
                                .hint_text("Hints about the agent's behavior (optional)")
                                .desired_rows(4)
                                .desired_width(360.0),
                        );
                        ui.end_row();

                        ui.label(egui::RichText::new("Status").strong());
                        egui::ComboBox::from_id_source("create_agent_status")
                            .selected_text(self.status.as_str())
                            .show_ui(ui, |ui| {
                                for status in AgentStatus::ALL {
                                    ui.selectable_value(&mut self.status, status, status.as_str());
                                }
                            });
                        ui.end_row();

                        ui.label(egui::RichText::new("Collection Name").strong());
                        ui.add(
                            egui::TextEdit::singleline(&mut self.collection_name)
                                .hint_text("Knowledge collection (optional)")
                                .desired_width(360.0),
                        );
                        ui.end_row();

                        ui.label(egui::RichText::new("Game Manual").strong());
                        ui.vertical(|ui| {
                            ui.horizontal(|ui| {
                                let response = ui.add(
                                    egui::TextEdit::singleline(&mut self.manual_file_input)
                                        .hint_text("Path to .pdf, .doc, .docx or .txt, or drop a file")
                                        .desired_width(280.0),
                                );
                                let confirmed = response.lost_focus()
                                    && ui.input(|i| i.key_pressed(egui::Key::Enter));
                                if secondary_button(ui, "Attach").clicked() || confirmed {
                                    let input = self.manual_file_input.trim().to_string();
                                    if input.is_empty() {
                                        self.clear_manual_file();
                                    } else {
                                        self.set_manual_file(PathBuf::from(input));
                                    }
                                }
                            });
                            if let Some(path) = self.manual_file.clone() {
                                ui.horizontal(|ui| {
                                    let name = path
                                        .file_name()
                                        .map(|n| n.to_string_lossy().into_owned())
                                        .unwrap_or_else(|| path.display().to_string());
                                    ui.label(
                                        egui::RichText::new(format!("Selected file: {}", name))
                                            .weak()
                                            .size(12.0),
                                    );
                                    if ui.small_button("✕").clicked() {
                                        self.clear_manual_file();
                                    }
                                });
                            }
                        });
                        ui.end_row();
                    });

                ui.add_space(20.0);
                ui.horizontal(|ui| {
                    if secondary_button(ui, "Cancel").clicked() {
                        navigate = Some(Route::Dashboard);
                    }
                    ui.add_space(12.0);
                    let label = if self.submitting() {
                        "Creating..."
                    } else {
                        "Create Agent"
                    };
                    if primary_button(ui, label, !self.submitting()).clicked() {
                        self.submit(store);
                    }
                });
            });

        navigate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::AgentService;
    use crate::state::AgentsEvent;
    use tokio::runtime::Handle;

    fn filled() -> CreateAgentForm {
        CreateAgentForm {
            agent_name: "SuperBot".into(),
            game_name: "Chess".into(),
            ..CreateAgentForm::new()
        }
    }

    #[test]
    fn test_defaults_to_created() {
        assert_eq!(CreateAgentForm::new().status, AgentStatus::Created);
    }

    #[test]
    fn test_required_fields() {
        let mut form = filled();
        form.agent_name = "  ".into();
        assert!(matches!(form.validate(), Err(ClientError::Validation(_))));

        let mut form = filled();
        form.game_name.clear();
        assert!(matches!(form.validate(), Err(ClientError::Validation(_))));

        assert!(filled().validate().is_ok());
    }

    #[test]
    fn test_blank_optionals_become_none() {
        let mut form = filled();
        form.temperature_hints = "  ".into();
        form.collection_name = "chess_books".into();
        let agent = form.validate().unwrap();
        assert!(agent.temperature_hints.is_none());
        assert_eq!(agent.collection_name.as_deref(), Some("chess_books"));
    }

    #[test]
    fn test_payload_is_multipart_with_file() {
        let mut form = filled();
        assert!(form.set_manual_file(PathBuf::from("/tmp/manual.PDF")));
        match form.payload().unwrap() {
            CreateAgentPayload::Multipart { agent, manual_file } => {
                assert_eq!(agent.agent_name, "SuperBot");
                assert_eq!(manual_file, Some(PathBuf::from("/tmp/manual.PDF")));
            }
            other => panic!("Expected multipart payload, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unsupported_file() {
        let mut form = filled();
        assert!(!form.set_manual_file(PathBuf::from("/tmp/picture.png")));
        assert!(form.manual_file.is_none());
        assert!(form.form_error.is_some());
    }

    #[tokio::test]
    async fn test_invalid_submit_keeps_form_and_sends_nothing() {
        let service = AgentService::from_base_url("http://127.0.0.1:1").unwrap();
        let mut store = AgentsStore::idle(service, Handle::current());
        let mut form = CreateAgentForm {
            game_name: "Chess".into(),
            ..CreateAgentForm::new()
        };

        assert!(!form.submit(&mut store));
        assert_eq!(form.form_error.as_deref(), Some(REQUIRED_FIELDS_ERROR));
        assert!(!form.submitting());
        assert!(!store.busy());
        assert_eq!(form.game_name, "Chess");
    }

    #[tokio::test]
    async fn test_dropped_form_outcome_does_not_reach_next_form() {
        // nothing listens here; both calls fail once they are settled
        let service = AgentService::from_base_url("http://127.0.0.1:1").unwrap();
        let mut store = AgentsStore::idle(service, Handle::current());

        let mut first = filled();
        assert!(first.submit(&mut store));
        let abandoned = first.pending.unwrap();
        store.abandon_create(abandoned);
        drop(first);

        let mut second = filled();
        assert!(second.submit(&mut store));

        // the abandoned call's late failure lands first
        store.apply(AgentsEvent::Created(
            abandoned,
            Err(ClientError::Status {
                status: 500,
                body: String::new(),
            }),
        ));
        assert_eq!(second.poll(&mut store), None);
        assert!(second.submitting());
        assert!(second.form_error.is_none());
        assert!(store.creating());

        // the second form only resolves on its own result
        while second.submitting() {
            store.settle().await;
            second.poll(&mut store);
        }
        assert!(second.form_error.is_some());
        assert!(!store.creating());
    }
}
