//! Editor-Controller für zentrale Event-Verarbeitung.

use super::{EditorCommand, EditorIntent, SessionState};

/// Orchestriert Host-Intents und Handler auf dem Sitzungszustand.
#[derive(Default)]
pub struct EditorController;

impl EditorController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut SessionState,
        intent: EditorIntent,
    ) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(
        &self,
        state: &SessionState,
        intent: EditorIntent,
    ) -> Vec<EditorCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem Sitzungszustand aus.
    /// Dispatcht an Feature-Handler in `handlers/`; die UI-Affordanzen
    /// werden nach jedem Command aktualisiert.
    pub fn handle_command(
        &mut self,
        state: &mut SessionState,
        command: EditorCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Aufzeichnung ===
            EditorCommand::StartRecording { pose } => {
                handlers::recording::start_recording(state, &pose)
            }
            EditorCommand::StopRecording => handlers::recording::stop_recording(state),
            EditorCommand::CancelPath => handlers::recording::cancel_path(state),
            EditorCommand::SampleViewpoint { pose } => {
                handlers::recording::sample_viewpoint(state, &pose)
            }

            // === Edit-Sitzung ===
            EditorCommand::BeginEdit => handlers::editing::begin_edit(state),
            EditorCommand::EndEdit => handlers::editing::end_edit(state),
            EditorCommand::PickFirstPoint { point } => {
                handlers::editing::pick_first_point(state, point)
            }
            EditorCommand::PickSecondPoint { point } => {
                handlers::editing::pick_second_point(state, point)
            }
            EditorCommand::ArmDrag { point } => handlers::editing::arm_drag(state, point),
            EditorCommand::DragTo { point } => handlers::editing::drag_to(state, point),
            EditorCommand::ReleaseDrag => handlers::editing::release_drag(state),

            // === Export ===
            EditorCommand::ExportPath { format } => handlers::export::export_path(state, format)?,
        }

        state.refresh_ui();
        Ok(())
    }
}
