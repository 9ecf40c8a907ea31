//! Mapping von Host-Intents auf mutierende Editor-Commands.

use crate::export::ExportFormat;
use crate::host::PointerHit;

use super::{EditPhase, EditorCommand, EditorIntent, SessionPhase, SessionState};

/// Übersetzt einen `EditorIntent` in eine Sequenz ausführbarer `EditorCommand`s.
///
/// Alle Zustands- und Treffer-Vorbedingungen werden hier geprüft; ein Intent,
/// dessen Vorbedingung nicht erfüllt ist, ergibt eine leere Sequenz und bleibt
/// damit ein stilles No-op.
pub fn map_intent_to_commands(state: &SessionState, intent: EditorIntent) -> Vec<EditorCommand> {
    match intent {
        // Eine Taste, drei Bedeutungen: Start, Stop, Verwerfen
        EditorIntent::RecordToggleRequested { pose } => match state.phase {
            SessionPhase::Idle => vec![EditorCommand::StartRecording { pose }],
            SessionPhase::Recording => vec![EditorCommand::StopRecording],
            SessionPhase::Ready => vec![EditorCommand::CancelPath],
            SessionPhase::Editing(_) => vec![],
        },
        EditorIntent::CancelRequested => match state.phase {
            SessionPhase::Recording | SessionPhase::Ready => vec![EditorCommand::CancelPath],
            _ => vec![],
        },
        EditorIntent::EditToggleRequested => match state.phase {
            SessionPhase::Ready if state.has_surface() => vec![EditorCommand::BeginEdit],
            SessionPhase::Editing(_) => vec![EditorCommand::EndEdit],
            _ => vec![],
        },
        EditorIntent::ExportStructuredRequested => {
            export_when_ready(state, ExportFormat::Structured)
        }
        EditorIntent::ExportSnippetRequested => export_when_ready(state, ExportFormat::Snippet),
        EditorIntent::ViewChanged { pose } => {
            if state.subscriptions().view_changes {
                vec![EditorCommand::SampleViewpoint { pose }]
            } else {
                vec![]
            }
        }
        EditorIntent::PointerDown { hit } => {
            let Some(point) = surface_hit_point(state, &hit) else {
                return vec![];
            };
            match &state.phase {
                SessionPhase::Editing(EditPhase::AwaitFirstPick) => {
                    vec![EditorCommand::PickFirstPoint { point }]
                }
                SessionPhase::Editing(EditPhase::AwaitSecondPick { .. }) => {
                    vec![EditorCommand::PickSecondPoint { point }]
                }
                SessionPhase::Editing(EditPhase::Dragging { .. }) => {
                    vec![EditorCommand::ArmDrag { point }]
                }
                _ => vec![],
            }
        }
        EditorIntent::PointerMoved { hit } => {
            let Some(point) = surface_hit_point(state, &hit) else {
                return vec![];
            };
            match &state.phase {
                SessionPhase::Editing(EditPhase::Dragging {
                    anchor: Some(_), ..
                }) => vec![EditorCommand::DragTo { point }],
                _ => vec![],
            }
        }
        EditorIntent::PointerUp => match &state.phase {
            SessionPhase::Editing(EditPhase::Dragging { .. }) => {
                vec![EditorCommand::ReleaseDrag]
            }
            _ => vec![],
        },
    }
}

/// Export nur aus `Ready` mit vorhandenen Schienen.
fn export_when_ready(state: &SessionState, format: ExportFormat) -> Vec<EditorCommand> {
    match state.phase {
        SessionPhase::Ready if !state.rails.is_empty() => {
            vec![EditorCommand::ExportPath { format }]
        }
        _ => vec![],
    }
}

/// Treffpunkt, falls der Pointer die verwaltete Fläche getroffen hat und die
/// Sitzung Pointer-Ereignisse abonniert hat. Treffer auf fremde Objekte
/// werden in jedem Zustand ignoriert.
fn surface_hit_point(state: &SessionState, hit: &PointerHit) -> Option<glam::Vec3> {
    if !state.subscriptions().pointer_events {
        return None;
    }
    let surface_id = state.ribbon.surface_id()?;
    hit.point_on(surface_id)
}
