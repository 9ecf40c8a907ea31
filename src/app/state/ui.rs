use super::session::{EditPhase, SessionPhase};

/// Symbol der Aufnahme-Taste
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordControlIcon {
    /// Aufzeichnung kann starten
    Play,
    /// Aufzeichnung läuft
    Pause,
    /// Fläche existiert; Taste verwirft den Pfad
    Undo,
}

/// Beschriftung der Edit-Taste während einer Edit-Sitzung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditControlLabel {
    /// Erster Eckpunkt fehlt noch
    PickFirst,
    /// Zweiter Eckpunkt fehlt noch
    PickSecond,
    /// Selektion steht, Zugriff möglich
    Drag,
    /// Anker gegriffen, Ziehen aktiv
    Grabbed,
}

/// Sichtbarkeits- und Symbolzustand der Sitzungs-Bedienelemente.
///
/// Vollständig aus der Phase abgeleitet; der Host liest diesen Zustand nach
/// jedem verarbeiteten Intent und spiegelt ihn in seine Widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiState {
    /// Symbol der Aufnahme-Taste
    pub record_icon: RecordControlIcon,
    /// Aufnahme-Taste sichtbar
    pub record_visible: bool,
    /// Edit-Taste sichtbar
    pub edit_visible: bool,
    /// Export-Tasten sichtbar
    pub export_visible: bool,
    /// Beschriftung der Edit-Taste (nur während einer Edit-Sitzung)
    pub edit_label: Option<EditControlLabel>,
}

impl Default for UiState {
    fn default() -> Self {
        Self::for_phase(&SessionPhase::Idle)
    }
}

impl UiState {
    /// Leitet die Affordanzen aus der Sitzungsphase ab.
    pub fn for_phase(phase: &SessionPhase) -> Self {
        match phase {
            SessionPhase::Idle => Self {
                record_icon: RecordControlIcon::Play,
                record_visible: true,
                edit_visible: false,
                export_visible: false,
                edit_label: None,
            },
            SessionPhase::Recording => Self {
                record_icon: RecordControlIcon::Pause,
                record_visible: true,
                edit_visible: false,
                export_visible: false,
                edit_label: None,
            },
            SessionPhase::Ready => Self {
                record_icon: RecordControlIcon::Undo,
                record_visible: true,
                edit_visible: true,
                export_visible: true,
                edit_label: None,
            },
            SessionPhase::Editing(edit) => Self {
                record_icon: RecordControlIcon::Undo,
                record_visible: false,
                edit_visible: true,
                export_visible: false,
                edit_label: Some(match edit {
                    EditPhase::AwaitFirstPick => EditControlLabel::PickFirst,
                    EditPhase::AwaitSecondPick { .. } => EditControlLabel::PickSecond,
                    EditPhase::Dragging { anchor: None, .. } => EditControlLabel::Drag,
                    EditPhase::Dragging { anchor: Some(_), .. } => EditControlLabel::Grabbed,
                }),
            },
        }
    }
}
