use crate::core::ViewpointPose;
use crate::host::PointerHit;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus Host/UI ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum EditorIntent {
    /// Aufnahme-Taste: startet, stoppt oder verwirft den Pfad
    RecordToggleRequested { pose: ViewpointPose },
    /// Expliziter Abbruch (Aufzeichnung verwerfen bzw. Fläche auflösen)
    CancelRequested,
    /// Edit-Taste: Edit-Sitzung betreten oder verlassen
    EditToggleRequested,
    /// Export als strukturiertes Literal
    ExportStructuredRequested,
    /// Export als Konstruktions-Snippet
    ExportSnippetRequested,
    /// View-Matrix des Blickpunkts hat sich geändert
    ViewChanged { pose: ViewpointPose },
    /// Pointer gedrückt (mit Treffer-Datensatz)
    PointerDown { hit: PointerHit },
    /// Pointer bewegt (mit Treffer-Datensatz)
    PointerMoved { hit: PointerHit },
    /// Pointer losgelassen
    PointerUp,
}
