//! Handler für den Pfad-Export über die Datei-Senke.

use crate::app::{SessionPhase, SessionState};
use crate::export::{self, ExportFormat};

/// Serialisiert die Schienen, schreibt sie über die Senke und leert die
/// Sitzung.
///
/// Nur aus `Ready` mit nicht-leeren Schienen; sonst ein No-op. Schlägt das
/// Schreiben fehl, bleibt die Sitzung unverändert (Fehler propagiert).
pub fn export_path(state: &mut SessionState, format: ExportFormat) -> anyhow::Result<()> {
    if !matches!(state.phase, SessionPhase::Ready) || state.rails.is_empty() {
        return Ok(());
    }

    let surface_name = state.ribbon.surface_name();
    let decimals = state.options.export_decimals;
    let content = match format {
        ExportFormat::Structured => export::to_structured_text(&state.rails, decimals),
        ExportFormat::Snippet => export::to_snippet_text(&state.rails, decimals, &surface_name),
    };
    let filename = format.filename(&surface_name);

    state.sink.save(&filename, &content)?;

    // Erst nach erfolgreichem Schreiben wird die Sitzung geleert
    state.ribbon.dispose();
    state.rails.clear();
    state.phase = SessionPhase::Idle;
    log::info!("{} exportiert ({:?})", filename, format);
    Ok(())
}
