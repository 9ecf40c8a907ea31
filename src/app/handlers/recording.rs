//! Handler für den Aufzeichnungs-Lebenszyklus.

use crate::app::{SessionPhase, SessionState};
use crate::core::ViewpointPose;

/// Beginnt eine neue Aufzeichnung an der aktuellen Pose.
pub fn start_recording(state: &mut SessionState, pose: &ViewpointPose) {
    state.rails.clear();
    state.sampler.start(pose);
    state.phase = SessionPhase::Recording;
}

/// Verarbeitet eine Blickpunkt-Änderung während der Verfolgung.
///
/// Die Buchführung des Samplers läuft bei jedem Trigger weiter; angehängt
/// wird nur, solange tatsächlich aufgezeichnet wird.
pub fn sample_viewpoint(state: &mut SessionState, pose: &ViewpointPose) {
    let Some((left, right)) = state.sampler.observe(
        pose,
        state.options.sample_size,
        state.options.lateral_offset,
    ) else {
        return;
    };

    if matches!(state.phase, SessionPhase::Recording) {
        state.rails.push_pair(left, right);
    }
}

/// Beendet die Aufzeichnung.
///
/// Mit mindestens zwei Stützstellen wird die Fläche gebaut; ein kürzerer
/// Pfad wird verworfen und die Schienen werden geleert.
pub fn stop_recording(state: &mut SessionState) {
    state.sampler.stop();

    if state.rails.len() >= 2 {
        state.ribbon.build(state.scene.as_mut(), &state.rails);
        state.phase = SessionPhase::Ready;
    } else {
        log::info!(
            "Aufzeichnung mit {} Stützstellen verworfen",
            state.rails.len()
        );
        state.rails.clear();
        state.phase = SessionPhase::Idle;
    }
}

/// Verwirft den Pfad vollständig: Fläche auflösen, Schienen leeren.
pub fn cancel_path(state: &mut SessionState) {
    state.sampler.stop();
    if state.ribbon.dispose() {
        log::info!("Fläche aufgelöst, Pfad verworfen");
    } else {
        log::info!("Aufzeichnung abgebrochen, Pfad verworfen");
    }
    state.rails.clear();
    state.phase = SessionPhase::Idle;
}
