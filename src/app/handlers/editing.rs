//! Handler für die Edit-Sitzung: Picks, Selektion und Ziehen.

use glam::Vec3;

use crate::app::selection::EdgeSelection;
use crate::app::{EditPhase, SessionPhase, SessionState};
use crate::core::pick_nearest;

/// Betritt die Edit-Sitzung (wartet auf den ersten Pick).
/// Ohne Fläche ein No-op.
pub fn begin_edit(state: &mut SessionState) {
    if !state.ribbon.has_surface() {
        return;
    }
    state.phase = SessionPhase::Editing(EditPhase::AwaitFirstPick);
    log::info!("Edit-Sitzung gestartet");
}

/// Verlässt die Edit-Sitzung.
///
/// Der Phasenwechsel lässt Selektion und Kantenzug fallen und löst damit
/// deren Host-Geometrie auf; das Pointer-Abonnement endet mit der Phase.
pub fn end_edit(state: &mut SessionState) {
    if matches!(state.phase, SessionPhase::Editing(_)) {
        state.phase = SessionPhase::Ready;
        log::info!("Edit-Sitzung beendet");
    }
}

/// Löst den ersten Eckpunkt-Pick auf.
pub fn pick_first_point(state: &mut SessionState, point: Vec3) {
    let Some(pick) = pick_nearest(point, &state.rails) else {
        return;
    };
    state.phase = SessionPhase::Editing(EditPhase::AwaitSecondPick { first: pick });
}

/// Löst den zweiten Pick auf und baut Selektion samt Kantenzug.
pub fn pick_second_point(state: &mut SessionState, point: Vec3) {
    let SessionPhase::Editing(EditPhase::AwaitSecondPick { first }) = &state.phase else {
        return;
    };
    let first = *first;
    let Some(second) = pick_nearest(point, &state.rails) else {
        return;
    };

    let selection = EdgeSelection::from_picks(state.scene.as_mut(), &state.rails, &first, &second);
    state.phase = SessionPhase::Editing(EditPhase::Dragging {
        selection,
        anchor: None,
    });
}

/// Setzt den Drag-Anker auf den rohen Treffpunkt.
pub fn arm_drag(state: &mut SessionState, point: Vec3) {
    if let Some(pick) = pick_nearest(point, &state.rails) {
        log::debug!(
            "Zugriff nahe {} Index {} (Distanz {:.3})",
            pick.side.label(),
            pick.index,
            pick.distance
        );
    }
    if let SessionPhase::Editing(EditPhase::Dragging { anchor, .. }) = &mut state.phase {
        *anchor = Some(point);
    }
}

/// Zieht die Selektion zum neuen Treffpunkt.
///
/// Verschiebt genau die selektierten Punkte um (Treffpunkt − Anker),
/// aktualisiert den Anker und baut Fläche und Kantenzug neu auf.
pub fn drag_to(state: &mut SessionState, point: Vec3) {
    let SessionPhase::Editing(EditPhase::Dragging { selection, anchor }) = &mut state.phase else {
        return;
    };
    let Some(previous) = *anchor else {
        return;
    };

    let delta = point - previous;
    selection.translate(&mut state.rails, delta);
    *anchor = Some(point);

    state.ribbon.rebuild(state.scene.as_mut(), &state.rails);
    selection.rebuild_visualization(state.scene.as_mut(), &state.rails);
}

/// Löst den Drag-Anker; die Selektion bleibt bestehen.
pub fn release_drag(state: &mut SessionState) {
    if let SessionPhase::Editing(EditPhase::Dragging { anchor, .. }) = &mut state.phase {
        *anchor = None;
    }
}
