//! Controller-Flow-Tests für den Pfad-Export:
//! - Formate, Dateinamen, Rundung
//! - Leeren der Sitzung nach erfolgreichem Schreiben

mod common;

use common::{pose, record_straight, Harness, DROP};
use floor_ribbon_editor::{EditorIntent, RecordControlIcon, SessionPhase};
use glam::Vec3;

#[test]
fn test_export_structured_writes_json_and_clears_session() {
    let mut h = Harness::new();
    record_straight(&mut h, 3);

    h.handle(EditorIntent::ExportStructuredRequested);

    let sink = h.sink.borrow();
    let (filename, content) = sink.saved.last().expect("Export erwartet");
    assert_eq!(filename, "FloorRibbon1.json");

    let value: serde_json::Value = serde_json::from_str(content).expect("gültiges JSON");
    let rails = value["pathArray"].as_array().expect("pathArray erwartet");
    assert_eq!(rails.len(), 2);
    assert_eq!(rails[0].as_array().map(|r| r.len()), Some(3));
    assert_eq!(rails[1].as_array().map(|r| r.len()), Some(3));
    assert!(content.contains("[-1.00,-1.80,0.00]"));
    assert!(content.contains("[1.00,-1.80,4.00]"));

    assert!(matches!(h.state.phase, SessionPhase::Idle));
    assert_eq!(h.state.sample_count(), 0);
    assert!(!h.state.has_surface());
    assert!(h.scene.borrow().live_ids().is_empty());
    assert_eq!(h.state.ui.record_icon, RecordControlIcon::Play);
}

#[test]
fn test_export_snippet_writes_construction_call() {
    let mut h = Harness::new();
    record_straight(&mut h, 3);

    h.handle(EditorIntent::ExportSnippetRequested);

    let sink = h.sink.borrow();
    let (filename, content) = sink.saved.last().expect("Export erwartet");
    assert_eq!(filename, "FloorRibbon1.js");
    assert!(content.starts_with("BABYLON.MeshBuilder.CreateRibbon( 'FloorRibbon1'"));
    assert!(content.ends_with("]]}, scene );"));
    assert_eq!(content.matches("new BABYLON.Vector3(").count(), 6);
}

#[test]
fn test_export_reflects_dragged_points() {
    let mut h = Harness::new();
    record_straight(&mut h, 3);
    h.handle(EditorIntent::EditToggleRequested);

    // Selektion [1, 1] greifen und um (0, 0, 1) ziehen
    let hit = h.surface_hit(Vec3::new(-1.0, -DROP, 2.0));
    h.handle(EditorIntent::PointerDown { hit });
    let hit = h.surface_hit(Vec3::new(-1.0, -DROP, 2.1));
    h.handle(EditorIntent::PointerDown { hit });
    let hit = h.surface_hit(Vec3::new(-1.0, -DROP, 2.0));
    h.handle(EditorIntent::PointerDown { hit });
    let hit = h.surface_hit(Vec3::new(-1.0, -DROP, 3.0));
    h.handle(EditorIntent::PointerMoved { hit });
    h.handle(EditorIntent::PointerUp);
    h.handle(EditorIntent::EditToggleRequested);

    h.handle(EditorIntent::ExportStructuredRequested);

    let sink = h.sink.borrow();
    let (_, content) = sink.saved.last().expect("Export erwartet");
    assert!(content.contains("[-1.00,-1.80,3.00]"));
}

#[test]
fn test_surface_counter_continues_across_sessions() {
    let mut h = Harness::new();
    record_straight(&mut h, 3);
    h.handle(EditorIntent::ExportStructuredRequested);

    record_straight(&mut h, 2);
    h.handle(EditorIntent::ExportSnippetRequested);

    let sink = h.sink.borrow();
    assert_eq!(sink.saved[0].0, "FloorRibbon1.json");
    assert_eq!(sink.saved[1].0, "FloorRibbon2.js");
}

#[test]
fn test_export_outside_ready_is_ignored() {
    let mut h = Harness::new();

    h.handle(EditorIntent::ExportStructuredRequested);
    assert!(h.sink.borrow().saved.is_empty());
    assert!(h.state.command_log.is_empty());

    h.handle(EditorIntent::RecordToggleRequested {
        pose: pose(0.0, -2.0),
    });
    h.handle(EditorIntent::ExportSnippetRequested);
    assert!(h.sink.borrow().saved.is_empty());
    assert!(matches!(h.state.phase, SessionPhase::Recording));

    // Leere Aufzeichnung stoppen, dann regulär aufzeichnen und editieren
    h.handle(EditorIntent::RecordToggleRequested {
        pose: pose(0.0, -2.0),
    });
    record_straight(&mut h, 3);
    h.handle(EditorIntent::EditToggleRequested);
    h.handle(EditorIntent::ExportStructuredRequested);
    assert!(h.sink.borrow().saved.is_empty());
}

#[test]
fn test_failed_save_keeps_session_intact() {
    let mut h = Harness::new();
    record_straight(&mut h, 3);
    h.sink.borrow_mut().fail_next = true;

    let result = h
        .controller
        .handle_intent(&mut h.state, EditorIntent::ExportStructuredRequested);
    assert!(result.is_err());

    // Sitzung unverändert: erneuter Export gelingt
    assert!(matches!(h.state.phase, SessionPhase::Ready));
    assert!(h.state.has_surface());
    assert_eq!(h.state.sample_count(), 3);

    h.handle(EditorIntent::ExportStructuredRequested);
    assert_eq!(h.sink.borrow().saved.len(), 1);
    assert!(matches!(h.state.phase, SessionPhase::Idle));
}
