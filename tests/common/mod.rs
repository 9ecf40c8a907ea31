//! Gemeinsame Mock-Kollaborateure und Fixtures für die Controller-Flow-Tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;

use floor_ribbon_editor::{
    EditorController, EditorIntent, PointerHit, SaveSink, SceneFactory, SceneObject,
    SceneObjectId, SessionState, ViewpointPose,
};

/// Vertikaler Anker-Versatz der Test-Posen
pub const DROP: f32 = 1.8;

/// Chronologisches Protokoll der Host-Geometrie-Aufrufe.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneEvent {
    Created {
        id: u64,
        kind: &'static str,
        name: String,
    },
    Disposed {
        id: u64,
    },
}

/// Zeichnet alle Factory-Aufrufe samt Punktdaten auf.
#[derive(Default)]
pub struct SceneRecorder {
    pub events: Vec<SceneEvent>,
    pub ribbons: Vec<(String, Vec<Vec3>, Vec<Vec3>)>,
    pub polylines: Vec<(String, Vec<Vec3>)>,
    pub markers: Vec<(String, Vec3)>,
}

impl SceneRecorder {
    /// IDs aller erzeugten, noch nicht aufgelösten Objekte.
    pub fn live_ids(&self) -> Vec<u64> {
        let mut live = Vec::new();
        for event in &self.events {
            match event {
                SceneEvent::Created { id, .. } => live.push(*id),
                SceneEvent::Disposed { id } => live.retain(|l| l != id),
            }
        }
        live
    }

    /// Zuletzt erzeugte Ribbon-Fläche (Name, linke, rechte Schiene).
    pub fn last_ribbon(&self) -> &(String, Vec<Vec3>, Vec<Vec3>) {
        self.ribbons.last().expect("Ribbon erwartet")
    }
}

struct MockObject {
    id: SceneObjectId,
    recorder: Rc<RefCell<SceneRecorder>>,
}

impl SceneObject for MockObject {
    fn id(&self) -> SceneObjectId {
        self.id
    }
}

impl Drop for MockObject {
    fn drop(&mut self) {
        self.recorder
            .borrow_mut()
            .events
            .push(SceneEvent::Disposed { id: self.id.0 });
    }
}

/// Szenen-Factory, die nur protokolliert.
pub struct MockScene {
    recorder: Rc<RefCell<SceneRecorder>>,
    next_id: u64,
}

impl MockScene {
    pub fn new(recorder: Rc<RefCell<SceneRecorder>>) -> Self {
        Self {
            recorder,
            next_id: 1,
        }
    }

    fn register(&mut self, kind: &'static str, name: &str) -> Box<dyn SceneObject> {
        let id = self.next_id;
        self.next_id += 1;
        self.recorder.borrow_mut().events.push(SceneEvent::Created {
            id,
            kind,
            name: name.to_string(),
        });
        Box::new(MockObject {
            id: SceneObjectId(id),
            recorder: Rc::clone(&self.recorder),
        })
    }
}

impl SceneFactory for MockScene {
    fn create_ribbon(
        &mut self,
        name: &str,
        left: &[Vec3],
        right: &[Vec3],
    ) -> Box<dyn SceneObject> {
        self.recorder
            .borrow_mut()
            .ribbons
            .push((name.to_string(), left.to_vec(), right.to_vec()));
        self.register("ribbon", name)
    }

    fn create_polyline(&mut self, name: &str, points: &[Vec3]) -> Box<dyn SceneObject> {
        self.recorder
            .borrow_mut()
            .polylines
            .push((name.to_string(), points.to_vec()));
        self.register("polyline", name)
    }

    fn create_marker(&mut self, name: &str, position: Vec3) -> Box<dyn SceneObject> {
        self.recorder
            .borrow_mut()
            .markers
            .push((name.to_string(), position));
        self.register("marker", name)
    }
}

/// Zeichnet Sink-Aufrufe auf; kann auf Fehlschlag geschaltet werden.
#[derive(Default)]
pub struct SinkRecorder {
    pub saved: Vec<(String, String)>,
    pub fail_next: bool,
}

pub struct MockSink {
    recorder: Rc<RefCell<SinkRecorder>>,
}

impl MockSink {
    pub fn new(recorder: Rc<RefCell<SinkRecorder>>) -> Self {
        Self { recorder }
    }
}

impl SaveSink for MockSink {
    fn save(&mut self, filename: &str, content: &str) -> anyhow::Result<()> {
        let mut recorder = self.recorder.borrow_mut();
        if recorder.fail_next {
            recorder.fail_next = false;
            anyhow::bail!("Senke nicht verfügbar");
        }
        recorder
            .saved
            .push((filename.to_string(), content.to_string()));
        Ok(())
    }
}

/// Controller, Sitzungszustand und Protokolle für einen Testlauf.
pub struct Harness {
    pub controller: EditorController,
    pub state: SessionState,
    pub scene: Rc<RefCell<SceneRecorder>>,
    pub sink: Rc<RefCell<SinkRecorder>>,
}

impl Harness {
    pub fn new() -> Self {
        let scene = Rc::new(RefCell::new(SceneRecorder::default()));
        let sink = Rc::new(RefCell::new(SinkRecorder::default()));
        let state = SessionState::new(
            Box::new(MockScene::new(Rc::clone(&scene))),
            Box::new(MockSink::new(Rc::clone(&sink))),
        );
        Self {
            controller: EditorController::new(),
            state,
            scene,
            sink,
        }
    }

    /// Verarbeitet einen Intent und erwartet Erfolg.
    pub fn handle(&mut self, intent: EditorIntent) {
        self.controller
            .handle_intent(&mut self.state, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }

    /// Treffer auf die aktuell verwaltete Fläche.
    pub fn surface_hit(&self, point: Vec3) -> PointerHit {
        let id = self
            .state
            .ribbon
            .surface_id()
            .expect("Fläche erwartet");
        PointerHit::on(id, point)
    }
}

/// Desktop-Pose mit Rechts-Achse +X auf Augenhöhe 0.
pub fn pose(x: f32, z: f32) -> ViewpointPose {
    ViewpointPose::grounded(Vec3::new(x, 0.0, z), DROP)
}

/// Zeichnet `count` Stützstellen entlang +Z auf und stoppt.
///
/// Start bei z = −2, Stützstellen bei z = 0, 2, 4, …;
/// linke Schiene x = −1, rechte Schiene x = +1.
pub fn record_straight(h: &mut Harness, count: usize) {
    h.handle(EditorIntent::RecordToggleRequested {
        pose: pose(0.0, -2.0),
    });
    for i in 0..count {
        h.handle(EditorIntent::ViewChanged {
            pose: pose(0.0, i as f32 * 2.0),
        });
    }
    h.handle(EditorIntent::RecordToggleRequested {
        pose: pose(0.0, count as f32 * 2.0),
    });
}

/// Erwartete linke Stützstelle `i` eines `record_straight`-Laufs.
pub fn left_point(i: usize) -> Vec3 {
    Vec3::new(-1.0, -DROP, i as f32 * 2.0)
}

/// Erwartete rechte Stützstelle `i` eines `record_straight`-Laufs.
pub fn right_point(i: usize) -> Vec3 {
    Vec3::new(1.0, -DROP, i as f32 * 2.0)
}
