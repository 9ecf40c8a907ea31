//! Distanzgetriggerte Abtastung der Blickpunkt-Bewegung.

use glam::{Vec2, Vec3};

/// Momentaufnahme des verfolgten Blickpunkts.
///
/// Wird vom Host bei jeder View-Matrix-Änderung geliefert (und einmalig beim
/// Start der Aufzeichnung, damit die Buchführung sauber initialisiert).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewpointPose {
    /// Weltposition des Blickpunkts
    pub position: Vec3,
    /// Normalisierte lokale Rechts-Achse des Blickpunkts
    pub lateral_axis: Vec3,
    /// Halbe Höhe des Kollisionskörpers (vertikaler Versatz zum Boden)
    pub half_height: f32,
    /// Reale Bodenhöhe bei Head-Mounted-Betrieb
    pub ground_offset: f32,
    /// `true` wenn der aktive Blickpunkt eine Head-Mounted-Kamera ist
    pub head_mounted: bool,
}

impl ViewpointPose {
    /// Pose einer Desktop-Kamera mit Rechts-Achse +X.
    pub fn grounded(position: Vec3, half_height: f32) -> Self {
        Self {
            position,
            lateral_axis: Vec3::X,
            half_height,
            ground_offset: 0.0,
            head_mounted: false,
        }
    }

    /// Pose einer Head-Mounted-Kamera mit Rechts-Achse +X.
    pub fn head_mounted(position: Vec3, ground_offset: f32) -> Self {
        Self {
            position,
            lateral_axis: Vec3::X,
            half_height: 0.0,
            ground_offset,
            head_mounted: true,
        }
    }

    /// Vertikaler Abstand der Schienenanker zum Blickpunkt.
    ///
    /// Head-Mounted-Kameras liefern ihre reale Bodenhöhe; sonst gilt die
    /// halbe Körperhöhe des verfolgten Kollisionskörpers.
    pub fn anchor_drop(&self) -> f32 {
        if self.head_mounted {
            self.ground_offset
        } else {
            self.half_height
        }
    }
}

/// Wandelt Blickpunkt-Benachrichtigungen in Schienen-Ankerpaare um.
///
/// Getriggert wird pro Achse der Horizontalebene unabhängig (Box-Test auf
/// x/z, kein euklidischer Radius): erst wenn eine der beiden Achsen die
/// Schwelle strikt überschreitet, gilt die Position als neue Stützstelle.
/// Diagonale Bewegung wird dadurch dünner abgetastet als bei einem
/// Radius-Test; dieses Verhalten ist beabsichtigt und bleibt erhalten.
#[derive(Debug, Clone, Default)]
pub struct RailSampler {
    /// Letzte akzeptierte Position in der Horizontalebene (x/z)
    last_planar: Option<Vec2>,
}

impl RailSampler {
    /// Erstellt einen inaktiven Sampler.
    pub fn new() -> Self {
        Self { last_planar: None }
    }

    /// Beginnt die Verfolgung an der aktuellen Pose.
    ///
    /// Es wird keine Stützstelle emittiert; die erste folgt erst, wenn sich
    /// der Blickpunkt um mehr als die Schwelle bewegt hat.
    pub fn start(&mut self, pose: &ViewpointPose) {
        self.last_planar = Some(Vec2::new(pose.position.x, pose.position.z));
        log::info!(
            "Blickpunkt-Verfolgung gestartet bei ({:.2}, {:.2})",
            pose.position.x,
            pose.position.z
        );
    }

    /// Beendet die Verfolgung und verwirft die Buchführung.
    pub fn stop(&mut self) {
        self.last_planar = None;
    }

    /// Gibt `true` zurück, solange die Verfolgung aktiv ist.
    pub fn is_tracking(&self) -> bool {
        self.last_planar.is_some()
    }

    /// Verarbeitet eine Blickpunkt-Änderung.
    ///
    /// Überschreitet die planare Bewegung seit der letzten Stützstelle die
    /// Schwelle `size` auf mindestens einer Achse, wird die Buchführung
    /// aktualisiert und das Ankerpaar zurückgegeben. Der Aufrufer entscheidet,
    /// ob die Anker angehängt werden; die Buchführung läuft unabhängig davon
    /// weiter, damit eine wiederaufgenommene Aufzeichnung ohne Sprung an der
    /// aktuellen Position beginnt.
    pub fn observe(
        &mut self,
        pose: &ViewpointPose,
        size: f32,
        lateral_offset: f32,
    ) -> Option<(Vec3, Vec3)> {
        let last = self.last_planar?;
        let planar = Vec2::new(pose.position.x, pose.position.z);

        let triggered = (planar.x - last.x).abs() > size || (planar.y - last.y).abs() > size;
        if !triggered {
            return None;
        }

        self.last_planar = Some(planar);
        let anchors = Self::anchor_points(pose, lateral_offset);
        log::debug!(
            "Stützstelle bei ({:.2}, {:.2}), links {:?} rechts {:?}",
            planar.x,
            planar.y,
            anchors.0,
            anchors.1
        );
        Some(anchors)
    }

    /// Berechnet das Ankerpaar (links, rechts) für eine Pose.
    ///
    /// Beide Anker liegen `lateral_offset` seitlich des Blickpunkts entlang
    /// seiner Rechts-Achse, abgesenkt um `anchor_drop()`.
    pub fn anchor_points(pose: &ViewpointPose, lateral_offset: f32) -> (Vec3, Vec3) {
        let base = pose.position - Vec3::Y * pose.anchor_drop();
        let lateral = pose.lateral_axis * lateral_offset;
        (base - lateral, base + lateral)
    }
}
