use glam::Vec3;

use crate::core::ViewpointPose;
use crate::export::ExportFormat;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum EditorCommand {
    /// Aufzeichnung an der aktuellen Pose beginnen
    StartRecording { pose: ViewpointPose },
    /// Aufzeichnung beenden (baut die Fläche bei genügend Stützstellen)
    StopRecording,
    /// Pfad verwerfen: Fläche auflösen, Schienen leeren
    CancelPath,
    /// Blickpunkt-Änderung durch den Sampler verarbeiten
    SampleViewpoint { pose: ViewpointPose },
    /// Edit-Sitzung betreten (wartet auf den ersten Pick)
    BeginEdit,
    /// Edit-Sitzung verlassen (Selektion und Kantenzug auflösen)
    EndEdit,
    /// Ersten Eckpunkt der Selektion picken
    PickFirstPoint { point: Vec3 },
    /// Zweiten Eckpunkt picken und Selektion aufbauen
    PickSecondPoint { point: Vec3 },
    /// Drag-Anker auf den Treffpunkt setzen
    ArmDrag { point: Vec3 },
    /// Selektion zum Treffpunkt ziehen
    DragTo { point: Vec3 },
    /// Drag-Anker lösen (Selektion bleibt bestehen)
    ReleaseDrag,
    /// Schienen exportieren und Sitzung leeren
    ExportPath { format: ExportFormat },
}
