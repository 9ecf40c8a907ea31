//! Kanten-Selektion: zusammenhängender Schienenabschnitt für das Ziehen.

use glam::Vec3;

use crate::core::{RailPair, RailPick, RailSide};
use crate::host::{SceneFactory, SceneObject};

/// Name des Kantenzugs in der Host-Szene
const EDGE_NAME: &str = "FloorEdge";

/// Ein selektierter, zusammenhängender Abschnitt genau einer Schiene,
/// inklusive des Kantenzugs, der ihn sichtbar macht.
///
/// Die Selektion liegt immer auf genau einer Schiene, der Schiene des Picks
/// mit dem NIEDRIGEREN Index. Landet der andere Pick auf der anderen Schiene,
/// wird trotzdem nur sein Index übernommen; eine schienenübergreifende
/// Selektion ist nicht definiert und wird bewusst nicht erfunden.
pub struct EdgeSelection {
    side: RailSide,
    first: usize,
    last: usize,
    visualization: Option<Box<dyn SceneObject>>,
}

impl EdgeSelection {
    /// Baut die Selektion aus zwei Picks (Reihenfolge wird normalisiert).
    pub fn from_picks(
        scene: &mut dyn SceneFactory,
        rails: &RailPair,
        first_pick: &RailPick,
        second_pick: &RailPick,
    ) -> Self {
        let (lower, upper) = if second_pick.index < first_pick.index {
            (second_pick, first_pick)
        } else {
            (first_pick, second_pick)
        };
        if second_pick.side != first_pick.side {
            log::warn!(
                "Picks auf verschiedenen Schienen; Selektion bleibt {}",
                lower.side.label()
            );
        }
        let mut selection = Self {
            side: lower.side,
            first: lower.index,
            last: upper.index,
            visualization: None,
        };
        selection.rebuild_visualization(scene, rails);
        log::info!(
            "Kante selektiert: {} Index {}..={}",
            selection.side.label(),
            selection.first,
            selection.last
        );
        selection
    }

    /// Schiene der Selektion
    pub fn side(&self) -> RailSide {
        self.side
    }

    /// Erster selektierter Index (inklusiv)
    pub fn first(&self) -> usize {
        self.first
    }

    /// Letzter selektierter Index (inklusiv)
    pub fn last(&self) -> usize {
        self.last
    }

    /// Die selektierten Punkte als Slice der Schiene.
    pub fn points<'a>(&self, rails: &'a RailPair) -> &'a [Vec3] {
        let rail = rails.side(self.side);
        let end = self.last.min(rail.len().saturating_sub(1));
        &rail[self.first..=end]
    }

    /// Verschiebt alle selektierten Punkte in-place um `delta`.
    pub fn translate(&self, rails: &mut RailPair, delta: Vec3) -> usize {
        rails.translate_range(self.side, self.first, self.last, delta)
    }

    /// Baut den Kantenzug neu auf (Auflösen-dann-ersetzen).
    ///
    /// Mehrere Punkte ergeben einen Linienzug, ein einzelner Punkt eine
    /// Punktmarkierung.
    pub fn rebuild_visualization(&mut self, scene: &mut dyn SceneFactory, rails: &RailPair) {
        self.visualization = None;
        let points = self.points(rails);
        self.visualization = Some(if points.len() > 1 {
            scene.create_polyline(EDGE_NAME, points)
        } else {
            scene.create_marker(EDGE_NAME, points[0])
        });
    }
}
