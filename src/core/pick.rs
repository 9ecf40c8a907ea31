//! Auflösung eines 3D-Treffpunkts auf die nächste Schienen-Stützstelle.

use glam::Vec3;

use super::{RailPair, RailSide};

/// Ergebnis einer Nächste-Stützstelle-Abfrage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RailPick {
    /// Getroffene Schiene
    pub side: RailSide,
    /// Index der Stützstelle innerhalb der Schiene
    pub index: usize,
    /// Position der Stützstelle
    pub rail_point: Vec3,
    /// Roher Treffpunkt auf der Oberfläche (für spätere Delta-Berechnung)
    pub hit_point: Vec3,
    /// Euklidische Distanz Treffpunkt → Stützstelle
    pub distance: f32,
}

/// Findet die nächste Stützstelle über beide Schienen.
///
/// Ein einzelner Durchlauf über alle Indizes; pro Index wird zuerst die linke,
/// dann die rechte Schiene geprüft, und ein Kandidat ersetzt das bisherige
/// Minimum nur bei strikt kleinerer Distanz. Exakt gleiche Distanzen fallen
/// dadurch deterministisch auf die linke Schiene. Gibt `None` zurück, wenn
/// keine Stützstellen existieren.
pub fn pick_nearest(hit_point: Vec3, rails: &RailPair) -> Option<RailPick> {
    if rails.is_empty() {
        return None;
    }

    let mut best: Option<RailPick> = None;
    let mut min = f32::MAX;

    for index in 0..rails.len() {
        for side in [RailSide::Left, RailSide::Right] {
            let rail_point = rails.side(side)[index];
            let distance = hit_point.distance(rail_point);
            if distance < min {
                min = distance;
                best = Some(RailPick {
                    side,
                    index,
                    rail_point,
                    hit_point,
                    distance,
                });
            }
        }
    }

    if let Some(pick) = &best {
        log::debug!(
            "Pick {} Index {}/{} Distanz {:.3}",
            pick.side.label(),
            pick.index,
            rails.len(),
            pick.distance
        );
    }
    best
}
