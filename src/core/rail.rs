//! Das zentrale Schienenpaar: zwei parallele, geordnete Punktfolgen.

use glam::Vec3;

/// Identität einer Schiene innerhalb des Paars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RailSide {
    /// Linke Schiene (in Blickrichtung)
    Left,
    /// Rechte Schiene
    Right,
}

impl RailSide {
    /// Kurzlabel für Log-Ausgaben
    pub fn label(&self) -> &'static str {
        match self {
            RailSide::Left => "links",
            RailSide::Right => "rechts",
        }
    }
}

/// Die beiden Schienen eines aufgezeichneten Pfads.
///
/// Punkte werden während der Aufzeichnung ausschließlich paarweise angehängt,
/// damit beide Schienen jederzeit gleich lang sind. Während des Editierens
/// werden einzelne Punkte in-place verschoben; die Länge bleibt unverändert.
#[derive(Debug, Clone, Default)]
pub struct RailPair {
    left: Vec<Vec3>,
    right: Vec<Vec3>,
}

impl RailPair {
    /// Erstellt ein leeres Schienenpaar
    pub fn new() -> Self {
        Self {
            left: Vec::new(),
            right: Vec::new(),
        }
    }

    /// Anzahl der Stützstellen (pro Schiene)
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// Gibt `true` zurück, wenn noch keine Stützstelle aufgezeichnet wurde.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Hängt ein Ankerpaar an (hält die Gleichlängen-Invariante).
    pub fn push_pair(&mut self, left: Vec3, right: Vec3) {
        self.left.push(left);
        self.right.push(right);
    }

    /// Verwirft alle Stützstellen
    pub fn clear(&mut self) {
        self.left.clear();
        self.right.clear();
    }

    /// Linke Schiene (read-only)
    pub fn left(&self) -> &[Vec3] {
        &self.left
    }

    /// Rechte Schiene (read-only)
    pub fn right(&self) -> &[Vec3] {
        &self.right
    }

    /// Eine Schiene nach Identität
    pub fn side(&self, side: RailSide) -> &[Vec3] {
        match side {
            RailSide::Left => &self.left,
            RailSide::Right => &self.right,
        }
    }

    /// Verschiebt die Punkte `first..=last` einer Schiene in-place um `delta`.
    ///
    /// Indizes außerhalb der Schiene werden ignoriert; zurückgegeben wird die
    /// Anzahl tatsächlich verschobener Punkte.
    pub fn translate_range(
        &mut self,
        side: RailSide,
        first: usize,
        last: usize,
        delta: Vec3,
    ) -> usize {
        let rail = match side {
            RailSide::Left => &mut self.left,
            RailSide::Right => &mut self.right,
        };
        if first > last || first >= rail.len() {
            return 0;
        }
        let end = last.min(rail.len() - 1);
        for point in &mut rail[first..=end] {
            *point += delta;
        }
        end - first + 1
    }
}
