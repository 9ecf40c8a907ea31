//! Host-Bridge: Schnittstellen zur umgebenden Render-/Szenen-Umgebung.
//!
//! Die Bibliothek rendert nicht selbst. Der Host stellt die Geometrie-
//! Konstruktion, die Pointer-Treffer und die Datei-Ablage bereit; alle drei
//! Seams sind hier als Traits definiert. Handles auf Host-Objekte werden
//! durch Drop freigegeben (Besitz = Lebensdauer).

use std::path::{Path, PathBuf};

use anyhow::Context;
use glam::Vec3;

/// Opaque Identität eines Host-Szenenobjekts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SceneObjectId(pub u64);

/// Handle auf ein vom Host erzeugtes, verfügbares Szenenobjekt.
///
/// Das Objekt lebt, solange das Handle lebt; Drop entspricht `dispose()`
/// auf Host-Seite.
pub trait SceneObject {
    /// Identität für Treffer-Vergleiche
    fn id(&self) -> SceneObjectId;
}

/// Geometrie-Konstruktion des Hosts.
///
/// Die Ribbon-Fläche ist rein dekorativ: der Host darf ihr keine Kollisions-
/// oder Navigations-Semantik geben.
pub trait SceneFactory {
    /// Erzeugt eine Regelfläche zwischen zwei gleich langen Punktfolgen.
    /// Querschnitt `i` verläuft von `left[i]` nach `right[i]`; keine
    /// geschlossene Schleife.
    fn create_ribbon(&mut self, name: &str, left: &[Vec3], right: &[Vec3])
        -> Box<dyn SceneObject>;

    /// Erzeugt einen Linienzug durch die gegebenen Punkte.
    fn create_polyline(&mut self, name: &str, points: &[Vec3]) -> Box<dyn SceneObject>;

    /// Erzeugt eine Punktmarkierung an einer Position.
    fn create_marker(&mut self, name: &str, position: Vec3) -> Box<dyn SceneObject>;
}

/// Treffer-Datensatz einer Pointer-Benachrichtigung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerHit {
    /// `true` wenn der Pointer überhaupt etwas getroffen hat
    pub hit: bool,
    /// Identität des getroffenen Objekts
    pub target: Option<SceneObjectId>,
    /// Treffpunkt in Weltkoordinaten
    pub point: Option<Vec3>,
}

impl PointerHit {
    /// Treffer auf ein bekanntes Objekt
    pub fn on(target: SceneObjectId, point: Vec3) -> Self {
        Self {
            hit: true,
            target: Some(target),
            point: Some(point),
        }
    }

    /// Fehlschlag (nichts getroffen)
    pub fn miss() -> Self {
        Self {
            hit: false,
            target: None,
            point: None,
        }
    }

    /// Treffpunkt, falls der Treffer auf genau diesem Objekt liegt.
    pub fn point_on(&self, id: SceneObjectId) -> Option<Vec3> {
        if self.hit && self.target == Some(id) {
            self.point
        } else {
            None
        }
    }
}

/// Datei-Ablage des Hosts (Download-Angebot oder Persistenz).
pub trait SaveSink {
    /// Legt `content` unter `filename` ab.
    fn save(&mut self, filename: &str, content: &str) -> anyhow::Result<()>;
}

/// Standard-Senke: schreibt in ein Basisverzeichnis im Dateisystem.
#[derive(Debug, Clone)]
pub struct FileSaveSink {
    base_dir: PathBuf,
}

impl FileSaveSink {
    /// Erstellt eine Senke für das angegebene Verzeichnis.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Zielverzeichnis der Senke
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl SaveSink for FileSaveSink {
    fn save(&mut self, filename: &str, content: &str) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.base_dir).with_context(|| {
            format!("Zielverzeichnis {} nicht anlegbar", self.base_dir.display())
        })?;
        let path = self.base_dir.join(filename);
        std::fs::write(&path, content)
            .with_context(|| format!("Export nach {} fehlgeschlagen", path.display()))?;
        log::info!("Export gespeichert nach: {}", path.display());
        Ok(())
    }
}
