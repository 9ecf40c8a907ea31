//! Besitzer der Ribbon-Fläche: Aufbau und Neuaufbau aus dem Schienenpaar.

use crate::core::RailPair;
use crate::host::{SceneFactory, SceneObject, SceneObjectId};

/// Verwaltet die eine lebende Ribbon-Fläche der Sitzung.
///
/// Pro Sitzung existiert höchstens eine Fläche; jeder Neuaufbau löst zuerst
/// die vorherige auf und erzeugt dann eine neue aus den (ggf. mutierten)
/// Schienen. Inkrementelle Mesh-Updates gibt es bewusst nicht.
pub struct RibbonBuilder {
    surface: Option<Box<dyn SceneObject>>,
    floor_count: u32,
}

impl RibbonBuilder {
    /// Erstellt einen Builder ohne Fläche.
    pub fn new() -> Self {
        Self {
            surface: None,
            floor_count: 0,
        }
    }

    /// Gibt `true` zurück, wenn aktuell eine Fläche existiert.
    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    /// Identität der aktuellen Fläche (für Treffer-Vergleiche).
    pub fn surface_id(&self) -> Option<SceneObjectId> {
        self.surface.as_ref().map(|s| s.id())
    }

    /// Name der aktuellen (bzw. zuletzt gebauten) Fläche.
    pub fn surface_name(&self) -> String {
        format!("FloorRibbon{}", self.floor_count)
    }

    /// Baut eine neue Fläche aus dem Schienenpaar.
    ///
    /// Verlangt ein nicht-leeres Paar (gleiche Länge garantiert `RailPair`
    /// strukturell); andernfalls passiert nichts. Eine noch lebende Fläche
    /// wird zuvor aufgelöst.
    pub fn build(&mut self, scene: &mut dyn SceneFactory, rails: &RailPair) -> bool {
        if rails.is_empty() {
            return false;
        }
        self.surface = None;
        self.floor_count += 1;
        let name = self.surface_name();
        self.surface = Some(scene.create_ribbon(&name, rails.left(), rails.right()));
        log::info!("{} gebaut über {} Querschnitte", name, rails.len());
        true
    }

    /// Baut die bestehende Fläche unter gleichem Namen neu auf.
    ///
    /// Auflösen-dann-ersetzen ist der einzige Update-Pfad; ohne lebende
    /// Fläche passiert nichts.
    pub fn rebuild(&mut self, scene: &mut dyn SceneFactory, rails: &RailPair) {
        if rails.is_empty() {
            return;
        }
        if self.surface.take().is_none() {
            return;
        }
        let name = self.surface_name();
        self.surface = Some(scene.create_ribbon(&name, rails.left(), rails.right()));
    }

    /// Löst die aktuelle Fläche auf (falls vorhanden).
    pub fn dispose(&mut self) -> bool {
        self.surface.take().is_some()
    }
}

impl Default for RibbonBuilder {
    fn default() -> Self {
        Self::new()
    }
}
