use glam::Vec3;

use super::ui::UiState;
use crate::app::ribbon::RibbonBuilder;
use crate::app::selection::EdgeSelection;
use crate::app::CommandLog;
use crate::core::{RailPair, RailPick, RailSampler};
use crate::host::{SaveSink, SceneFactory};
use crate::shared::RibbonOptions;

/// Phase der Edit-Sitzung (ein einziger getaggter Zustand).
///
/// Ersetzt die drei unabhängigen Flags recording/editing/resizing; ungültige
/// Kombinationen sind damit nicht darstellbar.
pub enum SessionPhase {
    /// Kein Pfad vorhanden
    Idle,
    /// Blickpunkt wird verfolgt, Stützstellen werden angehängt
    Recording,
    /// Fläche existiert, keine Edit-Sitzung aktiv
    Ready,
    /// Edit-Sitzung aktiv
    Editing(EditPhase),
}

/// Unterphase innerhalb einer Edit-Sitzung.
pub enum EditPhase {
    /// Wartet auf den ersten Eckpunkt-Pick
    AwaitFirstPick,
    /// Wartet auf den zweiten Eckpunkt-Pick
    AwaitSecondPick {
        /// Erster Pick; bestimmt die Schiene der Selektion
        first: RailPick,
    },
    /// Selektion steht; Ziehen möglich sobald ein Anker gesetzt ist
    Dragging {
        /// Selektierter Schienenabschnitt samt Kantenzug
        selection: EdgeSelection,
        /// Roher Treffpunkt des letzten Zugriffs (None = nicht gegriffen)
        anchor: Option<Vec3>,
    },
}

/// Aktive Benachrichtigungs-Abonnements der Sitzung.
///
/// Direkt aus der Phase abgeleitet; die Abmeldung beim Verlassen eines
/// Zustands ist damit strukturell garantiert statt über manuelle
/// add/remove-Aufrufe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscriptions {
    /// View-Matrix-Änderungen des Blickpunkts
    pub view_changes: bool,
    /// Pointer-Down/Move/Up-Ereignisse
    pub pointer_events: bool,
}

/// Hauptzustand der Edit-Sitzung.
pub struct SessionState {
    /// Aufgezeichnetes Schienenpaar
    pub rails: RailPair,
    /// Distanzgetriggerter Blickpunkt-Sampler
    pub sampler: RailSampler,
    /// Besitzer der Ribbon-Fläche
    pub ribbon: RibbonBuilder,
    /// Aktuelle Phase
    pub phase: SessionPhase,
    /// Abgeleitete UI-Affordanzen (nach jedem Command aktualisiert)
    pub ui: UiState,
    /// Laufzeit-Optionen (Abtastschwelle, Schienenabstand, Export-Präzision)
    pub options: RibbonOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Geometrie-Konstruktion des Hosts
    pub scene: Box<dyn SceneFactory>,
    /// Datei-Ablage des Hosts
    pub sink: Box<dyn SaveSink>,
}

impl SessionState {
    /// Erstellt eine neue Sitzung mit Standard-Optionen.
    pub fn new(scene: Box<dyn SceneFactory>, sink: Box<dyn SaveSink>) -> Self {
        Self::with_options(scene, sink, RibbonOptions::default())
    }

    /// Erstellt eine neue Sitzung mit expliziten Optionen.
    pub fn with_options(
        scene: Box<dyn SceneFactory>,
        sink: Box<dyn SaveSink>,
        options: RibbonOptions,
    ) -> Self {
        let mut state = Self {
            rails: RailPair::new(),
            sampler: RailSampler::new(),
            ribbon: RibbonBuilder::new(),
            phase: SessionPhase::Idle,
            ui: UiState::default(),
            options,
            command_log: CommandLog::new(),
            scene,
            sink,
        };
        state.refresh_ui();
        state
    }

    /// Gibt `true` zurück, wenn eine Ribbon-Fläche existiert.
    pub fn has_surface(&self) -> bool {
        self.ribbon.has_surface()
    }

    /// Anzahl aufgezeichneter Stützstellen (für UI-Anzeige)
    pub fn sample_count(&self) -> usize {
        self.rails.len()
    }

    /// Leitet die aktiven Abonnements aus der Phase ab.
    pub fn subscriptions(&self) -> Subscriptions {
        Subscriptions {
            view_changes: matches!(self.phase, SessionPhase::Recording),
            pointer_events: matches!(self.phase, SessionPhase::Editing(_)),
        }
    }

    /// Aktualisiert die abgeleiteten UI-Affordanzen.
    pub fn refresh_ui(&mut self) {
        self.ui = UiState::for_phase(&self.phase);
    }
}
