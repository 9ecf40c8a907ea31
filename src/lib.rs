//! Floor-Ribbon-Editor Library.
//! Pfadaufzeichnung, Ribbon-Aufbau und interaktives Editieren als Library;
//! Rendering und Eingabegeräte bleiben beim Host.

pub mod app;
pub mod core;
pub mod export;
pub mod host;
pub mod shared;

pub use app::{
    CommandLog, EditControlLabel, EditPhase, EditorCommand, EditorController, EditorIntent,
    RecordControlIcon, SessionPhase, SessionState, Subscriptions, UiState,
};
pub use crate::core::{pick_nearest, RailPair, RailPick, RailSampler, RailSide, ViewpointPose};
pub use export::{to_snippet_text, to_structured_text, ExportFormat};
pub use host::{
    FileSaveSink, PointerHit, SaveSink, SceneFactory, SceneObject, SceneObjectId,
};
pub use shared::RibbonOptions;
