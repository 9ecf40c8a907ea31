//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod ribbon;
pub mod selection;
pub mod state;

pub use command_log::CommandLog;
pub use controller::EditorController;
pub use events::{EditorCommand, EditorIntent};
pub use ribbon::RibbonBuilder;
pub use selection::EdgeSelection;
pub use state::{
    EditControlLabel, EditPhase, RecordControlIcon, SessionPhase, SessionState, Subscriptions,
    UiState,
};
