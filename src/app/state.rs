//! Sitzungszustand der Edit-Sitzung.

mod session;
mod ui;

pub use session::{EditPhase, SessionPhase, SessionState, Subscriptions};
pub use ui::{EditControlLabel, RecordControlIcon, UiState};
