//! Core-Domänentypen: Schienenpaar, Abtastung, Pick-Auflösung.

pub mod pick;
pub mod rail;
pub mod sampler;

pub use pick::{pick_nearest, RailPick};
pub use rail::{RailPair, RailSide};
pub use sampler::{RailSampler, ViewpointPose};
