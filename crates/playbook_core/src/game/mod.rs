//! Game-level bookkeeping outside the per-play engine

pub mod downs;

pub use downs::{DriveState, DriveStatus};
