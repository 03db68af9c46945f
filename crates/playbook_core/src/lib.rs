//! # playbook_core - Deterministic Football Passing-Play Simulation Engine
//!
//! This library simulates a single-possession passing game: receivers run
//! drawn routes, defenders run man or zone coverage, a throw gesture becomes
//! a ballistic arc with a catchable window, and the play resolves into a
//! catch, an incompletion or an interception.
//!
//! ## Features
//! - 100% deterministic simulation (same inputs = same play)
//! - Fixed-timestep, single-threaded tick loop (one tick per frame)
//! - JSON API for scripted plays and full drives

pub mod api;
pub mod engine;
pub mod error;
pub mod game;

// Re-export the main simulation surface
pub use api::{simulate_drive_json, simulate_play_json, PlayRequest, PlayResponse};
pub use engine::{
    BrakingMode, Defender, LivePlay, PlayConfig, PlayOutcome, Receiver, Route, Strategy,
    ThrowResult, Vec2, Waypoint, WaypointAction,
};
pub use error::{Result, SimError};
pub use game::{DriveState, DriveStatus};
