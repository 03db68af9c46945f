//! Simulation engine: actors, physics and per-play orchestration

pub mod ball;
pub mod config;
pub mod defender;
pub mod kinematics;
pub mod live_play;
pub mod physics_constants;
pub mod receiver;
pub mod route;
pub mod throw;
pub mod timestep;
pub mod types;

pub use ball::{BallFlight, PlayOutcome};
pub use config::PlayConfig;
pub use defender::{CoverageState, Defender, Strategy};
pub use kinematics::{steer, BrakingMode};
pub use live_play::LivePlay;
pub use receiver::Receiver;
pub use route::{Route, Waypoint, WaypointAction};
pub use throw::{resolve_throw, ThrowResult};
pub use types::Vec2;
