pub mod json_api;

pub use json_api::{
    simulate_drive, simulate_drive_json, simulate_play, simulate_play_json, DriveRequest,
    DriveResponse, OutcomeKind, PlayRequest, PlayResponse, RouteSpec, StrategySpec, ThrowSpec,
};
