//! JSON API for scripted play and drive simulation
//!
//! A request describes a full play setup: receiver routes, defender
//! coverage gestures and the throw. The interactive inputs (route drawing,
//! strategy drags, throw timing) are declarative data here, so a play is
//! reproducible from a single JSON document.

use serde::{Deserialize, Serialize};

use crate::engine::ball::PlayOutcome;
use crate::engine::config::PlayConfig;
use crate::engine::defender::Strategy;
use crate::engine::live_play::LivePlay;
use crate::engine::physics_constants::field;
use crate::engine::route::{Route, Waypoint, WaypointAction};
use crate::engine::throw::ThrowResult;
use crate::engine::timestep::TICK_DT;
use crate::engine::types::Vec2;
use crate::error::{Result, SimError};
use crate::game::downs::{DriveState, DriveStatus};

/// Safety net for degenerate setups that can never resolve (for example a
/// zero-length throw with nobody near the release point).
const MAX_PLAY_TICKS: u64 = 20_000;

/// Play-clock bound on the scripted release. Keeps the pre-throw phase
/// from eating the tick budget reserved for the ball in the air.
const MAX_SNAP_TO_THROW_SECONDS: f32 = 30.0;

pub const SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Clone, Deserialize)]
pub struct PlayRequest {
    pub schema_version: u8,
    /// One route per receiver slot, exactly [`field::NUM_RECEIVERS`]
    pub routes: Vec<RouteSpec>,
    /// One coverage gesture per defender slot, exactly
    /// [`field::NUM_DEFENDERS`]
    pub defense: Vec<StrategySpec>,
    pub throw: ThrowSpec,
    #[serde(default)]
    pub config: Option<PlayConfig>,
}

/// Waypoints and integer action codes, kept as parallel arrays on the
/// wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteSpec {
    pub waypoints: Vec<[f32; 2]>,
    pub actions: Vec<u8>,
}

/// The press/release drag of the strategy-assignment phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategySpec {
    pub press: [f32; 2],
    pub release: [f32; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThrowSpec {
    /// Mouse-up position of the throw gesture
    pub aim: [f32; 2],
    /// How long the throw was powered up (s)
    pub hold_seconds: f32,
    /// Game time between the snap and the release (s)
    #[serde(default)]
    pub snap_to_throw_seconds: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayResponse {
    pub outcome: OutcomeKind,
    pub yards_gained: f32,
    pub ticks: u64,
    pub throw: ThrowSummary,
    pub landing: [f32; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Catch,
    Incomplete,
    Interception,
}

impl From<PlayOutcome> for OutcomeKind {
    fn from(outcome: PlayOutcome) -> Self {
        match outcome {
            PlayOutcome::Catch { .. } => OutcomeKind::Catch,
            PlayOutcome::Incomplete => OutcomeKind::Incomplete,
            PlayOutcome::Interception => OutcomeKind::Interception,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ThrowSummary {
    pub speed: f32,
    pub angle: f32,
    pub distance: f32,
    pub duration: f32,
    pub catchable: f32,
    pub clamped: bool,
}

impl From<&ThrowResult> for ThrowSummary {
    fn from(throw: &ThrowResult) -> Self {
        Self {
            speed: throw.speed,
            angle: throw.angle,
            distance: throw.distance,
            duration: throw.duration,
            catchable: throw.catchable,
            clamped: throw.clamped,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DriveRequest {
    pub schema_version: u8,
    pub plays: Vec<PlayRequest>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DriveResponse {
    pub plays: Vec<PlayResponse>,
    pub yard_line: f32,
    pub down: u8,
    pub first_down: f32,
    pub status: DriveStatus,
}

fn build_route(spec: &RouteSpec) -> Result<Route> {
    if spec.waypoints.is_empty() {
        return Err(SimError::InvalidRoute("route needs at least one waypoint".into()));
    }
    if spec.waypoints.len() != spec.actions.len() {
        return Err(SimError::InvalidRoute(format!(
            "waypoint/action length mismatch: {} vs {}",
            spec.waypoints.len(),
            spec.actions.len()
        )));
    }

    let mut waypoints = Vec::with_capacity(spec.waypoints.len());
    for (wp, code) in spec.waypoints.iter().zip(&spec.actions) {
        let action = WaypointAction::from_code(*code)
            .ok_or_else(|| SimError::InvalidRoute(format!("unknown action code {}", code)))?;
        waypoints.push(Waypoint { pos: Vec2::new(wp[0], wp[1]), action });
    }
    Ok(Route::new(waypoints))
}

fn validate(request: &PlayRequest) -> Result<()> {
    if request.routes.len() != field::NUM_RECEIVERS {
        return Err(SimError::InvalidSquadSize {
            expected: field::NUM_RECEIVERS,
            found: request.routes.len(),
        });
    }
    if request.defense.len() != field::NUM_DEFENDERS {
        return Err(SimError::InvalidSquadSize {
            expected: field::NUM_DEFENDERS,
            found: request.defense.len(),
        });
    }
    if !request.throw.hold_seconds.is_finite() || request.throw.hold_seconds < 0.0 {
        return Err(SimError::InvalidThrow(format!(
            "hold_seconds must be non-negative, got {}",
            request.throw.hold_seconds
        )));
    }
    let snap_to_throw = request.throw.snap_to_throw_seconds;
    if !snap_to_throw.is_finite() || snap_to_throw < 0.0 {
        return Err(SimError::InvalidThrow("snap_to_throw_seconds must be non-negative".into()));
    }
    if snap_to_throw > MAX_SNAP_TO_THROW_SECONDS {
        return Err(SimError::InvalidThrow(format!(
            "snap_to_throw_seconds exceeds the {}s play clock, got {}",
            MAX_SNAP_TO_THROW_SECONDS, snap_to_throw
        )));
    }
    Ok(())
}

/// Run one scripted play to its outcome.
pub fn simulate_play(request: &PlayRequest) -> Result<PlayResponse> {
    validate(request)?;

    let config = request.config.clone().unwrap_or_default();
    let mut play = LivePlay::new(config);

    for (idx, spec) in request.routes.iter().enumerate() {
        play.assign_route(idx, build_route(spec)?);
    }
    // Coverage gestures resolve against the receivers' spawn positions,
    // exactly as the assignment phase ran before the snap.
    for (idx, spec) in request.defense.iter().enumerate() {
        let press = Vec2::new(spec.press[0], spec.press[1]);
        let release = Vec2::new(spec.release[0], spec.release[1]);
        let (strategy, spawn) = Strategy::from_gesture(press, release, play.receivers());
        play.assign_strategy(idx, strategy, spawn);
    }

    // Let routes develop until the scripted release
    let pre_throw_ticks = (request.throw.snap_to_throw_seconds / TICK_DT).round() as u64;
    for _ in 0..pre_throw_ticks {
        play.tick(TICK_DT);
    }

    let aim = Vec2::new(request.throw.aim[0], request.throw.aim[1]);
    let throw = play
        .throw_ball(aim, request.throw.hold_seconds)
        .ok_or_else(|| SimError::InvalidThrow("ball already in the air".into()))?;

    loop {
        if let Some(outcome) = play.tick(TICK_DT) {
            let yards = match outcome {
                PlayOutcome::Catch { yards } => yards,
                _ => 0.0,
            };
            return Ok(PlayResponse {
                outcome: outcome.into(),
                yards_gained: yards,
                ticks: play.ticks(),
                throw: ThrowSummary::from(&throw),
                landing: [throw.target.x, throw.target.y],
            });
        }
        if play.ticks() > MAX_PLAY_TICKS {
            return Err(SimError::ValidationError(format!(
                "play did not resolve within {} ticks",
                MAX_PLAY_TICKS
            )));
        }
    }
}

/// Run a sequence of plays through the down/distance machine until the
/// drive ends or the plays run out.
pub fn simulate_drive(request: &DriveRequest) -> Result<DriveResponse> {
    let mut drive = DriveState::new();
    let mut status = DriveStatus::DriveOn;
    let mut reports = Vec::new();

    for play_request in &request.plays {
        let report = simulate_play(play_request)?;
        let outcome = match report.outcome {
            OutcomeKind::Catch => PlayOutcome::Catch { yards: report.yards_gained },
            OutcomeKind::Incomplete => PlayOutcome::Incomplete,
            OutcomeKind::Interception => PlayOutcome::Interception,
        };
        reports.push(report);
        status = drive.apply(outcome);
        if status.is_over() {
            break;
        }
    }

    Ok(DriveResponse {
        plays: reports,
        yard_line: drive.yard_line,
        down: drive.down,
        first_down: drive.first_down,
        status,
    })
}

/// JSON entry point: one play.
pub fn simulate_play_json(request_json: &str) -> Result<String> {
    let request: PlayRequest = serde_json::from_str(request_json)?;
    if request.schema_version != SCHEMA_VERSION {
        return Err(SimError::ValidationError(format!(
            "unsupported schema_version {}",
            request.schema_version
        )));
    }
    let response = simulate_play(&request)?;
    Ok(serde_json::to_string(&response)?)
}

/// JSON entry point: a full drive.
pub fn simulate_drive_json(request_json: &str) -> Result<String> {
    let request: DriveRequest = serde_json::from_str(request_json)?;
    if request.schema_version != SCHEMA_VERSION {
        return Err(SimError::ValidationError(format!(
            "unsupported schema_version {}",
            request.schema_version
        )));
    }
    let response = simulate_drive(&request)?;
    Ok(serde_json::to_string(&response)?)
}
