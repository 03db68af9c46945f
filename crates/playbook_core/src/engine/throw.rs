//! Throw gesture -> ballistic arc solver
//!
//! Converts a press/release gesture and hold duration into launch speed,
//! elevation, flight duration and the catchable window used for catch and
//! interception resolution. Throws beyond the reachable range are clamped to
//! the maximum achievable distance along the same bearing instead of
//! producing an imaginary root.

use serde::{Deserialize, Serialize};

use super::config::PlayConfig;
use super::physics_constants::throw as constants;
use super::types::Vec2;

/// Resolved throw parameters, fixed for the rest of the play.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThrowResult {
    /// Launch speed actually used (px/s); may differ from the gesture speed
    /// when the throw was clamped
    pub speed: f32,
    /// Bearing from the release point to the target (rad)
    pub angle: f32,
    /// Horizontal distance to the landing point (px); clamped to max range
    /// when the gesture asked for more
    pub distance: f32,
    /// Landing point; recomputed along the bearing when clamped
    pub target: Vec2,
    /// Launch elevation (rad), always in the low-arc root
    pub zeta: f32,
    /// Catchable half-width (px), `scale / tan(zeta)`: widens as the arc
    /// flattens. Truncated to a whole pixel count
    pub catchable: f32,
    /// Flight duration (s), time-to-apex model
    pub duration: f32,
    /// Constant horizontal ball speed along the bearing (px/s)
    pub ball_speed: f32,
    /// True when the gesture distance was out of range at the gesture speed
    pub clamped: bool,
}

/// Solve a throw gesture into an arc.
///
/// `press` is the fixed release point, `release` the mouse-up location and
/// `held_seconds` how long the throw was powered up.
pub fn resolve_throw(
    press: Vec2,
    release: Vec2,
    held_seconds: f32,
    config: &PlayConfig,
) -> ThrowResult {
    let g = config.gravity;
    let angle = press.bearing_to(release);
    let mut distance = press.distance_to(release);
    let fast = held_seconds > config.fast_throw_time;
    let mut speed = if fast { config.throw_speed } else { config.throw_speed / 2.0 };

    let mut discriminant = speed.powi(4) - g.powi(2) * distance.powi(2);
    let mut target = release;
    let mut clamped = false;

    if discriminant < 0.0 {
        // Out of range at this speed. A slow lob first gets as much speed as
        // the full-power throw allows; then the distance collapses to the
        // maximum achievable range along the same bearing (single 45-degree
        // root, discriminant exactly zero).
        if !fast {
            speed = config.throw_speed.min((distance * g).sqrt());
        }
        distance = speed.powi(2) / g;
        discriminant = 0.0;
        target = press + Vec2::from_angle(angle) * distance;
        clamped = true;
        log::debug!(
            "throw clamped to max range: speed={:.1} distance={:.1}",
            speed,
            distance
        );
    }

    // Launch elevation. The low root keeps zeta in (0, pi/4]; the clamp
    // guards the degenerate distance-zero gesture and keeps tan/sin finite.
    let zeta = if distance > f32::EPSILON {
        ((speed.powi(2) - discriminant.sqrt()) / (g * distance)).atan()
    } else {
        0.0
    }
    .clamp(constants::ZETA_MIN, constants::ZETA_MAX);

    let catchable = (config.catchable_scale / zeta.tan()).trunc();
    let duration = speed * zeta.sin() / g;
    let ball_speed = distance / duration;

    ThrowResult { speed, angle, distance, target, zeta, catchable, duration, ball_speed, clamped }
}
