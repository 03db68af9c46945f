//! Velocity-smoothing steering controller
//!
//! Shared by receivers and defenders: each tick the controller eases the
//! actor's velocity toward a desired heading instead of snapping to it. The
//! per-axis error is capped at half the top speed, then decayed
//! exponentially, so the effective per-tick correction never exceeds
//! `cap * ACCEL * dt` on either axis.

use super::physics_constants::motion;
use super::types::Vec2;

/// Deceleration gate for [`steer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BrakingMode {
    /// Never slow down (odd route actions; defenders closing on the ball)
    Disabled,
    /// Slow to a stop inside the braking radius. `radius_factor` scales the
    /// radius: 1.0 normally, [`motion::THROWN_BRAKING_FACTOR`] for a
    /// receiver sprinting to a catch point.
    Enabled { radius_factor: f32 },
}

impl BrakingMode {
    /// Braking gate for a receiver, from the head action parity and thrown
    /// state.
    pub fn for_receiver(allows_braking: bool, thrown: bool) -> Self {
        if !allows_braking {
            return BrakingMode::Disabled;
        }
        let radius_factor = if thrown { motion::THROWN_BRAKING_FACTOR } else { 1.0 };
        BrakingMode::Enabled { radius_factor }
    }
}

/// One steering step: returns the new velocity.
///
/// 1. Desired speed is `top_speed`, dropped to zero when braking is enabled
///    and the actor sits inside its braking radius `factor * speed / ACCEL`.
/// 2. Desired velocity points along the bearing to `target`.
/// 3. Each velocity axis eases toward the desired axis with a capped,
///    exponentially decayed correction.
pub fn steer(
    vel: Vec2,
    pos: Vec2,
    target: Vec2,
    braking: BrakingMode,
    top_speed: f32,
    dt: f32,
) -> Vec2 {
    let speed = vel.length();
    let desired_speed = match braking {
        BrakingMode::Disabled => top_speed,
        BrakingMode::Enabled { radius_factor } => {
            let braking_dist = radius_factor / motion::ACCEL * speed;
            if pos.distance_to(target) < braking_dist {
                0.0
            } else {
                top_speed
            }
        }
    };

    let desired = Vec2::from_angle(pos.bearing_to(target)) * desired_speed;
    Vec2::new(smooth_axis(desired.x, vel.x, dt), smooth_axis(desired.y, vel.y, dt))
}

/// Ease one velocity axis toward its desired value.
///
/// The error beyond the per-axis cap ("spill") is carried through unchanged
/// so only the capped portion is corrected this tick:
/// `new = desired - decayed_error - spill`, which works out to
/// `current + clamped_error * ACCEL * dt`.
fn smooth_axis(desired: f32, current: f32, dt: f32) -> f32 {
    let cap = motion::MAX_AXIS_CORRECTION;
    let err = desired - current;

    let (clamped, spill) = if err > cap {
        (cap, err - cap)
    } else if err < -cap {
        (-cap, err + cap)
    } else {
        (err, 0.0)
    };

    let decayed = clamped * (1.0 - motion::ACCEL * dt);
    desired - decayed - spill
}
