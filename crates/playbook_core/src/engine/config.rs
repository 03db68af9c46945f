//! Throw tuning parameters
//!
//! Game-balance knobs for the arc solver, kept in a config struct so callers
//! can rebalance a play without rebuilding. Defaults reproduce the canonical
//! constants in [`physics_constants::throw`](super::physics_constants::throw).

use serde::{Deserialize, Serialize};

use super::physics_constants::throw;

/// Tunable throw parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Full-power throw speed (px/s) (default: 70.0)
    pub throw_speed: f32,
    /// Hold time above which a throw is full power (s) (default: 0.5)
    pub fast_throw_time: f32,
    /// Gravitational constant for the arc solver (default: 9.81)
    pub gravity: f32,
    /// Catchable-window numerator, `scale / tan(zeta)` (default: 10.0).
    /// Empirical balance constant; larger values widen the catch window.
    pub catchable_scale: f32,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            throw_speed: throw::THROW_SPEED,
            fast_throw_time: throw::FAST_THROW_TIME,
            gravity: throw::GRAVITY,
            catchable_scale: throw::CATCHABLE_SCALE,
        }
    }
}
