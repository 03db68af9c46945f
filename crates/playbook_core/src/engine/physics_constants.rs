//! Physics constants for play simulation
//!
//! Pixel-space tuning values; changing them changes game balance, not
//! correctness.

/// Actor motion constants
pub mod motion {
    /// Actor top speed (px/s)
    pub const TOP_SPEED: f32 = 20.0;
    /// Time constant for exponential velocity smoothing (1/s)
    pub const ACCEL: f32 = 0.8;
    /// Per-axis velocity correction cap (px/s)
    pub const MAX_AXIS_CORRECTION: f32 = TOP_SPEED / 2.0;
    /// A waypoint is consumed once the runner is inside this radius (px)
    pub const WAYPOINT_RADIUS: f32 = 5.0;
    /// Braking-distance multiplier once the ball is in the air.
    /// Shrinks the braking radius so a targeted receiver holds full speed
    /// into the catch point.
    pub const THROWN_BRAKING_FACTOR: f32 = 0.5;
}

/// Throw / ballistic arc constants
pub mod throw {
    /// Full-power throw speed (px/s)
    pub const THROW_SPEED: f32 = 70.0;
    /// Hold duration above which a throw is full power (s)
    pub const FAST_THROW_TIME: f32 = 0.5;
    /// Gravitational constant used by the arc solver
    pub const GRAVITY: f32 = 9.81;
    /// Numerator of the catchable-window formula `scale / tan(zeta)`.
    /// Empirical game-balance constant with no physical derivation.
    pub const CATCHABLE_SCALE: f32 = 10.0;
    /// Launch elevation clamp keeping tan/sin away from degenerate values
    /// (rad). The lower bound caps the catchable window for near-zero
    /// gesture distances where the arc degenerates to flat.
    pub const ZETA_MIN: f32 = 0.01;
    pub const ZETA_MAX: f32 = std::f32::consts::FRAC_PI_2 - 0.01;
}

/// Field geometry and game rules
pub mod field {
    /// Playable field width (px)
    pub const WIDTH_PX: f32 = 500.0;
    /// Playable field height (px)
    pub const HEIGHT_PX: f32 = 700.0;
    /// Pixels per yard
    pub const PX_PER_YD: f32 = 25.0;
    /// End zone yard line - crossing it is a touchdown
    pub const END_ZONE_YD: f32 = 110.0;
    /// Drive starting yard line
    pub const STARTING_YD: f32 = 75.0;
    /// Downs available to convert
    pub const DOWNS: u8 = 3;
    /// Yards needed for a fresh set of downs
    pub const FIRST_DOWN_YD: f32 = 10.0;
    /// Man-coverage standoff distance (px)
    pub const MAN_BUFFER: f32 = 20.0;
    /// Receivers fielded per play
    pub const NUM_RECEIVERS: usize = 3;
    /// Defenders fielded per play
    pub const NUM_DEFENDERS: usize = NUM_RECEIVERS + 2;
    /// Fixed throw release point: midfield at the bottom edge
    pub const RELEASE_X: f32 = WIDTH_PX / 2.0;
    pub const RELEASE_Y: f32 = HEIGHT_PX - 2.0;
}

/// Catch / interception resolution constants
pub mod resolution {
    /// Actor-to-ball proximity for a catch or interception (px)
    pub const CATCH_RADIUS: f32 = 7.0;
    /// Zone defenders ignore receivers farther than this from the centroid
    pub const ZONE_SEARCH_RADIUS: f32 = super::field::HEIGHT_PX / 3.0;
    /// Velocity lead factor when shadowing a receiver (s)
    pub const LEAD_FACTOR: f32 = 4.0;
    /// Strategy gesture: a press within this radius of a receiver selects
    /// man coverage of that receiver (px)
    pub const MAN_PICK_RADIUS: f32 = 2.0 * super::field::PX_PER_YD;
}
