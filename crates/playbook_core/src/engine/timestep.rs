/// timestep.rs
/// Frame clock constants
///
/// The simulation advances one fixed tick per rendered frame. The game
/// clock runs at 30 fps with wall time stretched by a 1.5x scale factor,
/// so one frame advances the simulation by 50ms of game time.

/// Target frame rate driving the tick loop (frames/s)
pub const FRAME_RATE: u32 = 30;

/// Wall-clock to game-time stretch factor
pub const TIME_SCALE: f32 = 1.5;

/// Game-time seconds advanced per frame tick
pub const TICK_DT: f32 = TIME_SCALE / FRAME_RATE as f32;

// Compile-time validation
const _: () = assert!(TICK_DT > 0.0 && TICK_DT < 1.0);
