//! Flappy - a side-scrolling arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bird physics, pipes, scoring, phases)
//! - `ui`: Menu buttons and text overlay layout
//! - `renderer`: WebGPU rendering pipeline
//! - `settings`: Player-facing configuration

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::Settings;

/// Game configuration constants
///
/// All distances are in game units on a `WIDTH` x `HEIGHT` playfield with the
/// origin at the top-left corner and y growing downward.
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions
    pub const WIDTH: i32 = 400;
    pub const HEIGHT: i32 = 600;
    /// Height of the ground strip at the bottom of the playfield
    pub const GROUND_HEIGHT: i32 = 100;
    /// Top edge of the ground; touching it ends the run
    pub const GROUND_Y: i32 = HEIGHT - GROUND_HEIGHT;
    /// Bird may rise this far above the top edge before the run ends
    pub const CEILING_Y: i32 = -50;

    /// Bird sprite box
    pub const BIRD_WIDTH: i32 = 40;
    pub const BIRD_HEIGHT: i32 = 30;
    /// Bird spawn centre
    pub const BIRD_X: i32 = WIDTH / 4;
    pub const BIRD_SPAWN_Y: i32 = HEIGHT / 2;
    /// Downward acceleration, units/tick²
    pub const GRAVITY: f64 = 0.4;
    /// Velocity set by a flap (overrides, not added)
    pub const FLAP_VELOCITY: f64 = -6.0;
    /// Degrees of tilt per unit of vertical velocity
    pub const ROTATION_PER_VELOCITY: f32 = 3.0;
    /// Number of wing animation frames
    pub const BIRD_FRAMES: u8 = 3;
    /// Wing animation interval (200 ms)
    pub const ANIM_INTERVAL_TICKS: u32 = 12;

    /// Pipe sprite box
    pub const PIPE_WIDTH: i32 = 70;
    pub const PIPE_HEIGHT: i32 = HEIGHT;
    /// Vertical clearance between the top and bottom pipe
    pub const PIPE_GAP: i32 = 170;
    /// Allowed gap heights (top edge of the bottom pipe)
    pub const PIPE_HEIGHTS: [i32; 3] = [250, 300, 350];
    /// Horizontal centre of freshly spawned pipes
    pub const PIPE_SPAWN_X: i32 = WIDTH + 100;
    /// Leftward pipe speed, units/tick
    pub const PIPE_SPEED: i32 = 4;
    /// Pipe spawn interval (1200 ms)
    pub const SPAWN_INTERVAL_TICKS: u32 = 72;

    /// Leftward ground scroll speed, units/tick
    pub const GROUND_SPEED: i32 = 2;
}
