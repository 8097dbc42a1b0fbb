//! Flip Dot - a side-scrolling gravity-flip arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, power-ups, obstacle)
//! - `game`: Frame orchestration (menu loop + live loop)
//! - `renderer`: Rendering boundary (sprites, status bars, draw recording)
//! - `platform`: Input/time/present abstraction
//! - `settings`: Play area and session configuration

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{Game, RunSummary};
pub use settings::{PlayArea, RestartPolicy, Settings};

/// Game configuration constants
pub mod consts {
    /// Actor (dot) bounding box
    pub const DOT_WIDTH: i32 = 20;
    pub const DOT_HEIGHT: i32 = 20;
    /// Horizontal spawn position of the dot
    pub const DOT_SPAWN_X: i32 = 20;

    /// Vertical acceleration (pixels/frame per second)
    pub const GRAVITY: i32 = 30;
    /// Initial vertical velocity of every jump (pixels/frame)
    pub const JUMP_VELOCITY: i32 = -10;

    /// Horizontal impulse per key press
    pub const BASE_HORIZONTAL_SPEED: i32 = 5;
    /// Horizontal impulse while the Speed power-up is active
    pub const BOOSTED_HORIZONTAL_SPEED: i32 = 10;

    /// Obstacle base size; each spawn draws width/height in [BASE/2, BASE-1]
    pub const OBSTACLE_BASE_SIZE: i32 = 50;
    /// Obstacle speed floor and cap (pixels/frame)
    pub const OBSTACLE_BASE_SPEED: i32 = 10;
    pub const OBSTACLE_MAX_SPEED: i32 = 20;
    /// Session time per +1 obstacle speed
    pub const OBSTACLE_RAMP_INTERVAL_MS: u64 = 10_000;

    /// Power-up pickup size
    pub const BUFF_WIDTH: i32 = 20;
    pub const BUFF_HEIGHT: i32 = 20;
    /// Duration of the timed power-ups
    pub const BUFF_DURATION_MS: u64 = 3000;

    /// Dot alpha while invincible
    pub const INVINCIBLE_ALPHA: u8 = 127;
    pub const OPAQUE_ALPHA: u8 = 255;
}
