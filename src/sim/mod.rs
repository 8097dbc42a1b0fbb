//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Timestamps are passed in, never read
//! - Seeded RNG only
//! - Fixed resolution order (obstacle, then Point, Speed, Invincibility, DoublePoints)
//! - No rendering or platform dependencies

pub mod actor;
pub mod autopilot;
pub mod buff;
pub mod clock;
pub mod collision;
pub mod input;
pub mod obstacle;
pub mod state;
pub mod tick;
pub mod trajectory;

pub use actor::{Actor, MoveOutcome, Orientation};
pub use buff::{Buff, BuffKind, Buffs};
pub use clock::Clock;
pub use collision::{Rect, overlaps};
pub use input::{InputEvent, Key};
pub use obstacle::{Obstacle, speed_for_elapsed};
pub use state::{GamePhase, GameState};
pub use tick::{TickReport, tick};
pub use trajectory::Trajectory;
