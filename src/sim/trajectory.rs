//! Vertical integrators for the dot's jump arc
//!
//! Velocity is always recomputed from the time since the jump started.
//! The integrators differ only in how that velocity becomes a per-frame
//! displacement.

use serde::{Deserialize, Serialize};

use crate::consts::GRAVITY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Trajectory {
    /// Add the instantaneous velocity once per frame. The arc shape depends
    /// on the frame rate.
    #[default]
    PerFrame,
    /// Scale the instantaneous velocity by the frame's duration relative to
    /// a reference frame, so the arc is independent of the frame rate.
    FixedStep { reference_frame_ms: u64 },
}

impl Trajectory {
    /// Instantaneous vertical velocity `jump_vy + GRAVITY * t / 1000`
    pub fn vertical_velocity(jump_vy: i32, jump_elapsed_ms: u64) -> i32 {
        let gravity_term = GRAVITY as i64 * jump_elapsed_ms as i64 / 1000;
        (jump_vy as i64 + gravity_term).clamp(i32::MIN as i64, i32::MAX as i64) as i32
    }

    /// Displacement to apply this frame for velocity `vy`
    pub fn displacement(&self, vy: i32, frame_dt_ms: u64) -> i32 {
        match *self {
            Trajectory::PerFrame => vy,
            Trajectory::FixedStep { reference_frame_ms } => {
                let reference = reference_frame_ms.max(1) as i64;
                (vy as i64 * frame_dt_ms as i64 / reference) as i32
            }
        }
    }
}
