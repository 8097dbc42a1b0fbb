//! Platform abstraction layer
//!
//! The frame orchestrator talks to the outside world only through
//! `Platform`:
//! - Time (milliseconds, monotonic)
//! - Input events
//! - Drawing surface and frame pacing
//! - Asset readiness

pub mod headless;

pub use headless::HeadlessPlatform;

pub use crate::sim::{InputEvent, Key};

use crate::renderer::Renderer;
use crate::sim::GameState;

pub trait Platform {
    /// Assets and surfaces are loaded; the simulation may start
    fn ready(&self) -> bool;

    /// Current monotonic time in milliseconds
    fn now_ms(&self) -> u64;

    /// Next pending input event, if any
    fn poll_event(&mut self) -> Option<InputEvent>;

    /// Called before events are drained each frame, with the state the
    /// frame starts from
    fn begin_frame(&mut self, _state: &GameState) {}

    fn renderer(&mut self) -> &mut dyn Renderer;

    /// Wait for the next frame (vsync)
    fn end_frame(&mut self);
}
