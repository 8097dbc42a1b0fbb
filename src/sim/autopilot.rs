//! Idle/demo mode - a simple AI that plays the game
//!
//! Jumps away from the obstacle when it is about to cross the dot's lane.

use super::input::{InputEvent, Key};
use super::state::GameState;
use crate::consts::OBSTACLE_BASE_SPEED;

/// Frames of warning before the obstacle reaches the dot
const LEAD_FRAMES: i32 = 4;

/// Input events the autopilot would send this frame
pub fn plan(state: &GameState) -> Vec<InputEvent> {
    if !state.is_playing() || !state.actor.is_grounded() {
        return Vec::new();
    }

    let dot = state.actor.bounds();
    let obstacle = state.obstacle.bounds();

    let in_lane = obstacle.top() < dot.bottom() && obstacle.bottom() > dot.top();
    let gap = obstacle.left() - dot.right();
    let reach = state.obstacle.speed.max(OBSTACLE_BASE_SPEED) * LEAD_FRAMES;
    if !in_lane || gap < 0 || gap > reach {
        return Vec::new();
    }

    // Jump away from the side the obstacle mostly occupies
    let obstacle_center = obstacle.top() + obstacle.h / 2;
    let dot_center = dot.top() + dot.h / 2;
    let key = if obstacle_center >= dot_center {
        Key::Up
    } else {
        Key::Down
    };

    vec![InputEvent::press(key), InputEvent::release(key)]
}
