//! One live frame of simulation
//!
//! Order is fixed: input, dot update (with collision resolution), obstacle
//! advance. Rendering reads the state afterwards.

use super::buff::BuffKind;
use super::input::InputEvent;
use super::state::{GamePhase, GameState};

/// What happened during a tick, for logging and the HUD
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    pub quit_requested: bool,
    pub obstacle_hit: bool,
    pub obstacle_recycled: bool,
    pub collected: Vec<BuffKind>,
}

/// Advance a live session by one frame
pub fn tick(state: &mut GameState, events: &[InputEvent], now_ms: u64) -> TickReport {
    let mut report = TickReport::default();

    if !state.is_playing() {
        return report;
    }

    for event in events {
        if event.is_quit_request() {
            report.quit_requested = true;
        }
        state
            .actor
            .handle_input(event, &mut state.jump_clock, now_ms);
    }

    let outcome = state.actor.update(
        state.obstacle.bounds(),
        &mut state.buffs,
        &mut state.jump_clock,
        now_ms,
        &state.area,
        &mut state.rng,
    );
    report.obstacle_hit = outcome.obstacle_hit;
    report.collected = outcome.collected;

    report.obstacle_recycled =
        state
            .obstacle
            .advance(&state.session_clock, now_ms, &state.area, &mut state.rng);

    state.frame_count += 1;

    if report.quit_requested {
        state.phase = GamePhase::Quit;
    } else if report.obstacle_hit {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over at frame {} with score {}",
            state.frame_count,
            state.score()
        );
    }

    log::trace!(
        "Frame {}: dot=({}, {}) obstacle=({}, {}) speed={}",
        state.frame_count,
        state.actor.pos.x,
        state.actor.pos.y,
        state.obstacle.pos.x,
        state.obstacle.pos.y,
        state.obstacle.speed
    );

    report
}
