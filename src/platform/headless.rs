//! Headless platform: simulated time, recorded drawing, scripted input
//!
//! Time advances by a fixed frame period on every `end_frame`. Input comes
//! from a per-frame script, the optional autopilot, and a menu script that
//! restarts a set number of times after game over before quitting.

use std::collections::VecDeque;

use super::Platform;
use crate::renderer::{DrawList, Renderer};
use crate::sim::{GamePhase, GameState, InputEvent, Key, autopilot};

pub struct HeadlessPlatform {
    now_ms: u64,
    frame_ms: u64,
    frame: u64,
    pending: VecDeque<InputEvent>,
    /// (frame index, event), sorted by frame
    script: VecDeque<(u64, InputEvent)>,
    autopilot: bool,
    restarts_remaining: u32,
    draw_list: DrawList,
}

impl HeadlessPlatform {
    pub fn new(frame_ms: u64) -> Self {
        Self {
            now_ms: 0,
            frame_ms: frame_ms.max(1),
            frame: 0,
            pending: VecDeque::new(),
            script: VecDeque::new(),
            autopilot: false,
            restarts_remaining: 0,
            draw_list: DrawList::new(),
        }
    }

    /// Let the autopilot play the live frames
    pub fn with_autopilot(mut self, enabled: bool) -> Self {
        self.autopilot = enabled;
        self
    }

    /// Press Restart this many times after game over, then quit
    pub fn with_restarts(mut self, restarts: u32) -> Self {
        self.restarts_remaining = restarts;
        self
    }

    /// Deliver `event` at the start of frame `frame`
    pub fn with_script(mut self, mut script: Vec<(u64, InputEvent)>) -> Self {
        script.sort_by_key(|(frame, _)| *frame);
        self.script = script.into();
        self
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    /// Frames completed so far
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl Platform for HeadlessPlatform {
    fn ready(&self) -> bool {
        true
    }

    fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn poll_event(&mut self) -> Option<InputEvent> {
        self.pending.pop_front()
    }

    fn begin_frame(&mut self, state: &GameState) {
        while let Some(&(frame, event)) = self.script.front() {
            if frame > self.frame {
                break;
            }
            self.pending.push_back(event);
            self.script.pop_front();
        }

        match state.phase {
            GamePhase::Playing if self.autopilot => {
                self.pending.extend(autopilot::plan(state));
            }
            GamePhase::GameOver if self.pending.is_empty() => {
                let key = if self.restarts_remaining > 0 {
                    self.restarts_remaining -= 1;
                    Key::Restart
                } else {
                    Key::ConfirmQuit
                };
                log::debug!("Menu: pressing {:?}", key);
                self.pending.push_back(InputEvent::press(key));
            }
            _ => {}
        }
    }

    fn renderer(&mut self) -> &mut dyn Renderer {
        &mut self.draw_list
    }

    fn end_frame(&mut self) {
        self.frame += 1;
        self.now_ms += self.frame_ms;
    }
}
