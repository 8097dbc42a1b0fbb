//! Recording renderer
//!
//! Stores the draw calls of the frame in progress; `present` moves them to
//! the last presented frame. Used headless and in tests.

use glam::IVec2;

use super::{Color, Renderer, Sprite};
use crate::sim::Rect;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        color: Color,
    },
    Sprite {
        sprite: Sprite,
        pos: IVec2,
        angle_degrees: f64,
        alpha: u8,
    },
    Rect {
        rect: Rect,
        color: Color,
    },
    Text {
        text: String,
        pos: IVec2,
    },
}

#[derive(Debug, Default)]
pub struct DrawList {
    pending: Vec<DrawCommand>,
    presented: Vec<DrawCommand>,
    frames_presented: u64,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the last presented frame
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.presented
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// First sprite of the given kind in the last presented frame
    pub fn find_sprite(&self, wanted: Sprite) -> Option<&DrawCommand> {
        self.presented
            .iter()
            .find(|cmd| matches!(cmd, DrawCommand::Sprite { sprite, .. } if *sprite == wanted))
    }
}

impl Renderer for DrawList {
    fn clear(&mut self, color: Color) {
        self.pending.clear();
        self.pending.push(DrawCommand::Clear { color });
    }

    fn draw_sprite(&mut self, sprite: Sprite, pos: IVec2, angle_degrees: f64, alpha: u8) {
        self.pending.push(DrawCommand::Sprite {
            sprite,
            pos,
            angle_degrees,
            alpha,
        });
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.pending.push(DrawCommand::Rect { rect, color });
    }

    fn draw_text(&mut self, text: &str, pos: IVec2) {
        self.pending.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
        });
    }

    fn present(&mut self) {
        self.presented = std::mem::take(&mut self.pending);
        self.frames_presented += 1;
        log::trace!(
            "Presented frame {} ({} commands)",
            self.frames_presented,
            self.presented.len()
        );
    }
}
