//! Rendering boundary
//!
//! The simulation never draws. `render_frame` reads a `GameState` and issues
//! calls on a `Renderer` supplied by the platform.

pub mod draw_list;
pub mod hud;

pub use draw_list::{DrawCommand, DrawList};
pub use hud::{StatusBar, status_bars};

use glam::IVec2;

use crate::consts::{INVINCIBLE_ALPHA, OPAQUE_ALPHA};
use crate::settings::HudLayout;
use crate::sim::{BuffKind, GameState, Rect};

/// RGBA color
pub type Color = [u8; 4];

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [0xFF, 0xFF, 0xFF, 0xFF];
    pub const OUTLINE: Color = [0x00, 0x00, 0x00, 0xFF];
    pub const BAR_FILL: Color = [0xFF, 0x00, 0x00, 0xFF];
}

/// Sprite identifiers the renderer knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Dot,
    Point,
    Speed,
    Invincibility,
    DoublePoints,
}

impl Sprite {
    pub fn for_buff(kind: BuffKind) -> Self {
        match kind {
            BuffKind::Point => Sprite::Point,
            BuffKind::Speed => Sprite::Speed,
            BuffKind::Invincibility => Sprite::Invincibility,
            BuffKind::DoublePoints => Sprite::DoublePoints,
        }
    }
}

/// Drawing surface provided by the platform
pub trait Renderer {
    fn clear(&mut self, color: Color);
    fn draw_sprite(&mut self, sprite: Sprite, pos: IVec2, angle_degrees: f64, alpha: u8);
    fn draw_rect(&mut self, rect: Rect, color: Color);
    fn draw_text(&mut self, text: &str, pos: IVec2);
    fn present(&mut self);
}

/// Draw one frame: status bars, score, obstacle, dot, pickups
pub fn render_frame(state: &GameState, renderer: &mut dyn Renderer, now_ms: u64, hud: &HudLayout) {
    let area = &state.area;
    renderer.clear(colors::BACKGROUND);

    let bars = status_bars(&state.buffs, now_ms, area, hud);
    for bar in &bars {
        renderer.draw_rect(bar.outline, colors::OUTLINE);
    }
    for bar in &bars {
        if let Some(fill) = bar.fill {
            renderer.draw_rect(fill, colors::BAR_FILL);
        }
    }

    renderer.draw_text(
        &hud::score_text(state.score()),
        IVec2::new(area.padding, area.padding),
    );
    for bar in &bars {
        // Anchored at the bar's left edge; the text service right-aligns against it
        renderer.draw_text(bar.label, IVec2::new(bar.outline.x, bar.outline.y));
    }

    renderer.draw_rect(state.obstacle.bounds(), colors::OUTLINE);

    let alpha = if state.buffs.is_active(BuffKind::Invincibility, now_ms) {
        INVINCIBLE_ALPHA
    } else {
        OPAQUE_ALPHA
    };
    renderer.draw_sprite(Sprite::Dot, state.actor.pos, state.actor.angle, alpha);

    for buff in state.buffs.iter() {
        renderer.draw_sprite(Sprite::for_buff(buff.kind), buff.pos, 0.0, OPAQUE_ALPHA);
    }

    renderer.present();
}
