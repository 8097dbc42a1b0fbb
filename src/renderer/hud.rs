//! Status bar layout for the timed power-ups
//!
//! Bars are stacked at the top right of the play area; the fill shrinks
//! toward the right edge as the power-up runs out.

use crate::settings::{HudLayout, PlayArea};
use crate::sim::{BuffKind, Buffs, Rect};

/// Timed buffs in on-screen order, top to bottom
pub const BAR_ORDER: [BuffKind; 3] = [
    BuffKind::DoublePoints,
    BuffKind::Speed,
    BuffKind::Invincibility,
];

/// Label drawn left of a buff's status bar
pub fn bar_label(kind: BuffKind) -> &'static str {
    match kind {
        BuffKind::DoublePoints => "Double points: ",
        BuffKind::Speed => "Extra speed: ",
        BuffKind::Invincibility => "Invisibility: ",
        BuffKind::Point => "",
    }
}

pub fn score_text(score: u64) -> String {
    format!("Score:{}", score)
}

/// One status bar: outline always drawn, fill only while active
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBar {
    pub kind: BuffKind,
    pub label: &'static str,
    pub outline: Rect,
    pub fill: Option<Rect>,
}

/// Compute the status bars for the current frame
pub fn status_bars(buffs: &Buffs, now_ms: u64, area: &PlayArea, layout: &HudLayout) -> Vec<StatusBar> {
    BAR_ORDER
        .iter()
        .enumerate()
        .map(|(row, &kind)| {
            let y = area.padding + row as i32 * layout.row_height;
            let outline = Rect::new(
                area.width - layout.bar_width - area.padding,
                y,
                layout.bar_width,
                layout.row_height,
            );

            let fill = buffs.is_active(kind, now_ms).then(|| {
                let fraction = buffs.remaining_fraction(kind, now_ms);
                let width = (layout.bar_width as f32 * fraction) as i32;
                Rect::new(area.width - area.padding - width, y, width, layout.row_height)
            });

            StatusBar {
                kind,
                label: bar_label(kind),
                outline,
                fill,
            }
        })
        .collect()
}
