//! Power-up pickups and their timed effects
//!
//! A buff is either idle or active; "active" is derived from the last
//! collection time and the kind's duration, never stored.

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;
use crate::settings::PlayArea;

/// Power-up kinds, in collision-resolution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuffKind {
    /// Instant score award
    Point,
    /// Doubles horizontal impulse
    Speed,
    /// Obstacle hits do not end the session
    Invincibility,
    /// Point awards count twice
    DoublePoints,
}

impl BuffKind {
    pub const ALL: [BuffKind; 4] = [
        BuffKind::Point,
        BuffKind::Speed,
        BuffKind::Invincibility,
        BuffKind::DoublePoints,
    ];

    /// How long a collection keeps the buff active (0 = instantaneous)
    pub const fn duration_ms(self) -> u64 {
        match self {
            BuffKind::Point => 0,
            BuffKind::Speed | BuffKind::Invincibility | BuffKind::DoublePoints => BUFF_DURATION_MS,
        }
    }

    #[inline]
    const fn index(self) -> usize {
        match self {
            BuffKind::Point => 0,
            BuffKind::Speed => 1,
            BuffKind::Invincibility => 2,
            BuffKind::DoublePoints => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BuffKind::Point => "point",
            BuffKind::Speed => "speed",
            BuffKind::Invincibility => "invincibility",
            BuffKind::DoublePoints => "double-points",
        }
    }
}

/// A single repositionable pickup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buff {
    pub kind: BuffKind,
    pub pos: IVec2,
    /// Timestamp of the last collection, `None` if never collected
    pub last_collected_ms: Option<u64>,
}

impl Buff {
    /// Create a buff at a random spot in the play area
    pub fn new<R: Rng>(kind: BuffKind, area: &PlayArea, rng: &mut R) -> Self {
        let mut buff = Self {
            kind,
            pos: IVec2::ZERO,
            last_collected_ms: None,
        };
        buff.relocate(area, rng);
        buff
    }

    pub fn bounds(&self) -> Rect {
        Rect::at(self.pos, IVec2::new(BUFF_WIDTH, BUFF_HEIGHT))
    }

    /// Move to a new random spot: anywhere horizontally, middle half vertically
    pub fn relocate<R: Rng>(&mut self, area: &PlayArea, rng: &mut R) {
        let x = rng.random_range(0..area.width.max(1));
        let y = area.height / 4 + rng.random_range(0..area.height.max(1)) / 2;
        self.pos = IVec2::new(x, y);
    }

    /// Start (or re-arm) the active window at `now_ms`
    pub fn mark_collected(&mut self, now_ms: u64) {
        self.last_collected_ms = Some(now_ms);
    }

    /// Milliseconds since the last collection
    pub fn elapsed_since_collected(&self, now_ms: u64) -> Option<u64> {
        self.last_collected_ms.map(|t| now_ms.saturating_sub(t))
    }

    pub fn is_active(&self, now_ms: u64) -> bool {
        self.elapsed_since_collected(now_ms)
            .is_some_and(|elapsed| elapsed < self.kind.duration_ms())
    }

    /// Share of the active window still remaining, in [0, 1]; 0 when idle
    pub fn remaining_fraction(&self, now_ms: u64) -> f32 {
        let duration = self.kind.duration_ms();
        match self.elapsed_since_collected(now_ms) {
            Some(elapsed) if elapsed < duration => {
                ((duration - elapsed) as f32 / duration as f32).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }
}

/// The four pickups of a session, one per kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buffs {
    slots: [Buff; 4],
}

impl Buffs {
    pub fn new<R: Rng>(area: &PlayArea, rng: &mut R) -> Self {
        Self {
            slots: BuffKind::ALL.map(|kind| Buff::new(kind, area, &mut *rng)),
        }
    }

    pub fn get(&self, kind: BuffKind) -> &Buff {
        &self.slots[kind.index()]
    }

    pub fn get_mut(&mut self, kind: BuffKind) -> &mut Buff {
        &mut self.slots[kind.index()]
    }

    pub fn is_active(&self, kind: BuffKind, now_ms: u64) -> bool {
        self.get(kind).is_active(now_ms)
    }

    pub fn remaining_fraction(&self, kind: BuffKind, now_ms: u64) -> f32 {
        self.get(kind).remaining_fraction(now_ms)
    }

    /// Buffs in collision-resolution order
    pub fn iter(&self) -> impl Iterator<Item = &Buff> {
        self.slots.iter()
    }
}
