//! The player-controlled dot
//!
//! Owns kinematics, score and the horizontal speed boost. Each frame it reads
//! the obstacle and power-up state, resolves collisions and applies effects.

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::buff::{BuffKind, Buffs};
use super::clock::Clock;
use super::collision::Rect;
use super::input::{InputEvent, Key};
use super::trajectory::Trajectory;
use crate::consts::*;
use crate::settings::PlayArea;

/// Which way gravity pulls during the current jump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Jump upward, fall back down to the midline
    Normal,
    /// Jump downward, fall back up to the midline
    Inverted,
}

/// What happened during one `Actor::update`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Non-immune obstacle hit; ends the live session
    pub obstacle_hit: bool,
    /// Power-ups collected this frame, in resolution order
    pub collected: Vec<BuffKind>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub pos: IVec2,
    /// Horizontal impulse sum and last computed vertical velocity
    pub vel: IVec2,
    /// Initial vertical velocity of the current jump, 0 when grounded
    pub jump_vy: i32,
    pub orientation: Orientation,
    /// Impulse added per horizontal key press (5, or 10 while boosted)
    pub horizontal_speed: i32,
    pub score: u64,
    pub score_multiplier: u64,
    /// Sprite rotation in degrees (cosmetic)
    pub angle: f64,
    pub trajectory: Trajectory,
    last_update_ms: Option<u64>,
}

impl Actor {
    /// Spawn grounded on the midline
    pub fn new(area: &PlayArea, trajectory: Trajectory) -> Self {
        Self {
            pos: IVec2::new(DOT_SPAWN_X, area.midline()),
            vel: IVec2::ZERO,
            jump_vy: 0,
            orientation: Orientation::Normal,
            horizontal_speed: BASE_HORIZONTAL_SPEED,
            score: 0,
            score_multiplier: 1,
            angle: 0.0,
            trajectory,
            last_update_ms: None,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::at(self.pos, IVec2::new(DOT_WIDTH, DOT_HEIGHT))
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn is_grounded(&self) -> bool {
        self.jump_vy == 0
    }

    pub fn is_boosted(&self) -> bool {
        self.horizontal_speed != BASE_HORIZONTAL_SPEED
    }

    /// Apply one input event: jump triggers and horizontal impulses
    pub fn handle_input(&mut self, event: &InputEvent, jump_clock: &mut Clock, now_ms: u64) {
        match *event {
            InputEvent::KeyDown { key, repeat } => {
                if self.is_grounded() {
                    match key {
                        Key::Up => self.begin_jump(Orientation::Normal, jump_clock, now_ms),
                        Key::Down => self.begin_jump(Orientation::Inverted, jump_clock, now_ms),
                        _ => {}
                    }
                }

                if !repeat {
                    match key {
                        Key::Right => self.vel.x += self.horizontal_speed,
                        Key::Left => self.vel.x -= self.horizontal_speed,
                        _ => {}
                    }
                }
            }
            InputEvent::KeyUp { key } => match key {
                Key::Left => self.vel.x += self.horizontal_speed,
                Key::Right => self.vel.x -= self.horizontal_speed,
                _ => {}
            },
            InputEvent::Quit => {}
        }
    }

    fn begin_jump(&mut self, orientation: Orientation, jump_clock: &mut Clock, now_ms: u64) {
        self.jump_vy = JUMP_VELOCITY;
        self.orientation = orientation;
        jump_clock.start(now_ms);
    }

    /// Advance one frame: integrate, resolve collisions, land, rotate
    pub fn update<R: Rng>(
        &mut self,
        obstacle: Rect,
        buffs: &mut Buffs,
        jump_clock: &mut Clock,
        now_ms: u64,
        area: &PlayArea,
        rng: &mut R,
    ) -> MoveOutcome {
        let mut outcome = MoveOutcome::default();

        let mut vy = Trajectory::vertical_velocity(self.jump_vy, jump_clock.elapsed(now_ms));
        if self.orientation == Orientation::Inverted {
            vy = -vy;
        }
        self.vel.y = vy;

        let dy = match self.last_update_ms {
            Some(last) => self.trajectory.displacement(vy, now_ms.saturating_sub(last)),
            None => vy,
        };
        self.last_update_ms = Some(now_ms);
        self.pos += IVec2::new(self.vel.x, dy);

        let hitbox = self.bounds();

        if hitbox.overlaps(&obstacle) && !buffs.is_active(BuffKind::Invincibility, now_ms) {
            outcome.obstacle_hit = true;
        }

        for kind in BuffKind::ALL {
            let touching = hitbox.overlaps(&buffs.get(kind).bounds());
            if touching {
                let double_points = buffs.is_active(BuffKind::DoublePoints, now_ms);
                let buff = buffs.get_mut(kind);
                buff.relocate(area, rng);
                buff.mark_collected(now_ms);
                outcome.collected.push(kind);
                log::debug!("Collected {} at {}ms", kind.as_str(), now_ms);

                match kind {
                    BuffKind::Point => self.award_point(double_points),
                    BuffKind::Speed => self.boost_speed(),
                    BuffKind::Invincibility | BuffKind::DoublePoints => {}
                }
            } else if kind == BuffKind::Speed
                && self.is_boosted()
                && !buffs.is_active(BuffKind::Speed, now_ms)
            {
                self.end_speed_boost();
            }
        }

        let midline = area.midline();
        let landed = match self.orientation {
            Orientation::Normal => self.pos.y > midline,
            Orientation::Inverted => self.pos.y < midline,
        };
        if landed {
            self.pos.y = midline;
            self.jump_vy = 0;
            jump_clock.stop();
        }

        self.angle = self.rotation(vy);

        outcome
    }

    fn award_point(&mut self, double_points: bool) {
        let amount = if double_points {
            self.score_multiplier * 2
        } else {
            self.score_multiplier
        };
        self.score += amount;
    }

    /// Switch to boosted impulses; no-op while already boosted
    fn boost_speed(&mut self) {
        if self.is_boosted() {
            return;
        }
        let delta = BOOSTED_HORIZONTAL_SPEED - BASE_HORIZONTAL_SPEED;
        self.horizontal_speed = BOOSTED_HORIZONTAL_SPEED;
        self.vel.x += delta * self.vel.x.signum();
    }

    fn end_speed_boost(&mut self) {
        let delta = BOOSTED_HORIZONTAL_SPEED - BASE_HORIZONTAL_SPEED;
        self.horizontal_speed = BASE_HORIZONTAL_SPEED;
        self.vel.x -= delta * self.vel.x.signum();
    }

    /// Sprite angle following the arc: half a turn over the full jump
    fn rotation(&self, vy: i32) -> f64 {
        if self.is_grounded() {
            return 0.0;
        }
        let jump_vy = self.jump_vy as f64;
        let swing = (jump_vy - vy as f64) * 180.0 / jump_vy;
        if self.vel.x >= 0 && self.orientation == Orientation::Normal {
            swing
        } else {
            -swing
        }
    }
}
