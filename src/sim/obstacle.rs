//! The recycling obstacle
//!
//! A single hazard scrolls right-to-left. Once fully off-screen it respawns
//! at the right edge with a new height band and size. Speed ramps with
//! session time.

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::clock::Clock;
use super::collision::Rect;
use crate::consts::*;
use crate::settings::PlayArea;

/// Obstacle speed for a given session age: +1 per ramp interval, clamped
pub fn speed_for_elapsed(session_elapsed_ms: u64) -> i32 {
    let ramp = (session_elapsed_ms / OBSTACLE_RAMP_INTERVAL_MS).min(OBSTACLE_MAX_SPEED as u64) as i32;
    (OBSTACLE_BASE_SPEED + ramp).clamp(OBSTACLE_BASE_SPEED, OBSTACLE_MAX_SPEED)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: IVec2,
    pub size: IVec2,
    /// Leftward speed applied on the last advance
    pub speed: i32,
}

impl Obstacle {
    /// Spawn at the right edge of the play area
    pub fn new<R: Rng>(area: &PlayArea, rng: &mut R) -> Self {
        let mut obstacle = Self {
            pos: IVec2::ZERO,
            size: IVec2::ZERO,
            speed: 0,
        };
        obstacle.respawn(area, rng);
        obstacle
    }

    pub fn bounds(&self) -> Rect {
        Rect::at(self.pos, self.size)
    }

    /// Scroll left by the ramped speed; returns true if the obstacle recycled
    pub fn advance<R: Rng>(
        &mut self,
        session_clock: &Clock,
        now_ms: u64,
        area: &PlayArea,
        rng: &mut R,
    ) -> bool {
        self.speed = speed_for_elapsed(session_clock.elapsed(now_ms));
        self.pos.x -= self.speed;

        if self.pos.x < -self.size.x {
            self.respawn(area, rng);
            log::debug!(
                "Obstacle recycled: y={} size={}x{} speed={}",
                self.pos.y,
                self.size.x,
                self.size.y,
                self.speed
            );
            return true;
        }
        false
    }

    fn respawn<R: Rng>(&mut self, area: &PlayArea, rng: &mut R) {
        let half = OBSTACLE_BASE_SIZE / 2;
        self.size = IVec2::new(
            half + rng.random_range(0..half),
            half + rng.random_range(0..half),
        );
        self.pos = IVec2::new(
            area.width,
            area.height / 4 + rng.random_range(0..(area.height / 2).max(1)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn assert_spawn_invariants(obstacle: &Obstacle, area: &PlayArea) {
        assert_eq!(obstacle.pos.x, area.width);
        assert!(obstacle.pos.y >= area.height / 4);
        assert!(obstacle.pos.y < area.height * 3 / 4);
        assert!((25..=49).contains(&obstacle.size.x));
        assert!((25..=49).contains(&obstacle.size.y));
    }

    #[test]
    fn test_speed_ramp() {
        assert_eq!(speed_for_elapsed(0), 10);
        assert_eq!(speed_for_elapsed(9_999), 10);
        assert_eq!(speed_for_elapsed(10_000), 11);
        assert_eq!(speed_for_elapsed(45_000), 14);
        assert_eq!(speed_for_elapsed(100_000), 20);
        assert_eq!(speed_for_elapsed(120_000), 20);
        assert_eq!(speed_for_elapsed(u64::MAX), 20);
    }

    #[test]
    fn test_spawn_at_right_edge() {
        let area = PlayArea::default();
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..200 {
            assert_spawn_invariants(&Obstacle::new(&area, &mut rng), &area);
        }
    }

    #[test]
    fn test_advance_moves_left_with_session_speed() {
        let area = PlayArea::default();
        let mut rng = Pcg32::seed_from_u64(2);
        let mut obstacle = Obstacle::new(&area, &mut rng);
        let mut clock = Clock::new();
        clock.start(0);

        let recycled = obstacle.advance(&clock, 45_000, &area, &mut rng);
        assert!(!recycled);
        assert_eq!(obstacle.speed, 14);
        assert_eq!(obstacle.pos.x, area.width - 14);
    }

    #[test]
    fn test_stopped_session_clock_uses_base_speed() {
        let area = PlayArea::default();
        let mut rng = Pcg32::seed_from_u64(2);
        let mut obstacle = Obstacle::new(&area, &mut rng);
        obstacle.advance(&Clock::new(), 500_000, &area, &mut rng);
        assert_eq!(obstacle.speed, 10);
    }

    #[test]
    fn test_recycles_only_when_fully_off_screen() {
        let area = PlayArea::default();
        let mut rng = Pcg32::seed_from_u64(9);
        let mut obstacle = Obstacle::new(&area, &mut rng);
        let clock = Clock::new();

        // Lands exactly on -width: still visible edge, no recycle
        obstacle.pos.x = -obstacle.size.x + 10;
        assert!(!obstacle.advance(&clock, 0, &area, &mut rng));
        assert_eq!(obstacle.pos.x, -obstacle.size.x);

        assert!(obstacle.advance(&clock, 0, &area, &mut rng));
        assert_spawn_invariants(&obstacle, &area);
    }

    proptest! {
        #[test]
        fn prop_speed_matches_clamped_ramp(elapsed in 0u64..10_000_000) {
            let expected = (10 + elapsed / 10_000).clamp(10, 20) as i32;
            prop_assert_eq!(speed_for_elapsed(elapsed), expected);
        }

        #[test]
        fn prop_recycle_invariants(seed in any::<u64>(), steps in 1usize..400, elapsed in 0u64..200_000) {
            let area = PlayArea::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut obstacle = Obstacle::new(&area, &mut rng);
            let mut clock = Clock::new();
            clock.start(0);
            for _ in 0..steps {
                let recycled = obstacle.advance(&clock, elapsed, &area, &mut rng);
                if recycled {
                    prop_assert_eq!(obstacle.pos.x, area.width);
                    prop_assert!(obstacle.pos.y >= area.height / 4);
                    prop_assert!(obstacle.pos.y < area.height * 3 / 4);
                    prop_assert!((25..=49).contains(&obstacle.size.x));
                    prop_assert!((25..=49).contains(&obstacle.size.y));
                } else {
                    prop_assert!(obstacle.pos.x >= -obstacle.size.x);
                }
            }
        }
    }
}
