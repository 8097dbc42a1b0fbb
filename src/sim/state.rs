//! Session state
//!
//! Everything one live session owns: the dot, the obstacle, the four
//! pickups, both clocks and the seeded RNG.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::buff::Buffs;
use super::clock::Clock;
use super::obstacle::Obstacle;
use super::trajectory::Trajectory;
use crate::settings::PlayArea;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Live simulation
    Playing,
    /// Dot hit the obstacle; waiting in the menu
    GameOver,
    /// Player asked to leave
    Quit,
}

#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub area: PlayArea,
    pub phase: GamePhase,
    pub actor: Actor,
    pub obstacle: Obstacle,
    pub buffs: Buffs,
    /// Time since the current jump started
    pub jump_clock: Clock,
    /// Time since the session started; drives obstacle speed
    pub session_clock: Clock,
    /// Live frames simulated in this session
    pub frame_count: u64,
}

impl GameState {
    /// Build a session and start its clock at `now_ms`
    pub fn new(seed: u64, area: PlayArea, trajectory: Trajectory, now_ms: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let obstacle = Obstacle::new(&area, &mut rng);
        let buffs = Buffs::new(&area, &mut rng);
        let mut session_clock = Clock::new();
        session_clock.start(now_ms);

        Self {
            seed,
            rng,
            area,
            phase: GamePhase::Playing,
            actor: Actor::new(&area, trajectory),
            obstacle,
            buffs,
            jump_clock: Clock::new(),
            session_clock,
            frame_count: 0,
        }
    }

    pub fn score(&self) -> u64 {
        self.actor.score()
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::BuffKind;

    #[test]
    fn test_new_session() {
        let state = GameState::new(42, PlayArea::default(), Trajectory::PerFrame, 500);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score(), 0);
        assert!(state.session_clock.is_running());
        assert_eq!(state.session_clock.elapsed(1500), 1000);
        assert!(!state.jump_clock.is_running());
        assert_eq!(state.obstacle.pos.x, 1000);
        for kind in BuffKind::ALL {
            assert_eq!(state.buffs.get(kind).last_collected_ms, None);
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = GameState::new(7, PlayArea::default(), Trajectory::PerFrame, 0);
        let b = GameState::new(7, PlayArea::default(), Trajectory::PerFrame, 0);
        assert_eq!(a.obstacle, b.obstacle);
        assert_eq!(a.buffs, b.buffs);
    }
}
