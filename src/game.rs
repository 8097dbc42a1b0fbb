//! Frame orchestration
//!
//! Two nested loops: the outer menu loop (restart / quit after game over)
//! and the inner live loop (input, simulation, render, present).

use serde::Serialize;

use crate::platform::Platform;
use crate::renderer::render_frame;
use crate::settings::{RestartPolicy, Settings};
use crate::sim::{GamePhase, GameState, InputEvent, Key, tick};

/// Outcome of a whole run, across restarts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub final_score: u64,
    pub best_score: u64,
    /// Live frames simulated over all sessions
    pub frames: u64,
    pub restarts: u32,
    pub game_overs: u32,
}

/// Game instance holding all state
pub struct Game {
    settings: Settings,
    seed: u64,
    state: GameState,
    restarts: u32,
    game_overs: u32,
    best_score: u64,
    live_frames: u64,
    /// Loop iterations (menu and live), checked against the frame limit
    iterations: u64,
}

impl Game {
    /// Create a game whose first session starts at `now_ms`
    pub fn new(settings: Settings, now_ms: u64) -> Self {
        let seed = settings.resolve_seed();
        let state = GameState::new(seed, settings.play_area, settings.trajectory, now_ms);
        Self {
            settings,
            seed,
            state,
            restarts: 0,
            game_overs: 0,
            best_score: 0,
            live_frames: 0,
            iterations: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Run until the player quits (or the frame limit is hit).
    /// Returns `None` if the platform is not ready to start.
    pub fn run(&mut self, platform: &mut dyn Platform) -> Option<RunSummary> {
        if !platform.ready() {
            log::error!("Platform not ready; refusing to start the simulation");
            return None;
        }

        log::info!(
            "Flip Dot starting with seed {} (restart policy: {})",
            self.seed,
            self.settings.restart_policy.as_str()
        );

        let mut quit = false;
        while !quit {
            if self.limit_reached() {
                break;
            }

            if self.state.phase == GamePhase::GameOver {
                quit = self.run_menu_frame(platform);
                continue;
            }

            self.run_live(platform);
            quit = self.state.phase == GamePhase::Quit;
        }

        self.best_score = self.best_score.max(self.state.score());
        let summary = self.summary();
        log::info!(
            "Run finished: score {} (best {}), {} frames, {} restarts",
            summary.final_score,
            summary.best_score,
            summary.frames,
            summary.restarts
        );
        Some(summary)
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            seed: self.seed,
            final_score: self.state.score(),
            best_score: self.best_score.max(self.state.score()),
            frames: self.live_frames,
            restarts: self.restarts,
            game_overs: self.game_overs,
        }
    }

    /// One pass of the game-over menu. Returns true when the player quits.
    fn run_menu_frame(&mut self, platform: &mut dyn Platform) -> bool {
        self.iterations += 1;
        platform.begin_frame(&self.state);

        let mut quit = false;
        while let Some(event) = platform.poll_event() {
            if event.is_quit_request() {
                quit = true;
            } else if let InputEvent::KeyDown {
                key: Key::Restart, ..
            } = event
            {
                if self.state.phase == GamePhase::GameOver {
                    self.restart(platform.now_ms());
                }
            }
        }

        platform.end_frame();
        quit
    }

    /// Live loop: runs until game over, quit, or the frame limit
    fn run_live(&mut self, platform: &mut dyn Platform) {
        while self.state.is_playing() {
            if self.limit_reached() {
                self.state.phase = GamePhase::Quit;
                log::info!("Frame limit reached");
                break;
            }
            self.iterations += 1;

            platform.begin_frame(&self.state);
            let now_ms = platform.now_ms();
            let events: Vec<InputEvent> = std::iter::from_fn(|| platform.poll_event()).collect();

            let report = tick(&mut self.state, &events, now_ms);
            self.live_frames += 1;
            for kind in &report.collected {
                log::debug!("Frame {}: picked up {}", self.state.frame_count, kind.as_str());
            }
            if report.obstacle_hit && self.state.phase == GamePhase::GameOver {
                self.game_overs += 1;
                self.best_score = self.best_score.max(self.state.score());
            }

            render_frame(&self.state, platform.renderer(), now_ms, &self.settings.hud);
            platform.end_frame();
        }
    }

    fn restart(&mut self, now_ms: u64) {
        self.restarts += 1;
        match self.settings.restart_policy {
            RestartPolicy::Fresh => {
                let seed = self.seed.wrapping_add(self.restarts as u64);
                self.state = GameState::new(
                    seed,
                    self.settings.play_area,
                    self.settings.trajectory,
                    now_ms,
                );
                log::info!("Restarted with a fresh session (seed {})", seed);
            }
            RestartPolicy::Resume => {
                self.state.phase = GamePhase::Playing;
                log::info!("Resumed the previous session");
            }
        }
    }

    fn limit_reached(&self) -> bool {
        self.settings
            .frame_limit
            .is_some_and(|limit| self.iterations >= limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::HeadlessPlatform;
    use crate::renderer::Renderer;
    use crate::sim::BuffKind;
    use glam::IVec2;

    fn settings(restart_policy: RestartPolicy) -> Settings {
        Settings {
            seed: Some(2024),
            restart_policy,
            frame_limit: Some(10_000),
            ..Default::default()
        }
    }

    /// Put the obstacle on top of the dot so the next frame ends the session
    fn force_collision(game: &mut Game) {
        game.state.obstacle.pos = game.state.actor.pos;
        for kind in BuffKind::ALL {
            game.state.buffs.get_mut(kind).pos = IVec2::new(900, 0);
        }
    }

    struct NotReady;

    impl Platform for NotReady {
        fn ready(&self) -> bool {
            false
        }
        fn now_ms(&self) -> u64 {
            0
        }
        fn poll_event(&mut self) -> Option<InputEvent> {
            None
        }
        fn renderer(&mut self) -> &mut dyn Renderer {
            unreachable!("not ready")
        }
        fn end_frame(&mut self) {}
    }

    #[test]
    fn test_not_ready_platform_does_not_start() {
        let mut game = Game::new(settings(RestartPolicy::Fresh), 0);
        assert_eq!(game.run(&mut NotReady), None);
        assert_eq!(game.state().frame_count, 0);
    }

    #[test]
    fn test_quit_event_ends_run() {
        let mut game = Game::new(settings(RestartPolicy::Fresh), 0);
        let mut platform = HeadlessPlatform::new(16).with_script(vec![(3, InputEvent::Quit)]);
        let summary = game.run(&mut platform).unwrap();
        // Frames 0..=3 simulated; the quit frame still runs
        assert_eq!(summary.frames, 4);
        assert_eq!(summary.game_overs, 0);
        assert_eq!(game.state().phase, GamePhase::Quit);
        assert_eq!(platform.draw_list().frames_presented(), 4);
    }

    #[test]
    fn test_frame_limit_ends_run() {
        let mut s = settings(RestartPolicy::Fresh);
        s.frame_limit = Some(25);
        let mut game = Game::new(s, 0);
        let mut platform = HeadlessPlatform::new(16);
        // Keep the obstacle out of the dot's lane for the whole run
        game.state.obstacle.pos = IVec2::new(1000, 0);
        for kind in BuffKind::ALL {
            game.state.buffs.get_mut(kind).pos = IVec2::new(900, 0);
        }
        let summary = game.run(&mut platform).unwrap();
        assert_eq!(summary.frames, 25);
        assert_eq!(platform.now_ms(), 25 * 16);
    }

    #[test]
    fn test_game_over_then_quit_from_menu() {
        let mut game = Game::new(settings(RestartPolicy::Fresh), 0);
        force_collision(&mut game);
        let mut platform = HeadlessPlatform::new(16);
        let summary = game.run(&mut platform).unwrap();
        assert_eq!(summary.game_overs, 1);
        assert_eq!(summary.restarts, 0);
        assert_eq!(summary.frames, 1);
        assert_eq!(game.state().phase, GamePhase::GameOver);
    }

    #[test]
    fn test_fresh_restart_resets_session() {
        let mut game = Game::new(settings(RestartPolicy::Fresh), 0);
        game.state.actor.score = 9;
        force_collision(&mut game);

        // One restart, then the fresh session is quit on its first frame
        let mut platform = HeadlessPlatform::new(16)
            .with_restarts(1)
            .with_script(vec![(2, InputEvent::Quit)]);
        let summary = game.run(&mut platform).unwrap();

        assert_eq!(summary.restarts, 1);
        assert_eq!(summary.game_overs, 1);
        assert_eq!(summary.best_score, 9);
        assert_eq!(game.state().seed, 2025);
        assert_eq!(game.state().frame_count, 1);
        // Session clock restarted at the restart time (frame 1 = 16ms)
        assert_eq!(game.state().session_clock.elapsed(16), 0);
    }

    #[test]
    fn test_resume_restart_keeps_stale_session() {
        let mut game = Game::new(settings(RestartPolicy::Resume), 0);
        game.state.actor.score = 9;
        force_collision(&mut game);

        // The obstacle moved left by 10 on the fatal frame but still overlaps
        // the dot, so resuming ends the session again immediately.
        let mut platform = HeadlessPlatform::new(16).with_restarts(1);
        let summary = game.run(&mut platform).unwrap();

        assert_eq!(summary.restarts, 1);
        assert_eq!(summary.game_overs, 2);
        assert_eq!(summary.final_score, 9);
        assert_eq!(game.state().seed, 2024);
        assert_eq!(game.state().frame_count, 2);
    }

    #[test]
    fn test_autopilot_run_is_deterministic() {
        let run = || {
            let mut s = settings(RestartPolicy::Fresh);
            s.frame_limit = Some(600);
            let mut game = Game::new(s, 0);
            let mut platform = HeadlessPlatform::new(16)
                .with_autopilot(true)
                .with_restarts(3);
            game.run(&mut platform).unwrap()
        };
        assert_eq!(run(), run());
    }
}
