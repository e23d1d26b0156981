//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in `GameState`; the frontend owns
//! one instance and passes it to `tick` by mutable reference.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bird::Bird;
use super::pipes::Pipes;
use crate::consts::*;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title card shown at startup
    Splash,
    /// Main menu with Play/Quit
    Menu,
    /// Active run
    Playing,
    /// Run ended, waiting for restart or menu
    GameOver,
}

/// One-shot notifications for the platform layer (audio cues, exit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Bird flapped
    Flap,
    /// Run ended on a pipe or the bounds
    Hit,
    /// A pipe pair was passed
    Score,
    /// Quit chosen from the menu
    Quit,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Pipe height RNG
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// The player's bird
    pub bird: Bird,
    /// Active obstacles
    pub pipes: Pipes,
    /// Pairs passed this run
    pub score: u32,
    /// Best score since the process started (never written to storage)
    pub best_score: u32,
    /// The run that just ended set a new best
    pub new_best: bool,
    /// Horizontal offset of the scrolling ground, in `(-WIDTH, 0]`
    pub ground_offset: i32,
    /// Quit was requested; the frontend should shut down
    pub quit_requested: bool,
    /// Events produced since the frontend last drained them
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed, starting on the splash
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Splash,
            time_ticks: 0,
            bird: Bird::default(),
            pipes: Pipes::new(),
            score: 0,
            best_score: 0,
            new_best: false,
            ground_offset: 0,
            quit_requested: false,
            events: Vec::new(),
        }
    }

    /// Start a fresh run: clear pipes, respawn the bird, zero the score.
    ///
    /// Only called from inside `tick`, so no tick ever sees a half-reset state.
    pub fn reset_run(&mut self) {
        self.pipes.clear();
        self.bird.respawn();
        self.score = 0;
        self.new_best = false;
    }

    /// Enter Playing with a fresh run
    pub fn start_run(&mut self) {
        self.reset_run();
        self.phase = GamePhase::Playing;
    }

    /// End the current run, recording the best score
    pub fn end_run(&mut self) {
        self.phase = GamePhase::GameOver;
        if self.score > self.best_score {
            self.best_score = self.score;
            self.new_best = true;
        }
        self.events.push(GameEvent::Hit);
    }

    /// Ask the frontend to shut down, from any phase
    pub fn request_quit(&mut self) {
        if !self.quit_requested {
            self.quit_requested = true;
            self.events.push(GameEvent::Quit);
        }
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Scroll the ground tiles, wrapping after one full tile
    pub fn scroll_ground(&mut self) {
        self.ground_offset -= GROUND_SPEED;
        if self.ground_offset <= -WIDTH {
            self.ground_offset = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(42);
        assert_eq!(state.phase, GamePhase::Splash);
        assert_eq!(state.score, 0);
        assert_eq!(state.best_score, 0);
        assert!(state.pipes.is_empty());
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_end_run_updates_best_only_when_beaten() {
        let mut state = GameState::new(1);
        state.start_run();
        state.score = 5;
        state.end_run();
        assert_eq!(state.best_score, 5);
        assert!(state.new_best);

        state.start_run();
        state.score = 3;
        state.end_run();
        assert_eq!(state.best_score, 5);
        assert!(!state.new_best);

        state.start_run();
        state.score = 5;
        state.end_run();
        assert!(!state.new_best);
        assert_eq!(state.drain_events(), vec![GameEvent::Hit; 3]);
    }

    #[test]
    fn test_reset_run_is_complete() {
        let mut state = GameState::new(9);
        state.start_run();
        state.pipes.spawn_at(50, 250);
        state.pipes.pairs_mut()[0].scored = true;
        state.score = 12;
        state.bird.center_y = 20;
        state.bird.velocity = 7.5;

        state.reset_run();
        assert!(state.pipes.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.bird.center_y, BIRD_SPAWN_Y);
        assert_eq!(state.bird.velocity, 0.0);
    }

    #[test]
    fn test_ground_wraps() {
        let mut state = GameState::new(1);
        for _ in 0..(WIDTH / GROUND_SPEED - 1) {
            state.scroll_ground();
        }
        assert_eq!(state.ground_offset, -WIDTH + GROUND_SPEED);
        state.scroll_ground();
        assert_eq!(state.ground_offset, 0);
    }

    #[test]
    fn test_request_quit_once() {
        let mut state = GameState::new(1);
        state.start_run();
        state.request_quit();
        state.request_quit();
        assert!(state.quit_requested);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.drain_events(), vec![GameEvent::Quit]);
    }
}
