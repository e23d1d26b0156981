//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use glam::Vec2;

use super::collision::{check_collision, check_scoring};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::BIRD_SPAWN_Y;
use crate::ui::{ButtonAction, button_at};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Context-dependent activate action (space/enter, or a click/tap that
    /// missed every button)
    pub activate: bool,
    /// Pointer position in game units, if the pointer is over the playfield
    pub pointer: Option<Vec2>,
    /// Pointer pressed this tick
    pub click: bool,
    /// Explicit "back to menu" action (escape)
    pub menu: bool,
    /// Idle/demo mode - autopilot flaps for the player
    pub idle_mode: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    let clicked = if input.click {
        input.pointer.and_then(|p| button_at(state.phase, p))
    } else {
        None
    };
    let activate = input.activate || (input.click && clicked.is_none());

    match state.phase {
        GamePhase::Splash => {
            if activate || clicked == Some(ButtonAction::Continue) {
                log::debug!("splash -> menu");
                state.phase = GamePhase::Menu;
            }
        }

        GamePhase::Menu => match clicked {
            Some(ButtonAction::Quit) => {
                log::debug!("quit requested from menu");
                state.request_quit();
            }
            Some(ButtonAction::Play) => {
                log::debug!("menu -> playing (seed {})", state.seed);
                state.start_run();
            }
            _ if activate => {
                log::debug!("menu -> playing (seed {})", state.seed);
                state.start_run();
            }
            _ => {}
        },

        GamePhase::Playing => {
            let flap = activate || (input.idle_mode && autopilot_wants_flap(state));
            if flap {
                state.bird.flap();
                state.events.push(GameEvent::Flap);
            }
            update_playing(state);
        }

        GamePhase::GameOver => {
            if input.menu || clicked == Some(ButtonAction::Menu) {
                log::debug!("game over -> menu");
                state.phase = GamePhase::Menu;
            } else if activate {
                log::debug!("game over -> playing");
                state.start_run();
            }
        }
    }

    // The bird is frozen once the run ends
    if state.phase != GamePhase::GameOver {
        state.bird.animate();
    }
    state.scroll_ground();
}

/// One tick of active play: spawn, move, score, then end the run on a hit
fn update_playing(state: &mut GameState) {
    state.pipes.update_spawn_timer(&mut state.rng);
    state.bird.advance();
    state.pipes.advance_all();

    let hit = check_collision(&state.bird, state.pipes.pairs());

    // A pair passed on the fatal tick still counts toward the best score
    let passed = check_scoring(&state.bird, state.pipes.pairs_mut());
    for _ in 0..passed {
        state.score += 1;
        state.events.push(GameEvent::Score);
    }

    if hit {
        log::debug!(
            "collision at tick {} (score {}, best {})",
            state.time_ticks,
            state.score,
            state.best_score
        );
        state.end_run();
    }
}

/// Autopilot: flap whenever the bird sits below the centre of the nearest gap
/// it still has to clear (or the spawn height when no pipe is in reach).
pub fn autopilot_wants_flap(state: &GameState) -> bool {
    let bird_left = state.bird.rect().left();
    let target_y = state
        .pipes
        .pairs()
        .iter()
        .find(|p| p.right() > bird_left)
        .map(|p| p.gap_center_y())
        .unwrap_or(BIRD_SPAWN_Y);
    state.bird.center_y > target_y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn activate() -> TickInput {
        TickInput {
            activate: true,
            ..Default::default()
        }
    }

    fn click_at(x: f32, y: f32) -> TickInput {
        TickInput {
            pointer: Some(Vec2::new(x, y)),
            click: true,
            ..Default::default()
        }
    }

    fn playing_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        tick(&mut state, &activate());
        tick(&mut state, &activate());
        assert_eq!(state.phase, GamePhase::Playing);
        state
    }

    #[test]
    fn test_splash_to_menu_to_playing() {
        let mut state = GameState::new(12345);
        assert_eq!(state.phase, GamePhase::Splash);

        // Tick without input - should stay on the splash
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Splash);

        tick(&mut state, &activate());
        assert_eq!(state.phase, GamePhase::Menu);

        tick(&mut state, &activate());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.bird.center(), glam::IVec2::new(BIRD_X, BIRD_SPAWN_Y));
        assert!(state.pipes.is_empty());
    }

    #[test]
    fn test_splash_continue_button() {
        let mut state = GameState::new(1);
        tick(&mut state, &click_at(200.0, 430.0));
        assert_eq!(state.phase, GamePhase::Menu);
    }

    #[test]
    fn test_menu_buttons() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::Menu;
        tick(&mut state, &click_at(200.0, 380.0));
        assert!(state.quit_requested);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.drain_events(), vec![GameEvent::Quit]);

        let mut state = GameState::new(1);
        state.phase = GamePhase::Menu;
        tick(&mut state, &click_at(200.0, 280.0));
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(!state.quit_requested);
    }

    #[test]
    fn test_click_outside_buttons_activates() {
        let mut state = playing_state(5);
        tick(&mut state, &click_at(10.0, 10.0));
        assert_eq!(state.bird.velocity, FLAP_VELOCITY + GRAVITY);
        assert_eq!(state.drain_events(), vec![GameEvent::Flap]);
    }

    #[test]
    fn test_flap_then_gravity_same_tick() {
        let mut state = playing_state(5);
        for _ in 0..10 {
            tick(&mut state, &TickInput::default());
        }
        assert!(state.bird.velocity > 0.0);
        tick(&mut state, &activate());
        assert!((state.bird.velocity - (FLAP_VELOCITY + GRAVITY)).abs() < 1e-5);
    }

    #[test]
    fn test_first_pipe_after_spawn_interval() {
        let mut state = playing_state(77);
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        for _ in 0..SPAWN_INTERVAL_TICKS - 1 {
            tick(&mut state, &input);
        }
        assert!(state.pipes.is_empty());
        tick(&mut state, &input);
        assert_eq!(state.pipes.len(), 1);
        assert_eq!(state.pipes.pairs()[0].center_x, PIPE_SPAWN_X - PIPE_SPEED);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_falling_ends_run() {
        let mut state = playing_state(3);
        let mut ticks = 0;
        while state.phase == GamePhase::Playing {
            tick(&mut state, &TickInput::default());
            ticks += 1;
            assert!(ticks < 200, "bird never hit the ground");
        }
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.bird.rect().bottom() >= GROUND_Y);
        assert!(state.drain_events().contains(&GameEvent::Hit));
    }

    #[test]
    fn test_bird_frozen_on_game_over() {
        let mut state = playing_state(3);
        while state.phase == GamePhase::Playing {
            tick(&mut state, &TickInput::default());
        }
        let frozen = state.bird.clone();
        for _ in 0..50 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.bird, frozen);
    }

    #[test]
    fn test_game_over_restart_and_menu() {
        let mut state = playing_state(3);
        state.score = 4;
        state.end_run();
        tick(&mut state, &activate());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.best_score, 4);

        state.end_run();
        tick(
            &mut state,
            &TickInput {
                menu: true,
                ..Default::default()
            },
        );
        assert_eq!(state.phase, GamePhase::Menu);

        tick(&mut state, &activate());
        state.end_run();
        tick(&mut state, &click_at(200.0, 430.0));
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.best_score, 4);
    }

    #[test]
    fn test_scoring_through_tick() {
        let mut state = playing_state(11);
        // Pair just right of the bird with the gap around the bird
        state.pipes.spawn_at(BIRD_X + 2, BIRD_SPAWN_Y + 60);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, 1);
        assert_eq!(state.drain_events(), vec![GameEvent::Score]);
        for _ in 0..5 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_point_on_fatal_tick_counts() {
        let mut state = playing_state(11);
        state.bird.center_y = GROUND_Y - 16;
        state.bird.velocity = 2.0;
        state.pipes.spawn_at(BIRD_X + 2, 350);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.score, 1);
        assert_eq!(state.best_score, 1);
        assert!(state.new_best);
        assert_eq!(state.drain_events(), vec![GameEvent::Score, GameEvent::Hit]);
    }

    #[test]
    fn test_autopilot_survives_pipes() {
        let mut state = playing_state(2024);
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        for _ in 0..1200 {
            tick(&mut state, &input);
        }
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.score >= 5, "score {}", state.score);
    }

    #[test]
    fn test_ground_scrolls_in_every_phase() {
        let mut state = GameState::new(1);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.ground_offset, -GROUND_SPEED);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        for state in [&mut state1, &mut state2] {
            tick(state, &activate());
            tick(state, &activate());
            for _ in 0..600 {
                tick(state, &input);
            }
        }

        assert_eq!(
            serde_json::to_string(&state1).unwrap(),
            serde_json::to_string(&state2).unwrap()
        );
    }
}
