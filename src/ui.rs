//! Menu buttons and text overlay layout
//!
//! Pure layout in game units. The simulation hit-tests clicks against
//! `buttons`, the renderer draws the button boxes, and the frontend mirrors
//! `labels` into text nodes above the canvas.

use glam::Vec2;

use crate::consts::{HEIGHT, WIDTH};
use crate::sim::{GamePhase, GameState, Rect};

/// What a menu button does when clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Leave the splash for the menu
    Continue,
    /// Start a run from the menu
    Play,
    /// Exit the game
    Quit,
    /// Back to the menu from game over
    Menu,
}

impl ButtonAction {
    pub fn label(&self) -> &'static str {
        match self {
            ButtonAction::Continue => "CONTINUE",
            ButtonAction::Play => "PLAY",
            ButtonAction::Quit => "QUIT",
            ButtonAction::Menu => "MENU",
        }
    }
}

/// A clickable box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub action: ButtonAction,
    pub rect: Rect,
}

const BUTTON_X: i32 = 120;
const BUTTON_W: i32 = 160;
const BUTTON_H: i32 = 60;

const fn button(action: ButtonAction, y: i32) -> Button {
    Button {
        action,
        rect: Rect::new(BUTTON_X, y, BUTTON_W, BUTTON_H),
    }
}

const SPLASH_BUTTONS: [Button; 1] = [button(ButtonAction::Continue, 400)];
const MENU_BUTTONS: [Button; 2] = [
    button(ButtonAction::Play, 250),
    button(ButtonAction::Quit, 350),
];
const GAME_OVER_BUTTONS: [Button; 1] = [button(ButtonAction::Menu, 400)];

/// Buttons shown in a phase
pub fn buttons(phase: GamePhase) -> &'static [Button] {
    match phase {
        GamePhase::Splash => &SPLASH_BUTTONS,
        GamePhase::Menu => &MENU_BUTTONS,
        GamePhase::Playing => &[],
        GamePhase::GameOver => &GAME_OVER_BUTTONS,
    }
}

/// Button under the pointer, if any
pub fn button_at(phase: GamePhase, pointer: Vec2) -> Option<ButtonAction> {
    buttons(phase)
        .iter()
        .find(|b| b.rect.contains_point(pointer))
        .map(|b| b.action)
}

/// Text colours (RGB, 0-255)
pub mod palette {
    pub const WHITE: [u8; 3] = [255, 255, 255];
    pub const YELLOW: [u8; 3] = [255, 215, 0];
    pub const RED: [u8; 3] = [220, 20, 60];
    pub const RED_HOVER: [u8; 3] = [255, 80, 80];
}

/// A line of centred overlay text
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    /// Centre of the text in game units
    pub center: Vec2,
    /// Font size in game units
    pub size: f32,
    pub color: [u8; 3],
}

impl Label {
    fn new(text: impl Into<String>, x: i32, y: i32, size: f32, color: [u8; 3]) -> Self {
        Self {
            text: text.into(),
            center: Vec2::new(x as f32, y as f32),
            size,
            color,
        }
    }
}

/// Overlay text for the current phase, button captions included
pub fn labels(state: &GameState) -> Vec<Label> {
    use palette::*;
    let cx = WIDTH / 2;

    let mut labels = match state.phase {
        GamePhase::Splash => vec![
            Label::new("Flappy Bird", cx, 150, 40.0, YELLOW),
            Label::new("Tap, click or press SPACE to flap", cx, 250, 18.0, WHITE),
            Label::new("Enjoy the game & beat the high score!", cx, 300, 18.0, WHITE),
        ],
        GamePhase::Menu => vec![Label::new("Main Menu", cx, 150, 48.0, YELLOW)],
        GamePhase::Playing => vec![Label::new(state.score.to_string(), cx, 50, 32.0, WHITE)],
        GamePhase::GameOver => {
            let mut v = vec![
                Label::new(format!("Score: {}", state.score), cx, 100, 32.0, WHITE),
                Label::new(format!("Best: {}", state.best_score), cx, 150, 32.0, WHITE),
                Label::new("Press SPACE to Restart", cx, HEIGHT / 2, 28.0, WHITE),
            ];
            if state.new_best {
                v.push(Label::new("New best!", cx, 200, 24.0, YELLOW));
            }
            v
        }
    };

    labels.extend(buttons(state.phase).iter().map(|b| {
        let c = b.rect.center();
        Label::new(b.action.label(), c.x, c.y, 28.0, WHITE)
    }));
    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_per_phase() {
        assert_eq!(buttons(GamePhase::Splash).len(), 1);
        assert_eq!(buttons(GamePhase::Menu).len(), 2);
        assert!(buttons(GamePhase::Playing).is_empty());
        assert_eq!(buttons(GamePhase::GameOver)[0].action, ButtonAction::Menu);
    }

    #[test]
    fn test_button_at() {
        let p = Vec2::new(200.0, 280.0);
        assert_eq!(button_at(GamePhase::Menu, p), Some(ButtonAction::Play));
        assert_eq!(button_at(GamePhase::Playing, p), None);
        assert_eq!(
            button_at(GamePhase::Menu, Vec2::new(200.0, 405.0)),
            Some(ButtonAction::Quit)
        );
        assert_eq!(button_at(GamePhase::Menu, Vec2::new(50.0, 280.0)), None);
    }

    #[test]
    fn test_labels_follow_phase() {
        let mut state = GameState::new(1);
        let texts = |s: &GameState| labels(s).into_iter().map(|l| l.text).collect::<Vec<_>>();

        assert!(texts(&state).contains(&"CONTINUE".to_string()));

        state.start_run();
        state.score = 7;
        assert_eq!(texts(&state), vec!["7".to_string()]);

        state.end_run();
        let t = texts(&state);
        assert!(t.contains(&"Score: 7".to_string()));
        assert!(t.contains(&"Best: 7".to_string()));
        assert!(t.contains(&"New best!".to_string()));
        assert!(t.contains(&"MENU".to_string()));
    }
}
