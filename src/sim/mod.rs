//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (pipes kept in spawn order)
//! - No rendering or platform dependencies

pub mod bird;
pub mod collision;
pub mod pipes;
pub mod rect;
pub mod state;
pub mod tick;

pub use bird::Bird;
pub use collision::{check_collision, check_scoring, out_of_bounds};
pub use pipes::{PipePair, Pipes};
pub use rect::Rect;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, autopilot_wants_flap, tick};
