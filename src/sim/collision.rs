//! Collision detection and scoring
//!
//! Everything is axis-aligned: the bird's unrotated box against each pipe
//! rectangle, plus the ceiling margin and the ground line.

use super::bird::Bird;
use super::pipes::PipePair;
use crate::consts::{CEILING_Y, GROUND_Y};

/// Bird rose past the ceiling margin or reached the ground
pub fn out_of_bounds(bird: &Bird) -> bool {
    let rect = bird.rect();
    rect.top() <= CEILING_Y || rect.bottom() >= GROUND_Y
}

/// True if the run is over: the bird overlaps any pipe or left the bounds
pub fn check_collision(bird: &Bird, pairs: &[PipePair]) -> bool {
    let rect = bird.rect();
    let hit_pipe = pairs
        .iter()
        .flat_map(|p| p.rects())
        .any(|pipe| rect.intersects(&pipe));
    hit_pipe || out_of_bounds(bird)
}

/// Flag every unscored pair whose centre is now left of the bird's centre.
/// Returns the number of newly scored pairs; calling again is a no-op until
/// another pair passes.
pub fn check_scoring(bird: &Bird, pairs: &mut [PipePair]) -> u32 {
    let bird_x = bird.center().x;
    let mut scored = 0;
    for pair in pairs.iter_mut() {
        if !pair.scored && pair.center_x < bird_x {
            pair.scored = true;
            scored += 1;
        }
    }
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use proptest::prelude::*;

    fn bird_at(center_y: i32) -> Bird {
        let mut bird = Bird::default();
        bird.center_y = center_y;
        bird
    }

    #[test]
    fn test_spawn_position_is_safe() {
        assert!(!check_collision(&Bird::default(), &[]));
    }

    #[test]
    fn test_ceiling_margin() {
        // top = center - 15
        assert!(!check_collision(&bird_at(CEILING_Y + 16), &[]));
        assert!(check_collision(&bird_at(CEILING_Y + 15), &[]));
        assert!(check_collision(&bird_at(-200), &[]));
    }

    #[test]
    fn test_ground_line() {
        // bottom = center + 15
        assert!(!check_collision(&bird_at(GROUND_Y - 16), &[]));
        assert!(check_collision(&bird_at(GROUND_Y - 15), &[]));
    }

    #[test]
    fn test_pipe_hit_bottom_and_top() {
        // Pipe centred on the bird
        let pair = PipePair::new(0, BIRD_X, 300);
        // Bird inside the opening: gap spans 130..300
        assert!(!check_collision(&bird_at(215), std::slice::from_ref(&pair)));
        // Overlapping bottom pipe
        assert!(check_collision(&bird_at(290), std::slice::from_ref(&pair)));
        // Overlapping top pipe
        assert!(check_collision(&bird_at(140), std::slice::from_ref(&pair)));
    }

    #[test]
    fn test_pipe_edge_touch_is_not_a_hit() {
        // Bird box 80..120; pipe box left edge at 120
        let pair = PipePair::new(0, 120 + PIPE_WIDTH / 2, 300);
        assert!(!check_collision(&bird_at(400), std::slice::from_ref(&pair)));
        let pair = PipePair::new(0, 119 + PIPE_WIDTH / 2, 300);
        assert!(check_collision(&bird_at(400), std::slice::from_ref(&pair)));
    }

    #[test]
    fn test_scoring_once_per_pair() {
        let bird = Bird::default();
        let mut pairs = vec![
            PipePair::new(0, BIRD_X - 1, 300),
            PipePair::new(1, BIRD_X, 300),
            PipePair::new(2, BIRD_X + 200, 250),
        ];
        assert_eq!(check_scoring(&bird, &mut pairs), 1);
        assert!(pairs[0].scored);
        assert!(!pairs[1].scored);
        assert_eq!(check_scoring(&bird, &mut pairs), 0);

        pairs[1].center_x -= 4;
        assert_eq!(check_scoring(&bird, &mut pairs), 1);
        assert_eq!(check_scoring(&bird, &mut pairs), 0);
    }

    proptest! {
        #[test]
        fn prop_scoring_idempotent(xs in proptest::collection::vec(-100i32..600, 0..10), repeats in 1usize..5) {
            let bird = Bird::default();
            let mut pairs: Vec<PipePair> = xs
                .iter()
                .enumerate()
                .map(|(i, &x)| PipePair::new(i as u32, x, 300))
                .collect();
            let expected = xs.iter().filter(|&&x| x < BIRD_X).count() as u32;
            prop_assert_eq!(check_scoring(&bird, &mut pairs), expected);
            for _ in 0..repeats {
                prop_assert_eq!(check_scoring(&bird, &mut pairs), 0);
            }
        }
    }
}
