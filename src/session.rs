//! Per-frame game state: which square the mouse is over and which square the
//! player has to find next.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::{label_from_cell, label_from_pixel, Board, BOARD_WIDTH};

/// Uniform random square. Repeating the previous target is allowed.
pub fn pick_target(rng: &mut impl Rng) -> String {
    let col = rng.gen_range(0..BOARD_WIDTH);
    let row = rng.gen_range(0..BOARD_WIDTH);
    label_from_cell(col, row)
}

pub struct Session {
    pub mouseover: String,
    pub target: String,
    rng: SmallRng,
}

impl Session {
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    fn with_rng(mut rng: SmallRng) -> Self {
        let target = pick_target(&mut rng);
        Session {
            mouseover: String::new(),
            target,
            rng,
        }
    }

    /// One step of the interaction loop, fed the current mouse position and
    /// whether the primary button is down. Moves the highlight when the
    /// hovered square changes, and re-picks the target on a hit. The win
    /// check is level-triggered: a held button over the target re-picks on
    /// every frame it stays down, matching the original game.
    pub fn frame(&mut self, board: &mut Board, x: i32, y: i32, clicked: bool) {
        let hover = label_from_pixel(x, y);
        if hover != self.mouseover {
            board.set_highlight(&hover);
            self.mouseover = hover;
        }
        if clicked && self.mouseover == self.target {
            self.target = pick_target(&mut self.rng);
        }
    }
}
