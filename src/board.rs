//! The 8x8 board: square storage, checkerboard colors, mouseover highlight,
//! and the pixel/cell -> square label mapping.

use sdl2::pixels::Color;
use sdl2::rect::Rect;

pub const BOARD_WIDTH: i32 = 8;
pub const CELL_SIZE: i32 = 75;
pub const BOARD_EDGE: i32 = CELL_SIZE * BOARD_WIDTH;

pub const LIGHT: Color = Color::RGBA(0xDD, 0xDD, 0xDD, 0xFF);
pub const DARK: Color = Color::RGBA(0x22, 0x55, 0x44, 0xFF);
pub const HIGHLIGHT: Color = Color::RGBA(0xFF, 0xFF, 0x00, 0x66);

/// Maps a pixel position to a square label like "E4". Pixel row 0 is rank 8.
/// Pure truncating arithmetic: positions outside the board yield labels no
/// square owns ("I8", "A0", ...), which every lookup treats as a miss.
pub fn label_from_pixel(x: i32, y: i32) -> String {
    let file = x / CELL_SIZE;
    let rank = BOARD_WIDTH - y / CELL_SIZE;
    let file_ch = (b'A' as i32 + file) as u8 as char;
    format!("{file_ch}{rank}")
}

/// Same mapping for grid indices (col 0..8 left to right, row 0..8 top down).
pub fn label_from_cell(col: i32, row: i32) -> String {
    label_from_pixel(col * CELL_SIZE, row * CELL_SIZE)
}

/// Guarded label -> array index conversion; `None` for anything that is not
/// one of the 64 valid labels.
pub fn index_of(label: &str) -> Option<usize> {
    let bytes = label.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let file = bytes[0].checked_sub(b'A')?;
    let rank = bytes[1].checked_sub(b'1')?;
    if file >= 8 || rank >= 8 {
        return None;
    }
    Some((rank * 8 + file) as usize)
}

#[derive(Clone, Copy)]
pub struct Square {
    pub rect: Rect,
    pub resting: Color,
    pub display: Color,
}

pub struct Board {
    squares: [Square; 64],
    highlighted: Option<usize>,
}

impl Board {
    pub fn new() -> Self {
        let squares = std::array::from_fn(|idx| {
            let col = (idx % 8) as i32;
            let row = BOARD_WIDTH - 1 - (idx / 8) as i32;
            let resting = if (col + row) % 2 == 0 { LIGHT } else { DARK };
            Square {
                rect: Rect::new(col * CELL_SIZE, row * CELL_SIZE, CELL_SIZE as u32, CELL_SIZE as u32),
                resting,
                display: resting,
            }
        });

        Board {
            squares,
            highlighted: None,
        }
    }

    /// Moves the mouseover highlight: the previously overridden square (if
    /// any) reverts to its resting color, then the new square's display color
    /// becomes the translucent highlight. A label that resolves to no square
    /// clears the highlight without setting one.
    pub fn set_highlight(&mut self, label: &str) {
        if let Some(prev) = self.highlighted.take() {
            self.squares[prev].display = self.squares[prev].resting;
        }
        if let Some(idx) = index_of(label) {
            self.squares[idx].display = HIGHLIGHT;
            self.highlighted = Some(idx);
        }
    }

    pub fn square(&self, label: &str) -> Option<&Square> {
        index_of(label).map(|idx| &self.squares[idx])
    }

    /// All 64 labels, for the per-frame draw iteration.
    pub fn labels() -> impl Iterator<Item = String> {
        (0..64).map(|idx| label_from_cell(idx % 8, idx / 8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_corners_map_to_expected_labels() {
        assert_eq!(label_from_pixel(0, 0), "A8");
        assert_eq!(label_from_pixel(599, 599), "H1");
        assert_eq!(label_from_pixel(75, 75), "B7");
    }

    #[test]
    fn every_board_pixel_maps_to_a_valid_label() {
        for y in 0..BOARD_EDGE {
            for x in 0..BOARD_EDGE {
                let label = label_from_pixel(x, y);
                assert!(index_of(&label).is_some(), "pixel ({x},{y}) gave {label}");
            }
        }
    }

    #[test]
    fn pixels_in_the_same_cell_share_a_label() {
        let base = label_from_pixel(150, 225);
        for dy in 0..CELL_SIZE {
            for dx in 0..CELL_SIZE {
                assert_eq!(label_from_pixel(150 + dx, 225 + dy), base);
            }
        }
    }

    #[test]
    fn off_board_labels_miss() {
        assert_eq!(index_of(&label_from_pixel(600, 0)), None); // "I8"
        assert_eq!(index_of(&label_from_pixel(0, 600)), None); // "A0"
        assert_eq!(index_of("D55"), None);
        assert_eq!(index_of("d5"), None);
        assert_eq!(index_of(""), None);
    }

    #[test]
    fn there_are_64_distinct_squares() {
        let board = Board::new();
        let mut seen = std::collections::HashSet::new();
        for label in Board::labels() {
            assert!(board.square(&label).is_some(), "{label} missing");
            assert!(seen.insert(label));
        }
        assert_eq!(seen.len(), 64);
    }

    #[test]
    fn corner_rects_sit_on_the_grid() {
        let board = Board::new();
        assert_eq!(board.square("A8").unwrap().rect, Rect::new(0, 0, 75, 75));
        assert_eq!(board.square("H1").unwrap().rect, Rect::new(525, 525, 75, 75));
        assert_eq!(board.square("D5").unwrap().rect, Rect::new(225, 225, 75, 75));
    }

    #[test]
    fn adjacent_squares_alternate_resting_colors() {
        let board = Board::new();
        assert_eq!(board.square("A8").unwrap().resting, LIGHT);
        for row in 0..BOARD_WIDTH {
            for col in 0..BOARD_WIDTH {
                let here = board.square(&label_from_cell(col, row)).unwrap().resting;
                if col + 1 < BOARD_WIDTH {
                    let right = board.square(&label_from_cell(col + 1, row)).unwrap().resting;
                    assert_ne!(here, right);
                }
                if row + 1 < BOARD_WIDTH {
                    let below = board.square(&label_from_cell(col, row + 1)).unwrap().resting;
                    assert_ne!(here, below);
                }
            }
        }
    }

    #[test]
    fn set_highlight_is_idempotent() {
        let mut board = Board::new();
        board.set_highlight("E4");
        board.set_highlight("E4");
        assert_eq!(board.square("E4").unwrap().display, HIGHLIGHT);
        for label in Board::labels().filter(|l| l != "E4") {
            let square = board.square(&label).unwrap();
            assert_eq!(square.display, square.resting);
        }
    }

    #[test]
    fn highlight_moves_between_squares() {
        let mut board = Board::new();
        board.set_highlight("E4");
        board.set_highlight("C2");
        let e4 = board.square("E4").unwrap();
        assert_eq!(e4.display, e4.resting);
        assert_eq!(board.square("C2").unwrap().display, HIGHLIGHT);
        for label in Board::labels().filter(|l| l != "C2") {
            let square = board.square(&label).unwrap();
            assert_eq!(square.display, square.resting);
        }
    }

    #[test]
    fn off_board_label_clears_the_highlight() {
        let mut board = Board::new();
        board.set_highlight("B6");
        board.set_highlight("I8");
        let b6 = board.square("B6").unwrap();
        assert_eq!(b6.display, b6.resting);
    }
}
