//! Canvas helpers for the board squares and the centered target text.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::ttf::Font;
use sdl2::video::{Window, WindowContext};

use crate::board::{Board, BOARD_EDGE};

const TEXT_COLOR: Color = Color::RGBA(0xDD, 0xCC, 0x00, 0xFF);
const TEXT_BACKDROP: Color = Color::RGBA(0x00, 0x00, 0x00, 0x66);

pub fn fill_square_color(canvas: &mut Canvas<Window>, rect: Rect, color: Color) -> Result<(), String> {
    canvas.set_draw_color(color);
    canvas.fill_rect(rect)
}

/// Draws one square: resting color first, then the translucent highlight
/// blended over it when the display color is overridden. Labels that resolve
/// to no square draw nothing.
pub fn draw_square_by_label(canvas: &mut Canvas<Window>, board: &Board, label: &str) -> Result<(), String> {
    if let Some(square) = board.square(label) {
        fill_square_color(canvas, square.rect, square.resting)?;
        if square.display != square.resting {
            fill_square_color(canvas, square.rect, square.display)?;
        }
    }
    Ok(())
}

/// Renders the target label shaded on its backdrop and centers it on the board.
pub fn draw_target_text(
    canvas: &mut Canvas<Window>,
    tc: &TextureCreator<WindowContext>,
    font: &Font,
    text: &str,
) -> Result<(), String> {
    let surface = font
        .render(text)
        .shaded(TEXT_COLOR, TEXT_BACKDROP)
        .map_err(|e| e.to_string())?;
    let texture = surface.as_texture(tc).map_err(|e| e.to_string())?;

    let (w, h) = (surface.width(), surface.height());
    let rect = Rect::new((BOARD_EDGE - w as i32) / 2, (BOARD_EDGE - h as i32) / 2, w, h);
    canvas.copy(&texture, None, rect)
}
