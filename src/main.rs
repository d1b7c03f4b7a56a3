use std::time::Duration;

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::Color;
use sdl2::render::BlendMode;

mod board;
mod draw;
mod session;

use board::{Board, BOARD_EDGE};
use session::Session;

const FRAME_DELAY: Duration = Duration::from_millis(50);
const FONT_PATH: &str = "assets/fonts/target.ttf";
const FONT_SIZE: u16 = 144;

fn main() -> Result<(), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let font_context = sdl2::ttf::init().map_err(|e| e.to_string())?;

    if !sdl2::hint::set("SDL_RENDER_SCALE_QUALITY", "2") {
        eprintln!("warning: linear texture filtering not enabled");
    }

    let window = video_subsystem
        .window("chess vision trainer", BOARD_EDGE as u32, BOARD_EDGE as u32)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas.set_blend_mode(BlendMode::Blend);
    let texture_creator = canvas.texture_creator();

    let font = font_context
        .load_font(FONT_PATH, FONT_SIZE)
        .map_err(|e| format!("could not load font {FONT_PATH}: {e}"))?;

    let mut event_pump = sdl_context.event_pump()?;
    let mut board = Board::new();
    let mut session = Session::new();

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                _ => {}
            }
        }

        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.clear();

        for label in Board::labels() {
            draw::draw_square_by_label(&mut canvas, &board, &label)?;
        }
        draw::draw_target_text(&mut canvas, &texture_creator, &font, &session.target)?;

        let mouse = event_pump.mouse_state();
        let clicked = mouse.is_mouse_button_pressed(MouseButton::Left);
        session.frame(&mut board, mouse.x(), mouse.y(), clicked);

        canvas.present();
        std::thread::sleep(FRAME_DELAY);
    }

    Ok(())
}
