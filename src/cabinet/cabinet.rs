//! Display window and control panel.

use log::{info, warn};
use minifb::{Key, Scale, Window, WindowOptions};

use crate::{
    audio::SoundEffects,
    board::Board,
    cabinet::palette::{Colour, overlay},
    config::{RASTER_HEIGHT, RASTER_WIDTH},
    controls::{Button, Player},
    error::{BoardError, Result},
    processor::Processor,
};

/// Portrait width: one column per scanline.
pub const DISPLAY_WIDTH: usize = RASTER_HEIGHT;
pub const DISPLAY_HEIGHT: usize = RASTER_WIDTH;

const BYTES_PER_SCANLINE: usize = RASTER_WIDTH / 8;

/// Keyboard layout of the control panel.
pub const KEY_MAP: [(Key, Button); 11] = [
    (Key::C, Button::Credit),
    (Key::T, Button::Tilt),
    (Key::Key1, Button::Start(Player::One)),
    (Key::Key2, Button::Start(Player::Two)),
    (Key::Space, Button::Shoot(Player::One)),
    (Key::Left, Button::Left(Player::One)),
    (Key::Right, Button::Right(Player::One)),
    (Key::X, Button::Shoot(Player::Two)),
    (Key::A, Button::Left(Player::Two)),
    (Key::D, Button::Right(Player::Two)),
    (Key::Z, Button::Shoot(Player::Two)),
];

/// Rotate video RAM onto the portrait display.
///
/// Video RAM holds 224 scanlines of 32 bytes, lowest bit leftmost. Scanline `n` becomes display
/// column `n` and raster column `x` becomes display row `255 - x`. `flip` turns the picture
/// upside down for player 2 on a cocktail table. `pixels` must hold
/// `DISPLAY_WIDTH * DISPLAY_HEIGHT` entries.
pub fn render(video_ram: &[u8], flip: bool, pixels: &mut [u32]) {
    let scanlines = video_ram.chunks_exact(BYTES_PER_SCANLINE).take(RASTER_HEIGHT);
    for (input_y, line) in scanlines.enumerate() {
        let output_x = if flip {
            RASTER_HEIGHT - input_y - 1
        } else {
            input_y
        };
        for (byte_x, &video) in line.iter().enumerate() {
            for bit in 0..8 {
                let input_x = (byte_x << 3) + bit;
                let output_y = if flip {
                    input_x
                } else {
                    RASTER_WIDTH - input_x - 1
                };
                let colour = if video & (1 << bit) == 0 {
                    Colour::Black
                } else {
                    overlay(output_x, output_y)
                };
                pixels[output_x + output_y * DISPLAY_WIDTH] = colour.rgb();
            }
        }
    }
}

fn scale(pixel_size: usize) -> Scale {
    match pixel_size {
        0 | 1 => Scale::X1,
        2 | 3 => Scale::X2,
        4..=7 => Scale::X4,
        _ => Scale::X8,
    }
}

/// A board in a cabinet: runs one frame per display refresh until the window closes or Escape is
/// pressed.
pub struct Cabinet<P: Processor> {
    board: Board<P>,
    window: Window,
    pixels: Vec<u32>,
}

impl<P: Processor> Cabinet<P> {
    /// Open the display and connect the speakers. A missing audio device or sample set leaves the
    /// cabinet silent rather than failing.
    pub fn new(mut board: Board<P>) -> Result<Self> {
        let config = board.config().clone();
        let mut window = Window::new(
            "Space Invaders",
            DISPLAY_WIDTH,
            DISPLAY_HEIGHT,
            WindowOptions {
                scale: scale(config.pixel_size),
                ..WindowOptions::default()
            },
        )
        .map_err(|error| BoardError::Window(error.to_string()))?;
        window.set_target_fps(config.frames_per_second.max(1) as usize);

        match SoundEffects::load(&config.sound_directory) {
            Ok(effects) => board.subscribe_sound(Box::new(effects)),
            Err(error) => warn!("Running without sound: {}", error),
        }

        Ok(Self {
            board,
            window,
            pixels: vec![Colour::Black.rgb(); DISPLAY_WIDTH * DISPLAY_HEIGHT],
        })
    }

    pub fn board(&self) -> &Board<P> {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board<P> {
        &mut self.board
    }

    /// Power on and play until the window is closed. The board is powered off on the way out,
    /// whether or not a frame failed.
    pub fn run(&mut self) -> Result<()> {
        let window = &mut self.window;
        let pixels = &mut self.pixels;
        play(&mut self.board, |board| {
            if !window.is_open() || window.is_key_down(Key::Escape) {
                return Ok(false);
            }
            scan_keys(window, board);
            board.run_frame_scanlines()?;
            present(window, pixels, board)?;
            Ok(true)
        })?;
        info!("Cabinet closed");
        Ok(())
    }
}

/// Power `board` on, call `frame` until it returns `false` or fails, then power off.
pub fn play<P, F>(board: &mut Board<P>, mut frame: F) -> Result<()>
where
    P: Processor,
    F: FnMut(&mut Board<P>) -> Result<bool>,
{
    board.power_on();
    let outcome = loop {
        match frame(board) {
            Ok(true) => {}
            Ok(false) => break Ok(()),
            Err(error) => break Err(error),
        }
    };
    board.power_off();
    outcome
}

fn scan_keys<P: Processor>(window: &Window, board: &mut Board<P>) {
    for (_, button) in KEY_MAP {
        let held = KEY_MAP
            .iter()
            .any(|&(key, mapped)| mapped == button && window.is_key_down(key));
        if held {
            board.controls_mut().press(button);
        } else {
            board.controls_mut().release(button);
        }
    }
}

fn present<P: Processor>(window: &mut Window, pixels: &mut [u32], board: &Board<P>) -> Result<()> {
    let flip = board.config().cocktail_table && board.cocktail_mode_control();
    render(board.video_ram(), flip, pixels);
    window
        .update_with_buffer(pixels, DISPLAY_WIDTH, DISPLAY_HEIGHT)
        .map_err(|error| BoardError::Window(error.to_string()))
}
