use minifb::Key;

use crate::{
    board::Board,
    cabinet::{Colour, DISPLAY_HEIGHT, DISPLAY_WIDTH, KEY_MAP, overlay, play, render},
    config::Configuration,
    error::BoardError,
    memory::{AccessLevel, AddressDecoder, Region, StoreId, memory::VIDEO_RAM_SIZE},
    test_support::{Access, CpuEvent, Instruction, ScriptedCpu},
};

fn blank() -> Vec<u32> {
    vec![Colour::Black.rgb(); DISPLAY_WIDTH * DISPLAY_HEIGHT]
}

fn lit(pixels: &[u32]) -> Vec<usize> {
    pixels
        .iter()
        .enumerate()
        .filter(|(_, pixel)| **pixel != Colour::Black.rgb())
        .map(|(index, _)| index)
        .collect()
}

#[test]
fn overlay_strips() {
    assert_eq!(overlay(100, 0), Colour::White);
    assert_eq!(overlay(100, 31), Colour::White);
    assert_eq!(overlay(100, 32), Colour::Red);
    assert_eq!(overlay(100, 63), Colour::Red);
    assert_eq!(overlay(100, 64), Colour::White);
    assert_eq!(overlay(100, 183), Colour::White);
    assert_eq!(overlay(0, 184), Colour::Green);
    assert_eq!(overlay(223, 239), Colour::Green);
}

#[test]
fn bottom_strip_is_green_between_the_ends() {
    assert_eq!(overlay(15, 240), Colour::White);
    assert_eq!(overlay(16, 240), Colour::Green);
    assert_eq!(overlay(133, 255), Colour::Green);
    assert_eq!(overlay(134, 255), Colour::White);
}

#[test]
fn first_pixel_lands_bottom_left() {
    let mut video_ram = vec![0u8; VIDEO_RAM_SIZE];
    video_ram[0] = 0x01;
    let mut pixels = blank();
    render(&video_ram, false, &mut pixels);
    assert_eq!(lit(&pixels), vec![255 * DISPLAY_WIDTH]);
}

#[test]
fn flipped_first_pixel_lands_top_right() {
    let mut video_ram = vec![0u8; VIDEO_RAM_SIZE];
    video_ram[0] = 0x01;
    let mut pixels = blank();
    render(&video_ram, true, &mut pixels);
    assert_eq!(lit(&pixels), vec![DISPLAY_WIDTH - 1]);
}

#[test]
fn lit_pixels_take_the_overlay_colour() {
    // Scanline 100, byte 1, bit 7: raster column 15, display (100, 240).
    let mut video_ram = vec![0u8; VIDEO_RAM_SIZE];
    video_ram[100 * 32 + 1] = 0x80;
    let mut pixels = blank();
    render(&video_ram, false, &mut pixels);
    let index = 240 * DISPLAY_WIDTH + 100;
    assert_eq!(lit(&pixels), vec![index]);
    assert_eq!(pixels[index], Colour::Green.rgb());
}

#[test]
fn render_clears_unlit_pixels() {
    let video_ram = vec![0u8; VIDEO_RAM_SIZE];
    let mut pixels = vec![Colour::White.rgb(); DISPLAY_WIDTH * DISPLAY_HEIGHT];
    render(&video_ram, false, &mut pixels);
    assert!(lit(&pixels).is_empty());
}

#[test]
fn key_map_covers_the_panel_once_per_key() {
    for (index, (key, _)) in KEY_MAP.iter().enumerate() {
        assert_ne!(*key, Key::Escape);
        assert!(KEY_MAP[index + 1..].iter().all(|(other, _)| other != key));
    }
}

#[test]
fn play_runs_frames_until_told_to_stop() {
    let mut board = Board::new(Configuration::default(), ScriptedCpu::repeating(10));
    let mut frames = 0;
    play(&mut board, |board| {
        board.run_frame_scanlines()?;
        frames += 1;
        Ok(frames < 3)
    })
    .unwrap();

    assert_eq!(frames, 3);
    assert!(!board.is_powered());
    assert_eq!(board.cpu().events.last(), Some(&CpuEvent::PowerOff));
}

#[test]
fn failed_frame_still_powers_off() {
    let program = vec![Instruction {
        cycles: 7,
        access: Access::Read(0x3000),
    }];
    let mut board = Board::new(
        Configuration::default(),
        ScriptedCpu::new(program, Some(4)),
    );
    board.bus_mut().decoder = AddressDecoder::new(vec![Region {
        low: 0x0000,
        high: 0x07FF,
        store: StoreId::RomH,
        access: AccessLevel::ReadOnly,
    }])
    .unwrap();

    let result = play(&mut board, |board| {
        board.run_frame_scanlines()?;
        Ok(true)
    });

    assert!(matches!(result, Err(BoardError::InvalidAddress(0x3000))));
    assert!(!board.is_powered());
    assert_eq!(board.cpu().events.last(), Some(&CpuEvent::PowerOff));
}
