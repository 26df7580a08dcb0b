//! Frame rendering: turn a resolved word list into a pixel buffer, and
//! push finished buffers to the LED matrix.
//!
//! The buffer work is pure `image` operations and runs anywhere; only
//! `draw_frame_to_canvas` and `clock_loop` touch `rpi-led-matrix`, so
//! they sit behind the `hardware` feature like the rest of the driver
//! boundary.
//!
//! ## Rust concepts
//! - `RgbImage` as an owned, testable frame buffer
//! - Feature gates to keep hardware types out of the test build
//! - Trait objects (`&dyn TickSource`) for an injectable clock

#[cfg(feature = "hardware")]
use crate::clock::TickSource;
use crate::font::{self, BRAILLE_A, BRAILLE_P};
use crate::grid::{self, GRID_COLS, GRID_ROWS, Word};
#[cfg(feature = "hardware")]
use crate::is_running;
#[cfg(feature = "hardware")]
use crate::words::resolve;
use crate::{ClockConfig, Color};
use image::RgbImage;
#[cfg(feature = "hardware")]
use rpi_led_matrix::{LedCanvas, LedMatrix};
#[cfg(feature = "hardware")]
use std::sync::atomic::AtomicBool;

// ── Glyph drawing ────────────────────────────────────────────────────

/// Stamp one letter into the frame at a pixel position. Pixels falling
/// outside the buffer are skipped rather than wrapped.
fn draw_glyph(frame: &mut RgbImage, letter: char, x: i32, y: i32, color: Color) {
    let Some(rows) = font::glyph(letter) else {
        return;
    };
    for (dy, bits) in rows.iter().enumerate() {
        for dx in 0..font::GLYPH_WIDTH {
            if bits >> (font::GLYPH_WIDTH - 1 - dx) & 1 == 0 {
                continue;
            }
            let px = x + dx as i32;
            let py = y + dy as i32;
            if px < 0 || py < 0 || px >= frame.width() as i32 || py >= frame.height() as i32 {
                continue;
            }
            frame.put_pixel(px as u32, py as u32, color.into());
        }
    }
}

/// Which indicator shape to show: braille "a" before noon, "p" from
/// noon onward.
pub fn meridiem_glyph(hour24: u32) -> &'static [(u32, u32)] {
    if hour24 % 24 < 12 { BRAILLE_A } else { BRAILLE_P }
}

// ── Frame rendering ──────────────────────────────────────────────────

/// Render one clock frame.
///
/// Every letter is drawn dim first, then the cells of each resolved
/// word are redrawn bright — last write wins, so a cell lit by two
/// words is just drawn bright twice. The AM/PM dots go in the top-right
/// corner, and the buffer is cropped so the undriven bottom rows of the
/// panel never receive pixels.
pub fn render_clock_frame(words: &[Word], hour24: u32, cfg: &ClockConfig) -> RgbImage {
    let mut frame = RgbImage::new(cfg.panel.cols, cfg.panel.rows);

    // Base layer: the whole grid, faint. Row 0 is never shown.
    for row in 1..GRID_ROWS {
        for col in 0..GRID_COLS {
            let (x, y) = cfg.cell_origin(row, col);
            draw_glyph(&mut frame, grid::letter_at(row, col), x, y, cfg.palette.dim);
        }
    }

    // Highlights: redraw the current phrase bright.
    for &word in words {
        for (row, col) in word.cells() {
            if row == 0 {
                continue;
            }
            let (x, y) = cfg.cell_origin(row, col);
            draw_glyph(
                &mut frame,
                grid::letter_at(row, col),
                x,
                y,
                cfg.palette.bright,
            );
        }
    }

    // AM/PM dots, top-right corner, drawn on every frame.
    let block_x = cfg.panel.cols - 3;
    for &(dy, dx) in meridiem_glyph(hour24) {
        frame.put_pixel(block_x + dx, dy, cfg.palette.indicator.into());
    }

    // The panel's lowest rows stay dark; hand off only the driven area.
    image::imageops::crop_imm(&frame, 0, 0, cfg.panel.cols, cfg.visible_rows).to_image()
}

// ── Hardware boundary ────────────────────────────────────────────────

/// Draw a finished frame onto the LED canvas pixel by pixel, at origin
/// (0,0).
#[cfg(feature = "hardware")]
pub fn draw_frame_to_canvas(canvas: &mut LedCanvas, frame: &RgbImage) {
    for (x, y, pixel) in frame.enumerate_pixels() {
        let led_color = Color::new(pixel[0], pixel[1], pixel[2]);
        canvas.set(x as i32, y as i32, &led_color.into());
    }
}

/// The appliance loop: once per minute, resolve the time, render, swap.
///
/// The matrix handle is constructed by the caller and borrowed here, so
/// it is released when `main` returns after Ctrl+C. A frame is rendered
/// immediately on entry and again at each minute boundary.
#[cfg(feature = "hardware")]
pub fn clock_loop(
    matrix: &LedMatrix,
    ticks: &dyn TickSource,
    running: &AtomicBool,
    cfg: &ClockConfig,
) {
    let mut canvas = matrix.offscreen_canvas();

    while is_running(running) {
        let now = ticks.now();
        let resolved = resolve(now.hour, now.minute);
        tracing::info!("{:02}:{:02} -> {:?}", now.hour, now.minute, resolved.words);

        let frame = render_clock_frame(&resolved.words, now.hour, cfg);
        draw_frame_to_canvas(&mut canvas, &frame);
        canvas = matrix.swap(canvas);

        ticks.wait_for_next_minute(now);
    }
}

// ── Tests ────────────────────────────────────────────────────────────
