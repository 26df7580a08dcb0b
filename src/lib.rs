//! Shared building blocks for the word clock.
//!
//! This module provides what the binary and the render path both need:
//! - Explicit configuration values (panel geometry, cell layout, colors)
//! - A color type decoupled from the hardware crate
//! - Matrix initialization with our hardware defaults
//! - Signal handling for clean shutdown
//!
//! Configuration is constructed once in `main` and passed by reference;
//! there is no module-level mutable state anywhere in the crate.

pub mod clock;
pub mod font;
pub mod grid;
pub mod render;
pub mod words;

#[cfg(feature = "hardware")]
use rpi_led_matrix::{LedMatrix, LedMatrixOptions, LedRuntimeOptions};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

// ── Panel configuration ────────────────────────────────────────────

/// Dimensions of the LED panel in pixels.
///
/// # Rust concept: derive macros
/// `Clone, Copy` make this cheaply copyable (it's just two u32s).
/// Passing configuration as a plain value like this — rather than
/// through globals — is what keeps the render path testable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelConfig {
    pub rows: u32,
    pub cols: u32,
}

impl PanelConfig {
    pub fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self { rows: 32, cols: 64 }
    }
}

// ── Color ──────────────────────────────────────────────────────────

/// Our own color type, decoupled from the hardware crate.
///
/// This lets us test render logic on any machine without needing
/// `rpi-led-matrix`. At the hardware boundary, we convert via
/// `Into<LedColor>`; at the frame-buffer boundary, via `Into<Rgb<u8>>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Apply brightness scaling (0-100) to this color.
    pub fn apply_brightness(self, brightness: u8) -> Self {
        if brightness >= 100 {
            return self;
        }
        Self {
            r: ((self.r as u16 * brightness as u16) / 100) as u8,
            g: ((self.g as u16 * brightness as u16) / 100) as u8,
            b: ((self.b as u16 * brightness as u16) / 100) as u8,
        }
    }
}

/// Convert our Color to the hardware crate's LedColor at the boundary.
#[cfg(feature = "hardware")]
impl From<Color> for rpi_led_matrix::LedColor {
    fn from(c: Color) -> Self {
        rpi_led_matrix::LedColor {
            red: c.r,
            green: c.g,
            blue: c.b,
        }
    }
}

/// Convert to the `image` crate's pixel type when drawing into a frame.
impl From<Color> for image::Rgb<u8> {
    fn from(c: Color) -> Self {
        image::Rgb([c.r, c.g, c.b])
    }
}

// ── Palette ────────────────────────────────────────────────────────

/// The three colors the clock ever draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Unlit letters: still visible, just faint.
    pub dim: Color,
    /// Letters belonging to the current phrase.
    pub bright: Color,
    /// The AM/PM dot pattern.
    pub indicator: Color,
}

impl Palette {
    /// Scale the whole palette by a brightness percentage (0-100).
    pub fn apply_brightness(self, brightness: u8) -> Self {
        Self {
            dim: self.dim.apply_brightness(brightness),
            bright: self.bright.apply_brightness(brightness),
            indicator: self.indicator.apply_brightness(brightness),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            dim: Color::new(50, 50, 50),
            bright: Color::new(255, 255, 255),
            indicator: Color::new(255, 0, 0),
        }
    }
}

// ── Clock configuration ────────────────────────────────────────────

/// Horizontal nudge that keeps the last grid column fully in frame:
/// 11 cells × 6 px leaves no margin for plain centering to round away.
const X_CORRECTION: i32 = 2;

/// Everything the renderer needs to place letters on the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockConfig {
    pub panel: PanelConfig,
    /// Horizontal pitch of one letter cell, in pixels.
    pub cell_width: u32,
    /// Vertical pitch of one letter cell. Smaller than the glyph height,
    /// so adjacent rows interleave; the panel has always read this way.
    pub cell_height: u32,
    /// Rows of the panel actually driven. The rows below are left dark
    /// (framing constraint of the physical build, not a defect).
    pub visible_rows: u32,
    pub palette: Palette,
}

impl ClockConfig {
    /// Left edge of the letter grid: horizontally centered, then nudged
    /// right so the last column stays in frame.
    pub fn offset_x(&self) -> i32 {
        (self.panel.cols as i32 - grid::GRID_COLS as i32 * self.cell_width as i32) / 2
            + X_CORRECTION
    }

    /// Top-left pixel of a grid cell. Row 0 is never drawn, so row 1
    /// lands at the top of the buffer.
    pub fn cell_origin(&self, row: usize, col: usize) -> (i32, i32) {
        (
            self.offset_x() + col as i32 * self.cell_width as i32,
            (row as i32 - 1) * self.cell_height as i32,
        )
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            panel: PanelConfig::default(),
            cell_width: 6,
            cell_height: 3,
            visible_rows: 30,
            palette: Palette::default(),
        }
    }
}

// ── Matrix initialization ──────────────────────────────────────────

/// Create a matrix configured for our hardware:
/// Pi + Adafruit Bonnet + one 64×32 panel.
///
/// # Rust concept: Result and the ? operator
/// Matrix initialization can fail (not running as root, GPIO busy), and
/// that failure is fatal at startup — the caller logs it and exits.
#[cfg(feature = "hardware")]
pub fn create_matrix(
    panel: PanelConfig,
    gpio_slowdown: u32,
) -> Result<LedMatrix, Box<dyn std::error::Error>> {
    let mut options = LedMatrixOptions::new();
    options.set_rows(panel.rows);
    options.set_cols(panel.cols);
    options.set_hardware_mapping("adafruit-hat");

    options.set_pwm_bits(8)?; // Full 8-bit color depth
    options.set_pwm_lsb_nanoseconds(130); // Stable timing (~143Hz refresh)

    let mut rt_options = LedRuntimeOptions::new();
    rt_options.set_gpio_slowdown(gpio_slowdown);

    let matrix = LedMatrix::new(Some(options), Some(rt_options))?;

    Ok(matrix)
}

/// Set up a Ctrl+C handler that sets `running` to false.
///
/// # Rust concept: Arc and AtomicBool
/// The flag is shared between the main loop and the signal handler.
/// `AtomicBool` is a thread-safe boolean — no mutex needed for one bool.
pub fn setup_signal_handler() -> Arc<AtomicBool> {
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone(); // Clone the Arc, not the bool — both point to same data

    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");

    running
}

/// Check if the main loop should keep running.
pub fn is_running(running: &AtomicBool) -> bool {
    running.load(Ordering::SeqCst)
}

// ── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    // ── PanelConfig tests ──────────────────────────────────────────

    #[test]
    fn panel_config_default_is_64x32() {
        let panel = PanelConfig::default();
        assert_eq!(panel.rows, 32);
        assert_eq!(panel.cols, 64);
    }

    // ── Color tests ────────────────────────────────────────────────

    #[test]
    fn color_new() {
        let c = Color::new(10, 20, 30);
        assert_eq!(c.r, 10);
        assert_eq!(c.g, 20);
        assert_eq!(c.b, 30);
    }

    #[test]
    fn apply_brightness_100_is_identity() {
        let c = Color::new(100, 200, 50);
        assert_eq!(c.apply_brightness(100), c);
    }

    #[test]
    fn apply_brightness_above_100_is_identity() {
        let c = Color::new(100, 200, 50);
        assert_eq!(c.apply_brightness(255), c);
    }

    #[test]
    fn apply_brightness_0_is_black() {
        let c = Color::new(255, 255, 255);
        assert_eq!(c.apply_brightness(0), Color::new(0, 0, 0));
    }

    #[test]
    fn apply_brightness_50_halves() {
        let c = Color::new(200, 100, 50);
        let dimmed = c.apply_brightness(50);
        assert_eq!(dimmed, Color::new(100, 50, 25));
    }

    #[test]
    fn color_converts_to_image_pixel() {
        let pixel: image::Rgb<u8> = Color::new(1, 2, 3).into();
        assert_eq!(pixel, image::Rgb([1, 2, 3]));
    }

    // ── Palette tests ──────────────────────────────────────────────

    #[test]
    fn palette_brightness_scales_all_three_colors() {
        let scaled = Palette::default().apply_brightness(50);
        assert_eq!(scaled.dim, Color::new(25, 25, 25));
        assert_eq!(scaled.bright, Color::new(127, 127, 127));
        assert_eq!(scaled.indicator, Color::new(127, 0, 0));
    }

    // ── ClockConfig tests ──────────────────────────────────────────

    #[test]
    fn grid_is_centered_with_the_last_column_in_frame() {
        let cfg = ClockConfig::default();
        // (64 - 11*6)/2 + 2
        assert_eq!(cfg.offset_x(), 1);

        let (x, _) = cfg.cell_origin(1, grid::GRID_COLS - 1);
        assert!(x + font::GLYPH_WIDTH as i32 <= cfg.panel.cols as i32);
    }

    #[rstest]
    #[case(1, 0, (1, 0))]
    #[case(1, 10, (61, 0))]
    #[case(9, 0, (1, 24))]
    #[case(4, 6, (37, 9))]
    fn cell_origin_uses_cell_pitch_and_skips_row_zero(
        #[case] row: usize,
        #[case] col: usize,
        #[case] expected: (i32, i32),
    ) {
        assert_eq!(ClockConfig::default().cell_origin(row, col), expected);
    }

    #[test]
    fn bottom_glyph_row_fits_inside_the_visible_area() {
        let cfg = ClockConfig::default();
        let (_, y) = cfg.cell_origin(grid::GRID_ROWS - 1, 0);
        assert!(y + font::GLYPH_HEIGHT as i32 <= cfg.visible_rows as i32);
    }
}
