//! Word clock for a 64×32 RGB LED matrix.
//!
//! Renders the current time as lit words on a fixed letter grid, waking
//! once per minute. Unlit letters stay faintly visible, the current
//! phrase is bright, and a braille dot pattern in the corner shows
//! AM/PM.
//!
//! ## Usage
//! ```sh
//! sudo ./target/release/word-clock-rs --brightness 80
//! ```

#[cfg(not(feature = "hardware"))]
fn main() {
    eprintln!("This binary requires the 'hardware' feature (rpi-led-matrix).");
    eprintln!("Build with: cargo build --release");
    eprintln!("Tests can run without it: cargo test --no-default-features");
    std::process::exit(1);
}

#[cfg(feature = "hardware")]
fn main() {
    use clap::Parser;
    use word_clock_rs::clock::SystemClock;
    use word_clock_rs::render::clock_loop;
    use word_clock_rs::{ClockConfig, create_matrix, setup_signal_handler};

    /// Word clock for an RGB LED matrix
    #[derive(Parser)]
    #[command(name = "word-clock-rs")]
    #[command(about = "Displays the time as lit words on an RGB LED matrix")]
    #[command(version)]
    struct Args {
        /// Display brightness (0-100)
        #[arg(long, default_value = "100")]
        brightness: u8,

        /// GPIO slowdown for the matrix driver (raise on faster Pis)
        #[arg(long, default_value = "4")]
        gpio_slowdown: u32,
    }

    // Plain compact logs, journald-friendly.
    tracing_subscriber::fmt()
        .with_target(false)
        .with_ansi(false)
        .compact()
        .init();

    let args = Args::parse();

    let mut cfg = ClockConfig::default();
    cfg.palette = cfg.palette.apply_brightness(args.brightness.min(100));

    tracing::info!("Word clock v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Panel: {}x{}", cfg.panel.cols, cfg.panel.rows);
    tracing::info!("Brightness: {}", args.brightness.min(100));

    let matrix = match create_matrix(cfg.panel, args.gpio_slowdown) {
        Ok(m) => m,
        Err(e) => {
            tracing::error!("Failed to initialize LED matrix: {e}");
            std::process::exit(1);
        }
    };

    let running = setup_signal_handler();

    clock_loop(&matrix, &SystemClock, &running, &cfg);

    tracing::info!("Shutting down cleanly.");
}
