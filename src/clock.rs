//! Wall-clock access behind a small trait, so the render path can be
//! exercised in tests without real minute-long waits.

use chrono::{Local, Timelike};
use std::thread;
use std::time::Duration;

/// A snapshot of the local wall clock. The second only feeds the sleep
/// computation; the displayed words depend on hour and minute alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WallTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

/// Source of "render now" ticks: read the time, then block until the
/// next minute boundary.
pub trait TickSource {
    fn now(&self) -> WallTime;
    fn wait_for_next_minute(&self, now: WallTime);
}

/// Seconds left until the next minute boundary. At second 0 this is a
/// full 60 — the tick that just fired covers the current minute.
pub fn seconds_until_next_minute(second: u32) -> u64 {
    60u64.saturating_sub(u64::from(second.min(59)))
}

/// The real clock: `chrono` for local time, a blocking sleep for the
/// minute wait. Termination happens externally; the sleep is not
/// interruptible and doesn't need to be.
pub struct SystemClock;

impl TickSource for SystemClock {
    fn now(&self) -> WallTime {
        let now = Local::now();
        WallTime {
            hour: now.hour(),
            minute: now.minute(),
            second: now.second(),
        }
    }

    fn wait_for_next_minute(&self, now: WallTime) {
        thread::sleep(Duration::from_secs(seconds_until_next_minute(now.second)));
    }
}
