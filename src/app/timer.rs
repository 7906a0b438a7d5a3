use super::*;
use std::time::{Duration, Instant};

impl TestApp {
    pub fn timer_running(&self) -> bool {
        self.session.test_started && !self.session.test_completed
    }

    /// Applies one second of countdown. Reaching zero clamps the clock and
    /// completes the test exactly once, with no confirmation prompt; every
    /// tick after that is a no-op.
    pub fn tick_second(&mut self) {
        if !self.timer_running() {
            return;
        }
        if self.session.time_remaining <= 1 {
            self.session.time_remaining = 0;
            self.finish_test();
        } else {
            self.session.time_remaining -= 1;
        }
    }

    /// Drives the countdown from the UI loop: one `tick_second` per whole
    /// second of wall clock elapsed since the last poll. The update loop
    /// serializes ticks with user actions, so a tick can never interleave
    /// with a submit halfway through.
    pub fn poll_timer(&mut self) {
        if !self.timer_running() {
            self.last_tick = None;
            return;
        }
        let Some(anchor) = self.last_tick else {
            self.last_tick = Some(Instant::now());
            return;
        };
        let mut anchor = anchor;
        while anchor.elapsed() >= Duration::from_secs(1) {
            anchor += Duration::from_secs(1);
            self.tick_second();
            if !self.timer_running() {
                self.last_tick = None;
                return;
            }
        }
        self.last_tick = Some(anchor);
    }
}

/// Zero-padded "HH:MM:SS" for the countdown header.
pub fn format_time(seconds: u32) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}
