//! Pure stopwatch and countdown engines advanced by elapsed-time ticks.

/// Longest countdown that can be configured.
pub const MAX_COUNTDOWN_MINUTES: u32 = 99;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Elapsed-time counter with laps.
pub struct Stopwatch {
    running: bool,
    elapsed_ms: u64,
    laps: Vec<u64>,
}

impl Stopwatch {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Lap split times (elapsed at the moment of the lap), newest first.
    pub fn laps(&self) -> &[u64] {
        &self.laps
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Records a lap. Ignored while stopped.
    pub fn lap(&mut self) {
        if self.running {
            self.laps.insert(0, self.elapsed_ms);
        }
    }

    /// Zeroes the counter and laps. Ignored while running.
    pub fn reset(&mut self) {
        if !self.running {
            self.elapsed_ms = 0;
            self.laps.clear();
        }
    }

    pub fn tick(&mut self, delta_ms: u64) {
        if self.running {
            self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Countdown timer that finishes once at zero.
pub struct Countdown {
    duration_ms: u64,
    remaining_ms: u64,
    running: bool,
}

impl Countdown {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Sets the duration and rewinds. Ignored while running.
    pub fn set(&mut self, minutes: u32, seconds: u32) {
        if self.running {
            return;
        }
        let minutes = u64::from(minutes.min(MAX_COUNTDOWN_MINUTES));
        let seconds = u64::from(seconds.min(59));
        self.duration_ms = (minutes * 60 + seconds) * 1000;
        self.remaining_ms = self.duration_ms;
    }

    /// Starts or resumes. Nothing to count means nothing starts.
    pub fn start(&mut self) {
        if self.remaining_ms > 0 {
            self.running = true;
        }
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn reset(&mut self) {
        self.running = false;
        self.remaining_ms = self.duration_ms;
    }

    /// Advances the countdown. Returns `true` on the tick that reaches zero.
    pub fn tick(&mut self, delta_ms: u64) -> bool {
        if !self.running {
            return false;
        }
        self.remaining_ms = self.remaining_ms.saturating_sub(delta_ms);
        if self.remaining_ms == 0 {
            self.running = false;
            return true;
        }
        false
    }
}

/// `mm:ss.t`, or `h:mm:ss.t` past the hour.
pub fn format_stopwatch(elapsed_ms: u64) -> String {
    let tenths = (elapsed_ms / 100) % 10;
    let total_seconds = elapsed_ms / 1000;
    let (hours, minutes, seconds) = (
        total_seconds / 3600,
        (total_seconds / 60) % 60,
        total_seconds % 60,
    );
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}.{tenths}")
    } else {
        format!("{minutes:02}:{seconds:02}.{tenths}")
    }
}

/// `mm:ss`, rounding partial seconds up so the display reads `00:00` only when finished.
pub fn format_countdown(remaining_ms: u64) -> String {
    let total_seconds = remaining_ms.div_ceil(1000);
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}
