//! Time helpers shared across host contracts and adapters.

#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Local wall-clock reading used by the status bar, lock screen and Clock app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallClock {
    /// Zero-based month.
    pub month: u32,
    /// Day of month.
    pub day: u32,
    /// Zero-based weekday, Sunday first.
    pub weekday: u32,
    /// Hour, 0-23.
    pub hour: u32,
    /// Minute.
    pub minute: u32,
    /// Second.
    pub second: u32,
}

impl WallClock {
    /// Reads the local clock. Off-browser the reading is UTC.
    pub fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            Self {
                month: date.get_month(),
                day: date.get_date(),
                weekday: date.get_day(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
                second: date.get_seconds(),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::from_unix_ms(unix_time_ms_now())
        }
    }

    /// Builds a UTC reading from a unix millisecond timestamp.
    pub fn from_unix_ms(ms: u64) -> Self {
        let secs = ms / 1000;
        let days = secs / 86_400;
        let rem = secs % 86_400;
        let (_, month, day) = civil_from_days(days as i64);
        Self {
            month,
            day,
            // 1970-01-01 was a Thursday
            weekday: ((days + 4) % 7) as u32,
            hour: (rem / 3600) as u32,
            minute: ((rem % 3600) / 60) as u32,
            second: (rem % 60) as u32,
        }
    }

    /// `HH:MM`, 24-hour.
    pub fn hh_mm(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    /// `HH:MM:SS`, 24-hour.
    pub fn hh_mm_ss(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }

    /// Short date such as `Tue, Mar 5`.
    pub fn short_date(&self) -> String {
        let weekday = WEEKDAYS.get(self.weekday as usize).copied().unwrap_or("");
        let month = MONTHS.get(self.month as usize).copied().unwrap_or("");
        format!("{weekday}, {month} {}", self.day)
    }
}

// Howard Hinnant's days-to-civil conversion; returns (year, zero-based month, day).
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month - 1, day)
}
