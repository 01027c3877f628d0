// Time encoder - approximate "seconds since 2010" from a 100ns tick count
// Uses a fixed 30-day month and 365-day year; not calendar-exact.

use std::time::Instant;

use crate::infrastructure::traits::TickSource;

pub const TICKS_PER_MILLISECOND: i64 = 10_000;
pub const TICKS_PER_SECOND: i64 = TICKS_PER_MILLISECOND * 1000;
pub const TICKS_PER_MINUTE: i64 = TICKS_PER_SECOND * 60;
pub const TICKS_PER_HOUR: i64 = TICKS_PER_MINUTE * 60;
pub const TICKS_PER_DAY: i64 = TICKS_PER_HOUR * 24;

/// Ticks between 0001-01-01 and 1970-01-01
pub const UNIX_EPOCH_TICKS: i64 = 621_355_968_000_000_000;

const DAYS_PER_YEAR: i64 = 365;
const DAYS_PER_4_YEARS: i64 = DAYS_PER_YEAR * 4 + 1; // 1461
const DAYS_PER_100_YEARS: i64 = DAYS_PER_4_YEARS * 25 - 1; // 36524
const DAYS_PER_400_YEARS: i64 = DAYS_PER_100_YEARS * 4 + 1; // 146097

const DAYS_TO_MONTH_365: [i64; 13] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365];
const DAYS_TO_MONTH_366: [i64; 13] = [0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335, 366];

const EPOCH_YEAR: i64 = 2010;
const SECONDS_PER_YEAR: i64 = 31_536_000;
const SECONDS_PER_MONTH: i64 = 2_592_000;
const SECONDS_PER_DAY: i64 = 86_400;

/// Year, month and day decomposition of a day index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayParts {
    pub year: i64,
    /// 1-based month
    pub month: i64,
    /// 0-based day within the year
    pub day: i64,
    pub leap_year: bool,
}

/// Split a day count since 0001-01-01 into year, month and day of year
pub fn decompose_days(days: i64) -> DayParts {
    let mut n = days;
    let y400 = n / DAYS_PER_400_YEARS;
    n -= y400 * DAYS_PER_400_YEARS;
    let y100 = (n / DAYS_PER_100_YEARS).min(3);
    n -= y100 * DAYS_PER_100_YEARS;
    let y4 = n / DAYS_PER_4_YEARS;
    n -= y4 * DAYS_PER_4_YEARS;
    let y1 = (n / DAYS_PER_YEAR).min(3);
    n -= y1 * DAYS_PER_YEAR;

    let year = y400 * 400 + y100 * 100 + y4 * 4 + y1 + 1;
    let leap_year = y1 == 3 && (y4 != 24 || y100 == 3);
    let table = if leap_year {
        &DAYS_TO_MONTH_366
    } else {
        &DAYS_TO_MONTH_365
    };

    let mut month = (n >> 6) as usize;
    while month < table.len() && n >= table[month] {
        month += 1;
    }

    DayParts {
        year,
        month: month as i64,
        day: n,
        leap_year,
    }
}

/// Encode a tick count as approximate seconds since 2010.
///
/// `(year - 2010) * 31_536_000 + month * 2_592_000 + (day + 1) * 86_400
/// + hour * 3600 + minute * 60 + second`, truncated to 32 bits. `day` is the
/// 0-based day of the year, not of the month.
pub fn encode_seconds(ticks: i64) -> u32 {
    let parts = decompose_days(ticks / TICKS_PER_DAY);
    let hour = (ticks / TICKS_PER_HOUR) % 24;
    let minute = (ticks / TICKS_PER_MINUTE) % 60;
    let second = (ticks / TICKS_PER_SECOND) % 60;

    let seconds = (parts.year - EPOCH_YEAR) * SECONDS_PER_YEAR
        + parts.month * SECONDS_PER_MONTH
        + (parts.day + 1) * SECONDS_PER_DAY
        + hour * 3600
        + minute * 60
        + second;
    seconds as u32
}

/// Local wall-clock time as a tick count
pub fn local_now_ticks() -> i64 {
    let now = chrono::Local::now().naive_local().and_utc();
    UNIX_EPOCH_TICKS
        + now.timestamp() * TICKS_PER_SECOND
        + i64::from(now.timestamp_subsec_nanos() / 100)
}

/// Fold a tick count into a 32-bit seed (low word XOR high word)
pub fn fold_ticks(ticks: i64) -> i32 {
    (ticks as i32) ^ ((ticks >> 32) as i32)
}

/// Wall-clock baseline read once, advanced by a monotonic clock
#[derive(Debug, Clone, Copy)]
pub struct SystemTicks {
    startup_ticks: i64,
    started: Instant,
}

impl SystemTicks {
    pub fn start() -> Self {
        Self {
            startup_ticks: local_now_ticks(),
            started: Instant::now(),
        }
    }

    pub fn startup_ticks(&self) -> i64 {
        self.startup_ticks
    }
}

impl TickSource for SystemTicks {
    fn now_ticks(&self) -> i64 {
        let elapsed = (self.started.elapsed().as_nanos() / 100) as i64;
        self.startup_ticks + elapsed
    }
}

/// Clock frozen at a single tick count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTicks(pub i64);

impl TickSource for FixedTicks {
    fn now_ticks(&self) -> i64 {
        self.0
    }
}
