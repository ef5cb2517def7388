use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Sub, SubAssign},
    time::SystemTime,
};

use tuio_serde::OscTime;

use super::error::TimeError;

pub const MICROS_PER_SECOND: i64 = 1_000_000;

/// Seconds between the NTP epoch (1900-01-01) used by OSC time tags and the
/// Unix epoch (1970-01-01)
pub const NTP_UNIX_OFFSET_SECONDS: i64 = 2_208_988_800;

/// Fixed-point time: whole seconds plus microseconds
///
/// `microseconds` is always in `0..1_000_000`; negative times carry their
/// sign in `seconds` (e.g. -0.5s is `{ seconds: -1, microseconds: 500_000 }`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TimeValue {
    seconds: i64,
    microseconds: i32,
}

impl TimeValue {
    pub const ZERO: TimeValue = TimeValue {
        seconds: 0,
        microseconds: 0,
    };

    /// Builds a normalized time; `microseconds` may be negative or exceed one
    /// second and is carried into `seconds`
    pub fn new(seconds: i64, microseconds: i64) -> Self {
        let seconds = seconds + microseconds.div_euclid(MICROS_PER_SECOND);
        let microseconds = microseconds.rem_euclid(MICROS_PER_SECOND) as i32;
        Self {
            seconds,
            microseconds,
        }
    }

    pub fn from_millis(millis: i64) -> Self {
        Self::new(0, millis * 1000)
    }

    pub fn from_micros(micros: i64) -> Self {
        Self::new(0, micros)
    }

    /// Wall-clock time since the Unix epoch
    ///
    /// # Errors
    /// Returns `TimeError::SystemTimeBeforeEpoch` if the system clock is set
    /// before 1970.
    pub fn try_now() -> Result<Self, TimeError> {
        SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|since| Self::new(since.as_secs() as i64, i64::from(since.subsec_micros())))
            .map_err(|_| TimeError::SystemTimeBeforeEpoch)
    }

    /// Converts an OSC time tag (NTP epoch, 32-bit binary fraction) to Unix time
    pub fn from_osc_time(time: OscTime) -> Self {
        let micros = (u64::from(time.fraction) * MICROS_PER_SECOND as u64) >> 32;
        Self::new(
            i64::from(time.seconds) - NTP_UNIX_OFFSET_SECONDS,
            micros as i64,
        )
    }

    /// Converts to an OSC time tag. Times outside the 32-bit NTP era saturate.
    pub fn to_osc_time(&self) -> OscTime {
        let seconds = (self.seconds + NTP_UNIX_OFFSET_SECONDS).clamp(0, i64::from(u32::MAX));
        // rounded up so that from_osc_time(to_osc_time(t)) == t
        let fraction = ((self.microseconds as u64) << 32).div_ceil(MICROS_PER_SECOND as u64);
        OscTime::new(seconds as u32, fraction as u32)
    }

    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    pub fn microseconds(&self) -> i32 {
        self.microseconds
    }

    pub fn add_micros(self, micros: i64) -> Self {
        Self::new(self.seconds, i64::from(self.microseconds) + micros)
    }

    pub fn sub_micros(self, micros: i64) -> Self {
        Self::new(self.seconds, i64::from(self.microseconds) - micros)
    }

    pub fn add_millis(self, millis: i64) -> Self {
        self.add_micros(millis * 1000)
    }

    pub fn sub_millis(self, millis: i64) -> Self {
        self.sub_micros(millis * 1000)
    }

    pub fn total_micros(&self) -> i64 {
        self.seconds * MICROS_PER_SECOND + i64::from(self.microseconds)
    }

    pub fn total_milliseconds(&self) -> f64 {
        self.seconds as f64 * 1000.0 + f64::from(self.microseconds) / 1000.0
    }

    pub fn total_seconds(&self) -> f64 {
        self.seconds as f64 + f64::from(self.microseconds) / MICROS_PER_SECOND as f64
    }

    /// Elapsed time from `earlier` to `self`, in seconds (negative if `earlier`
    /// is actually later)
    pub fn seconds_since(&self, earlier: &TimeValue) -> f32 {
        (*self - *earlier).total_seconds() as f32
    }
}

impl Add for TimeValue {
    type Output = TimeValue;

    fn add(self, other: TimeValue) -> TimeValue {
        Self::new(
            self.seconds + other.seconds,
            i64::from(self.microseconds) + i64::from(other.microseconds),
        )
    }
}

impl Sub for TimeValue {
    type Output = TimeValue;

    fn sub(self, other: TimeValue) -> TimeValue {
        Self::new(
            self.seconds - other.seconds,
            i64::from(self.microseconds) - i64::from(other.microseconds),
        )
    }
}

impl AddAssign for TimeValue {
    fn add_assign(&mut self, other: TimeValue) {
        *self = *self + other;
    }
}

impl SubAssign for TimeValue {
    fn sub_assign(&mut self, other: TimeValue) {
        *self = *self - other;
    }
}

impl PartialOrd for TimeValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.seconds
            .cmp(&other.seconds)
            .then(self.microseconds.cmp(&other.microseconds))
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:06}", self.seconds, self.microseconds)
    }
}
