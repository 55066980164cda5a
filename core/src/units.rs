//! Unit value objects produced by measurements.

use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const GIB: u64 = MIB * 1024;

/// An exact byte count, e.g. the on-disk footprint of a table's indexes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Memory(u64);

impl Memory {
    pub const ZERO: Memory = Memory(0);

    pub const fn new(bytes: u64) -> Self { Self(bytes) }

    pub const fn bytes(&self) -> u64 { self.0 }

    pub fn kibibytes(&self) -> f64 { self.0 as f64 / KIB as f64 }

    pub fn mebibytes(&self) -> f64 { self.0 as f64 / MIB as f64 }
}

impl From<u64> for Memory {
    fn from(bytes: u64) -> Self { Self(bytes) }
}

impl fmt::Display for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.0;
        match bytes {
            b if b >= GIB => write!(f, "{:.2} GiB", b as f64 / GIB as f64),
            b if b >= MIB => write!(f, "{:.2} MiB", b as f64 / MIB as f64),
            b if b >= KIB => write!(f, "{:.2} KiB", b as f64 / KIB as f64),
            b => write!(f, "{} B", b),
        }
    }
}

/// A span of time with microsecond resolution.
///
/// Engines usually report timings as fractional milliseconds; those are scaled to
/// microseconds and truncated toward zero, so `1.9999` ms becomes `1999` µs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimePeriod(u64);

impl TimePeriod {
    pub const ZERO: TimePeriod = TimePeriod(0);

    pub const fn from_microseconds(microseconds: u64) -> Self { Self(microseconds) }

    /// Negative and NaN inputs clamp to zero, values past `u64::MAX` saturate.
    pub fn from_milliseconds(milliseconds: f64) -> Self {
        // `as` truncates toward zero and saturates at the integer bounds
        Self((milliseconds * 1000.0) as u64)
    }

    pub const fn microseconds(&self) -> u64 { self.0 }

    pub fn milliseconds(&self) -> f64 { self.0 as f64 / 1000.0 }

    pub fn as_duration(&self) -> Duration { Duration::from_micros(self.0) }
}

impl From<Duration> for TimePeriod {
    fn from(duration: Duration) -> Self { Self(u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)) }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            us if us >= 1_000_000 => write!(f, "{:.3} s", us as f64 / 1_000_000.0),
            us if us >= 1_000 => write!(f, "{:.3} ms", us as f64 / 1_000.0),
            us => write!(f, "{} µs", us),
        }
    }
}
