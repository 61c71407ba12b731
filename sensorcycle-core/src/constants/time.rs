//! Time-Related Constants
//!
//! Rates and intervals for the acquisition cycles.

// ===== TIME UNIT CONVERSIONS =====

/// Microseconds per second.
pub const US_PER_SECOND: u64 = 1_000_000;

/// Microseconds per millisecond.
pub const US_PER_MS: u64 = 1000;

// ===== CYCLE RATES =====

/// Barometer cycle rate (Hz).
///
/// With 16x pressure oversampling one conversion takes ~37.5 ms, so 25 Hz
/// (40 ms period) is the fastest rate that always reads fresh data.
///
/// Source: BMP280 datasheet, measurement time table
pub const BARO_RATE_HZ: u32 = 25;

/// Default inertial cycle rate (Hz).
///
/// Configurable per deployment; must stay a multiple faster than the
/// barometer so attitude estimation gets fresh rates.
pub const INERTIAL_RATE_HZ: u32 = 200;

/// Interval in microseconds for a rate in Hz.
///
/// Returns 0 for a zero rate; callers validate rates before scheduling.
pub const fn interval_us(rate_hz: u32) -> u64 {
    if rate_hz == 0 {
        return 0;
    }
    US_PER_SECOND / rate_hz as u64
}
