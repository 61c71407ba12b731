//! Time management for acquisition cycles
//!
//! Provides the clock abstraction the cycle timestamps samples with:
//! - Monotonic host clock (when `std` is available)
//! - Manually driven clock (for deterministic tests and simulation)
//! - A guard that turns any source into a non-decreasing one
//!
//! Every sample of one tick carries the same timestamp, taken once before the
//! first read. Consumers rely on timestamps never going backwards.

use core::cell::Cell;

/// Timestamp in microseconds since device boot
pub type Timestamp = u64;

/// Source of time for the system
///
/// Implementations read a hardware timer, an RTOS tick or the host clock.
/// A source used by a cycle must be monotonic: `now()` never returns a
/// smaller value than a previous call.
pub trait TimeSource {
    /// Current time in microseconds
    fn now(&self) -> Timestamp;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// Monotonic host clock, counting from construction
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct MonotonicTime {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl MonotonicTime {
    /// Clock starting at 0 now
    pub fn new() -> Self {
        Self { origin: std::time::Instant::now() }
    }
}

#[cfg(feature = "std")]
impl Default for MonotonicTime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl TimeSource for MonotonicTime {
    fn now(&self) -> Timestamp {
        self.origin.elapsed().as_micros() as Timestamp
    }
}

/// Fixed time source for testing
///
/// Interior mutability lets a test advance the clock while the cycle owns it.
#[derive(Debug, Clone, Default)]
pub struct FixedTime {
    timestamp: Cell<Timestamp>,
}

impl FixedTime {
    /// Clock frozen at `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp: Cell::new(timestamp) }
    }

    /// Jump to `timestamp`, backwards included
    pub fn set(&self, timestamp: Timestamp) {
        self.timestamp.set(timestamp);
    }

    /// Move forward by `us` microseconds
    pub fn advance(&self, us: u64) {
        self.timestamp.set(self.timestamp.get().saturating_add(us));
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp.get()
    }
}

/// Clamps a time source to non-decreasing output
///
/// A source that steps backwards (counter reload, clock adjustment) repeats
/// the last value it reported instead.
#[derive(Debug)]
pub struct MonotonicGuard<T> {
    source: T,
    last_known: Timestamp,
}

impl<T: TimeSource> MonotonicGuard<T> {
    /// Wrap `source`
    pub fn new(source: T) -> Self {
        Self { source, last_known: 0 }
    }

    /// Get current time, never earlier than the previous call
    pub fn now(&mut self) -> Timestamp {
        let current = self.source.now();

        // Detect time going backwards
        if current < self.last_known {
            return self.last_known;
        }

        self.last_known = current;
        current
    }

    /// Most recent timestamp handed out
    pub fn last(&self) -> Timestamp {
        self.last_known
    }

    /// Calculate time delta between two timestamps
    pub fn delta_us(&self, earlier: Timestamp, later: Timestamp) -> u64 {
        later.saturating_sub(earlier)
    }

    /// Wrapped time source
    pub fn source(&self) -> &T {
        &self.source
    }
}
