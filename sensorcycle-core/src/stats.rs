//! Cycle timing statistics
//!
//! Records how long each acquisition tick took against the scheduling period.
//! A tick that runs longer than its period is an overrun: the scheduler's
//! next slot was already due when the tick finished.

use core::fmt;

/// Elapsed-time accounting for one cycle instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CycleStats {
    /// Ticks that reached the acquisition step
    pub cycles: u64,

    /// Duration of the most recent tick (µs)
    pub last_elapsed_us: u64,

    /// Longest tick observed (µs)
    pub max_elapsed_us: u64,

    /// Sum of all tick durations (µs)
    pub total_elapsed_us: u64,

    /// Ticks that exceeded their period
    pub overruns: u64,
}

impl CycleStats {
    /// Statistics with no ticks recorded
    pub const fn new() -> Self {
        Self {
            cycles: 0,
            last_elapsed_us: 0,
            max_elapsed_us: 0,
            total_elapsed_us: 0,
            overruns: 0,
        }
    }

    /// Record one completed tick
    ///
    /// Returns `true` if the tick overran `period_us`.
    pub fn record(&mut self, elapsed_us: u64, period_us: u64) -> bool {
        self.cycles = self.cycles.saturating_add(1);
        self.last_elapsed_us = elapsed_us;
        self.max_elapsed_us = self.max_elapsed_us.max(elapsed_us);
        self.total_elapsed_us = self.total_elapsed_us.saturating_add(elapsed_us);

        let overran = period_us > 0 && elapsed_us > period_us;
        if overran {
            self.overruns = self.overruns.saturating_add(1);
        }
        overran
    }

    /// Mean tick duration (µs), 0 before the first tick
    pub fn mean_elapsed_us(&self) -> u64 {
        if self.cycles == 0 {
            return 0;
        }
        self.total_elapsed_us / self.cycles
    }
}

impl fmt::Display for CycleStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ticks, {}us avg, {}us max, {} overruns",
            self.cycles,
            self.mean_elapsed_us(),
            self.max_elapsed_us,
            self.overruns
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_mean_and_max() {
        let mut stats = CycleStats::new();
        assert_eq!(stats.mean_elapsed_us(), 0);

        stats.record(100, 40_000);
        stats.record(300, 40_000);

        assert_eq!(stats.cycles, 2);
        assert_eq!(stats.mean_elapsed_us(), 200);
        assert_eq!(stats.max_elapsed_us, 300);
        assert_eq!(stats.last_elapsed_us, 300);
        assert_eq!(stats.overruns, 0);
    }

    #[test]
    fn overrun_detected() {
        let mut stats = CycleStats::new();
        assert!(!stats.record(5_000, 5_000));
        assert!(stats.record(5_001, 5_000));
        assert_eq!(stats.overruns, 1);
    }

    #[cfg(feature = "std")]
    #[test]
    fn display_counts_ticks() {
        let mut stats = CycleStats::new();
        stats.record(100, 5_000);
        stats.record(7_000, 5_000);
        assert_eq!(stats.to_string(), "2 ticks, 3550us avg, 7000us max, 1 overruns");
    }
}
