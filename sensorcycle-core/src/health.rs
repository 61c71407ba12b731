//! Per-channel communication health
//!
//! Counts read failures without ever acting on them. A channel that fails
//! every read keeps publishing its last good value with a steadily growing
//! error count; deciding when that data is too stale to trust belongs to the
//! consumer.
//!
//! Two counters per channel:
//! - **total**: 64-bit, saturating, never reset for the lifetime of the task
//! - **consecutive**: failures since the last successful read

use core::fmt;

use crate::channel::ChannelId;

/// Accumulates failure counts for every channel
#[derive(Debug, Clone, Default)]
pub struct HealthTracker {
    counts: HealthSnapshot,
}

impl HealthTracker {
    /// Tracker with all counters at zero
    pub const fn new() -> Self {
        Self { counts: HealthSnapshot::EMPTY }
    }

    /// Count one failed read on `channel`
    ///
    /// Returns the new total for the channel.
    pub fn record_failure(&mut self, channel: ChannelId) -> u64 {
        let i = channel.index();
        self.counts.total[i] = self.counts.total[i].saturating_add(1);
        self.counts.consecutive[i] = self.counts.consecutive[i].saturating_add(1);
        self.counts.total[i]
    }

    /// Note a successful read; clears the consecutive count only
    pub fn record_success(&mut self, channel: ChannelId) {
        self.counts.consecutive[channel.index()] = 0;
    }

    /// Total failures of `channel`
    pub fn errors(&self, channel: ChannelId) -> u64 {
        self.counts.errors(channel)
    }

    /// Failures of `channel` since its last good read
    pub fn consecutive(&self, channel: ChannelId) -> u32 {
        self.counts.consecutive(channel)
    }

    /// Copy of the current counts
    pub fn snapshot(&self) -> HealthSnapshot {
        self.counts
    }
}

/// Point-in-time copy of the health counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthSnapshot {
    total: [u64; ChannelId::COUNT],
    consecutive: [u32; ChannelId::COUNT],
}

impl HealthSnapshot {
    const EMPTY: HealthSnapshot = HealthSnapshot {
        total: [0; ChannelId::COUNT],
        consecutive: [0; ChannelId::COUNT],
    };

    /// Total failures of `channel`
    pub fn errors(&self, channel: ChannelId) -> u64 {
        self.total[channel.index()]
    }

    /// Failures of `channel` since its last good read
    pub fn consecutive(&self, channel: ChannelId) -> u32 {
        self.consecutive[channel.index()]
    }

    /// Sum over all channels
    pub fn total(&self) -> u64 {
        self.total.iter().fold(0u64, |acc, n| acc.saturating_add(*n))
    }

    /// Channels with at least one failure, with their totals
    pub fn failing(&self) -> impl Iterator<Item = (ChannelId, u64)> + '_ {
        ChannelId::ALL
            .iter()
            .map(move |c| (*c, self.errors(*c)))
            .filter(|(_, n)| *n > 0)
    }
}

impl fmt::Display for HealthSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut any = false;
        for (channel, errors) in self.failing() {
            if any {
                f.write_str(", ")?;
            }
            write!(f, "{}: {} comms errors ({} consecutive)", channel, errors, self.consecutive(channel))?;
            any = true;
        }
        if !any {
            f.write_str("no comms errors")?;
        }
        Ok(())
    }
}
