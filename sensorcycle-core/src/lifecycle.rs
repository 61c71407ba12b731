//! Task lifecycle signalling
//!
//! The external supervisor that starts and stops acquisition tasks is an
//! explicit object handed to each cycle at construction, not process-wide
//! state. Every test can build its own [`Supervisor`] and stop its own
//! cycles without touching anything global.
//!
//! Cancellation is cooperative. A cycle polls its [`StopSignal`] at the top
//! of every tick; a tick already in progress always runs to completion.

use core::sync::atomic::{AtomicBool, Ordering};

/// "Should stop" flag queried at the start of each tick
pub trait StopSignal {
    /// Whether the task must power down and stop
    fn should_stop(&self) -> bool;
}

impl StopSignal for AtomicBool {
    fn should_stop(&self) -> bool {
        self.load(Ordering::Acquire)
    }
}

impl<T: StopSignal + ?Sized> StopSignal for &T {
    fn should_stop(&self) -> bool {
        (**self).should_stop()
    }
}

#[cfg(feature = "std")]
impl<T: StopSignal + ?Sized> StopSignal for std::sync::Arc<T> {
    fn should_stop(&self) -> bool {
        (**self).should_stop()
    }
}

/// Owner of the stop request for the tasks it supervises
///
/// ```rust
/// use sensorcycle_core::{Supervisor, StopSignal};
///
/// let supervisor = Supervisor::new();
/// let token = supervisor.stop_token();
/// assert!(!token.should_stop());
///
/// assert!(supervisor.request_stop());
/// assert!(!supervisor.request_stop()); // already requested
/// assert!(token.should_stop());
/// ```
#[derive(Debug, Default)]
pub struct Supervisor {
    stop: AtomicBool,
}

impl Supervisor {
    /// Supervisor with no stop requested
    pub const fn new() -> Self {
        Self { stop: AtomicBool::new(false) }
    }

    /// Ask every supervised task to stop at its next tick
    ///
    /// Returns `true` for the call that actually set the flag.
    pub fn request_stop(&self) -> bool {
        !self.stop.swap(true, Ordering::AcqRel)
    }

    /// Whether a stop has been requested
    pub fn is_stop_requested(&self) -> bool {
        self.stop.load(Ordering::Acquire)
    }

    /// Borrowed handle for a cycle to poll
    pub fn stop_token(&self) -> StopToken<'_> {
        StopToken { flag: &self.stop }
    }
}

impl StopSignal for Supervisor {
    fn should_stop(&self) -> bool {
        self.is_stop_requested()
    }
}

/// Read-only view of a supervisor's stop flag
#[derive(Debug, Clone, Copy)]
pub struct StopToken<'a> {
    flag: &'a AtomicBool,
}

impl StopSignal for StopToken<'_> {
    fn should_stop(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}
