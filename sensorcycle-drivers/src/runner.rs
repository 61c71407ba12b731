//! Fixed-rate host runner
//!
//! Stands in for the platform work queue on hosts with threads. Each cycle
//! gets a named thread that calls `run()` once per period until the cycle
//! reports [`TickOutcome::Stopped`].
//!
//! Scheduling is deadline based: the next slot is one period after the
//! previous one, not after the tick finished. A tick that overruns its slot
//! is followed immediately by the next one and the schedule restarts from
//! there; missed slots are not made up.
//!
//! The cycle sits behind a mutex that is held only for the duration of a
//! tick, so status can be read between ticks through [`TaskHandle::with`].

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use sensorcycle_core::{
    lifecycle::StopSignal,
    log_error, log_info,
    publish::Publisher,
    time::{MonotonicTime, TimeSource},
    AcquisitionCycle, ConfigError, CycleStatus, RawSensor, Supervisor, TickOutcome,
};
use thiserror_no_std::Error;

/// Task could not be started
#[derive(Error, Debug)]
pub enum SpawnError {
    /// The cycle rejected its configuration
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The OS refused to create the task thread
    #[error("failed to start task thread: {0}")]
    Thread(#[from] std::io::Error),
}

/// Handle to a cycle running on its own thread
pub struct TaskHandle<S: RawSensor, C, P, L> {
    cycle: Arc<Mutex<AcquisitionCycle<S, C, P, L>>>,
    thread: JoinHandle<()>,
}

/// Task handle as returned by the driver spawn functions
pub type HostTask<S, P> = TaskHandle<S, MonotonicTime, P, Arc<Supervisor>>;

impl<S, C, P, L> TaskHandle<S, C, P, L>
where
    S: RawSensor,
    C: TimeSource,
    P: Publisher,
    L: StopSignal,
{
    fn lock(&self) -> MutexGuard<'_, AcquisitionCycle<S, C, P, L>> {
        self.cycle.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` against the cycle between two ticks
    pub fn with<R>(&self, f: impl FnOnce(&mut AcquisitionCycle<S, C, P, L>) -> R) -> R {
        f(&mut self.lock())
    }

    /// Status snapshot taken between ticks
    pub fn status(&self) -> CycleStatus {
        self.lock().status()
    }

    /// Whether the task thread is still scheduling ticks
    pub fn is_running(&self) -> bool {
        !self.thread.is_finished()
    }

    /// Wait for the task to stop and return its final status
    ///
    /// The caller must have requested a stop on the supervisor, otherwise
    /// this waits forever.
    pub fn join(self) -> CycleStatus {
        if self.thread.join().is_err() {
            log_error!("task thread panicked");
        }
        self.cycle.lock().unwrap_or_else(PoisonError::into_inner).status()
    }
}

/// Run `cycle` on a dedicated thread at its configured interval
pub fn spawn_periodic<S, C, P, L>(
    cycle: AcquisitionCycle<S, C, P, L>,
) -> Result<TaskHandle<S, C, P, L>, SpawnError>
where
    S: RawSensor + Send + 'static,
    S::Config: Send + 'static,
    C: TimeSource + Send + 'static,
    P: Publisher + Send + 'static,
    L: StopSignal + Send + 'static,
{
    let name = cycle.name();
    let period = Duration::from_micros(cycle.interval().ticks());
    let cycle = Arc::new(Mutex::new(cycle));
    let shared = Arc::clone(&cycle);

    let thread = thread::Builder::new()
        .name(format!("sensorcycle-{name}"))
        .spawn(move || run_fixed_rate(&shared, period))?;

    log_info!("{}: scheduled every {}us", name, period.as_micros());
    Ok(TaskHandle { cycle, thread })
}

fn run_fixed_rate<S, C, P, L>(cycle: &Mutex<AcquisitionCycle<S, C, P, L>>, period: Duration)
where
    S: RawSensor,
    C: TimeSource,
    P: Publisher,
    L: StopSignal,
{
    let mut next = Instant::now();
    loop {
        let outcome = cycle.lock().unwrap_or_else(PoisonError::into_inner).run();
        if outcome == TickOutcome::Stopped {
            return;
        }

        next += period;
        let now = Instant::now();
        match next.checked_duration_since(now) {
            Some(wait) => thread::sleep(wait),
            None => next = now,
        }
    }
}
