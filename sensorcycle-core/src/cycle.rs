//! Periodic acquisition state machine
//!
//! One [`AcquisitionCycle`] drives one physical sensor. The scheduler calls
//! [`run`](AcquisitionCycle::run) once per period; each call is a complete
//! tick that never re-enters and never blocks beyond the HAL reads.
//!
//! ## Tick Sequence
//!
//! 1. **Stop check**: a stop request powers the sensor down (once) and ends
//!    the task. Nothing else runs on that tick or any later one.
//! 2. **Lazy init**: until the sensor has initialized, every tick tries again.
//!    A failed attempt logs and returns without reading or publishing.
//! 3. **Timestamp**: one reading of the clock, shared by every channel.
//! 4. **Read**: exactly one attempt per owned channel. A failure is counted
//!    and logged; the channel keeps its previous raw value.
//! 5. **Convert & publish**: every channel is published, failed ones from
//!    their retained data with `stale` set.
//!
//! ## State Transitions
//!
//! ```text
//!   Uninitialized ──init ok──► Initialized
//!        │   ▲                      │
//!  init err  └─init err─┐           │
//!        ▼              │           │
//!      Failed ──init ok─┼──────────►│
//!        │              │           │
//!        └──────── stop ┴─── stop ──┴──► ShuttingDown (terminal)
//! ```
//!
//! `Failed` behaves exactly like `Uninitialized`: it only records that the
//! last attempt went wrong.

use core::fmt;

use fugit::MicrosDurationU64;
use heapless::Vec;

use crate::{
    channel::{ChannelId, PhysicalSample, RawSample},
    constants::time::interval_us,
    convert::{ChannelScale, SensorConfig},
    errors::{ConfigError, InitError, ReadError},
    health::{HealthSnapshot, HealthTracker},
    lifecycle::StopSignal,
    publish::Publisher,
    stats::CycleStats,
    time::{MonotonicGuard, TimeSource, Timestamp},
    MAX_CHANNELS,
};

/// Register-level access to one physical sensor
///
/// Provided by the platform HAL. Reads are blocking but bounded by the HAL's
/// own bus timeouts.
pub trait RawSensor {
    /// Range configuration the sensor is initialized with
    type Config: SensorConfig;

    /// Verify the chip identity and apply `config`
    fn init(&mut self, config: &Self::Config) -> Result<(), InitError>;

    /// Read the latest raw sample of one channel
    fn read_channel(&mut self, channel: ChannelId) -> Result<RawSample, ReadError>;

    /// Put the chip in its lowest-power state. Must tolerate repeated calls.
    fn power_down(&mut self);
}

impl<S: RawSensor + ?Sized> RawSensor for &mut S {
    type Config = S::Config;

    fn init(&mut self, config: &Self::Config) -> Result<(), InitError> {
        (**self).init(config)
    }

    fn read_channel(&mut self, channel: ChannelId) -> Result<RawSample, ReadError> {
        (**self).read_channel(channel)
    }

    fn power_down(&mut self) {
        (**self).power_down()
    }
}

/// Lifecycle state of a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CycleState {
    /// Hardware not yet initialized
    #[default]
    Uninitialized,
    /// Hardware ready; every tick reads and publishes
    Initialized,
    /// Last init attempt failed; retried next tick
    Failed,
    /// Powered down after a stop request; terminal
    ShuttingDown,
}

impl CycleState {
    /// Whether the next tick will attempt init
    pub const fn awaiting_init(self) -> bool {
        matches!(self, CycleState::Uninitialized | CycleState::Failed)
    }
}

impl fmt::Display for CycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CycleState::Uninitialized => "waiting for init",
            CycleState::Initialized => "running",
            CycleState::Failed => "init failed, retrying",
            CycleState::ShuttingDown => "stopped",
        })
    }
}

/// What one call to [`AcquisitionCycle::run`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// The task is stopped; the scheduler should drop it
    Stopped,
    /// Init failed; nothing was read or published
    InitFailed(InitError),
    /// Every channel was published
    Published {
        /// Timestamp shared by all samples of the tick
        timestamp: Timestamp,
        /// Channels whose read failed and were published stale
        failed_reads: u8,
    },
}

#[derive(Debug, Clone, Copy)]
struct ChannelSlot {
    id: ChannelId,
    scale: ChannelScale,
    last: RawSample,
    stale: bool,
    has_data: bool,
}

/// Generic periodic acquisition task
///
/// - `S`: raw sensor access
/// - `C`: clock
/// - `P`: sample sink
/// - `L`: stop signal from the supervisor
pub struct AcquisitionCycle<S: RawSensor, C, P, L> {
    name: &'static str,
    sensor: S,
    config: S::Config,
    clock: MonotonicGuard<C>,
    publisher: P,
    stop: L,
    state: CycleState,
    slots: Vec<ChannelSlot, MAX_CHANNELS>,
    health: HealthTracker,
    stats: CycleStats,
    interval: MicrosDurationU64,
    init_attempts: u32,
    last_init_error: Option<InitError>,
}

impl<S, C, P, L> AcquisitionCycle<S, C, P, L>
where
    S: RawSensor,
    C: TimeSource,
    P: Publisher,
    L: StopSignal,
{
    /// Build a cycle in the `Uninitialized` state
    ///
    /// Resolves the conversion of every channel up front. Any configuration
    /// the converter cannot map is returned here, before the task is
    /// scheduled; the hardware is not touched.
    pub fn new(
        name: &'static str,
        sensor: S,
        config: S::Config,
        clock: C,
        publisher: P,
        stop: L,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let channels = config.channels();
        if channels.is_empty() {
            return Err(ConfigError::NoChannels);
        }

        let mut slots: Vec<ChannelSlot, MAX_CHANNELS> = Vec::new();
        for &id in channels {
            if slots.iter().any(|s| s.id == id) {
                return Err(ConfigError::DuplicateChannel(id));
            }
            let scale = config.channel_scale(id)?;
            slots
                .push(ChannelSlot {
                    id,
                    scale,
                    last: RawSample::zero_for(id),
                    stale: true,
                    has_data: false,
                })
                // Unreachable while MAX_CHANNELS covers every distinct ChannelId
                .map_err(|_| ConfigError::TooManyChannels)?;
        }

        let interval = MicrosDurationU64::micros(interval_us(config.rate().to_Hz()));

        Ok(Self {
            name,
            sensor,
            config,
            clock: MonotonicGuard::new(clock),
            publisher,
            stop,
            state: CycleState::Uninitialized,
            slots,
            health: HealthTracker::new(),
            stats: CycleStats::new(),
            interval,
            init_attempts: 0,
            last_init_error: None,
        })
    }

    /// Execute one scheduler tick
    pub fn run(&mut self) -> TickOutcome {
        if self.state == CycleState::ShuttingDown {
            return TickOutcome::Stopped;
        }

        if self.stop.should_stop() {
            self.sensor.power_down();
            self.state = CycleState::ShuttingDown;
            log_info!("{}: stopped", self.name);
            return TickOutcome::Stopped;
        }

        if self.state.awaiting_init() {
            if let Err(err) = self.try_init() {
                return TickOutcome::InitFailed(err);
            }
        }

        let timestamp = self.clock.now();
        let failed_reads = self.read_all();
        self.publish_all(timestamp);

        let finished = self.clock.now();
        let elapsed = self.clock.delta_us(timestamp, finished);
        if self.stats.record(elapsed, self.interval.ticks()) {
            log_warn!(
                "{}: tick took {}us, period {}us",
                self.name,
                elapsed,
                self.interval.ticks()
            );
        }

        TickOutcome::Published { timestamp, failed_reads }
    }

    fn try_init(&mut self) -> Result<(), InitError> {
        self.init_attempts = self.init_attempts.saturating_add(1);

        match self.sensor.init(&self.config) {
            Ok(()) => {
                self.state = CycleState::Initialized;
                self.last_init_error = None;
                log_info!("{}: initialized after {} attempt(s)", self.name, self.init_attempts);
                Ok(())
            }
            Err(err) => {
                self.state = CycleState::Failed;
                self.last_init_error = Some(err);
                log_error!("{}: init failed: {}", self.name, err);
                Err(err)
            }
        }
    }

    fn read_all(&mut self) -> u8 {
        let mut failed = 0u8;

        for slot in self.slots.iter_mut() {
            let result = match self.sensor.read_channel(slot.id) {
                Ok(raw) if !raw.matches(slot.id) => Err(ReadError::ShapeMismatch { channel: slot.id }),
                other => other,
            };

            match result {
                Ok(raw) => {
                    slot.last = raw;
                    slot.stale = false;
                    slot.has_data = true;
                    let missed = self.health.consecutive(slot.id);
                    if missed > 0 {
                        log_debug!("{}: {} recovered after {} failed reads", self.name, slot.id, missed);
                    }
                    self.health.record_success(slot.id);
                }
                Err(err) => {
                    slot.stale = true;
                    failed = failed.saturating_add(1);
                    let total = self.health.record_failure(slot.id);
                    log_error!("{}: {} read failed ({} total): {}", self.name, slot.id, total, err);
                }
            }
        }

        failed
    }

    fn publish_all(&mut self, timestamp: Timestamp) {
        let temperature = self
            .slots
            .iter()
            .find(|s| s.id == ChannelId::Temperature && s.has_data)
            .and_then(|s| s.scale.convert(s.last).as_scalar());

        for slot in self.slots.iter() {
            let sample = PhysicalSample {
                timestamp,
                value: slot.scale.convert(slot.last),
                unit: slot.scale.unit,
                error_count: self.health.errors(slot.id),
                temperature,
                range: slot.scale.range,
                stale: slot.stale,
            };
            self.publisher.publish(slot.id, sample);
        }
    }

    /// Read-only status snapshot
    pub fn status(&self) -> CycleStatus {
        CycleStatus {
            name: self.name,
            state: self.state,
            stats: self.stats,
            health: self.health.snapshot(),
            init_attempts: self.init_attempts,
            last_init_error: self.last_init_error,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> CycleState {
        self.state
    }

    /// Task name given at construction
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Range configuration the sensor was initialized with
    pub fn config(&self) -> &S::Config {
        &self.config
    }

    /// Scheduling period derived from the configured rate
    pub fn interval(&self) -> MicrosDurationU64 {
        self.interval
    }

    /// Channels owned by this cycle, in read order
    pub fn channels(&self) -> impl Iterator<Item = ChannelId> + '_ {
        self.slots.iter().map(|s| s.id)
    }

    /// Copy of the per-channel error counters
    pub fn health(&self) -> HealthSnapshot {
        self.health.snapshot()
    }

    /// Tick timing statistics
    pub fn stats(&self) -> &CycleStats {
        &self.stats
    }

    /// Raw sensor owned by the cycle
    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    /// Direct access to the sensor, e.g. for HAL diagnostics between ticks
    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }

    /// Underlying time source
    pub fn clock(&self) -> &C {
        self.clock.source()
    }

    /// Sample sink
    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    /// Mutable access to the sample sink
    pub fn publisher_mut(&mut self) -> &mut P {
        &mut self.publisher
    }
}

/// Status surface of one cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleStatus {
    /// Task name given at construction
    pub name: &'static str,
    /// Current lifecycle state
    pub state: CycleState,
    /// Tick timing
    pub stats: CycleStats,
    /// Per-channel error counts
    pub health: HealthSnapshot,
    /// Init attempts so far, successful one included
    pub init_attempts: u32,
    /// Error of the most recent failed init, cleared on success
    pub last_init_error: Option<InitError>,
}

impl fmt::Display for CycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.state)?;
        if let Some(err) = self.last_init_error {
            write!(f, " ({} after {} attempts)", err, self.init_attempts)?;
        }
        write!(f, "\n  {}\n  {}", self.stats, self.health)
    }
}
