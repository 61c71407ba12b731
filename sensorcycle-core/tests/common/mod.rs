//! Common test utilities for acquisition cycle integration tests
//!
//! This module provides:
//! - A scripted sensor whose init and read results are set per test
//! - A recording publisher that keeps every delivered sample
//! - Two ready-made configurations shaped like the real barometer and IMU

#![allow(dead_code)]

use fugit::HertzU32;

use sensorcycle_core::{
    AccelRange, ChannelId, ChannelScale, ConfigError, GyroRange, InitError, PhysicalSample,
    Publisher, RawSample, RawSensor, ReadError, Rotation, SensorConfig, Unit,
};

/// Channel list plus scales, configurable per test
#[derive(Debug, Clone, Copy)]
pub struct TestConfig {
    pub channels: &'static [ChannelId],
    pub rate_hz: u32,
}

pub const BARO_LIKE: TestConfig = TestConfig {
    channels: &[ChannelId::Pressure, ChannelId::Temperature],
    rate_hz: 25,
};

pub const IMU_LIKE: TestConfig = TestConfig {
    channels: &[ChannelId::Accel, ChannelId::Gyro, ChannelId::Mag, ChannelId::Temperature],
    rate_hz: 200,
};

impl SensorConfig for TestConfig {
    fn channels(&self) -> &[ChannelId] {
        self.channels
    }

    fn channel_scale(&self, channel: ChannelId) -> Result<ChannelScale, ConfigError> {
        Ok(match channel {
            ChannelId::Accel => ChannelScale::vector(
                Unit::MetersPerSecondSquared,
                AccelRange::G16.scale(),
                AccelRange::G16.range(),
                Rotation::Roll180.into(),
            ),
            ChannelId::Gyro => ChannelScale::vector(
                Unit::RadiansPerSecond,
                GyroRange::Dps2000.scale(),
                GyroRange::Dps2000.range(),
                Rotation::Roll180.into(),
            ),
            ChannelId::Mag => ChannelScale::vector(Unit::Microtesla, 0.15, 4912.0, Rotation::None.into()),
            ChannelId::Pressure => ChannelScale::scalar(Unit::Pascal, 1.0 / 256.0, 0.0, 110_000.0),
            ChannelId::Temperature => ChannelScale::scalar(Unit::Celsius, 0.01, 0.0, 85.0),
        })
    }

    fn rate(&self) -> HertzU32 {
        HertzU32::Hz(self.rate_hz)
    }
}

/// Sensor driven entirely by test-controlled fields
///
/// Pass it to a cycle as `&mut sensor` so the test can inspect the call
/// counters once the cycle is dropped.
#[derive(Debug)]
pub struct ScriptedSensor {
    /// Remaining init attempts that fail before one succeeds
    pub init_failures: u32,
    pub init_calls: u32,
    pub power_downs: u32,
    pub read_calls: [u32; ChannelId::COUNT],
    pub failing: [bool; ChannelId::COUNT],
    pub values: [RawSample; ChannelId::COUNT],
}

impl ScriptedSensor {
    pub fn new() -> Self {
        Self {
            init_failures: 0,
            init_calls: 0,
            power_downs: 0,
            read_calls: [0; ChannelId::COUNT],
            failing: [false; ChannelId::COUNT],
            values: ChannelId::ALL.map(RawSample::zero_for),
        }
    }

    pub fn failing_init(attempts: u32) -> Self {
        Self { init_failures: attempts, ..Self::new() }
    }

    pub fn set(&mut self, channel: ChannelId, raw: RawSample) {
        self.values[channel.index()] = raw;
    }

    pub fn fail(&mut self, channel: ChannelId, failing: bool) {
        self.failing[channel.index()] = failing;
    }

    pub fn reads(&self, channel: ChannelId) -> u32 {
        self.read_calls[channel.index()]
    }

    pub fn total_reads(&self) -> u32 {
        self.read_calls.iter().sum()
    }
}

impl RawSensor for ScriptedSensor {
    type Config = TestConfig;

    fn init(&mut self, _config: &TestConfig) -> Result<(), InitError> {
        self.init_calls += 1;
        if self.init_failures > 0 {
            self.init_failures -= 1;
            return Err(InitError::NoResponse);
        }
        Ok(())
    }

    fn read_channel(&mut self, channel: ChannelId) -> Result<RawSample, ReadError> {
        self.read_calls[channel.index()] += 1;
        if self.failing[channel.index()] {
            return Err(ReadError::Timeout);
        }
        Ok(self.values[channel.index()])
    }

    fn power_down(&mut self) {
        self.power_downs += 1;
    }
}

/// Unbounded publisher keeping every sample in delivery order
#[derive(Debug, Default)]
pub struct Recorder {
    pub samples: Vec<(ChannelId, PhysicalSample)>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of(&self, channel: ChannelId) -> Vec<PhysicalSample> {
        self.samples
            .iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, s)| *s)
            .collect()
    }

    pub fn last(&self, channel: ChannelId) -> Option<PhysicalSample> {
        self.of(channel).last().copied()
    }
}

impl Publisher for Recorder {
    fn publish(&mut self, channel: ChannelId, sample: PhysicalSample) {
        self.samples.push((channel, sample));
    }
}
