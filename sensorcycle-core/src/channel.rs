//! Sensor channels and the samples that flow through them
//!
//! A channel is one physical quantity produced by a sensor. Raw samples come
//! from the HAL in device counts; physical samples leave the cycle in SI-ish
//! units with the tick's timestamp and the channel's health attached.

use core::fmt;

use crate::time::Timestamp;

/// Identifies one physical quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ChannelId {
    /// Three-axis acceleration
    Accel,
    /// Three-axis angular rate
    Gyro,
    /// Three-axis magnetic field
    Mag,
    /// Barometric pressure
    Pressure,
    /// Sensor die or ambient temperature
    Temperature,
}

impl ChannelId {
    /// Number of distinct channels
    pub const COUNT: usize = 5;

    /// All channels, in index order
    pub const ALL: [ChannelId; Self::COUNT] = [
        ChannelId::Accel,
        ChannelId::Gyro,
        ChannelId::Mag,
        ChannelId::Pressure,
        ChannelId::Temperature,
    ];

    /// Dense index for per-channel tables
    pub const fn index(self) -> usize {
        match self {
            ChannelId::Accel => 0,
            ChannelId::Gyro => 1,
            ChannelId::Mag => 2,
            ChannelId::Pressure => 3,
            ChannelId::Temperature => 4,
        }
    }

    /// Whether the channel carries three axes
    pub const fn is_vector(self) -> bool {
        matches!(self, ChannelId::Accel | ChannelId::Gyro | ChannelId::Mag)
    }

    /// Short lowercase name used in logs and status output
    pub const fn name(self) -> &'static str {
        match self {
            ChannelId::Accel => "accel",
            ChannelId::Gyro => "gyro",
            ChannelId::Mag => "mag",
            ChannelId::Pressure => "baro",
            ChannelId::Temperature => "temp",
        }
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Physical unit of a converted sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Unit {
    /// Pa
    Pascal,
    /// °C
    Celsius,
    /// m/s²
    MetersPerSecondSquared,
    /// rad/s
    RadiansPerSecond,
    /// µT
    Microtesla,
}

impl Unit {
    /// Unit symbol
    pub const fn symbol(self) -> &'static str {
        match self {
            Unit::Pascal => "Pa",
            Unit::Celsius => "°C",
            Unit::MetersPerSecondSquared => "m/s²",
            Unit::RadiansPerSecond => "rad/s",
            Unit::Microtesla => "µT",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Sample as delivered by the HAL, in device counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RawSample {
    /// Single value (pressure, temperature). Fixed-point formats are passed
    /// through as their integer representation.
    Scalar(i32),
    /// Three axes in sensor frame: x, y, z
    Vector([i32; 3]),
}

impl RawSample {
    /// Zero sample with the right shape for `channel`
    ///
    /// Seeds a channel before its first successful read.
    pub const fn zero_for(channel: ChannelId) -> Self {
        if channel.is_vector() {
            RawSample::Vector([0; 3])
        } else {
            RawSample::Scalar(0)
        }
    }

    /// Whether the sample shape fits `channel`
    pub const fn matches(&self, channel: ChannelId) -> bool {
        match self {
            RawSample::Scalar(_) => !channel.is_vector(),
            RawSample::Vector(_) => channel.is_vector(),
        }
    }
}

/// Converted value in physical units
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhysicalValue {
    /// Single value
    Scalar(f32),
    /// Three axes in body frame
    Vector([f32; 3]),
}

impl PhysicalValue {
    /// Scalar value, if this is one
    pub fn as_scalar(&self) -> Option<f32> {
        match *self {
            PhysicalValue::Scalar(v) => Some(v),
            PhysicalValue::Vector(_) => None,
        }
    }

    /// Axis values, if this is a vector
    pub fn as_vector(&self) -> Option<[f32; 3]> {
        match *self {
            PhysicalValue::Vector(v) => Some(v),
            PhysicalValue::Scalar(_) => None,
        }
    }

    /// Euclidean norm (absolute value for scalars)
    pub fn norm(&self) -> f32 {
        match *self {
            PhysicalValue::Scalar(v) => libm::fabsf(v),
            PhysicalValue::Vector([x, y, z]) => libm::sqrtf(x * x + y * y + z * z),
        }
    }

    /// Largest absolute component
    pub fn peak(&self) -> f32 {
        match *self {
            PhysicalValue::Scalar(v) => libm::fabsf(v),
            PhysicalValue::Vector(v) => v.iter().fold(0.0, |acc, c| libm::fmaxf(acc, libm::fabsf(*c))),
        }
    }
}

/// Timestamped physical sample handed to the publisher
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhysicalSample {
    /// Time of acquisition, shared by every channel of one tick (µs)
    pub timestamp: Timestamp,

    /// Converted value
    pub value: PhysicalValue,

    /// Unit of `value`
    pub unit: Unit,

    /// Cumulative read failures of this channel
    pub error_count: u64,

    /// Temperature reported alongside this tick, for compensation downstream
    pub temperature: Option<f32>,

    /// Full-scale bound of the configured range, in `unit`
    pub range: f32,

    /// Set when this tick's read failed and `value` is the last good data
    pub stale: bool,
}

impl PhysicalSample {
    /// Whether any component sits at or beyond the configured full scale
    pub fn is_clipped(&self) -> bool {
        self.value.peak() >= self.range
    }
}
