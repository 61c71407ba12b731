//! Raw-to-physical unit conversion
//!
//! A [`SensorConfig`] is the fixed range configuration of one sensor. It
//! names the channels the sensor produces and resolves each of them to a
//! [`ChannelScale`] once, when the cycle is built. From then on converting a
//! sample is a multiply, an add and (for three-axis channels) an axis remap:
//!
//! ```text
//! scalar:  value = raw × scale + offset
//! vector:  value = orient(raw × scale)
//! ```
//!
//! The converter is pure. It holds no state between samples and never sees
//! the clock or the health counters.

use fugit::HertzU32;

use crate::{
    channel::{ChannelId, PhysicalValue, RawSample, Unit},
    errors::ConfigError,
    orientation::Orientation,
};

/// Resolved conversion for one channel
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelScale {
    /// Unit of the converted value
    pub unit: Unit,

    /// Physical units per raw count
    pub scale: f32,

    /// Added after scaling (scalar channels only)
    pub offset: f32,

    /// Full-scale bound in `unit`, published for downstream validation
    pub range: f32,

    /// Sensor-to-body axis remap (vector channels only)
    pub orientation: Orientation,
}

impl ChannelScale {
    /// Scalar channel: `raw × scale + offset`
    pub const fn scalar(unit: Unit, scale: f32, offset: f32, range: f32) -> Self {
        Self {
            unit,
            scale,
            offset,
            range,
            orientation: Orientation::IDENTITY,
        }
    }

    /// Three-axis channel: scale each axis, then remap into body frame
    pub const fn vector(unit: Unit, scale: f32, range: f32, orientation: Orientation) -> Self {
        Self {
            unit,
            scale,
            offset: 0.0,
            range,
            orientation,
        }
    }

    /// Convert one raw sample
    pub fn convert(&self, raw: RawSample) -> PhysicalValue {
        match raw {
            RawSample::Scalar(counts) => PhysicalValue::Scalar(counts as f32 * self.scale + self.offset),
            RawSample::Vector([x, y, z]) => {
                let sensor = [x as f32 * self.scale, y as f32 * self.scale, z as f32 * self.scale];
                PhysicalValue::Vector(self.orientation.apply(sensor))
            }
        }
    }
}

/// Immutable range configuration of one sensor
///
/// Implementations are plain data chosen before the cycle is spawned. The
/// cycle resolves every listed channel through [`channel_scale`] at
/// construction, so an unmapped channel or selector stops the task from
/// starting instead of surfacing mid-flight.
///
/// [`channel_scale`]: SensorConfig::channel_scale
pub trait SensorConfig: Copy {
    /// Channels this sensor produces, in read order
    fn channels(&self) -> &[ChannelId];

    /// Conversion for `channel`
    fn channel_scale(&self, channel: ChannelId) -> Result<ChannelScale, ConfigError>;

    /// Scheduling rate
    fn rate(&self) -> HertzU32;

    /// Cross-field checks (e.g. rate vs. conversion time)
    fn validate(&self) -> Result<(), ConfigError> {
        if self.rate().to_Hz() == 0 {
            return Err(ConfigError::ZeroRate);
        }
        Ok(())
    }
}
