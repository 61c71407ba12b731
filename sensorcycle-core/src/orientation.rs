//! Sensor mounting orientation
//!
//! ## Background
//!
//! A sensor chip is soldered onto a board in whatever orientation the layout
//! allowed. Its x/y/z axes rarely line up with the vehicle body frame, so
//! every three-axis sample has to be remapped before anyone downstream can
//! use it. On a board where the IMU sits upside down the body frame is
//! reached by a 180° roll:
//!
//! ```text
//! body_x =  sensor_x
//! body_y = -sensor_y
//! body_z = -sensor_z
//! ```
//!
//! ## Representation
//!
//! An axis-aligned mounting is a *signed permutation*: each body axis takes
//! exactly one sensor axis, possibly negated. That is all [`Orientation`]
//! stores, so applying it costs three moves and at most three negations.
//!
//! Common mountings have names in [`Rotation`]; anything else can be built
//! with [`Orientation::new`], which rejects mappings that use a sensor axis
//! twice.
//!
//! The orientation is part of the deployment configuration. The converter
//! applies whatever it is given and knows nothing about boards.

use crate::errors::ConfigError;

/// Sensor axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    /// Sensor x
    X,
    /// Sensor y
    Y,
    /// Sensor z
    Z,
}

impl Axis {
    const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// One body axis: which sensor axis feeds it and whether it is negated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignedAxis {
    /// Sensor axis read for this body axis
    pub source: Axis,
    /// Flip the sign of the sensor reading
    pub negate: bool,
}

impl SignedAxis {
    /// `source` taken as is
    pub const fn pos(source: Axis) -> Self {
        Self { source, negate: false }
    }

    /// `source` with its sign flipped
    pub const fn neg(source: Axis) -> Self {
        Self { source, negate: true }
    }
}

/// Named axis-aligned mountings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Rotation {
    /// Sensor frame equals body frame
    #[default]
    None,
    /// Rotated 90° about z
    Yaw90,
    /// Rotated 180° about z
    Yaw180,
    /// Rotated 270° about z
    Yaw270,
    /// Upside down, nose forward
    Roll180,
    /// Upside down, then rotated 90° about z
    Roll180Yaw90,
    /// Upside down, nose backward
    Pitch180,
    /// Upside down, then rotated 270° about z
    Roll180Yaw270,
}

/// Signed axis permutation from sensor frame to body frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[SignedAxis; 3]", into = "[SignedAxis; 3]"))]
pub struct Orientation {
    axes: [SignedAxis; 3],
}

impl Orientation {
    /// Sensor frame equals body frame
    pub const IDENTITY: Orientation = Orientation {
        axes: [SignedAxis::pos(Axis::X), SignedAxis::pos(Axis::Y), SignedAxis::pos(Axis::Z)],
    };

    /// Build from explicit body-axis mappings `[body_x, body_y, body_z]`
    ///
    /// Fails if any sensor axis is used twice.
    pub fn new(axes: [SignedAxis; 3]) -> Result<Self, ConfigError> {
        let mut seen = [false; 3];
        for axis in &axes {
            let i = axis.source.index();
            if seen[i] {
                return Err(ConfigError::InvalidOrientation);
            }
            seen[i] = true;
        }
        Ok(Self { axes })
    }

    /// Body-axis mappings
    pub fn axes(&self) -> [SignedAxis; 3] {
        self.axes
    }

    /// Remap sensor-frame axes into body frame
    pub fn apply(&self, v: [f32; 3]) -> [f32; 3] {
        let map = |a: SignedAxis| {
            let c = v[a.source.index()];
            if a.negate { -c } else { c }
        };
        [map(self.axes[0]), map(self.axes[1]), map(self.axes[2])]
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TryFrom<[SignedAxis; 3]> for Orientation {
    type Error = ConfigError;

    fn try_from(axes: [SignedAxis; 3]) -> Result<Self, Self::Error> {
        Self::new(axes)
    }
}

impl From<Orientation> for [SignedAxis; 3] {
    fn from(orientation: Orientation) -> Self {
        orientation.axes
    }
}

impl From<Rotation> for Orientation {
    fn from(rotation: Rotation) -> Self {
        use Axis::{X, Y, Z};
        let (p, n) = (SignedAxis::pos, SignedAxis::neg);

        let axes = match rotation {
            Rotation::None => [p(X), p(Y), p(Z)],
            Rotation::Yaw90 => [n(Y), p(X), p(Z)],
            Rotation::Yaw180 => [n(X), n(Y), p(Z)],
            Rotation::Yaw270 => [p(Y), n(X), p(Z)],
            Rotation::Roll180 => [p(X), n(Y), n(Z)],
            Rotation::Roll180Yaw90 => [p(Y), p(X), n(Z)],
            Rotation::Pitch180 => [n(X), p(Y), n(Z)],
            Rotation::Roll180Yaw270 => [n(Y), n(X), n(Z)],
        };

        Orientation { axes }
    }
}
