//! Simulated chips for driver integration tests
//!
//! Both simulators are `Send` so they can move onto runner threads; their
//! call counters are shared through atomics the test keeps a handle to.

#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicU32, Ordering},
    Arc,
};

use sensorcycle_core::{ChannelId, InitError, RawSample, RawSensor, ReadError};
use sensorcycle_drivers::{
    device::{AK8963_DEVICE_ID, BMP280_CHIP_ID, MPU9250_WHO_AM_I},
    BaroConfig, InertialConfig,
};

/// Call counters visible from outside the runner thread
#[derive(Debug, Default)]
pub struct Counters {
    pub inits: AtomicU32,
    pub reads: AtomicU32,
    pub power_downs: AtomicU32,
}

impl Counters {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn get(counter: &AtomicU32) -> u32 {
        counter.load(Ordering::SeqCst)
    }
}

/// BMP280 stand-in reporting a fixed pressure and temperature
pub struct SimulatedBaro {
    pub counters: Arc<Counters>,
    pub init_failures: u32,
    pub pressure_pa: u32,
    pub temperature_centi_c: i32,
    pub applied: Option<BaroConfig>,
}

impl SimulatedBaro {
    pub fn new(counters: Arc<Counters>) -> Self {
        Self {
            counters,
            init_failures: 0,
            pressure_pa: 101_325,
            temperature_centi_c: 2_150,
            applied: None,
        }
    }
}

impl RawSensor for SimulatedBaro {
    type Config = BaroConfig;

    fn init(&mut self, config: &BaroConfig) -> Result<(), InitError> {
        self.counters.inits.fetch_add(1, Ordering::SeqCst);
        if self.init_failures > 0 {
            self.init_failures -= 1;
            return Err(InitError::WrongDevice { expected: BMP280_CHIP_ID, found: 0x00 });
        }
        self.applied = Some(*config);
        Ok(())
    }

    fn read_channel(&mut self, channel: ChannelId) -> Result<RawSample, ReadError> {
        self.counters.reads.fetch_add(1, Ordering::SeqCst);
        match channel {
            ChannelId::Pressure => Ok(RawSample::Scalar((self.pressure_pa * 256) as i32)),
            ChannelId::Temperature => Ok(RawSample::Scalar(self.temperature_centi_c)),
            _ => Err(ReadError::Bus),
        }
    }

    fn power_down(&mut self) {
        self.counters.power_downs.fetch_add(1, Ordering::SeqCst);
    }
}

/// MPU-9250 stand-in lying flat, upside down, with a faulty magnetometer
pub struct SimulatedImu {
    pub counters: Arc<Counters>,
    pub mag_fails: bool,
    /// Value answered from `WHO_AM_I`
    pub who_am_i: u8,
    /// Value answered from the magnetometer `WIA`
    pub mag_id: u8,
}

impl SimulatedImu {
    pub fn new(counters: Arc<Counters>) -> Self {
        Self {
            counters,
            mag_fails: false,
            who_am_i: MPU9250_WHO_AM_I,
            mag_id: AK8963_DEVICE_ID,
        }
    }
}

impl RawSensor for SimulatedImu {
    type Config = InertialConfig;

    fn init(&mut self, config: &InertialConfig) -> Result<(), InitError> {
        self.counters.inits.fetch_add(1, Ordering::SeqCst);
        if self.who_am_i != MPU9250_WHO_AM_I {
            return Err(InitError::WrongDevice { expected: MPU9250_WHO_AM_I, found: self.who_am_i });
        }
        // The magnetometer sits behind the IMU and is only checked when used
        if config.magnetometer && self.mag_id != AK8963_DEVICE_ID {
            return Err(InitError::WrongDevice { expected: AK8963_DEVICE_ID, found: self.mag_id });
        }
        Ok(())
    }

    fn read_channel(&mut self, channel: ChannelId) -> Result<RawSample, ReadError> {
        self.counters.reads.fetch_add(1, Ordering::SeqCst);
        match channel {
            // +1 g on sensor z at ±16 g
            ChannelId::Accel => Ok(RawSample::Vector([0, 0, 2048])),
            ChannelId::Gyro => Ok(RawSample::Vector([0, 0, 0])),
            ChannelId::Mag if self.mag_fails => Err(ReadError::Timeout),
            ChannelId::Mag => Ok(RawSample::Vector([150, 0, -300])),
            ChannelId::Temperature => Ok(RawSample::Scalar(0)),
            ChannelId::Pressure => Err(ReadError::Bus),
        }
    }

    fn power_down(&mut self) {
        self.counters.power_downs.fetch_add(1, Ordering::SeqCst);
    }
}
