//! Chip identity checks during lazy init

mod common;

use sensorcycle_core::{time::FixedTime, CycleState, InitError, SampleLog, Supervisor, TickOutcome};
use sensorcycle_drivers::{device::AK8963_DEVICE_ID, inertial_cycle, InertialConfig};

use common::{Counters, SimulatedImu};

#[test]
fn wrong_magnetometer_keeps_init_failing() {
    let counters = Counters::shared();
    let mut imu = SimulatedImu::new(counters.clone());
    imu.mag_id = 0x00;

    let supervisor = Supervisor::new();
    let mut cycle = inertial_cycle(
        imu,
        InertialConfig::default(),
        FixedTime::new(0),
        SampleLog::<8>::new(),
        supervisor.stop_token(),
    )
    .unwrap();

    let expected = InitError::WrongDevice { expected: AK8963_DEVICE_ID, found: 0x00 };
    for _ in 0..3 {
        assert_eq!(cycle.run(), TickOutcome::InitFailed(expected));
    }
    assert_eq!(cycle.state(), CycleState::Failed);
    assert_eq!(cycle.status().init_attempts, 3);
    assert_eq!(cycle.status().last_init_error, Some(expected));
    assert_eq!(Counters::get(&counters.reads), 0);
    assert!(cycle.publisher().is_empty());
}

#[test]
fn magnetometer_identity_ignored_when_disabled() {
    let counters = Counters::shared();
    let mut imu = SimulatedImu::new(counters.clone());
    imu.mag_id = 0x00;

    let supervisor = Supervisor::new();
    let config = InertialConfig { magnetometer: false, ..InertialConfig::default() };
    let mut cycle = inertial_cycle(
        imu,
        config,
        FixedTime::new(0),
        SampleLog::<8>::new(),
        supervisor.stop_token(),
    )
    .unwrap();

    assert!(matches!(cycle.run(), TickOutcome::Published { failed_reads: 0, .. }));
    assert_eq!(cycle.status().init_attempts, 1);
    // accel, gyro, temperature
    assert_eq!(Counters::get(&counters.reads), 3);
}
