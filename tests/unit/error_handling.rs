//! Unit tests for error handling and recovery

use crate::common::{create_configured_driver, create_mock_driver, mock_interface::MockError};
use tmag5273::{DriverState, Error, ModeRegister, SampleRequest};

#[test]
fn test_read_failure_is_a_bus_error() {
    let (mut driver, interface) = create_configured_driver();

    interface.fail_next_read();

    let result = driver.read_angle_data();
    assert!(
        matches!(result, Err(Error::Bus(MockError::Communication))),
        "Read should fail with the bus error, got {:?}",
        result
    );
}

#[test]
fn test_read_failure_recovery() {
    let (mut driver, interface) = create_configured_driver();

    interface.fail_next_read();
    assert!(driver.read_xyz_data().is_err(), "First read should fail");

    interface.set_xyz_data(0x4000, 0, 0, 0x01);

    // The failure only affected one operation
    let data = driver.read_xyz_data().unwrap();
    assert!((data.x - 20.0).abs() < 0.001);
}

#[test]
fn test_write_failure_is_a_bus_error() {
    let (mut driver, interface) = create_configured_driver();

    interface.fail_next_write();

    let result = driver.set_operating_mode(ModeRegister::DeviceConfig2);
    assert!(matches!(result, Err(Error::Bus(MockError::Communication))));
    assert!(interface.writes().is_empty());
}

#[test]
fn test_configure_aborts_on_first_failed_write() {
    let (mut driver, interface) = create_mock_driver();

    interface.fail_write_after(5);

    let result = driver.configure_device();
    assert!(matches!(result, Err(Error::Bus(MockError::Communication))));

    // Five writes landed, the sixth failed and nothing after it was attempted
    let writes = interface.writes();
    assert_eq!(writes.len(), 5);
    assert_eq!(writes.last(), Some(&(0x04, 0x00)));
    assert_eq!(driver.state(), DriverState::Unconfigured);
}

#[test]
fn test_identity_failures() {
    let (mut driver, interface) = create_mock_driver();

    interface.fail_next_read();
    assert!(matches!(
        driver.verify_device(),
        Err(Error::Bus(MockError::Communication))
    ));

    interface.set_manufacturer_id(0x1234);
    assert!(matches!(
        driver.verify_device(),
        Err(Error::InvalidDevice(0x1234))
    ));
}

#[test]
fn test_sample_read_failure() {
    let (mut driver, interface) = create_configured_driver();

    interface.fail_next_read();
    assert!(matches!(
        driver.read_sample(SampleRequest::Temperature),
        Err(Error::Bus(_))
    ));
    assert!(driver.read_sample(SampleRequest::Temperature).is_ok());
}

#[test]
fn test_unknown_register_name() {
    let (mut driver, interface) = create_configured_driver();

    let result = driver.read_configuration_register_named("XYZ");
    assert!(matches!(result, Err(Error::UnknownRegisterName)));
    assert!(interface.operations().is_empty());
}
