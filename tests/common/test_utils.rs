//! Test utilities and helper functions

use crate::common::mock_interface::MockInterface;
use tmag5273::Tmag5273Driver;

/// Mock delay implementation for testing
///
/// Does not sleep; it only adds up the requested time so tests can check
/// how long the driver would have waited.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockDelay {
    /// Total requested delay in nanoseconds
    pub elapsed_ns: u64,
}

impl MockDelay {
    /// Total requested delay in milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ns / 1_000_000
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += u64::from(ns);
    }

    fn delay_us(&mut self, us: u32) {
        self.elapsed_ns += u64::from(us) * 1_000;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.elapsed_ns += u64::from(ms) * 1_000_000;
    }
}

/// Create a mock driver for testing
/// Returns (driver, interface) where interface is a clone that shares state with the driver
pub fn create_mock_driver() -> (Tmag5273Driver<MockInterface>, MockInterface) {
    let interface = MockInterface::new();
    let interface_clone = interface.clone();
    let driver = Tmag5273Driver::new(interface);
    (driver, interface_clone)
}

/// Create a mock driver that already pushed the default configuration
///
/// The operations log is cleared afterwards.
pub fn create_configured_driver() -> (Tmag5273Driver<MockInterface>, MockInterface) {
    let (mut driver, interface) = create_mock_driver();
    driver
        .configure_device()
        .expect("Failed to configure mock driver");
    interface.clear_operations();
    (driver, interface)
}

/// Assert that two floating point values are approximately equal
pub fn assert_float_eq(a: f32, b: f32, epsilon: f32) {
    let diff = (a - b).abs();
    assert!(
        diff < epsilon,
        "Values not equal within epsilon: {} vs {} (diff: {}, epsilon: {})",
        a,
        b,
        diff,
        epsilon
    );
}
