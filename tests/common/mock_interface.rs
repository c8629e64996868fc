//! Mock interface implementation for testing the TMAG5273 driver

use device_driver::RegisterInterface;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// CONV_STATUS register address
const CONV_STATUS: u8 = 0x18;

/// Records operations performed on the mock interface
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// One burst read starting at `address`
    Read {
        /// First register address
        address: u8,
        /// Number of bytes transferred
        len: usize,
    },
    /// Single register write
    Write {
        /// Register address
        address: u8,
        /// Value that was written
        value: u8,
    },
}

/// Shared state for mock interface (uses interior mutability)
#[derive(Debug)]
struct MockState {
    /// Simulated register values
    registers: HashMap<u8, u8>,

    /// Operations log for verification
    operations: Vec<Operation>,

    /// Failure injection flags
    fail_next_read: bool,
    fail_next_write: bool,
    /// Number of writes that succeed before the next one fails
    fail_write_after: Option<usize>,

    /// CONV_STATUS polls left before RESULT_STATUS reads as set
    polls_until_ready: Option<usize>,
}

impl MockState {
    fn new() -> Self {
        let mut state = Self {
            registers: HashMap::new(),
            operations: Vec::new(),
            fail_next_read: false,
            fail_next_write: false,
            fail_write_after: None,
            polls_until_ready: None,
        };

        // DEVICE_ID: version 1 (±40/±80 mT)
        state.registers.insert(0x0D, 0x01);

        // MANUFACTURER_ID = 0x5449 ("TI")
        state.registers.insert(0x0E, 0x49);
        state.registers.insert(0x0F, 0x54);

        state
    }

    fn read(&mut self, address: u8) -> u8 {
        if address == CONV_STATUS {
            if let Some(remaining) = self.polls_until_ready {
                if remaining == 0 {
                    return self.registers.get(&address).copied().unwrap_or(0) | 0x01;
                }
                self.polls_until_ready = Some(remaining - 1);
            }
        }
        self.registers.get(&address).copied().unwrap_or(0)
    }
}

/// Mock interface for testing
#[derive(Clone)]
pub struct MockInterface {
    state: Rc<RefCell<MockState>>,
}

impl MockInterface {
    /// Create a new mock interface with default register values
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(MockState::new())),
        }
    }

    /// Set a register value
    pub fn set_register(&self, address: u8, value: u8) {
        self.state.borrow_mut().registers.insert(address, value);
    }

    /// Get a register value
    pub fn get_register(&self, address: u8) -> u8 {
        self.state
            .borrow()
            .registers
            .get(&address)
            .copied()
            .unwrap_or(0)
    }

    /// Set the raw X/Y/Z results (MSB first) and the CONV_STATUS byte after them
    pub fn set_xyz_data(&self, x: i16, y: i16, z: i16, conv_status: u8) {
        let mut state = self.state.borrow_mut();
        for (address, value) in [(0x12, x), (0x14, y), (0x16, z)] {
            let [msb, lsb] = value.to_be_bytes();
            state.registers.insert(address, msb);
            state.registers.insert(address + 1, lsb);
        }
        state.registers.insert(CONV_STATUS, conv_status);
    }

    /// Set the raw angle result (MSB first)
    pub fn set_angle_data(&self, raw: u16) {
        let [msb, lsb] = raw.to_be_bytes();
        self.set_register(0x19, msb);
        self.set_register(0x1A, lsb);
    }

    /// Set the temperature ADC code as the driver will assemble it
    ///
    /// The driver takes the first byte at T_MSB_RESULT as the low byte.
    pub fn set_temperature_code(&self, code: u16) {
        let [first, second] = code.to_le_bytes();
        self.set_register(0x10, first);
        self.set_register(0x11, second);
    }

    /// Set the magnitude result code
    pub fn set_magnitude(&self, code: u8) {
        self.set_register(0x1B, code);
    }

    /// Set the manufacturer ID registers
    pub fn set_manufacturer_id(&self, id: u16) {
        let [lsb, msb] = id.to_le_bytes();
        self.set_register(0x0E, lsb);
        self.set_register(0x0F, msb);
    }

    /// Report RESULT_STATUS set after `polls` reads of CONV_STATUS
    pub fn conversion_ready_after(&self, polls: usize) {
        self.state.borrow_mut().polls_until_ready = Some(polls);
    }

    /// Inject a read failure on the next read operation
    pub fn fail_next_read(&self) {
        self.state.borrow_mut().fail_next_read = true;
    }

    /// Inject a write failure on the next write operation
    pub fn fail_next_write(&self) {
        self.state.borrow_mut().fail_next_write = true;
    }

    /// Let `count` writes succeed, then fail the next one
    pub fn fail_write_after(&self, count: usize) {
        self.state.borrow_mut().fail_write_after = Some(count);
    }

    /// Get the operations log
    pub fn operations(&self) -> Vec<Operation> {
        self.state.borrow().operations.clone()
    }

    /// Writes in the operations log as `(address, value)` pairs
    pub fn writes(&self) -> Vec<(u8, u8)> {
        self.state
            .borrow()
            .operations
            .iter()
            .filter_map(|op| match op {
                Operation::Write { address, value } => Some((*address, *value)),
                Operation::Read { .. } => None,
            })
            .collect()
    }

    /// Number of reads in the operations log
    pub fn read_count(&self) -> usize {
        self.state
            .borrow()
            .operations
            .iter()
            .filter(|op| matches!(op, Operation::Read { .. }))
            .count()
    }

    /// Clear the operations log
    pub fn clear_operations(&self) {
        self.state.borrow_mut().operations.clear();
    }
}

/// Mock error type
#[derive(Debug, Clone, PartialEq)]
pub enum MockError {
    /// Simulated communication error
    Communication,
}

impl RegisterInterface for MockInterface {
    type Error = MockError;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();

        // Check for injected failure
        if state.fail_next_read {
            state.fail_next_read = false;
            return Err(MockError::Communication);
        }

        for (i, byte) in read_data.iter_mut().enumerate() {
            *byte = state.read(address.wrapping_add(i as u8));
        }

        state.operations.push(Operation::Read {
            address,
            len: read_data.len(),
        });

        Ok(())
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();

        // Check for injected failure
        if state.fail_next_write {
            state.fail_next_write = false;
            return Err(MockError::Communication);
        }
        match state.fail_write_after {
            Some(0) => {
                state.fail_write_after = None;
                return Err(MockError::Communication);
            }
            Some(remaining) => state.fail_write_after = Some(remaining - 1),
            None => {}
        }

        for (i, &value) in write_data.iter().enumerate() {
            let reg_addr = address.wrapping_add(i as u8);
            state.registers.insert(reg_addr, value);
            state.operations.push(Operation::Write {
                address: reg_addr,
                value,
            });
        }

        Ok(())
    }
}

impl Default for MockInterface {
    fn default() -> Self {
        Self::new()
    }
}
