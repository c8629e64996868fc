//! Bus interface implementations for the TMAG5273
//!
//! This module provides the I2C implementation of the `device-driver`
//! register traits. Each register access is one bus transaction: writes send
//! the register address followed by the data bytes, reads use a write-read
//! with repeated start so a multi-byte burst needs a single turnaround.
//! Writes of any length are sent whole.

use crate::I2C_ADDRESS_A;

use device_driver::RegisterInterface;
use embedded_hal::i2c::Operation;

/// Largest write staged in the local buffer; longer writes use a transaction
const MAX_WRITE_LEN: usize = 12;

/// I2C interface for the TMAG5273
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Create a new I2C interface with the default address (0x35, TMAG5273A)
    ///
    /// # Arguments
    /// * `i2c` - The I2C peripheral
    ///
    /// # Example
    /// ```ignore
    /// let interface = I2cInterface::default(i2c);
    /// let mut sensor = Tmag5273Driver::new(interface);
    /// ```
    pub const fn default(i2c: I2C) -> Self {
        Self {
            i2c,
            address: I2C_ADDRESS_A,
        }
    }

    /// Create a new I2C interface with a custom device address
    ///
    /// Use this for the B/C/D variants ([`I2C_ADDRESS_B`](crate::I2C_ADDRESS_B),
    /// [`I2C_ADDRESS_C`](crate::I2C_ADDRESS_C), [`I2C_ADDRESS_D`](crate::I2C_ADDRESS_D))
    /// or a device whose address was reprogrammed.
    ///
    /// # Arguments
    /// * `i2c` - The I2C peripheral
    /// * `address` - The 7-bit I2C device address
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// 7-bit device address used for every transaction
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Consume the interface and return the I2C peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> RegisterInterface for I2cInterface<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.i2c.write_read(self.address, &[address], read_data)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let len = write_data.len();
        if len > MAX_WRITE_LEN {
            // Adjacent writes in one transaction go out without a restart
            return self.i2c.transaction(
                self.address,
                &mut [Operation::Write(&[address]), Operation::Write(write_data)],
            );
        }

        let mut buffer = [0u8; MAX_WRITE_LEN + 1];
        buffer[0] = address;
        buffer[1..=len].copy_from_slice(write_data);

        self.i2c.write(self.address, &buffer[..=len])
    }
}

#[cfg(feature = "async")]
impl<I2C, E> device_driver::AsyncRegisterInterface for I2cInterface<I2C>
where
    I2C: embedded_hal_async::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    async fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.i2c
            .write_read(self.address, &[address], read_data)
            .await
    }

    async fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let len = write_data.len();
        if len > MAX_WRITE_LEN {
            return self
                .i2c
                .transaction(
                    self.address,
                    &mut [
                        embedded_hal_async::i2c::Operation::Write(&[address]),
                        embedded_hal_async::i2c::Operation::Write(write_data),
                    ],
                )
                .await;
        }

        let mut buffer = [0u8; MAX_WRITE_LEN + 1];
        buffer[0] = address;
        buffer[1..=len].copy_from_slice(write_data);

        self.i2c.write(self.address, &buffer[..=len]).await
    }
}
