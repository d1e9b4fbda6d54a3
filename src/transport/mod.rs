//! Byte-level bus access the driver is built on.

use embedded_hal::i2c::I2c;

pub mod ops;

/// A blocking I2C transport.
///
/// Every `embedded_hal::i2c::I2c` bus is a transport, including `&mut` borrows
/// of one, so a driver can either own its bus or borrow it.
pub trait Transport {
    type Error;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error>;

    fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error>;

    /// Write `bytes` then read into `buffer` without releasing the bus in between.
    fn write_read(
        &mut self,
        address: u8,
        bytes: &[u8],
        buffer: &mut [u8],
    ) -> Result<(), Self::Error>;

    /// Whether all three operations are available.
    fn is_complete(&self) -> bool {
        true
    }
}

impl<I2C> Transport for I2C
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        I2c::write(self, address, bytes)
    }

    fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        I2c::read(self, address, buffer)
    }

    fn write_read(
        &mut self,
        address: u8,
        bytes: &[u8],
        buffer: &mut [u8],
    ) -> Result<(), Self::Error> {
        I2c::write_read(self, address, bytes, buffer)
    }
}
