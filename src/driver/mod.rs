//! TCA9534 device driver.
//!
//! Every pin-level setter is a read-modify-write of one port register: the
//! register is read from the chip, one bit is changed and the byte is written
//! back. Nothing is cached between calls. Two callers doing this concurrently
//! on the same register can lose an update, so shared use must go through
//! [`SharedTca9534`](crate::SharedTca9534) or some other lock.


use core::array;

use crate::{
    error::Error,
    registers::{addresses, Pin, PinConfig, PinLevel, PinPolarity, PortSetup, Register, MAX_PIN},
    transport::Transport,
};

#[derive(Debug)]
pub struct Tca9534<T> {
    transport: T,
    address: u8,
}

impl<T> Tca9534<T>
where
    T: Transport,
{
    /// Bind a transport to the expander strapped at `address`.
    ///
    /// Nothing is sent on the bus; use [`probe`](Self::probe) to check that the
    /// chip answers.
    pub fn new(transport: T, address: u8) -> Result<Self, Error<T::Error>> {
        if !transport.is_complete() {
            warn!("transport for {:#x} is missing an operation", address);
            return Err(Error::NullTransport);
        }
        Ok(Self { transport, address })
    }

    /// Same as [`new`](Self::new) with A2..A0 tied low (0x20).
    pub fn new_default(transport: T) -> Result<Self, Error<T::Error>> {
        Self::new(transport, addresses::DEFAULT_ADDRESS)
    }

    /// Retarget later calls at another expander on the same transport.
    pub fn set_address(&mut self, address: u8) {
        debug!("address {:#x} -> {:#x}", self.address, address);
        self.address = address;
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Give the transport back.
    pub fn release(self) -> T {
        self.transport
    }

    pub fn read_register(&mut self, reg: Register) -> Result<u8, Error<T::Error>> {
        let mut data = [0u8];
        if let Err(err) = self
            .transport
            .write_read(self.address, &[reg.addr()], &mut data)
        {
            warn!("read {:?} from {:#x} failed", reg, self.address);
            return Err(Error::TransportRead(err));
        }
        trace!("{:#x} read {:?} = {:#x}", self.address, reg, data[0]);
        Ok(data[0])
    }

    pub fn write_register(&mut self, reg: Register, value: u8) -> Result<(), Error<T::Error>> {
        trace!("{:#x} write {:?} = {:#x}", self.address, reg, value);
        self.transport
            .write(self.address, &[reg.addr(), value])
            .map_err(|err| {
                warn!("write {:?} to {:#x} failed", reg, self.address);
                Error::TransportWrite(err)
            })
    }

    /// [`read_register`](Self::read_register) by raw register address.
    pub fn read_register_addr(&mut self, addr: u8) -> Result<u8, Error<T::Error>> {
        let reg = Register::try_from(addr).map_err(Error::InvalidRegister)?;
        self.read_register(reg)
    }

    /// [`write_register`](Self::write_register) by raw register address.
    pub fn write_register_addr(&mut self, addr: u8, value: u8) -> Result<(), Error<T::Error>> {
        let reg = Register::try_from(addr).map_err(Error::InvalidRegister)?;
        self.write_register(reg, value)
    }

    /// Read the configuration register as a presence check.
    pub fn probe(&mut self) -> Result<u8, Error<T::Error>> {
        self.read_port_config()
    }

    /// Write output, polarity and direction, in that order, so output levels
    /// are latched before any pin starts driving.
    pub fn apply(&mut self, setup: &PortSetup) -> Result<(), Error<T::Error>> {
        debug!(
            "{:#x} setup: output={:#x} polarity={:#x} direction={:#x}",
            self.address,
            setup.output,
            setup.polarity,
            setup.direction
        );
        self.write_register(Register::OutputPort, setup.output)?;
        self.write_register(Register::Polarity, setup.polarity)?;
        self.write_register(Register::Config, setup.direction)
    }

    /// All inputs, normal polarity, output latch low.
    pub fn reset(&mut self) -> Result<(), Error<T::Error>> {
        self.apply(&PortSetup::default())
    }

    // Port access

    pub fn read_input_port(&mut self) -> Result<u8, Error<T::Error>> {
        self.read_register(Register::InputPort)
    }

    pub fn write_output_port(&mut self, value: u8) -> Result<(), Error<T::Error>> {
        self.write_register(Register::OutputPort, value)
    }

    /// Last commanded output levels, not what is on the pins.
    pub fn read_output_port(&mut self) -> Result<u8, Error<T::Error>> {
        self.read_register(Register::OutputPort)
    }

    /// Bit set = input, bit clear = output.
    pub fn set_port_config(&mut self, config: u8) -> Result<(), Error<T::Error>> {
        self.write_register(Register::Config, config)
    }

    pub fn read_port_config(&mut self) -> Result<u8, Error<T::Error>> {
        self.read_register(Register::Config)
    }

    /// Bit set = inverted.
    pub fn set_port_polarity(&mut self, polarity: u8) -> Result<(), Error<T::Error>> {
        self.write_register(Register::Polarity, polarity)
    }

    pub fn read_port_polarity(&mut self) -> Result<u8, Error<T::Error>> {
        self.read_register(Register::Polarity)
    }

    // Pin access

    fn pin_mask(pin: Pin) -> Result<u8, Error<T::Error>> {
        if pin > MAX_PIN {
            return Err(Error::InvalidPin(pin));
        }
        Ok(1 << pin)
    }

    fn read_bit(&mut self, reg: Register, pin: Pin) -> Result<bool, Error<T::Error>> {
        let mask = Self::pin_mask(pin)?;
        Ok(self.read_register(reg)? & mask != 0)
    }

    fn update_bit(&mut self, reg: Register, pin: Pin, bit: u8) -> Result<(), Error<T::Error>> {
        let mask = Self::pin_mask(pin)?;

        // read
        let current = self.read_register(reg)?;

        // modify
        let value = (current & !mask) | (bit << pin);

        // update
        self.write_register(reg, value)
    }

    pub fn read_pin_input(&mut self, pin: Pin) -> Result<PinLevel, Error<T::Error>> {
        self.read_bit(Register::InputPort, pin).map(PinLevel::from)
    }

    /// Decode one input port read into per-pin levels, index = pin.
    pub fn read_pins(&mut self) -> Result<[PinLevel; 8], Error<T::Error>> {
        let port = self.read_input_port()?;
        Ok(array::from_fn(|i| PinLevel::from(port & (1 << i) != 0)))
    }

    pub fn set_pin_output(&mut self, pin: Pin, level: PinLevel) -> Result<(), Error<T::Error>> {
        self.update_bit(Register::OutputPort, pin, level.bits())
    }

    pub fn read_pin_output(&mut self, pin: Pin) -> Result<PinLevel, Error<T::Error>> {
        self.read_bit(Register::OutputPort, pin).map(PinLevel::from)
    }

    pub fn toggle_pin_output(&mut self, pin: Pin) -> Result<(), Error<T::Error>> {
        let mask = Self::pin_mask(pin)?;
        let current = self.read_output_port()?;
        self.write_output_port(current ^ mask)
    }

    pub fn set_pin_config(&mut self, pin: Pin, config: PinConfig) -> Result<(), Error<T::Error>> {
        self.update_bit(Register::Config, pin, config.bits())
    }

    pub fn read_pin_config(&mut self, pin: Pin) -> Result<PinConfig, Error<T::Error>> {
        self.read_bit(Register::Config, pin).map(PinConfig::from)
    }

    pub fn set_pin_polarity(
        &mut self,
        pin: Pin,
        polarity: PinPolarity,
    ) -> Result<(), Error<T::Error>> {
        self.update_bit(Register::Polarity, pin, polarity.bits())
    }

    pub fn read_pin_polarity(&mut self, pin: Pin) -> Result<PinPolarity, Error<T::Error>> {
        self.read_bit(Register::Polarity, pin).map(PinPolarity::from)
    }
}
