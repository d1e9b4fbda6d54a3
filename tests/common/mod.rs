#![allow(dead_code)]

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};

/// Register-level model of one TCA9534 on an `embedded-hal` bus.
pub struct Chip {
    pub address: u8,
    /// Levels driven onto the pins from outside.
    pub external: u8,
    pub output: u8,
    pub polarity: u8,
    pub config: u8,
    pub transactions: usize,
    pointer: u8,
}

impl Chip {
    pub fn new(address: u8) -> Self {
        Self {
            address,
            external: 0x00,
            output: 0xFF,
            polarity: 0x00,
            config: 0xFF,
            transactions: 0,
            pointer: 0,
        }
    }

    fn input(&self) -> u8 {
        let level = (self.output & !self.config) | (self.external & self.config);
        level ^ self.polarity
    }

    fn load(&self) -> u8 {
        match self.pointer & 0x03 {
            0 => self.input(),
            1 => self.output,
            2 => self.polarity,
            _ => self.config,
        }
    }

    fn store(&mut self, value: u8) {
        match self.pointer & 0x03 {
            0 => {}
            1 => self.output = value,
            2 => self.polarity = value,
            _ => self.config = value,
        }
    }
}

impl ErrorType for Chip {
    type Error = ErrorKind;
}

impl I2c for Chip {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.transactions += 1;
        if address != self.address {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        }

        for op in operations {
            match op {
                Operation::Write(bytes) => {
                    if let [reg, values @ ..] = *bytes {
                        self.pointer = *reg;
                        for value in values {
                            self.store(*value);
                        }
                    }
                }
                Operation::Read(buffer) => buffer.fill(self.load()),
            }
        }
        Ok(())
    }
}
