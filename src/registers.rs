//! TCA9534 register map and the per-pin bit meanings.
//!
//! Datasheet: <https://www.ti.com/lit/ds/symlink/tca9534.pdf>

use embedded_hal::digital::PinState;

/// Pin index into one of the 8-bit port registers (0-7).
pub type Pin = u8;

/// Highest valid pin index.
pub const MAX_PIN: Pin = 7;

/// Number of GPIO lines on the expander.
pub const N_PINS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// Incoming logic levels, after polarity inversion. Read only.
    InputPort = 0x00,
    /// Outgoing levels for pins configured as outputs.
    OutputPort = 0x01,
    /// 1 = input bit inverted, 0 = as seen on the pin.
    Polarity = 0x02,
    /// 1 = input (power-on default), 0 = output.
    Config = 0x03,
}

impl Register {
    pub const ALL: [Register; 4] = [
        Register::InputPort,
        Register::OutputPort,
        Register::Polarity,
        Register::Config,
    ];

    pub fn addr(self) -> u8 {
        self as u8
    }
}

impl From<Register> for u8 {
    fn from(reg: Register) -> Self {
        reg as u8
    }
}

impl TryFrom<u8> for Register {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(Register::InputPort),
            0x01 => Ok(Register::OutputPort),
            0x02 => Ok(Register::Polarity),
            0x03 => Ok(Register::Config),
            other => Err(other),
        }
    }
}

// 0x03 CONFIG: direction bit per pin

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinConfig {
    /// High impedance input (power-on default).
    Input = 1,
    /// Push-pull output driven from the output port register.
    Output = 0,
}

impl PinConfig {
    pub fn bits(self) -> u8 {
        self as u8
    }
}

impl From<bool> for PinConfig {
    fn from(bit: bool) -> Self {
        if bit {
            PinConfig::Input
        } else {
            PinConfig::Output
        }
    }
}

// 0x02 POLARITY: inversion bit per pin

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinPolarity {
    Normal = 0,
    Inverted = 1,
}

impl PinPolarity {
    pub fn bits(self) -> u8 {
        self as u8
    }
}

impl From<bool> for PinPolarity {
    fn from(bit: bool) -> Self {
        if bit {
            PinPolarity::Inverted
        } else {
            PinPolarity::Normal
        }
    }
}

// 0x00 INPUT / 0x01 OUTPUT: level bit per pin

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinLevel {
    Low = 0,
    High = 1,
}

impl PinLevel {
    pub fn bits(self) -> u8 {
        self as u8
    }

    pub fn is_high(self) -> bool {
        self == PinLevel::High
    }
}

impl From<bool> for PinLevel {
    fn from(bit: bool) -> Self {
        if bit {
            PinLevel::High
        } else {
            PinLevel::Low
        }
    }
}

impl From<PinLevel> for bool {
    fn from(level: PinLevel) -> Self {
        level.is_high()
    }
}

impl From<PinState> for PinLevel {
    fn from(state: PinState) -> Self {
        match state {
            PinState::Low => PinLevel::Low,
            PinState::High => PinLevel::High,
        }
    }
}

impl From<PinLevel> for PinState {
    fn from(level: PinLevel) -> Self {
        match level {
            PinLevel::Low => PinState::Low,
            PinLevel::High => PinState::High,
        }
    }
}

/// Whole-port register values.
pub mod config {
    pub const ALL_INPUTS: u8 = 0xFF;
    pub const ALL_OUTPUTS: u8 = 0x00;
    pub const ALL_NORMAL_POLARITY: u8 = 0x00;
    pub const ALL_INVERTED_POLARITY: u8 = 0xFF;
    pub const ALL_OUTPUTS_LOW: u8 = 0x00;
    pub const ALL_OUTPUTS_HIGH: u8 = 0xFF;
}

/// Bus addresses selected by the A2, A1, A0 strap pins.
pub mod addresses {
    pub const ADDR_000: u8 = 0x20;
    pub const ADDR_001: u8 = 0x21;
    pub const ADDR_010: u8 = 0x22;
    pub const ADDR_011: u8 = 0x23;
    pub const ADDR_100: u8 = 0x24;
    pub const ADDR_101: u8 = 0x25;
    pub const ADDR_110: u8 = 0x26;
    pub const ADDR_111: u8 = 0x27;

    pub const DEFAULT_ADDRESS: u8 = ADDR_000;

    /// Address for the given strap levels (true = tied high).
    pub const fn from_straps(a2: bool, a1: bool, a0: bool) -> u8 {
        ADDR_000 | ((a2 as u8) << 2) | ((a1 as u8) << 1) | (a0 as u8)
    }
}

/// Contents of the three writable registers, applied as one unit by
/// [`Tca9534::apply`](crate::Tca9534::apply).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PortSetup {
    pub output: u8,
    pub polarity: u8,
    pub direction: u8,
}

impl PortSetup {
    pub const fn new(output: u8, polarity: u8, direction: u8) -> Self {
        Self {
            output,
            polarity,
            direction,
        }
    }
}

impl Default for PortSetup {
    fn default() -> Self {
        PortSetup {
            output: config::ALL_OUTPUTS_LOW,
            polarity: config::ALL_NORMAL_POLARITY,
            direction: config::ALL_INPUTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strap_addresses_cover_the_range() {
        assert_eq!(addresses::from_straps(false, false, false), addresses::ADDR_000);
        assert_eq!(addresses::from_straps(false, true, true), addresses::ADDR_011);
        assert_eq!(addresses::from_straps(true, false, true), addresses::ADDR_101);
        assert_eq!(addresses::from_straps(true, true, true), addresses::ADDR_111);
    }

    #[test]
    fn register_addresses_match_the_chip() {
        let addrs: [u8; 4] = Register::ALL.map(u8::from);
        assert_eq!(addrs, [0x00, 0x01, 0x02, 0x03]);
        assert_eq!(Register::try_from(0x02u8), Ok(Register::Polarity));
        assert_eq!(Register::try_from(0x04u8), Err(0x04));
    }

    #[test]
    fn bit_meanings() {
        assert_eq!(PinConfig::Input.bits(), 1);
        assert_eq!(PinConfig::Output.bits(), 0);
        assert_eq!(PinPolarity::Inverted.bits(), 1);
        assert_eq!(PinLevel::from(PinState::High), PinLevel::High);
        assert_eq!(PinState::from(PinLevel::Low), PinState::Low);
    }

    #[test]
    fn default_setup_is_power_on_state() {
        assert_eq!(PortSetup::default(), PortSetup::new(0x00, 0x00, 0xFF));
    }
}
