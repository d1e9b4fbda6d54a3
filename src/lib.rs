#![cfg_attr(not(test), no_std)]
//! # tca9534
//!
//! Blocking driver for the TCA9534 8-bit I2C GPIO expander.
//!
//! The chip has four one-byte registers (input, output, polarity inversion,
//! configuration). The driver maps port- and pin-level operations onto them
//! over any [`Transport`], which every `embedded_hal::i2c::I2c` bus already is.
//! It allocates nothing and keeps no copy of the chip's registers.
//!
//! ```rust,ignore
//! use tca9534::{addresses, PinConfig, PinLevel, Tca9534};
//!
//! let mut expander = Tca9534::new(&mut i2c, addresses::ADDR_000)?;
//! expander.reset()?;
//!
//! expander.set_pin_config(0, PinConfig::Output)?;
//! expander.set_pin_output(0, PinLevel::High)?;
//!
//! let button = expander.read_pin_input(4)?;
//! ```
//!
//! ## Sharing
//!
//! Pin setters read the port register, change one bit and write it back.
//! Two contexts doing that at once on one expander can drop an update. Wrap the
//! driver in a [`SharedTca9534`] and use its [`ExpanderPin`] handles when more
//! than one context needs the pins.
//!
//! ## Features
//!
//! - `defmt`: log through `defmt` and derive `defmt::Format` for public types.
//! - `log`: log through the `log` facade.

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

mod driver;
pub mod error;
pub mod pin;
pub mod registers;
pub mod shared;
pub mod transport;

pub use driver::Tca9534;
pub use error::Error;
pub use pin::ExpanderPin;
pub use registers::{
    addresses, config, Pin, PinConfig, PinLevel, PinPolarity, PortSetup, Register, MAX_PIN,
    N_PINS,
};
pub use shared::SharedTca9534;
pub use transport::{
    ops::{I2cOps, OpsError, OpsTransport},
    Transport,
};
