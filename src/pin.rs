use core::fmt::Debug;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal::digital::{self, InputPin, OutputPin, StatefulOutputPin};

use crate::{
    error::Error,
    registers::{Pin, PinConfig, PinLevel, PinPolarity},
    shared::SharedTca9534,
    transport::Transport,
};

/// One expander line as an `embedded-hal` digital pin.
///
/// Handles borrow the [`SharedTca9534`] they came from, so any number of
/// them can be live at once. Every call is one locked driver operation.
pub struct ExpanderPin<'a, M: RawMutex, T> {
    id: Pin,
    shared: &'a SharedTca9534<M, T>,
}

impl<'a, M: RawMutex, T: Transport> ExpanderPin<'a, M, T> {
    pub(crate) fn new(shared: &'a SharedTca9534<M, T>, id: Pin) -> Self {
        Self { id, shared }
    }

    pub fn id(&self) -> Pin {
        self.id
    }

    pub fn set_config(&mut self, config: PinConfig) -> Result<(), Error<T::Error>> {
        self.shared.lock(|dev| dev.set_pin_config(self.id, config))
    }

    pub fn config(&mut self) -> Result<PinConfig, Error<T::Error>> {
        self.shared.lock(|dev| dev.read_pin_config(self.id))
    }

    pub fn set_polarity(&mut self, polarity: PinPolarity) -> Result<(), Error<T::Error>> {
        self.shared.lock(|dev| dev.set_pin_polarity(self.id, polarity))
    }

    /// Latch `level` first, then switch the pin to output.
    pub fn set_as_output(&mut self, level: PinLevel) -> Result<(), Error<T::Error>> {
        self.shared.lock(|dev| {
            dev.set_pin_output(self.id, level)?;
            dev.set_pin_config(self.id, PinConfig::Output)
        })
    }

    pub fn set_as_input(&mut self) -> Result<(), Error<T::Error>> {
        self.set_config(PinConfig::Input)
    }

    pub fn level(&mut self) -> Result<PinLevel, Error<T::Error>> {
        self.shared.lock(|dev| dev.read_pin_input(self.id))
    }

    pub fn set_level(&mut self, level: PinLevel) -> Result<(), Error<T::Error>> {
        self.shared.lock(|dev| dev.set_pin_output(self.id, level))
    }
}

impl<M: RawMutex, T> digital::ErrorType for ExpanderPin<'_, M, T>
where
    T: Transport,
    T::Error: Debug,
{
    type Error = Error<T::Error>;
}

impl<M: RawMutex, T> OutputPin for ExpanderPin<'_, M, T>
where
    T: Transport,
    T::Error: Debug,
{
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set_level(PinLevel::Low)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set_level(PinLevel::High)
    }
}

impl<M: RawMutex, T> StatefulOutputPin for ExpanderPin<'_, M, T>
where
    T: Transport,
    T::Error: Debug,
{
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        let id = self.id;
        self.shared
            .lock(|dev| dev.read_pin_output(id))
            .map(PinLevel::is_high)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        self.is_set_high().map(|high| !high)
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        let id = self.id;
        self.shared.lock(|dev| dev.toggle_pin_output(id))
    }
}

impl<M: RawMutex, T> InputPin for ExpanderPin<'_, M, T>
where
    T: Transport,
    T::Error: Debug,
{
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.level().map(PinLevel::is_high)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}
