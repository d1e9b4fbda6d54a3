use core::cell::RefCell;

use embassy_sync::blocking_mutex::{raw::RawMutex, Mutex};

use crate::{
    error::Error,
    pin::ExpanderPin,
    registers::{Pin, MAX_PIN},
    transport::Transport,
    Tca9534,
};

/// A [`Tca9534`] behind a blocking mutex.
///
/// The driver's read-modify-write pin operations are not atomic on their own.
/// Running them through [`lock`](Self::lock) makes each closure exclusive with
/// respect to every other user of this wrapper, including the pin handles
/// returned by [`pin`](Self::pin) and [`split`](Self::split).
///
/// Pick `M` for the execution model: `NoopRawMutex` when everything runs in
/// one context, `CriticalSectionRawMutex` when interrupts or other cores share
/// the expander.
pub struct SharedTca9534<M: RawMutex, T> {
    inner: Mutex<M, RefCell<Tca9534<T>>>,
}

impl<M: RawMutex, T: Transport> SharedTca9534<M, T> {
    pub fn new(device: Tca9534<T>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(device)),
        }
    }

    /// Run `f` with exclusive access to the driver.
    ///
    /// Calling `lock` again from inside `f` panics.
    pub fn lock<R>(&self, f: impl FnOnce(&mut Tca9534<T>) -> R) -> R {
        self.inner.lock(|device| f(&mut device.borrow_mut()))
    }

    pub fn into_inner(self) -> Tca9534<T> {
        self.inner.into_inner().into_inner()
    }

    /// Handle for a single pin. No bus traffic.
    pub fn pin(&self, pin: Pin) -> Result<ExpanderPin<'_, M, T>, Error<T::Error>> {
        if pin > MAX_PIN {
            return Err(Error::InvalidPin(pin));
        }
        Ok(ExpanderPin::new(self, pin))
    }

    /// Handles for all eight pins, index = pin.
    pub fn split(&self) -> [ExpanderPin<'_, M, T>; 8] {
        core::array::from_fn(|i| ExpanderPin::new(self, i as Pin))
    }
}
