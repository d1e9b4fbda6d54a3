use core::fmt;

use embedded_hal::digital;

/// Driver error, generic over the transport's own error type.
///
/// The transport error is carried along for diagnostics only; the driver
/// never looks inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E = ()> {
    /// Pin index outside 0-7. Raised before touching the bus.
    InvalidPin(u8),
    /// Raw register address that is not one of the four chip registers.
    InvalidRegister(u8),
    /// A plain write transaction failed.
    TransportWrite(E),
    /// A read, or the register-select write of a write-then-read, failed.
    TransportRead(E),
    /// The transport is missing one of its operations.
    NullTransport,
}

impl<E> Error<E> {
    /// Status code of the C-flavoured API: 0 is success, errors are negative.
    pub fn code(&self) -> i8 {
        match self {
            Error::InvalidPin(_) | Error::InvalidRegister(_) => -1,
            Error::TransportWrite(_) => -2,
            Error::TransportRead(_) => -3,
            Error::NullTransport => -4,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Error::TransportWrite(_) | Error::TransportRead(_))
    }

    /// Drops the transport payload, keeping only the kind.
    pub fn discard_cause(self) -> Error {
        match self {
            Error::InvalidPin(pin) => Error::InvalidPin(pin),
            Error::InvalidRegister(reg) => Error::InvalidRegister(reg),
            Error::TransportWrite(_) => Error::TransportWrite(()),
            Error::TransportRead(_) => Error::TransportRead(()),
            Error::NullTransport => Error::NullTransport,
        }
    }
}

impl<E> fmt::Display for Error<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPin(pin) => write!(f, "invalid pin {} (must be 0-7)", pin),
            Error::InvalidRegister(reg) => write!(f, "invalid register address {:#04x}", reg),
            Error::TransportWrite(err) => write!(f, "I2C write failed: {:?}", err),
            Error::TransportRead(err) => write!(f, "I2C read failed: {:?}", err),
            Error::NullTransport => write!(f, "transport is missing a required operation"),
        }
    }
}

impl<E> core::error::Error for Error<E> where E: fmt::Debug {}

impl<E> digital::Error for Error<E>
where
    E: fmt::Debug,
{
    fn kind(&self) -> digital::ErrorKind {
        digital::ErrorKind::Other
    }
}
