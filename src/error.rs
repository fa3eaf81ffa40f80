use derive_more::Display;

use crate::engine::WaitError;
use crate::pixel_buffer::{CapacityExceeded, OutOfRange};

/// Errors reported by strip operations
///
/// `E` is the error type of the pulse engine driving the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Error<E> {
    /// Malformed configuration or handle
    #[display("invalid argument")]
    InvalidArgument,
    /// Pixel index outside of the strip
    #[display("pixel index out of range")]
    InvalidSize,
    /// Configuration the driver refuses to handle
    #[display("not supported")]
    NotSupported,
    /// Pixel buffer does not fit
    #[display("out of memory")]
    NoMemory,
    /// No free hardware channel
    #[display("no free channel")]
    NotFound,
    /// A transmission is still in flight
    #[display("transmission not finished")]
    NotFinished,
    /// Failure reported by the pulse engine
    #[display("pulse engine error: {_0:?}")]
    Engine(E),
}

impl<E: core::fmt::Debug> core::error::Error for Error<E> {}

impl<E> From<OutOfRange> for Error<E> {
    fn from(_: OutOfRange) -> Self {
        Self::InvalidSize
    }
}

impl<E> From<CapacityExceeded> for Error<E> {
    fn from(_: CapacityExceeded) -> Self {
        Self::NoMemory
    }
}

impl<E> From<WaitError<E>> for Error<E> {
    fn from(error: WaitError<E>) -> Self {
        match error {
            WaitError::Timeout => Self::NotFinished,
            WaitError::Engine(error) => Self::Engine(error),
        }
    }
}

/// Result type of strip operations
pub type Result<T, E> = core::result::Result<T, Error<E>>;
