//! Transport seam between the driver and a platform's I2C access layer.
//!
//! The sensor is polled through short, self-contained transactions, so the
//! driver never holds on to the bus: it opens a channel, performs one
//! exchange and lets the channel go out of scope. Platforms adapt their
//! I2C access layer by implementing these two traits.

use core::fmt::Debug;

/// An I2C bus that hands out per-transaction channels.
///
/// The driver opens a fresh channel for every operation and drops it before
/// returning, so implementations may acquire the underlying bus handle in
/// [`open`](I2cBus::open) and release it in `Drop`.
pub trait I2cBus {
    /// Error reported by `open` and by the channels it produces.
    type Error: Debug;
    /// Handle to one device address, valid for a single transaction.
    type Channel: I2cChannel<Error = Self::Error>;

    /// Acquire a channel to the device at the given 7-bit address.
    fn open(&mut self, address: u8) -> Result<Self::Channel, Self::Error>;
}

/// An open channel to one device address.
///
/// There is no explicit close; releasing the channel is dropping it.
pub trait I2cChannel {
    type Error: Debug;

    /// Write raw bytes to the device.
    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Read into `buf`, returning the number of bytes actually
    /// transferred. A short count is not an error at this layer; the
    /// caller decides whether the frame is complete.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}
