//! Driver for the AOSONG AM2320 I2C temperature & humidity sensor.
//!
//! The sensor powers its I2C front end down between polls, so every poll
//! is a two-phase exchange: a wake pulse the sensor will not acknowledge,
//! then a single read-register transaction after a short settle time.
//! [`Am2320`] performs both phases over any platform implementing the
//! [`I2cBus`] seam, with waits driven by an `embedded-hal` delay provider.
//!
//! ```no_run
//! # struct Bus;
//! # struct Chan;
//! # impl am2320::I2cBus for Bus {
//! #     type Error = ();
//! #     type Channel = Chan;
//! #     fn open(&mut self, _: u8) -> Result<Chan, ()> { Ok(Chan) }
//! # }
//! # impl am2320::I2cChannel for Chan {
//! #     type Error = ();
//! #     fn write(&mut self, _: &[u8]) -> Result<(), ()> { Ok(()) }
//! #     fn read(&mut self, _: &mut [u8]) -> Result<usize, ()> { Ok(0) }
//! # }
//! # struct Delay;
//! # impl embedded_hal::blocking::delay::DelayUs<u16> for Delay {
//! #     fn delay_us(&mut self, _: u16) {}
//! # }
//! # fn bus_and_delay() -> (Bus, Delay) { (Bus, Delay) }
//! let (bus, delay) = bus_and_delay();
//! let mut am2320 = am2320::Am2320::new(bus, delay);
//! if let Ok(m) = am2320.read() {
//!     println!("{:.1} C, {:.1} %RH", m.temperature, m.humidity);
//! }
//! ```

pub mod crc;
pub mod error;
pub mod registers;
pub mod transport;

pub use error::Error;
pub use transport::{I2cBus, I2cChannel};

use embedded_hal::blocking::delay;
use registers::*;

/// Minimum settle time after the wake pulse, in microseconds.
pub const WAKE_SETTLE_US: u16 = 1000;
/// Minimum wait between issuing a read command and fetching the response,
/// in microseconds.
pub const RESPONSE_DELAY_US: u16 = 1600;

/// One decoded reading, one decimal place of precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Degrees Celsius.
    pub temperature: f64,
    /// Percent relative humidity.
    pub humidity: f64,
}

/// AM2320 driver over a bus transport `B` and a delay provider `D`.
pub struct Am2320<B, D> {
    bus: B,
    delay: D,
}

impl<B, D> Am2320<B, D>
where
    B: I2cBus,
    D: delay::DelayUs<u16>,
{
    pub fn new(bus: B, delay: D) -> Self {
        Self { bus, delay }
    }

    /// Wake the sensor up; it goes to sleep between polls to not warm up
    /// and affect the humidity reading.
    ///
    /// A dormant sensor does not ACK the probe byte, so the write outcome
    /// is discarded. Only failure to open a channel is reported.
    pub fn wake_up(&mut self) -> Result<(), Error<B::Error>> {
        let mut channel = self
            .bus
            .open(DEVICE_I2C_ADDR)
            .map_err(Error::ChannelUnavailable)?;
        // expected to NAK while dormant, never escalated
        let _ = channel.write(&[WAKE_UP]);
        drop(channel);
        // wait at least 0.8ms, at most 3ms
        self.delay.delay_us(WAKE_SETTLE_US);
        Ok(())
    }

    /// Read `count` registers starting at `start_address`.
    ///
    /// Callers keep the block inside the mapped range
    /// (`0x00..=`[`registers::REGISTER_MAX`]) and wake the sensor first;
    /// neither is checked here. Returns the payload bytes only, with the
    /// opcode/count echo and the CRC trailer stripped. The trailer is
    /// accounted for in the length check but its checksum is not verified;
    /// see [`crate::crc::check_frame`].
    pub fn read_registers(
        &mut self,
        start_address: u8,
        count: u8,
    ) -> Result<Vec<u8>, Error<B::Error>> {
        let mut channel = self
            .bus
            .open(DEVICE_I2C_ADDR)
            .map_err(Error::ChannelUnavailable)?;

        // send command, then give the sensor time to prepare the response
        channel
            .write(&[READ_REGISTERS, start_address, count])
            .map_err(Error::Transport)?;
        self.delay.delay_us(RESPONSE_DELAY_US);

        // response layout:
        // byte 0: opcode echo (0x03)
        // byte 1: count echo
        // bytes 2..2+count: payload
        // last 2 bytes: CRC lsb, CRC msb
        let expected = count as usize + RESPONSE_OVERHEAD;
        let mut data = vec![0; expected];
        let received = channel.read(&mut data).map_err(Error::Transport)?;

        if received != expected || data[0] != READ_REGISTERS || data[1] != count {
            data.truncate(received);
            return Err(Error::MalformedResponse {
                length: received,
                data,
            });
        }

        Ok(data[2..2 + count as usize].to_vec())
    }

    /// Poll the measurement block and decode it.
    ///
    /// The raw temperature field is divided by 10 as-is. The device
    /// encodes sub-zero temperatures sign-magnitude with the high bit set,
    /// which this decode does not mask, so readings below 0 °C come back
    /// as large positive values.
    pub fn read_temp_humidity(&mut self) -> Result<Measurement, Error<B::Error>> {
        let data = self.read_registers(HUMIDITY_HIGH, 4)?;
        // humidity msb, humidity lsb, temperature msb, temperature lsb
        let humidity = combine_bytes(data[0], data[1]);
        let temperature = combine_bytes(data[2], data[3]);
        Ok(Measurement {
            temperature: f64::from(temperature) / 10.0,
            humidity: f64::from(humidity) / 10.0,
        })
    }

    /// Wake the sensor and poll it in one call.
    pub fn read(&mut self) -> Result<Measurement, Error<B::Error>> {
        self.wake_up()?;
        self.read_temp_humidity()
    }

    /// Model number from the identity block.
    pub fn read_model(&mut self) -> Result<u16, Error<B::Error>> {
        let data = self.read_registers(MODEL_LOW, 2)?;
        Ok(combine_bytes(data[1], data[0]))
    }

    /// Firmware version byte.
    pub fn read_firmware_version(&mut self) -> Result<u8, Error<B::Error>> {
        let data = self.read_registers(VERSION_NUMBER, 1)?;
        Ok(data[0])
    }

    /// The three device id bytes.
    pub fn read_device_id(&mut self) -> Result<[u8; 3], Error<B::Error>> {
        let data = self.read_registers(DEVICE_ID_0, 3)?;
        Ok([data[0], data[1], data[2]])
    }
}

fn combine_bytes(msb: u8, lsb: u8) -> u16 {
    (u16::from(msb) << 8) | u16::from(lsb)
}
