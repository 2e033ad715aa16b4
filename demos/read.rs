use am2320::{Am2320, I2cBus, I2cChannel};
use rppal::{hal::Delay, i2c::I2c};

/// Opens a fresh rppal handle per transaction; dropping it releases the bus.
struct RpiBus;

struct RpiChannel(I2c);

impl I2cBus for RpiBus {
    type Error = rppal::i2c::Error;
    type Channel = RpiChannel;

    fn open(&mut self, address: u8) -> Result<RpiChannel, Self::Error> {
        let mut i2c = I2c::new()?;
        i2c.set_slave_address(u16::from(address))?;
        Ok(RpiChannel(i2c))
    }
}

impl I2cChannel for RpiChannel {
    type Error = rppal::i2c::Error;

    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.0.write(bytes).map(|_| ())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.0.read(buf)
    }
}

fn main() {
    let mut am2320 = Am2320::new(RpiBus, Delay::new());

    // wake, poll, print
    println!("{:?}", am2320.read());
}
