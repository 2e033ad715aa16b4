//! AM2320 register map and command opcodes.
//!
//! Addresses follow the datasheet's register table. The datasheet publishes
//! the device address in its 8-bit write form (`0xB8`).

/// 7-bit I2C address of the sensor.
pub const DEVICE_I2C_ADDR: u8 = 0xB8 >> 1;

/// No-op probe byte that brings the sensor out of dormancy.
pub const WAKE_UP: u8 = 0x00;
/// Read a block of registers.
pub const READ_REGISTERS: u8 = 0x03;
/// Write a block of registers. Part of the device command set; this driver
/// never issues it.
pub const WRITE_REGISTERS: u8 = 0x10;

pub const HUMIDITY_HIGH: u8 = 0x00;
pub const HUMIDITY_LOW: u8 = 0x01;
pub const TEMPERATURE_HIGH: u8 = 0x02;
pub const TEMPERATURE_LOW: u8 = 0x03;
pub const MODEL_LOW: u8 = 0x08;
pub const MODEL_HIGH: u8 = 0x09;
pub const VERSION_NUMBER: u8 = 0x0A;
pub const DEVICE_ID_0: u8 = 0x0B;
pub const DEVICE_ID_1: u8 = 0x0C;
pub const DEVICE_ID_2: u8 = 0x0D;

/// Last addressable register.
pub const REGISTER_MAX: u8 = DEVICE_ID_2;

/// Bytes a read response carries on top of the payload: opcode echo, count
/// echo and the two CRC trailer bytes.
pub const RESPONSE_OVERHEAD: usize = 4;
