//! CRC-16/MODBUS helpers for the sensor's response frames.
//!
//! Every response ends with a two-byte CRC trailer, low byte first,
//! computed over the preceding bytes. The driver's read path only accounts
//! for the trailer structurally (it is part of the expected frame length);
//! callers that want the checksum verified can run [`check_frame`] over
//! the bytes they read.

use crc::{Crc, CRC_16_MODBUS};

const CRC16: Crc<u16> = Crc::<u16>::new(&CRC_16_MODBUS);

/// CRC over the head of a frame (opcode, count and payload bytes).
pub fn frame_crc(data: &[u8]) -> u16 {
    CRC16.checksum(data)
}

/// Check the trailing `crc_lo, crc_hi` bytes of a complete frame.
///
/// Returns `false` for frames too short to carry a trailer.
pub fn check_frame(frame: &[u8]) -> bool {
    if frame.len() < 2 {
        return false;
    }
    let (head, trailer) = frame.split_at(frame.len() - 2);
    frame_crc(head) == u16::from_le_bytes([trailer[0], trailer[1]])
}
