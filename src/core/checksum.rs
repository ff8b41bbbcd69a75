//! CRC16 checksum of EMVCo QR payloads
//!
//! EMVCo mandates CRC-16/CCITT-FALSE (catalogued as CRC-16/IBM-3740):
//! polynomial `0x1021`, initial register `0xFFFF`, no input or output
//! reflection and no final XOR. Bank apps reject payloads checksummed with
//! any of the neighbouring CRC16 variants.

use crc::{CRC_16_IBM_3740, Crc};

const CRC16_CCITT_FALSE: Crc<u16> = Crc::<u16>::new(&CRC_16_IBM_3740);

/// Raw CRC16 register over `bytes`
pub fn crc16_value(bytes: &[u8]) -> u16 {
    CRC16_CCITT_FALSE.checksum(bytes)
}

/// CRC16 of `s` as 4 uppercase, zero-padded hex digits
pub fn crc16(s: &str) -> String {
    format!("{:04X}", crc16_value(s.as_bytes()))
}
