/// Byte-mode bitstream construction
use crate::models::{ECLevel, Version};

use super::tables::capacity;

/// Byte mode indicator (0100)
const MODE_BYTE: u32 = 0b0100;
/// Pad codewords alternated after the terminator
const PAD_BYTES: [u8; 2] = [0xEC, 0x11];

/// MSB-first bit accumulator
#[derive(Debug, Default)]
struct BitWriter {
    bits: Vec<bool>,
}

impl BitWriter {
    fn with_capacity(bits: usize) -> Self {
        Self {
            bits: Vec::with_capacity(bits),
        }
    }

    fn push_bits(&mut self, value: u32, count: usize) {
        for i in (0..count).rev() {
            self.bits.push(((value >> i) & 1) != 0);
        }
    }

    fn len(&self) -> usize {
        self.bits.len()
    }

    fn into_bytes(self) -> Vec<u8> {
        self.bits
            .chunks(8)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0u8, |byte, (i, &bit)| byte | ((bit as u8) << (7 - i)))
            })
            .collect()
    }
}

/// Serialize `payload` in byte mode, padded to exactly `capacity_bytes` bytes.
///
/// Layout: mode (4 bits), length (8 bits, low byte of the payload length),
/// payload bytes, up to four terminator zeros, zero fill to a byte boundary, then
/// alternating `0xEC`/`0x11`. No error-correction codewords are appended.
pub fn encode_byte_mode(payload: &[u8], capacity_bytes: usize) -> Vec<u8> {
    let max_bits = capacity_bytes * 8;
    let mut writer = BitWriter::with_capacity(max_bits);

    writer.push_bits(MODE_BYTE, 4);
    writer.push_bits((payload.len() & 0xFF) as u32, 8);
    for &byte in payload {
        writer.push_bits(byte as u32, 8);
    }

    let terminator = 4.min(max_bits.saturating_sub(writer.len()));
    writer.push_bits(0, terminator);

    let partial = writer.len() % 8;
    if partial != 0 {
        writer.push_bits(0, 8 - partial);
    }

    for &pad in PAD_BYTES.iter().cycle() {
        if writer.len() >= max_bits {
            break;
        }
        writer.push_bits(pad as u32, 8);
    }

    writer.into_bytes()
}

/// Serialize `payload` for the given version and level
pub fn encode_for(payload: &[u8], version: Version, ec_level: ECLevel) -> Vec<u8> {
    encode_byte_mode(payload, capacity(version, ec_level))
}
