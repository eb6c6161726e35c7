use crate::models::{ECLevel, MaskPattern, Version};

/// Header bytes budgeted on top of the payload (mode, length, terminator)
pub const HEADER_OVERHEAD: usize = 3;

// Data capacity in bytes.
// Index: [version - 1][ec_level]
const VERSION_CAPACITY: [[u16; 4]; 10] = [
    // L, M, Q, H
    [17, 14, 11, 7],
    [32, 26, 20, 14],
    [53, 42, 32, 24],
    [78, 62, 46, 34],
    [106, 84, 60, 44],
    [134, 106, 74, 58],
    [154, 122, 86, 64],
    [192, 152, 108, 84],
    [230, 180, 130, 98],
    [271, 213, 151, 119],
];

// 15-bit format words.
// Index: [ec_level][mask]
const FORMAT_INFO: [[u16; 8]; 4] = [
    [0x5412, 0x5125, 0x5E7C, 0x5B4B, 0x45F9, 0x40CE, 0x4F97, 0x4AA0], // Low
    [0x5125, 0x5412, 0x4B6B, 0x4E5C, 0x50EE, 0x55D9, 0x5A80, 0x5FB7], // Medium
    [0x17F4, 0x1261, 0x1D38, 0x180F, 0x06BD, 0x038A, 0x0CD3, 0x09E4], // Quartile
    [0x1689, 0x13BE, 0x1CE7, 0x19D0, 0x0762, 0x0255, 0x0D0C, 0x083B], // High
];

// Alignment centers for versions 2-10.
// Index: [version - 2]
const ALIGNMENT_CENTERS: [&[usize]; 9] = [
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
];

/// Data capacity in bytes for a version and level
pub fn capacity(version: Version, ec_level: ECLevel) -> usize {
    VERSION_CAPACITY[version.number() as usize - 1][ec_level.index()] as usize
}

/// Largest capacity of any tabulated version and level
pub fn max_capacity() -> usize {
    capacity(Version::MAX, ECLevel::L)
}

/// Format word for a level and mask
pub fn format_info(ec_level: ECLevel, mask: MaskPattern) -> u16 {
    FORMAT_INFO[ec_level.index()][mask.index()]
}

/// Alignment pattern centers for a version (empty for version 1)
pub fn alignment_pattern_positions(version: Version) -> &'static [usize] {
    match version.number() {
        1 => &[],
        v => ALIGNMENT_CENTERS[v as usize - 2],
    }
}
