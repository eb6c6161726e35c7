/// Format information embedding
use crate::encoder::tables::format_info;
use crate::models::{BitMatrix, ECLevel, MaskPattern};

/// Format info is 15 bits, written LSB first around the top-left finder and
/// mirrored along column 8 toward the bottom-left. Later writes win where cells
/// coincide.
pub struct FormatInfo {
    /// Error correction level encoded in the word
    pub ec_level: ECLevel,
    /// Mask encoded in the word
    pub mask_pattern: MaskPattern,
}

impl FormatInfo {
    /// Format info for a level and mask
    pub fn new(ec_level: ECLevel, mask_pattern: MaskPattern) -> Self {
        Self {
            ec_level,
            mask_pattern,
        }
    }

    /// The 15-bit word for this level and mask
    pub fn bits(&self) -> u16 {
        format_info(self.ec_level, self.mask_pattern)
    }

    /// Write the format bits and the dark module, marking every cell as function
    pub fn embed(&self, modules: &mut BitMatrix, function: &mut BitMatrix) {
        let size = modules.width();
        let word = self.bits();
        let mut put = |x: usize, y: usize, dark: bool| {
            modules.set(x, y, dark);
            function.set(x, y, true);
        };

        for i in 0..15 {
            let bit = (word >> i) & 1 == 1;
            match i {
                0..=5 => {
                    put(8, i, bit);
                    put(i, 8, bit);
                }
                6 => {
                    put(8, 7, bit);
                    put(7, 8, bit);
                }
                7 => put(8, 8, bit),
                8 => put(7, 8, bit),
                _ => {
                    put(14 - i, 8, bit);
                    put(8, size - 15 + i, bit);
                }
            }
        }

        // Dark module
        put(8, size - 8, true);
    }
}
