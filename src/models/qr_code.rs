use std::fmt;

use super::BitMatrix;

/// Symbol version (1-10). Only the first ten size classes are tabulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest supported version
    pub const MIN: Version = Version(1);
    /// Largest supported version
    pub const MAX: Version = Version(10);

    /// Create a version, `None` outside 1-10
    pub fn new(number: u8) -> Option<Self> {
        (Self::MIN.0..=Self::MAX.0)
            .contains(&number)
            .then_some(Version(number))
    }

    /// Get the version number
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn size(&self) -> usize {
        21 + 4 * (self.0 as usize - 1)
    }

    /// All supported versions in ascending order
    pub fn all() -> impl Iterator<Item = Version> {
        (Self::MIN.0..=Self::MAX.0).map(Version)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L = 0,
    /// Medium (~15% recovery capacity)
    M = 1,
    /// Quartile (~25% recovery capacity)
    Q = 2,
    /// High (~30% recovery capacity)
    H = 3,
}

impl ECLevel {
    /// Levels in the order the sizer tries them
    pub const STRONGEST_FIRST: [ECLevel; 4] = [ECLevel::H, ECLevel::Q, ECLevel::M, ECLevel::L];

    /// Row index into the capacity and format tables
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ECLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            ECLevel::L => "L",
            ECLevel::M => "M",
            ECLevel::Q => "Q",
            ECLevel::H => "H",
        };
        f.write_str(letter)
    }
}

/// Mask pattern (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskPattern {
    /// (i + j) % 2 == 0
    Pattern0 = 0,
    /// i % 2 == 0
    Pattern1 = 1,
    /// j % 3 == 0
    Pattern2 = 2,
    /// (i + j) % 3 == 0
    Pattern3 = 3,
    /// (i/2 + j/3) % 2 == 0
    Pattern4 = 4,
    /// (i*j)%2 + (i*j)%3 == 0
    Pattern5 = 5,
    /// ((i*j)%2 + (i*j)%3) % 2 == 0
    Pattern6 = 6,
    /// ((i+j)%2 + (i*j)%3) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// All eight candidates in index order
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0,
        MaskPattern::Pattern1,
        MaskPattern::Pattern2,
        MaskPattern::Pattern3,
        MaskPattern::Pattern4,
        MaskPattern::Pattern5,
        MaskPattern::Pattern6,
        MaskPattern::Pattern7,
    ];

    /// Get mask pattern from its 3-bit index
    pub fn from_bits(bits: u8) -> Option<Self> {
        Self::ALL.get(bits as usize).copied()
    }

    /// Column index into the format table
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Check if module at row `i`, column `j` should be masked
    pub fn is_masked(&self, i: usize, j: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (i + j) % 2 == 0,
            MaskPattern::Pattern1 => i % 2 == 0,
            MaskPattern::Pattern2 => j % 3 == 0,
            MaskPattern::Pattern3 => (i + j) % 3 == 0,
            MaskPattern::Pattern4 => (i / 2 + j / 3) % 2 == 0,
            MaskPattern::Pattern5 => ((i * j) % 2 + (i * j) % 3) == 0,
            MaskPattern::Pattern6 => (((i * j) % 2) + ((i * j) % 3)) % 2 == 0,
            MaskPattern::Pattern7 => (((i + j) % 2) + ((i * j) % 3)) % 2 == 0,
        }
    }
}

/// Where a symbol is in the generation pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// Grids allocated, nothing drawn
    Uninitialized,
    /// Finder, separator, timing and alignment patterns drawn
    PatternsPlaced,
    /// Payload serialized into the padded bitstream
    DataEncoded,
    /// Bitstream written into the data cells
    DataPlaced,
    /// Best mask committed
    Masked,
    /// Format information and dark module written; the symbol is complete
    FormatEmbedded,
}

/// A generated (or in-progress) symbol
///
/// Created by [`Symbol::new`] and completed by [`Symbol::generate`]. Once complete
/// only read access is exposed.
#[derive(Debug, Clone)]
pub struct Symbol {
    pub(crate) version: Version,
    pub(crate) error_level: ECLevel,
    pub(crate) mask: MaskPattern,
    /// Module grid (true = dark)
    pub(crate) modules: BitMatrix,
    /// Cells owned by structural patterns (true = function)
    pub(crate) function: BitMatrix,
    pub(crate) payload: Vec<u8>,
    pub(crate) stage: Stage,
}

impl Symbol {
    /// Symbol version
    pub fn version(&self) -> Version {
        self.version
    }

    /// Width and height in modules
    pub fn size(&self) -> usize {
        self.version.size()
    }

    /// Error correction level chosen for the payload
    pub fn error_level(&self) -> ECLevel {
        self.error_level
    }

    /// Committed mask (Pattern0 until masking runs)
    pub fn mask(&self) -> MaskPattern {
        self.mask
    }

    /// Raw payload bytes
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Current pipeline stage
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Whether generation has finished
    pub fn is_complete(&self) -> bool {
        self.stage == Stage::FormatEmbedded
    }

    /// Module grid (true = dark)
    pub fn modules(&self) -> &BitMatrix {
        &self.modules
    }

    /// Function-cell grid (true = reserved by a structural pattern)
    pub fn function_modules(&self) -> &BitMatrix {
        &self.function
    }

    /// Whether the module at column `x`, row `y` is dark
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.modules.get(x, y)
    }

    /// Whether the module at column `x`, row `y` is a function cell
    pub fn is_function(&self, x: usize, y: usize) -> bool {
        self.function.get(x, y)
    }

    /// Rows of the module grid, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = Vec<bool>> + '_ {
        let size = self.size();
        (0..size).map(move |y| (0..size).map(|x| self.modules.get(x, y)).collect())
    }
}
