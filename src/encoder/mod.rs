//! Symbol encoding pipeline
//!
//! Components run strictly in this order:
//! sizing -> function patterns -> byte-mode bitstream -> data placement ->
//! mask selection -> format information.

/// Byte-mode bitstream construction
pub mod bitstream;
/// Format information and dark module
pub mod format;
/// Finder, separator, timing and alignment patterns
pub mod function_patterns;
/// Mask application, penalty scoring and selection
pub mod mask;
/// `Symbol::new` / `Symbol::generate`
pub mod pipeline;
/// Zigzag data placement
pub mod placement;
/// Version and error-level selection
pub mod sizing;
/// Capacity, format and alignment tables
pub mod tables;
