//! Renderers for finished symbols
//!
//! - Terminal: block characters with a quiet zone
//! - Image: grayscale raster / PNG via the `image` crate
//! - SVG: one path segment per dark module

pub mod raster;
pub mod svg;
pub mod terminal;
