//! rust_qr_gen - small QR-style symbol generator
//!
//! Turns a short text payload into a square grid of dark/light modules laid out
//! the way QR symbols are: capacity-driven version and error-level selection,
//! finder/timing/alignment patterns, byte-mode data, masking and format info.
//!
//! ```
//! let symbol = rust_qr_gen::encode("http://localhost:8080").unwrap();
//! assert_eq!(symbol.version().number(), 2);
//! let text = rust_qr_gen::render::terminal::to_terminal_string(
//!     &symbol,
//!     &rust_qr_gen::RenderOptions::default(),
//! );
//! assert!(text.ends_with('\n'));
//! ```
//!
//! The symbols carry no Reed-Solomon codewords and only versions 1-10 are
//! tabulated, so they are QR-like artifacts rather than scanner-grade codes.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Environment-driven render defaults
pub mod config;
pub(crate) mod debug;
/// Symbol encoding pipeline (sizing, patterns, data, masking, format info)
pub mod encoder;
/// Error types
pub mod error;
/// Core data structures (Symbol, BitMatrix, Version, etc.)
#[allow(missing_docs)]
pub mod models;
/// Terminal, raster and SVG output
pub mod render;

pub use config::RenderOptions;
pub use error::{EncodeError, ErrorKind, RenderError};
pub use models::{BitMatrix, ECLevel, MaskPattern, Stage, Symbol, Version};

use rayon::prelude::*;

/// Encode a text payload into a finished symbol
pub fn encode(text: &str) -> Result<Symbol, EncodeError> {
    encode_bytes(text.as_bytes())
}

/// Encode raw bytes into a finished symbol
pub fn encode_bytes(payload: &[u8]) -> Result<Symbol, EncodeError> {
    Symbol::new(payload)?.generate()
}

/// Encode independent payloads in parallel; results keep input order
///
/// Each payload gets its own symbol, so no state is shared between them.
pub fn encode_batch<S: AsRef<str> + Sync>(texts: &[S]) -> Vec<Result<Symbol, EncodeError>> {
    texts.par_iter().map(|t| encode(t.as_ref())).collect()
}
