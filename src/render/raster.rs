use std::path::Path;

use image::{GrayImage, ImageBuffer, Luma};

use crate::config::RenderOptions;
use crate::error::RenderError;
use crate::models::Symbol;

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

/// Rasterize a symbol: `module_scale` pixels per module, light quiet zone
pub fn to_image(symbol: &Symbol, options: &RenderOptions) -> GrayImage {
    let quiet = options.quiet_zone;
    let scale = options.module_scale.max(1) as usize;
    let side = ((symbol.size() + 2 * quiet) * scale) as u32;

    ImageBuffer::from_fn(side, side, |px, py| {
        let mx = (px as usize / scale).checked_sub(quiet);
        let my = (py as usize / scale).checked_sub(quiet);
        match (mx, my) {
            (Some(x), Some(y)) if symbol.is_dark(x, y) => DARK,
            _ => LIGHT,
        }
    })
}

/// Render and write a PNG
pub fn save_png<P: AsRef<Path>>(
    symbol: &Symbol,
    path: P,
    options: &RenderOptions,
) -> Result<(), RenderError> {
    if !symbol.is_complete() {
        return Err(RenderError::Incomplete);
    }
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    to_image(symbol, options).save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}
