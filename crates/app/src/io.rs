//! PNG import and export

use std::path::Path;

use anyhow::{Context, Result};
use painting::{FlatRaster, LayeredCanvas, validate_dimensions};
use tracing::info;

/// Load a 64x64 skin PNG into the Base layer of a new canvas
pub fn load_skin(path: &Path) -> Result<LayeredCanvas> {
    let image = image::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?
        .to_rgba8();
    validate_dimensions(image.width(), image.height())
        .with_context(|| format!("cannot load {}", path.display()))?;
    let canvas = LayeredCanvas::from_rgba(image.as_raw())?;
    info!("Loaded skin from {}", path.display());
    Ok(canvas)
}

/// Encode a flattened raster as PNG
pub fn save_png(raster: &FlatRaster, path: &Path) -> Result<()> {
    let image = image::RgbaImage::from_raw(raster.width(), raster.height(), raster.as_bytes().to_vec())
        .context("raster size does not match its dimensions")?;
    image
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(())
}
