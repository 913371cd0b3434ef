//! Output encoders. The output path's extension picks the format: `.jpg` and
//! `.jpeg` go through `jpeg-encoder`, everything else through `image`.
pub mod jpeg;
pub mod raster;

use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::types::PixelBuffer;

pub fn save_image(canvas: &PixelBuffer, output: &Path, jpeg_quality: u8) -> Result<()> {
    let is_jpeg = output
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("jpg") || e.eq_ignore_ascii_case("jpeg"))
        .unwrap_or(false);

    info!("Saving {}x{} canvas to {:?}", canvas.width(), canvas.height(), output);
    if is_jpeg {
        jpeg::write_rgb_jpeg(output, canvas, jpeg_quality)
    } else {
        raster::write_raster(output, canvas)
    }
}
