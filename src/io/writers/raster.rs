use std::path::Path;

use image::buffer::ConvertBuffer;
use image::{ImageFormat, RgbaImage};

use crate::error::{Error, Result};
use crate::types::PixelBuffer;

/// Encode with the `image` crate in the format named by the extension, as
/// 8-bit RGBA.
pub fn write_raster(output: &Path, canvas: &PixelBuffer) -> Result<()> {
    let format = ImageFormat::from_path(output).map_err(|_| Error::UnsupportedFormat {
        path: output.to_path_buf(),
    })?;
    if !format.can_write() {
        return Err(Error::UnsupportedFormat {
            path: output.to_path_buf(),
        });
    }

    let rgba: RgbaImage = canvas.convert();
    rgba.save_with_format(output, format)
        .map_err(|e| Error::encode(output, e))
}
