use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::RgbImage;
use image::buffer::ConvertBuffer;
use jpeg_encoder::{ColorType, Encoder};

use crate::error::{Error, Result};
use crate::types::PixelBuffer;

/// Encode as baseline RGB JPEG. Alpha is dropped; the composited canvas is
/// opaque wherever the source was.
pub fn write_rgb_jpeg(output: &Path, canvas: &PixelBuffer, quality: u8) -> Result<()> {
    let (cols, rows) = canvas.dimensions();
    let (cols16, rows16) = match (u16::try_from(cols), u16::try_from(rows)) {
        (Ok(c), Ok(r)) => (c, r),
        _ => {
            return Err(Error::encode(
                output,
                format!("{}x{} exceeds the JPEG size limit", cols, rows),
            ));
        }
    };

    let rgb: RgbImage = canvas.convert();
    let file = File::create(output).map_err(|e| Error::encode(output, e))?;
    let mut writer = BufWriter::new(file);
    let encoder = Encoder::new(&mut writer, quality);
    encoder
        .encode(rgb.as_raw(), cols16, rows16, ColorType::Rgb)
        .map_err(|e| Error::encode(output, e))?;
    Ok(())
}
