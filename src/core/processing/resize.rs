use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use tracing::info;

use crate::error::{Error, Result};
use crate::types::PixelBuffer;

/// Width that keeps the aspect ratio at `target_height`, rounded half up and
/// never below one column.
pub fn calculate_fit_height_dimensions(
    original_cols: u32,
    original_rows: u32,
    target_height: u32,
) -> (u32, u32) {
    let scale_factor = target_height as f64 / original_rows as f64;
    let new_cols = (original_cols as f64 * scale_factor + 0.5).floor().max(1.0) as u32;
    (new_cols, target_height)
}

/// Lanczos3 resample of a 16-bit RGBA buffer to exactly `target_cols x target_rows`.
pub fn resize_rgba16_image(
    img: &PixelBuffer,
    target_cols: u32,
    target_rows: u32,
) -> Result<PixelBuffer> {
    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    // Convert u16 samples into little-endian bytes for fast_image_resize
    let mut src_bytes = Vec::with_capacity(img.as_raw().len() * 2);
    for &v in img.as_raw() {
        src_bytes.extend_from_slice(&v.to_le_bytes());
    }

    let src_image = Image::from_vec_u8(img.width(), img.height(), src_bytes, PixelType::U16x4)?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U16x4);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    let dst_bytes = dst_image.into_vec();
    let mut out = Vec::with_capacity(dst_bytes.len() / 2);
    for chunk in dst_bytes.chunks_exact(2) {
        out.push(u16::from_le_bytes([chunk[0], chunk[1]]));
    }

    PixelBuffer::from_raw(target_cols, target_rows, out).ok_or_else(|| {
        Error::Processing(format!(
            "resized buffer does not fit {}x{}",
            target_cols, target_rows
        ))
    })
}

/// Scale to `target_height`, width following the aspect ratio.
pub fn resize_to_height(img: &PixelBuffer, target_height: u32) -> Result<PixelBuffer> {
    let (cols, rows) = img.dimensions();
    if rows == 0 || cols == 0 {
        return Err(Error::Processing(format!(
            "cannot resize an empty {}x{} image",
            cols, rows
        )));
    }

    info!("Current bounds: {}, {}", cols, rows);
    info!("Resizing height to {}, keeping aspect ratio", target_height);

    let (new_cols, new_rows) = calculate_fit_height_dimensions(cols, rows, target_height);
    if (new_cols, new_rows) == (cols, rows) {
        return Ok(img.clone());
    }
    resize_rgba16_image(img, new_cols, new_rows)
}
