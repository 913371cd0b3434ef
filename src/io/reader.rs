use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::PixelBuffer;

/// Extensions batch mode treats as decodable screenshots.
pub const SUPPORTED_INPUT_EXTENSIONS: &[&str] =
    &["png", "jpg", "jpeg", "gif", "bmp", "tif", "tiff", "webp"];

pub fn is_supported_input(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_ascii_lowercase();
            SUPPORTED_INPUT_EXTENSIONS.contains(&e.as_str())
        })
        .unwrap_or(false)
}

/// Decode any format the `image` crate understands into 16-bit RGBA.
/// 8-bit sources widen as `v * 257`, so `0xF0` becomes `61680`.
pub fn open_image(path: &Path) -> Result<PixelBuffer> {
    let img = image::open(path).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Decoded {:?}: {}x{} {:?}", path, img.width(), img.height(), img.color());
    Ok(img.into_rgba16())
}
