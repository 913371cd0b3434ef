use image::imageops;
use tracing::{info, warn};

use crate::core::params::ComposeParams;
use crate::types::{CropEstimate, PixelBuffer};

/// Sanity-check the bottom boundary against the largest trusted shave.
///
/// A boundary more than `max_lower_resize` rows above the bottom edge means the
/// scan-line ran through content, so no bottom crop is applied. A boundary at
/// row 0 would leave nothing and is rejected the same way.
pub fn guard_bottom(bottom: u32, height: u32, max_lower_resize: u32) -> u32 {
    let shave = height.saturating_sub(bottom);
    if shave > max_lower_resize || bottom == 0 {
        warn!(
            "Difference was {}, resetting to bottom {}",
            shave, height
        );
        return height;
    }
    bottom
}

/// Commit the crop. Only the guarded bottom boundary is applied unless the
/// opt-in top crop is enabled; by default the top estimate is informational.
pub fn apply_crop(img: PixelBuffer, estimate: &CropEstimate, params: &ComposeParams) -> PixelBuffer {
    let (width, height) = img.dimensions();
    let bottom = guard_bottom(estimate.bottom_boundary, height, params.max_lower_resize);

    let top = if params.apply_top_crop && estimate.top_rows < bottom {
        estimate.top_rows
    } else {
        0
    };

    if bottom == height && top == 0 {
        return img;
    }

    info!("Current bounds: {}, {}", width, height);
    info!("Resize detected; clipping to rows {}..{}", top, bottom);
    imageops::crop_imm(&img, 0, top, width, bottom - top).to_image()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn numbered(width: u32, height: u32) -> PixelBuffer {
        PixelBuffer::from_fn(width, height, |_, y| Rgba([y as u16, 0, 0, u16::MAX]))
    }

    #[test]
    fn test_guard_keeps_shallow_boundary() {
        assert_eq!(guard_bottom(1869, 1920, 200), 1869);
        assert_eq!(guard_bottom(1920 - 200, 1920, 200), 1720);
    }

    #[test]
    fn test_guard_resets_deep_boundary() {
        assert_eq!(guard_bottom(1919 - 200, 1920, 200), 1920);
        assert_eq!(guard_bottom(1520, 1920, 200), 1920);
    }

    #[test]
    fn test_guard_never_resets_unmoved_boundary() {
        assert_eq!(guard_bottom(1918, 1920, 200), 1918);
        assert_eq!(guard_bottom(1920, 1920, 200), 1920);
    }

    #[test]
    fn test_guard_rejects_empty_crop() {
        assert_eq!(guard_bottom(0, 100, 200), 100);
    }

    #[test]
    fn test_apply_crop_bottom_only_by_default() {
        let img = numbered(20, 300);
        let est = CropEstimate {
            top_rows: 40,
            bottom_boundary: 250,
        };
        let out = apply_crop(img, &est, &ComposeParams::default());
        assert_eq!(out.dimensions(), (20, 250));
        assert_eq!(out.get_pixel(0, 0)[0], 0);
    }

    #[test]
    fn test_apply_crop_top_when_enabled() {
        let img = numbered(20, 300);
        let est = CropEstimate {
            top_rows: 40,
            bottom_boundary: 250,
        };
        let params = ComposeParams {
            apply_top_crop: true,
            ..Default::default()
        };
        let out = apply_crop(img, &est, &params);
        assert_eq!(out.dimensions(), (20, 210));
        assert_eq!(out.get_pixel(0, 0)[0], 40);
    }

    #[test]
    fn test_apply_crop_untouched_after_reset() {
        let img = numbered(20, 1000);
        let est = CropEstimate {
            top_rows: 0,
            bottom_boundary: 600,
        };
        let out = apply_crop(img, &est, &ComposeParams::default());
        assert_eq!(out.dimensions(), (20, 1000));
    }
}
