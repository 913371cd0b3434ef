//! Background compositor: builds the full-canvas backdrop (stretched, blurred,
//! darkened copy of the foreground) and pastes the aspect-correct foreground
//! on top, top-aligned.
use image::{Rgba, imageops};
use tracing::info;

use crate::core::params::ComposeParams;
use crate::core::processing::resize::resize_rgba16_image;
use crate::error::Result;
use crate::types::PixelBuffer;

/// Per-channel gamma on R, G and B: `v' = max * (v / max)^(1 / gamma)`.
/// Alpha is left untouched. Gamma below 1.0 darkens.
pub fn adjust_gamma(mut img: PixelBuffer, gamma: f64) -> PixelBuffer {
    let exponent = 1.0 / gamma.max(0.0001);
    let max = u16::MAX as f64;
    let lut: Vec<u16> = (0..=u16::MAX)
        .map(|v| ((v as f64 / max).powf(exponent) * max).round().clamp(0.0, max) as u16)
        .collect();

    for px in img.pixels_mut() {
        for c in 0..3 {
            px[c] = lut[px[c] as usize];
        }
    }
    img
}

/// Gaussian blur with sigma `radius`; zero returns the buffer unchanged.
pub fn blur_background(img: PixelBuffer, radius: u32) -> PixelBuffer {
    if radius == 0 {
        return img;
    }
    imageops::blur(&img, radius as f32)
}

/// Horizontal paste offset of the foreground. The `- 1` biases odd slack to
/// the left; the result is negative when the foreground is wider than the
/// canvas.
pub fn foreground_offset(target_width: u32, foreground_width: u32) -> i64 {
    (target_width as i64 - foreground_width as i64 - 1) / 2
}

/// Stretch to the canvas, ignoring aspect ratio, then blur and darken.
pub fn build_background(foreground: &PixelBuffer, params: &ComposeParams) -> Result<PixelBuffer> {
    info!("Creating secondary background");
    let stretched =
        resize_rgba16_image(foreground, params.target_width, params.target_height)?;
    info!("Blurring background");
    let blurred = blur_background(stretched, params.background_blur_factor);
    info!("Setting gamma to {}", params.background_gamma_factor);
    Ok(adjust_gamma(blurred, params.background_gamma_factor))
}

/// Composite `foreground` over its own backdrop on a transparent canvas of
/// exactly `target_width x target_height`. Parts of the foreground that fall
/// outside the canvas are clipped.
pub fn compose(foreground: &PixelBuffer, params: &ComposeParams) -> Result<(PixelBuffer, i64)> {
    let background = build_background(foreground, params)?;

    info!("Compositing image");
    let mut canvas =
        PixelBuffer::from_pixel(params.target_width, params.target_height, Rgba([0, 0, 0, 0]));
    imageops::replace(&mut canvas, &background, 0, 0);

    let x = foreground_offset(params.target_width, foreground.width());
    imageops::replace(&mut canvas, foreground, x, 0);

    Ok((canvas, x))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(width: u32, height: u32) -> ComposeParams {
        ComposeParams {
            target_width: width,
            target_height: height,
            background_blur_factor: 0,
            background_gamma_factor: 1.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_offset_bias_and_negative() {
        assert_eq!(foreground_offset(1920, 608), 655);
        assert_eq!(foreground_offset(1920, 624), 647);
        assert_eq!(foreground_offset(100, 100), 0);
        assert_eq!(foreground_offset(100, 120), -10);
        assert_eq!(foreground_offset(100, 102), -1);
    }

    #[test]
    fn test_gamma_below_one_darkens_and_keeps_alpha() {
        let img = PixelBuffer::from_pixel(2, 2, Rgba([32768, 0, u16::MAX, 1234]));
        let out = adjust_gamma(img, 0.9);
        let p = out.get_pixel(1, 1);
        assert!(p[0] < 32768);
        assert_eq!(p[1], 0);
        assert_eq!(p[2], u16::MAX);
        assert_eq!(p[3], 1234);
    }

    #[test]
    fn test_gamma_one_is_identity() {
        let img = PixelBuffer::from_pixel(1, 1, Rgba([12345, 54321, 7, u16::MAX]));
        assert_eq!(adjust_gamma(img.clone(), 1.0), img);
    }

    #[test]
    fn test_zero_blur_is_identity() {
        let img = PixelBuffer::from_fn(4, 4, |x, y| Rgba([x as u16 * 100, y as u16 * 100, 0, 1]));
        assert_eq!(blur_background(img.clone(), 0), img);
    }

    #[test]
    fn test_compose_centers_foreground_top_aligned() {
        let fg = PixelBuffer::from_pixel(4, 6, Rgba([u16::MAX, 0, 0, u16::MAX]));
        let p = params(11, 6);
        let (canvas, x) = compose(&fg, &p).unwrap();

        assert_eq!(canvas.dimensions(), (11, 6));
        assert_eq!(x, 3);
        // Uniform foreground makes the stretched backdrop the same color.
        for y in 0..6 {
            assert_eq!(canvas.get_pixel(3, y)[0], u16::MAX);
            assert_eq!(canvas.get_pixel(6, y)[3], u16::MAX);
        }
    }

    #[test]
    fn test_backdrop_is_blurred_then_darkened() {
        // Alternating dark and bright columns survive the stretch but not the blur.
        let fg = PixelBuffer::from_fn(4, 6, |x, _| {
            let v = if x % 2 == 0 { 8000 } else { 56000 };
            Rgba([v, v, v, u16::MAX])
        });
        let p = ComposeParams {
            background_blur_factor: 3,
            background_gamma_factor: 0.9,
            ..params(20, 6)
        };
        let (canvas, x) = compose(&fg, &p).unwrap();
        assert_eq!(x, 7);

        let stretched = resize_rgba16_image(&fg, 20, 6).unwrap();
        let blurred = blur_background(stretched.clone(), 3);
        let expected = adjust_gamma(blurred.clone(), 0.9);
        let unblurred = adjust_gamma(stretched.clone(), 0.9);
        let gamma_first = blur_background(adjust_gamma(stretched.clone(), 0.9), 3);

        for y in [0, 3, 5] {
            let got = canvas.get_pixel(0, y);
            assert_eq!(got, expected.get_pixel(0, y));
            assert_ne!(got[0], unblurred.get_pixel(0, y)[0]);
            assert_ne!(got[0], gamma_first.get_pixel(0, y)[0]);
            assert!(got[0] < blurred.get_pixel(0, y)[0]);
        }
    }

    #[test]
    fn test_compose_clips_oversize_foreground() {
        let fg = PixelBuffer::from_fn(20, 5, |x, _| Rgba([x as u16, 0, 0, u16::MAX]));
        let (canvas, x) = compose(&fg, &params(10, 5)).unwrap();

        assert_eq!(canvas.dimensions(), (10, 5));
        assert_eq!(x, -5);
        assert_eq!(canvas.get_pixel(0, 0)[0], 5);
        assert_eq!(canvas.get_pixel(9, 4)[0], 14);
    }
}
