//! Border scanner: classifies rows along a single vertical scan-line as chrome
//! (one neutral 16-bit value on R, G and B) or content.
//!
//! Both scans are explicit state machines over {scanning, matched, exhausted}.
//! The bottom scan records the cursor row *before* testing it, so a mismatch
//! reports the mismatching row itself. The top scan only records rows that
//! matched, so the first mismatch is excluded. Output parity with existing
//! frames depends on both behaviors; do not make them symmetric.
//!
//! Windows are clamped to the image: rows outside it never match, and a
//! scan-line X past the right edge yields an empty scan.
use tracing::debug;

use crate::core::params::{ComposeParams, ScanLine};
use crate::types::{CropEstimate, PixelBuffer, ScanOutcome};

/// Bottom scan: the cursor row is the boundary as soon as it is visited.
enum BottomState {
    Scanning { cursor: u32 },
    Matched(u32),
    Exhausted(u32),
}

/// Top scan: `top` only advances past rows that matched.
enum TopState {
    Scanning { cursor: u32, top: u32 },
    Matched(u32),
    Exhausted(u32),
}

fn is_chrome(img: &PixelBuffer, x: u32, y: u32, rgb: u16) -> bool {
    match img.get_pixel_checked(x, y) {
        Some(p) => p[0] == rgb && p[1] == rgb && p[2] == rgb,
        None => false,
    }
}

/// Walk upward from `height - begin` to `height - max_lower_resize * 2`.
/// Returns the first mismatching row, or the window floor when every sampled
/// row is chrome. An empty window reports `height`.
pub fn scan_bottom(img: &PixelBuffer, line: &ScanLine, max_lower_resize: u32) -> ScanOutcome {
    let (width, height) = img.dimensions();
    let floor = height.saturating_sub(max_lower_resize.saturating_mul(2));
    let start = match height.checked_sub(line.begin) {
        Some(start) if line.horiz_offset < width && start >= floor => start,
        _ => return ScanOutcome::Exhausted(height),
    };

    let mut state = BottomState::Scanning { cursor: start };
    loop {
        state = match state {
            // The cursor row is reported whether or not it matches.
            BottomState::Scanning { cursor } => {
                if !is_chrome(img, line.horiz_offset, cursor, line.rgb) {
                    BottomState::Matched(cursor)
                } else if cursor == floor {
                    BottomState::Exhausted(cursor)
                } else {
                    BottomState::Scanning { cursor: cursor - 1 }
                }
            }
            BottomState::Matched(y) => return ScanOutcome::Matched(y),
            BottomState::Exhausted(y) => return ScanOutcome::Exhausted(y),
        };
    }
}

/// Walk downward from `begin` to `max_upper_resize * 2`. Returns the last row
/// that matched (0 if none); the mismatching row is never counted.
pub fn scan_top(img: &PixelBuffer, line: &ScanLine, max_upper_resize: u32) -> ScanOutcome {
    let width = img.width();
    let ceiling = max_upper_resize.saturating_mul(2);
    if line.horiz_offset >= width || line.begin > ceiling {
        return ScanOutcome::Exhausted(0);
    }

    let mut state = TopState::Scanning {
        cursor: line.begin,
        top: 0,
    };
    loop {
        state = match state {
            TopState::Scanning { cursor, top } => {
                if !is_chrome(img, line.horiz_offset, cursor, line.rgb) {
                    TopState::Matched(top)
                } else if cursor == ceiling {
                    TopState::Exhausted(cursor)
                } else {
                    TopState::Scanning {
                        cursor: cursor + 1,
                        top: cursor,
                    }
                }
            }
            TopState::Matched(y) => return ScanOutcome::Matched(y),
            TopState::Exhausted(y) => return ScanOutcome::Exhausted(y),
        };
    }
}

/// Run both scans with the configured scan-lines.
pub fn estimate_crop(img: &PixelBuffer, params: &ComposeParams) -> CropEstimate {
    let bottom = scan_bottom(img, &params.lower, params.max_lower_resize);
    let top = scan_top(img, &params.upper, params.max_upper_resize);
    debug!("Bottom scan: {:?}, top scan: {:?}", bottom, top);

    CropEstimate {
        top_rows: top.row(),
        bottom_boundary: bottom.row(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const CHROME: u16 = 61680;

    fn line(begin: u32, rgb: u16) -> ScanLine {
        ScanLine {
            begin,
            horiz_offset: 10,
            rgb,
        }
    }

    /// Content everywhere, with `bottom_rows` of `CHROME` at the bottom and
    /// `top_rows` of black at the top.
    fn banded(width: u32, height: u32, top_rows: u32, bottom_rows: u32) -> PixelBuffer {
        PixelBuffer::from_fn(width, height, |_, y| {
            if y >= height - bottom_rows {
                Rgba([CHROME, CHROME, CHROME, u16::MAX])
            } else if y < top_rows {
                Rgba([0, 0, 0, u16::MAX])
            } else {
                Rgba([20000, 30000, 40000, u16::MAX])
            }
        })
    }

    #[test]
    fn test_bottom_band_reports_mismatching_row() {
        let img = banded(32, 600, 0, 50);
        let out = scan_bottom(&img, &line(2, CHROME), 200);
        assert_eq!(out, ScanOutcome::Matched(600 - 50 - 1));
    }

    #[test]
    fn test_bottom_no_band_stops_at_first_sample() {
        let img = banded(32, 600, 0, 0);
        let out = scan_bottom(&img, &line(2, CHROME), 200);
        assert_eq!(out, ScanOutcome::Matched(598));
    }

    #[test]
    fn test_bottom_uniform_window_exhausts_at_floor() {
        let img = banded(32, 600, 0, 450);
        let out = scan_bottom(&img, &line(2, CHROME), 200);
        assert_eq!(out, ScanOutcome::Exhausted(200));
    }

    #[test]
    fn test_bottom_only_differs_in_one_channel() {
        let mut img = banded(32, 100, 0, 10);
        img.put_pixel(10, 95, Rgba([CHROME, CHROME, CHROME - 1, u16::MAX]));
        let out = scan_bottom(&img, &line(2, CHROME), 20);
        assert_eq!(out, ScanOutcome::Matched(95));
    }

    #[test]
    fn test_bottom_window_clamped_on_short_image() {
        let img = banded(32, 40, 0, 40);
        let out = scan_bottom(&img, &line(2, CHROME), 200);
        assert_eq!(out, ScanOutcome::Exhausted(0));
    }

    #[test]
    fn test_bottom_zero_begin_treats_row_past_edge_as_content() {
        let img = banded(32, 100, 0, 10);
        let out = scan_bottom(&img, &line(0, CHROME), 20);
        assert_eq!(out, ScanOutcome::Matched(100));
    }

    #[test]
    fn test_scan_line_outside_image_is_empty() {
        let img = banded(8, 100, 30, 30);
        assert_eq!(
            scan_bottom(&img, &line(2, CHROME), 20),
            ScanOutcome::Exhausted(100)
        );
        assert_eq!(scan_top(&img, &line(2, 0), 20), ScanOutcome::Exhausted(0));
    }

    #[test]
    fn test_top_band_excludes_mismatching_row() {
        let img = banded(32, 600, 40, 0);
        let out = scan_top(&img, &line(2, 0), 200);
        assert_eq!(out, ScanOutcome::Matched(39));
    }

    #[test]
    fn test_top_immediate_mismatch_is_zero() {
        let img = banded(32, 600, 2, 0);
        assert_eq!(scan_top(&img, &line(2, 0), 200), ScanOutcome::Matched(0));
    }

    #[test]
    fn test_top_uniform_window_exhausts_at_ceiling() {
        let img = banded(32, 600, 500, 0);
        assert_eq!(scan_top(&img, &line(2, 0), 100), ScanOutcome::Exhausted(200));
    }

    #[test]
    fn test_top_stops_at_image_edge() {
        let img = banded(32, 50, 50, 0);
        assert_eq!(scan_top(&img, &line(2, 0), 200), ScanOutcome::Matched(49));
    }

    #[test]
    fn test_estimate_combines_both_scans() {
        let img = banded(32, 600, 12, 30);
        let est = estimate_crop(&img, &ComposeParams::default());
        assert_eq!(
            est,
            CropEstimate {
                top_rows: 11,
                bottom_boundary: 569,
            }
        );
    }
}
