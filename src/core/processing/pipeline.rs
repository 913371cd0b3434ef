use tracing::info;

use crate::core::params::ComposeParams;
use crate::core::processing::composite::compose;
use crate::core::processing::guard::apply_crop;
use crate::core::processing::resize::resize_to_height;
use crate::core::processing::scan::estimate_crop;
use crate::error::Result;
use crate::types::{CropEstimate, PixelBuffer};

/// What the pipeline decided for one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    pub source_size: (u32, u32),
    pub estimate: CropEstimate,
    /// Size after the crop guard, before resizing
    pub cropped_size: (u32, u32),
    pub foreground_size: (u32, u32),
    /// Horizontal paste offset of the foreground; may be negative
    pub foreground_x: i64,
}

/// Scanner → guard → resizer → compositor. Each stage takes ownership of the
/// previous stage's buffer.
pub fn run_pipeline(src: PixelBuffer, params: &ComposeParams) -> Result<(PixelBuffer, PipelineReport)> {
    let source_size = src.dimensions();

    let estimate = estimate_crop(&src, params);
    info!("Calculated bottom px at {}", estimate.bottom_boundary);
    info!("Calculated top px at {}", estimate.top_rows);

    let cropped = apply_crop(src, &estimate, params);
    let cropped_size = cropped.dimensions();

    let foreground = resize_to_height(&cropped, params.target_height)?;
    let foreground_size = foreground.dimensions();

    let (canvas, foreground_x) = compose(&foreground, params)?;

    Ok((
        canvas,
        PipelineReport {
            source_size,
            estimate,
            cropped_size,
            foreground_size,
            foreground_x,
        },
    ))
}
