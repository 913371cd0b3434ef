#![doc = r#"
shotframe — normalize device screenshots into a fixed-size canvas.

A screenshot of any size goes through one linear pipeline:

1. **Border scan** — a single vertical scan-line near the left edge estimates how
   many rows at the bottom (and top) are solid device chrome.
2. **Crop guard** — the bottom estimate is trusted only within
   `max_lower_resize` rows of the edge; the crop is applied when it is non-trivial.
   The top estimate is reported but only cropped with `apply_top_crop`.
3. **Aspect resize** — Lanczos3 to `target_height`, width following the aspect ratio.
4. **Composite** — the foreground is pasted top-aligned and horizontally centered
   over a stretched, blurred, gamma-darkened copy of itself filling the canvas.

Every output is exactly `target_width x target_height`.

Quick start: frame a file
-------------------------
```rust,no_run
use std::path::Path;
use shotframe::{process_to_path, ComposeParams};

fn main() -> shotframe::Result<()> {
    let params = ComposeParams {
        target_width: 1920,
        target_height: 1080,
        ..Default::default()
    };
    let report = process_to_path(
        Path::new("/shots/capture.png"),
        Path::new("/out/capture.jpg"),
        &params,
    )?;
    println!("cropped to {:?}", report.cropped_size);
    Ok(())
}
```

In-memory
---------
```rust
use image::Rgba;
use shotframe::{process_image, ComposeParams, PixelBuffer};

fn main() -> shotframe::Result<()> {
    let src = PixelBuffer::from_pixel(108, 192, Rgba([9000, 9000, 9000, u16::MAX]));
    let params = ComposeParams {
        target_width: 192,
        target_height: 108,
        background_blur_factor: 2,
        ..Default::default()
    };
    let (canvas, _report) = process_image(src, &params)?;
    assert_eq!(canvas.dimensions(), (192, 108));
    Ok(())
}
```

Error handling
--------------
All public functions return `shotframe::Result<T>`; match on `shotframe::Error`
to tell decode failures from encode failures.

Useful modules
--------------
- [`api`] — high-level entry points and batch helpers.
- [`core`] — `ComposeParams` and the individual pipeline stages.
- [`io`] — decoding and extension-driven encoding.
- [`types`] — `PixelBuffer`, `CropEstimate`, `ScanOutcome`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::params::{ComposeParams, ScanLine};
pub use crate::core::processing::pipeline::PipelineReport;
pub use error::{Error, Result};
pub use types::{CropEstimate, OutputExtension, PixelBuffer, ScanOutcome};

pub use api::{
    BatchReport, iterate_images, load_params, process_directory_to_path, process_image,
    process_to_path,
};
