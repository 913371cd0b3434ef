use clap::Parser;
use std::path::PathBuf;

use shotframe::OutputExtension;

/// Every tuning flag is optional: unset flags fall back to `--config`, then to
/// the built-in defaults shown in each help line.
#[derive(Parser, Debug)]
#[command(name = "shotframe", version, about = "Frame device screenshots into a fixed-size canvas")]
pub struct CliArgs {
    /// Input image (single file mode)
    #[arg(short, long, visible_alias = "in")]
    pub input: Option<PathBuf>,

    /// Output image; the extension picks the format (single file mode)
    #[arg(short, long, visible_alias = "out")]
    pub output: Option<PathBuf>,

    /// Input directory of screenshots (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Output directory for batch processing (batch mode)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Output extension for batch mode (jpg or png)
    #[arg(short = 'f', long, value_enum, default_value_t = OutputExtension::Jpg)]
    pub format: OutputExtension,

    /// JSON preset with compose parameters; explicit flags override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Target width [default: 1920]
    #[arg(long)]
    pub target_width: Option<u32>,

    /// Target height, also the foreground scale target [default: 1080]
    #[arg(long)]
    pub target_height: Option<u32>,

    /// Background blur factor [default: 35]
    #[arg(long)]
    pub bg_blur_factor: Option<u32>,

    /// Background gamma factor [default: 0.9]
    #[arg(long)]
    pub bg_gamma_factor: Option<f64>,

    /// Number of pixels to skip before the bottom comparison starts [default: 2]
    #[arg(long)]
    pub lower_crop_begin_compare: Option<u32>,

    /// Offset from the left to compare for the bottom crop [default: 10]
    #[arg(long)]
    pub lower_crop_horizontal_offset: Option<u32>,

    /// R/G/B value 0...65535 to crop from the bottom [default: 61680]
    #[arg(long)]
    pub lower_crop_rgb: Option<u16>,

    /// Maximum number of rows to crop from the bottom [default: 200]
    #[arg(long)]
    pub max_lower_resize: Option<u32>,

    /// Maximum number of rows to crop from the top [default: 200]
    #[arg(long)]
    pub max_upper_resize: Option<u32>,

    /// Number of pixels to skip before the top comparison starts [default: 2]
    #[arg(long)]
    pub upper_crop_begin_compare: Option<u32>,

    /// Offset from the left to compare for the top crop [default: 10]
    #[arg(long)]
    pub upper_crop_horizontal_offset: Option<u32>,

    /// R/G/B value 0...65535 to crop from the top [default: 0]
    #[arg(long)]
    pub upper_crop_rgb: Option<u16>,

    /// Also remove the detected top rows (off unless set)
    #[arg(long, default_value_t = false)]
    pub apply_top_crop: bool,

    /// JPEG quality 1-100 [default: 95]
    #[arg(long)]
    pub jpeg_quality: Option<u8>,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Batch mode: continue processing other files when one fails
    #[arg(long, default_value_t = false)]
    pub batch: bool,
}
