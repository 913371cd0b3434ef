//! Shared types used across shotframe.
//! Includes the `PixelBuffer` alias every stage hands to the next, the scanner's
//! `CropEstimate`/`ScanOutcome`, and the `OutputExtension` used by batch mode.
use clap::ValueEnum;
use image::{ImageBuffer, Rgba};
use serde::{Deserialize, Serialize};

/// 16-bit RGBA pixel grid, origin top-left. Each pipeline stage consumes one
/// and produces a new one.
pub type PixelBuffer = ImageBuffer<Rgba<u16>, Vec<u16>>;

/// How a single border scan terminated.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ScanOutcome {
    /// Stopped on a row that did not match the chrome color.
    Matched(u32),
    /// Walked the whole window (or had no window) without a mismatch.
    Exhausted(u32),
}

impl ScanOutcome {
    pub fn row(self) -> u32 {
        match self {
            ScanOutcome::Matched(y) | ScanOutcome::Exhausted(y) => y,
        }
    }
}

/// Rows to remove from the top and the absolute Y of the bottom content
/// boundary (not a row count).
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct CropEstimate {
    pub top_rows: u32,
    pub bottom_boundary: u32,
}

/// Output extension used when batch mode names its output files.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug, Serialize, Deserialize)]
pub enum OutputExtension {
    Jpg,
    Png,
}

impl OutputExtension {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputExtension::Jpg => "jpg",
            OutputExtension::Png => "png",
        }
    }
}

impl std::fmt::Display for OutputExtension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
