use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Where and what a border scan samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScanLine {
    /// Rows skipped at the edge before comparison starts
    pub begin: u32,
    /// X coordinate of the scan-line
    pub horiz_offset: u32,
    /// Expected chrome value (0..=65535), applied to R, G and B alike
    pub rgb: u16,
}

/// Pipeline parameters suitable for config files and CLI overrides.
/// Built once at startup and passed by reference into every stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposeParams {
    pub target_width: u32,
    pub target_height: u32,
    /// Gaussian sigma for the backdrop; 0 disables blurring
    pub background_blur_factor: u32,
    /// Gamma applied to the backdrop; below 1.0 darkens
    pub background_gamma_factor: f64,
    pub lower: ScanLine,
    /// Bottom search depth is twice this; also the largest trusted bottom shave
    pub max_lower_resize: u32,
    pub upper: ScanLine,
    /// Top search depth is twice this
    pub max_upper_resize: u32,
    /// Opt-in: also remove the detected top rows
    pub apply_top_crop: bool,
    pub jpeg_quality: u8,
}

impl Default for ComposeParams {
    fn default() -> Self {
        Self {
            target_width: 1920,
            target_height: 1080,
            background_blur_factor: 35,
            background_gamma_factor: 0.9,
            lower: ScanLine {
                begin: 2,
                horiz_offset: 10,
                rgb: 61680,
            },
            max_lower_resize: 200,
            upper: ScanLine {
                begin: 2,
                horiz_offset: 10,
                rgb: 0,
            },
            max_upper_resize: 200,
            apply_top_crop: false,
            jpeg_quality: 95,
        }
    }
}

impl ComposeParams {
    /// Load a (possibly partial) JSON preset; missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let params: ComposeParams = serde_json::from_str(&raw)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if self.target_width == 0 {
            return Err(Error::InvalidArgument {
                arg: "target_width",
                value: self.target_width.to_string(),
            });
        }
        if self.target_height == 0 {
            return Err(Error::InvalidArgument {
                arg: "target_height",
                value: self.target_height.to_string(),
            });
        }
        if !self.background_gamma_factor.is_finite() || self.background_gamma_factor <= 0.0 {
            return Err(Error::InvalidArgument {
                arg: "background_gamma_factor",
                value: self.background_gamma_factor.to_string(),
            });
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(Error::InvalidArgument {
                arg: "jpeg_quality",
                value: self.jpeg_quality.to_string(),
            });
        }
        Ok(())
    }
}
