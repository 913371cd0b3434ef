//! High-level, ergonomic library API: frame a screenshot to a file or an
//! in-memory buffer, and batch helpers for directories. Prefer these entrypoints
//! over the low-level processing modules when integrating shotframe.
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::params::ComposeParams;
use crate::core::processing::pipeline::{PipelineReport, run_pipeline};
use crate::error::Result;
use crate::io::{is_supported_input, open_image, save_image};
use crate::types::{OutputExtension, PixelBuffer};

/// Run the whole pipeline on a decoded buffer (no disk I/O).
pub fn process_image(src: PixelBuffer, params: &ComposeParams) -> Result<(PixelBuffer, PipelineReport)> {
    params.validate()?;
    run_pipeline(src, params)
}

/// Decode `input`, frame it and encode to `output`. The output format follows
/// the extension of `output`.
pub fn process_to_path(input: &Path, output: &Path, params: &ComposeParams) -> Result<PipelineReport> {
    params.validate()?;
    let src = open_image(input)?;
    let (canvas, report) = run_pipeline(src, params)?;
    save_image(&canvas, output, params.jpeg_quality)?;
    Ok(report)
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    /// Images left alone because an earlier image already claimed their output name
    pub skipped: usize,
    pub errors: usize,
}

/// Files in `input_dir` with a decodable image extension, sorted by name.
pub fn iterate_images(input_dir: &Path) -> Result<std::vec::IntoIter<PathBuf>> {
    let mut items = Vec::new();
    for entry in std::fs::read_dir(input_dir)? {
        let path = entry?.path();
        if path.is_file() && is_supported_input(&path) {
            items.push(path);
        }
    }
    items.sort();
    Ok(items.into_iter())
}

/// Frame every image in `input_dir` into `output_dir` as `<stem>.<ext>`.
/// Images sharing a stem (`shot.png`, `shot.jpg`) would write the same file;
/// the first in name order wins and the rest are skipped. With
/// `continue_on_error`, failures are counted and the batch moves on;
/// otherwise the first failure is returned.
pub fn process_directory_to_path(
    input_dir: &Path,
    output_dir: &Path,
    params: &ComposeParams,
    ext: OutputExtension,
    continue_on_error: bool,
) -> Result<BatchReport> {
    params.validate()?;
    std::fs::create_dir_all(output_dir)?;

    let mut report = BatchReport::default();
    let mut claimed: HashSet<PathBuf> = HashSet::new();

    for path in iterate_images(input_dir)? {
        let Some(stem) = path.file_stem() else {
            report.skipped += 1;
            continue;
        };
        let output_path = output_dir.join(format!("{}.{}", stem.to_string_lossy(), ext));
        if !claimed.insert(output_path.clone()) {
            warn!(
                "Skipping {:?}: output {:?} already written by another image",
                path, output_path
            );
            report.skipped += 1;
            continue;
        }
        info!("Processing: {:?} -> {:?}", path, output_path);

        match process_to_path(&path, &output_path, params) {
            Ok(_) => report.processed += 1,
            Err(e) => {
                warn!("Error processing {:?}: {}", path, e);
                report.errors += 1;
                if !continue_on_error {
                    return Err(e);
                }
            }
        }
    }

    Ok(report)
}

/// Resolve the params a run should use: a JSON preset when given, defaults
/// otherwise.
pub fn load_params(config: Option<&Path>) -> Result<ComposeParams> {
    match config {
        Some(path) => ComposeParams::from_json_file(path),
        None => Ok(ComposeParams::default()),
    }
}
