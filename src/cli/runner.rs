use std::path::Path;

use clap::CommandFactory;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use shotframe::{ComposeParams, load_params, process_directory_to_path, process_to_path};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Defaults, then the JSON preset, then any flag given on the command line.
pub fn resolve_params(args: &CliArgs) -> Result<ComposeParams, AppError> {
    let mut params = load_params(args.config.as_deref())?;

    if let Some(v) = args.target_width {
        params.target_width = v;
    }
    if let Some(v) = args.target_height {
        params.target_height = v;
    }
    if let Some(v) = args.bg_blur_factor {
        params.background_blur_factor = v;
    }
    if let Some(v) = args.bg_gamma_factor {
        params.background_gamma_factor = v;
    }
    if let Some(v) = args.lower_crop_begin_compare {
        params.lower.begin = v;
    }
    if let Some(v) = args.lower_crop_horizontal_offset {
        params.lower.horiz_offset = v;
    }
    if let Some(v) = args.lower_crop_rgb {
        params.lower.rgb = v;
    }
    if let Some(v) = args.max_lower_resize {
        params.max_lower_resize = v;
    }
    if let Some(v) = args.upper_crop_begin_compare {
        params.upper.begin = v;
    }
    if let Some(v) = args.upper_crop_horizontal_offset {
        params.upper.horiz_offset = v;
    }
    if let Some(v) = args.upper_crop_rgb {
        params.upper.rgb = v;
    }
    if let Some(v) = args.max_upper_resize {
        params.max_upper_resize = v;
    }
    if let Some(v) = args.jpeg_quality {
        params.jpeg_quality = v;
    }
    if args.apply_top_crop {
        params.apply_top_crop = true;
    }

    params.validate()?;
    Ok(params)
}

fn process_single_file(input: &Path, output: &Path, params: &ComposeParams) -> Result<(), AppError> {
    let report = process_to_path(input, output, params)?;
    info!(
        "Framed {:?} ({}x{} -> crop {}x{} -> foreground {}x{} at x={}) -> {:?}",
        input,
        report.source_size.0,
        report.source_size.1,
        report.cropped_size.0,
        report.cropped_size.1,
        report.foreground_size.0,
        report.foreground_size.1,
        report.foreground_x,
        output
    );
    Ok(())
}

fn dispatch(args: CliArgs) -> Result<(), AppError> {
    let batch_mode = args.input_dir.is_some() || args.output_dir.is_some();

    if batch_mode {
        let input_dir = args.input_dir.clone().ok_or(AppError::MissingArgument {
            arg: "--input-dir".to_string(),
        })?;
        let output_dir = args.output_dir.clone().ok_or(AppError::MissingArgument {
            arg: "--output-dir".to_string(),
        })?;
        let params = resolve_params(&args)?;

        info!("Starting batch processing from directory: {:?}", input_dir);
        info!("Output directory: {:?}", output_dir);

        let report =
            process_directory_to_path(&input_dir, &output_dir, &params, args.format, args.batch)?;

        info!("Batch processing complete!");
        info!("Processed: {}", report.processed);
        info!("Skipped: {}", report.skipped);
        info!("Errors: {}", report.errors);
        return Ok(());
    }

    let (Some(input), Some(output)) = (args.input.as_deref(), args.output.as_deref()) else {
        // Nothing to do without both paths: show usage and leave successfully.
        CliArgs::command().print_help()?;
        println!();
        return Ok(());
    };

    let params = resolve_params(&args)?;
    process_single_file(input, output, &params)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    dispatch(args).map_err(|e| {
        error!("{}", e);
        e.into()
    })
}
