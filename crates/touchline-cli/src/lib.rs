//! CLI logic for the Touchline drill renderer.
//!
//! This module contains the core CLI logic: loading configuration, replaying
//! a drill script and writing the rendered SVG.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{debug, info};

use touchline::{
    DrillBuilder, TouchlineError,
    config::{AppConfig, CanvasConfig},
};

/// Run the Touchline CLI application
///
/// This function replays the input script through the Touchline pipeline
/// and writes the resulting SVG to the output file.
///
/// # Errors
///
/// Returns `TouchlineError` for:
/// - File I/O errors
/// - Configuration loading errors and invalid canvas overrides
/// - Script parsing errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), TouchlineError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing drill"
    );

    let app_config = apply_overrides(config::load_config(args.config.as_ref())?, args)?;

    let source = fs::read_to_string(&args.input)?;

    let builder = DrillBuilder::new(app_config);
    let script = builder.parse(&source)?;
    let svg = builder.render_svg(&script)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}

/// Applies `--width`/`--height` on top of the loaded canvas size.
fn apply_overrides(config: AppConfig, args: &Args) -> Result<AppConfig, TouchlineError> {
    if args.width.is_none() && args.height.is_none() {
        return Ok(config);
    }

    let size = config.canvas().size();
    let width = args.width.unwrap_or(size.width());
    let height = args.height.unwrap_or(size.height());

    let canvas = CanvasConfig::new(width, height);
    canvas.validate().map_err(TouchlineError::Config)?;

    debug!(width, height; "Overriding canvas size");
    Ok(config.with_canvas(canvas))
}
