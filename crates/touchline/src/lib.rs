//! Touchline - football training-drill diagrams.
//!
//! A drill is a scene of players, balls, movement arrows, cones and sticks
//! drawn over a pitch outline. This crate holds the scene model, the
//! click-driven controller that edits it, the renderer that turns it into
//! draw commands, and an SVG surface to paint those commands on.
//!
//! Drills can be driven headlessly through [`script`]s, which replay the
//! toolbar and pointer events of a drawing session.

pub mod canvas;
pub mod config;
pub mod controller;
pub mod export;
pub mod render;
pub mod scene;
pub mod script;

mod error;

pub use touchline_core::{color, draw, geometry};

pub use error::TouchlineError;

use log::{debug, info, trace};

use canvas::DrillCanvas;
use config::AppConfig;
use export::svg::SvgSurface;
use render::Renderer;
use script::Script;

/// Builder for parsing and rendering drill scripts.
///
/// # Examples
///
/// ```rust
/// use touchline::{DrillBuilder, config::AppConfig};
///
/// let source = "field half\ntool player\nclick 400 300\n";
///
/// let builder = DrillBuilder::new(AppConfig::default());
///
/// let script = builder.parse(source)
///     .expect("Failed to parse");
///
/// let svg = builder.render_svg(&script)
///     .expect("Failed to render");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Default)]
pub struct DrillBuilder {
    config: AppConfig,
}

impl DrillBuilder {
    /// Create a new drill builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse script source into a replayable [`Script`].
    ///
    /// # Errors
    ///
    /// Returns [`TouchlineError::Script`] with every line-level diagnostic
    /// when the source contains invalid directives.
    pub fn parse(&self, source: &str) -> Result<Script, TouchlineError> {
        info!("Parsing drill script");

        let script =
            script::parse(source).map_err(|err| TouchlineError::new_script_error(err, source))?;

        debug!(commands = script.len(); "Drill script parsed successfully");
        trace!(script:?; "Parsed script");

        Ok(script)
    }

    /// Replay a script on a fresh canvas and render the result to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`TouchlineError::Config`] when the canvas size or a configured
    /// color is invalid and [`TouchlineError::Export`] when the surface is lost
    /// during replay.
    pub fn render_svg(&self, script: &Script) -> Result<String, TouchlineError> {
        self.config
            .canvas()
            .validate()
            .map_err(TouchlineError::Config)?;
        let palette = self
            .config
            .style()
            .palette()
            .map_err(TouchlineError::Config)?;
        let size = self.config.canvas().size();

        info!(width = size.width(), height = size.height(); "Rendering drill");
        let mut canvas = DrillCanvas::new(size, Renderer::new(palette));
        canvas.mount(SvgSurface::new(size));

        script.apply(&mut canvas);
        debug!(
            elements = canvas.scene().element_count(),
            redraws = canvas.redraw_count();
            "Script replayed"
        );

        let surface = canvas
            .unmount()
            .ok_or_else(|| TouchlineError::Export("canvas surface was not mounted".to_string()))?;

        info!("SVG rendered successfully");
        Ok(surface.into_svg_string())
    }
}
