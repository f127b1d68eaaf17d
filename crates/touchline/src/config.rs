//! Configuration types for Touchline rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from an
//! external file; every field is optional and falls back to the defaults of
//! the reference drill board (an 800×600 canvas and its standard palette).
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining canvas and style settings.
//! - [`CanvasConfig`] - Canvas dimensions in pixels.
//! - [`StyleConfig`] - Color overrides for the [`Palette`].
//!
//! # Example
//!
//! ```
//! # use touchline::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.canvas().size().width(), 800.0);
//! assert!(config.style().palette().is_ok());
//! ```

use serde::Deserialize;

use touchline_core::{color::Color, geometry::Size};

use crate::render::Palette;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Canvas configuration section.
    #[serde(default)]
    canvas: CanvasConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified sections.
    pub fn new(canvas: CanvasConfig, style: StyleConfig) -> Self {
        Self { canvas, style }
    }

    /// Returns the canvas configuration.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Replaces the canvas section.
    pub fn with_canvas(mut self, canvas: CanvasConfig) -> Self {
        self.canvas = canvas;
        self
    }
}

fn default_width() -> f32 {
    800.0
}

fn default_height() -> f32 {
    600.0
}

/// Canvas dimensions, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CanvasConfig {
    #[serde(default = "default_width")]
    width: f32,

    #[serde(default = "default_height")]
    height: f32,
}

impl CanvasConfig {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the canvas dimensions.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Checks that both dimensions are finite and positive.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first offending dimension.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!(
                    "canvas {name} must be a positive number, got {value}"
                ));
            }
        }
        Ok(())
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self::new(default_width(), default_height())
    }
}

/// Visual styling configuration.
///
/// Every entry is a CSS color string. Entries that are not set keep the
/// [`Palette::default`] color.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    background_color: Option<String>,
    field_line_color: Option<String>,
    home_color: Option<String>,
    away_color: Option<String>,
    player_outline_color: Option<String>,
    player_number_color: Option<String>,
    ball_color: Option<String>,
    ball_outline_color: Option<String>,
    cone_color: Option<String>,
    cone_outline_color: Option<String>,
    stick_color: Option<String>,
    player_movement_color: Option<String>,
    ball_movement_color: Option<String>,
}

impl StyleConfig {
    /// Resolves the configured colors over the default palette.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first entry whose color string cannot be
    /// parsed.
    pub fn palette(&self) -> Result<Palette, String> {
        let mut palette = Palette::default();

        let entries = [
            ("background_color", &self.background_color, &mut palette.background),
            ("field_line_color", &self.field_line_color, &mut palette.field_lines),
            ("home_color", &self.home_color, &mut palette.home),
            ("away_color", &self.away_color, &mut palette.away),
            (
                "player_outline_color",
                &self.player_outline_color,
                &mut palette.player_outline,
            ),
            (
                "player_number_color",
                &self.player_number_color,
                &mut palette.player_number,
            ),
            ("ball_color", &self.ball_color, &mut palette.ball),
            (
                "ball_outline_color",
                &self.ball_outline_color,
                &mut palette.ball_outline,
            ),
            ("cone_color", &self.cone_color, &mut palette.cone),
            (
                "cone_outline_color",
                &self.cone_outline_color,
                &mut palette.cone_outline,
            ),
            ("stick_color", &self.stick_color, &mut palette.stick),
            (
                "player_movement_color",
                &self.player_movement_color,
                &mut palette.player_movement,
            ),
            (
                "ball_movement_color",
                &self.ball_movement_color,
                &mut palette.ball_movement,
            ),
        ];

        for (name, configured, slot) in entries {
            if let Some(color) = configured {
                *slot = Color::new(color).map_err(|err| format!("Invalid {name} in config: {err}"))?;
            }
        }

        Ok(palette)
    }
}
