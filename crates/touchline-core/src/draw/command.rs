//! Immediate drawing commands.

use log::trace;

use crate::{
    color::Color,
    draw::{RenderLayer, StrokeDefinition, Surface},
    geometry::{Bounds, Point, Size},
};

/// Font and color of a text label, centered on its anchor point.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    font_family: String,
    font_size: f32,
    color: Color,
}

impl TextStyle {
    pub fn new(font_family: impl Into<String>, font_size: f32, color: Color) -> Self {
        Self {
            font_family: font_family.into(),
            font_size,
            color,
        }
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// A single immediate-mode drawing instruction.
///
/// Shapes that are both filled and outlined are filled first and stroked
/// second, so the outline stays visible.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Erase everything in the given area
    Clear { size: Size },
    FillRect { bounds: Bounds, fill: Color },
    StrokeRect {
        bounds: Bounds,
        stroke: StrokeDefinition,
    },
    Circle {
        center: Point,
        radius: f32,
        fill: Option<Color>,
        stroke: Option<StrokeDefinition>,
    },
    /// A connected series of straight segments through `points`
    Path {
        points: Vec<Point>,
        closed: bool,
        fill: Option<Color>,
        stroke: Option<StrokeDefinition>,
    },
    Line {
        from: Point,
        to: Point,
        stroke: StrokeDefinition,
    },
    Text {
        anchor: Point,
        content: String,
        style: TextStyle,
    },
}

/// An ordered list of drawing commands, each tagged with its layer.
///
/// Two renders of the same input compare equal, which makes the renderer's
/// purity directly testable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    items: Vec<(RenderLayer, DrawCommand)>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a command at the end of the list.
    pub fn push(&mut self, layer: RenderLayer, command: DrawCommand) {
        self.items.push((layer, command));
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the commands in drawing order.
    pub fn iter(&self) -> impl Iterator<Item = &(RenderLayer, DrawCommand)> {
        self.items.iter()
    }

    /// Iterates over the commands of a single layer.
    pub fn layer(&self, layer: RenderLayer) -> impl Iterator<Item = &DrawCommand> {
        self.items
            .iter()
            .filter(move |(l, _)| *l == layer)
            .map(|(_, command)| command)
    }

    /// Executes every command, in order, against `surface`.
    pub fn replay<S: Surface + ?Sized>(&self, surface: &mut S) {
        trace!(commands = self.items.len(); "Replaying draw list");
        for (layer, command) in &self.items {
            surface.draw(*layer, command);
        }
    }
}
