//! SVG export.
//!
//! [`SvgSurface`] is a [`Surface`] that turns drawing commands into SVG
//! elements, grouped per [`RenderLayer`].

use log::{debug, trace};
use svg::{
    Document,
    node::element::{self as svg_element, path::Data},
};

use touchline_core::{
    apply_stroke,
    color::Color,
    draw::{DrawCommand, LayeredOutput, RenderLayer, StrokeDefinition, Surface, SvgNode},
    geometry::{Point, Size},
};

/// A drawing surface that records an SVG document.
#[derive(Debug)]
pub struct SvgSurface {
    size: Size,
    output: LayeredOutput,
}

impl SvgSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            output: LayeredOutput::new(),
        }
    }

    /// Number of SVG elements drawn since the last clear.
    pub fn node_count(&self) -> usize {
        self.output.len()
    }

    /// Finishes the document and serializes it.
    pub fn into_svg_string(self) -> String {
        let (width, height) = (self.size.width(), self.size.height());
        let mut document = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", (0.0_f32, 0.0_f32, width, height));

        for group in self.output.render() {
            document = document.add(group);
        }

        let svg = document.to_string();
        debug!(bytes = svg.len(); "SVG document serialized");
        svg
    }

    fn add(&mut self, layer: RenderLayer, node: SvgNode) {
        self.output.add_to_layer(layer, node);
    }
}

impl Surface for SvgSurface {
    fn draw(&mut self, layer: RenderLayer, command: &DrawCommand) {
        match command {
            DrawCommand::Clear { .. } => {
                trace!(discarded = self.output.len(); "Clearing SVG surface");
                self.output.clear();
            }
            DrawCommand::FillRect { bounds, fill } => {
                let rect = svg_element::Rectangle::new()
                    .set("x", bounds.min_x())
                    .set("y", bounds.min_y())
                    .set("width", bounds.width())
                    .set("height", bounds.height())
                    .set("fill", fill);
                self.add(layer, Box::new(rect));
            }
            DrawCommand::StrokeRect { bounds, stroke } => {
                let rect = svg_element::Rectangle::new()
                    .set("x", bounds.min_x())
                    .set("y", bounds.min_y())
                    .set("width", bounds.width())
                    .set("height", bounds.height())
                    .set("fill", "none");
                self.add(layer, Box::new(apply_stroke!(rect, stroke)));
            }
            DrawCommand::Circle {
                center,
                radius,
                fill,
                stroke,
            } => {
                let circle = svg_element::Circle::new()
                    .set("cx", center.x())
                    .set("cy", center.y())
                    .set("r", *radius)
                    .set("fill", fill_value(fill.as_ref()));
                let node: SvgNode = match stroke {
                    Some(stroke) => Box::new(apply_stroke!(circle, stroke)),
                    None => Box::new(circle),
                };
                self.add(layer, node);
            }
            DrawCommand::Path {
                points,
                closed,
                fill,
                stroke,
            } => {
                let Some(node) = path_node(points, *closed, fill.as_ref(), stroke.as_ref()) else {
                    return;
                };
                self.add(layer, node);
            }
            DrawCommand::Line { from, to, stroke } => {
                let line = svg_element::Line::new()
                    .set("x1", from.x())
                    .set("y1", from.y())
                    .set("x2", to.x())
                    .set("y2", to.y());
                self.add(layer, Box::new(apply_stroke!(line, stroke)));
            }
            DrawCommand::Text {
                anchor,
                content,
                style,
            } => {
                let text = svg_element::Text::new(content.as_str())
                    .set("x", anchor.x())
                    .set("y", anchor.y())
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "middle")
                    .set("font-family", style.font_family())
                    .set("font-size", style.font_size())
                    .set("fill", &style.color());
                self.add(layer, Box::new(text));
            }
        }
    }
}

fn fill_value(fill: Option<&Color>) -> String {
    fill.map_or_else(|| "none".to_string(), Color::to_string)
}

fn path_node(
    points: &[Point],
    closed: bool,
    fill: Option<&Color>,
    stroke: Option<&StrokeDefinition>,
) -> Option<SvgNode> {
    let (first, rest) = points.split_first()?;

    let mut data = Data::new().move_to((first.x(), first.y()));
    for point in rest {
        data = data.line_to((point.x(), point.y()));
    }
    if closed {
        data = data.close();
    }

    let path = svg_element::Path::new()
        .set("d", data)
        .set("fill", fill_value(fill));
    Some(match stroke {
        Some(stroke) => Box::new(apply_stroke!(path, stroke)),
        None => Box::new(path),
    })
}
