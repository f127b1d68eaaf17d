//! Layer-based z-ordering for drill diagrams.
//!
//! # Overview
//!
//! - [`RenderLayer`]: the fixed drawing order of a drill scene
//! - [`LayeredOutput`]: a structure for collecting SVG nodes by layer
//!
//! # Example
//!
//! ```
//! # use touchline_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::{Circle, Rectangle};
//!
//! let mut output = LayeredOutput::new();
//!
//! // Sticks are added first but still end up above the pitch
//! output.add_to_layer(RenderLayer::Sticks, Box::new(Circle::new()));
//! output.add_to_layer(RenderLayer::Field, Box::new(Rectangle::new()));
//!
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use std::fmt;

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// The rendering layers of a drill scene.
///
/// Layers are drawn from bottom to top in declaration order: the pitch first,
/// then players and balls as the base layer, movement arrows above them, and
/// cones and sticks on top of the arrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Background fill and pitch markings
    Field,
    Players,
    Balls,
    /// Movement arrows
    Movements,
    Cones,
    Sticks,
}

impl RenderLayer {
    /// All layers in drawing order.
    pub const ALL: [RenderLayer; 6] = [
        Self::Field,
        Self::Players,
        Self::Balls,
        Self::Movements,
        Self::Cones,
        Self::Sticks,
    ];

    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Field => "field",
            Self::Players => "players",
            Self::Balls => "balls",
            Self::Movements => "movements",
            Self::Cones => "cones",
            Self::Sticks => "sticks",
        }
    }
}

impl fmt::Display for RenderLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Represents SVG nodes grouped by rendering layer.
///
/// When rendered, nodes are emitted in layer order (bottom to top); within a
/// layer they keep the order in which they were added.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Drops every collected node.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of collected nodes.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes an SVG `<g>` element with a `data-layer`
    /// attribute identifying the layer. Empty layers are skipped.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable sort keeps insertion order within a layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use svg::node::element::{Circle, Rectangle};

    #[test]
    fn test_layer_order_matches_declaration() {
        let mut sorted = RenderLayer::ALL;
        sorted.sort();
        assert_eq!(sorted, RenderLayer::ALL);
        assert!(RenderLayer::Players < RenderLayer::Movements);
        assert!(RenderLayer::Movements < RenderLayer::Cones);
    }

    #[test]
    fn test_layered_output_add_and_clear() {
        let mut output = LayeredOutput::new();
        assert!(output.is_empty());

        output.add_to_layer(RenderLayer::Balls, Box::new(Circle::new()));
        assert_eq!(output.len(), 1);

        output.clear();
        assert!(output.is_empty());
    }

    #[test]
    fn test_layered_output_groups_by_layer() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Field, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Players, Box::new(Circle::new()));
        output.add_to_layer(RenderLayer::Players, Box::new(Circle::new()));

        let nodes = output.render();
        assert_eq!(nodes.len(), 2);
    }

    #[test]
    fn test_layered_output_renders_bottom_to_top() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Sticks, Box::new(Circle::new()));
        output.add_to_layer(RenderLayer::Field, Box::new(Rectangle::new()));

        let rendered: Vec<String> = output.render().iter().map(|n| n.to_string()).collect();
        assert!(rendered[0].contains("data-layer=\"field\""));
        assert!(rendered[1].contains("data-layer=\"sticks\""));
    }

    #[test]
    fn test_layered_output_empty_render() {
        assert!(LayeredOutput::new().render().is_empty());
    }
}
