//! The drawing-target seam.

use crate::draw::{DrawCommand, RenderLayer};

/// A target that executes drawing commands immediately.
///
/// A surface keeps no knowledge of the scene. Each render pass starts with a
/// [`DrawCommand::Clear`] and repaints everything, so implementations only
/// need to honor commands in the order they arrive.
pub trait Surface {
    /// Executes one command belonging to `layer`.
    fn draw(&mut self, layer: RenderLayer, command: &DrawCommand);
}
