//! Drawing primitives for the drill canvas.
//!
//! The renderer never touches a drawing surface directly. It produces a
//! [`DrawList`]: an ordered sequence of immediate [`DrawCommand`]s, each tagged
//! with the [`RenderLayer`] it belongs to. A [`Surface`] executes such a list
//! from scratch on every pass.

mod command;
mod layer;
mod stroke;
mod surface;

pub use command::{DrawCommand, DrawList, TextStyle};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use stroke::StrokeDefinition;
pub use surface::Surface;
