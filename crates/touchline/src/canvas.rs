//! The drill canvas view loop.
//!
//! [`DrillCanvas`] ties a [`Controller`] to a drawing [`Surface`]: every state
//! change (tool, field layout, a new element) triggers a full clear-and-redraw
//! of the scene. When no surface is mounted the pass is skipped and the next
//! state change tries again.

use log::{debug, trace};

use touchline_core::{
    draw::Surface,
    geometry::{Point, Size},
};

use crate::{
    controller::{ClickOutcome, Controller, Tool, canvas_position},
    render::Renderer,
    scene::{ElementId, FieldType, MovementKind, Scene, Team},
};

/// A scene, its controller and the surface it is painted on.
#[derive(Debug)]
pub struct DrillCanvas<S: Surface> {
    controller: Controller,
    renderer: Renderer,
    size: Size,
    surface: Option<S>,
    redraw_count: usize,
}

impl<S: Surface> DrillCanvas<S> {
    /// Creates an unmounted canvas over an empty scene.
    pub fn new(size: Size, renderer: Renderer) -> Self {
        Self {
            controller: Controller::new(Scene::new()),
            renderer,
            size,
            surface: None,
            redraw_count: 0,
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn scene(&self) -> &Scene {
        self.controller.scene()
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Number of render passes that reached a surface.
    pub fn redraw_count(&self) -> usize {
        self.redraw_count
    }

    /// Attaches a surface and paints the current scene on it.
    pub fn mount(&mut self, surface: S) {
        debug!(width = self.size.width(), height = self.size.height(); "Mounting surface");
        self.surface = Some(surface);
        self.redraw();
    }

    /// Detaches and returns the surface, if one is mounted.
    pub fn unmount(&mut self) -> Option<S> {
        debug!("Unmounting surface");
        self.surface.take()
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.controller.set_tool(tool);
        self.redraw();
    }

    pub fn set_field_type(&mut self, field_type: FieldType) {
        self.controller.set_field_type(field_type);
        self.redraw();
    }

    /// Handles a click at a raw pointer position.
    ///
    /// `canvas_origin` is the canvas's on-screen top-left corner in the same
    /// coordinate space as `raw`.
    pub fn click(&mut self, raw: Point, canvas_origin: Point) -> ClickOutcome {
        let position = canvas_position(raw, canvas_origin);
        let outcome = self.controller.handle_click(position);
        self.redraw();
        outcome
    }

    pub fn add_movement(&mut self, start: Point, end: Point, kind: MovementKind) -> ElementId {
        let id = self.controller.scene_mut().add_movement(start, end, kind);
        self.redraw();
        id
    }

    pub fn add_player_with_team(&mut self, position: Point, team: Team) -> ElementId {
        let id = self
            .controller
            .scene_mut()
            .add_player_with_team(position, team);
        self.redraw();
        id
    }

    fn redraw(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            trace!("No surface mounted, skipping redraw");
            return;
        };

        self.renderer
            .render(self.controller.scene(), self.size)
            .replay(surface);
        self.redraw_count += 1;
    }
}
