//! Interaction controller: the armed tool and how a click turns into a scene mutation.

use std::{fmt, str::FromStr};

use log::debug;

use touchline_core::geometry::Point;

use crate::scene::{
    ElementId, ElementKind, ElementRef, FieldType, ParseEnumError, Scene, Selection,
};

/// The interaction mode that decides what a canvas click produces.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    #[default]
    Select,
    Player,
    Ball,
    Cone,
    Stick,
    Movement,
    Delete,
}

impl Tool {
    /// All tools in toolbar order.
    pub const ALL: [Tool; 7] = [
        Self::Select,
        Self::Player,
        Self::Ball,
        Self::Cone,
        Self::Stick,
        Self::Movement,
        Self::Delete,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Player => "player",
            Self::Ball => "ball",
            Self::Cone => "cone",
            Self::Stick => "stick",
            Self::Movement => "movement",
            Self::Delete => "delete",
        }
    }
}

impl FromStr for Tool {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.name() == s)
            .ok_or_else(|| {
                ParseEnumError::new(
                    "tool",
                    s,
                    "select, player, ball, cone, stick, movement, delete",
                )
            })
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a click did to the scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A new element was appended
    Placed { kind: ElementKind, id: ElementId },
    /// The armed tool has no click effect; the scene is unchanged
    Ignored { tool: Tool },
}

impl ClickOutcome {
    pub fn is_placed(&self) -> bool {
        matches!(self, Self::Placed { .. })
    }
}

/// Converts a raw pointer position into canvas-local coordinates by
/// subtracting the canvas's on-screen top-left offset.
///
/// # Examples
///
/// ```
/// # use touchline::controller::canvas_position;
/// # use touchline::geometry::Point;
/// let local = canvas_position(Point::new(132.0, 240.0), Point::new(32.0, 140.0));
/// assert_eq!(local, Point::new(100.0, 100.0));
/// ```
pub fn canvas_position(raw: Point, canvas_origin: Point) -> Point {
    raw.sub_point(canvas_origin)
}

/// Owns the scene together with the tool and selection state driving it.
///
/// The field layout lives on the scene; the controller reads and writes it
/// there so there is a single source of truth.
#[derive(Debug, Default)]
pub struct Controller {
    scene: Scene,
    tool: Tool,
    selection: Selection,
}

impl Controller {
    /// Creates a controller over `scene` with the `select` tool armed.
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            tool: Tool::default(),
            selection: Selection::None,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable access for operations no tool triggers, such as adding movements.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        debug!(tool:% = tool; "Selecting tool");
        self.tool = tool;
    }

    pub fn field_type(&self) -> FieldType {
        self.scene.field_type()
    }

    pub fn set_field_type(&mut self, field_type: FieldType) {
        self.scene.set_field_type(field_type);
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Marks an element as selected. No tool sets this; hosts call it directly.
    pub fn select(&mut self, kind: ElementKind, id: ElementId) {
        self.selection = Selection::Selected { kind, id };
    }

    pub fn clear_selection(&mut self) {
        self.selection = Selection::None;
    }

    /// The currently selected element, if the selection names one that exists.
    pub fn selected_element(&self) -> Option<ElementRef<'_>> {
        self.scene.resolve(&self.selection)
    }

    /// Applies the armed tool at a canvas-local position.
    pub fn handle_click(&mut self, position: Point) -> ClickOutcome {
        let (kind, id) = match self.tool {
            Tool::Player => (ElementKind::Player, self.scene.add_player(position)),
            Tool::Ball => (ElementKind::Ball, self.scene.add_ball(position)),
            Tool::Cone => (ElementKind::Cone, self.scene.add_cone(position)),
            Tool::Stick => (ElementKind::Stick, self.scene.add_stick(position)),
            // Selectable, but without a click effect
            Tool::Select | Tool::Movement | Tool::Delete => {
                debug!(tool:% = self.tool; "Tool has no click action");
                return ClickOutcome::Ignored { tool: self.tool };
            }
        };

        ClickOutcome::Placed { kind, id }
    }
}
