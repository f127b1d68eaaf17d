//! Scene rendering.
//!
//! [`Renderer::render`] is a pure function of the scene and the canvas size.
//! Every pass clears the canvas and repaints everything in a fixed order:
//! field, players, balls, movements, cones, sticks. Glyphs have a fixed size
//! and are not scaled with the canvas.

use log::trace;

use touchline_core::{
    color::Color,
    draw::{DrawCommand, DrawList, RenderLayer, StrokeDefinition, TextStyle},
    geometry::{Bounds, Point, Size},
};

use crate::scene::{FieldType, Marker, Movement, MovementKind, Player, Scene, Team};

/// Inset between the canvas edge and the field on `full` and `half` layouts.
pub const FIELD_MARGIN: f32 = 50.0;
/// Share of the full field kept by the `custom` layout, per axis.
pub const CUSTOM_FIELD_SCALE: f32 = 0.7;
pub const CENTER_CIRCLE_RADIUS: f32 = 50.0;
pub const GOAL_WIDTH: f32 = 30.0;
pub const GOAL_HEIGHT: f32 = 100.0;

pub const PLAYER_RADIUS: f32 = 15.0;
pub const BALL_RADIUS: f32 = 8.0;
pub const CONE_HEIGHT: f32 = 20.0;
pub const CONE_HALF_BASE: f32 = 8.0;
pub const STICK_HEIGHT: f32 = 30.0;
pub const STICK_BASE_RADIUS: f32 = 5.0;
pub const ARROW_HEAD_LENGTH: f32 = 15.0;
/// Angle between each arrowhead stroke and the reversed line direction.
pub const ARROW_HEAD_ANGLE: f32 = std::f32::consts::FRAC_PI_6;

const LINE_WIDTH: f32 = 2.0;
const STICK_WIDTH: f32 = 3.0;
const NUMBER_FONT_FAMILY: &str = "Arial";
const NUMBER_FONT_SIZE: f32 = 12.0;

fn css(color: &str) -> Color {
    Color::new(color).expect("palette defaults are valid CSS colors")
}

/// Colors used for every part of a drill diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub field_lines: Color,
    pub home: Color,
    pub away: Color,
    pub player_outline: Color,
    pub player_number: Color,
    pub ball: Color,
    pub ball_outline: Color,
    pub cone: Color,
    pub cone_outline: Color,
    pub stick: Color,
    pub player_movement: Color,
    pub ball_movement: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: css("#4CAF50"),
            field_lines: css("white"),
            home: css("#2196F3"),
            away: css("#F44336"),
            player_outline: css("white"),
            player_number: css("white"),
            ball: css("#FFFFFF"),
            ball_outline: css("#000000"),
            cone: css("#FF9800"),
            cone_outline: css("#000000"),
            stick: css("#795548"),
            player_movement: css("#FFC107"),
            ball_movement: css("#4CAF50"),
        }
    }
}

impl Palette {
    fn team(&self, team: Team) -> Color {
        match team {
            Team::Home => self.home,
            Team::Away => self.away,
        }
    }

    fn movement(&self, kind: MovementKind) -> Color {
        match kind {
            MovementKind::Player => self.player_movement,
            MovementKind::Ball => self.ball_movement,
        }
    }
}

/// Computes the field rectangle for a canvas size and layout.
///
/// # Examples
///
/// ```
/// # use touchline::render::field_bounds;
/// # use touchline::scene::FieldType;
/// # use touchline::geometry::Size;
/// let half = field_bounds(Size::new(800.0, 600.0), FieldType::Half);
/// assert_eq!(half.min_x(), 50.0);
/// assert_eq!(half.min_y(), 175.0);
/// assert_eq!(half.width(), 700.0);
/// assert_eq!(half.height(), 250.0);
/// ```
pub fn field_bounds(canvas: Size, field_type: FieldType) -> Bounds {
    let full_width = canvas.width() - 2.0 * FIELD_MARGIN;
    let full_height = canvas.height() - 2.0 * FIELD_MARGIN;

    let (width, height, x, y) = match field_type {
        FieldType::Full => (full_width, full_height, FIELD_MARGIN, FIELD_MARGIN),
        FieldType::Half => {
            let height = full_height / 2.0;
            (
                full_width,
                height,
                FIELD_MARGIN,
                (canvas.height() - height) / 2.0,
            )
        }
        FieldType::Custom => {
            let width = full_width * CUSTOM_FIELD_SCALE;
            let height = full_height * CUSTOM_FIELD_SCALE;
            (
                width,
                height,
                (canvas.width() - width) / 2.0,
                (canvas.height() - height) / 2.0,
            )
        }
    };

    Bounds::new_from_top_left(Point::new(x, y), Size::new(width, height))
}

/// The two open ends of a V-shaped arrowhead at `end` for a line coming from `start`.
///
/// Each point lies [`ARROW_HEAD_LENGTH`] back from `end`, rotated by
/// ±[`ARROW_HEAD_ANGLE`] from the line direction.
pub fn arrow_head(start: Point, end: Point) -> [Point; 2] {
    let angle = start.angle_to(end);
    [
        end.offset_polar(-ARROW_HEAD_LENGTH, angle - ARROW_HEAD_ANGLE),
        end.offset_polar(-ARROW_HEAD_LENGTH, angle + ARROW_HEAD_ANGLE),
    ]
}

/// Turns a [`Scene`] into drawing commands.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    palette: Palette,
}

impl Renderer {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Produces the full, ordered command list that repaints the canvas.
    pub fn render(&self, scene: &Scene, canvas: Size) -> DrawList {
        let mut list = DrawList::new();

        self.draw_field(&mut list, canvas, scene.field_type());
        for player in scene.players() {
            self.draw_player(&mut list, player);
        }
        for ball in scene.balls() {
            self.draw_ball(&mut list, ball);
        }
        for movement in scene.movements() {
            self.draw_movement(&mut list, movement);
        }
        for cone in scene.cones() {
            self.draw_cone(&mut list, cone);
        }
        for stick in scene.sticks() {
            self.draw_stick(&mut list, stick);
        }

        trace!(
            commands = list.len(),
            field_type:% = scene.field_type();
            "Rendered scene"
        );
        list
    }

    fn draw_field(&self, list: &mut DrawList, canvas: Size, field_type: FieldType) {
        let layer = RenderLayer::Field;
        let lines = StrokeDefinition::new(self.palette.field_lines, LINE_WIDTH);
        let whole_canvas = Bounds::new_from_top_left(Point::default(), canvas);

        list.push(layer, DrawCommand::Clear { size: canvas });
        list.push(
            layer,
            DrawCommand::FillRect {
                bounds: whole_canvas,
                fill: self.palette.background,
            },
        );

        let field = field_bounds(canvas, field_type);
        list.push(
            layer,
            DrawCommand::StrokeRect {
                bounds: field,
                stroke: lines.clone(),
            },
        );

        if field_type.is_symmetric() {
            let center = canvas.center();
            list.push(
                layer,
                DrawCommand::Circle {
                    center,
                    radius: CENTER_CIRCLE_RADIUS,
                    fill: None,
                    stroke: Some(lines.clone()),
                },
            );
            list.push(
                layer,
                DrawCommand::Line {
                    from: Point::new(center.x(), field.min_y()),
                    to: Point::new(center.x(), field.max_y()),
                    stroke: lines.clone(),
                },
            );
        }

        list.push(layer, goal(field.min_x(), -GOAL_WIDTH, field, &lines));
        if field_type.is_symmetric() {
            list.push(layer, goal(field.max_x(), GOAL_WIDTH, field, &lines));
        }
    }

    fn draw_player(&self, list: &mut DrawList, player: &Player) {
        let layer = RenderLayer::Players;
        let center = player.position();

        list.push(
            layer,
            DrawCommand::Circle {
                center,
                radius: PLAYER_RADIUS,
                fill: Some(self.palette.team(player.team())),
                stroke: Some(StrokeDefinition::new(
                    self.palette.player_outline,
                    LINE_WIDTH,
                )),
            },
        );

        if let Some(number) = player.number() {
            list.push(
                layer,
                DrawCommand::Text {
                    anchor: center,
                    content: number.to_string(),
                    style: TextStyle::new(
                        NUMBER_FONT_FAMILY,
                        NUMBER_FONT_SIZE,
                        self.palette.player_number,
                    ),
                },
            );
        }
    }

    fn draw_ball(&self, list: &mut DrawList, ball: &Marker) {
        list.push(
            RenderLayer::Balls,
            DrawCommand::Circle {
                center: ball.position(),
                radius: BALL_RADIUS,
                fill: Some(self.palette.ball),
                stroke: Some(StrokeDefinition::new(self.palette.ball_outline, LINE_WIDTH)),
            },
        );
    }

    fn draw_movement(&self, list: &mut DrawList, movement: &Movement) {
        let layer = RenderLayer::Movements;
        let stroke = StrokeDefinition::new(self.palette.movement(movement.kind()), LINE_WIDTH);
        let (start, end) = (movement.start(), movement.end());
        let [left, right] = arrow_head(start, end);

        list.push(
            layer,
            DrawCommand::Line {
                from: start,
                to: end,
                stroke: stroke.clone(),
            },
        );
        list.push(
            layer,
            DrawCommand::Path {
                points: vec![left, end, right],
                closed: false,
                fill: None,
                stroke: Some(stroke),
            },
        );
    }

    fn draw_cone(&self, list: &mut DrawList, cone: &Marker) {
        let base = cone.position();
        list.push(
            RenderLayer::Cones,
            DrawCommand::Path {
                points: vec![
                    Point::new(base.x(), base.y() - CONE_HEIGHT),
                    Point::new(base.x() - CONE_HALF_BASE, base.y()),
                    Point::new(base.x() + CONE_HALF_BASE, base.y()),
                ],
                closed: true,
                fill: Some(self.palette.cone),
                stroke: Some(StrokeDefinition::new(self.palette.cone_outline, LINE_WIDTH)),
            },
        );
    }

    fn draw_stick(&self, list: &mut DrawList, stick: &Marker) {
        let layer = RenderLayer::Sticks;
        let base = stick.position();

        list.push(
            layer,
            DrawCommand::Line {
                from: Point::new(base.x(), base.y() - STICK_HEIGHT),
                to: base,
                stroke: StrokeDefinition::new(self.palette.stick, STICK_WIDTH),
            },
        );
        list.push(
            layer,
            DrawCommand::Circle {
                center: base,
                radius: STICK_BASE_RADIUS,
                fill: Some(self.palette.stick),
                stroke: None,
            },
        );
    }
}

/// An open three-sided goal frame on the vertical edge at `edge_x`, opening
/// toward the field and extending `depth` horizontally (negative = leftward).
fn goal(edge_x: f32, depth: f32, field: Bounds, stroke: &StrokeDefinition) -> DrawCommand {
    let mid_y = field.center().y();
    let top = mid_y - GOAL_HEIGHT / 2.0;
    let bottom = mid_y + GOAL_HEIGHT / 2.0;

    DrawCommand::Path {
        points: vec![
            Point::new(edge_x, top),
            Point::new(edge_x + depth, top),
            Point::new(edge_x + depth, bottom),
            Point::new(edge_x, bottom),
        ],
        closed: false,
        fill: None,
        stroke: Some(stroke.clone()),
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    const CANVAS: Size = Size::new(800.0, 600.0);

    fn field_commands(field_type: FieldType) -> Vec<DrawCommand> {
        let mut scene = Scene::new();
        scene.set_field_type(field_type);
        Renderer::default()
            .render(&scene, CANVAS)
            .layer(RenderLayer::Field)
            .cloned()
            .collect()
    }

    fn has_center_circle(commands: &[DrawCommand]) -> bool {
        commands.iter().any(|c| {
            matches!(c, DrawCommand::Circle { radius, .. } if *radius == CENTER_CIRCLE_RADIUS)
        })
    }

    fn has_halfway_line(commands: &[DrawCommand]) -> bool {
        commands
            .iter()
            .any(|c| matches!(c, DrawCommand::Line { from, to, .. } if from.x() == 400.0 && to.x() == 400.0))
    }

    fn goals(commands: &[DrawCommand]) -> Vec<&Vec<Point>> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Path { points, .. } if points.len() == 4 => Some(points),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_field_bounds_full() {
        let bounds = field_bounds(CANVAS, FieldType::Full);
        assert_approx_eq!(f32, bounds.min_x(), 50.0);
        assert_approx_eq!(f32, bounds.min_y(), 50.0);
        assert_approx_eq!(f32, bounds.width(), 700.0);
        assert_approx_eq!(f32, bounds.height(), 500.0);
    }

    #[test]
    fn test_field_bounds_custom_is_centered() {
        let bounds = field_bounds(CANVAS, FieldType::Custom);
        assert_approx_eq!(f32, bounds.width(), 490.0, epsilon = 1e-3);
        assert_approx_eq!(f32, bounds.height(), 350.0, epsilon = 1e-3);
        assert_approx_eq!(f32, bounds.min_x(), 155.0, epsilon = 1e-3);
        assert_approx_eq!(f32, bounds.min_y(), 125.0, epsilon = 1e-3);
        assert_approx_eq!(f32, bounds.center().x(), 400.0, epsilon = 1e-3);
    }

    #[test]
    fn test_render_starts_with_clear_and_background() {
        let commands = field_commands(FieldType::Full);
        assert_eq!(commands[0], DrawCommand::Clear { size: CANVAS });
        assert!(matches!(
            &commands[1],
            DrawCommand::FillRect { bounds, .. } if bounds.to_size() == CANVAS
        ));
        assert!(matches!(&commands[2], DrawCommand::StrokeRect { .. }));
    }

    #[test]
    fn test_full_field_has_center_markings_and_two_goals() {
        let commands = field_commands(FieldType::Full);
        assert!(has_center_circle(&commands));
        assert!(has_halfway_line(&commands));

        let goals = goals(&commands);
        assert_eq!(goals.len(), 2);
        // Left goal extends left of the field, right goal right of it
        assert_approx_eq!(f32, goals[0][1].x(), 20.0);
        assert_approx_eq!(f32, goals[1][1].x(), 780.0);
        assert_approx_eq!(f32, goals[0][0].y(), 250.0);
        assert_approx_eq!(f32, goals[0][3].y(), 350.0);
    }

    #[test]
    fn test_half_field_omits_center_and_far_goal() {
        let commands = field_commands(FieldType::Half);
        assert!(!has_center_circle(&commands));
        assert!(!has_halfway_line(&commands));

        let goals = goals(&commands);
        assert_eq!(goals.len(), 1);
        assert_approx_eq!(f32, goals[0][0].x(), 50.0);
    }

    #[test]
    fn test_custom_field_goals_follow_field_edges() {
        let commands = field_commands(FieldType::Custom);
        assert!(has_center_circle(&commands));
        assert!(has_halfway_line(&commands));

        let goals = goals(&commands);
        assert_eq!(goals.len(), 2);
        assert_approx_eq!(f32, goals[0][0].x(), 155.0, epsilon = 1e-3);
        assert_approx_eq!(f32, goals[1][0].x(), 645.0, epsilon = 1e-3);
    }

    #[test]
    fn test_element_layers_follow_fixed_order() {
        let mut scene = Scene::new();
        // Added in reverse of drawing order
        scene.add_stick(Point::new(1.0, 1.0));
        scene.add_cone(Point::new(2.0, 2.0));
        scene.add_movement(Point::new(0.0, 0.0), Point::new(3.0, 3.0), MovementKind::Ball);
        scene.add_ball(Point::new(4.0, 4.0));
        scene.add_player(Point::new(5.0, 5.0));

        let list = Renderer::default().render(&scene, CANVAS);
        let layers: Vec<_> = list.iter().map(|(layer, _)| *layer).collect();

        let mut sorted = layers.clone();
        sorted.sort();
        assert_eq!(layers, sorted);
        assert_eq!(layers.last(), Some(&RenderLayer::Sticks));
    }

    #[test]
    fn test_player_glyph() {
        let mut scene = Scene::new();
        scene.add_player(Point::new(100.0, 100.0));
        scene.add_player_with_team(Point::new(200.0, 100.0), Team::Away);

        let renderer = Renderer::default();
        let list = renderer.render(&scene, CANVAS);
        let commands: Vec<_> = list.layer(RenderLayer::Players).collect();

        assert_eq!(commands.len(), 4);
        match commands[0] {
            DrawCommand::Circle {
                center,
                radius,
                fill,
                stroke,
            } => {
                assert_eq!(*center, Point::new(100.0, 100.0));
                assert_eq!(*radius, PLAYER_RADIUS);
                assert_eq!(*fill, Some(renderer.palette().home));
                assert!(stroke.is_some());
            }
            other => panic!("expected player circle, got {other:?}"),
        }
        match commands[1] {
            DrawCommand::Text { anchor, content, .. } => {
                assert_eq!(*anchor, Point::new(100.0, 100.0));
                assert_eq!(content, "1");
            }
            other => panic!("expected jersey number, got {other:?}"),
        }
        assert!(matches!(
            commands[2],
            DrawCommand::Circle { fill, .. } if *fill == Some(renderer.palette().away)
        ));
        assert!(matches!(commands[3], DrawCommand::Text { content, .. } if content == "2"));
    }

    #[test]
    fn test_cone_triangle() {
        let mut scene = Scene::new();
        scene.add_cone(Point::new(100.0, 100.0));

        let list = Renderer::default().render(&scene, CANVAS);
        let cone = list.layer(RenderLayer::Cones).next().expect("cone drawn");

        let DrawCommand::Path { points, closed, fill, .. } = cone else {
            panic!("expected cone path, got {cone:?}");
        };
        assert!(*closed);
        assert!(fill.is_some());
        assert_eq!(
            points,
            &vec![
                Point::new(100.0, 80.0),
                Point::new(92.0, 100.0),
                Point::new(108.0, 100.0),
            ]
        );
    }

    #[test]
    fn test_stick_post_and_base() {
        let mut scene = Scene::new();
        scene.add_stick(Point::new(300.0, 200.0));

        let list = Renderer::default().render(&scene, CANVAS);
        let commands: Vec<_> = list.layer(RenderLayer::Sticks).collect();

        assert_eq!(
            commands[0],
            &DrawCommand::Line {
                from: Point::new(300.0, 170.0),
                to: Point::new(300.0, 200.0),
                stroke: StrokeDefinition::new(Renderer::default().palette().stick, 3.0),
            }
        );
        assert!(matches!(
            commands[1],
            DrawCommand::Circle { radius, stroke: None, .. } if *radius == STICK_BASE_RADIUS
        ));
    }

    #[test]
    fn test_arrow_head_geometry() {
        // Horizontal arrow pointing right: head opens back to the left
        let [first, second] = arrow_head(Point::new(0.0, 100.0), Point::new(100.0, 100.0));
        let dx = ARROW_HEAD_LENGTH * ARROW_HEAD_ANGLE.cos();
        let dy = ARROW_HEAD_LENGTH * ARROW_HEAD_ANGLE.sin();

        assert_approx_eq!(f32, first.x(), 100.0 - dx, epsilon = 1e-3);
        assert_approx_eq!(f32, first.y(), 100.0 + dy, epsilon = 1e-3);
        assert_approx_eq!(f32, second.x(), 100.0 - dx, epsilon = 1e-3);
        assert_approx_eq!(f32, second.y(), 100.0 - dy, epsilon = 1e-3);
    }

    #[test]
    fn test_movement_color_by_kind() {
        let mut scene = Scene::new();
        scene.add_movement(Point::new(0.0, 0.0), Point::new(10.0, 0.0), MovementKind::Player);
        scene.add_movement(Point::new(0.0, 0.0), Point::new(0.0, 10.0), MovementKind::Ball);

        let renderer = Renderer::default();
        let list = renderer.render(&scene, CANVAS);
        let colors: Vec<_> = list
            .layer(RenderLayer::Movements)
            .filter_map(|c| match c {
                DrawCommand::Line { stroke, .. } => Some(stroke.color()),
                _ => None,
            })
            .collect();

        assert_eq!(
            colors,
            vec![
                renderer.palette().player_movement,
                renderer.palette().ball_movement
            ]
        );
    }

    #[test]
    fn test_movement_line_then_open_arrow_head() {
        let (start, end) = (Point::new(50.0, 200.0), Point::new(250.0, 100.0));
        let mut scene = Scene::new();
        scene.add_movement(start, end, MovementKind::Ball);

        let renderer = Renderer::default();
        let list = renderer.render(&scene, CANVAS);
        let commands: Vec<_> = list.layer(RenderLayer::Movements).collect();
        let stroke = StrokeDefinition::new(renderer.palette().ball_movement, LINE_WIDTH);
        let [left, right] = arrow_head(start, end);

        assert_eq!(commands.len(), 2);
        assert!(matches!(
            commands[0],
            DrawCommand::Line { from, to, .. } if *from == start && *to == end
        ));
        assert_eq!(
            commands[1],
            &DrawCommand::Path {
                points: vec![left, end, right],
                closed: false,
                fill: None,
                stroke: Some(stroke),
            }
        );
    }
}
