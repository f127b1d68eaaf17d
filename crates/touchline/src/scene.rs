//! The drill scene: every placed element plus the scene-wide field layout.
//!
//! A [`Scene`] holds five independent, append-only sequences (players, balls,
//! movements, cones, sticks). Elements are never reordered, edited or removed
//! once added; overlapping placements are allowed and draw on top of each
//! other in insertion order. Positions are not validated.

use std::{fmt, str::FromStr};

use log::debug;

use touchline_core::geometry::Point;

/// Error returned when parsing one of the scene's closed enumerations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {what} `{value}`, valid values: {expected}")]
pub struct ParseEnumError {
    what: &'static str,
    value: String,
    expected: &'static str,
}

impl ParseEnumError {
    pub(crate) fn new(what: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            what,
            value: value.to_string(),
            expected,
        }
    }
}

/// Scene-wide pitch layout.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// A complete pitch with both goals
    #[default]
    Full,
    /// One half of a pitch: no center markings, no far goal
    Half,
    /// A reduced area, 70% of the full pitch, centered
    Custom,
}

impl FieldType {
    pub const ALL: [FieldType; 3] = [Self::Full, Self::Half, Self::Custom];

    pub fn name(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Half => "half",
            Self::Custom => "custom",
        }
    }

    /// Whether this layout is mirrored around the halfway line (center
    /// markings and a goal on both ends).
    pub fn is_symmetric(self) -> bool {
        !matches!(self, Self::Half)
    }
}

impl FromStr for FieldType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(Self::Full),
            "half" => Ok(Self::Half),
            "custom" => Ok(Self::Custom),
            _ => Err(ParseEnumError::new("field type", s, "full, half, custom")),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    #[default]
    Home,
    Away,
}

impl FromStr for Team {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Self::Home),
            "away" => Ok(Self::Away),
            _ => Err(ParseEnumError::new("team", s, "home, away")),
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Home => "home",
            Self::Away => "away",
        })
    }
}

/// What a movement arrow describes; only affects its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementKind {
    Player,
    Ball,
}

impl FromStr for MovementKind {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "player" => Ok(Self::Player),
            "ball" => Ok(Self::Ball),
            _ => Err(ParseEnumError::new("movement kind", s, "player, ball")),
        }
    }
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Player => "player",
            Self::Ball => "ball",
        })
    }
}

/// The five kinds of placeable elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Player,
    Ball,
    Movement,
    Cone,
    Stick,
}

impl ElementKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Ball => "ball",
            Self::Movement => "movement",
            Self::Cone => "cone",
            Self::Stick => "stick",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unique identifier of a placed element, e.g. `"cone-4"`.
///
/// The numeric suffix comes from a scene-wide counter, so identifiers stay
/// distinct across kinds and across elements added in quick succession.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(String);

impl ElementId {
    fn new(kind: ElementKind, sequence: u64) -> Self {
        Self(format!("{kind}-{sequence}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    id: ElementId,
    position: Point,
    team: Team,
    number: Option<u32>,
}

impl Player {
    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn team(&self) -> Team {
        self.team
    }

    /// Jersey number, drawn inside the player glyph when present.
    pub fn number(&self) -> Option<u32> {
        self.number
    }
}

/// A ball, cone or stick: an identifier and a position, nothing else.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    id: ElementId,
    position: Point,
}

impl Marker {
    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

pub type Ball = Marker;
pub type Cone = Marker;
pub type Stick = Marker;

/// A directional arrow annotation.
///
/// Start and end are plain positions, not references to other elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Movement {
    id: ElementId,
    start: Point,
    end: Point,
    kind: MovementKind,
}

impl Movement {
    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn kind(&self) -> MovementKind {
        self.kind
    }
}

/// A borrowed view of any element in a scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementRef<'a> {
    Player(&'a Player),
    Ball(&'a Ball),
    Movement(&'a Movement),
    Cone(&'a Cone),
    Stick(&'a Stick),
}

impl ElementRef<'_> {
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Player(_) => ElementKind::Player,
            Self::Ball(_) => ElementKind::Ball,
            Self::Movement(_) => ElementKind::Movement,
            Self::Cone(_) => ElementKind::Cone,
            Self::Stick(_) => ElementKind::Stick,
        }
    }

    pub fn id(&self) -> &ElementId {
        match self {
            Self::Player(player) => player.id(),
            Self::Ball(marker) | Self::Cone(marker) | Self::Stick(marker) => marker.id(),
            Self::Movement(movement) => movement.id(),
        }
    }
}

/// At most one selected element, by kind and identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Selected { kind: ElementKind, id: ElementId },
}

/// All placed elements plus the current field layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    players: Vec<Player>,
    balls: Vec<Ball>,
    movements: Vec<Movement>,
    cones: Vec<Cone>,
    sticks: Vec<Stick>,
    field_type: FieldType,
    last_sequence: u64,
}

impl Scene {
    /// Creates an empty scene with a `full` field.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }

    pub fn cones(&self) -> &[Cone] {
        &self.cones
    }

    pub fn sticks(&self) -> &[Stick] {
        &self.sticks
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Total number of elements across all five sequences.
    pub fn element_count(&self) -> usize {
        self.players.len()
            + self.balls.len()
            + self.movements.len()
            + self.cones.len()
            + self.sticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.element_count() == 0
    }

    /// Appends a home player numbered after the players already placed.
    pub fn add_player(&mut self, position: Point) -> ElementId {
        self.add_player_with_team(position, Team::Home)
    }

    /// Appends a player of the given team. The jersey number is the
    /// player's 1-based position in the players sequence.
    pub fn add_player_with_team(&mut self, position: Point, team: Team) -> ElementId {
        let id = self.next_id(ElementKind::Player);
        let number = u32::try_from(self.players.len() + 1).ok();
        debug!(id = id.as_str(), team:% = team, number:?; "Adding player");
        self.players.push(Player {
            id: id.clone(),
            position,
            team,
            number,
        });
        id
    }

    pub fn add_ball(&mut self, position: Point) -> ElementId {
        let id = self.next_id(ElementKind::Ball);
        debug!(id = id.as_str(); "Adding ball");
        self.balls.push(Marker {
            id: id.clone(),
            position,
        });
        id
    }

    pub fn add_cone(&mut self, position: Point) -> ElementId {
        let id = self.next_id(ElementKind::Cone);
        debug!(id = id.as_str(); "Adding cone");
        self.cones.push(Marker {
            id: id.clone(),
            position,
        });
        id
    }

    pub fn add_stick(&mut self, position: Point) -> ElementId {
        let id = self.next_id(ElementKind::Stick);
        debug!(id = id.as_str(); "Adding stick");
        self.sticks.push(Marker {
            id: id.clone(),
            position,
        });
        id
    }

    pub fn add_movement(&mut self, start: Point, end: Point, kind: MovementKind) -> ElementId {
        let id = self.next_id(ElementKind::Movement);
        debug!(id = id.as_str(), kind:% = kind; "Adding movement");
        self.movements.push(Movement {
            id: id.clone(),
            start,
            end,
            kind,
        });
        id
    }

    /// Replaces the field layout. Element positions are left untouched.
    pub fn set_field_type(&mut self, field_type: FieldType) {
        debug!(field_type:% = field_type; "Setting field type");
        self.field_type = field_type;
    }

    /// Looks up an element by kind and identifier.
    pub fn find(&self, kind: ElementKind, id: &ElementId) -> Option<ElementRef<'_>> {
        match kind {
            ElementKind::Player => self
                .players
                .iter()
                .find(|p| p.id() == id)
                .map(ElementRef::Player),
            ElementKind::Ball => self.balls.iter().find(|b| b.id() == id).map(ElementRef::Ball),
            ElementKind::Movement => self
                .movements
                .iter()
                .find(|m| m.id() == id)
                .map(ElementRef::Movement),
            ElementKind::Cone => self.cones.iter().find(|c| c.id() == id).map(ElementRef::Cone),
            ElementKind::Stick => self
                .sticks
                .iter()
                .find(|s| s.id() == id)
                .map(ElementRef::Stick),
        }
    }

    /// Resolves a selection to the element it names, if it still exists.
    pub fn resolve(&self, selection: &Selection) -> Option<ElementRef<'_>> {
        match selection {
            Selection::None => None,
            Selection::Selected { kind, id } => self.find(*kind, id),
        }
    }

    fn next_id(&mut self, kind: ElementKind) -> ElementId {
        self.last_sequence += 1;
        ElementId::new(kind, self.last_sequence)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_new_scene_is_empty_full_field() {
        let scene = Scene::new();
        assert!(scene.is_empty());
        assert_eq!(scene.field_type(), FieldType::Full);
    }

    #[test]
    fn test_add_player_defaults() {
        let mut scene = Scene::new();
        let id = scene.add_player(Point::new(100.0, 100.0));

        let player = &scene.players()[0];
        assert_eq!(player.id(), &id);
        assert_eq!(player.position(), Point::new(100.0, 100.0));
        assert_eq!(player.team(), Team::Home);
        assert_eq!(player.number(), Some(1));
    }

    #[test]
    fn test_player_numbers_follow_insertion_order() {
        let mut scene = Scene::new();
        scene.add_player(Point::new(1.0, 1.0));
        scene.add_ball(Point::new(2.0, 2.0));
        scene.add_player_with_team(Point::new(3.0, 3.0), Team::Away);
        scene.add_player(Point::new(1.0, 1.0));

        let numbers: Vec<_> = scene.players().iter().map(Player::number).collect();
        assert_eq!(numbers, vec![Some(1), Some(2), Some(3)]);
        assert_eq!(scene.players()[1].team(), Team::Away);
    }

    #[test]
    fn test_ids_are_distinct_across_kinds() {
        let mut scene = Scene::new();
        let ids = [
            scene.add_player(Point::default()),
            scene.add_ball(Point::default()),
            scene.add_cone(Point::default()),
            scene.add_stick(Point::default()),
            scene.add_movement(Point::default(), Point::default(), MovementKind::Ball),
            scene.add_ball(Point::default()),
        ];

        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
        assert_eq!(ids[0].as_str(), "player-1");
        assert_eq!(ids[5].as_str(), "ball-6");
    }

    #[test]
    fn test_out_of_canvas_positions_are_kept() {
        let mut scene = Scene::new();
        scene.add_cone(Point::new(-40.0, 10_000.0));
        assert_eq!(scene.cones()[0].position(), Point::new(-40.0, 10_000.0));
    }

    #[test]
    fn test_set_field_type_keeps_positions() {
        let mut scene = Scene::new();
        scene.add_stick(Point::new(60.0, 60.0));
        scene.set_field_type(FieldType::Half);

        assert_eq!(scene.field_type(), FieldType::Half);
        assert_eq!(scene.sticks()[0].position(), Point::new(60.0, 60.0));
    }

    #[test]
    fn test_add_movement() {
        let mut scene = Scene::new();
        let id = scene.add_movement(
            Point::new(10.0, 10.0),
            Point::new(50.0, 80.0),
            MovementKind::Player,
        );

        let movement = &scene.movements()[0];
        assert_eq!(movement.id(), &id);
        assert_eq!(movement.start(), Point::new(10.0, 10.0));
        assert_eq!(movement.end(), Point::new(50.0, 80.0));
        assert_eq!(movement.kind(), MovementKind::Player);
        assert_eq!(scene.element_count(), 1);
    }

    #[test]
    fn test_find_and_resolve() {
        let mut scene = Scene::new();
        let ball = scene.add_ball(Point::new(5.0, 5.0));
        let cone = scene.add_cone(Point::new(6.0, 6.0));

        let found = scene.find(ElementKind::Ball, &ball).expect("ball exists");
        assert_eq!(found.kind(), ElementKind::Ball);
        assert_eq!(found.id(), &ball);

        // Kind and id must both match
        assert!(scene.find(ElementKind::Ball, &cone).is_none());

        let selection = Selection::Selected {
            kind: ElementKind::Cone,
            id: cone.clone(),
        };
        assert_eq!(scene.resolve(&selection).map(|e| e.id().clone()), Some(cone));
        assert!(scene.resolve(&Selection::None).is_none());
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("half".parse::<FieldType>(), Ok(FieldType::Half));
        assert_eq!("away".parse::<Team>(), Ok(Team::Away));
        assert_eq!("ball".parse::<MovementKind>(), Ok(MovementKind::Ball));

        let err = "quarter".parse::<FieldType>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid field type `quarter`, valid values: full, half, custom"
        );
    }

    #[test]
    fn test_field_type_symmetry() {
        assert!(FieldType::Full.is_symmetric());
        assert!(FieldType::Custom.is_symmetric());
        assert!(!FieldType::Half.is_symmetric());
    }
}
