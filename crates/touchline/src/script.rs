//! Drill scripts: a line-oriented replay of a drawing session.
//!
//! A script stands in for the pointer and toolbar events a host UI would
//! deliver, so a drill can be built and rendered headlessly.
//!
//! # Overview
//!
//! Each non-blank line holds one directive. Everything after a `#` is a
//! comment.
//!
//! ```text
//! field half                   # full | half | custom
//! tool player                  # select | player | ball | cone | stick | movement | delete
//! origin 8 8                   # on-screen canvas offset applied to later clicks
//! click 108 108                # raw pointer position
//! movement ball 10 10 200 200  # player | ball, then start and end points
//! player away 300 200          # home | away, then the position
//! ```
//!
//! [`parse`] reads every line and collects a [`ScriptDiagnostic`] per bad
//! line, so one run reports all problems. [`Script::apply`] replays the
//! commands onto a [`DrillCanvas`].

use std::{fmt, ops::Range, str::FromStr};

use log::{debug, info, trace};
use winnow::{
    Parser as _,
    ascii::{space0, space1},
    combinator::{dispatch, eof, fail, preceded, terminated},
    error::{ContextError, ErrMode, ModalResult},
    stream::{LocatingSlice, Location},
    token::take_while,
};

use touchline_core::{draw::Surface, geometry::Point};

use crate::{
    canvas::DrillCanvas,
    controller::Tool,
    scene::{FieldType, MovementKind, Team},
};

/// A single replayable step of a drawing session.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    Field(FieldType),
    Tool(Tool),
    /// Sets the canvas's on-screen offset for subsequent clicks
    Origin(Point),
    /// A raw pointer click, translated by the current origin
    Click(Point),
    Movement {
        kind: MovementKind,
        start: Point,
        end: Point,
    },
    Player {
        team: Team,
        position: Point,
    },
}

/// A parsed drill script.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    commands: Vec<ScriptCommand>,
}

impl Script {
    pub fn new(commands: Vec<ScriptCommand>) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> &[ScriptCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Replays every command onto `canvas` in order.
    ///
    /// The origin starts at `(0, 0)` and only affects `click` commands that
    /// follow it.
    pub fn apply<S: Surface>(&self, canvas: &mut DrillCanvas<S>) {
        info!(commands = self.commands.len(); "Replaying script");

        let mut origin = Point::default();
        for command in &self.commands {
            trace!(command:?; "Applying command");
            match *command {
                ScriptCommand::Field(field_type) => canvas.set_field_type(field_type),
                ScriptCommand::Tool(tool) => canvas.set_tool(tool),
                ScriptCommand::Origin(point) => origin = point,
                ScriptCommand::Click(raw) => {
                    let outcome = canvas.click(raw, origin);
                    debug!(outcome:?; "Click handled");
                }
                ScriptCommand::Movement { kind, start, end } => {
                    canvas.add_movement(start, end, kind);
                }
                ScriptCommand::Player { team, position } => {
                    canvas.add_player_with_team(position, team);
                }
            }
        }
    }
}

/// A problem found on one script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptDiagnostic {
    message: String,
    span: Range<usize>,
    help: Option<String>,
}

impl ScriptDiagnostic {
    pub fn new(message: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            message: message.into(),
            span,
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Byte range of the offending text in the script source.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }
}

impl fmt::Display for ScriptDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Every diagnostic produced while parsing a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptError {
    diagnostics: Vec<ScriptDiagnostic>,
}

impl ScriptError {
    pub fn new(diagnostics: Vec<ScriptDiagnostic>) -> Self {
        Self { diagnostics }
    }

    pub fn diagnostics(&self) -> &[ScriptDiagnostic] {
        &self.diagnostics
    }
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(first) = self.diagnostics.first() {
            write!(f, "{first}")?;
            if self.diagnostics.len() > 1 {
                write!(f, " (+{} more)", self.diagnostics.len() - 1)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ScriptError {}

/// Describes what an argument position expects.
///
/// Attached to winnow errors via `.context()`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Expectation {
    message: &'static str,
    help: Option<&'static str>,
}

const DIRECTIVES: [&str; 6] = ["field", "tool", "origin", "click", "movement", "player"];

const UNKNOWN_DIRECTIVE: Expectation = Expectation {
    message: "unknown directive",
    help: Some("expected one of: field, tool, origin, click, movement, player"),
};
const FIELD_TYPE: Expectation = Expectation {
    message: "expected a field type",
    help: Some("valid field types: full, half, custom"),
};
const TOOL: Expectation = Expectation {
    message: "expected a tool",
    help: Some("valid tools: select, player, ball, cone, stick, movement, delete"),
};
const MOVEMENT_KIND: Expectation = Expectation {
    message: "expected a movement kind",
    help: Some("valid movement kinds: player, ball"),
};
const TEAM: Expectation = Expectation {
    message: "expected a team",
    help: Some("valid teams: home, away"),
};
const COORDINATE: Expectation = Expectation {
    message: "expected a coordinate",
    help: Some("coordinates are finite numbers such as `120` or `-4.5`"),
};
const END_OF_LINE: Expectation = Expectation {
    message: "unexpected trailing input",
    help: Some("each line holds exactly one directive"),
};

type Input<'a> = LocatingSlice<&'a str>;
type PResult<O> = ModalResult<O, ContextError<Expectation>>;

fn word<'a>(input: &mut Input<'a>) -> PResult<&'a str> {
    take_while(1.., |c: char| !c.is_whitespace()).parse_next(input)
}

fn keyword<'a>(input: &mut Input<'a>) -> PResult<&'a str> {
    word.verify(|w: &str| DIRECTIVES.contains(&w))
        .context(UNKNOWN_DIRECTIVE)
        .parse_next(input)
}

/// A named value such as a field type or team, parsed through its `FromStr`.
fn value<T>(input: &mut Input<'_>) -> PResult<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    word.try_map(str::parse::<T>).parse_next(input)
}

fn number(input: &mut Input<'_>) -> PResult<f32> {
    word.verify_map(|w: &str| w.parse::<f32>().ok().filter(|v| v.is_finite()))
        .parse_next(input)
}

fn coordinate(input: &mut Input<'_>) -> PResult<f32> {
    preceded(space1, number)
        .context(COORDINATE)
        .parse_next(input)
}

fn point(input: &mut Input<'_>) -> PResult<Point> {
    (coordinate, coordinate)
        .map(|(x, y)| Point::new(x, y))
        .parse_next(input)
}

fn directive(input: &mut Input<'_>) -> PResult<ScriptCommand> {
    dispatch! {keyword;
        "field" => preceded(space1, value::<FieldType>).context(FIELD_TYPE).map(ScriptCommand::Field),
        "tool" => preceded(space1, value::<Tool>).context(TOOL).map(ScriptCommand::Tool),
        "origin" => point.map(ScriptCommand::Origin),
        "click" => point.map(ScriptCommand::Click),
        "movement" => (preceded(space1, value::<MovementKind>).context(MOVEMENT_KIND), point, point)
            .map(|(kind, start, end)| ScriptCommand::Movement { kind, start, end }),
        "player" => (preceded(space1, value::<Team>).context(TEAM), point)
            .map(|(team, position)| ScriptCommand::Player { team, position }),
        _ => fail,
    }
    .parse_next(input)
}

fn line(input: &mut Input<'_>) -> PResult<ScriptCommand> {
    terminated(directive, (space0, eof).context(END_OF_LINE)).parse_next(input)
}

/// Parses a drill script.
///
/// # Errors
///
/// Returns a [`ScriptError`] holding one diagnostic per line that could not
/// be parsed.
///
/// # Examples
///
/// ```
/// # use touchline::script::{parse, ScriptCommand};
/// # use touchline::scene::FieldType;
/// let script = parse("field half\ntool cone # arm the cone tool\n").unwrap();
/// assert_eq!(script.commands()[0], ScriptCommand::Field(FieldType::Half));
/// assert_eq!(script.len(), 2);
///
/// let err = parse("field diagonal\nkick 1 2\n").unwrap_err();
/// assert_eq!(err.diagnostics().len(), 2);
/// ```
pub fn parse(source: &str) -> Result<Script, ScriptError> {
    let mut commands = Vec::new();
    let mut diagnostics = Vec::new();

    let mut line_start = 0;
    for raw_line in source.split_inclusive('\n') {
        let offset = line_start;
        line_start += raw_line.len();

        let without_comment = raw_line.split('#').next().unwrap_or_default();
        let content = without_comment.trim();
        if content.is_empty() {
            continue;
        }
        let content_offset = offset + (without_comment.len() - without_comment.trim_start().len());

        let mut input = LocatingSlice::new(content);
        match line.parse_next(&mut input) {
            Ok(command) => commands.push(command),
            Err(err) => {
                let error_pos = input.current_token_start();
                diagnostics.push(convert_err_mode(err, content, error_pos, content_offset));
            }
        }
    }

    if diagnostics.is_empty() {
        debug!(commands = commands.len(); "Script parsed");
        Ok(Script::new(commands))
    } else {
        debug!(errors = diagnostics.len(); "Script has errors");
        Err(ScriptError::new(diagnostics))
    }
}

/// Converts a failed line parse into a diagnostic spanning the offending word.
fn convert_err_mode(
    err: ErrMode<ContextError<Expectation>>,
    content: &str,
    error_pos: usize,
    content_offset: usize,
) -> ScriptDiagnostic {
    let context_error = match err {
        ErrMode::Backtrack(ctx) | ErrMode::Cut(ctx) => ctx,
        ErrMode::Incomplete(_) => ContextError::new(),
    };

    let token = token_span(content, error_pos);
    let span = (content_offset + token.start)..(content_offset + token.end);

    let expectation = context_error.context().next();
    let message = match (context_error.cause(), expectation) {
        (Some(cause), _) => cause.to_string(),
        (None, Some(expectation)) => expectation.message.to_string(),
        (None, None) => "invalid directive".to_string(),
    };

    let diagnostic = ScriptDiagnostic::new(message, span);
    match expectation.and_then(|expectation| expectation.help) {
        Some(help) => diagnostic.with_help(help),
        None => diagnostic,
    }
}

/// The whitespace-delimited word at or after `from`, or an empty range at
/// the end of the line.
fn token_span(content: &str, from: usize) -> Range<usize> {
    let from = from.min(content.len());
    let rest = content.get(from..).unwrap_or_default();
    let start = from + (rest.len() - rest.trim_start().len());
    let end = content
        .get(start..)
        .and_then(|tail| tail.find(char::is_whitespace))
        .map_or(content.len(), |len| start + len);
    start..end
}
