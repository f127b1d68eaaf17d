//! Integration tests for the DrillBuilder API
//!
//! These tests drive whole drawing sessions through scripts and check the
//! rendered SVG.

use touchline::{
    DrillBuilder, TouchlineError,
    config::AppConfig,
    render::Palette,
    scene::{FieldType, Team},
};

fn render(source: &str) -> String {
    let builder = DrillBuilder::default();
    let script = builder.parse(source).expect("Failed to parse script");
    builder.render_svg(&script).expect("Failed to render")
}

#[test]
fn test_empty_script_renders_full_field() {
    let svg = render("");

    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains("data-layer=\"field\""));
    // Center circle is part of the full field
    assert!(svg.contains("r=\"50\""));
    assert!(!svg.contains("data-layer=\"players\""));
}

#[test]
fn test_half_field_drops_center_markings() {
    let svg = render("field half\n");

    assert!(!svg.contains("r=\"50\""));
}

#[test]
fn test_session_with_every_element_kind() {
    let source = "\
field full
tool player
origin 10 20
click 110 120
click 210 120
tool ball
click 160 170
tool cone
click 310 320
tool stick
click 410 420
movement player 100 100 200 200
player away 500 300
";
    let svg = render(source);

    for layer in ["field", "players", "balls", "movements", "cones", "sticks"] {
        assert!(
            svg.contains(&format!("data-layer=\"{layer}\"")),
            "missing {layer} layer"
        );
    }
    // One jersey number per player, the away player included
    assert_eq!(svg.matches("<text").count(), 3);

    let palette = Palette::default();
    assert!(svg.contains(&palette.home.to_string()));
    assert!(svg.contains(&palette.away.to_string()));
}

#[test]
fn test_ignored_tools_leave_only_the_field() {
    let svg = render("tool select\nclick 1 1\ntool movement\nclick 2 2\ntool delete\nclick 3 3\n");

    assert!(svg.contains("data-layer=\"field\""));
    assert!(!svg.contains("data-layer=\"players\""));
    assert!(!svg.contains("data-layer=\"balls\""));
    assert!(!svg.contains("data-layer=\"movements\""));
}

#[test]
fn test_parse_error_keeps_source() {
    let builder = DrillBuilder::default();
    let source = "field diagonal\n";

    match builder.parse(source) {
        Err(TouchlineError::Script { err, src }) => {
            assert_eq!(src, source);
            assert_eq!(err.diagnostics().len(), 1);
        }
        other => panic!("expected script error, got {other:?}"),
    }
}

#[test]
fn test_invalid_palette_color_is_config_error() {
    let config: AppConfig = toml::from_str("[style]\nhome_color = \"not-a-color\"\n").unwrap();
    let builder = DrillBuilder::new(config);
    let script = builder.parse("tool player\nclick 1 1\n").unwrap();

    let err = builder.render_svg(&script).unwrap_err();
    assert!(matches!(err, TouchlineError::Config(_)));
}

#[test]
fn test_canvas_size_from_config() {
    let config: AppConfig = toml::from_str("[canvas]\nwidth = 1000\nheight = 700\n").unwrap();
    let builder = DrillBuilder::new(config);
    let script = builder.parse("").unwrap();

    let svg = builder.render_svg(&script).unwrap();
    assert!(svg.contains("width=\"1000\""));
    assert!(svg.contains("height=\"700\""));
}

#[test]
fn test_zero_width_canvas_is_config_error() {
    let config: AppConfig = toml::from_str("[canvas]\nwidth = 0\n").unwrap();
    let builder = DrillBuilder::new(config);
    let script = builder.parse("").unwrap();

    let err = builder.render_svg(&script).unwrap_err();
    assert!(matches!(err, TouchlineError::Config(ref msg) if msg.contains("width")));
}

#[test]
fn test_parsed_script_exposes_commands() {
    let builder = DrillBuilder::default();
    let script = builder
        .parse("field custom\nplayer home 1 2\n")
        .expect("valid script");

    assert_eq!(script.len(), 2);
    assert!(matches!(
        script.commands()[0],
        touchline::script::ScriptCommand::Field(FieldType::Custom)
    ));
    assert!(matches!(
        script.commands()[1],
        touchline::script::ScriptCommand::Player {
            team: Team::Home,
            ..
        }
    ));
}
