//! Script playback through the session runner and preview output.

use pretty_assertions::assert_eq;

use pxpaint::preview::{render_hex, Snapshot};
use pxpaint::validation::Bounds;
use pxpaint::{validate_script, Assets, Canvas, Config, Script, Session};

fn config(width: usize, height: usize) -> Config {
    Config {
        width,
        height,
        seed: Some(7),
        ..Config::default()
    }
}

fn play(yaml: &str, width: usize, height: usize) -> Session {
    let script = Script::parse(yaml).unwrap();
    let mut session = Session::new(&config(width, height));
    session.run(&script);
    session
}

#[test]
fn shapes_script() {
    let session = play(
        r#"
steps:
  - tool: rect
  - color: 3
  - stroke: [[4, 3], [2, 1], [1, 1]]
  - tool: line
  - color: 9
  - stroke: [[0, 5], [7, 5]]
"#,
        8,
        6,
    );

    insta::assert_snapshot!(render_hex(session.canvas()).trim_end(), @r"
    ........
    .3333...
    .3333...
    .3333...
    ........
    99999999
    ");
}

#[test]
fn fill_then_flip() {
    let session = play(
        r#"
steps:
  - tool: fill
  - color: 2
  - tap: [0, 0]
  - tool: eraser
  - size: 1
  - tap: [1, 1]
  - tool: filter
  - filter: 2
  - tap: [3, 3]
"#,
        6,
        4,
    );

    insta::assert_snapshot!(render_hex(session.canvas()).trim_end(), @r"
    222...
    222...
    222...
    222222
    ");
}

#[test]
fn hex_output_reads_back() {
    let session = play(
        r#"
steps:
  - tool: algo-brush
  - brush: 4
  - stroke: [[8, 8], [9, 8], [10, 9]]
"#,
        20,
        16,
    );

    let text = render_hex(session.canvas());
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(&Canvas::from_pattern(&rows), session.canvas());
}

#[test]
fn script_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.yaml");
    std::fs::write(
        &path,
        "name: stamps\nsteps:\n  - tool: stamp\n  - stamp: 3\n  - tap: [16, 16]\n",
    )
    .unwrap();

    let script = Script::load(&path).unwrap();
    assert_eq!(script.name.as_deref(), Some("stamps"));

    let bounds = Bounds {
        width: 32,
        height: 32,
    };
    assert!(validate_script(&script, bounds, &Assets::builtin()).is_ok());

    let mut session = Session::new(&config(32, 32));
    session.run(&script);
    assert!(session.canvas().opaque_count() > 0);
}

#[test]
fn json_snapshot_describes_session() {
    let session = play(
        r#"
steps:
  - tool: algo-brush
  - brush: 1
  - stroke: [[5, 5], [6, 5]]
"#,
        12,
        10,
    );

    let state = session.dispatcher().state();
    let json = Snapshot::new(session.canvas(), session.frames(), state.clock, &state.selection)
        .to_json()
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["width"], 12);
    assert_eq!(value["height"], 10);
    assert_eq!(value["frames"], 3);
    assert_eq!(value["clock"]["step"], 2);
    assert_eq!(value["selection"]["tool"], "algo-brush");
    assert_eq!(value["selection"]["brush"], "rotating-lines");
    assert_eq!(value["rows"].as_array().map(Vec::len), Some(10));
}
