//! Headless playback of session scripts.

use crate::assets::Assets;
use crate::canvas::Canvas;
use crate::config::Config;
use crate::script::{Script, Step};
use crate::tool::{Dispatcher, FrameInput};
use crate::types::Point;

/// A canvas plus the dispatcher driving it.
pub struct Session {
    canvas: Canvas,
    dispatcher: Dispatcher,
    pointer: Point,
    next_frame: u64,
}

impl Session {
    /// Start a session with a blank canvas sized by `config`.
    pub fn new(config: &Config) -> Self {
        let mut dispatcher = Dispatcher::new(Assets::builtin(), config.seed);
        dispatcher.selection_mut().set_color(config.color.into());
        Self {
            canvas: Canvas::new(config.width, config.height),
            dispatcher,
            pointer: Point::ORIGIN,
            next_frame: 0,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Frames fed to the dispatcher so far.
    pub fn frames(&self) -> u64 {
        self.next_frame
    }

    /// Play every step of a script.
    pub fn run(&mut self, script: &Script) {
        for step in &script.steps {
            self.step(step);
        }
    }

    /// Play one step.
    pub fn step(&mut self, step: &Step) {
        if let Step::Tool(tool) = step {
            self.dispatcher.select_tool(&mut self.canvas, *tool);
            return;
        }

        let sel = self.dispatcher.selection_mut();
        match step {
            Step::Color(c) => sel.set_color(*c),
            Step::Swatch(slot) => sel.pick_swatch(*slot),
            Step::Palette(cycle) => sel.cycle_layer(*cycle),
            Step::Size(cycle) => sel.cycle_size(*cycle),
            Step::Stamp(cycle) => sel.cycle_stamp(*cycle),
            Step::Brush(cycle) => sel.cycle_brush(*cycle),
            Step::Filter(cycle) => sel.cycle_filter(*cycle),
            Step::Glyph(cycle) => sel.cycle_glyph(*cycle),
            Step::Tool(_) | Step::Tap(_) | Step::Stroke(_) | Step::Frame(_) | Step::Wait(_) => {
                for input in step.frames(self.pointer, self.next_frame) {
                    self.feed(&input);
                }
            }
        }
    }

    /// Feed a single frame.
    pub fn feed(&mut self, input: &FrameInput) {
        self.dispatcher.frame(&mut self.canvas, input);
        self.pointer = input.pointer;
        self.next_frame = input.frame + 1;
    }

    /// The canvas as it should be displayed, with any pending shape
    /// preview drawn on a copy.
    pub fn composite(&self) -> Canvas {
        let mut canvas = self.canvas.clone();
        if let Some(op) = self.dispatcher.preview(self.pointer) {
            canvas.draw(&op);
        }
        canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::BrushClock;
    use crate::selection::ToolKind;

    fn config() -> Config {
        Config {
            width: 16,
            height: 12,
            seed: Some(5),
            ..Config::default()
        }
    }

    #[test]
    fn test_new_session_uses_config() {
        let config = Config {
            color: 3,
            ..config()
        };
        let session = Session::new(&config);
        assert_eq!(session.canvas().size(), (16, 12));
        assert_eq!(session.dispatcher().selection().color(), 3);
        assert_eq!(session.frames(), 0);
    }

    #[test]
    fn test_run_script() {
        let script = Script::parse(
            r#"
steps:
  - color: 4
  - tap: [1, 1]
  - tool: line
  - stroke: [[0, 5], [8, 5], [15, 5]]
"#,
        )
        .unwrap();

        let mut session = Session::new(&config());
        session.run(&script);

        assert_eq!(session.canvas().get_pixel(1, 1), Some(4));
        assert_eq!(session.canvas().row(5), &[4; 16]);
        assert_eq!(session.frames(), 6);
    }

    #[test]
    fn test_frame_numbers_continue_across_steps() {
        let mut session = Session::new(&config());
        session.step(&Step::Tool(ToolKind::Stamp));
        session.step(&Step::Wait(1));
        // The stroke starts on frame 1, so its hold lands on frame 2 and re-blits
        session.step(&Step::Stroke(vec![Point::new(4, 4), Point::new(11, 6)]));
        assert_eq!(session.frames(), 4);

        let mut once = Session::new(&config());
        once.step(&Step::Tool(ToolKind::Stamp));
        once.step(&Step::Tap(Point::new(4, 4)));
        assert_ne!(session.canvas(), once.canvas());
    }

    #[test]
    fn test_composite_shows_pending_shape() {
        let mut session = Session::new(&config());
        session.step(&Step::Tool(ToolKind::Rect));
        session.feed(&FrameInput::press(Point::new(2, 2), 0));
        session.feed(&FrameInput::hold(Point::new(4, 4), 1));

        assert_eq!(session.canvas().opaque_count(), 0);
        assert_eq!(session.composite().opaque_count(), 9);
    }

    #[test]
    fn test_seeded_sessions_repeat() {
        let script = Script::parse(
            r#"
steps:
  - tool: algo-brush
  - brush: 6
  - stroke: [[8, 6], [9, 6], [10, 7]]
"#,
        )
        .unwrap();

        let mut a = Session::new(&config());
        let mut b = Session::new(&config());
        a.run(&script);
        b.run(&script);

        assert_eq!(a.canvas(), b.canvas());
        assert_eq!(a.dispatcher().state().clock, BrushClock { angle: 30, step: 3 });
    }
}
