//! End-to-end engine behaviour through the public API.

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use pxpaint::brush::{self, generate};
use pxpaint::filter::{flip_x, flip_y, invert, pixelate, rotate_90};
use pxpaint::{
    Assets, BrushClock, BrushInput, BrushKind, Canvas, Cycle, Dispatcher, FrameInput,
    PaletteLayer, Point, Selection, ToolKind,
};

fn noisy_canvas(width: usize, height: usize, seed: u64) -> Canvas {
    use rand::Rng;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut canvas = Canvas::new(width, height);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            canvas.set_pixel(x, y, rng.gen_range(0..16));
        }
    }
    canvas
}

#[test]
fn diagonal_line() {
    let mut canvas = Canvas::new(8, 8);
    canvas.line(0, 0, 7, 7, 3);

    assert_eq!(canvas.get_pixel(3, 3), Some(3));
    assert_eq!(canvas.get_pixel(0, 7), Some(0));
    assert_eq!(canvas.opaque_count(), 8);
}

#[test]
fn filled_rect() {
    let mut canvas = Canvas::new(8, 8);
    canvas.rect_filled(2, 2, 3, 3, 5);

    assert_eq!(canvas.get_pixel(2, 2), Some(5));
    assert_eq!(canvas.get_pixel(4, 4), Some(5));
    assert_eq!(canvas.get_pixel(5, 5), Some(0));
}

#[test]
fn rect_round_trip_leaves_outside_alone() {
    let mut canvas = noisy_canvas(20, 14, 3);
    let before = canvas.clone();
    canvas.rect_filled(4, 3, 9, 6, 12);

    for y in 0..14 {
        for x in 0..20 {
            let inside = (4..13).contains(&x) && (3..9).contains(&y);
            let expected = if inside { Some(12) } else { before.get_pixel(x, y) };
            assert_eq!(canvas.get_pixel(x, y), expected, "({x}, {y})");
        }
    }
}

#[test]
fn off_canvas_drawing_is_clipped() {
    let mut canvas = Canvas::new(10, 10);
    canvas.set_pixel(-1, 0, 5);
    canvas.set_pixel(10, 10, 5);
    assert_eq!(canvas.opaque_count(), 0);
    assert_eq!(canvas.get_pixel(-1, 0), None);

    canvas.circle_filled(0, 0, 3, 4);
    canvas.rect_outline(-5, -5, 8, 8, 4);
    canvas.line(-20, 5, 30, 5, 4);
    assert!(canvas.pixels().iter().all(|&c| c == 0 || c == 4));
    assert_eq!(canvas.pixels().len(), 100);
}

#[test]
fn wave_brush_at_origin_draws_nothing() {
    let input = BrushInput {
        cursor: Point::ORIGIN,
        previous: Some(Point::ORIGIN),
        clock: BrushClock::default(),
        layer: PaletteLayer::get(0),
    };
    let mut rng = StdRng::seed_from_u64(0);
    assert!(generate(BrushKind::Waves, &input, &mut rng).is_empty());
}

#[test]
fn pixelate_majority_block() {
    let canvas = Canvas::from_pattern(&["3333", "3353", "5335", "5355"]);
    assert_eq!(canvas.pixels().iter().filter(|&&c| c == 3).count(), 10);
    assert_eq!(pixelate(&canvas), Canvas::filled(4, 4, 3));
}

#[test]
fn rotate_wide_canvas() {
    let canvas = Canvas::from_pattern(&["123456", "789abc"]);
    let rotated = rotate_90(&canvas);

    assert_eq!(rotated.size(), (6, 2));
    // The 2-wide rotated image sits in columns 2 and 3
    assert_eq!(rotated.row(0), &[0, 0, 9, 3, 0, 0]);
    assert_eq!(rotated.row(1), &[0, 0, 0xa, 4, 0, 0]);
}

#[test]
fn brush_clock_advances_by_two() {
    let mut rng = StdRng::seed_from_u64(11);
    for kind in BrushKind::ALL {
        let mut canvas = Canvas::new(40, 40);
        let at = Point::new(20, 20);
        let mut clock = BrushClock { angle: 355, step: 0 };
        for _ in 0..2 {
            let input = BrushInput {
                cursor: at,
                previous: Some(at),
                clock,
                layer: PaletteLayer::get(1),
            };
            clock = brush::apply(kind, &mut canvas, &input, &mut rng);
        }
        assert_eq!(clock, BrushClock { angle: 15, step: 2 }, "{kind}");
    }
}

#[test]
fn flips_are_involutions() {
    let canvas = noisy_canvas(13, 7, 1);
    assert_eq!(flip_x(&flip_x(&canvas)), canvas);
    assert_eq!(flip_y(&flip_y(&canvas)), canvas);
}

#[test]
fn invert_is_an_involution_without_fifteen() {
    let mut canvas = noisy_canvas(13, 7, 2);
    for c in 0..canvas.pixels().len() {
        let (x, y) = ((c % 13) as i32, (c / 13) as i32);
        if canvas.get_pixel(x, y) == Some(15) {
            canvas.set_pixel(x, y, 14);
        }
    }
    assert_eq!(invert(&invert(&canvas)), canvas);
}

#[test]
fn selection_wraps_both_ways() {
    let mut sel = Selection::new(14, 36);

    sel.cycle_layer(Cycle::PREV);
    sel.cycle_layer(Cycle::NEXT);
    assert_eq!(sel.layer().index(), 0);

    for _ in 0..14 {
        sel.cycle_stamp(Cycle::NEXT);
    }
    assert_eq!(sel.stamp_index(), 0);

    sel.cycle_brush(Cycle::PREV);
    assert_eq!(sel.brush(), BrushKind::Waves);
}

#[test]
fn stroke_through_origin_is_not_a_sentinel() {
    let mut d = Dispatcher::new(Assets::builtin(), Some(1));
    let mut canvas = Canvas::new(16, 16);
    d.select_tool(&mut canvas, ToolKind::AlgoBrush);
    d.selection_mut().cycle_brush(Cycle::To(BrushKind::Waves.index()));
    d.selection_mut().cycle_layer(Cycle::To(1));

    d.frame(&mut canvas, &FrameInput::hover(Point::ORIGIN, 0));
    d.frame(&mut canvas, &FrameInput::press(Point::new(10, 0), 1));

    assert!(canvas.opaque_count() > 0);
}

fn far_drag(tool: ToolKind, press: Point, far: Point) -> Canvas {
    let mut d = Dispatcher::new(Assets::builtin(), Some(5));
    let mut canvas = Canvas::new(16, 8);
    d.select_tool(&mut canvas, tool);
    d.frame(&mut canvas, &FrameInput::press(press, 0));
    d.frame(&mut canvas, &FrameInput::hold(far, 1));
    d.frame(&mut canvas, &FrameInput::release(far, 2));
    canvas
}

#[test]
fn shapes_released_at_extreme_coordinates() {
    let rect = far_drag(ToolKind::Rect, Point::new(2, 2), Point::new(i32::MAX, 0));
    assert_eq!(rect.opaque_count(), 14 * 3);
    assert_eq!(rect.get_pixel(15, 0), Some(7));
    assert_eq!(rect.get_pixel(1, 1), Some(0));

    let circle = far_drag(ToolKind::Circle, Point::new(3, 3), Point::new(i32::MIN, 5));
    assert_eq!(circle.opaque_count(), 16 * 8);

    let line = far_drag(ToolKind::Line, Point::new(0, 3), Point::new(i32::MAX, 3));
    assert_eq!(line.row(3), &[7; 16]);
    assert_eq!(line.opaque_count(), 16);
}

#[test]
fn continuation_from_extreme_previous_position() {
    let mut d = Dispatcher::new(Assets::builtin(), Some(5));
    let mut canvas = Canvas::new(16, 8);
    d.select_tool(&mut canvas, ToolKind::Pencil);

    d.frame(&mut canvas, &FrameInput::press(Point::new(3, 3), 0));
    d.frame(&mut canvas, &FrameInput::hold(Point::new(i32::MAX, 0), 1));
    d.frame(&mut canvas, &FrameInput::hold(Point::new(4, 4), 2));

    assert_eq!(canvas.get_pixel(4, 4), Some(7));
    assert_eq!(canvas.get_pixel(15, 4), Some(7));
}

#[test]
fn brushes_after_hovering_at_extreme_coordinates() {
    for kind in BrushKind::ALL {
        let mut d = Dispatcher::new(Assets::builtin(), Some(5));
        let mut canvas = Canvas::new(16, 8);
        d.select_tool(&mut canvas, ToolKind::AlgoBrush);
        d.selection_mut().cycle_brush(Cycle::To(kind.index()));

        d.frame(&mut canvas, &FrameInput::hover(Point::new(i32::MIN, 0), 0));
        d.frame(&mut canvas, &FrameInput::press(Point::new(5, 5), 1));

        assert_eq!(d.state().clock.step, 1, "{kind}");
    }
}
