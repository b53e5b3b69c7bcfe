use super::{CELL_HEIGHT, CELL_WIDTH, Console, ConsoleSettings, cell_positions, grid_shape};
use crate::color::Rgba;
use crate::error::ConsoleError;
use crate::glyph::glyph_for;
use crate::layout::{Rect, Widget};
use crate::render::{Canvas, Damage, GlyphBatch, GlyphSink, Transform2D};
use crate::scroll::Orientation;

fn scale_one() -> Console {
    Console::new(ConsoleSettings {
        font_scale: 1,
        ..ConsoleSettings::default()
    })
}

/// Sink that remembers the last batch it was given.
#[derive(Default)]
struct Capture {
    calls: usize,
    cells: usize,
    scale: u32,
    damage: Damage,
    color: Option<Rgba>,
}

impl GlyphSink for Capture {
    type Error = ConsoleError;

    fn draw_glyphs(&mut self, batch: &GlyphBatch<'_>) -> Result<(), Self::Error> {
        self.calls += 1;
        self.cells = batch.len();
        self.scale = batch.scale;
        self.damage = batch.damage;
        self.color = Some(batch.color);
        Ok(())
    }

    fn draw_outline(&mut self, _points: &[[f32; 2]], _color: Rgba) -> Result<(), Self::Error> {
        Ok(())
    }
}

// --- grid math ---

#[test]
fn grid_shape_floors_and_clamps() {
    assert_eq!(grid_shape([600.0, 240.0], 12), (2, 8));
    assert_eq!(grid_shape([60.0, 100.0], 1), (10, 10));
    assert_eq!(grid_shape([5.0, 9.0], 1), (1, 1));
    assert_eq!(grid_shape([0.0, 0.0], 12), (1, 1));
    assert_eq!(grid_shape([-50.0, f32::NAN], 1), (1, 1));
    assert_eq!(grid_shape([f32::INFINITY, 20.0], 1), (2, 1));
}

#[test]
fn cell_positions_hang_from_top_edge() {
    let p = cell_positions(2, 3);
    assert_eq!(p.len(), 6);
    // Row 0 is the bottom row.
    assert_eq!(p[0], [4.0, -16.0]);
    assert_eq!(p[2], [16.0, -16.0]);
    // Top row's sprite centre sits 6 units below the top edge.
    assert_eq!(p[3], [4.0, -6.0]);
    assert_eq!(p[5], [16.0, -6.0]);
}

#[test]
fn cell_advance_constants() {
    assert_eq!((CELL_WIDTH, CELL_HEIGHT), (6, 10));
}

// --- construction and sizing ---

#[test]
fn new_console_defaults() {
    let c = Console::default();
    assert_eq!((c.rows(), c.cols()), (1, 1));
    assert_eq!(c.text_color(), Rgba::BLACK);
    assert_eq!(c.font_scale(), 12);
    assert_eq!(c.orientation(), Orientation::ScrollUp);
    assert_eq!(c.size(), [1.0, 1.0]);
    assert_eq!(c.damage(), Damage::all());
}

#[test]
fn set_size_recomputes_grid_and_positions() {
    let mut c = Console::default();
    c.set_size([600.0, 240.0]);
    assert_eq!((c.rows(), c.cols()), (2, 8));
    assert_eq!(c.positions().len(), 16);
    assert_eq!(c.buffer().bytes_012().len(), 16 * 3);
    assert_eq!(c.positions(), cell_positions(2, 8).as_slice());
}

#[test]
fn set_size_replays_history() {
    let mut c = scale_one();
    c.set_size([60.0, 30.0]);
    c.write("one\ntwo\nthree", true);
    c.set_size([60.0, 20.0]);
    assert_eq!(c.rows(), 2);
    assert_eq!(c.history().iter().collect::<Vec<_>>(), vec!["three", "two", "one"]);
    c.set_size([60.0, 30.0]);
    assert_eq!(c.buffer().cursor_row(), Some(0));
}

#[test]
fn set_rect_moves_and_sizes() {
    let mut c = scale_one();
    c.set_rect(Rect::new([10.0, 20.0], [30.0, 40.0]));
    assert_eq!(c.pos(), [10.0, 20.0]);
    assert_eq!((c.rows(), c.cols()), (4, 5));
}

#[test]
fn font_scale_is_floored_and_clamped() {
    let mut c = Console::default();
    c.set_size([120.0, 100.0]);
    c.set_font_scale(2.9);
    assert_eq!(c.font_scale(), 2);
    assert_eq!((c.rows(), c.cols()), (5, 10));
    c.set_font_scale(0.5);
    assert_eq!(c.font_scale(), 1);
    assert_eq!((c.rows(), c.cols()), (10, 20));
    c.set_font_scale(-3.0);
    assert_eq!(c.font_scale(), 1);
    c.set_font_scale(f32::NAN);
    assert_eq!(c.font_scale(), 1);
}

#[test]
fn zero_scale_setting_is_clamped() {
    let c = Console::new(ConsoleSettings {
        font_scale: 0,
        ..ConsoleSettings::default()
    });
    assert_eq!(c.font_scale(), 1);
}

// --- text ---

#[test]
fn write_bytes_rejects_invalid_utf8_without_mutation() {
    let mut c = scale_one();
    c.set_size([60.0, 50.0]);
    c.write("kept", true);
    c.mark_presented();

    let err = c.write_bytes(&[b'o', b'k', 0xff, 0xfe], true).unwrap_err();
    assert!(matches!(err, ConsoleError::InvalidArgument(_)));
    assert_eq!(c.history().iter().collect::<Vec<_>>(), vec!["kept"]);
    assert!(c.damage().is_empty());
}

#[test]
fn write_bytes_accepts_utf8() {
    let mut c = scale_one();
    c.set_size([60.0, 50.0]);
    assert_eq!(c.write_bytes("caf\u{e9}".as_bytes(), true), Ok(1));
    assert_eq!(c.history().get(0), Some("caf??"));
}

#[test]
fn write_empty_adds_blank_line() {
    let mut c = scale_one();
    c.set_size([60.0, 50.0]);
    assert_eq!(c.write("", true), 1);
    assert_eq!(c.history().iter().collect::<Vec<_>>(), vec![""]);
}

#[test]
fn set_orientation_keeps_history() {
    let mut c = scale_one();
    c.set_size([60.0, 30.0]);
    c.write("a\nb", true);
    c.set_orientation(Orientation::ScrollDown);
    assert_eq!(c.orientation(), Orientation::ScrollDown);
    assert_eq!(c.history().len(), 2);
}

#[test]
fn apply_settings_updates_everything() {
    let mut c = Console::default();
    c.set_size([120.0, 100.0]);
    c.apply_settings(ConsoleSettings {
        text_color: Rgba::WHITE,
        font_scale: 2,
        orientation: Orientation::ScrollDown,
    });
    assert_eq!(c.text_color(), Rgba::WHITE);
    assert_eq!(c.font_scale(), 2);
    assert_eq!(c.orientation(), Orientation::ScrollDown);
    assert_eq!((c.rows(), c.cols()), (5, 10));
}

// --- damage ---

#[test]
fn damage_accumulates_until_presented() {
    let mut c = scale_one();
    c.mark_presented();
    assert!(c.damage().is_empty());

    c.write("x", true);
    assert_eq!(c.damage(), Damage::CELLS);
    c.set_text_color(Rgba::WHITE);
    assert_eq!(c.damage(), Damage::CELLS | Damage::STYLE);
    c.mark_presented();

    c.set_transform(Transform2D::pixels(5.0, 5.0));
    assert_eq!(c.damage(), Damage::GEOMETRY);
    c.mark_presented();

    c.set_size([60.0, 50.0]);
    assert!(c.damage().contains(Damage::GEOMETRY | Damage::CELLS));
}

#[test]
fn unchanged_style_adds_no_damage() {
    let mut c = scale_one();
    c.mark_presented();
    c.set_text_color(Rgba::BLACK);
    c.set_transform(Transform2D::default());
    c.set_font_scale(1.0);
    c.set_pos([0.0, 0.0]);
    assert!(c.damage().is_empty());
}

// --- draw ---

#[test]
fn draw_hands_one_batch_to_sink() {
    let mut c = scale_one();
    c.set_size([60.0, 50.0]);
    c.set_text_color(Rgba::WHITE);
    let mut sink = Capture::default();
    c.draw(&mut sink).unwrap();
    assert_eq!(sink.calls, 1);
    assert_eq!(sink.cells, 50);
    assert_eq!(sink.scale, 1);
    assert_eq!(sink.color, Some(Rgba::WHITE));
    assert_eq!(sink.damage, c.damage());
}

#[test]
fn clear_then_draw_leaves_canvas_transparent() {
    let mut c = scale_one();
    c.set_size([60.0, 50.0]);
    c.write("hello there\nsecond line", true);
    c.clear();
    let mut canvas = Canvas::new(60, 50);
    c.draw(&mut canvas).unwrap();
    assert!(canvas.is_transparent());
}

#[test]
fn draw_renders_text_at_top_left() {
    let mut c = scale_one();
    c.set_size([6.0, 10.0]);
    c.write("A", true);
    let mut canvas = Canvas::new(8, 12);
    c.draw(&mut canvas).unwrap();

    let glyph = glyph_for('A');
    for row in 0..8 {
        for col in 0..6 {
            let painted = canvas.pixel(col, row + 2).unwrap().alpha() > 0.0;
            assert_eq!(painted, glyph.pixel(row, col), "glyph pixel ({row}, {col})");
        }
    }
}

#[test]
fn draw_does_not_touch_state() {
    let mut c = scale_one();
    c.set_size([60.0, 50.0]);
    c.write("abc", true);
    let before = c.buffer().planes().clone();
    let damage = c.damage();
    let mut canvas = Canvas::new(60, 50);
    c.draw(&mut canvas).unwrap();
    c.draw(&mut canvas).unwrap();
    assert_eq!(c.buffer().planes(), &before);
    assert_eq!(c.damage(), damage);
    assert!(canvas.painted() > 0);
}

fn paint_lines(orientation: Orientation, lines: &[&str]) -> Canvas {
    let mut c = Console::new(ConsoleSettings {
        font_scale: 1,
        orientation,
        ..ConsoleSettings::default()
    });
    c.set_size([6.0, 30.0]);
    for line in lines {
        c.write(line, true);
    }
    let mut canvas = Canvas::new(8, 30);
    c.draw(&mut canvas).unwrap();
    canvas
}

fn band_painted(canvas: &Canvas, ys: std::ops::Range<usize>) -> bool {
    ys.into_iter()
        .any(|y| (0..6).any(|x| canvas.pixel(x, y).unwrap().alpha() > 0.0))
}

#[test]
fn scroll_up_paints_newest_line_at_bottom() {
    let canvas = paint_lines(Orientation::ScrollUp, &["I"]);
    assert!(band_painted(&canvas, 20..30));
    assert!(!band_painted(&canvas, 0..20));
}

#[test]
fn orientations_paint_different_rows() {
    let up = paint_lines(Orientation::ScrollUp, &["I", "-"]);
    let down = paint_lines(Orientation::ScrollDown, &["I", "-"]);
    // Both start at the bottom row; the second line goes above it only
    // when scrolling down.
    assert!(band_painted(&up, 10..20) && band_painted(&up, 20..30));
    assert!(band_painted(&down, 10..20) && band_painted(&down, 20..30));
    assert!(!band_painted(&up, 0..10) && !band_painted(&down, 0..10));
    assert_ne!(up, down);
}
