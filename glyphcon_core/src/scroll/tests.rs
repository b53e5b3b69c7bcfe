use super::{Orientation, ScrollBuffer};
use crate::error::ConsoleError;
use crate::glyph::{PackedGlyph, encode, glyph_for};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Reverse-map a packed cell to its character (the table has no duplicates).
fn char_at(cell: PackedGlyph) -> char {
    (0x20u8..=0x7E)
        .map(char::from)
        .find(|&c| encode(glyph_for(c)) == cell)
        .unwrap_or('\u{fffd}')
}

/// Visible text of a plane row, trailing blanks trimmed.
fn row_text(buf: &ScrollBuffer, row: usize) -> String {
    let s: String = (0..buf.cols()).map(|col| char_at(buf.cell(row, col).unwrap())).collect();
    s.trim_end().to_owned()
}

/// All rows, bottom (row 0) first.
fn screen(buf: &ScrollBuffer) -> Vec<String> {
    (0..buf.rows()).map(|r| row_text(buf, r)).collect()
}

fn history(buf: &ScrollBuffer) -> Vec<&str> {
    buf.history().iter().collect()
}

fn write_each(buf: &mut ScrollBuffer, lines: &[&str]) {
    for l in lines {
        buf.write(l, true);
    }
}

/// Planes must always equal a replay of the retained history.
fn assert_consistent(buf: &ScrollBuffer) {
    let mut replayed = buf.clone();
    replayed.resize(buf.rows(), buf.cols());
    assert_eq!(replayed.planes(), buf.planes(), "planes drifted from history");
}

// ---------------------------------------------------------------------------
// Orientation
// ---------------------------------------------------------------------------

#[test]
fn orientation_parses_known_names() {
    assert_eq!("scroll-up".parse::<Orientation>(), Ok(Orientation::ScrollUp));
    assert_eq!("scroll-down".parse::<Orientation>(), Ok(Orientation::ScrollDown));
    assert_eq!(Orientation::default(), Orientation::ScrollUp);
}

#[test]
fn orientation_rejects_unknown_names() {
    for bad in ["", "up", "Scroll-Up", "scroll_down", "sideways"] {
        let err = bad.parse::<Orientation>().unwrap_err();
        assert!(matches!(err, ConsoleError::Configuration(_)), "{bad:?}");
    }
}

#[test]
fn orientation_display_round_trips() {
    for o in [Orientation::ScrollUp, Orientation::ScrollDown] {
        assert_eq!(o.to_string().parse::<Orientation>(), Ok(o));
    }
}

// ---------------------------------------------------------------------------
// Construction and clamping
// ---------------------------------------------------------------------------

#[test]
fn new_buffer_is_blank() {
    let buf = ScrollBuffer::new(4, 10, Orientation::ScrollUp);
    assert_eq!((buf.rows(), buf.cols()), (4, 10));
    assert_eq!(buf.bytes_012().len(), 4 * 10 * 3);
    assert_eq!(buf.bytes_345().len(), 4 * 10 * 3);
    assert!(buf.planes().is_zeroed());
    assert!(buf.history().is_empty());
    assert_eq!(buf.cursor_row(), None);
}

#[test]
fn zero_dimensions_clamp_to_one() {
    let mut buf = ScrollBuffer::new(0, 0, Orientation::ScrollUp);
    assert_eq!((buf.rows(), buf.cols()), (1, 1));
    buf.resize(0, 0);
    assert_eq!((buf.rows(), buf.cols()), (1, 1));
}

// ---------------------------------------------------------------------------
// write
// ---------------------------------------------------------------------------

#[test]
fn empty_write_adds_exactly_one_blank_line() {
    let mut buf = ScrollBuffer::new(3, 5, Orientation::ScrollUp);
    assert_eq!(buf.write("", true), 1);
    assert_eq!(history(&buf), vec![""]);
    assert!(buf.planes().is_zeroed());
    assert_eq!(buf.cursor_row(), Some(0));
}

#[test]
fn long_text_keeps_last_rows_times_cols_chars() {
    let mut buf = ScrollBuffer::new(2, 5, Orientation::ScrollUp);
    let text: String = (0..60u8).map(|i| char::from(b'a' + i % 26)).collect();
    assert_eq!(text.len(), 2 * 5 + 50);

    buf.write(&text, true);

    // Chars 50..60 are "yzabcdefgh".
    assert_eq!(history(&buf), vec!["defgh", "yzabc"]);
    assert_eq!(screen(&buf), vec!["defgh", "yzabc"]);
}

#[test]
fn wrap_splits_at_column_boundaries() {
    let mut buf = ScrollBuffer::new(4, 5, Orientation::ScrollUp);
    assert_eq!(buf.write("hello world", true), 2);
    assert_eq!(history(&buf), vec!["world", "hello"]);

    let mut buf = ScrollBuffer::new(4, 5, Orientation::ScrollUp);
    buf.write("helloworld", true);
    assert_eq!(history(&buf), vec!["world", "hello"]);
}

#[test]
fn no_wrap_truncates_each_paragraph() {
    let mut buf = ScrollBuffer::new(4, 5, Orientation::ScrollUp);
    assert_eq!(buf.write("hello world\nabcdefg", false), 2);
    assert_eq!(history(&buf), vec!["abcde", "hello"]);
}

#[test]
fn multi_paragraph_write_counts_lines() {
    let mut buf = ScrollBuffer::new(8, 10, Orientation::ScrollUp);
    assert_eq!(buf.write("one\ntwo\n\nthree", true), 4);
    assert_eq!(history(&buf), vec!["three", "", "two", "one"]);
}

#[test]
fn non_ascii_is_drawn_as_placeholders() {
    let mut buf = ScrollBuffer::new(1, 12, Orientation::ScrollUp);
    buf.write("na\u{ef}ve \u{2603}", true);
    assert_eq!(history(&buf), vec!["na??ve ???"]);
    assert_eq!(row_text(&buf, 0), "na??ve ???");
}

#[test]
fn combining_accent_keeps_base_letters() {
    let mut buf = ScrollBuffer::new(3, 10, Orientation::ScrollDown);
    buf.write("cafe\u{301}", true);
    assert_eq!(history(&buf), vec!["cafe??"]);
    assert!(row_text(&buf, 0).starts_with("cafe"));
}

#[test]
fn shorter_line_blanks_trailing_cells() {
    let mut buf = ScrollBuffer::new(1, 5, Orientation::ScrollUp);
    buf.write("hello", true);
    buf.write("hi", true);
    assert_eq!(row_text(&buf, 0), "hi");
    for col in 2..5 {
        assert_eq!(buf.cell(0, col), Some(PackedGlyph::EMPTY));
    }
}

// ---------------------------------------------------------------------------
// Scrolling by orientation
// ---------------------------------------------------------------------------

#[test]
fn scroll_up_puts_newest_line_on_row_zero() {
    let mut buf = ScrollBuffer::new(3, 4, Orientation::ScrollUp);
    buf.write("a", true);
    assert_eq!(row_text(&buf, 0), "a");
    assert_eq!(buf.cursor_row(), Some(0));
    assert_eq!(screen(&buf), vec!["a", "", ""]);

    buf.write("b", true);
    assert_eq!(screen(&buf), vec!["b", "a", ""]);
    assert_eq!(buf.cursor_row(), Some(0));
    assert_consistent(&buf);
}

#[test]
fn scroll_down_fills_from_the_bottom() {
    let mut buf = ScrollBuffer::new(3, 4, Orientation::ScrollDown);
    buf.write("1", true);
    assert_eq!(screen(&buf), vec!["1", "", ""]);
    buf.write("2", true);
    assert_eq!(screen(&buf), vec!["1", "2", ""]);
}

#[test]
fn scroll_up_evicts_oldest_past_capacity() {
    let mut buf = ScrollBuffer::new(3, 4, Orientation::ScrollUp);
    write_each(&mut buf, &["1", "2", "3", "4"]);

    assert_eq!(history(&buf), vec!["4", "3", "2"]);
    // Newest at the bottom, "1" pushed off the top.
    assert_eq!(screen(&buf), vec!["4", "3", "2"]);
    assert_eq!(buf.cursor_row(), Some(0));
    assert_consistent(&buf);
}

#[test]
fn scroll_down_evicts_oldest_past_capacity() {
    let mut buf = ScrollBuffer::new(3, 4, Orientation::ScrollDown);
    write_each(&mut buf, &["1", "2", "3", "4"]);

    assert_eq!(history(&buf), vec!["4", "3", "2"]);
    // Newest on top, "1" pushed off the bottom.
    assert_eq!(screen(&buf), vec!["2", "3", "4"]);
    assert_eq!(buf.cursor_row(), Some(2));
    assert_consistent(&buf);
}

#[test]
fn row_zero_differs_between_orientations() {
    let mut up = ScrollBuffer::new(3, 4, Orientation::ScrollUp);
    let mut down = ScrollBuffer::new(3, 4, Orientation::ScrollDown);
    for buf in [&mut up, &mut down] {
        write_each(buf, &["a", "b", "c", "d"]);
    }
    assert_eq!(row_text(&up, 0), "d");
    assert_eq!(row_text(&down, 0), "b");
    assert_ne!(up.cell(0, 0), down.cell(0, 0));
}

#[test]
fn long_write_scrolls_within_one_call() {
    let mut buf = ScrollBuffer::new(2, 6, Orientation::ScrollUp);
    assert_eq!(buf.write("aaa bbb ccc", true), 3);
    assert_eq!(history(&buf), vec!["ccc", "bbb"]);
    assert_eq!(screen(&buf), vec!["ccc", "bbb"]);
}

#[test]
fn single_cell_grid_survives_everything() {
    for orientation in [Orientation::ScrollUp, Orientation::ScrollDown] {
        let mut buf = ScrollBuffer::new(1, 1, orientation);
        buf.write("", true);
        buf.write("hello world, this is long", true);
        buf.write("x\ny\nz", false);
        buf.write("\u{1F600}", true);
        assert_eq!(history(&buf), vec!["?"]);
        assert_eq!(row_text(&buf, 0), "?");
        buf.resize(0, 0);
        buf.clear();
        buf.write("q", true);
        assert_eq!(row_text(&buf, 0), "q");
        assert_consistent(&buf);
    }
}

#[test]
fn set_orientation_relays_history() {
    let mut buf = ScrollBuffer::new(3, 4, Orientation::ScrollUp);
    write_each(&mut buf, &["1", "2"]);
    assert_eq!(screen(&buf), vec!["2", "1", ""]);

    buf.set_orientation(Orientation::ScrollDown);
    assert_eq!(buf.orientation(), Orientation::ScrollDown);
    assert_eq!(screen(&buf), vec!["1", "2", ""]);
    assert_eq!(history(&buf), vec!["2", "1"]);
    assert_consistent(&buf);
}

// ---------------------------------------------------------------------------
// resize / clear
// ---------------------------------------------------------------------------

#[test]
fn resize_replays_most_recent_lines() {
    let mut buf = ScrollBuffer::new(3, 4, Orientation::ScrollUp);
    write_each(&mut buf, &["1", "2", "3"]);

    buf.resize(2, 4);
    assert_eq!(screen(&buf), vec!["3", "2"]);
    // History is not truncated by resize.
    assert_eq!(history(&buf), vec!["3", "2", "1"]);

    buf.resize(3, 4);
    assert_eq!(screen(&buf), vec!["3", "2", "1"]);

    // A partly filled taller grid keeps the newest line at the bottom.
    buf.resize(5, 4);
    assert_eq!(screen(&buf), vec!["3", "2", "1", "", ""]);
}

#[test]
fn resize_replays_in_scroll_down_order() {
    let mut buf = ScrollBuffer::new(3, 4, Orientation::ScrollDown);
    write_each(&mut buf, &["1", "2", "3"]);
    buf.resize(5, 4);
    assert_eq!(screen(&buf), vec!["1", "2", "3", "", ""]);
    buf.write("4", true);
    assert_eq!(screen(&buf), vec!["1", "2", "3", "4", ""]);
}

#[test]
fn resize_narrower_truncates_view_not_history() {
    let mut buf = ScrollBuffer::new(2, 5, Orientation::ScrollUp);
    buf.write("hello", true);
    buf.resize(2, 2);
    assert_eq!(row_text(&buf, 0), "he");
    assert_eq!(history(&buf), vec!["hello"]);
    buf.resize(2, 5);
    assert_eq!(row_text(&buf, 0), "hello");
}

#[test]
fn write_after_shrink_caps_history() {
    let mut buf = ScrollBuffer::new(4, 4, Orientation::ScrollUp);
    write_each(&mut buf, &["a", "b", "c", "d"]);
    buf.resize(2, 4);
    buf.write("e", true);
    assert_eq!(history(&buf), vec!["e", "d"]);
    assert_consistent(&buf);
}

#[test]
fn resize_then_clear_leaves_nothing_behind() {
    let mut buf = ScrollBuffer::new(3, 6, Orientation::ScrollDown);
    write_each(&mut buf, &["abc", "defgh", "xyz!!"]);
    buf.resize(5, 9);
    buf.clear();
    assert!(buf.planes().is_zeroed());
    assert!(buf.history().is_empty());
    assert_eq!(buf.cursor_row(), None);
}

#[test]
fn clear_resets_cursor_for_next_write() {
    let mut buf = ScrollBuffer::new(3, 4, Orientation::ScrollUp);
    write_each(&mut buf, &["1", "2", "3", "4", "5"]);
    buf.clear();
    buf.write("x", true);
    assert_eq!(screen(&buf), vec!["x", "", ""]);
}

#[test]
fn planes_track_history_through_mixed_operations() {
    for orientation in [Orientation::ScrollUp, Orientation::ScrollDown] {
        let mut buf = ScrollBuffer::new(4, 6, orientation);
        buf.write("first line that wraps", true);
        assert_consistent(&buf);
        buf.resize(3, 4);
        assert_consistent(&buf);
        buf.write("x\n\ny", false);
        assert_consistent(&buf);
        buf.resize(6, 10);
        assert_consistent(&buf);
        buf.write("", true);
        assert_consistent(&buf);
        buf.clear();
        assert_consistent(&buf);
    }
}

#[test]
fn insert_row_ignores_rows_outside_grid() {
    let mut buf = ScrollBuffer::new(2, 2, Orientation::ScrollUp);
    buf.insert_row("ab", 7);
    assert!(buf.planes().is_zeroed());
    buf.insert_row("abc", 1);
    assert_eq!(row_text(&buf, 1), "ab");
}
