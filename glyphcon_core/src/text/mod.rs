//! Turning arbitrary input text into console lines.
//!
//! Three passes, applied in this order by the scroll buffer:
//! [`sanitize`] restricts the text to printable ASCII, [`cap_tail`] bounds
//! the work to what can be on screen, and [`layout_lines`] splits paragraphs
//! into lines no wider than the grid.

use std::borrow::Cow;
use std::iter;

/// Stand-in for anything the font can't draw.
pub const PLACEHOLDER: char = '?';

/// Whether `c` has a glyph of its own in the font table.
pub fn is_printable(c: char) -> bool {
    matches!(c, ' '..='~')
}

/// Restrict text to printable ASCII plus `\n`.
///
/// Printable ASCII is kept as is. A non-ASCII character becomes one
/// [`PLACEHOLDER`] per UTF-8 byte, and other ASCII controls (tab, escape,
/// DEL) one each. `\r\n` and a lone `\r` are line breaks. Borrows when the
/// input is already clean.
pub fn sanitize(text: &str) -> Cow<'_, str> {
    if text.chars().all(|c| is_printable(c) || c == '\n') {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\n' => out.push('\n'),
            '\r' => {
                chars.next_if_eq(&'\n');
                out.push('\n');
            }
            c if is_printable(c) => out.push(c),
            c => out.extend(iter::repeat_n(PLACEHOLDER, c.len_utf8())),
        }
    }
    Cow::Owned(out)
}

/// The last `max_chars` characters of `text`.
pub fn cap_tail(text: &str, max_chars: usize) -> &str {
    let count = text.chars().count();
    if count <= max_chars {
        return text;
    }
    let skip = count - max_chars;
    match text.char_indices().nth(skip) {
        Some((start, _)) => text.get(start..).unwrap_or(text),
        None => "",
    }
}

/// Split text into lines of at most `cols` characters.
///
/// Paragraphs are separated by `\n`. An empty paragraph yields one empty
/// line. With `wrap`, a long paragraph breaks at the last space that fits
/// (the space itself is consumed) or, failing that, at the column boundary;
/// without `wrap` it is truncated to `cols`.
pub fn layout_lines(text: &str, cols: usize, wrap: bool) -> Vec<String> {
    let cols = cols.max(1);
    let mut lines = Vec::new();
    for para in text.split('\n') {
        if para.is_empty() {
            lines.push(String::new());
        } else if wrap {
            wrap_paragraph(para, cols, &mut lines);
        } else {
            lines.push(para.chars().take(cols).collect());
        }
    }
    lines
}

fn wrap_paragraph(para: &str, cols: usize, lines: &mut Vec<String>) {
    let mut rest: Vec<char> = para.chars().collect();
    loop {
        if rest.len() <= cols {
            lines.push(rest.iter().collect());
            return;
        }
        // A space at index `cols` means the first `cols` chars fit exactly.
        let brk = rest[..=cols].iter().rposition(|&c| c == ' ').filter(|&i| i > 0);
        let tail = match brk {
            Some(i) => {
                lines.push(rest[..i].iter().collect());
                rest.split_off(i + 1)
            }
            None => {
                lines.push(rest[..cols].iter().collect());
                rest.split_off(cols)
            }
        };
        if tail.is_empty() {
            return;
        }
        rest = tail;
    }
}
