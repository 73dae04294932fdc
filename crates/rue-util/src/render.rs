//! Diagnostic rendering: turning a byte-offset [`Diagnostic`] into the
//! multi-line, human-facing text a caller prints to a terminal.
//!
//! Grounded on the same shape as a classic `rustc`-style snippet: a gutter
//! with the 1-based line number, the source line itself, and a caret
//! underline beneath the offending span. Tabs are expanded to a fixed width
//! before the caret is positioned, and long lines are scrolled horizontally
//! so the offending region is always visible.

use crate::diagnostic::Diagnostic;

const TAB_WIDTH: usize = 4;
const TERMINAL_WIDTH: usize = 80;

/// Renders `err` against `source`, prefixing the first line with `filename`.
pub fn render_error(err: &Diagnostic, filename: &str, source: &str) -> String {
    let (line_no, raw_col, line_start, line_end) = locate(source, err.start);
    let line_text = &source[line_start..line_end];
    let span_len = err.stop.saturating_sub(err.start).max(1);

    let (display_line, display_col) = expand_tabs(line_text, raw_col);
    let (windowed_line, windowed_col) = scroll(&display_line, display_col, span_len);

    let gutter = line_no.to_string();
    let gutter_width = gutter.len().max(3);
    let blank_gutter = " ".repeat(gutter_width);

    let caret_offset = windowed_col.saturating_sub(1);
    let caret_len = span_len.min(
        windowed_line
            .chars()
            .count()
            .saturating_sub(caret_offset)
            .max(1),
    );

    let mut out = String::new();
    out.push_str(&format!(
        "{filename}:{line_no}:{raw_col}: {}\n",
        err.message
    ));
    out.push_str(&format!(
        "{:>width$} | {}\n",
        gutter,
        windowed_line,
        width = gutter_width
    ));
    out.push_str(&format!(
        "{} | {}{}",
        blank_gutter,
        " ".repeat(caret_offset),
        "^".repeat(caret_len)
    ));
    if let Some(content) = &err.content {
        out.push_str(&format!("  (found {:?})", content));
    }
    out
}

/// Finds the 1-based `(line, column)` of `offset` plus the byte range of its
/// containing line. Only `\n` is treated as a line separator; `\r` is left
/// in place, per the renderer's contract.
fn locate(source: &str, offset: usize) -> (usize, usize, usize, usize) {
    let offset = offset.min(source.len());
    let mut line = 1usize;
    let mut line_start = 0usize;
    for (i, b) in source.as_bytes()[..offset].iter().enumerate() {
        if *b == b'\n' {
            line += 1;
            line_start = i + 1;
        }
    }
    let line_end = source[line_start..]
        .find('\n')
        .map(|rel| line_start + rel)
        .unwrap_or(source.len());
    let column = source[line_start..offset].chars().count() + 1;
    (line, column, line_start, line_end)
}

/// Expands tabs to [`TAB_WIDTH`]-aligned spaces, returning the expanded line
/// and the display column corresponding to `raw_col` (a 1-based char index
/// into the unexpanded line).
fn expand_tabs(line: &str, raw_col: usize) -> (String, usize) {
    let mut display = String::new();
    let mut display_col = 1usize;
    let mut target_col = display_col;
    let mut seen = 0usize;

    for ch in line.chars() {
        seen += 1;
        if seen == raw_col {
            target_col = display_col;
        }
        if ch == '\t' {
            let advance = TAB_WIDTH - ((display_col - 1) % TAB_WIDTH);
            for _ in 0..advance {
                display.push(' ');
            }
            display_col += advance;
        } else {
            display.push(ch);
            display_col += 1;
        }
    }
    if raw_col > seen {
        target_col = display_col;
    }
    (display, target_col)
}

/// Truncates and, if needed, horizontally scrolls `line` so that
/// `display_col` stays visible, per the "scroll if column > max(30, span)"
/// rule.
fn scroll(line: &str, display_col: usize, span_len: usize) -> (String, usize) {
    let chars: Vec<char> = line.chars().collect();
    let threshold = span_len.max(30);

    if display_col <= threshold && chars.len() <= TERMINAL_WIDTH {
        return (line.to_string(), display_col);
    }

    let window = TERMINAL_WIDTH.saturating_sub(6);
    let start = display_col
        .saturating_sub(window / 2)
        .saturating_sub(1)
        .min(chars.len().saturating_sub(1));
    let end = (start + window).min(chars.len());

    let mut out = String::new();
    if start > 0 {
        out.push_str("...");
    }
    out.extend(&chars[start..end]);
    if end < chars.len() {
        out.push_str("...");
    }

    let prefix = if start > 0 { 3 } else { 0 };
    (out, display_col - start + prefix)
}
