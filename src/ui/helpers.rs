//! Shared rendering utilities and helpers.
//!
//! Components draw into a [`Frame`] rather than straight to stdout, so a whole
//! screen is written in one go and the output can be inspected in tests.
//! Widths are counted in `char`s, which is exact for the text this browser
//! shows (names, emails, and the box-drawing glyphs below).

use crate::directory::Segment;
use crate::ui::theme::Theme;
use std::fmt::Write;

/// An in-memory screen buffer of text and ANSI escapes.
#[derive(Debug, Default)]
pub struct Frame {
    buf: String,
}

impl Frame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the cursor to `row`, `col` (both 1-indexed).
    pub fn position_cursor(&mut self, row: usize, col: usize) {
        let _ = write!(self.buf, "\u{1b}[{row};{col}H");
    }

    pub fn push_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    /// Appends `count` spaces.
    pub fn pad(&mut self, count: usize) {
        self.buf.extend(std::iter::repeat(' ').take(count));
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Number of terminal columns `text` occupies.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `max` columns, ending in `…` when shortened.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if display_width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max - 1).collect();
    out.push('…');
    out
}

/// Formats `n` with comma thousands separators.
///
/// ```rust
/// use dirbrowse::ui::helpers::format_count;
///
/// assert_eq!(format_count(1234567), "1,234,567");
/// ```
#[must_use]
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Writes highlight segments in at most `max` columns and returns the width used.
///
/// Matches get the highlight colors; everything else uses `base` (an escape
/// sequence that is re-applied after each highlighted run).
pub fn render_segments(frame: &mut Frame, segments: &[Segment], theme: &Theme, base: &str, max: usize) -> usize {
    let total: usize = segments.iter().map(|s| display_width(&s.text)).sum();
    let budget = if total > max { max.saturating_sub(1) } else { max };

    let mut used = 0;
    for segment in segments {
        if used >= budget {
            break;
        }
        let text: String = segment.text.chars().take(budget - used).collect();
        used += display_width(&text);

        if segment.highlighted {
            frame.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
            frame.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
            frame.push_str(&text);
            frame.push_str(Theme::reset());
            frame.push_str(base);
        } else {
            frame.push_str(&text);
        }
    }

    if total > max && max > 0 {
        frame.push_str("…");
        used += 1;
    }
    used
}
