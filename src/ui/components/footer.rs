//! Footer component renderer.

use crate::ui::helpers::{display_width, truncate, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the keybinding hints centered on `row`, cut to the terminal width.
pub fn render_footer(frame: &mut Frame, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = truncate(&footer.keybindings, cols);
    let text_len = display_width(&help_text);
    let padding = cols.saturating_sub(text_len) / 2;

    frame.position_cursor(row, 1);
    frame.push_str(&Theme::fg(&theme.colors.text_dim));
    frame.pad(padding);
    frame.push_str(&help_text);
    frame.pad(cols.saturating_sub(padding + text_len));
    frame.push_str(Theme::reset());
    row + 1
}
