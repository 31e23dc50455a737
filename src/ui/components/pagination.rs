//! Pagination bar renderer.
//!
//! ```text
//! ‹ prev   1  …  4 [5] 6  …  10   next ›
//! ```
//!
//! Unavailable directions are dimmed; the current page is drawn with the
//! active page colors.

use crate::directory::PageLink;
use crate::ui::helpers::{display_width, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationInfo;

/// Renders the bar centered on `row`.
pub fn render_pagination(frame: &mut Frame, row: usize, info: &PaginationInfo, theme: &Theme, cols: usize) -> usize {
    let normal = Theme::fg(&theme.colors.text_normal);
    let dim = Theme::fg(&theme.colors.text_dim);

    let mut parts: Vec<(String, String)> = Vec::with_capacity(info.links.len() + 2);
    parts.push((
        "‹ prev ".to_string(),
        if info.has_previous { normal.clone() } else { dim.clone() },
    ));
    for link in &info.links {
        match link {
            PageLink::Number(n) if *n == info.current => {
                let active = format!(
                    "{}{}{}",
                    Theme::bold(),
                    Theme::fg(&theme.colors.page_active_fg),
                    Theme::bg(&theme.colors.page_active_bg)
                );
                parts.push((format!(" {n} "), active));
            }
            PageLink::Number(n) => parts.push((format!(" {n} "), normal.clone())),
            PageLink::Ellipsis => parts.push((" … ".to_string(), dim.clone())),
        }
    }
    parts.push((
        " next ›".to_string(),
        if info.has_next { normal } else { dim },
    ));

    let width: usize = parts.iter().map(|(text, _)| display_width(text)).sum();
    let padding = cols.saturating_sub(width) / 2;

    frame.position_cursor(row, 1);
    frame.pad(padding);
    for (text, style) in &parts {
        frame.push_str(style);
        frame.push_str(text);
        frame.push_str(Theme::reset());
    }
    frame.pad(cols.saturating_sub(padding + width));
    row + 1
}
