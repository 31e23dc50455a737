//! Composable UI component renderers.
//!
//! Each component draws one part of the screen into a [`Frame`] at a given
//! row and returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Title and data age
//! - [`search`]: Search box with focus and stale markers
//! - [`table`]: One page of users (NAME, EMAIL, COMPANY)
//! - [`empty`]: Message for an empty page
//! - [`status`]: Loading line and error panel
//! - [`pagination`]: Previous/next and compacted page numbers
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header title]
//! [Header subtitle]
//! [Border]
//! [Search Bar - 3 lines]
//! [Summary]
//! [Table Headers | Loading | Error]
//! [Table Rows | Empty]
//! [Blank padding to fill screen]
//! [Pagination]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod footer;
mod header;
mod pagination;
mod search;
mod status;
mod table;

use crate::ui::helpers::{display_width, truncate, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, UIViewModel};

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use pagination::render_pagination;
use search::render_search_bar;
use status::{render_error, render_loading};
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line and returns the next row.
fn render_border(frame: &mut Frame, row: usize, color: &str, cols: usize) -> usize {
    frame.position_cursor(row, 1);
    frame.push_str(&Theme::fg(color));
    frame.push_str(&"─".repeat(cols));
    frame.push_str(Theme::reset());
    row + 1
}

/// Renders the summary line, or a blank row when there is none.
fn render_summary(frame: &mut Frame, row: usize, summary: Option<&str>, theme: &Theme, cols: usize) -> usize {
    frame.position_cursor(row, 1);
    let text = summary.map(|s| truncate(s, cols.saturating_sub(2))).unwrap_or_default();
    frame.pad(2);
    frame.push_str(&Theme::fg(&theme.colors.text_dim));
    frame.push_str(&text);
    frame.push_str(Theme::reset());
    frame.pad(cols.saturating_sub(2 + display_width(&text)));
    row + 1
}

/// Draws the complete screen for `vm` into `frame`.
///
/// Rows past the table are left to the caller's screen clear; the pagination
/// bar and footer are pinned to the bottom. On a short terminal the table is
/// cut at the border and the pagination bar is dropped.
pub fn render_layout(frame: &mut Frame, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(frame, current_row, &vm.header, theme, cols);
    current_row = render_border(frame, current_row, &theme.colors.border, cols);
    current_row = render_search_bar(frame, current_row, &vm.search_bar, theme, cols);
    current_row = render_summary(frame, current_row, vm.summary.as_deref(), theme, cols);

    let footer_row = rows.saturating_sub(1).max(current_row);
    let border_row = footer_row.saturating_sub(1);

    match &vm.body {
        Body::Loading => {
            render_loading(frame, current_row + 1, theme, cols);
        }
        Body::Error(panel) => {
            render_error(frame, current_row + 1, panel, theme, cols);
        }
        Body::Empty(empty) => {
            render_empty_state(frame, current_row + 1, empty, theme, cols);
        }
        Body::Users {
            rows: items,
            dimmed,
            pagination,
        } => {
            current_row = render_table_headers(frame, current_row, theme, cols);
            let visible = items.len().min(border_row.saturating_sub(current_row));
            let next_free = render_table_rows(frame, current_row, &items[..visible], *dimmed, theme, cols);
            if let Some(info) = pagination {
                // Needs a free row between the last user and the border.
                if next_free < border_row {
                    render_pagination(frame, border_row - 1, info, theme, cols);
                }
            }
        }
    }

    render_border(frame, border_row, &theme.colors.border, cols);
    render_footer(frame, footer_row, &vm.footer, theme, cols);
}
