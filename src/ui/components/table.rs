//! Table component renderer.
//!
//! Renders one page of users as NAME, EMAIL and COMPANY columns. Name and
//! email carry query highlights; the company column never does.

use crate::ui::helpers::{self, truncate, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

const LEFT_MARGIN: usize = 2;
const COLUMN_GAP: usize = 2;
const MIN_COLUMN: usize = 8;

/// Column widths derived from the terminal width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    name: usize,
    email: usize,
    company: usize,
}

impl Columns {
    fn for_width(cols: usize) -> Self {
        let usable = cols.saturating_sub(LEFT_MARGIN + COLUMN_GAP * 2);
        let name = (usable * 3 / 10).max(MIN_COLUMN);
        let email = (usable * 2 / 5).max(MIN_COLUMN);
        let company = usable.saturating_sub(name + email);
        Self { name, email, company }
    }
}

/// Renders the bold column headers at `row`.
pub fn render_table_headers(frame: &mut Frame, row: usize, theme: &Theme, cols: usize) -> usize {
    let columns = Columns::for_width(cols);

    frame.position_cursor(row, 1);
    frame.pad(LEFT_MARGIN);
    frame.push_str(Theme::bold());
    frame.push_str(&Theme::fg(&theme.colors.header_fg));
    frame.push_str(&format!(
        "{:<name$}{:gap$}{:<email$}{:gap$}{}",
        "NAME",
        "",
        "EMAIL",
        "",
        truncate("COMPANY", columns.company),
        name = columns.name,
        email = columns.email,
        gap = COLUMN_GAP,
    ));
    frame.push_str(Theme::reset());
    row + 1
}

/// Renders all rows starting at `row`.
///
/// With `dimmed` set, every row uses the dim text color so stale results read
/// as provisional.
pub fn render_table_rows(
    frame: &mut Frame,
    row: usize,
    items: &[DisplayItem],
    dimmed: bool,
    theme: &Theme,
    cols: usize,
) -> usize {
    let columns = Columns::for_width(cols);
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(frame, current_row, item, dimmed, theme, columns);
    }
    current_row
}

fn render_table_row(
    frame: &mut Frame,
    row: usize,
    item: &DisplayItem,
    dimmed: bool,
    theme: &Theme,
    columns: Columns,
) -> usize {
    let base = if dimmed {
        format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim))
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    frame.position_cursor(row, 1);
    frame.pad(LEFT_MARGIN);
    frame.push_str(&base);

    let used = helpers::render_segments(frame, &item.name, theme, &base, columns.name);
    frame.pad(columns.name - used + COLUMN_GAP);

    let used = helpers::render_segments(frame, &item.email, theme, &base, columns.email);
    frame.pad(columns.email - used + COLUMN_GAP);

    if !dimmed {
        frame.push_str(&Theme::fg(&theme.colors.company_fg));
    }
    frame.push_str(&truncate(&item.company, columns.company));
    frame.push_str(Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::Segment;

    fn item() -> DisplayItem {
        DisplayItem {
            name: vec![Segment::plain("Leanne Graham")],
            email: vec![Segment::plain("Sincere@"), Segment::marked("april"), Segment::plain(".biz")],
            company: "Romaguera-Crona".to_string(),
        }
    }

    #[test]
    fn columns_fill_the_width() {
        let columns = Columns::for_width(100);
        assert_eq!(columns.name + columns.email + columns.company, 100 - 6);
        assert!(columns.name >= MIN_COLUMN);
    }

    #[test]
    fn rows_advance_and_show_every_column() {
        let theme = Theme::default();
        let mut frame = Frame::new();
        let next = render_table_rows(&mut frame, 10, &[item(), item()], false, &theme, 100);

        assert_eq!(next, 12);
        let out = frame.as_str();
        assert!(out.contains("Leanne Graham"));
        assert!(out.contains("april"));
        assert!(out.contains("Romaguera-Crona"));
        assert!(out.contains(&Theme::fg(&theme.colors.company_fg)));
    }

    #[test]
    fn dimmed_rows_use_dim_style() {
        let theme = Theme::default();
        let mut frame = Frame::new();
        render_table_rows(&mut frame, 10, &[item()], true, &theme, 100);

        assert!(frame.as_str().contains(Theme::dim()));
        assert!(!frame.as_str().contains(&Theme::fg(&theme.colors.company_fg)));
    }
}
