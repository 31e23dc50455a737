//! Top-level rendering coordinator.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render_layout → Frame → stdout
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::Frame;

/// Clears the screen and draws the whole UI for `state` into a string of ANSI
/// output, ready to be written to the terminal in one call.
#[must_use]
pub fn render(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel();

    let mut frame = Frame::new();
    frame.push_str("\u{1b}[2J");
    components::render_layout(&mut frame, &viewmodel, &state.theme, cols, rows);
    frame.into_string()
}
