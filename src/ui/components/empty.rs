//! Empty state component renderer.

use crate::ui::helpers::{display_width, Painter};
use crate::ui::viewmodel::EmptyState;

/// Renders the centred "nothing matched" message with its hint below.
///
/// # Layout
///
/// ```text
/// [blank line]
/// [padding] No blogs found
/// [padding] Try adjusting your search terms or filters ...
/// [blank line]
/// ```
pub fn render_empty_state(out: &mut String, empty: &EmptyState, painter: &Painter, cols: usize) {
    let msg_padding = cols.saturating_sub(display_width(&empty.message)) / 2;
    let sub_padding = cols.saturating_sub(display_width(&empty.subtitle)) / 2;

    out.push('\n');
    out.push_str(&" ".repeat(msg_padding));
    out.push_str(&painter.bold(&empty.message, &painter.colors().empty_state_fg));
    out.push('\n');
    out.push_str(&" ".repeat(sub_padding));
    out.push_str(&painter.dim(&empty.subtitle));
    out.push_str("\n\n");
}
