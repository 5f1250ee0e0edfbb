//! Pager component renderer.

use crate::ui::helpers::Painter;
use crate::ui::viewmodel::PagerInfo;

/// Renders `‹ Previous  1 [2] 3  Next ›`, dimming the arrows that are disabled.
pub fn render_pager(out: &mut String, pager: &PagerInfo, painter: &Painter) {
    let colors = painter.colors();

    let previous = if pager.has_previous {
        painter.fg("‹ Previous", &colors.text_normal)
    } else {
        painter.dim("‹ Previous")
    };
    let next = if pager.has_next {
        painter.fg("Next ›", &colors.text_normal)
    } else {
        painter.dim("Next ›")
    };

    let numbers: Vec<String> = pager
        .pages
        .iter()
        .map(|&page| {
            if page == pager.current {
                painter.fg_bg(
                    &format!("[{page}]"),
                    &colors.pager_current_fg,
                    &colors.pager_current_bg,
                )
            } else {
                painter.fg(&format!(" {page} "), &colors.text_normal)
            }
        })
        .collect();

    out.push_str(&format!("{previous}  {}  {next}\n", numbers.join("")));
}
