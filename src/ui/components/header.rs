//! Header component renderer: page title, result count, and filter controls.

use crate::ui::helpers::{display_width, rule, Painter};
use crate::ui::viewmodel::{FilterBarInfo, HeaderInfo};

/// Renders the title line with the result count right-aligned.
///
/// # Layout
///
/// ```text
/// Tech Blog                                   6 posts found
/// ─────────────────────────────────────────────────────────
/// ```
pub fn render_header(out: &mut String, header: &HeaderInfo, painter: &Painter, cols: usize) {
    let colors = painter.colors();
    let title_width = display_width(&header.title);
    let count_width = display_width(&header.result_count);
    let gap = cols.saturating_sub(title_width + count_width).max(1);

    let title = match &colors.header_bg {
        Some(bg) => painter.fg_bg(&header.title, &colors.header_fg, bg),
        None => painter.bold(&header.title, &colors.header_fg),
    };

    out.push_str(&title);
    out.push_str(&" ".repeat(gap));
    out.push_str(&painter.dim(&header.result_count));
    out.push('\n');
    out.push_str(&painter.fg(&rule(cols), &colors.border));
    out.push('\n');
}

/// Renders the search box contents and the two pickers on one line each.
///
/// The category line lists every option with the selected one in brackets.
pub fn render_filter_bar(out: &mut String, filters: &FilterBarInfo, painter: &Painter, cols: usize) {
    let colors = painter.colors();

    let search = if filters.search.is_empty() {
        painter.dim("Search blogs...")
    } else {
        painter.fg(&filters.search, &colors.text_normal)
    };
    out.push_str(&format!("{} {search}\n", painter.dim("Search:")));

    let options: Vec<String> = filters
        .categories
        .iter()
        .map(|c| {
            if *c == filters.category {
                painter.bold(&format!("[{c}]"), &colors.accent)
            } else {
                painter.fg(c, &colors.text_normal)
            }
        })
        .collect();
    out.push_str(&format!("{} {}\n", painter.dim("Category:"), options.join("  ")));

    out.push_str(&format!(
        "{} {}\n",
        painter.dim("Sort:"),
        painter.fg(filters.sort_label, &colors.text_normal)
    ));
    out.push_str(&painter.fg(&rule(cols), &colors.border));
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Theme;

    #[test]
    fn count_is_right_aligned_with_wide_title() {
        let theme = Theme::default();
        let header = HeaderInfo {
            title: "技術ブログ".to_string(),
            result_count: "6 posts found".to_string(),
        };
        let mut out = String::new();
        render_header(&mut out, &header, &Painter::new(&theme, false), 40);

        let first = out.lines().next().unwrap();
        assert_eq!(display_width(first), 40);
        assert!(first.ends_with("6 posts found"));
    }
}
