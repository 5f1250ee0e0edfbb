//! Composable UI component renderers.
//!
//! Each component appends its lines to a shared `String` buffer.
//!
//! # Components
//!
//! - `header`: Title bar and filter controls
//! - `card`: One post
//! - `pager`: Page numbers with previous/next
//! - `empty`: Message shown when nothing matched
//! - `body`: Markdown post body on the detail view
//!
//! # Layouts
//!
//! - [`render_list_layout`]: Header + Filters + Cards (or Empty) + Pager + URL
//! - [`render_detail_layout`]: Card + Comments + Body + Share link + Related cards

mod body;
mod card;
mod empty;
mod header;
mod pager;

use crate::ui::helpers::{rule, Painter};
use crate::ui::viewmodel::{ListViewModel, PostDetailViewModel};

use body::render_body;
use card::render_card;
use empty::render_empty_state;
use header::{render_filter_bar, render_header};
use pager::render_pager;

/// Renders the listing layout.
///
/// ```text
/// [Header]
/// [Filter bar]
/// [Card]
/// [blank]
/// [Card]
/// ...
/// [Pager, when more than one page]
/// [URL]
/// ```
pub fn render_list_layout(out: &mut String, vm: &ListViewModel, painter: &Painter, cols: usize) {
    render_header(out, &vm.header, painter, cols);
    render_filter_bar(out, &vm.filter_bar, painter, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(out, empty, painter, cols);
    } else {
        for (i, card) in vm.cards.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            render_card(out, card, painter, cols, false);
        }
        out.push('\n');
    }

    if let Some(pager) = &vm.pager {
        render_pager(out, pager, painter);
    }

    out.push_str(&painter.dim(&vm.url));
    out.push('\n');
}

/// Renders a single post with its body, share link, and related posts.
///
/// ```text
/// [Card]
///   12 comments
/// [Rule]
/// [Body, when present]
/// [Rule]
/// Share: https://...
/// [Related cards]
/// ```
pub fn render_detail_layout(
    out: &mut String,
    vm: &PostDetailViewModel,
    painter: &Painter,
    cols: usize,
) {
    let border = &painter.colors().border;

    render_card(out, &vm.post, painter, cols, false);
    out.push_str("  ");
    out.push_str(&painter.dim(&vm.comment_count));
    out.push('\n');
    out.push_str(&painter.fg(&rule(cols), border));
    out.push('\n');

    if !vm.body.trim().is_empty() {
        render_body(out, &vm.body, painter, cols);
        out.push_str(&painter.fg(&rule(cols), border));
        out.push('\n');
    }

    out.push_str(&painter.dim("Share: "));
    out.push_str(&painter.fg(&vm.share_url, &painter.colors().accent));
    out.push('\n');

    if vm.related.is_empty() {
        return;
    }

    out.push('\n');
    out.push_str(&painter.fg(&rule(cols), border));
    out.push('\n');
    out.push_str(&painter.bold("Related Posts", &painter.colors().header_fg));
    out.push('\n');
    for card in &vm.related {
        out.push('\n');
        render_card(out, card, painter, cols, true);
    }
}
