//! Post card component renderer.
//!
//! A card is the listing's unit of display. The same renderer draws full cards
//! on the listing and compact ones in the related-posts section of a detail
//! view.

use crate::ui::helpers::{format_count, truncate, wrap, Painter};
use crate::ui::viewmodel::PostCard;

/// Indent for everything below a card's title line.
const INDENT: &str = "  ";

/// Renders one card.
///
/// # Layout
///
/// ```text
/// #1 [Backend Development] ★ Featured
/// Building Scalable Microservices with Node.js and Docker
///   Learn how to architect and deploy microservices that can handle
///   millions of requests with minimal latency.
///   Ashish Jaiswal · Dec 15, 2024 · 8 min read
///   #Node.js #Docker #Microservices
///   1,247 views · 89 likes · ♥ liked · ⚑ saved
/// ```
///
/// With `compact` set, only the first and last metadata lines are drawn and the
/// excerpt is cut to one line.
pub fn render_card(out: &mut String, card: &PostCard, painter: &Painter, cols: usize, compact: bool) {
    let colors = painter.colors();
    let body_width = cols.saturating_sub(INDENT.len()).max(20);

    let mut badge = format!(
        "{} {}",
        painter.dim(&format!("#{}", card.id)),
        painter.fg(&format!("[{}]", card.category), &colors.accent)
    );
    if card.featured {
        badge.push(' ');
        badge.push_str(&painter.fg("★ Featured", &colors.featured_fg));
    }
    out.push_str(&badge);
    out.push('\n');

    let title = if card.title_highlights.is_empty() {
        painter.bold(&card.title, &colors.header_fg)
    } else {
        painter.highlighted(&card.title, &card.title_highlights)
    };
    out.push_str(&title);
    out.push('\n');

    if compact {
        if !card.excerpt.is_empty() {
            push_line(out, &painter.fg(&truncate(&card.excerpt, body_width), &colors.text_normal));
        }
    } else {
        for line in wrap(&card.excerpt, body_width) {
            push_line(out, &painter.fg(&line, &colors.text_normal));
        }

        let byline: Vec<&str> = [card.author.as_str(), card.date.as_str(), card.read_time.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect();
        push_line(out, &painter.dim(&byline.join(" · ")));

        if !card.tags.is_empty() {
            let tags: Vec<String> = card.tags.iter().map(|t| format!("#{t}")).collect();
            push_line(out, &painter.fg(&tags.join(" "), &colors.accent));
        }
    }

    let mut stats = painter.dim(&format!(
        "{} views · {} likes",
        format_count(card.views),
        format_count(card.likes)
    ));
    if card.liked {
        stats.push_str(&painter.dim(" · "));
        stats.push_str(&painter.fg("♥ liked", &colors.marked_fg));
    }
    if card.bookmarked {
        stats.push_str(&painter.dim(" · "));
        stats.push_str(&painter.fg("⚑ saved", &colors.marked_fg));
    }
    push_line(out, &stats);
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(INDENT);
    out.push_str(line);
    out.push('\n');
}
