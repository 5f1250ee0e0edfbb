//! Shared rendering utilities.
//!
//! Components never emit escape sequences directly. They go through a
//! [`Painter`], which wraps text in theme colours or leaves it plain when colour
//! is disabled (`--no-color`, or output that is not a terminal).
//!
//! # Example
//!
//! ```rust
//! use folio::ui::helpers::{format_count, Painter};
//! use folio::ui::Theme;
//!
//! let theme = Theme::default();
//! let plain = Painter::new(&theme, false);
//! assert_eq!(plain.highlighted("Docker basics", &[(0, 6)]), "Docker basics");
//! assert_eq!(format_count(2156), "2,156");
//! ```

use crate::ui::theme::{Theme, ThemeColors};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Applies theme colours to text, or nothing when colour is off.
#[derive(Debug, Clone, Copy)]
pub struct Painter<'a> {
    theme: &'a Theme,
    color: bool,
}

impl<'a> Painter<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme, color: bool) -> Self {
        Self { theme, color }
    }

    /// The active palette.
    #[must_use]
    pub fn colors(&self) -> &'a ThemeColors {
        &self.theme.colors
    }

    /// `text` in foreground colour `hex`.
    #[must_use]
    pub fn fg(&self, text: &str, hex: &str) -> String {
        if self.color {
            format!("{}{text}{}", Theme::fg(hex), Theme::reset())
        } else {
            text.to_string()
        }
    }

    /// `text` in foreground `fg` on background `bg`.
    #[must_use]
    pub fn fg_bg(&self, text: &str, fg: &str, bg: &str) -> String {
        if self.color {
            format!("{}{}{text}{}", Theme::fg(fg), Theme::bg(bg), Theme::reset())
        } else {
            text.to_string()
        }
    }

    /// Bold `text` in foreground colour `hex`.
    #[must_use]
    pub fn bold(&self, text: &str, hex: &str) -> String {
        if self.color {
            format!("{}{}{text}{}", Theme::bold(), Theme::fg(hex), Theme::reset())
        } else {
            text.to_string()
        }
    }

    /// Dimmed secondary text.
    #[must_use]
    pub fn dim(&self, text: &str) -> String {
        if self.color {
            format!(
                "{}{}{text}{}",
                Theme::dim(),
                Theme::fg(&self.theme.colors.text_dim),
                Theme::reset()
            )
        } else {
            text.to_string()
        }
    }

    /// Renders `text` with the char ranges in `ranges` highlighted.
    ///
    /// Ranges are `(start, end)` char indices, end exclusive, sorted and
    /// non-overlapping. Out-of-bounds ends are cut to the text length.
    #[must_use]
    pub fn highlighted(&self, text: &str, ranges: &[(usize, usize)]) -> String {
        if ranges.is_empty() || !self.color {
            return text.to_string();
        }

        let chars: Vec<char> = text.chars().collect();
        let colors = &self.theme.colors;
        let mut out = String::with_capacity(text.len() * 2);
        let mut current_pos = 0;

        for &(start, end) in ranges {
            let start = start.min(chars.len());
            let end = end.min(chars.len());
            if start > current_pos {
                out.extend(&chars[current_pos..start]);
            }

            let section: String = chars[start.max(current_pos)..end].iter().collect();
            out.push_str(&self.fg_bg(
                &section,
                &colors.match_highlight_fg,
                &colors.match_highlight_bg,
            ));
            current_pos = current_pos.max(end);
        }

        if current_pos < chars.len() {
            out.extend(&chars[current_pos..]);
        }
        out
    }
}

/// Formats a count with thousands separators, e.g. `1247` as `"1,247"`.
#[must_use]
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Terminal columns `text` occupies. CJK and most emoji take two.
#[must_use]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Cuts `text` to at most `width` columns, ending in `…` when shortened.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Greedy word wrap at `width` columns. Words longer than a line stand alone.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in text.split_whitespace() {
        let word_width = display_width(word);
        if line_width > 0 && line_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }
        if line_width > 0 {
            line.push(' ');
            line_width += 1;
        }
        line.push_str(word);
        line_width += word_width;
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Horizontal rule of `width` box-drawing characters.
#[must_use]
pub fn rule(width: usize) -> String {
    "─".repeat(width)
}
