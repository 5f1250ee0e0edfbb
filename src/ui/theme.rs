//! Colour palettes and ANSI escape sequence generation.
//!
//! Themes are plain TOML files. Two are built in; custom ones can be loaded from
//! disk with [`Theme::from_file`].
//!
//! # Built-in Themes
//!
//! - `folio-dark`: Slate background tones with cyan accents (default)
//! - `folio-light`: Same palette tuned for light terminals
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#e2e8f0"
//! text_normal = "#cbd5e1"
//! text_dim = "#64748b"
//! border = "#334155"
//! accent = "#22d3ee"
//! featured_fg = "#fbbf24"
//! marked_fg = "#f472b6"
//! match_highlight_fg = "#0f172a"
//! match_highlight_bg = "#facc15"
//! pager_current_fg = "#0f172a"
//! pager_current_bg = "#22d3ee"
//! empty_state_fg = "#38bdf8"
//! ```
//!
//! # Example
//!
//! ```rust
//! use folio::ui::theme::Theme;
//!
//! let theme = Theme::from_name("folio-light").unwrap();
//! let line = format!("{}Tech Blog{}", Theme::fg(&theme.colors.header_fg), Theme::reset());
//! assert!(line.starts_with("\u{1b}[38;2;"));
//! ```

use crate::domain::error::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "folio-dark";

/// A named colour scheme.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Colour palette for every UI element.
    pub colors: ThemeColors,
}

/// Colour definitions as hex strings (e.g. `"#cdd6f4"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Title text.
    pub header_fg: String,
    /// Optional title background.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Card body text.
    pub text_normal: String,
    /// Metadata, hints, and the URL line.
    pub text_dim: String,
    /// Separator lines.
    pub border: String,

    /// Category badges and tags.
    pub accent: String,
    /// "Featured" marker.
    pub featured_fg: String,
    /// Like and bookmark markers for posts the reader has marked.
    pub marked_fg: String,

    /// Search match foreground.
    pub match_highlight_fg: String,
    /// Search match background.
    pub match_highlight_bg: String,

    /// Current page number foreground.
    pub pager_current_fg: String,
    /// Current page number background.
    pub pager_current_bg: String,

    /// Empty state message.
    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name, `None` if the name is unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "folio-dark" => include_str!("../../themes/folio-dark.toml"),
            "folio-light" => include_str!("../../themes/folio-light.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Names accepted by [`Theme::from_name`].
    #[must_use]
    pub const fn builtin_names() -> &'static [&'static str] {
        &["folio-dark", "folio-light"]
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Theme`] if the file cannot be read or its content is
    /// not a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            FolioError::Theme(format!("Failed to read theme file {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| FolioError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Converts a hex colour to an RGB tuple, white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground sequence, `\x1b[38;2;r;g;bm`.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background sequence, `\x1b[48;2;r;g;bm`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the `folio-dark` theme.
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("Built-in folio-dark theme should always parse")
    }
}
