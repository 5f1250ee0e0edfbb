//! Post body renderer for the detail view.
//!
//! Bodies are markdown. Only the parts that matter in a terminal are
//! interpreted: headings are bolded, fenced code is kept verbatim, and every
//! other line is word-wrapped. Runs of blank lines collapse into one.

use crate::ui::helpers::{truncate, wrap, Painter};

/// Indent for code block lines.
const CODE_INDENT: &str = "    ";

pub fn render_body(out: &mut String, body: &str, painter: &Painter, cols: usize) {
    let colors = painter.colors();
    let width = cols.max(20);
    let mut in_code = false;
    let mut last_blank = true;

    for line in body.lines() {
        if line.trim_start().starts_with("```") {
            in_code = !in_code;
            continue;
        }

        if in_code {
            let code = truncate(line, width.saturating_sub(CODE_INDENT.len()));
            out.push_str(CODE_INDENT);
            out.push_str(&painter.fg(&code, &colors.accent));
            out.push('\n');
            last_blank = false;
            continue;
        }

        let text = line.trim();
        if text.is_empty() {
            if !last_blank {
                out.push('\n');
            }
            last_blank = true;
            continue;
        }
        last_blank = false;

        if text.starts_with('#') {
            let heading = text.trim_start_matches('#').trim_start();
            out.push_str(&painter.bold(&truncate(heading, width), &colors.header_fg));
            out.push('\n');
        } else {
            for wrapped in wrap(text, width) {
                out.push_str(&painter.fg(&wrapped, &colors.text_normal));
                out.push('\n');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Theme;

    fn plain(body: &str, cols: usize) -> String {
        let theme = Theme::default();
        let mut out = String::new();
        render_body(&mut out, body, &Painter::new(&theme, false), cols);
        out
    }

    #[test]
    fn headings_lose_their_hashes() {
        assert_eq!(plain("# Title\n\n## Introduction", 40), "Title\n\nIntroduction\n");
    }

    #[test]
    fn code_is_kept_verbatim_and_fences_dropped() {
        let body = "Setup:\n```javascript\nconst app = express();\n  app.listen(3000);\n```\nDone.";
        assert_eq!(
            plain(body, 80),
            "Setup:\n    const app = express();\n      app.listen(3000);\nDone.\n"
        );
    }

    #[test]
    fn paragraphs_wrap_and_blank_runs_collapse() {
        let out = plain("Clean code is not just about working code\n\n\n\nEnd", 20);
        assert_eq!(out, "Clean code is not\njust about working\ncode\n\nEnd\n");
    }
}
