//! Markdown-subset rendering for chat bubbles.
//!
//! The engine emits a small fixed markup vocabulary: `**bold**`,
//! `*italic*`, and newlines. This converts it to presentational HTML.
//! Pure function, no state.

use std::sync::LazyLock;

use regex::Regex;

static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("Invalid bold regex"));

static ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*]+?)\*").expect("Invalid italic regex"));

/// Convert the engine's markdown subset into HTML.
///
/// Bold runs first so that `**x**` is never consumed as two italics.
pub fn render_html(text: &str) -> String {
    let bolded = BOLD_RE.replace_all(text, "<strong>$1</strong>");
    let italicized = ITALIC_RE.replace_all(&bolded, "<em>$1</em>");
    italicized.replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold() {
        assert_eq!(render_html("**hi**"), "<strong>hi</strong>");
    }

    #[test]
    fn test_italic() {
        assert_eq!(render_html("*hi*"), "<em>hi</em>");
    }

    #[test]
    fn test_newline() {
        assert_eq!(render_html("a\nb"), "a<br>b");
    }

    #[test]
    fn test_bold_inside_line() {
        assert_eq!(
            render_html("At **Clickpost** since 2025"),
            "At <strong>Clickpost</strong> since 2025"
        );
    }

    #[test]
    fn test_bold_then_italic_same_line() {
        assert_eq!(
            render_html("**bold** and *soft*"),
            "<strong>bold</strong> and <em>soft</em>"
        );
    }

    #[test]
    fn test_multiple_bold_runs() {
        assert_eq!(
            render_html("**Email:** a\n**Phone:** b"),
            "<strong>Email:</strong> a<br><strong>Phone:</strong> b"
        );
    }

    #[test]
    fn test_unmatched_markers_left_alone() {
        assert_eq!(render_html("2 ** 3"), "2 ** 3");
        assert_eq!(render_html("lone * star"), "lone * star");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(render_html("no markup here"), "no markup here");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render_html(""), "");
    }

    #[test]
    fn test_multiline_card_shape() {
        let text = "Lead.\n\n**Head**\n- one\n- two";
        assert_eq!(
            render_html(text),
            "Lead.<br><br><strong>Head</strong><br>- one<br>- two"
        );
    }
}
