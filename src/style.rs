use std::fmt;

use crate::error::{MarkdownError, Result};

/// Text with inline styling applied, rendered to Markdown on demand.
///
/// Styles wrap the text in fixed marker pairs; the innermost-applied
/// marker sits closest to the text and the closing markers mirror the
/// opening ones in reverse. Marker characters occurring in the text itself
/// are backslash-escaped so the styling round-trips.
///
/// ```rust
/// # use markdown_builder::StyledText;
/// let styled = StyledText::new("emphasis")?.with_bold(true).with_italic(true);
/// assert_eq!(styled.to_markdown(), "***emphasis***");
/// # Ok::<(), markdown_builder::MarkdownError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyledText {
    text: String,
    bold: bool,
    italic: bool,
    strikethrough: bool,
    highlight: bool,
    subscript: bool,
    superscript: bool,
}

impl StyledText {
    /// Create styled text. The text is trimmed; an empty or
    /// whitespace-only string fails with [`MarkdownError::EmptyText`].
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(MarkdownError::EmptyText);
        }
        Ok(Self {
            text: trimmed.to_string(),
            ..Self::default()
        })
    }

    /// Apply or remove bold styling.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Apply or remove italic styling.
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Apply or remove strike-through styling.
    pub fn with_strikethrough(mut self, strikethrough: bool) -> Self {
        self.strikethrough = strikethrough;
        self
    }

    /// Apply or remove highlight styling.
    pub fn with_highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }

    /// Apply or remove subscript styling. Subscript and superscript are
    /// mutually exclusive; applying this one removes the other.
    pub fn with_subscript(mut self, subscript: bool) -> Self {
        self.subscript = subscript;
        if subscript {
            self.superscript = false;
        }
        self
    }

    /// Apply or remove superscript styling. Subscript and superscript are
    /// mutually exclusive; applying this one removes the other.
    pub fn with_superscript(mut self, superscript: bool) -> Self {
        self.superscript = superscript;
        if superscript {
            self.subscript = false;
        }
        self
    }

    /// Render the styled text, re-evaluated from the current field state.
    pub fn to_markdown(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Strikethrough stays first and subscript last to limit the need
        // for falling back to HTML tags.
        let mut prefix = String::new();
        if self.strikethrough {
            prefix.push_str("~~");
        }
        if self.bold {
            prefix.push_str("**");
        }
        if self.italic {
            prefix.push('*');
        }
        if self.highlight {
            prefix.push_str("==");
        }
        if self.superscript {
            prefix.push('^');
        }
        // `~` directly against `~~` would read as a three-tilde run, so
        // subscript combined with strike-through alone uses <sub> tags.
        let mut subscript_tags = false;
        if self.subscript {
            if self.strikethrough && prefix.len() == 2 {
                subscript_tags = true;
            } else {
                prefix.push('~');
            }
        }
        let suffix: String = prefix.chars().rev().collect();
        let escaped = escape_markers(&self.text, &prefix);
        if subscript_tags {
            write!(f, "<sub>{prefix}{escaped}{suffix}</sub>")
        } else {
            write!(f, "{prefix}{escaped}{suffix}")
        }
    }
}

/// Backslash-escape every distinct marker character in `text`.
fn escape_markers(text: &str, markers: &str) -> String {
    let mut escaped = text.to_string();
    let mut seen = Vec::new();
    for marker in markers.chars() {
        if !seen.contains(&marker) {
            seen.push(marker);
            escaped = escaped.replace(marker, &format!("\\{marker}"));
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn empty_text_is_rejected() {
        assert_eq!(StyledText::new(" \t "), Err(MarkdownError::EmptyText));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let styled = StyledText::new("  padded  ").unwrap();
        assert_eq!(styled.to_markdown(), "padded");
    }

    #[rstest]
    #[case::bold(StyledText::new("x").unwrap().with_bold(true), "**x**")]
    #[case::italic(StyledText::new("x").unwrap().with_italic(true), "*x*")]
    #[case::bold_italic(
        StyledText::new("x").unwrap().with_bold(true).with_italic(true),
        "***x***"
    )]
    #[case::strikethrough(StyledText::new("x").unwrap().with_strikethrough(true), "~~x~~")]
    #[case::highlight(StyledText::new("x").unwrap().with_highlight(true), "==x==")]
    #[case::superscript(StyledText::new("x").unwrap().with_superscript(true), "^x^")]
    #[case::subscript(StyledText::new("x").unwrap().with_subscript(true), "~x~")]
    fn renders_single_styles(#[case] styled: StyledText, #[case] expected: &str) {
        assert_eq!(styled.to_markdown(), expected);
    }

    #[test]
    fn closing_markers_mirror_opening_markers() {
        let styled = StyledText::new("x")
            .unwrap()
            .with_strikethrough(true)
            .with_bold(true)
            .with_italic(true)
            .with_highlight(true)
            .with_superscript(true);
        assert_eq!(styled.to_markdown(), "~~***==^x^==***~~");
    }

    #[test]
    fn subscript_with_strikethrough_falls_back_to_html() {
        let styled = StyledText::new("x")
            .unwrap()
            .with_strikethrough(true)
            .with_subscript(true);
        assert_eq!(styled.to_markdown(), "<sub>~~x~~</sub>");
    }

    #[test]
    fn subscript_and_superscript_are_mutually_exclusive() {
        let styled = StyledText::new("x")
            .unwrap()
            .with_subscript(true)
            .with_superscript(true);
        assert_eq!(styled.to_markdown(), "^x^");
        let styled = StyledText::new("x")
            .unwrap()
            .with_superscript(true)
            .with_subscript(true);
        assert_eq!(styled.to_markdown(), "~x~");
    }

    #[test]
    fn escapes_marker_characters_in_text() {
        let styled = StyledText::new("2 * 3 = 6").unwrap().with_bold(true);
        assert_eq!(styled.to_markdown(), r"**2 \* 3 = 6**");
        let styled = StyledText::new("a = b").unwrap().with_highlight(true);
        assert_eq!(styled.to_markdown(), r"==a \= b==");
    }

    #[test]
    fn rendering_is_reevaluated_per_call() {
        let styled = StyledText::new("x").unwrap().with_bold(true);
        assert_eq!(styled.to_markdown(), "**x**");
        let styled = styled.with_bold(false);
        assert_eq!(styled.to_markdown(), "x");
    }
}
