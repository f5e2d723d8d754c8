use std::fmt;

use crate::inline::{self, InlineBuilder};
use crate::prefix::PrefixStack;

/// The line terminator written by every builder.
pub(crate) const LINE_BREAK: &str = "\n";

/// Two spaces before a terminator force a hard line break in Markdown.
pub(crate) const HARD_BREAK: &str = "  ";

/// The append-only text accumulator behind every block-capable builder,
/// together with the line-building flag and the prefix stack that decide
/// what happens at the start and end of every line.
///
/// Exclusively owned by one builder; merging a child builder's output into
/// a parent copies the materialized text, never aliases the buffer.
#[derive(Debug, Default)]
pub(crate) struct LineBuffer {
    out: String,
    building_line: bool,
    pub(crate) prefixes: PrefixStack,
}

impl LineBuffer {
    /// Append text verbatim. Empty text changes neither the buffer nor the
    /// line-building flag. Text ending in the line terminator leaves the
    /// buffer at a line boundary.
    pub(crate) fn append(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        tracing::trace!(text, "append");
        self.out.push_str(text);
        self.building_line = !text.ends_with(LINE_BREAK);
    }

    /// Terminate any in-progress line, then write the current prefix so
    /// the next append lands on a freshly decorated line. The very first
    /// line of a nested block gets its prefix through this path too.
    pub(crate) fn start_new_line(&mut self) {
        if self.building_line {
            self.complete_line();
        }
        let prefix = self.prefixes.render();
        self.append(&prefix);
    }

    /// Append the line terminator unconditionally.
    pub(crate) fn complete_line(&mut self) {
        self.out.push_str(LINE_BREAK);
        self.building_line = false;
    }

    /// Position the buffer after a blank-line paragraph boundary.
    ///
    /// An in-progress line is completed first; if anything at all has been
    /// written, one more terminator follows, producing the blank line that
    /// separates block-level content. An empty buffer stays empty.
    pub(crate) fn start_paragraph(&mut self) {
        tracing::trace!(
            building_line = self.building_line,
            len = self.out.len(),
            "start paragraph"
        );
        if self.building_line {
            self.complete_line();
        }
        if !self.out.is_empty() {
            self.complete_line();
        }
    }

    /// Terminate an in-progress line, if any, without forcing a blank line.
    pub(crate) fn complete_paragraph(&mut self) {
        if self.building_line {
            self.complete_line();
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.out.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.out
    }

    pub(crate) fn into_string(self) -> String {
        self.out
    }
}

/// Builds the content of a single paragraph: inline styling plus explicit
/// lines, with no access to block constructs and no shared prefix state.
///
/// Created fresh by [`MarkdownBuilder::paragraph_with`]; its rendered
/// output is copied into the parent when the callback returns.
///
/// [`MarkdownBuilder::paragraph_with`]: crate::MarkdownBuilder::paragraph_with
///
/// ```rust
/// # use markdown_builder::MarkdownBuilder;
/// let mut md = MarkdownBuilder::new();
/// md.paragraph_with(|p| {
///     p.add("The ").bold("quick").add(" brown fox.");
/// });
/// assert_eq!(md.as_str(), "The **quick** brown fox.\n");
/// ```
#[derive(Debug, Default)]
pub struct ParagraphBuilder {
    line: LineBuffer,
}

impl ParagraphBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append text verbatim. Empty text is a no-op.
    pub fn add(&mut self, text: &str) -> &mut Self {
        self.line.append(text);
        self
    }

    /// Append a full line: the content is trimmed at the end, suffixed
    /// with a two-space hard break, and terminated.
    pub fn line(&mut self, text: &str) -> &mut Self {
        self.line_with(|b| {
            b.add(text);
        })
    }

    /// Append a full line built by `f`.
    pub fn line_with(&mut self, f: impl FnOnce(&mut InlineBuilder)) -> &mut Self {
        let mut content = InlineBuilder::new();
        f(&mut content);
        let content = content.into_string();
        self.line.start_new_line();
        self.line.append(content.trim_end());
        self.line.append(HARD_BREAK);
        self.complete_line()
    }

    /// Append the line terminator unconditionally.
    pub fn complete_line(&mut self) -> &mut Self {
        self.line.complete_line();
        self
    }

    /// Append bold text. Empty text is a no-op.
    pub fn bold(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        self.add(&inline::styled("**", |b| {
            b.add(text);
        }))
    }

    /// Append italic text. Empty text is a no-op.
    pub fn italic(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        self.add(&inline::styled("*", |b| {
            b.add(text);
        }))
    }

    /// Append bold italic text. Empty text is a no-op.
    pub fn bold_italic(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        self.add(&inline::styled("***", |b| {
            b.add(text);
        }))
    }

    /// Append an inline code span, doubling any backticks in the text.
    /// Empty text is a no-op.
    pub fn code(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        let escaped = text.replace('`', "``");
        self.add(&inline::styled("`", |b| {
            b.add(&escaped);
        }))
    }

    /// Append a bare autolink: `<url>`.
    pub fn autolink(&mut self, url: &str) -> &mut Self {
        self.add(&format!("<{url}>"))
    }

    /// Append a link with display text and an optional hover title.
    pub fn link(&mut self, url: &str, text: &str, title: Option<&str>) -> &mut Self {
        self.add(&inline::link_fragment(url, text, title))
    }

    /// Append an image with alt text and an optional hover title.
    pub fn image(&mut self, url: &str, alt_text: &str, title: Option<&str>) -> &mut Self {
        self.add(&inline::image_fragment(url, alt_text, title))
    }

    /// Append an image that links to `destination` when clicked.
    pub fn linked_image(
        &mut self,
        destination: &str,
        image: &str,
        alt_text: &str,
        title: Option<&str>,
    ) -> &mut Self {
        self.add(&inline::linked_image_fragment(destination, image, alt_text, title))
    }

    /// Length of the content in bytes.
    pub fn len(&self) -> usize {
        self.line.len()
    }

    /// Whether nothing has been added yet.
    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }

    /// The content built so far.
    pub fn as_str(&self) -> &str {
        self.line.as_str()
    }

    /// Consume the builder, returning the content.
    pub fn into_string(self) -> String {
        self.line.into_string()
    }
}

impl fmt::Display for ParagraphBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.line.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn append_sets_the_flag_unless_terminated() {
        let mut line = LineBuffer::default();
        line.append("building");
        assert!(line.building_line);
        line.append("done\n");
        assert!(!line.building_line);
    }

    #[test]
    fn empty_append_changes_nothing() {
        let mut line = LineBuffer::default();
        line.append("text");
        line.append("");
        assert_eq!(line.as_str(), "text");
        assert!(line.building_line);
    }

    #[test]
    fn start_new_line_writes_prefix_at_position_zero() {
        let mut line = LineBuffer::default();
        line.prefixes.push_blockquote();
        line.start_new_line();
        assert_eq!(line.as_str(), "> ");
    }

    #[test]
    fn consecutive_new_lines_emit_exactly_one_terminator() {
        let mut line = LineBuffer::default();
        line.prefixes.push_blockquote();
        line.start_new_line();
        line.start_new_line();
        assert_eq!(line.as_str(), "> \n> ");
    }

    #[test]
    fn start_paragraph_on_empty_buffer_emits_nothing() {
        let mut line = LineBuffer::default();
        line.start_paragraph();
        assert_eq!(line.as_str(), "");
    }

    #[test]
    fn start_paragraph_after_open_line_emits_two_terminators() {
        let mut line = LineBuffer::default();
        line.append("content");
        line.start_paragraph();
        assert_eq!(line.as_str(), "content\n\n");
    }

    #[test]
    fn start_paragraph_forces_blank_line_even_after_clean_ending() {
        let mut line = LineBuffer::default();
        line.append("content\n");
        line.start_paragraph();
        assert_eq!(line.as_str(), "content\n\n");
    }

    #[test]
    fn complete_paragraph_only_terminates_open_lines() {
        let mut line = LineBuffer::default();
        line.append("content\n");
        line.complete_paragraph();
        assert_eq!(line.as_str(), "content\n");
        line.append("more");
        line.complete_paragraph();
        assert_eq!(line.as_str(), "content\nmore\n");
    }

    #[test]
    fn paragraph_builder_lines_get_hard_breaks() {
        let mut paragraph = ParagraphBuilder::new();
        paragraph.line("first").line("second   ");
        assert_eq!(paragraph.as_str(), "first  \nsecond  \n");
    }

    #[test]
    fn paragraph_builder_completes_open_line_before_new_line() {
        let mut paragraph = ParagraphBuilder::new();
        paragraph.add("open");
        paragraph.line("next");
        assert_eq!(paragraph.as_str(), "open\nnext  \n");
    }

    proptest! {
        #[test]
        fn appended_fragments_concatenate(
            fragments in proptest::collection::vec("[a-zA-Z0-9 .,!?-]{0,12}", 0..8),
        ) {
            let mut line = LineBuffer::default();
            for fragment in &fragments {
                line.append(fragment);
            }
            prop_assert_eq!(line.as_str(), fragments.concat());
        }
    }
}
