use std::fmt;

use crate::code::{BlockLanguage, CodeBlockBuilder};
use crate::config;
use crate::error::{MarkdownError, Result};
use crate::inline::{self, InlineBuilder};
use crate::paragraph::{LineBuffer, ParagraphBuilder, HARD_BREAK, LINE_BREAK};
use crate::table::TableBuilder;

mod blocks;
mod lists;

pub use lists::{DefinitionListItemBuilder, OrderedListBuilder};

/// Builds a Markdown document from structured, chainable calls.
///
/// Block-level methods manage line and paragraph boundaries themselves:
/// each one separates itself from prior content, renders through the
/// active prefix stack when nested, and leaves the buffer at a line
/// boundary. Infallible methods return `&mut Self`; methods with a failure
/// mode return [`Result`] and write nothing on failure.
///
/// ```rust
/// use markdown_builder::MarkdownBuilder;
///
/// let mut md = MarkdownBuilder::new();
/// md.heading(1, "Getting Started")?;
/// md.paragraph("Build Markdown from calls, not string concatenation.");
/// md.unordered_list(["headers", "lists", "tables"]);
///
/// assert_eq!(
///     md.as_str(),
///     "# Getting Started\n\
///      \n\
///      Build Markdown from calls, not string concatenation.\n\
///      \n\
///      - headers\n\
///      - lists\n\
///      - tables\n",
/// );
/// # Ok::<(), markdown_builder::MarkdownError>(())
/// ```
#[derive(Debug, Default)]
pub struct MarkdownBuilder {
    line: LineBuffer,
    list_level: usize,
    default_code_language: Option<String>,
}

impl MarkdownBuilder {
    /// Create an empty builder with no nesting and no builder-level code
    /// language.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text verbatim through the line tracker. Empty text is a
    /// no-op.
    pub fn add(&mut self, text: &str) -> &mut Self {
        self.line.append(text);
        self
    }

    /// Append a full prefix-aware line: any in-progress line is completed,
    /// the current prefix is written, and the content is trimmed at the
    /// end, suffixed with a two-space hard break, and terminated.
    pub fn line(&mut self, text: &str) -> &mut Self {
        self.line_with(|b| {
            b.add(text);
        })
    }

    /// Append a full prefix-aware line built by `f`.
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

    /// Append a link with display text and an optional hover title. The
    /// URL is percent-encoded before it is embedded.
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

    /// Set the code language used by code blocks on this builder when none
    /// is given explicitly. Overrides the process-wide default.
    pub fn using_code_language(&mut self, language: impl Into<String>) -> &mut Self {
        self.default_code_language = Some(language.into());
        self
    }

    /// Remove the builder-level code language, restoring the fallback to
    /// the process-wide default.
    pub fn clear_code_language(&mut self) -> &mut Self {
        self.default_code_language = None;
        self
    }

    /// The code language a code block without an explicit language would
    /// use right now: the builder-level language if set, otherwise the
    /// process-wide default.
    pub fn default_code_language(&self) -> String {
        match &self.default_code_language {
            Some(language) => language.clone(),
            None => config::global_code_language(),
        }
    }

    /// Length of the content in bytes.
    pub fn len(&self) -> usize {
        self.line.len()
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }

    /// The document built so far.
    pub fn as_str(&self) -> &str {
        self.line.as_str()
    }

    /// Consume the builder, returning the document.
    pub fn into_string(self) -> String {
        debug_assert!(self.line.prefixes.is_empty());
        self.line.into_string()
    }

    /// Run `f` with a blockquote marker pushed onto the prefix stack. The
    /// marker is popped when the guard drops, so the stack stays balanced
    /// even if `f` panics.
    fn with_blockquote<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let mut guard = PrefixGuard::blockquote(self);
        f(guard.builder())
    }

    /// Run `f` with an indent fragment pushed onto the prefix stack.
    fn with_indent<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let mut guard = PrefixGuard::indent(self);
        f(guard.builder())
    }
}

impl fmt::Display for MarkdownBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.line.as_str())
    }
}

/// Pops the fragment it pushed when dropped.
struct PrefixGuard<'a> {
    builder: &'a mut MarkdownBuilder,
}

impl<'a> PrefixGuard<'a> {
    fn blockquote(builder: &'a mut MarkdownBuilder) -> Self {
        builder.line.prefixes.push_blockquote();
        Self { builder }
    }

    fn indent(builder: &'a mut MarkdownBuilder) -> Self {
        builder.line.prefixes.push_indent();
        Self { builder }
    }

    fn builder(&mut self) -> &mut MarkdownBuilder {
        self.builder
    }
}

impl Drop for PrefixGuard<'_> {
    fn drop(&mut self) {
        self.builder.line.prefixes.pop();
    }
}
