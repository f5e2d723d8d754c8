use std::fmt;

use crate::links;

/// Builds a single run of inline Markdown: plain text, emphasis, inline
/// code, links, and images. No block constructs, no line management.
///
/// ```rust
/// # use markdown_builder::InlineBuilder;
/// let mut inline = InlineBuilder::new();
/// inline.add("see ").bold("this").add(" and ").code("that");
/// assert_eq!(inline.as_str(), "see **this** and `that`");
/// ```
#[derive(Debug, Default)]
pub struct InlineBuilder {
    out: String,
}

impl InlineBuilder {
    /// Create an empty inline builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text verbatim. Empty text is a no-op.
    pub fn add(&mut self, text: &str) -> &mut Self {
        if !text.is_empty() {
            self.out.push_str(text);
        }
        self
    }

    /// Append bold text. Empty text is a no-op.
    pub fn bold(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        self.bold_with(|b| {
            b.add(text);
        })
    }

    /// Append bold content built by `f`.
    pub fn bold_with(&mut self, f: impl FnOnce(&mut InlineBuilder)) -> &mut Self {
        self.add(&styled("**", f))
    }

    /// Append italic text. Empty text is a no-op.
    pub fn italic(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        self.italic_with(|b| {
            b.add(text);
        })
    }

    /// Append italic content built by `f`.
    pub fn italic_with(&mut self, f: impl FnOnce(&mut InlineBuilder)) -> &mut Self {
        self.add(&styled("*", f))
    }

    /// Append bold italic text. Empty text is a no-op.
    pub fn bold_italic(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        self.bold_italic_with(|b| {
            b.add(text);
        })
    }

    /// Append bold italic content built by `f`.
    pub fn bold_italic_with(&mut self, f: impl FnOnce(&mut InlineBuilder)) -> &mut Self {
        self.add(&styled("***", f))
    }

    /// Append an inline code span. Backticks in the text are doubled so
    /// they survive inside the span. Empty text is a no-op.
    pub fn code(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        let escaped = text.replace('`', "``");
        self.code_with(|b| {
            b.add(&escaped);
        })
    }

    /// Append an inline code span built by `f`, without escaping.
    pub fn code_with(&mut self, f: impl FnOnce(&mut InlineBuilder)) -> &mut Self {
        self.add(&styled("`", f))
    }

    /// Append a bare autolink: `<url>`. The URL is not encoded.
    pub fn autolink(&mut self, url: &str) -> &mut Self {
        self.add(&format!("<{url}>"))
    }

    /// Append a link with display text and an optional hover title. The
    /// URL is percent-encoded before it is embedded.
    pub fn link(&mut self, url: &str, text: &str, title: Option<&str>) -> &mut Self {
        self.add(&link_fragment(url, text, title))
    }

    /// Append an image with alt text and an optional hover title.
    pub fn image(&mut self, url: &str, alt_text: &str, title: Option<&str>) -> &mut Self {
        self.add(&image_fragment(url, alt_text, title))
    }

    /// Append an image that links to `destination` when clicked.
    pub fn linked_image(
        &mut self,
        destination: &str,
        image: &str,
        alt_text: &str,
        title: Option<&str>,
    ) -> &mut Self {
        self.add(&linked_image_fragment(destination, image, alt_text, title))
    }

    /// Length of the content in bytes.
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Whether nothing has been added yet.
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// The content built so far.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Consume the builder, returning the content.
    pub fn into_string(self) -> String {
        self.out
    }
}

impl fmt::Display for InlineBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.out)
    }
}

/// Render content built by `f` wrapped in a fixed marker pair.
pub(crate) fn styled(marker: &str, f: impl FnOnce(&mut InlineBuilder)) -> String {
    let mut fragment = InlineBuilder::new();
    f(&mut fragment);
    format!("{marker}{}{marker}", fragment.as_str())
}

fn has_title(title: &str) -> bool {
    !title.trim().is_empty()
}

pub(crate) fn link_fragment(url: &str, text: &str, title: Option<&str>) -> String {
    let encoded = links::encode_url(url);
    match title {
        Some(title) if has_title(title) => format!(r#"[{text}]({encoded} "{title}")"#),
        _ => format!("[{text}]({encoded})"),
    }
}

pub(crate) fn image_fragment(url: &str, alt_text: &str, title: Option<&str>) -> String {
    let encoded = links::encode_url(url);
    match title {
        Some(title) if has_title(title) => format!(r#"![{alt_text}]({encoded} "{title}")"#),
        _ => format!("![{alt_text}]({encoded})"),
    }
}

pub(crate) fn linked_image_fragment(
    destination: &str,
    image: &str,
    alt_text: &str,
    title: Option<&str>,
) -> String {
    let encoded_destination = links::encode_url(destination);
    format!(
        "[{}]({encoded_destination})",
        image_fragment(image, alt_text, title)
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn chains_styles_in_application_order() {
        let mut inline = InlineBuilder::new();
        inline.bold_with(|b| {
            b.italic("inner");
        });
        assert_eq!(inline.as_str(), "***inner***");
    }

    #[test]
    fn empty_text_is_a_no_op() {
        let mut inline = InlineBuilder::new();
        inline.add("").bold("").italic("").bold_italic("").code("");
        assert!(inline.is_empty());
    }

    #[test]
    fn doubles_backticks_in_code_spans() {
        let mut inline = InlineBuilder::new();
        inline.code("a `tick`");
        assert_eq!(inline.as_str(), "`a ``tick```");
    }

    #[test]
    fn encodes_link_urls() {
        let mut inline = InlineBuilder::new();
        inline.link("https://example.com/a page", "a page", None);
        assert_eq!(inline.as_str(), "[a page](https://example.com/a%20page)");
    }

    #[test]
    fn skips_whitespace_only_titles() {
        let mut inline = InlineBuilder::new();
        inline.link("https://example.com", "home", Some("  "));
        assert_eq!(inline.as_str(), "[home](https://example.com)");
    }

    #[test]
    fn renders_titled_images() {
        let mut inline = InlineBuilder::new();
        inline.image("cat.png", "a cat", Some("Cat"));
        assert_eq!(inline.as_str(), r#"![a cat](cat.png "Cat")"#);
    }

    #[test]
    fn renders_linked_images() {
        let mut inline = InlineBuilder::new();
        inline.linked_image("https://example.com", "logo (new).png", "logo", None);
        assert_eq!(
            inline.as_str(),
            "[![logo](logo%20%28new%29.png)](https://example.com)"
        );
    }

    #[test]
    fn autolinks_are_not_encoded() {
        let mut inline = InlineBuilder::new();
        inline.autolink("https://example.com/a page");
        assert_eq!(inline.as_str(), "<https://example.com/a page>");
    }
}
