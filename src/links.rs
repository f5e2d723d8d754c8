use std::borrow::Cow;
use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet};

use crate::error::{MarkdownError, Result};

/// Spaces and parentheses are the characters that break `()`-delimited
/// link destinations; everything else passes through untouched.
const URL_ENCODE_SET: &AsciiSet = &AsciiSet::EMPTY.add(b' ').add(b'(').add(b')');

/// Encode a URL for embedding inside `()`-delimited link or image syntax.
///
/// Replaces spaces with `%20` and literal parentheses with `%28`/`%29`.
/// Returns a borrowed copy when nothing needs encoding.
///
/// ```rust
/// # use markdown_builder::encode_url;
/// assert_eq!(encode_url("https://example.com/my page"), "https://example.com/my%20page");
/// assert_eq!(encode_url("https://example.com/a_(b)"), "https://example.com/a_%28b%29");
/// ```
pub fn encode_url(url: &str) -> Cow<'_, str> {
    utf8_percent_encode(url, URL_ENCODE_SET).into()
}

fn close_destination(f: &mut fmt::Formatter<'_>, title: Option<&str>) -> fmt::Result {
    if let Some(title) = title.filter(|title| !title.trim().is_empty()) {
        write!(f, r#" "{title}""#)?;
    }
    write!(f, ")")
}

/// A link value that renders itself to Markdown on demand.
///
/// Construction is strict: an empty destination is an error, unlike the
/// lenient no-op text paths on the builders.
///
/// ```rust
/// # use markdown_builder::MarkdownLink;
/// let link = MarkdownLink::new("https://example.com/my page")?
///     .with_display_text("my page")
///     .with_title("My Page");
/// assert_eq!(
///     link.to_markdown(),
///     r#"[my page](https://example.com/my%20page "My Page")"#,
/// );
/// # Ok::<(), markdown_builder::MarkdownError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkdownLink {
    destination: String,
    display_text: Option<String>,
    title: Option<String>,
}

impl MarkdownLink {
    /// Create a link to `destination`.
    ///
    /// Fails with [`MarkdownError::EmptyDestination`] when the destination
    /// is empty or whitespace-only.
    pub fn new(destination: impl Into<String>) -> Result<Self> {
        let destination = destination.into();
        if destination.trim().is_empty() {
            return Err(MarkdownError::EmptyDestination);
        }
        Ok(Self {
            destination,
            display_text: None,
            title: None,
        })
    }

    /// Set the text displayed for the link.
    pub fn with_display_text(mut self, display_text: impl Into<String>) -> Self {
        self.display_text = Some(display_text.into());
        self
    }

    /// Set the title shown when the link is hovered over.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// The destination URL.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// The display text, if one was set.
    pub fn display_text(&self) -> Option<&str> {
        self.display_text.as_deref()
    }

    /// The hover title, if one was set.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Render the link, re-evaluated from the current field state.
    ///
    /// A link without display text whose destination survives encoding
    /// unchanged renders as an autolink `<destination>`.
    pub fn to_markdown(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MarkdownLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = encode_url(&self.destination);
        let display_text = self.display_text.as_deref().unwrap_or(&self.destination);
        let no_display_text = self
            .display_text
            .as_deref()
            .map_or(true, |text| text.is_empty());
        if no_display_text && encoded == display_text {
            return write!(f, "<{}>", self.destination);
        }
        write!(f, "[{display_text}]({encoded}")?;
        close_destination(f, self.title.as_deref())
    }
}

/// An image value that renders itself to Markdown on demand.
///
/// ```rust
/// # use markdown_builder::MarkdownImage;
/// let image = MarkdownImage::new("images/cat (1).png")?.with_alt_text("a cat");
/// assert_eq!(image.to_markdown(), "![a cat](images/cat%20%281%29.png)");
/// # Ok::<(), markdown_builder::MarkdownError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkdownImage {
    address: String,
    alt_text: Option<String>,
    title: Option<String>,
}

impl MarkdownImage {
    /// Create an image pointing at `address`.
    ///
    /// Fails with [`MarkdownError::EmptyAddress`] when the address is empty
    /// or whitespace-only.
    pub fn new(address: impl Into<String>) -> Result<Self> {
        let address = address.into();
        if address.trim().is_empty() {
            return Err(MarkdownError::EmptyAddress);
        }
        Ok(Self {
            address,
            alt_text: None,
            title: None,
        })
    }

    /// Set the text displayed when the image cannot be loaded.
    pub fn with_alt_text(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = Some(alt_text.into());
        self
    }

    /// Set the title shown when the image is hovered over.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// The image address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The alternate text, if one was set.
    pub fn alt_text(&self) -> Option<&str> {
        self.alt_text.as_deref()
    }

    /// The hover title, if one was set.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Render the image, re-evaluated from the current field state.
    pub fn to_markdown(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MarkdownImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = encode_url(&self.address);
        write!(f, "![{}]({encoded}", self.alt_text.as_deref().unwrap_or(""))?;
        close_destination(f, self.title.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn leaves_plain_urls_borrowed() {
        assert!(matches!(
            encode_url("https://example.com/plain"),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn empty_destination_is_rejected() {
        assert_eq!(
            MarkdownLink::new("  ").unwrap_err(),
            MarkdownError::EmptyDestination
        );
        assert_eq!(
            MarkdownImage::new("").unwrap_err(),
            MarkdownError::EmptyAddress
        );
    }

    #[test]
    fn bare_links_render_as_autolinks() {
        let link = MarkdownLink::new("https://example.com").unwrap();
        assert_eq!(link.to_markdown(), "<https://example.com>");
    }

    #[test]
    fn encoded_destination_forces_bracket_form() {
        let link = MarkdownLink::new("https://example.com/my page").unwrap();
        assert_eq!(
            link.to_markdown(),
            "[https://example.com/my page](https://example.com/my%20page)"
        );
    }

    #[test]
    fn empty_display_text_keeps_bracket_form() {
        let link = MarkdownLink::new("https://example.com")
            .unwrap()
            .with_display_text("");
        assert_eq!(link.to_markdown(), "[](https://example.com)");
    }

    #[test]
    fn renders_title_after_destination() {
        let link = MarkdownLink::new("https://example.com")
            .unwrap()
            .with_display_text("home")
            .with_title("Home");
        assert_eq!(link.to_markdown(), r#"[home](https://example.com "Home")"#);
    }

    #[test]
    fn whitespace_title_is_skipped() {
        let image = MarkdownImage::new("cat.png").unwrap().with_title("   ");
        assert_eq!(image.to_markdown(), "![](cat.png)");
    }

    #[test]
    fn rendering_reflects_later_mutation() {
        let image = MarkdownImage::new("cat.png").unwrap();
        assert_eq!(image.to_markdown(), "![](cat.png)");
        let image = image.with_alt_text("a cat").with_title("Cat");
        assert_eq!(image.to_markdown(), r#"![a cat](cat.png "Cat")"#);
    }
}
