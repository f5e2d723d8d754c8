//! Build Markdown fluently. [markdown_builder] composes [CommonMark] and
//! [GitHub Flavored Markdown] from structured calls instead of manual
//! string concatenation.
//!
//! [markdown_builder]: index.html
//! [CommonMark]: https://spec.commonmark.org/
//! [GitHub Flavored Markdown]: https://github.github.com/gfm/
//!
//! # Getting Started
//!
//! ```rust
//! use markdown_builder::MarkdownBuilder;
//!
//! let mut md = MarkdownBuilder::new();
//! md.heading(1, "Release Notes")?;
//! md.paragraph("Everything that changed this week.");
//! md.unordered_list(["faster builds", "fewer bugs"]);
//!
//! let expected = "\
//! ## Release Notes
//!
//! Everything that changed this week.
//!
//! - faster builds
//! - fewer bugs
//! ";
//! assert_eq!(md.as_str(), expected);
//! # Ok::<(), markdown_builder::MarkdownError>(())
//! ```
//!
//! # Nesting
//!
//! Block constructs nest arbitrarily; each nested level contributes a
//! line prefix (indentation or a `>` marker) that is applied to every
//! line it contains and removed when the construct ends.
//!
//! ```rust
//! use markdown_builder::MarkdownBuilder;
//!
//! let mut md = MarkdownBuilder::new();
//! md.block_quote_with(|quote| {
//!     quote.line("An aside:");
//!     quote.unordered_list_with(|list| {
//!         list.unordered_item("with a list in it");
//!         Ok(())
//!     })?;
//!     Ok(())
//! })?;
//!
//! // The list is a top-level block inside the quote, so it separates
//! // itself from the quoted line with a paragraph boundary.
//! assert_eq!(md.as_str(), "> An aside:  \n\n> - with a list in it\n");
//! # Ok::<(), markdown_builder::MarkdownError>(())
//! ```

mod builder;
mod code;
mod config;
mod error;
mod inline;
mod links;
mod paragraph;
mod prefix;
mod style;
mod table;

pub use builder::{DefinitionListItemBuilder, MarkdownBuilder, OrderedListBuilder};
pub use code::{BlockLanguage, CodeBlockBuilder};
pub use config::{MarkdownConfig, ScopedConfig};
pub use error::{MarkdownError, Result};
pub use inline::InlineBuilder;
pub use links::{encode_url, MarkdownImage, MarkdownLink};
pub use paragraph::ParagraphBuilder;
pub use style::StyledText;
pub use table::{CellAlignment, TableBuilder, TableHeaderBuilder, TableRowBuilder};
