//! Error taxonomy for builder and value-object operations.

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, MarkdownError>;

/// Errors raised by builder operations and value-object constructors.
///
/// All failures are synchronous and occur before any buffer mutation;
/// a failed call never leaves partially written Markdown behind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum MarkdownError {
    /// A heading level outside the `1..=6` range was requested.
    #[error("heading level must be between 1 and 6, got {0}")]
    HeadingLevelOutOfRange(u8),
    /// An indent size below 1 was supplied at configuration time.
    #[error("indent size must be at least 1, got {0}")]
    IndentSizeOutOfRange(usize),
    /// A table header was defined twice on the same table builder.
    #[error("table header has already been defined")]
    TableHeaderAlreadyDefined,
    /// A link was constructed from an empty or whitespace-only destination.
    #[error("link destination cannot be empty")]
    EmptyDestination,
    /// An image was constructed from an empty or whitespace-only address.
    #[error("image address cannot be empty")]
    EmptyAddress,
    /// Styled text was constructed from an empty or whitespace-only string.
    #[error("styled text cannot be empty")]
    EmptyText,
}
