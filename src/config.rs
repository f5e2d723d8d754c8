use std::sync::RwLock;

use crate::error::{MarkdownError, Result};

/// Fallback used whenever no explicit indent size has been configured.
pub(crate) const DEFAULT_INDENT_SIZE: usize = 4;

static GLOBAL: RwLock<MarkdownConfig> = RwLock::new(MarkdownConfig::initial());

/// Process-wide defaults consulted by every builder.
///
/// The global instance is mutable state with no reset-on-use: treat it as
/// set-once-at-startup, or serialize access yourself. Tests should prefer
/// [`ScopedConfig`], which restores the previous global on drop.
///
/// ```rust
/// # use markdown_builder::MarkdownConfig;
/// let config = MarkdownConfig::new()
///     .with_code_language("rust")
///     .with_indent_size(2)?;
/// assert_eq!(config.indent_size(), 2);
/// # Ok::<(), markdown_builder::MarkdownError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkdownConfig {
    default_code_language: String,
    indent_size: usize,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self::initial()
    }
}

impl MarkdownConfig {
    const fn initial() -> Self {
        Self {
            default_code_language: String::new(),
            indent_size: DEFAULT_INDENT_SIZE,
        }
    }

    /// Create a configuration with no default code language and an indent
    /// size of 4.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the code language used for code blocks that do not specify one.
    pub fn with_code_language(mut self, language: impl Into<String>) -> Self {
        self.default_code_language = language.into();
        self
    }

    /// Set the number of spaces pushed per nesting level.
    ///
    /// Validation happens here, at configuration time; pushing an indent
    /// never re-checks the size.
    pub fn with_indent_size(mut self, indent_size: usize) -> Result<Self> {
        if indent_size < 1 {
            return Err(MarkdownError::IndentSizeOutOfRange(indent_size));
        }
        self.indent_size = indent_size;
        Ok(self)
    }

    /// The code language used when a code block does not specify one.
    pub fn default_code_language(&self) -> &str {
        &self.default_code_language
    }

    /// The number of spaces pushed per nesting level.
    pub fn indent_size(&self) -> usize {
        self.indent_size
    }

    /// Snapshot of the current process-wide configuration.
    pub fn global() -> MarkdownConfig {
        GLOBAL
            .read()
            .expect("global Markdown configuration lock poisoned")
            .clone()
    }

    /// Replace the process-wide configuration, returning the previous one.
    pub fn install_global(self) -> MarkdownConfig {
        tracing::debug!(config = ?self, "install global configuration");
        let mut global = GLOBAL
            .write()
            .expect("global Markdown configuration lock poisoned");
        std::mem::replace(&mut global, self)
    }

    /// Restore the process-wide configuration to its defaults.
    pub fn reset_global() {
        MarkdownConfig::initial().install_global();
    }
}

pub(crate) fn global_indent_size() -> usize {
    MarkdownConfig::global().indent_size
}

pub(crate) fn global_code_language() -> String {
    MarkdownConfig::global().default_code_language
}

/// Temporarily overrides the process-wide configuration.
///
/// The previous configuration is reinstalled when the guard is dropped,
/// including during unwinding, so a failing test cannot leak its overrides
/// into the rest of the suite.
///
/// ```rust
/// # use markdown_builder::{MarkdownConfig, ScopedConfig};
/// {
///     let _guard = ScopedConfig::new(MarkdownConfig::new().with_code_language("python"));
///     assert_eq!(MarkdownConfig::global().default_code_language(), "python");
/// }
/// assert_eq!(MarkdownConfig::global().default_code_language(), "");
/// ```
#[derive(Debug)]
#[must_use = "the previous configuration is restored when the guard is dropped"]
pub struct ScopedConfig {
    previous: MarkdownConfig,
}

impl ScopedConfig {
    /// Install `config` globally until the returned guard is dropped.
    pub fn new(config: MarkdownConfig) -> Self {
        Self {
            previous: config.install_global(),
        }
    }
}

impl Drop for ScopedConfig {
    fn drop(&mut self) {
        self.previous.clone().install_global();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::{Mutex, MutexGuard};

    use pretty_assertions::assert_eq;

    use super::*;

    static CONFIG_MUTEX: Mutex<()> = Mutex::new(());

    /// Serializes tests that touch the process-wide configuration.
    pub(crate) fn config_test_lock() -> MutexGuard<'static, ()> {
        CONFIG_MUTEX
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[test]
    fn rejects_zero_indent_size() {
        assert_eq!(
            MarkdownConfig::new().with_indent_size(0),
            Err(MarkdownError::IndentSizeOutOfRange(0))
        );
    }

    #[test]
    fn accepts_indent_size_of_one() {
        let config = MarkdownConfig::new().with_indent_size(1).unwrap();
        assert_eq!(config.indent_size(), 1);
    }

    #[test]
    fn scoped_override_restores_previous_global() {
        let _lock = config_test_lock();
        {
            let _guard = ScopedConfig::new(
                MarkdownConfig::new()
                    .with_code_language("fsharp")
                    .with_indent_size(2)
                    .unwrap(),
            );
            assert_eq!(MarkdownConfig::global().default_code_language(), "fsharp");
            assert_eq!(MarkdownConfig::global().indent_size(), 2);
        }
        assert_eq!(MarkdownConfig::global(), MarkdownConfig::default());
    }

    #[test]
    fn install_global_returns_previous() {
        let _lock = config_test_lock();
        let previous = MarkdownConfig::new()
            .with_code_language("sql")
            .install_global();
        assert_eq!(previous, MarkdownConfig::default());
        assert_eq!(MarkdownConfig::global().default_code_language(), "sql");
        MarkdownConfig::reset_global();
        assert_eq!(MarkdownConfig::global(), MarkdownConfig::default());
    }
}
