use std::borrow::Cow;

use itertools::Itertools;

use crate::config;

/// One piece of leading-line decoration applied while a nested construct is
/// active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PrefixFragment {
    /// Renders as the literal blockquote marker `>`.
    Blockquote,
    /// Renders as the captured number of spaces.
    Indent(usize),
}

impl PrefixFragment {
    fn render(&self) -> Cow<'static, str> {
        match self {
            PrefixFragment::Blockquote => ">".into(),
            PrefixFragment::Indent(width) => " ".repeat(*width).into(),
        }
    }
}

/// Stack of prefix fragments applied to the start of every new line.
///
/// Fragments are pushed when a nested construct is entered and popped when
/// it is left; callers uphold strict push/pop symmetry. The stack is empty
/// at the root.
#[derive(Debug, Default)]
pub(crate) struct PrefixStack {
    fragments: Vec<PrefixFragment>,
}

impl PrefixStack {
    pub(crate) fn push_blockquote(&mut self) {
        self.push(PrefixFragment::Blockquote);
    }

    /// Push an indent fragment sized to the currently configured indent
    /// size. The size was validated when it was configured.
    pub(crate) fn push_indent(&mut self) {
        self.push(PrefixFragment::Indent(config::global_indent_size()));
    }

    fn push(&mut self, fragment: PrefixFragment) {
        tracing::trace!(?fragment, depth = self.fragments.len(), "push prefix");
        self.fragments.push(fragment);
    }

    pub(crate) fn pop(&mut self) {
        tracing::trace!(depth = self.fragments.len(), "pop prefix");
        self.fragments
            .pop()
            .expect("prefix stack popped while empty");
    }

    /// Render the stack outer-to-inner, with exactly one trailing space
    /// unless the concatenation already ends in one.
    pub(crate) fn render(&self) -> String {
        if self.fragments.is_empty() {
            return String::new();
        }
        let mut rendered = self.fragments.iter().map(PrefixFragment::render).join("");
        if !rendered.ends_with(' ') {
            rendered.push(' ');
        }
        rendered
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn empty_stack_renders_nothing() {
        assert_eq!(PrefixStack::default().render(), "");
    }

    #[test]
    fn renders_trailing_space_after_blockquote() {
        let mut stack = PrefixStack::default();
        stack.push_blockquote();
        stack.push_blockquote();
        stack.push_blockquote();
        stack.push_indent();
        stack.push_blockquote();
        assert_eq!(stack.render(), ">>>    > ");
    }

    #[test]
    fn does_not_double_trailing_space_after_indent() {
        let mut stack = PrefixStack::default();
        stack.push_blockquote();
        stack.push_blockquote();
        stack.push_blockquote();
        stack.push_indent();
        assert_eq!(stack.render(), ">>>    ");
    }

    #[test]
    fn render_reflects_current_contents() {
        let mut stack = PrefixStack::default();
        stack.push_blockquote();
        assert_eq!(stack.render(), "> ");
        stack.push_blockquote();
        assert_eq!(stack.render(), ">> ");
        stack.pop();
        assert_eq!(stack.render(), "> ");
    }

    #[test]
    #[should_panic(expected = "prefix stack popped while empty")]
    fn popping_an_empty_stack_panics() {
        PrefixStack::default().pop();
    }

    proptest! {
        #[test]
        fn push_pop_round_trips(base in proptest::collection::vec(any::<bool>(), 0..4),
                                nested in proptest::collection::vec(any::<bool>(), 0..8)) {
            let mut stack = PrefixStack::default();
            for &quote in &base {
                if quote {
                    stack.push_blockquote();
                } else {
                    stack.push(PrefixFragment::Indent(4));
                }
            }
            let before = stack.render();
            for &quote in &nested {
                if quote {
                    stack.push_blockquote();
                } else {
                    stack.push(PrefixFragment::Indent(4));
                }
            }
            for _ in &nested {
                stack.pop();
            }
            prop_assert_eq!(stack.render(), before);
        }
    }
}
