use std::ops::{Deref, DerefMut};

use super::*;

fn task_bullet(checked: bool) -> &'static str {
    if checked {
        "- [x]"
    } else {
        "- [ ]"
    }
}

impl MarkdownBuilder {
    /// Add an unordered list from item texts.
    ///
    /// ```rust
    /// # use markdown_builder::MarkdownBuilder;
    /// let mut md = MarkdownBuilder::new();
    /// md.unordered_list(["Item 1", "Item 2"]);
    /// assert_eq!(md.as_str(), "- Item 1\n- Item 2\n");
    /// ```
    pub fn unordered_list<I, S>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.in_list(|b| {
            for item in items {
                b.unordered_item(item.as_ref());
            }
        });
        self.line.complete_paragraph();
        self
    }

    /// Add an unordered list whose items are built by `f` against this
    /// same builder. The outermost list starts a fresh paragraph; nested
    /// lists push one indent level for their duration.
    pub fn unordered_list_with(
        &mut self,
        f: impl FnOnce(&mut MarkdownBuilder) -> Result<()>,
    ) -> Result<&mut Self> {
        self.in_list(f)?;
        self.line.complete_paragraph();
        Ok(self)
    }

    /// Add an ordered list from item texts, numbered from 1.
    pub fn ordered_list<I, S>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.in_list(|b| {
            for (number, item) in (1..).zip(items) {
                b.ordered_item(number, item.as_ref());
            }
        });
        self.line.complete_paragraph();
        self
    }

    /// Add an ordered list whose items are built by `f` against an
    /// [`OrderedListBuilder`] that assigns numbers automatically.
    ///
    /// ```rust
    /// # use markdown_builder::MarkdownBuilder;
    /// let mut md = MarkdownBuilder::new();
    /// md.ordered_list_with(|list| {
    ///     list.item("first").item("second").item("third");
    ///     Ok(())
    /// })?;
    /// assert_eq!(md.as_str(), "1. first\n2. second\n3. third\n");
    /// # Ok::<(), markdown_builder::MarkdownError>(())
    /// ```
    pub fn ordered_list_with(
        &mut self,
        f: impl FnOnce(&mut OrderedListBuilder<'_>) -> Result<()>,
    ) -> Result<&mut Self> {
        self.in_list(|b| f(&mut OrderedListBuilder::new(b)))?;
        self.line.complete_paragraph();
        Ok(self)
    }

    /// Add one unordered list item.
    pub fn unordered_item(&mut self, text: &str) -> &mut Self {
        self.item_text("-", text)
    }

    /// Add one unordered list item whose content is built by `f`.
    pub fn unordered_item_with(
        &mut self,
        f: impl FnOnce(&mut MarkdownBuilder) -> Result<()>,
    ) -> Result<&mut Self> {
        self.item_content("-", f)
    }

    /// Add one unordered list item with `text` followed by continuation
    /// content built by `f`, indented under the item.
    pub fn unordered_item_and(
        &mut self,
        text: &str,
        f: impl FnOnce(&mut MarkdownBuilder) -> Result<()>,
    ) -> Result<&mut Self> {
        self.item_text_and("-", text, f)
    }

    /// Add one ordered list item with an explicit number.
    pub fn ordered_item(&mut self, number: u64, text: &str) -> &mut Self {
        self.item_text(&format!("{number}."), text)
    }

    /// Add one ordered list item with an explicit number and content built
    /// by `f`.
    pub fn ordered_item_with(
        &mut self,
        number: u64,
        f: impl FnOnce(&mut MarkdownBuilder) -> Result<()>,
    ) -> Result<&mut Self> {
        self.item_content(&format!("{number}."), f)
    }

    /// Add one ordered list item with an explicit number and `text`
    /// followed by continuation content built by `f`.
    pub fn ordered_item_and(
        &mut self,
        number: u64,
        text: &str,
        f: impl FnOnce(&mut MarkdownBuilder) -> Result<()>,
    ) -> Result<&mut Self> {
        self.item_text_and(&format!("{number}."), text, f)
    }

    /// Add a task list item: `- [x]` when checked, `- [ ]` otherwise.
    ///
    /// ```rust
    /// # use markdown_builder::MarkdownBuilder;
    /// let mut md = MarkdownBuilder::new();
    /// md.task_item("ship it", true).task_item("write docs", false);
    /// assert_eq!(md.as_str(), "- [x] ship it\n- [ ] write docs\n");
    /// ```
    pub fn task_item(&mut self, text: &str, checked: bool) -> &mut Self {
        self.item_text(task_bullet(checked), text)
    }

    /// Add a task list item whose content is built by `f`.
    pub fn task_item_with(
        &mut self,
        checked: bool,
        f: impl FnOnce(&mut MarkdownBuilder) -> Result<()>,
    ) -> Result<&mut Self> {
        self.item_content(task_bullet(checked), f)
    }

    /// Add a definition list item with a term and its definitions.
    ///
    /// ```rust
    /// # use markdown_builder::MarkdownBuilder;
    /// let mut md = MarkdownBuilder::new();
    /// md.definition_list_item("Term", ["First definition."]);
    /// assert_eq!(md.as_str(), "Term\n: First definition.  \n\n");
    /// ```
    pub fn definition_list_item<I, S>(&mut self, term: &str, definitions: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.definition_list_item_with(|item| {
            item.term(term);
            for definition in definitions {
                item.definition(definition.as_ref());
            }
        })
    }

    /// Add a definition list item built through a
    /// [`DefinitionListItemBuilder`], which captures the current prefix
    /// for each of its lines.
    pub fn definition_list_item_with(
        &mut self,
        f: impl FnOnce(&mut DefinitionListItemBuilder),
    ) -> &mut Self {
        self.line.complete_paragraph();
        let mut item = DefinitionListItemBuilder::new(self.line.prefixes.render());
        f(&mut item);
        self.line.append(&item.into_string());
        self.complete_line()
    }

    /// List entry and exit shared by ordered and unordered lists: level 1
    /// starts a fresh paragraph, deeper levels indent for their duration.
    fn in_list<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.list_level += 1;
        tracing::trace!(level = self.list_level, "enter list");
        let result = if self.list_level > 1 {
            self.with_indent(f)
        } else {
            self.line.start_paragraph();
            f(self)
        };
        self.list_level -= 1;
        result
    }

    fn item_text(&mut self, bullet: &str, text: &str) -> &mut Self {
        self.line.start_new_line();
        self.line.append(bullet);
        self.line.append(" ");
        self.with_indent(|b| {
            b.add(text);
        });
        self.complete_line()
    }

    fn item_content(
        &mut self,
        bullet: &str,
        f: impl FnOnce(&mut Self) -> Result<()>,
    ) -> Result<&mut Self> {
        self.line.start_new_line();
        self.line.append(bullet);
        self.line.append(" ");
        self.with_indent(f)?;
        Ok(self.complete_line())
    }

    fn item_text_and(
        &mut self,
        bullet: &str,
        text: &str,
        f: impl FnOnce(&mut Self) -> Result<()>,
    ) -> Result<&mut Self> {
        self.item_content(bullet, |b| {
            b.add(text);
            b.line.start_paragraph();
            f(b)
        })
    }
}

/// Assigns list numbers automatically, starting at 1.
///
/// The counter advances by exactly 1 on every item added through this
/// builder, including [`item_numbered`](Self::item_numbered) — an explicit
/// number renders as given but does not reseed the sequence.
///
/// Dereferences to [`MarkdownBuilder`], so nested blocks and further lists
/// remain available inside the list callback.
#[derive(Debug)]
pub struct OrderedListBuilder<'a> {
    builder: &'a mut MarkdownBuilder,
    next_number: u64,
}

impl<'a> OrderedListBuilder<'a> {
    pub(super) fn new(builder: &'a mut MarkdownBuilder) -> Self {
        Self {
            builder,
            next_number: 1,
        }
    }

    /// Add an item using the next number in the sequence.
    pub fn item(&mut self, text: &str) -> &mut Self {
        let number = self.advance();
        self.builder.ordered_item(number, text);
        self
    }

    /// Add an item using the next number, with content built by `f`.
    pub fn item_with(
        &mut self,
        f: impl FnOnce(&mut MarkdownBuilder) -> Result<()>,
    ) -> Result<&mut Self> {
        let number = self.advance();
        self.builder.ordered_item_with(number, f)?;
        Ok(self)
    }

    /// Add an item using the next number, with `text` followed by
    /// continuation content built by `f`.
    pub fn item_and(
        &mut self,
        text: &str,
        f: impl FnOnce(&mut MarkdownBuilder) -> Result<()>,
    ) -> Result<&mut Self> {
        let number = self.advance();
        self.builder.ordered_item_and(number, text, f)?;
        Ok(self)
    }

    /// Add an item with an explicit number. The automatic sequence still
    /// advances by one.
    pub fn item_numbered(&mut self, number: u64, text: &str) -> &mut Self {
        self.advance();
        self.builder.ordered_item(number, text);
        self
    }

    fn advance(&mut self) -> u64 {
        let number = self.next_number;
        self.next_number += 1;
        number
    }
}

impl Deref for OrderedListBuilder<'_> {
    type Target = MarkdownBuilder;

    fn deref(&self) -> &MarkdownBuilder {
        self.builder
    }
}

impl DerefMut for OrderedListBuilder<'_> {
    fn deref_mut(&mut self) -> &mut MarkdownBuilder {
        self.builder
    }
}

/// Builds one definition list item: a term line followed by `: `-marked
/// definition lines, each starting with the captured prefix.
#[derive(Debug)]
pub struct DefinitionListItemBuilder {
    prefix: String,
    out: String,
}

impl DefinitionListItemBuilder {
    fn new(prefix: String) -> Self {
        Self {
            prefix,
            out: String::new(),
        }
    }

    /// Set the term being defined.
    pub fn term(&mut self, term: &str) -> &mut Self {
        self.term_with(|b| {
            b.add(term);
        })
    }

    /// Set the term being defined, built by `f`.
    pub fn term_with(&mut self, f: impl FnOnce(&mut InlineBuilder)) -> &mut Self {
        let mut content = InlineBuilder::new();
        f(&mut content);
        self.out.push_str(&self.prefix);
        self.out.push_str(content.as_str());
        self.out.push_str(LINE_BREAK);
        self
    }

    /// Add one definition of the term.
    pub fn definition(&mut self, definition: &str) -> &mut Self {
        self.definition_with(|b| {
            b.add(definition);
        })
    }

    /// Add one definition of the term, built by `f`.
    pub fn definition_with(&mut self, f: impl FnOnce(&mut InlineBuilder)) -> &mut Self {
        let mut content = InlineBuilder::new();
        f(&mut content);
        self.out.push_str(&self.prefix);
        self.out.push_str(": ");
        self.out.push_str(content.as_str());
        self.out.push_str(HARD_BREAK);
        self.out.push_str(LINE_BREAK);
        self
    }

    fn into_string(self) -> String {
        self.out
    }
}
