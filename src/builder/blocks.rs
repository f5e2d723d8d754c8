use super::*;

impl MarkdownBuilder {
    /// Add a paragraph of plain text, separated from any prior content by
    /// a blank line. Empty text is a no-op.
    ///
    /// Two consecutive paragraphs always get exactly one blank line
    /// between them, whether or not the first one ended cleanly.
    ///
    /// ```rust
    /// # use markdown_builder::MarkdownBuilder;
    /// let mut md = MarkdownBuilder::new();
    /// md.paragraph("First.").paragraph("Second.");
    /// assert_eq!(md.as_str(), "First.\n\nSecond.\n");
    /// ```
    pub fn paragraph(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        self.paragraph_with(|p| {
            p.add(text);
        })
    }

    /// Add a paragraph whose content is built by `f` against a fresh
    /// [`ParagraphBuilder`] with clean line state and no shared prefixes.
    pub fn paragraph_with(&mut self, f: impl FnOnce(&mut ParagraphBuilder)) -> &mut Self {
        self.line.start_paragraph();
        let mut paragraph = ParagraphBuilder::new();
        f(&mut paragraph);
        self.line.append(&paragraph.into_string());
        self.line.complete_paragraph();
        self
    }

    /// Add a heading. `level` must be between 1 and 6; anything else fails
    /// with [`MarkdownError::HeadingLevelOutOfRange`] before any text is
    /// emitted. Empty text is a no-op (the level is still validated).
    ///
    /// ```rust
    /// # use markdown_builder::MarkdownBuilder;
    /// let mut md = MarkdownBuilder::new();
    /// md.heading(2, "Usage")?;
    /// assert_eq!(md.as_str(), "## Usage\n");
    /// # Ok::<(), markdown_builder::MarkdownError>(())
    /// ```
    pub fn heading(&mut self, level: u8, text: &str) -> Result<&mut Self> {
        validate_heading_level(level)?;
        if text.is_empty() {
            return Ok(self);
        }
        Ok(self.heading_inner(level, None, |b| {
            b.add(text);
        }))
    }

    /// Add a heading whose content is built by `f` against an inline
    /// styling builder.
    pub fn heading_with(
        &mut self,
        level: u8,
        f: impl FnOnce(&mut InlineBuilder),
    ) -> Result<&mut Self> {
        validate_heading_level(level)?;
        Ok(self.heading_inner(level, None, f))
    }

    /// Add a heading with a custom id annotation: `## text {#id}`. An
    /// empty id produces a plain heading.
    pub fn heading_with_id(&mut self, level: u8, text: &str, id: &str) -> Result<&mut Self> {
        validate_heading_level(level)?;
        if text.is_empty() {
            return Ok(self);
        }
        Ok(self.heading_inner(level, Some(id), |b| {
            b.add(text);
        }))
    }

    fn heading_inner(
        &mut self,
        level: u8,
        id: Option<&str>,
        f: impl FnOnce(&mut InlineBuilder),
    ) -> &mut Self {
        self.line.start_paragraph();
        self.line.append(&"#".repeat(usize::from(level)));
        self.line.append(" ");
        let mut content = InlineBuilder::new();
        f(&mut content);
        if let Some(id) = id.filter(|id| !id.is_empty()) {
            content.add(&format!(" {{#{id}}}"));
        }
        self.line.append(content.as_str());
        self.line.complete_paragraph();
        self
    }

    /// Add a block quotation, one prefix-aware line per entry.
    ///
    /// ```rust
    /// # use markdown_builder::MarkdownBuilder;
    /// let mut md = MarkdownBuilder::new();
    /// md.block_quote(["Line 1", "Line 2"]);
    /// assert_eq!(md.as_str(), "> Line 1  \n> Line 2  \n");
    /// ```
    pub fn block_quote<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.quoted(|b| {
            for line in lines {
                b.line(line.as_ref());
            }
        });
        self.line.complete_paragraph();
        self
    }

    /// Add a block quotation whose content is built by `f`. The callback
    /// receives this same builder with the blockquote marker pushed, so
    /// nested blocks compose; the marker is popped when `f` returns, even
    /// by panic.
    pub fn block_quote_with(
        &mut self,
        f: impl FnOnce(&mut MarkdownBuilder) -> Result<()>,
    ) -> Result<&mut Self> {
        self.quoted(f)?;
        self.line.complete_paragraph();
        Ok(self)
    }

    fn quoted<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.line.start_paragraph();
        self.with_blockquote(f)
    }

    /// Add a `---` horizontal rule as its own paragraph.
    pub fn horizontal_rule(&mut self) -> &mut Self {
        self.paragraph("---")
    }

    /// Add a fenced code block annotated with the resolved default
    /// language: the builder-level language if set, else the process-wide
    /// default, else nothing.
    pub fn code_block(&mut self, code: &str) -> &mut Self {
        let language = self.default_code_language();
        self.fenced(&language, |b| {
            b.add(code);
        })
    }

    /// Add a fenced code block annotated with `language`.
    ///
    /// ```rust
    /// # use markdown_builder::MarkdownBuilder;
    /// let mut md = MarkdownBuilder::new();
    /// md.code_block_in("rust", "fn main() {}");
    /// assert_eq!(md.as_str(), "```rust\nfn main() {}\n```\n");
    /// ```
    pub fn code_block_in(&mut self, language: &str, code: &str) -> &mut Self {
        self.fenced(language, |b| {
            b.add(code);
        })
    }

    /// Add a fenced code block annotated with a [`BlockLanguage`]
    /// identifier.
    pub fn code_block_for(&mut self, language: BlockLanguage, code: &str) -> &mut Self {
        self.code_block_in(language.identifier(), code)
    }

    /// Add a fenced code block whose body is built line by line.
    pub fn code_block_with(
        &mut self,
        language: &str,
        f: impl FnOnce(&mut CodeBlockBuilder),
    ) -> &mut Self {
        self.fenced(language, f)
    }

    fn fenced(&mut self, language: &str, f: impl FnOnce(&mut CodeBlockBuilder)) -> &mut Self {
        tracing::debug!(language, "code block");
        self.line.complete_paragraph();
        self.line.append("```");
        self.line.append(language);
        self.line.complete_line();
        let mut body = CodeBlockBuilder::new();
        f(&mut body);
        self.line.append(body.as_str());
        self.line.complete_paragraph();
        self.line.append("```");
        self.complete_line()
    }

    /// Add a table from rows of cell text; the first row becomes the
    /// header. No rows at all is a no-op.
    ///
    /// ```rust
    /// # use markdown_builder::MarkdownBuilder;
    /// let mut md = MarkdownBuilder::new();
    /// md.table([["Name", "Role"], ["Ada", "Engineer"]])?;
    /// assert_eq!(
    ///     md.as_str(),
    ///     "| Name | Role |\n|---|---|\n| Ada | Engineer |\n",
    /// );
    /// # Ok::<(), markdown_builder::MarkdownError>(())
    /// ```
    pub fn table<I, R, S>(&mut self, rows: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.table_with(|table| {
            let mut rows = rows.into_iter();
            if let Some(header) = rows.next() {
                table.header(header)?;
            }
            for row in rows {
                table.row(row);
            }
            Ok(())
        })
    }

    /// Add a table built through a [`TableBuilder`], which captures the
    /// current prefix so every row stays aligned inside nested blocks.
    /// Nothing is written if `f` fails.
    pub fn table_with(
        &mut self,
        f: impl FnOnce(&mut TableBuilder) -> Result<()>,
    ) -> Result<&mut Self> {
        tracing::debug!("table");
        self.line.complete_paragraph();
        let mut table = TableBuilder::new(self.line.prefixes.render());
        f(&mut table)?;
        let rendered = table.into_string();
        self.line.append(&rendered);
        Ok(self)
    }
}

fn validate_heading_level(level: u8) -> Result<()> {
    if !(1..=6).contains(&level) {
        return Err(MarkdownError::HeadingLevelOutOfRange(level));
    }
    Ok(())
}
