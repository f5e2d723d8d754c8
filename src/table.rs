use crate::error::{MarkdownError, Result};
use crate::inline::InlineBuilder;
use crate::paragraph::LINE_BREAK;

/// Horizontal alignment recorded for a table column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellAlignment {
    /// `:---` — left-aligned.
    Left,
    /// `:---:` — centered.
    Center,
    /// `---:` — right-aligned.
    Right,
}

fn alignment_marker(alignment: Option<CellAlignment>) -> &'static str {
    match alignment {
        Some(CellAlignment::Left) => ":---",
        Some(CellAlignment::Center) => ":---:",
        Some(CellAlignment::Right) => "---:",
        None => "---",
    }
}

/// Builds one table: a mandatory header defined at most once, followed by
/// any number of body rows.
///
/// Rows start with the prefix captured from the enclosing builder, so a
/// table inside a block quote or list item stays aligned with its
/// surroundings.
#[derive(Debug)]
pub struct TableBuilder {
    prefix: String,
    out: String,
    alignments: Vec<Option<CellAlignment>>,
    has_header: bool,
}

impl TableBuilder {
    pub(crate) fn new(prefix: String) -> Self {
        Self {
            prefix,
            out: String::new(),
            alignments: Vec::new(),
            has_header: false,
        }
    }

    /// Define the header row with default-aligned columns.
    ///
    /// Fails with [`MarkdownError::TableHeaderAlreadyDefined`] on a second
    /// call.
    pub fn header<I, S>(&mut self, columns: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.header_with(|header| {
            for column in columns {
                header.column(column.as_ref());
            }
        })
    }

    /// Define the header row through a header builder, which records each
    /// column's alignment. Emits the header row and the alignment row
    /// immediately.
    ///
    /// Fails with [`MarkdownError::TableHeaderAlreadyDefined`] on a second
    /// call.
    pub fn header_with(&mut self, f: impl FnOnce(&mut TableHeaderBuilder<'_>)) -> Result<&mut Self> {
        if self.has_header {
            return Err(MarkdownError::TableHeaderAlreadyDefined);
        }
        self.has_header = true;
        f(&mut TableHeaderBuilder { table: self });
        self.out.push_str(LINE_BREAK);
        self.out.push_str(&self.prefix);
        self.out.push('|');
        for alignment in &self.alignments {
            self.out.push_str(alignment_marker(*alignment));
            self.out.push('|');
        }
        self.out.push_str(LINE_BREAK);
        Ok(self)
    }

    /// Add a body row from plain cell texts.
    pub fn row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.row_with(|row| {
            for cell in cells {
                row.cell(cell.as_ref());
            }
        })
    }

    /// Add a body row through a row builder.
    pub fn row_with(&mut self, f: impl FnOnce(&mut TableRowBuilder<'_>)) -> &mut Self {
        self.out.push_str(&self.prefix);
        f(&mut TableRowBuilder {
            table: self,
            cells: 0,
        });
        self.out.push_str(LINE_BREAK);
        self
    }

    pub(crate) fn into_string(self) -> String {
        self.out
    }
}

/// Adds columns to a table header.
#[derive(Debug)]
pub struct TableHeaderBuilder<'a> {
    table: &'a mut TableBuilder,
}

impl TableHeaderBuilder<'_> {
    /// Add a column with no recorded alignment.
    pub fn column(&mut self, content: &str) -> &mut Self {
        self.column_with(None, |b| {
            b.add(content);
        })
    }

    /// Add a column with an explicit alignment.
    pub fn column_aligned(&mut self, content: &str, alignment: CellAlignment) -> &mut Self {
        self.column_with(Some(alignment), |b| {
            b.add(content);
        })
    }

    /// Add a column whose content is built by `f`.
    pub fn column_with(
        &mut self,
        alignment: Option<CellAlignment>,
        f: impl FnOnce(&mut InlineBuilder),
    ) -> &mut Self {
        self.table.alignments.push(alignment);
        if self.table.out.is_empty() {
            self.table.out.push_str(&self.table.prefix);
            self.table.out.push('|');
        }
        let mut content = InlineBuilder::new();
        f(&mut content);
        self.table.out.push(' ');
        self.table.out.push_str(content.as_str());
        self.table.out.push_str(" |");
        self
    }
}

/// Adds cells to one table body row.
#[derive(Debug)]
pub struct TableRowBuilder<'a> {
    table: &'a mut TableBuilder,
    cells: usize,
}

impl TableRowBuilder<'_> {
    /// Add a plain text cell.
    pub fn cell(&mut self, content: &str) -> &mut Self {
        self.cell_with(|b| {
            b.add(content);
        })
    }

    /// Add a cell whose content is built by `f`.
    pub fn cell_with(&mut self, f: impl FnOnce(&mut InlineBuilder)) -> &mut Self {
        if self.cells == 0 {
            self.table.out.push('|');
        }
        let mut content = InlineBuilder::new();
        f(&mut content);
        self.table.out.push(' ');
        self.table.out.push_str(content.as_str());
        self.table.out.push_str(" |");
        self.cells += 1;
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn header_emits_alignment_row() {
        let mut table = TableBuilder::new(String::new());
        table
            .header_with(|header| {
                header
                    .column_aligned("Left", CellAlignment::Left)
                    .column_aligned("Center", CellAlignment::Center)
                    .column_aligned("Right", CellAlignment::Right)
                    .column("Default");
            })
            .unwrap();
        assert_eq!(
            table.into_string(),
            "| Left | Center | Right | Default |\n|:---|:---:|---:|---|\n"
        );
    }

    #[test]
    fn second_header_definition_fails() {
        let mut table = TableBuilder::new(String::new());
        table.header(["A"]).unwrap();
        assert_eq!(
            table.header(["B"]).unwrap_err(),
            MarkdownError::TableHeaderAlreadyDefined
        );
    }

    #[test]
    fn body_rows_are_pipe_delimited() {
        let mut table = TableBuilder::new(String::new());
        table.header(["Name", "Role"]).unwrap();
        table.row(["Ada", "Engineer"]).row(["Grace", "Admiral"]);
        assert_eq!(
            table.into_string(),
            "| Name | Role |\n|---|---|\n| Ada | Engineer |\n| Grace | Admiral |\n"
        );
    }

    #[test]
    fn rows_start_with_the_captured_prefix() {
        let mut table = TableBuilder::new("> ".to_string());
        table.header(["H"]).unwrap();
        table.row(["b"]);
        assert_eq!(table.into_string(), "> | H |\n> |---|\n> | b |\n");
    }

    #[test]
    fn cells_can_hold_inline_styling() {
        let mut table = TableBuilder::new(String::new());
        table.header(["Col"]).unwrap();
        table.row_with(|row| {
            row.cell_with(|cell| {
                cell.bold("strong");
            });
        });
        assert_eq!(table.into_string(), "| Col |\n|---|\n| **strong** |\n");
    }
}
