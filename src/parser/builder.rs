use serde::Serialize;
use tracing::debug;

use super::codespace::Codespace;
use crate::lexer::{decode, decode_line, Cell};

/// How characters of a source row map to grid columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ColumnAddressing {
    /// One character, one column
    #[default]
    PerCharacter,
    /// Compatibility mode: the column is the character's UTF-8 byte offset
    /// divided by 3, and a row has `byte_len / 3` columns.
    ///
    /// Pure-Hangul rows come out identical to [`ColumnAddressing::PerCharacter`]
    /// since every syllable encodes to 3 bytes. Rows mixing in narrower
    /// characters collapse, later characters overwriting earlier ones.
    LegacyByteOffset,
}

/// Options for building a codespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CodespaceOptions {
    /// Column mapping strategy
    pub column_addressing: ColumnAddressing,
}

/// Builds a [`Codespace`] from source text
#[derive(Debug, Clone, Default)]
pub struct CodespaceBuilder {
    options: CodespaceOptions,
}

impl CodespaceBuilder {
    /// Creates a builder with default options
    pub fn new() -> Self {
        CodespaceBuilder::default()
    }

    /// Creates a builder with custom options
    pub fn with_options(options: CodespaceOptions) -> Self {
        CodespaceBuilder { options }
    }

    /// Decodes `source` into a grid, one row per line
    pub fn build(&self, source: &str) -> Codespace {
        let rows: Vec<Vec<Cell>> = sanitize(source)
            .split('\n')
            .map(|line| match self.options.column_addressing {
                ColumnAddressing::PerCharacter => decode_line(line),
                ColumnAddressing::LegacyByteOffset => decode_line_by_byte_offset(line),
            })
            .collect();

        let codespace = Codespace::from_rows(rows);
        debug!(
            rows = codespace.height(),
            width = codespace.width(),
            instructions = codespace.instruction_count(),
            addressing = ?self.options.column_addressing,
            "built codespace"
        );
        codespace
    }
}

/// Drops one trailing newline, then surrounding spaces
fn sanitize(source: &str) -> &str {
    source
        .strip_suffix('\n')
        .unwrap_or(source)
        .trim_matches(' ')
}

fn decode_line_by_byte_offset(line: &str) -> Vec<Cell> {
    let mut cells = vec![Cell::Blank; line.len() / 3];
    for (offset, c) in line.char_indices() {
        if let Some(cell) = cells.get_mut(offset / 3) {
            *cell = decode(c);
        }
    }
    cells
}
