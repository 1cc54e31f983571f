use serde::Serialize;

use crate::lexer::Cell;

/// Decoded program grid
///
/// Rows keep their own lengths; any position outside a row reads as
/// [`Cell::Blank`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Codespace {
    /// Cells, row-major
    rows: Vec<Vec<Cell>>,
    /// Length of the longest row
    width: usize,
}

impl Codespace {
    /// Creates a codespace from already decoded rows
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        Codespace { rows, width }
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row
    pub fn width(&self) -> usize {
        self.width
    }

    /// Length of row `y`, 0 past the last row
    pub fn row_len(&self, y: usize) -> usize {
        self.rows.get(y).map_or(0, Vec::len)
    }

    /// Cell at column `x` of row `y`
    pub fn get(&self, x: i64, y: i64) -> Cell {
        if x < 0 || y < 0 {
            return Cell::Blank;
        }
        self.rows
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .unwrap_or_default()
    }

    /// All rows
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of complete (executable) cells
    pub fn instruction_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| cell.is_complete())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::decode_line;

    #[test]
    fn test_ragged_rows() {
        let codespace = Codespace::from_rows(vec![decode_line("가나다"), decode_line("라")]);
        assert_eq!(codespace.height(), 2);
        assert_eq!(codespace.width(), 3);
        assert_eq!(codespace.row_len(0), 3);
        assert_eq!(codespace.row_len(1), 1);
        assert_eq!(codespace.row_len(2), 0);
        assert_eq!(codespace.instruction_count(), 4);
    }

    #[test]
    fn test_out_of_bounds_is_blank() {
        let codespace = Codespace::from_rows(vec![decode_line("가나다"), decode_line("라")]);
        assert!(codespace.get(0, 1).is_complete());
        assert_eq!(codespace.get(1, 1), Cell::Blank);
        assert_eq!(codespace.get(3, 0), Cell::Blank);
        assert_eq!(codespace.get(0, 2), Cell::Blank);
        assert_eq!(codespace.get(-1, 0), Cell::Blank);
        assert_eq!(codespace.get(0, -2), Cell::Blank);
    }

    #[test]
    fn test_empty() {
        let codespace = Codespace::default();
        assert_eq!(codespace.width(), 0);
        assert_eq!(codespace.height(), 0);
        assert_eq!(codespace.get(0, 0), Cell::Blank);
    }
}
