use serde::{Deserialize, Serialize};

use crate::{
    error::BoardError,
    utils::letters::{is_single_letter, normalize},
};

/// A cell coordinate on the board, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The neighboring position one step along `axis`, towards the start (left/up)
    /// or the end (right/down) of the line. Does not check the upper board bound.
    pub fn step(self, axis: Axis, forward: bool) -> Option<Position> {
        match (axis, forward) {
            (Axis::Horizontal, false) => self.col.checked_sub(1).map(|col| Position { col, ..self }),
            (Axis::Horizontal, true) => Some(Position { col: self.col + 1, ..self }),
            (Axis::Vertical, false) => self.row.checked_sub(1).map(|row| Position { row, ..self }),
            (Axis::Vertical, true) => Some(Position { row: self.row + 1, ..self }),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Direction of a line of letters on the board
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];
}

/// Read/write access to a square grid of letters.
///
/// The word extractor only needs `size` and `letter`; session handling also writes
/// and clears cells. Implementors ignore writes outside the board.
pub trait LetterGrid {
    fn size(&self) -> usize;

    /// The letter at `pos`, or `None` when the cell is empty or off the board
    fn letter(&self, pos: Position) -> Option<&str>;

    /// Write a letter, returning whatever occupied the cell before
    fn set_letter(&mut self, pos: Position, letter: &str) -> Option<String>;

    /// Empty a cell, returning its previous letter
    fn clear(&mut self, pos: Position) -> Option<String>;

    fn contains(&self, pos: Position) -> bool {
        pos.row < self.size() && pos.col < self.size()
    }

    fn is_empty_at(&self, pos: Position) -> bool {
        self.letter(pos).is_none()
    }

    /// Orthogonal neighbors of `pos` that lie on the board
    fn neighbors(&self, pos: Position) -> Vec<Position> {
        Axis::ALL
            .iter()
            .flat_map(|&axis| [pos.step(axis, false), pos.step(axis, true)])
            .flatten()
            .filter(|p| self.contains(*p))
            .collect()
    }
}

/// The N×N playing board. Letters are stored normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Option<String>>>", into = "Vec<Vec<Option<String>>>")]
pub struct Board {
    size: usize,
    cells: Vec<Option<String>>,
}

impl Board {
    /// Create an empty board of `size` × `size` cells
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Build a board from rows of letters, using `'.'` for empty cells.
    /// Rows are read as sequences of Unicode scalar values.
    #[cfg(test)]
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardError> {
        let rows = rows
            .iter()
            .map(|row| {
                row.chars()
                    .map(|ch| (ch != '.').then(|| ch.to_string()))
                    .collect()
            })
            .collect::<Vec<Vec<_>>>();
        Self::try_from(rows)
    }

    /// Number of occupied cells
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn rows(&self) -> Vec<Vec<Option<String>>> {
        self.cells.chunks(self.size.max(1)).map(<[_]>::to_vec).collect()
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.size + pos.col)
    }
}

impl LetterGrid for Board {
    fn size(&self) -> usize {
        self.size
    }

    fn letter(&self, pos: Position) -> Option<&str> {
        self.index(pos)
            .and_then(|idx| self.cells[idx].as_deref())
    }

    fn set_letter(&mut self, pos: Position, letter: &str) -> Option<String> {
        let idx = self.index(pos)?;
        let letter = normalize(letter);
        if letter.is_empty() {
            return self.cells[idx].take();
        }
        self.cells[idx].replace(letter)
    }

    fn clear(&mut self, pos: Position) -> Option<String> {
        let idx = self.index(pos)?;
        self.cells[idx].take()
    }
}

impl TryFrom<Vec<Vec<Option<String>>>> for Board {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<Option<String>>>) -> Result<Self, Self::Error> {
        let size = rows.len();
        if size == 0 {
            return Err(BoardError::Empty);
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, cols) in rows.into_iter().enumerate() {
            if cols.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    len: cols.len(),
                    size,
                });
            }
            for (col, cell) in cols.into_iter().enumerate() {
                let letter = cell
                    .map(|letter| normalize(letter.trim()))
                    .filter(|letter| !letter.is_empty());
                if letter.as_deref().is_some_and(|l| !is_single_letter(l)) {
                    return Err(BoardError::NotALetter { row, col });
                }
                cells.push(letter);
            }
        }

        Ok(Self { size, cells })
    }
}

impl From<Board> for Vec<Vec<Option<String>>> {
    fn from(board: Board) -> Self {
        board.rows()
    }
}

/// Positions that received a tile during the current, unconfirmed turn.
///
/// Keeps insertion order so word extraction reports words in the order the
/// player placed tiles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Position>", into = "Vec<Position>")]
pub struct NewlyPlaced(Vec<Position>);

impl NewlyPlaced {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the position was already recorded
    pub fn insert(&mut self, pos: Position) -> bool {
        if self.contains(pos) {
            return false;
        }
        self.0.push(pos);
        true
    }

    pub fn remove(&mut self, pos: Position) -> bool {
        let before = self.0.len();
        self.0.retain(|p| *p != pos);
        self.0.len() != before
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Position> for NewlyPlaced {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut placed = Self::new();
        for pos in iter {
            placed.insert(pos);
        }
        placed
    }
}

impl From<Vec<Position>> for NewlyPlaced {
    fn from(positions: Vec<Position>) -> Self {
        positions.into_iter().collect()
    }
}

impl From<NewlyPlaced> for Vec<Position> {
    fn from(placed: NewlyPlaced) -> Self {
        placed.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_from_rows() {
        let board = Board::from_rows(&["kw.", "...", "..ɔ"]).unwrap();
        assert_eq!(board.size(), 3);
        assert_eq!(board.letter(Position::new(0, 0)), Some("k"));
        assert_eq!(board.letter(Position::new(0, 1)), Some("w"));
        assert_eq!(board.letter(Position::new(2, 2)), Some("ɔ"));
        assert!(board.is_empty_at(Position::new(1, 1)));
        assert_eq!(board.tile_count(), 3);
    }

    #[test]
    fn test_board_rejects_non_square_rows() {
        assert!(matches!(
            Board::from_rows(&["ab", "c"]),
            Err(BoardError::NotSquare { row: 1, len: 1, size: 2 })
        ));
        assert!(matches!(Board::from_rows(&[]), Err(BoardError::Empty)));
    }

    #[test]
    fn test_board_rejects_multi_letter_cells() {
        let rows = vec![
            vec![Some("kwa".to_string()), Some("n".to_string())],
            vec![None, None],
        ];
        assert_eq!(
            Board::try_from(rows),
            Err(BoardError::NotALetter { row: 0, col: 0 })
        );

        // A letter with a combining tone mark is still one letter
        let rows = vec![
            vec![Some("\u{025b}\u{0301}".to_string()), Some("n".to_string())],
            vec![None, None],
        ];
        let board = Board::try_from(rows).unwrap();
        assert_eq!(board.tile_count(), 2);
    }

    #[test]
    fn test_set_letter_normalizes_and_returns_previous() {
        let mut board = Board::new(2);
        let pos = Position::new(1, 0);
        assert_eq!(board.set_letter(pos, "Ɛ"), None);
        assert_eq!(board.letter(pos), Some("ɛ"));
        assert_eq!(board.set_letter(pos, "A"), Some("ɛ".to_string()));
        assert_eq!(board.clear(pos), Some("a".to_string()));
        assert!(board.is_empty_at(pos));
    }

    #[test]
    fn test_writes_outside_board_are_ignored() {
        let mut board = Board::new(2);
        let outside = Position::new(2, 0);
        assert_eq!(board.set_letter(outside, "a"), None);
        assert_eq!(board.letter(outside), None);
        assert_eq!(board.tile_count(), 0);
    }

    #[test]
    fn test_neighbors_stay_on_board() {
        let board = Board::new(3);
        let corner = board.neighbors(Position::new(0, 0));
        assert_eq!(corner, vec![Position::new(0, 1), Position::new(1, 0)]);

        let center = board.neighbors(Position::new(1, 1));
        assert_eq!(center.len(), 4);
    }

    #[test]
    fn test_board_json_shape() {
        let board = Board::from_rows(&["a.", ".b"]).unwrap();
        let json = serde_json::to_value(&board).unwrap();
        assert_eq!(json, serde_json::json!([["a", null], [null, "b"]]));

        let back: Board = serde_json::from_value(json).unwrap();
        assert_eq!(back, board);

        let blank_cells: Board = serde_json::from_str(r#"[["", " "], ["A", null]]"#).unwrap();
        assert_eq!(blank_cells.tile_count(), 1);
        assert_eq!(blank_cells.letter(Position::new(1, 0)), Some("a"));
    }

    #[test]
    fn test_newly_placed_keeps_order_and_uniqueness() {
        let mut placed = NewlyPlaced::new();
        assert!(placed.insert(Position::new(0, 2)));
        assert!(placed.insert(Position::new(0, 0)));
        assert!(!placed.insert(Position::new(0, 2)));
        assert_eq!(
            placed.iter().collect::<Vec<_>>(),
            vec![Position::new(0, 2), Position::new(0, 0)]
        );

        assert!(placed.remove(Position::new(0, 2)));
        assert!(!placed.remove(Position::new(0, 2)));
        assert_eq!(placed.len(), 1);

        let from_json: NewlyPlaced =
            serde_json::from_str(r#"[{"row":1,"col":1},{"row":1,"col":1}]"#).unwrap();
        assert_eq!(from_json.len(), 1);
    }
}
