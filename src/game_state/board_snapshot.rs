//! Immutable board position snapshot.
//!
//! `BoardSnapshot` is the grid-of-cells model every consumer reads: 64
//! cells, rank-major with rank 1 at the bottom, each either empty or
//! holding a colored piece. The replay history is a sequence of these.

use crate::game_state::chess_rules::{back_rank, pawn_home_rank, BACK_RANK_ORDER};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::utils::algebraic::square_at;

/// One full board position. Cells are indexed by square (`0 == a1`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    cells: [Option<Piece>; 64],
}

impl BoardSnapshot {
    /// An empty board with no pieces placed.
    #[inline]
    pub const fn empty() -> Self {
        Self { cells: [None; 64] }
    }

    /// The standard starting arrangement: pawns on ranks 2 and 7, back
    /// ranks in `R N B Q K B N R` order.
    pub fn initial() -> Self {
        let mut board = Self::empty();

        for color in [Color::Light, Color::Dark] {
            for (file, kind) in BACK_RANK_ORDER.iter().enumerate() {
                board.set(
                    square_at(file as u8, back_rank(color)),
                    Some(Piece::new(color, *kind)),
                );
            }
            for file in 0..8 {
                board.set(
                    square_at(file, pawn_home_rank(color)),
                    Some(Piece::new(color, PieceKind::Pawn)),
                );
            }
        }

        board
    }

    /// Cell contents at a square index.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square as usize]
    }

    /// Cell contents at file/rank coordinates (`0..=7` each).
    #[inline]
    pub fn piece_at_coords(&self, file: u8, rank: u8) -> Option<Piece> {
        self.piece_at(square_at(file, rank))
    }

    /// Overwrite a cell. `None` clears it.
    #[inline]
    pub fn set(&mut self, square: Square, cell: Option<Piece>) {
        self.cells[square as usize] = cell;
    }

    /// True when the cell holds a piece of the given color and kind.
    #[inline]
    pub fn holds(&self, square: Square, color: Color, kind: PieceKind) -> bool {
        self.piece_at(square) == Some(Piece::new(color, kind))
    }
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::BoardSnapshot;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::utils::algebraic::parse_square;

    fn at(board: &BoardSnapshot, name: &str) -> Option<Piece> {
        board.piece_at(parse_square(name).expect("square name should parse"))
    }

    #[test]
    fn initial_position_back_ranks_and_pawns() {
        let board = BoardSnapshot::initial();

        assert_eq!(at(&board, "a1"), Some(Piece::new(Color::Light, PieceKind::Rook)));
        assert_eq!(at(&board, "b1"), Some(Piece::new(Color::Light, PieceKind::Knight)));
        assert_eq!(at(&board, "d1"), Some(Piece::new(Color::Light, PieceKind::Queen)));
        assert_eq!(at(&board, "e1"), Some(Piece::new(Color::Light, PieceKind::King)));
        assert_eq!(at(&board, "e8"), Some(Piece::new(Color::Dark, PieceKind::King)));
        assert_eq!(at(&board, "h8"), Some(Piece::new(Color::Dark, PieceKind::Rook)));

        for file in b'a'..=b'h' {
            let light_pawn = format!("{}2", file as char);
            let dark_pawn = format!("{}7", file as char);
            assert_eq!(
                at(&board, &light_pawn),
                Some(Piece::new(Color::Light, PieceKind::Pawn))
            );
            assert_eq!(
                at(&board, &dark_pawn),
                Some(Piece::new(Color::Dark, PieceKind::Pawn))
            );
        }

        for name in ["a3", "d4", "e5", "h6"] {
            assert_eq!(at(&board, name), None);
        }
    }

    #[test]
    fn set_and_clear_cells() {
        let mut board = BoardSnapshot::empty();
        let e4 = parse_square("e4").expect("e4 should parse");

        board.set(e4, Some(Piece::new(Color::Light, PieceKind::Pawn)));
        assert!(board.holds(e4, Color::Light, PieceKind::Pawn));

        board.set(e4, None);
        assert_eq!(board.piece_at(e4), None);
    }
}
