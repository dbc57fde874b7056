//! Bishop origin resolution.
//!
//! Scans all four diagonals outward from the target square until a piece
//! is found or the board edge is reached. The queen resolver reuses the
//! same diagonal scan.

use crate::errors::InterpretError;
use crate::game_state::board_snapshot::BoardSnapshot;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::move_resolution::resolve_shared::{no_origin, scan_lines, ResolvedMove};
use crate::notation::syntax_node::PieceMove;

/// Diagonal scan order: southwest, southeast, northwest, northeast.
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// First diagonal candidate of the given kind with a clear path to the
/// target. Shared with queen resolution.
pub fn diagonal_origin(
    board: &BoardSnapshot,
    side: Color,
    kind: PieceKind,
    half_move: &PieceMove,
) -> Option<Square> {
    scan_lines(board, side, kind, half_move, &DIAGONAL_DIRECTIONS)
}

pub fn resolve_bishop_move(
    board: &BoardSnapshot,
    side: Color,
    half_move: &PieceMove,
) -> Result<ResolvedMove, InterpretError> {
    diagonal_origin(board, side, PieceKind::Bishop, half_move)
        .map(|from| ResolvedMove::plain(from, half_move.target))
        .ok_or_else(|| no_origin(side, half_move))
}
